//! Roster management commands

use anyhow::Result;

use super::definition::RosterCommands;
use crate::config;

pub async fn run(command: RosterCommands) -> Result<()> {
    match command {
        RosterCommands::List => {
            let cfg = config::load_config()?;
            if cfg.roster.is_empty() {
                println!("Roster is empty. Add users with: taskbot roster add <name>");
                return Ok(());
            }
            for name in &cfg.roster {
                println!("{}", name);
            }
            Ok(())
        }
        RosterCommands::Add { name } => {
            let mut cfg = config::load_config()?;
            if cfg.roster.iter().any(|u| u.eq_ignore_ascii_case(&name)) {
                println!("{} is already on the roster", name);
                return Ok(());
            }
            cfg.roster.push(name.clone());
            cfg.roster.sort();
            config::save_config(&cfg)?;
            println!("Added {}", name);
            Ok(())
        }
        RosterCommands::Remove { name } => {
            let mut cfg = config::load_config()?;
            let before = cfg.roster.len();
            cfg.roster.retain(|u| !u.eq_ignore_ascii_case(&name));
            if cfg.roster.len() == before {
                println!("{} is not on the roster", name);
                return Ok(());
            }
            config::save_config(&cfg)?;
            println!("Removed {}", name);
            Ok(())
        }
    }
}
