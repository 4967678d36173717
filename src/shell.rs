//! Interactive shell adapter
//!
//! Stands in for a chat transport: reads one message per line from stdin and
//! prints the bot's reply lines. A real embedding would deliver messages
//! from its own router and send replies through its own transport; the store
//! and bot underneath are the same either way.

use anyhow::Result;
use tokio::io::{self, AsyncBufReadExt, BufReader};

use crate::bot::Bot;
use crate::brain::FileBrain;
use crate::cli::resolve_caller;
use crate::config;
use crate::identity::Roster;
use crate::task::TaskStore;

pub async fn run(profile: &str, user: Option<String>) -> Result<()> {
    let cfg = config::load_config()?;
    let caller = resolve_caller(user, &cfg);

    let brain = FileBrain::open(profile)?;
    let profile_name = brain.profile().to_string();

    let store = TaskStore::new(Box::new(brain));
    let mut bot = Bot::new(store, Roster::new(cfg.roster));

    println!(
        "taskbot shell - talking as {} (profile: {}). Try 'task help'. Ctrl-D quits.",
        caller, profile_name
    );

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        for reply in bot.handle(&caller, line) {
            println!("{}", reply);
        }
    }

    Ok(())
}
