//! One-shot message dispatch

use anyhow::Result;

use super::definition::SendArgs;
use super::resolve_caller;
use crate::bot::Bot;
use crate::brain::FileBrain;
use crate::config;
use crate::identity::Roster;
use crate::task::TaskStore;

pub async fn run(profile: &str, args: SendArgs) -> Result<()> {
    let cfg = config::load_config()?;
    let caller = resolve_caller(args.user, &cfg);
    let message = args.message.join(" ");

    let brain = FileBrain::open(profile)?;
    let store = TaskStore::new(Box::new(brain));
    let mut bot = Bot::new(store, Roster::new(cfg.roster));

    let replies = bot.handle(&caller, &message);

    // In chat an unmatched message is ignored; on the command line that
    // silence would look like a hang, so point at the help instead.
    if replies.is_empty() {
        println!("Not a task command. Try: taskbot send \"task help\"");
        return Ok(());
    }

    for reply in replies {
        println!("{}", reply);
    }
    Ok(())
}
