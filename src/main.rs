//! Taskbot - personal to-do lists over chat commands

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskbot::cli::{self, Cli, Commands};
use taskbot::shell;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("TASKBOT_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskbot=debug")
            .init();
    }

    let cli = Cli::parse();

    // Completion works without config or data directories.
    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "taskbot", &mut std::io::stdout());
        return Ok(());
    }

    let profile = cli.profile.unwrap_or_default();

    match cli.command {
        Some(Commands::Send(args)) => cli::send::run(&profile, args).await,
        Some(Commands::Roster { command }) => cli::roster::run(command).await,
        Some(Commands::Shell(args)) => shell::run(&profile, args.user).await,
        None => shell::run(&profile, None).await,
        _ => unreachable!(),
    }
}
