//! CLI definition

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "taskbot")]
#[command(about = "Personal to-do lists over chat commands", version)]
pub struct Cli {
    /// Data profile to use (each profile has its own task book)
    #[arg(long, global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive shell adapter (default)
    Shell(ShellArgs),

    /// Dispatch a single message and print the replies
    Send(SendArgs),

    /// Manage the roster of known users
    Roster {
        #[command(subcommand)]
        command: RosterCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args, Default)]
pub struct ShellArgs {
    /// Caller identity for messages typed into the shell
    #[arg(short, long)]
    pub user: Option<String>,
}

#[derive(Args)]
pub struct SendArgs {
    /// Caller identity for the message
    #[arg(short, long)]
    pub user: Option<String>,

    /// The message, e.g. "task me buy milk"
    #[arg(required = true, trailing_var_arg = true)]
    pub message: Vec<String>,
}

#[derive(Subcommand)]
pub enum RosterCommands {
    /// List known users
    List,

    /// Add a user to the roster
    Add {
        /// User name, without the @
        name: String,
    },

    /// Remove a user from the roster
    Remove {
        /// User name, without the @
        name: String,
    },
}
