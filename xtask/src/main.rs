//! xtask - Development tasks for taskbot

use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for taskbot")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CLI and chat-command documentation
    GenDocs,
}

fn main() {
    let args = Xtask::parse();
    match args.command {
        Commands::GenDocs => generate_docs(),
    }
}

fn generate_docs() {
    let docs_dir = Path::new("docs");
    fs::create_dir_all(docs_dir.join("cli")).expect("Failed to create docs/cli directory");

    let markdown = clap_markdown::help_markdown::<taskbot::cli::Cli>();
    let cli_path = docs_dir.join("cli").join("reference.md");
    fs::write(&cli_path, markdown).expect("Failed to write CLI reference");
    println!("Generated CLI reference at {}", cli_path.display());

    // The chat surface doc comes straight from the bot's own help text, so
    // it can't drift from what `task help` prints.
    let mut chat = String::from("# Chat commands\n\n");
    for line in taskbot::bot::replies::help() {
        chat.push_str("- `");
        let (command, description) = line.split_once(" - ").unwrap_or((line.as_str(), ""));
        chat.push_str(command);
        chat.push_str("` - ");
        chat.push_str(description);
        chat.push('\n');
    }
    let chat_path = docs_dir.join("chat-commands.md");
    fs::write(&chat_path, chat).expect("Failed to write chat command reference");
    println!("Generated chat command reference at {}", chat_path.display());
}
