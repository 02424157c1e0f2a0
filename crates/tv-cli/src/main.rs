//! CLI frontend for the Thornvale adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "thornvale",
    about = "Thornvale — a text adventure engine with bundled stories",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a bundled story interactively
    Play {
        /// Story to play (see `thornvale stories`)
        #[arg(default_value = "castle")]
        story: String,

        /// Read commands from a file instead of stdin
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Write the command history to a file on exit
        #[arg(short, long)]
        transcript: Option<PathBuf>,

        /// Hide the per-item command hints in location descriptions
        #[arg(long)]
        no_hints: bool,
    },

    /// List the bundled stories
    Stories,

    /// Show a story's map: locations, exits, blocks, and items
    Map {
        /// Story to map
        #[arg(default_value = "castle")]
        story: String,
    },

    /// Export a story's world as JSON
    Export {
        /// Story to export
        #[arg(default_value = "castle")]
        story: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            story,
            script,
            transcript,
            no_hints,
        } => commands::play::run(&story, script.as_deref(), transcript.as_deref(), no_hints),
        Commands::Stories => commands::stories::run(),
        Commands::Map { story } => commands::map::run(&story),
        Commands::Export { story, output } => commands::export::run(&story, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
