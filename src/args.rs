use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notz")]
#[command(about = "A tiny sticky-note board for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use an alternate board directory
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Skip confirmation prompts
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note to the board
    #[command(alias = "a")]
    Add {
        /// Note text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List notes (the default)
    #[command(alias = "ls")]
    List {
        /// Only show notes containing this term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Replace a note's text
    #[command(alias = "e")]
    Edit {
        /// Board position of the note (1-based)
        position: usize,

        /// New text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Board position of the note (1-based)
        position: usize,
    },

    /// Move a note to a new spot on the board
    #[command(alias = "mv")]
    Move {
        /// Board position of the note to move (1-based)
        position: usize,

        /// Position to move in front of (omit to move to the end)
        #[arg(short, long)]
        before: Option<usize>,
    },

    /// Search notes (dedicated command)
    Search { term: String },

    /// Export the board to a plain-text file in the current directory
    Export,

    /// Remove every note from the board
    Clear,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., export-prefix)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
