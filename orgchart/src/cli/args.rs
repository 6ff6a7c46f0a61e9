//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Organization chart reorganizer: move employees between supervisors with undo/redo
#[derive(Parser, Debug)]
#[command(name = "orgchart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Raise log level (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(long, global = true, env = "ORGCHART_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the chart of a roster file
    Show {
        /// Roster file (default: configured roster)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: Option<PathBuf>,
    },

    /// Apply an operation script to a roster and print the result
    Run {
        /// Operation script (move/undo/redo/add, one per line)
        #[arg(value_hint = ValueHint::FilePath)]
        script: PathBuf,
        /// Roster file (default: configured roster)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        roster: Option<PathBuf>,
        /// Print the chart after every operation
        #[arg(long)]
        steps: bool,
        /// Print the resulting chart as roster TOML instead of a tree
        #[arg(long)]
        export: bool,
    },

    /// Walk through move, undo and redo on the built-in sample chart
    Demo,

    /// Print effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
