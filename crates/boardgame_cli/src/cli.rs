//! Command-line interface for the board game engine.

use clap::{Parser, Subcommand};

/// Board game rules engine
#[derive(Parser, Debug)]
#[command(name = "boardgame")]
#[command(about = "Validate and apply moves for stored board game states", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with extra variants
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered variants
    Variants,

    /// Print the state a new game starts from
    New {
        /// Variant name
        #[arg(short, long)]
        variant: String,
    },

    /// Apply a move and print the resulting state and outcome
    Move {
        /// Variant name
        #[arg(short, long)]
        variant: String,

        /// Encoded state the move is played on
        #[arg(short, long)]
        state: String,

        /// Move payload as JSON, e.g. `4` or `[[49, 42]]`
        #[arg(short, long = "move")]
        payload: String,
    },

    /// List legal moves for the team to move
    Moves {
        /// Variant name
        #[arg(short, long)]
        variant: String,

        /// Encoded state
        #[arg(short, long)]
        state: String,
    },
}
