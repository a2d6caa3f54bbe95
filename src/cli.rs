//! Command-line interface for the tic-tac-toe widget.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe widget with a terminal UI and a synthesized victory chime
#[derive(Parser, Debug)]
#[command(name = "tictactoe_widget")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true, env = "TICTACTOE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Apply a sequence of moves and print the result
    Replay {
        /// Cell indices (0-8), comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the victory tone to a WAV file
    Tone {
        /// Output file
        #[arg(long, default_value = "victory.wav")]
        out: PathBuf,
    },
}
