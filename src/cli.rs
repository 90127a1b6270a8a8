//! Command-line interface for tictactoe_board.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe board - play in the terminal or replay moves headlessly
#[derive(Parser, Debug)]
#[command(name = "tictactoe_board")]
#[command(about = "Interactive tic-tac-toe board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./tictactoe_board.toml if present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play on the interactive terminal board
    Tui,

    /// Apply cell indices (0-8) in order and print the result
    ///
    /// Illegal moves are skipped, exactly as clicks on the board would be.
    Play {
        /// Cell indices, alternating X and O starting with X
        moves: Vec<usize>,

        /// Print the board view as JSON
        #[arg(long)]
        json: bool,
    },
}
