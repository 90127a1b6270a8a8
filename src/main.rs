//! Tic-tac-toe board - CLI entry point

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use tictactoe_board::{BoardView, GameState, Settings, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // The subscriber needs the settings, so loading happens before it exists.
    let settings = Settings::load(cli.config.as_deref())?;
    let command = cli.command.unwrap_or(Command::Tui);

    match command {
        Command::Tui => init_file_tracing(&settings)?,
        Command::Play { .. } => init_stderr_tracing(&settings),
    }
    info!(
        config = ?cli.config,
        log_file = %settings.log_file().display(),
        log_filter = %settings.log_filter(),
        theme = ?settings.theme(),
        "Settings resolved"
    );

    match command {
        Command::Tui => run_tui(&settings),
        Command::Play { moves, json } => play(&moves, json),
    }
}

/// Logs go to a file so they do not interfere with the TUI.
fn init_file_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_tracing(settings: &Settings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .try_init();
}

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Replays `moves` through the silent controller and prints the result.
#[instrument]
fn play(moves: &[usize], json: bool) -> Result<()> {
    let mut game = GameState::new();
    let accepted = moves.iter().filter(|&&index| game.apply_move(index)).count();
    info!(accepted, ignored = moves.len() - accepted, "Moves replayed");

    let view = BoardView::from_state(&game);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", game.board());
        println!("{}", view.status);
    }
    Ok(())
}
