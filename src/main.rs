//! Strictly Hangman - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::path::Path;
use std::sync::Arc;
use strictly_hangman_tui::{GameConfig, GameController, TerminalFrontend, WordPool};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(&cli.log_file)?;

    let config = cli.apply(GameConfig::load_or_default(&cli.config)?);
    let pool = WordPool::load(config.word_list())
        .with_context(|| format!("Cannot start a round without words in {}", config.word_list().display()))?;

    run_game(pool, &config)
}

/// Runs the game on the real terminal.
#[instrument(skip_all, fields(words = pool.len()))]
fn run_game(pool: WordPool, config: &GameConfig) -> Result<()> {
    info!("Starting Strictly Hangman");

    let mut frontend = TerminalFrontend::new(config.word_list())?;
    let end = GameController::new(pool, config).run(&mut frontend);

    // Give the terminal back before anything is printed.
    drop(frontend);

    let end = end?;
    info!(?end, "Goodbye");
    Ok(())
}

/// Logs to a file so output does not interfere with the TUI.
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
