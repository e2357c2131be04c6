//! Hotseat - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use hotseat::{Cli, Command, GameConfig, TextSurface};
use hotseat_tictactoe::GameEngine;
use std::io::{self, BufReader};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = GameConfig::load_or_default(&cli.config)
        .context("Failed to load configuration")?
        .with_overrides(cli.player1, cli.player2);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Script { file } => run_script(&config, file),
    }
}

/// Run the interactive terminal game
fn run_play(config: &GameConfig) -> Result<()> {
    hotseat::init_file_logging(config)?;
    hotseat::tui::run_tui(config)
}

/// Run a move script, printing to stdout
#[instrument(skip(config))]
fn run_script(config: &GameConfig, file: Option<std::path::PathBuf>) -> Result<()> {
    hotseat::init_stderr_logging(config);

    let mut engine = GameEngine::with_players(
        config.players().one().clone(),
        config.players().two().clone(),
    );
    let mut surface = TextSurface::new(io::stdout().lock());

    match file {
        Some(path) => {
            info!(path = %path.display(), "Reading script file");
            let file = std::fs::File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            hotseat::run_script(BufReader::new(file), &mut engine, &mut surface)
        }
        None => {
            info!("Reading script from stdin");
            hotseat::run_script(io::stdin().lock(), &mut engine, &mut surface)
        }
    }
}
