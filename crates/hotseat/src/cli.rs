//! Command-line interface for hotseat.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Hotseat - two-player tic-tac-toe on one keyboard
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Name for Player 1 (X), overrides the config file
    #[arg(long)]
    pub player1: Option<String>,

    /// Name for Player 2 (O), overrides the config file
    #[arg(long)]
    pub player2: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI (default)
    Play,

    /// Run a move script and print the board as text
    Script {
        /// Script file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_command() {
        let cli = Cli::try_parse_from(["hotseat"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn test_script_with_names() {
        let cli = Cli::try_parse_from([
            "hotseat",
            "--player1",
            "Ann",
            "script",
            "moves.txt",
        ])
        .unwrap();
        assert_eq!(cli.player1.as_deref(), Some("Ann"));
        assert_eq!(
            cli.command,
            Some(Command::Script {
                file: Some(PathBuf::from("moves.txt"))
            })
        );
    }
}
