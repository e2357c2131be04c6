//! Hotseat - two players, one keyboard, one tic-tac-toe board.
//!
//! # Architecture
//!
//! - **Engine**: game state from [`hotseat_tictactoe`]
//! - **TUI**: interactive terminal surface (ratatui + crossterm)
//! - **Text**: plain-text surface driven by a move script
//! - **Config**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```
//! use hotseat::{TextSurface, run_script};
//! use hotseat_tictactoe::GameEngine;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut engine = GameEngine::new();
//! let mut surface = TextSurface::new(Vec::new());
//! run_script("play 0\nplay 3\nplay 1\nplay 4\nplay 2\n".as_bytes(), &mut engine, &mut surface)?;
//! assert_eq!(surface.result(), Some("Player 1 wins!"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod error;
mod logging;
mod text;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{DEFAULT_CONFIG_FILE, GameConfig, LoggingConfig, PlayersConfig};
pub use error::{ConfigError, ScriptError, SurfaceError};
pub use logging::{init_file_logging, init_stderr_logging};
pub use text::{ScriptCommand, TextSurface, apply_command, format_board, run_script};
