//! Error types for the hotseat front ends.

use derive_more::{Display, Error};
use tracing::instrument;

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// The terminal surface could not be set up, so the game never starts.
#[derive(Debug, Clone, Display, Error)]
#[display("Display surface unavailable: {} at {}:{}", message, file, line)]
pub struct SurfaceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SurfaceError {
    /// Creates a new surface error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for SurfaceError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Terminal I/O error: {}", err))
    }
}

/// A script line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Script error on line {}: {}", line_number, message)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// 1-based line in the script.
    pub line_number: usize,
}

impl ScriptError {
    /// Creates a new script error for `line_number`.
    pub fn new(line_number: usize, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line_number,
        }
    }
}
