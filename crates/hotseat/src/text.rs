//! Plain-text surface and the line-based script runner.
//!
//! A script is one command per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! name 1 Alice
//! play 4
//! play 0
//! board
//! state
//! restart
//! ```

use crate::ScriptError;
use anyhow::{Context, Result};
use hotseat_tictactoe::{Board, DisplaySurface, GameEngine, PlayerSlot, Square};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Formats the board as three rows, empty squares showing their 1-based number.
pub fn format_board(board: &Board) -> String {
    let mut result = String::new();
    for (i, square) in board.squares().iter().enumerate() {
        if i % 3 == 0 && i > 0 {
            result.push_str("\n-+-+-\n");
        }
        match square {
            Square::Empty => result.push_str(&(i + 1).to_string()),
            Square::Occupied(marker) => result.push_str(&marker.to_string()),
        }
        if i % 3 < 2 {
            result.push('|');
        }
    }
    result
}

/// Surface that writes the board and results as text.
///
/// Write failures cannot be returned through [`DisplaySurface`], so the
/// first one is kept and handed back by [`TextSurface::take_error`].
#[derive(Debug)]
pub struct TextSurface<W: Write> {
    out: W,
    result: Option<String>,
    error: Option<std::io::Error>,
}

impl<W: Write> TextSurface<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            result: None,
            error: None,
        }
    }

    /// Result message currently shown.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Writes a free-form line.
    pub fn write_line(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!(error = %e, "Text surface write failed");
            self.error = Some(e);
        }
    }

    /// Returns the first write error, if any.
    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    /// Gives back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for TextSurface<W> {
    fn render(&mut self, board: &Board) {
        let text = format_board(board);
        self.write_line(&text);
        self.write_line("");
    }

    fn show_result(&mut self, message: &str) {
        self.result = Some(message.to_string());
        self.write_line(message);
    }

    fn clear_result(&mut self) {
        self.result = None;
    }
}

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Place at a cell. `None` for a negative index, which can never land.
    Play(Option<usize>),
    /// Rename a player.
    Name(PlayerSlot, String),
    /// Start over.
    Restart,
    /// Print the board.
    Board,
    /// Print the JSON snapshot.
    State,
}

impl ScriptCommand {
    /// Parses one line. Blank lines and `#` comments give `Ok(None)`.
    pub fn parse(line_number: usize, line: &str) -> Result<Option<Self>, ScriptError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (trimmed, ""),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "play" => {
                let index: i64 = rest.parse().map_err(|_| {
                    ScriptError::new(line_number, format!("Expected a cell index, got '{}'", rest))
                })?;
                ScriptCommand::Play(usize::try_from(index).ok())
            }
            "name" => {
                let (slot, name) = match rest.split_once(char::is_whitespace) {
                    Some((slot, name)) => (slot, name.trim()),
                    None => (rest, ""),
                };
                let slot = slot
                    .parse::<u8>()
                    .ok()
                    .and_then(PlayerSlot::from_number)
                    .ok_or_else(|| {
                        ScriptError::new(line_number, format!("Expected player 1 or 2, got '{}'", slot))
                    })?;
                ScriptCommand::Name(slot, name.to_string())
            }
            "restart" => ScriptCommand::Restart,
            "board" => ScriptCommand::Board,
            "state" => ScriptCommand::State,
            other => {
                return Err(ScriptError::new(
                    line_number,
                    format!("Unknown command '{}'", other),
                ));
            }
        };
        Ok(Some(command))
    }
}

/// Applies a parsed command to the engine.
#[instrument(skip(engine, surface))]
pub fn apply_command<W: Write>(
    command: ScriptCommand,
    engine: &mut GameEngine,
    surface: &mut TextSurface<W>,
) -> Result<()> {
    match command {
        ScriptCommand::Play(Some(index)) => engine.play_turn(index, surface),
        ScriptCommand::Play(None) => {}
        ScriptCommand::Name(slot, name) => engine.update_player_name(slot, name),
        ScriptCommand::Restart => engine.restart_game(surface),
        ScriptCommand::Board => surface.render(engine.board()),
        ScriptCommand::State => {
            let json = engine
                .snapshot()
                .to_json()
                .context("Failed to serialize game state")?;
            surface.write_line(&json);
        }
    }
    Ok(())
}

/// Starts a game and runs every command in `input` against it.
///
/// Stops at the first malformed line or write failure.
#[instrument(skip_all)]
pub fn run_script<R: BufRead, W: Write>(
    input: R,
    engine: &mut GameEngine,
    surface: &mut TextSurface<W>,
) -> Result<()> {
    info!("Running script");
    engine.start_game(surface);

    for (i, line) in input.lines().enumerate() {
        let line = line.context("Failed to read script")?;
        let Some(command) = ScriptCommand::parse(i + 1, &line)? else {
            continue;
        };
        debug!(line_number = i + 1, ?command, "Applying command");
        apply_command(command, engine, surface)?;

        if let Some(err) = surface.take_error() {
            return Err(err).context("Failed to write output");
        }
    }

    if let Some(err) = surface.take_error() {
        return Err(err).context("Failed to write output");
    }
    info!(over = engine.is_over(), "Script finished");
    Ok(())
}
