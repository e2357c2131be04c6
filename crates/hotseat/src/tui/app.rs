//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hotseat_tictactoe::{Board, DisplaySurface, GameEngine, PlayerSlot, Position};
use tracing::{debug, info, instrument};

use super::input::{digit_cell, move_cursor};

/// What the terminal shows, as last told by the engine.
#[derive(Debug, Clone, Default)]
pub struct TuiSurface {
    board: Board,
    result: Option<String>,
}

impl TuiSurface {
    /// Board from the latest render.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Result message, if one is showing.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }
}

impl DisplaySurface for TuiSurface {
    fn render(&mut self, board: &Board) {
        self.board = board.clone();
    }

    fn show_result(&mut self, message: &str) {
        self.result = Some(message.to_string());
    }

    fn clear_result(&mut self) {
        self.result = None;
    }
}

/// A player name being typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEdit {
    /// Whose name.
    pub slot: PlayerSlot,
    /// Text typed so far.
    pub buffer: String,
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    surface: TuiSurface,
    cursor: Position,
    editing: Option<NameEdit>,
}

impl App {
    /// Wraps an engine. Call [`App::start`] before the first draw.
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            surface: TuiSurface::default(),
            cursor: Position::Center,
            editing: None,
        }
    }

    /// Starts the game so the surface has something to show.
    pub fn start(&mut self) {
        self.engine.start_game(&mut self.surface);
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the surface state.
    pub fn surface(&self) -> &TuiSurface {
        &self.surface
    }

    /// Gets the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the name being edited, if any.
    pub fn editing(&self) -> Option<&NameEdit> {
        self.editing.as_ref()
    }

    /// Places at `index` for the current player.
    pub fn play(&mut self, index: usize) {
        self.engine.play_turn(index, &mut self.surface);
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("User quit");
            return KeyOutcome::Quit;
        }

        if self.editing.is_some() {
            self.handle_edit_key(key.code);
            return KeyOutcome::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return KeyOutcome::Quit;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char('r') => self.engine.restart_game(&mut self.surface),
            KeyCode::Char('n') => self.begin_edit(PlayerSlot::One),
            KeyCode::Char('m') => self.begin_edit(PlayerSlot::Two),
            KeyCode::Char(c) => {
                if let Some(index) = digit_cell(c) {
                    self.cursor = Position::from_index(index).unwrap_or(self.cursor);
                    self.play(index);
                }
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn begin_edit(&mut self, slot: PlayerSlot) {
        debug!(%slot, "Editing player name");
        self.editing = Some(NameEdit {
            slot,
            buffer: self.engine.player(slot).name().clone(),
        });
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        let Some(edit) = self.editing.as_mut() else {
            return;
        };
        match code {
            KeyCode::Char(c) => edit.buffer.push(c),
            KeyCode::Backspace => {
                edit.buffer.pop();
            }
            KeyCode::Enter => {
                if let Some(edit) = self.editing.take() {
                    self.engine.update_player_name(edit.slot, edit.buffer);
                }
            }
            KeyCode::Esc => {
                debug!("Name edit cancelled");
                self.editing = None;
            }
            _ => {}
        }
    }
}
