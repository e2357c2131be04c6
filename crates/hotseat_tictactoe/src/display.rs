//! Contract between the engine and whatever draws the game.

use crate::Board;

/// A rendering surface driven by [`GameEngine`](crate::GameEngine).
///
/// The engine never stores a surface. The host owns both and passes the
/// surface into each engine call, so the two sides never refer to each
/// other.
pub trait DisplaySurface {
    /// Draws the board.
    fn render(&mut self, board: &Board);

    /// Shows a result message, replacing any previous one.
    fn show_result(&mut self, message: &str);

    /// Removes the result message.
    fn clear_result(&mut self);
}

/// One call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// `render` with a copy of the board.
    Render(Board),
    /// `show_result` with the message.
    ShowResult(String),
    /// `clear_result`.
    ClearResult,
}

/// Surface that keeps every call it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
    result: Option<String>,
}

impl RecordingSurface {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls in order.
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// The result message currently shown.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Board passed to the most recent `render`.
    pub fn last_board(&self) -> Option<&Board> {
        self.events.iter().rev().find_map(|e| match e {
            SurfaceEvent::Render(board) => Some(board),
            _ => None,
        })
    }

    /// Forgets recorded calls but keeps the current result.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl DisplaySurface for RecordingSurface {
    fn render(&mut self, board: &Board) {
        self.events.push(SurfaceEvent::Render(board.clone()));
    }

    fn show_result(&mut self, message: &str) {
        self.result = Some(message.to_string());
        self.events.push(SurfaceEvent::ShowResult(message.to_string()));
    }

    fn clear_result(&mut self) {
        self.result = None;
        self.events.push(SurfaceEvent::ClearResult);
    }
}
