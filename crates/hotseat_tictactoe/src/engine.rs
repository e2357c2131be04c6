//! Turn sequencing, win and tie detection.
//!
//! [`GameEngine`] is the whole session: board, both players, whose turn
//! it is, and whether the game is over. Invalid moves are rejected
//! silently; the board, the turn and the surface are left untouched.

use crate::{Board, DisplaySurface, GameSnapshot, Player, PlayerSlot};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Message shown when the board fills with no winner.
pub const TIE_MESSAGE: &str = "It's a tie!";

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The player in this slot completed a line.
    Winner(PlayerSlot),
    /// Board full, no line.
    Tie,
}

/// Whether moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the current player's move.
    #[default]
    InProgress,
    /// Finished; only a restart is accepted.
    Over(Outcome),
}

/// Two-player tic-tac-toe session.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    current: PlayerSlot,
    status: GameStatus,
}

impl GameEngine {
    /// Creates a session with default player names.
    #[instrument]
    pub fn new() -> Self {
        Self::with_players(
            PlayerSlot::One.default_name(),
            PlayerSlot::Two.default_name(),
        )
    }

    /// Creates a session with the given player names.
    #[instrument]
    pub fn with_players(one: String, two: String) -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new(one, PlayerSlot::One.marker()),
                Player::new(two, PlayerSlot::Two.marker()),
            ],
            current: PlayerSlot::One,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player in `slot`.
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[Self::slot_index(slot)]
    }

    /// Returns the slot whose turn it is.
    pub fn current_slot(&self) -> PlayerSlot {
        self.current
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Checks if the game has finished.
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }

    /// Starts a fresh game and tells the surface to redraw.
    #[instrument(skip(self, surface))]
    pub fn start_game(&mut self, surface: &mut dyn DisplaySurface) {
        info!("Starting game");
        self.reset(surface);
    }

    /// Abandons the current game and starts over with Player 1.
    ///
    /// Names are kept.
    #[instrument(skip(self, surface))]
    pub fn restart_game(&mut self, surface: &mut dyn DisplaySurface) {
        info!("Restarting game");
        self.reset(surface);
    }

    fn reset(&mut self, surface: &mut dyn DisplaySurface) {
        self.board.reset();
        self.current = PlayerSlot::One;
        self.status = GameStatus::InProgress;
        surface.render(&self.board);
        surface.clear_result();
    }

    /// Places the current player's marker at `index`.
    ///
    /// Does nothing when the game is over, `index` is off the board, or
    /// the square is taken. After a placement the surface is always
    /// re-rendered; a win or tie also shows a result message.
    #[instrument(skip(self, surface), fields(player = %self.current))]
    pub fn play_turn(&mut self, index: usize, surface: &mut dyn DisplaySurface) {
        if self.is_over() {
            return;
        }
        let marker = self.current_player().marker();
        if !self.board.set_cell(index, marker) {
            return;
        }
        debug!(index, %marker, "Marker placed");

        if self.check_win() {
            let message = format!("{} wins!", self.current_player().name());
            info!(winner = %self.current, "Game won");
            surface.show_result(&message);
            self.status = GameStatus::Over(Outcome::Winner(self.current));
        } else if self.check_tie() {
            info!("Game tied");
            surface.show_result(TIE_MESSAGE);
            self.status = GameStatus::Over(Outcome::Tie);
        } else {
            self.switch_player();
        }
        surface.render(&self.board);
    }

    /// Renames the player in `slot`. Past result messages are not touched.
    #[instrument(skip(self))]
    pub fn update_player_name(&mut self, slot: PlayerSlot, name: String) {
        debug!("Renaming player");
        self.players[Self::slot_index(slot)].rename(name);
    }

    /// Serializable view of the session.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    fn check_win(&self) -> bool {
        self.board.has_line(self.current_player().marker())
    }

    fn check_tie(&self) -> bool {
        self.board.is_full()
    }

    fn switch_player(&mut self) {
        self.current = self.current.other();
    }

    fn slot_index(slot: PlayerSlot) -> usize {
        match slot {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Marker, RecordingSurface, Square, SurfaceEvent};

    fn play_all(engine: &mut GameEngine, surface: &mut RecordingSurface, moves: &[usize]) {
        for &index in moves {
            engine.play_turn(index, surface);
        }
    }

    #[test]
    fn test_initial_state() {
        let engine = GameEngine::new();
        assert_eq!(engine.current_slot(), PlayerSlot::One);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn test_turns_alternate() {
        let mut engine = GameEngine::new();
        let mut surface = RecordingSurface::new();
        engine.play_turn(4, &mut surface);
        assert_eq!(engine.current_slot(), PlayerSlot::Two);
        engine.play_turn(0, &mut surface);
        assert_eq!(engine.current_slot(), PlayerSlot::One);
        assert_eq!(engine.board().get(4), Some(Square::Occupied(Marker::X)));
        assert_eq!(engine.board().get(0), Some(Square::Occupied(Marker::O)));
    }

    #[test]
    fn test_win_keeps_winner_current() {
        let mut engine = GameEngine::new();
        let mut surface = RecordingSurface::new();
        play_all(&mut engine, &mut surface, &[0, 3, 1, 4, 2]);
        assert_eq!(engine.status(), GameStatus::Over(Outcome::Winner(PlayerSlot::One)));
        assert_eq!(engine.current_slot(), PlayerSlot::One);
        assert_eq!(surface.result(), Some("Player 1 wins!"));
    }

    #[test]
    fn test_second_player_can_win() {
        let mut engine = GameEngine::new();
        let mut surface = RecordingSurface::new();
        play_all(&mut engine, &mut surface, &[0, 2, 1, 4, 8, 6]);
        assert_eq!(engine.status(), GameStatus::Over(Outcome::Winner(PlayerSlot::Two)));
        assert_eq!(surface.result(), Some("Player 2 wins!"));
    }

    #[test]
    fn test_result_shown_before_render() {
        let mut engine = GameEngine::new();
        let mut surface = RecordingSurface::new();
        play_all(&mut engine, &mut surface, &[0, 3, 1, 4]);
        surface.clear_events();
        engine.play_turn(2, &mut surface);
        assert!(matches!(
            surface.events(),
            [SurfaceEvent::ShowResult(_), SurfaceEvent::Render(_)]
        ));
    }

    #[test]
    fn test_moves_after_game_over_ignored() {
        let mut engine = GameEngine::new();
        let mut surface = RecordingSurface::new();
        play_all(&mut engine, &mut surface, &[0, 3, 1, 4, 2]);
        let board = engine.board().clone();
        surface.clear_events();
        engine.play_turn(8, &mut surface);
        assert_eq!(engine.board(), &board);
        assert!(surface.events().is_empty());
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut engine = GameEngine::new();
        let mut surface = RecordingSurface::new();
        engine.play_turn(9, &mut surface);
        engine.play_turn(usize::MAX, &mut surface);
        assert_eq!(engine.current_slot(), PlayerSlot::One);
        assert!(surface.events().is_empty());
    }

    #[test]
    fn test_start_game_renders_and_clears() {
        let mut engine = GameEngine::new();
        let mut surface = RecordingSurface::new();
        engine.start_game(&mut surface);
        assert_eq!(
            surface.events(),
            &[SurfaceEvent::Render(Board::new()), SurfaceEvent::ClearResult]
        );
    }

    #[test]
    fn test_rename_allows_empty() {
        let mut engine = GameEngine::new();
        engine.update_player_name(PlayerSlot::Two, String::new());
        assert_eq!(engine.player(PlayerSlot::Two).name(), "");
        assert_eq!(engine.player(PlayerSlot::Two).marker(), Marker::O);
    }
}
