//! Tic-tac-toe game state for two players sharing one screen.
//!
//! This crate has no terminal or I/O dependencies. A host owns a
//! [`GameEngine`] and some [`DisplaySurface`], forwards user input to the
//! engine, and the engine calls back into the surface to redraw.
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{GameEngine, GameStatus, Outcome, PlayerSlot, RecordingSurface};
//!
//! let mut engine = GameEngine::new();
//! let mut surface = RecordingSurface::new();
//! engine.start_game(&mut surface);
//!
//! for index in [0, 3, 1, 4, 2] {
//!     engine.play_turn(index, &mut surface);
//! }
//!
//! assert_eq!(engine.status(), GameStatus::Over(Outcome::Winner(PlayerSlot::One)));
//! assert_eq!(surface.result(), Some("Player 1 wins!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod display;
mod engine;
mod player;
mod position;
mod snapshot;

pub use board::{Board, CELL_COUNT, Marker, Square, WIN_CONDITIONS};
pub use display::{DisplaySurface, RecordingSurface, SurfaceEvent};
pub use engine::{GameEngine, GameStatus, Outcome, TIE_MESSAGE};
pub use player::{Player, PlayerSlot};
pub use position::Position;
pub use snapshot::{GameSnapshot, PlayerSnapshot};
