//! Serializable view of a game session.

use crate::{GameEngine, GameStatus, Outcome, PlayerSlot, Square};
use serde::{Deserialize, Serialize};

/// A player as it appears in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Display name.
    pub name: String,
    /// `"X"` or `"O"`.
    pub marker: String,
}

/// Point-in-time copy of a [`GameEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Nine cells, row-major; `None` for empty.
    pub board: Vec<Option<String>>,
    /// Player 1 then Player 2.
    pub players: Vec<PlayerSnapshot>,
    /// Name of the player to move (or who just won).
    pub current_player: String,
    /// `"InProgress"`, `"Won"` or `"Tie"`.
    pub status: String,
    /// Winner's name when `status` is `"Won"`.
    pub winner: Option<String>,
}

impl GameSnapshot {
    /// Renders the snapshot as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&GameEngine> for GameSnapshot {
    fn from(engine: &GameEngine) -> Self {
        let board = engine
            .board()
            .squares()
            .iter()
            .map(|sq| match sq {
                Square::Empty => None,
                Square::Occupied(marker) => Some(marker.to_string()),
            })
            .collect();

        let players = [PlayerSlot::One, PlayerSlot::Two]
            .into_iter()
            .map(|slot| {
                let player = engine.player(slot);
                PlayerSnapshot {
                    name: player.name().clone(),
                    marker: player.marker().to_string(),
                }
            })
            .collect();

        let (status, winner) = match engine.status() {
            GameStatus::InProgress => ("InProgress", None),
            GameStatus::Over(Outcome::Tie) => ("Tie", None),
            GameStatus::Over(Outcome::Winner(slot)) => {
                ("Won", Some(engine.player(slot).name().clone()))
            }
        };

        Self {
            board,
            players,
            current_player: engine.current_player().name().clone(),
            status: status.to_string(),
            winner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingSurface;

    #[test]
    fn test_snapshot_of_new_game() {
        let snapshot = GameEngine::new().snapshot();
        assert_eq!(snapshot.board, vec![None; 9]);
        assert_eq!(snapshot.current_player, "Player 1");
        assert_eq!(snapshot.status, "InProgress");
        assert_eq!(snapshot.winner, None);
        assert_eq!(snapshot.players[1].marker, "O");
    }

    #[test]
    fn test_snapshot_after_win() {
        let mut engine = GameEngine::with_players("Ann".to_string(), "Bo".to_string());
        let mut surface = RecordingSurface::new();
        for index in [0, 3, 1, 4, 2] {
            engine.play_turn(index, &mut surface);
        }
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.status, "Won");
        assert_eq!(snapshot.winner.as_deref(), Some("Ann"));
        assert_eq!(snapshot.board[3].as_deref(), Some("O"));

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"status\": \"Won\""));
    }
}
