//! Players and the slots that refer to them.

use crate::Marker;
use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Which of the two players a caller means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, EnumIter)]
pub enum PlayerSlot {
    /// The first player, always moves first.
    #[display("Player 1")]
    One,
    /// The second player.
    #[display("Player 2")]
    Two,
}

impl PlayerSlot {
    /// Returns the other slot.
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    /// Marker permanently assigned to this slot.
    pub fn marker(self) -> Marker {
        match self {
            PlayerSlot::One => Marker::X,
            PlayerSlot::Two => Marker::O,
        }
    }

    /// Name a player in this slot starts with.
    pub fn default_name(self) -> String {
        self.to_string()
    }

    /// Parses `1` or `2`.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(PlayerSlot::One),
            2 => Some(PlayerSlot::Two),
            _ => None,
        }
    }
}

/// A named player. Only the name can change.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Player {
    name: String,
    #[getter(copy)]
    marker: Marker,
}

impl Player {
    /// Player for `slot` with its default name and marker.
    pub fn for_slot(slot: PlayerSlot) -> Self {
        Self::new(slot.default_name(), slot.marker())
    }

    /// Replaces the name. Any string is accepted, including empty.
    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_players() {
        let one = Player::for_slot(PlayerSlot::One);
        let two = Player::for_slot(PlayerSlot::Two);
        assert_eq!(one.name(), "Player 1");
        assert_eq!(one.marker(), Marker::X);
        assert_eq!(two.name(), "Player 2");
        assert_eq!(two.marker(), Marker::O);
    }

    #[test]
    fn test_other_slot() {
        assert_eq!(PlayerSlot::One.other(), PlayerSlot::Two);
        assert_eq!(PlayerSlot::Two.other(), PlayerSlot::One);
    }

    #[test]
    fn test_from_number() {
        assert_eq!(PlayerSlot::from_number(1), Some(PlayerSlot::One));
        assert_eq!(PlayerSlot::from_number(2), Some(PlayerSlot::Two));
        assert_eq!(PlayerSlot::from_number(3), None);
    }
}
