//! Named board positions.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// A position on the board, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Position {
    /// Index 0
    TopLeft,
    /// Index 1
    TopCenter,
    /// Index 2
    TopRight,
    /// Index 3
    MiddleLeft,
    /// Index 4
    Center,
    /// Index 5
    MiddleRight,
    /// Index 6
    BottomLeft,
    /// Index 7
    BottomCenter,
    /// Index 8
    BottomRight,
}

impl Position {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Position for a board index, `None` past 8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Position one row up, clamped to the top edge.
    pub fn up(self) -> Self {
        self.offset(-1, 0)
    }

    /// Position one row down, clamped to the bottom edge.
    pub fn down(self) -> Self {
        self.offset(1, 0)
    }

    /// Position one column left, clamped to the left edge.
    pub fn left(self) -> Self {
        self.offset(0, -1)
    }

    /// Position one column right, clamped to the right edge.
    pub fn right(self) -> Self {
        self.offset(0, 1)
    }

    fn offset(self, d_row: isize, d_col: isize) -> Self {
        let row = (self.row() as isize + d_row).clamp(0, 2) as usize;
        let col = (self.col() as isize + d_col).clamp(0, 2) as usize;
        Self::from_index(row * 3 + col).unwrap_or(self)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_bounds() {
        assert_eq!(Position::TopLeft.to_index(), 0);
        assert_eq!(Position::Center.to_index(), 4);
        assert_eq!(Position::from_index(8), Some(Position::BottomRight));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_moves_clamp_at_edges() {
        assert_eq!(Position::TopLeft.up(), Position::TopLeft);
        assert_eq!(Position::TopLeft.left(), Position::TopLeft);
        assert_eq!(Position::BottomRight.down(), Position::BottomRight);
        assert_eq!(Position::BottomRight.right(), Position::BottomRight);
    }

    #[test]
    fn test_moves_from_center() {
        assert_eq!(Position::Center.up(), Position::TopCenter);
        assert_eq!(Position::Center.down(), Position::BottomCenter);
        assert_eq!(Position::Center.left(), Position::MiddleLeft);
        assert_eq!(Position::Center.right(), Position::MiddleRight);
    }
}
