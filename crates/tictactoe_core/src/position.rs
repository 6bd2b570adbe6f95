//! Named cells of the 3x3 grid.

use crate::board::SIZE;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board, in row-major order.
///
/// Positions give cells a name so callers holding a cursor or iterating the
/// grid never deal with raw indices. Conversions to and from `(row, col)` and
/// the flat index (0-8) are lossless for in-bounds cells.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0 (index 0)
    TopLeft,
    /// Row 0, column 1 (index 1)
    TopCenter,
    /// Row 0, column 2 (index 2)
    TopRight,
    /// Row 1, column 0 (index 3)
    MiddleLeft,
    /// Row 1, column 1 (index 4)
    Center,
    /// Row 1, column 2 (index 5)
    MiddleRight,
    /// Row 2, column 0 (index 6)
    BottomLeft,
    /// Row 2, column 1 (index 7)
    BottomCenter,
    /// Row 2, column 2 (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from zero-based coordinates.
    ///
    /// Returns `None` when either coordinate is outside `0..3`.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= SIZE || col >= SIZE {
            return None;
        }
        Self::from_index(row * SIZE + col)
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.index() / SIZE
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.index() % SIZE
    }

    /// Get label for this position (for display).
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
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_row_col_matches_index() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(pos.row() * 3 + pos.col(), i);
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Some(pos));
        }
    }

    #[test]
    fn test_from_row_col_out_of_bounds() {
        assert_eq!(Position::from_row_col(3, 0), None);
        assert_eq!(Position::from_row_col(0, 3), None);
        assert_eq!(Position::from_row_col(usize::MAX, 1), None);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Position::from_index(4), Some(Position::Center));
        assert_eq!(Position::from_index(9), None);
    }
}
