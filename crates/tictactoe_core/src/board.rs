//! The 3x3 grid and everything that can be read off it.

use crate::error::PlaceError;
use crate::position::Position;
use crate::types::{Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side length of the board.
pub const SIZE: usize = 3;

const CELLS: usize = SIZE * SIZE;

/// Winning index triples over the row-major grid.
///
/// Order is rows 0-2, columns 0-2, main diagonal, anti-diagonal.
/// [`Board::winner`] reports the first matching triple in this order.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 tic-tac-toe board.
///
/// The board knows nothing about turns; it only records which mark sits in
/// which cell and answers questions about that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Side length of the board, always 3.
    pub const fn size() -> usize {
        SIZE
    }

    /// Places `player`'s mark at `(row, col)`.
    ///
    /// Returns `false` without touching the board when the cell is out of
    /// bounds or already occupied.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        self.try_place(row, col, player).is_ok()
    }

    /// Places `player`'s mark at `(row, col)`, reporting why it was refused.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::OutOfBounds`] if either coordinate is outside `0..3`.
    /// - [`PlaceError::Occupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn try_place(&mut self, row: usize, col: usize, player: Player) -> Result<(), PlaceError> {
        let pos = Position::from_row_col(row, col).ok_or(PlaceError::OutOfBounds { row, col })?;

        let square = &mut self.squares[pos.index()];
        if !square.is_empty() {
            debug!(occupant = ?square, "Cell already occupied");
            return Err(PlaceError::Occupied { row, col });
        }

        *square = Square::Occupied(player);
        Ok(())
    }

    /// Returns the occupant of `(row, col)`.
    ///
    /// Out-of-bounds coordinates read as [`Square::Empty`].
    pub fn at(&self, row: usize, col: usize) -> Square {
        Position::from_row_col(row, col)
            .map(|pos| self.get(pos))
            .unwrap_or_default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Number of cells holding `player`'s mark.
    pub(crate) fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Checks whether `player` holds any complete line.
    pub(crate) fn has_line(&self, player: Player) -> bool {
        let mark = Square::Occupied(player);
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.squares[i] == mark))
    }

    /// Checks for a winner on the board.
    ///
    /// Returns the occupant of the first line in [`LINES`] whose three cells
    /// hold the same mark.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            let first = self.squares[a].player()?;
            (self.squares[b] == self.squares[a] && self.squares[c] == self.squares[a])
                .then_some(first)
        })
    }

    /// Checks if every cell holds a mark.
    pub fn full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELLS];
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.squares.chunks(SIZE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for square in row {
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}
