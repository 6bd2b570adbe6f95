//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds this player's mark.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks whether nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    /// Single-character form used by the board's text rendering.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

impl From<Player> for Square {
    fn from(player: Player) -> Self {
        Square::Occupied(player)
    }
}

/// Outcome of a game: still running, or how it ended.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum GameState {
    /// Moves are still accepted.
    #[default]
    #[display("Ongoing")]
    Ongoing,
    /// X completed a line.
    #[display("X wins")]
    XWins,
    /// O completed a line.
    #[display("O wins")]
    OWins,
    /// Board filled with no line completed.
    #[display("Draw")]
    Draw,
}

impl GameState {
    /// Winning state for the given player.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => GameState::XWins,
            Player::O => GameState::OWins,
        }
    }

    /// Returns the winner if the game ended in a win.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::XWins => Some(Player::X),
            GameState::OWins => Some(Player::O),
            GameState::Ongoing | GameState::Draw => None,
        }
    }

    /// True once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != GameState::Ongoing
    }
}
