//! Tic-tac-toe rules engine.
//!
//! Two layers, each owning the one below:
//!
//! - **[`Board`]**: the 3x3 grid. Placement, occupancy queries, fullness and
//!   win detection. No notion of turns.
//! - **[`Game`]**: one board plus the player to move and the outcome.
//!   Sequences moves and derives [`GameState`] after each one.
//!
//! Illegal requests never panic. The plain operations return `false` and
//! leave everything untouched; the `try_` variants say why.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameState, Player};
//!
//! let mut game = Game::new();
//! assert!(game.play_move(1, 1));
//! assert!(!game.play_move(1, 1));
//! assert_eq!(game.current(), Player::O);
//! assert_eq!(game.state(), GameState::Ongoing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod position;
mod types;

pub use board::{Board, LINES, SIZE};
pub use error::{MoveError, PlaceError, SnapshotError};
pub use game::{Game, GameSnapshot};
pub use position::Position;
pub use types::{GameState, Player, Square};
