//! Turn sequencing and outcome tracking on top of a [`Board`].

use crate::board::Board;
use crate::error::{MoveError, SnapshotError};
use crate::position::Position;
use crate::types::{GameState, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board, the player to move and the outcome. The only transition
/// is [`Game::play_move`]; [`Game::reset`] is a full restart.
///
/// Deserialization goes through [`GameSnapshot`], so a stored game is only
/// accepted when its outcome and player to move agree with its board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct Game {
    board: Board,
    current: Player,
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            state: GameState::Ongoing,
        }
    }

    /// Returns the game outcome so far.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player whose move is accepted next.
    ///
    /// Once the game has ended this is the player who made the final move.
    pub fn current(&self) -> Player {
        self.current
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays the current player's mark at `(row, col)`.
    ///
    /// Returns `false` with no change at all when the game is over, the cell
    /// is out of bounds, or the cell is occupied.
    pub fn play_move(&mut self, row: usize, col: usize) -> bool {
        self.try_play_move(row, col).is_ok()
    }

    /// Plays the current player's mark at `pos`.
    pub fn play(&mut self, pos: Position) -> bool {
        self.play_move(pos.row(), pos.col())
    }

    /// Plays the current player's mark at `(row, col)` and returns the
    /// resulting state.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended.
    /// - [`MoveError::Place`] if the board refused the cell.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn try_play_move(&mut self, row: usize, col: usize) -> Result<GameState, MoveError> {
        if self.state.is_terminal() {
            debug!(state = %self.state, "Move after game end rejected");
            return Err(MoveError::GameOver { state: self.state });
        }

        self.board.try_place(row, col, self.current).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        self.update_state();
        if self.state.is_terminal() {
            info!(state = %self.state, "Game over");
        } else {
            self.current = self.current.opponent();
            debug!(next = %self.current, "Turn passed");
        }

        Ok(self.state)
    }

    /// Restores the initial configuration from any state.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = Player::X;
        self.state = GameState::Ongoing;
        debug!("Game reset");
    }

    /// Derives the outcome after a successful placement.
    fn update_state(&mut self) {
        self.state = outcome_of(&self.board);
    }
}

/// Outcome a board implies, given that play stops at the first line.
fn outcome_of(board: &Board) -> GameState {
    if let Some(winner) = board.winner() {
        GameState::won_by(winner)
    } else if board.full() {
        GameState::Draw
    } else {
        GameState::Ongoing
    }
}

/// Unvalidated fields of a stored [`Game`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameSnapshot {
    /// Stored board.
    pub board: Board,
    /// Stored player to move.
    pub current: Player,
    /// Stored outcome.
    pub state: GameState,
}

impl TryFrom<GameSnapshot> for Game {
    type Error = SnapshotError;

    /// Accepts the snapshot only if it could have been reached by play.
    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let GameSnapshot {
            board,
            current,
            state,
        } = snapshot;

        let x = board.count(Player::X);
        let o = board.count(Player::O);
        if x != o && x != o + 1 {
            return Err(SnapshotError::MarkCounts { x, o });
        }
        if board.has_line(Player::X) && board.has_line(Player::O) {
            return Err(SnapshotError::BothWin);
        }

        let derived = outcome_of(&board);
        if state != derived {
            return Err(SnapshotError::StateMismatch {
                stored: state,
                derived,
            });
        }

        // X moves on even counts; a finished game keeps the last mover.
        let last_mover = if x > o { Player::X } else { Player::O };
        let expected = match state {
            GameState::Ongoing => last_mover.opponent(),
            _ => last_mover,
        };
        // The winner must have made the last move.
        if let Some(winner) = state.winner()
            && winner != last_mover
        {
            return Err(SnapshotError::MarkCounts { x, o });
        }
        if current != expected {
            return Err(SnapshotError::TurnMismatch { current });
        }

        Ok(Self {
            board,
            current,
            state,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
