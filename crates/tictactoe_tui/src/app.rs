//! Application state and logic.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_core::{Game, GameState, Position};
use tracing::{debug, info, instrument};

use crate::{input, ui};

/// Main application state.
///
/// Holds the game and the keyboard cursor; everything on screen is derived
/// from these each frame.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell the keyboard cursor is on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line for the current game.
    pub fn status_text(&self) -> String {
        match self.game.state() {
            GameState::Ongoing => format!("Turn: {}", self.game.current()),
            ended => format!("{ended} - press R to restart"),
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.cursor);
            }
            KeyCode::Char(c) => {
                if let Some(pos) = input::digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            _ => {}
        }
    }

    /// Handles a mouse event; `area` is the full terminal area.
    #[instrument(skip(self, event), fields(column = event.column, row = event.row))]
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match ui::cell_at(area, event.column, event.row) {
            Some(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            None => debug!("Click outside any cell"),
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Returns whether the move was applied.
    pub fn play(&mut self, pos: Position) -> bool {
        let player = self.game.current();
        match self.game.try_play_move(pos.row(), pos.col()) {
            Ok(state) => {
                info!(%player, position = %pos, %state, "Move applied");
                true
            }
            Err(e) => {
                debug!(%player, position = %pos, error = %e, "Move ignored");
                false
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        info!(previous = %self.game.state(), "Restarting game");
        self.game.reset();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
