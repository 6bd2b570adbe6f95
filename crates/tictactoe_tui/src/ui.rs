//! Stateless UI rendering for tic-tac-toe.
//!
//! Rendering and mouse hit testing share the geometry functions below, so a
//! click always lands on the cell drawn under it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Board, GameState, Player, Position, Square};

use crate::app::App;

/// Cell width in terminal columns.
const CELL_WIDTH: u16 = 11;
/// Cell height in terminal rows.
const CELL_HEIGHT: u16 = 3;

const CELLS: u16 = Board::size() as u16;
const BOARD_WIDTH: u16 = CELLS * CELL_WIDTH + (CELLS - 1);
const BOARD_HEIGHT: u16 = CELLS * CELL_HEIGHT + (CELLS - 1);

const HELP: &str = "Arrows move | Enter/Space or 1-9 play | R restart | Q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = regions(frame.area());

    // Title
    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, board_area(frame.area()), app);

    // Status
    let status = Paragraph::new(app.status_text())
        .style(Style::default().fg(status_color(app.game().state())))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Title, board, status and help rows.
fn regions(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Help
        ])
        .split(area)
}

/// Screen rectangle the 3x3 grid occupies within `area`.
pub fn board_area(area: Rect) -> Rect {
    center_rect(regions(area)[1], BOARD_WIDTH, BOARD_HEIGHT)
}

/// Screen rectangle of one cell, clipped to the board.
pub fn cell_rect(board: Rect, pos: Position) -> Rect {
    let col = pos.col() as u16;
    let row = pos.row() as u16;
    Rect::new(
        board.x + col * (CELL_WIDTH + 1),
        board.y + row * (CELL_HEIGHT + 1),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
    .intersection(board)
}

/// Cell under the terminal coordinate `(column, row)`, if any.
///
/// Grid lines and everything outside the board map to `None`.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let board = board_area(area);
    let point = ScreenPosition::new(column, row);
    Position::ALL
        .into_iter()
        .find(|&pos| cell_rect(board, pos).contains(point))
}

fn draw_board(frame: &mut Frame, board: Rect, app: &App) {
    let grid = Paragraph::new(grid_lines()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(grid, board);

    for pos in Position::ALL {
        draw_cell(frame, cell_rect(board, pos), app, pos);
    }
}

/// Grid skeleton: blank cell rows separated by box-drawing lines.
fn grid_lines() -> Vec<Line<'static>> {
    let cell_row = vec![" ".repeat(CELL_WIDTH as usize); CELLS as usize].join("│");
    let separator = vec!["─".repeat(CELL_WIDTH as usize); CELLS as usize].join("┼");

    (0..BOARD_HEIGHT)
        .map(|y| {
            if (y + 1) % (CELL_HEIGHT + 1) == 0 {
                Line::from(separator.clone())
            } else {
                Line::from(cell_row.clone())
            }
        })
        .collect()
}

/// Mark colour for `player`.
fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

/// A win takes the winner's colour.
fn status_color(state: GameState) -> Color {
    match state.winner() {
        Some(player) => player_color(player),
        None if state.is_terminal() => Color::Green,
        None => Color::Yellow,
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Square::Empty => (
            (pos.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let lines = vec![Line::default(), Line::from(Span::raw(symbol))];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 24,
    };

    fn center_of(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(SCREEN.width, SCREEN.height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_board_fits_screen() {
        let board = board_area(SCREEN);
        assert_eq!(board.width, BOARD_WIDTH);
        assert_eq!(board.height, BOARD_HEIGHT);
        assert!(SCREEN.contains(ScreenPosition::new(board.right() - 1, board.bottom() - 1)));
    }

    #[test]
    fn test_cell_centres_hit_their_cell() {
        let board = board_area(SCREEN);
        for pos in Position::ALL {
            let (x, y) = center_of(cell_rect(board, pos));
            assert_eq!(cell_at(SCREEN, x, y), Some(pos));
        }
    }

    #[test]
    fn test_grid_lines_and_outside_miss() {
        let board = board_area(SCREEN);
        // Vertical line between the first and second columns.
        assert_eq!(cell_at(SCREEN, board.x + CELL_WIDTH, board.y + 1), None);
        // Horizontal line between the first and second rows.
        assert_eq!(cell_at(SCREEN, board.x + 1, board.y + CELL_HEIGHT), None);
        assert_eq!(cell_at(SCREEN, 0, 0), None);
        assert_eq!(cell_at(SCREEN, board.right(), board.y), None);
    }

    #[test]
    fn test_corner_cells() {
        let board = board_area(SCREEN);
        assert_eq!(cell_at(SCREEN, board.x, board.y), Some(Position::TopLeft));
        assert_eq!(
            cell_at(SCREEN, board.right() - 1, board.bottom() - 1),
            Some(Position::BottomRight)
        );
    }

    #[test]
    fn test_render_shows_marks_and_status() {
        let mut app = App::new();
        assert!(app.play(Position::Center));
        let screen = render(&app);
        assert!(screen.contains("Tic-Tac-Toe"));
        assert!(screen.contains("Turn: O"));
        assert!(screen.contains('X'));
    }

    #[test]
    fn test_status_color_follows_winner() {
        assert_eq!(status_color(GameState::Ongoing), Color::Yellow);
        assert_eq!(status_color(GameState::Draw), Color::Green);
        assert_eq!(status_color(GameState::XWins), player_color(Player::X));
        assert_eq!(status_color(GameState::OWins), player_color(Player::O));
        assert_ne!(player_color(Player::X), player_color(Player::O));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let app = App::new();
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
    }
}
