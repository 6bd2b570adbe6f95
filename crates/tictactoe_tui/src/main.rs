//! Tic-tac-toe terminal front-end.
//!
//! Draws the board every frame from the game's public state and turns key
//! presses and mouse clicks into moves.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use config::TuiConfig;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use terminal::TerminalGuard;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = TuiConfig::load(&cli.config)?;
    config.apply_cli(&cli);

    init_tracing(&config)?;
    info!(?config, "Starting tic-tac-toe");

    let guard = TerminalGuard::enter(io::stdout(), *config.mouse())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new();
    let res = run(&mut terminal, &mut app);

    // Restore before reporting, so the message lands on the normal screen.
    drop(guard);

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {:?}", err);
    }

    info!("Exited cleanly");
    Ok(())
}

/// Sends tracing output to the configured log file; the terminal belongs to
/// the UI.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}

/// Draw, block for one input event, repeat.
#[instrument(skip_all)]
fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }
    }
    Ok(())
}
