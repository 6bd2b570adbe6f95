//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Log file, overriding the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable mouse input
    #[arg(long)]
    pub no_mouse: bool,
}
