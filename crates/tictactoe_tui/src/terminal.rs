//! Raw-mode terminal session that is undone on drop.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::Write;
use tracing::{debug, warn};

/// Holds the terminal in raw mode on the alternate screen.
///
/// Dropping the guard restores the terminal, whether the game loop returned,
/// failed or panicked.
#[derive(Debug)]
pub struct TerminalGuard<W: Write> {
    out: W,
    mouse: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enters raw mode and the alternate screen, capturing the mouse if
    /// `mouse` is set.
    ///
    /// If a later step fails, the partly built guard is dropped and undoes
    /// the earlier ones.
    pub fn enter(out: W, mouse: bool) -> Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out, mouse };
        execute!(guard.out, EnterAlternateScreen)?;
        if mouse {
            execute!(guard.out, EnableMouseCapture)?;
        }
        debug!(mouse, "Terminal prepared");
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to leave raw mode");
        }
        if self.mouse {
            let _ = execute!(self.out, DisableMouseCapture);
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(error = %e, "Failed to restore screen");
        }
        debug!("Terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restored(mouse: bool) -> String {
        let mut out = Vec::new();
        drop(TerminalGuard {
            out: &mut out,
            mouse,
        });
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_drop_leaves_alternate_screen() {
        let written = restored(false);
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
        assert!(!written.contains("?1000l"));
    }

    #[test]
    fn test_drop_releases_mouse() {
        let written = restored(true);
        assert!(written.contains("?1000l"));
        assert!(written.contains("\x1b[?1049l"));
    }

    #[test]
    fn test_drop_during_unwind_restores() {
        let mut out = Vec::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = TerminalGuard {
                out: &mut out,
                mouse: false,
            };
            panic!("game loop failed");
        }));
        assert!(result.is_err());
        assert!(String::from_utf8(out).unwrap().contains("\x1b[?1049l"));
    }
}
