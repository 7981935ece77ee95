//! Terminal setup and teardown.

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand, cursor,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::warn;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back the way it was when dropped, including on early
/// returns and panics.
pub struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen. The guard exists as soon as
    /// raw mode is on, so a later setup failure still restores the terminal.
    pub fn enter() -> io::Result<(Self, Tui)> {
        enable_raw_mode()?;
        let guard = Self { restore };
        stdout().execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok((guard, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(cursor::Show)?;
    Ok(())
}
