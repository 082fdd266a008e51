//! Terminal setup for the interactive game.

use anyhow::{Context, Result};
use crossterm::{execute, terminal::EnterAlternateScreen};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use tracing::warn;

/// Switches `writer` to the alternate screen and wraps it in a ratatui terminal.
///
/// Raw mode is expected to be on already. When either step fails, `restore`
/// runs before the error is returned, so the shell is never left in raw mode.
pub fn enter_screen<W, F>(mut writer: W, restore: F) -> Result<Terminal<CrosstermBackend<W>>>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    let entered = execute!(writer, EnterAlternateScreen)
        .context("Failed to enter alternate screen")
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(writer)).context("Failed to create terminal")
        });

    if entered.is_err()
        && let Err(err) = restore()
    {
        warn!(error = %err, "Failed to restore terminal");
    }

    entered
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_setup_restores_terminal() {
        let mut restored = false;
        let result = enter_screen(BrokenPipe, || {
            restored = true;
            Ok(())
        });

        assert!(result.is_err());
        assert!(restored);
    }

    #[test]
    fn test_failed_restore_keeps_setup_error() {
        let result = enter_screen(BrokenPipe, || Err(io::Error::other("tty gone")));

        let err = result.err().unwrap();
        assert!(err.to_string().contains("alternate screen"));
    }
}
