// Terminal session: raw mode and alternate screen, undone on every exit path
// including failed setup, early returns and panics

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::warn;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the UI runs; dropping it restores the screen
pub struct TerminalSession {
    terminal: Tui,
    restored: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let setup = || -> io::Result<Tui> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Terminal::new(CrosstermBackend::new(stdout))
        };

        match setup() {
            Ok(terminal) => {
                install_panic_hook();
                Ok(Self {
                    terminal,
                    restored: false,
                })
            }
            Err(e) => {
                // Raw mode is already on, so undo whatever got applied
                let _ = restore_terminal();
                Err(e)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Restore the terminal now and report the first failed step
    pub fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        restore_terminal()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if !self.restored {
            if let Err(e) = restore_terminal() {
                warn!(error = %e, "failed to restore terminal");
            }
        }
    }
}

/// Leave raw mode and the alternate screen. Every step runs even if an
/// earlier one fails.
pub fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    first_error([
        disable_raw_mode(),
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture),
        execute!(stdout, Show),
    ])
}

/// Put the screen back before the panic message is printed
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}

fn first_error<I>(results: I) -> io::Result<()>
where
    I: IntoIterator<Item = io::Result<()>>,
{
    results.into_iter().fold(Ok(()), |first, result| first.and(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_keeps_earliest_failure() {
        let results = vec![
            Ok(()),
            Err(io::Error::other("raw mode")),
            Err(io::Error::other("alternate screen")),
        ];
        let err = first_error(results).unwrap_err();
        assert_eq!(err.to_string(), "raw mode");
    }

    #[test]
    fn test_first_error_consumes_every_step() {
        let mut ran = 0;
        let steps = (0..3).map(|i| {
            ran += 1;
            if i == 0 {
                Err(io::Error::other("first"))
            } else {
                Ok(())
            }
        });
        assert!(first_error(steps).is_err());
        assert_eq!(ran, 3);
    }

    #[test]
    fn test_first_error_all_ok() {
        assert!(first_error([Ok(()), Ok(())]).is_ok());
    }
}
