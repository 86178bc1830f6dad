#![forbid(unsafe_code)]

//! Terminal lifecycle for the demo.
//!
//! [`TerminalSession`] enters raw mode and the alternate screen and hides
//! the cursor. Everything is undone on drop, in reverse order, including
//! when the event loop returns early with an error.

use std::io::{self, Write};
use std::sync::OnceLock;

use tracing::info;

/// RAII guard for raw mode and the alternate screen.
#[derive(Debug)]
pub struct TerminalSession {
    alternate_screen_enabled: bool,
}

impl TerminalSession {
    /// Enter raw mode, switch to the alternate screen and hide the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled.
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        crossterm::terminal::enable_raw_mode()?;
        info!("terminal raw mode enabled");

        let mut session = Self {
            alternate_screen_enabled: false,
        };

        let mut stdout = io::stdout();
        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
        session.alternate_screen_enabled = true;
        crossterm::execute!(stdout, crossterm::cursor::Hide)?;

        Ok(session)
    }

    /// Current terminal size (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    fn cleanup(&mut self) {
        let mut stdout = io::stdout();

        // Always show cursor before leaving
        let _ = crossterm::execute!(stdout, crossterm::cursor::Show);

        if self.alternate_screen_enabled {
            let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }

        // Exit raw mode last
        let _ = crossterm::terminal::disable_raw_mode();
        info!("terminal restored");

        let _ = stdout.flush();
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
    let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}
