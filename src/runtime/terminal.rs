//! Terminal session guard
//!
//! Enters raw mode and the alternate screen on creation and restores the
//! terminal on drop, including when unwinding from a panic.

use std::io::{self, Stdout, Write};

use crossterm::{cursor, execute, terminal};

pub struct TerminalSession {
    stdout: Stdout,
    alternate_screen_enabled: bool,
}

impl TerminalSession {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::info!("terminal raw mode enabled");

        let mut session = Self {
            stdout: io::stdout(),
            alternate_screen_enabled: false,
        };

        execute!(session.stdout, terminal::EnterAlternateScreen)?;
        session.alternate_screen_enabled = true;
        tracing::info!("alternate screen enabled");

        Ok(session)
    }

    /// Terminal size as (columns, rows)
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn writer(&mut self) -> &mut Stdout {
        &mut self.stdout
    }

    fn cleanup(&mut self) {
        let _ = execute!(self.stdout, cursor::Show);

        if self.alternate_screen_enabled {
            let _ = execute!(self.stdout, terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
            tracing::info!("alternate screen disabled");
        }

        let _ = terminal::disable_raw_mode();
        tracing::info!("terminal raw mode disabled");

        let _ = self.stdout.flush();
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}
