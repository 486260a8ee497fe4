#![forbid(unsafe_code)]

//! Terminal session lifecycle.
//!
//! RAII guard over the real terminal: raw mode and mouse capture on
//! construction, full restore on drop, so no code path can leave the
//! user's shell in raw mode. "Fullscreen" is the alternate screen
//! buffer; the session is the authority on whether it is active, and
//! every toggle reports the resulting state back so the controller can
//! reconcile its mirror flag.

use std::io::{self, Write};

use crossterm::{cursor, event, execute, terminal};

/// RAII terminal guard.
///
/// Track what was enabled so drop restores exactly that.
#[derive(Debug)]
pub struct TerminalSession {
    raw_enabled: bool,
    mouse_enabled: bool,
    fullscreen: bool,
}

impl TerminalSession {
    /// Enter raw mode, hide the cursor, and enable mouse capture.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled; partial setup is
    /// rolled back by `Drop`.
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::info!("terminal raw mode enabled");

        let mut session = Self {
            raw_enabled: true,
            mouse_enabled: false,
            fullscreen: false,
        };

        let mut stdout = io::stdout();
        execute!(stdout, cursor::Hide, event::EnableMouseCapture)?;
        session.mouse_enabled = true;
        tracing::info!("mouse capture enabled");

        Ok(session)
    }

    /// Current terminal size (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Whether the fullscreen surface (alternate screen) is active.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Enter or leave the fullscreen surface.
    ///
    /// Idempotent: re-requesting the current state is a no-op. Returns
    /// the actual state afterwards, which the caller feeds back to the
    /// controller as the fullscreen-change notification.
    pub fn set_fullscreen(&mut self, active: bool) -> io::Result<bool> {
        if active == self.fullscreen {
            return Ok(self.fullscreen);
        }
        let mut stdout = io::stdout();
        if active {
            execute!(
                stdout,
                terminal::EnterAlternateScreen,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
            tracing::info!("entered fullscreen (alternate screen)");
        } else {
            execute!(stdout, terminal::LeaveAlternateScreen)?;
            tracing::info!("left fullscreen");
        }
        self.fullscreen = active;
        Ok(self.fullscreen)
    }

    /// Clear the visible screen.
    pub fn clear(&self) -> io::Result<()> {
        execute!(
            io::stdout(),
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }

    /// Draw pre-rendered rows, one per terminal line.
    pub fn present(&self, rows: &[String]) -> io::Result<()> {
        use crossterm::QueueableCommand;
        let mut stdout = io::stdout();
        for (y, row) in rows.iter().enumerate() {
            stdout.queue(cursor::MoveTo(0, y as u16))?;
            stdout.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
            stdout.write_all(row.as_bytes())?;
        }
        stdout.flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Best-effort restore in reverse acquisition order.
        let mut stdout = io::stdout();
        if self.fullscreen {
            let _ = execute!(stdout, terminal::LeaveAlternateScreen);
        }
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, cursor::Show);
        if self.raw_enabled {
            let _ = terminal::disable_raw_mode();
        }
        tracing::info!("terminal restored");
    }
}
