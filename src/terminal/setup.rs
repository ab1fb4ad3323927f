//! Low-level enter/leave of TUI mode.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use std::io::{self, Write};

/// Enter the alternate screen and, if requested, enable mouse capture.
pub fn enter_tui_mode<W: Write>(writer: &mut W, mouse_capture: bool) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)?;
    if mouse_capture {
        execute!(writer, EnableMouseCapture)?;
    }
    Ok(())
}

/// Leave TUI mode. Safe to call repeatedly; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W, mouse_capture: bool) {
    let _ = disable_raw_mode();
    if mouse_capture {
        let _ = execute!(writer, DisableMouseCapture);
    }
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Set the terminal window title. Unsupported terminals ignore it.
pub fn set_window_title<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    execute!(writer, SetTitle(title))
}

/// Best-effort restore used from the panic hook.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout(), true);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_tui_mode_does_not_panic() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer, true);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_set_window_title_writes_escape() {
        let mut buffer = Vec::new();
        set_window_title(&mut buffer, "Content Hub").unwrap();
        let written = String::from_utf8_lossy(&buffer);
        assert!(written.contains("Content Hub"));
    }
}
