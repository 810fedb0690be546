//! Terminal setup and teardown.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode: raw mode, alternate screen, mouse capture (the star
/// picker needs pointer events).
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Leave TUI mode and restore the terminal. Safe to call more than once;
/// errors are ignored so cleanup always runs to the end.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen);
    let _ = execute!(writer, Show);
    let _ = writer.flush();
}

/// Restore the terminal after a panic or error, ignoring every failure.
pub fn emergency_restore() {
    let mut stdout = io::stdout();
    leave_tui_mode(&mut stdout);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_tui_mode_does_not_panic_on_a_buffer() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
        assert!(!buffer.is_empty());
    }
}
