//! Raw mode handling and keystroke normalization.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use typetrial_core::Keystroke;

/// Puts the terminal into raw mode for as long as it lives.
///
/// Restoration happens in `Drop`, so every exit path out of the typing loop
/// (completion, cancellation, error, panic unwind) puts the terminal back.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn acquire() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Block until the next keystroke the typing loop cares about.
///
/// Esc and Ctrl+C cancel; other modifier chords, function keys, resizes and
/// mouse events are swallowed.
pub fn read_keystroke() -> std::io::Result<Keystroke> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            return Ok(Keystroke::Cancel);
        }

        match key.code {
            KeyCode::Esc => return Ok(Keystroke::Cancel),
            KeyCode::Backspace => return Ok(Keystroke::Backspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Keystroke::Char(c));
            }
            _ => {}
        }
    }
}
