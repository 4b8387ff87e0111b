//! The terminal seam the prompt engine draws to and reads input from.
//!
//! [`Backend`] is deliberately primitive: lifecycle, size, one blocking event
//! read, and line-oriented drawing. The crossterm implementation lives in
//! [`terminal`](crate::terminal); tests use
//! [`ScriptedBackend`](crate::testing::ScriptedBackend).

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::text::Line;
use std::io;

/// Input events the prompt engine reacts to.
///
/// Converted from [`crossterm::event::Event`]. Everything the engine has no
/// use for (mouse, focus changes, paste) collapses into
/// [`Other`](TerminalEvent::Other).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Any event the prompt ignores.
    Other,
}

impl TerminalEvent {
    /// Return the key event if this is a key *press*.
    ///
    /// Release and repeat events (reported by some platforms) yield `None`
    /// so a single physical key press is handled once.
    pub fn key_press(&self) -> Option<&KeyEvent> {
        match self {
            TerminalEvent::Key(key) if key.kind == KeyEventKind::Press => Some(key),
            _ => None,
        }
    }
}

impl From<Event> for TerminalEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(k) => TerminalEvent::Key(k),
            Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {
                TerminalEvent::Other
            }
        }
    }
}

impl From<KeyEvent> for TerminalEvent {
    fn from(key: KeyEvent) -> Self {
        TerminalEvent::Key(key)
    }
}

/// A terminal the prompt engine can drive.
///
/// The engine calls [`init`](Backend::init) once before the first frame and
/// [`close`](Backend::close) exactly once afterwards, on every exit path.
/// Each frame is drawn as `clear`, one `write_line` per row, then `flush`.
pub trait Backend {
    /// Enter interactive mode (raw input, hidden cursor, ...).
    fn init(&mut self) -> io::Result<()>;

    /// Leave interactive mode and restore the terminal.
    fn close(&mut self) -> io::Result<()>;

    /// Current terminal size as `(columns, rows)`.
    fn size(&mut self) -> io::Result<(u16, u16)>;

    /// Block until the next input event arrives.
    fn next_event(&mut self) -> io::Result<TerminalEvent>;

    /// Discard everything written since the last flush.
    fn clear(&mut self);

    /// Append one row to the pending frame.
    fn write_line(&mut self, line: Line<'static>);

    /// Present the pending frame.
    fn flush(&mut self) -> io::Result<()>;
}
