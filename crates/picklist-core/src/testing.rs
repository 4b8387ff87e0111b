use crate::backend::{Backend, TerminalEvent};
use crate::runeutil::line_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::Line;
use std::collections::VecDeque;
use std::io;

/// A key press event with no modifiers.
pub fn key(code: KeyCode) -> TerminalEvent {
    TerminalEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// A key press event with Ctrl held.
pub fn ctrl(code: KeyCode) -> TerminalEvent {
    TerminalEvent::Key(KeyEvent::new(code, KeyModifiers::CONTROL))
}

enum Step {
    Event(TerminalEvent),
    Fail(io::ErrorKind),
    Panic,
}

/// A headless [`Backend`] that replays a script of input events.
///
/// `ScriptedBackend` lets you run a full [`Prompt`](crate::prompt::Prompt)
/// loop in a plain `#[test]` function -- no TTY required.  Every flushed
/// frame is recorded as plain text, and lifecycle calls are counted so
/// tests can check that the terminal is released exactly once.
///
/// When the script runs out, `next_event` fails with
/// [`io::ErrorKind::UnexpectedEof`] rather than blocking.
///
/// # Example
///
/// ```rust,ignore
/// use picklist_core::testing::ScriptedBackend;
/// use crossterm::event::KeyCode;
///
/// let mut backend = ScriptedBackend::new(80, 24)
///     .key(KeyCode::Down)
///     .key(KeyCode::Enter);
/// let result = Prompt::single("Pick one.", choices)?.run(&mut backend)?;
/// assert_eq!(backend.close_calls(), 1);
/// ```
pub struct ScriptedBackend {
    size: (u16, u16),
    script: VecDeque<Step>,
    fail_init: bool,
    pending: Vec<String>,
    frames: Vec<Vec<String>>,
    init_calls: usize,
    close_calls: usize,
}

impl ScriptedBackend {
    /// Create a backend reporting `cols` x `rows`.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            size: (cols, rows),
            script: VecDeque::new(),
            fail_init: false,
            pending: Vec::new(),
            frames: Vec::new(),
            init_calls: 0,
            close_calls: 0,
        }
    }

    /// Queue a key press.
    pub fn key(self, code: KeyCode) -> Self {
        self.event(key(code))
    }

    /// Queue several key presses.
    pub fn keys(mut self, codes: impl IntoIterator<Item = KeyCode>) -> Self {
        for code in codes {
            self = self.key(code);
        }
        self
    }

    /// Queue an arbitrary event.
    ///
    /// A [`TerminalEvent::Resize`] also changes the size reported afterwards.
    pub fn event(mut self, event: TerminalEvent) -> Self {
        self.script.push_back(Step::Event(event));
        self
    }

    /// Queue an I/O failure from `next_event`.
    pub fn fail(mut self, kind: io::ErrorKind) -> Self {
        self.script.push_back(Step::Fail(kind));
        self
    }

    /// Queue a panic from `next_event`.
    pub fn panic(mut self) -> Self {
        self.script.push_back(Step::Panic);
        self
    }

    /// Make `init` fail.
    pub fn fail_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// All flushed frames, oldest first.
    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }

    /// The most recently flushed frame.
    pub fn last_frame(&self) -> Option<&[String]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// How many times `init` was called.
    pub fn init_calls(&self) -> usize {
        self.init_calls
    }

    /// How many times `close` was called.
    pub fn close_calls(&self) -> usize {
        self.close_calls
    }

    /// Events not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Backend for ScriptedBackend {
    fn init(&mut self) -> io::Result<()> {
        self.init_calls += 1;
        if self.fail_init {
            return Err(io::Error::other("terminal unavailable"));
        }
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.close_calls += 1;
        Ok(())
    }

    fn size(&mut self) -> io::Result<(u16, u16)> {
        Ok(self.size)
    }

    fn next_event(&mut self) -> io::Result<TerminalEvent> {
        match self.script.pop_front() {
            Some(Step::Event(event)) => {
                if let TerminalEvent::Resize(cols, rows) = event {
                    self.size = (cols, rows);
                }
                Ok(event)
            }
            Some(Step::Fail(kind)) => Err(io::Error::new(kind, "scripted failure")),
            Some(Step::Panic) => panic!("scripted panic"),
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "event script exhausted",
            )),
        }
    }

    fn clear(&mut self) {
        self.pending.clear();
    }

    fn write_line(&mut self, line: Line<'static>) {
        self.pending.push(line_text(&line));
    }

    fn flush(&mut self) -> io::Result<()> {
        self.frames.push(std::mem::take(&mut self.pending));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_script_then_reports_eof() {
        let mut backend = ScriptedBackend::new(40, 10).key(KeyCode::Down);
        assert_eq!(backend.next_event().unwrap(), key(KeyCode::Down));
        let err = backend.next_event().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn resize_event_changes_size() {
        let mut backend = ScriptedBackend::new(40, 10).event(TerminalEvent::Resize(20, 5));
        backend.next_event().unwrap();
        assert_eq!(backend.size().unwrap(), (20, 5));
    }

    #[test]
    fn records_flushed_frames() {
        let mut backend = ScriptedBackend::new(40, 10);
        backend.write_line(Line::raw("stale"));
        backend.clear();
        backend.write_line(Line::raw("one"));
        backend.flush().unwrap();
        assert_eq!(backend.frames(), &[vec!["one".to_string()]]);
        assert_eq!(backend.last_frame(), Some(&["one".to_string()][..]));
    }
}
