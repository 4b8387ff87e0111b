//! [`Backend`] implementation for a real terminal via crossterm and ratatui.

use crate::backend::{Backend, TerminalEvent};
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, text::Line, widgets::Paragraph, Terminal};
use std::io::{self, stderr, stdout, Stderr, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use tracing::{debug, warn};

/// Output target for the prompt.
///
/// By default the prompt renders to **stdout**.  When your program's stdout
/// is piped (e.g. to print the picked values), switch to
/// [`Stderr`](OutputTarget::Stderr) so the prompt goes to the terminal while
/// the result flows through the pipe.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Writer that wraps either stdout or stderr.
enum Output {
    Stdout(Stdout),
    Stderr(Stderr),
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(w) => w.write(buf),
            Output::Stderr(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(w) => w.flush(),
            Output::Stderr(w) => w.flush(),
        }
    }
}

impl Output {
    fn new(target: OutputTarget) -> Self {
        match target {
            OutputTarget::Stdout => Output::Stdout(stdout()),
            OutputTarget::Stderr => Output::Stderr(stderr()),
        }
    }
}

/// Terminal setup for [`CrosstermTerminal`].
#[derive(Debug, Clone)]
pub struct TerminalOptions {
    /// Draw in the alternate screen (default: true).
    pub alt_screen: bool,
    /// Restore the terminal before a panic message is printed (default: true).
    pub catch_panics: bool,
    /// Where to draw (default: stdout).
    pub output: OutputTarget,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            alt_screen: true,
            catch_panics: true,
            output: OutputTarget::default(),
        }
    }
}

/// A real terminal: raw mode, crossterm input, ratatui drawing.
///
/// Rows written with [`Backend::write_line`] are buffered and drawn as one
/// paragraph on [`Backend::flush`].
pub struct CrosstermTerminal {
    options: TerminalOptions,
    terminal: Option<Terminal<CrosstermBackend<Output>>>,
    pending: Vec<Line<'static>>,
}

impl CrosstermTerminal {
    /// A terminal that stays untouched until [`Backend::init`].
    pub fn new(options: TerminalOptions) -> Self {
        Self {
            options,
            terminal: None,
            pending: Vec::new(),
        }
    }

    /// Whether the terminal is currently in interactive mode.
    pub fn is_active(&self) -> bool {
        self.terminal.is_some()
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new(TerminalOptions::default())
    }
}

impl Backend for CrosstermTerminal {
    fn init(&mut self) -> io::Result<()> {
        if self.terminal.is_none() {
            self.terminal = Some(init_terminal(&self.options)?);
            debug!(alt_screen = self.options.alt_screen, "terminal initialized");
        }
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        if self.terminal.take().is_some() {
            self.pending.clear();
            // `None` means the panic hook already restored it.
            if let Some(restored) = release_terminal(self.options.alt_screen, self.options.output) {
                restored?;
                debug!("terminal restored");
            }
        }
        Ok(())
    }

    fn size(&mut self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    fn next_event(&mut self) -> io::Result<TerminalEvent> {
        crossterm::event::read().map(TerminalEvent::from)
    }

    fn clear(&mut self) {
        self.pending.clear();
    }

    fn write_line(&mut self, line: Line<'static>) {
        self.pending.push(line);
    }

    fn flush(&mut self) -> io::Result<()> {
        let lines = std::mem::take(&mut self.pending);
        if let Some(terminal) = self.terminal.as_mut() {
            terminal.draw(|frame| {
                frame.render_widget(Paragraph::new(lines), frame.area());
            })?;
        }
        Ok(())
    }
}

/// Set while a session holds the terminal in raw mode. Whoever swaps it back
/// to `false` (the panic hook or [`CrosstermTerminal::close`]) restores.
static ACTIVE: AtomicBool = AtomicBool::new(false);

#[cfg(test)]
static RESTORES: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

fn init_terminal(options: &TerminalOptions) -> io::Result<Terminal<CrosstermBackend<Output>>> {
    if options.catch_panics {
        install_panic_hook(options.alt_screen, options.output);
    }

    enable_raw_mode()?;
    finish_setup(options, || {
        let mut writer = Output::new(options.output);
        if options.alt_screen {
            execute!(writer, EnterAlternateScreen)?;
        }
        execute!(writer, cursor::Hide)?;
        Terminal::new(CrosstermBackend::new(writer))
    })
}

/// Run the setup steps that follow `enable_raw_mode`. On failure the
/// terminal is restored before the error is returned; on success the session
/// is marked active.
fn finish_setup<T>(
    options: &TerminalOptions,
    setup: impl FnOnce() -> io::Result<T>,
) -> io::Result<T> {
    match setup() {
        Ok(value) => {
            ACTIVE.store(true, Ordering::SeqCst);
            Ok(value)
        }
        Err(e) => {
            if let Err(restore) = restore_terminal(options.alt_screen, options.output) {
                warn!(error = %restore, "failed to restore terminal after setup error");
            }
            Err(e)
        }
    }
}

/// Install the panic hook once per process. It only restores while a
/// session is active, so panics in the host after `close` pass through
/// untouched.
fn install_panic_hook(alt_screen: bool, output: OutputTarget) {
    static HOOK_INSTALLED: Once = Once::new();
    HOOK_INSTALLED.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = release_terminal(alt_screen, output);
            original_hook(info);
        }));
    });
}

/// Restore the terminal if a session is active. Returns `None` when there
/// was nothing to release.
fn release_terminal(alt_screen: bool, output: OutputTarget) -> Option<io::Result<()>> {
    if ACTIVE.swap(false, Ordering::SeqCst) {
        Some(restore_terminal(alt_screen, output))
    } else {
        None
    }
}

fn restore_terminal(alt_screen: bool, output_target: OutputTarget) -> io::Result<()> {
    #[cfg(test)]
    RESTORES.fetch_add(1, Ordering::SeqCst);

    // Best-effort: keep restoring even if a step fails.
    let raw = disable_raw_mode();
    let mut writer = Output::new(output_target);
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    raw
}
