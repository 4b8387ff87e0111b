//! The prompt engine: a key-driven state machine over a [`Viewport`] and a
//! [`SelectionState`].
//!
//! A prompt is `Running` until the user confirms or cancels:
//!
//! | Key (default binding) | Effect | Next |
//! |---|---|---|
//! | Esc, Ctrl+C | none | `Canceled` |
//! | Enter | single-select with nothing picked takes the pointed choice | `Confirmed` |
//! | Space | toggle the choice under the pointer | `Running` |
//! | Up / Down | move the pointer | `Running` |
//! | anything else | ignored | `Running` |
//!
//! [`Prompt::update`] applies one event without touching a terminal, which is
//! what the tests drive. [`Prompt::run`] wraps it in the blocking loop:
//! render, wait for an event, update, render again.

use crate::backend::{Backend, TerminalEvent};
use crate::choice::Choice;
use crate::error::PromptError;
use crate::key::{Action, PromptKeyBindings};
use crate::message::Message;
use crate::render::{FrameState, PromptStyle, Renderer};
use crate::selection::{Multi, SelectionState, Single};
use crate::terminal::TerminalOptions;
use crate::viewport::Viewport;
use ratatui::text::Line;
use std::io;
use tracing::{debug, trace, warn};

/// Configuration for a [`Prompt`].
///
/// Use struct update syntax to override only what you need:
///
/// ```rust,ignore
/// use picklist_core::PromptOptions;
///
/// let opts = PromptOptions {
///     scroll_hint: false,
///     ..PromptOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct PromptOptions {
    /// Draw the question header line (default: true).
    pub header: bool,
    /// Draw the "more choices" hint when the list scrolls (default: true).
    pub scroll_hint: bool,
    /// Keys for the prompt's actions.
    pub key_bindings: PromptKeyBindings,
    /// Glyphs and colours.
    pub style: PromptStyle,
    /// Terminal setup used by [`ask_single_with`](crate::ask_single_with) and
    /// [`ask_multi_with`](crate::ask_multi_with).
    pub terminal: TerminalOptions,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            header: true,
            scroll_hint: true,
            key_bindings: PromptKeyBindings::default(),
            style: PromptStyle::default(),
            terminal: TerminalOptions::default(),
        }
    }
}

/// Where the prompt is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Still waiting for input.
    Running,
    /// The user accepted the selection.
    Confirmed,
    /// The user abandoned the prompt.
    Canceled,
}

/// What a finished prompt hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptResult<T> {
    /// The confirmed selection; empty when canceled.
    pub selection: T,
    /// Whether the user abandoned the prompt.
    pub canceled: bool,
}

/// An interactive list prompt.
///
/// `V` is the value type carried by each [`Choice`]; `S` decides whether one
/// ([`Single`]) or many ([`Multi`]) values can be picked.
pub struct Prompt<V, S> {
    choices: Vec<Choice<V>>,
    message: Message<S>,
    viewport: Viewport,
    selection: S,
    status: Status,
    options: PromptOptions,
}

impl<V: PartialEq + Clone> Prompt<V, Single<V>> {
    /// A prompt that picks at most one value.
    pub fn single(
        message: impl Into<Message<Single<V>>>,
        choices: Vec<Choice<V>>,
    ) -> Result<Self, PromptError> {
        Self::new(message, choices)
    }
}

impl<V: PartialEq + Clone> Prompt<V, Multi<V>> {
    /// A prompt that picks any number of values.
    pub fn multi(
        message: impl Into<Message<Multi<V>>>,
        choices: Vec<Choice<V>>,
    ) -> Result<Self, PromptError> {
        Self::new(message, choices)
    }
}

impl<V, S: SelectionState<V>> Prompt<V, S> {
    /// Create a prompt at the top of the list with nothing selected.
    ///
    /// Returns [`PromptError::EmptyChoices`] for an empty list.
    pub fn new(
        message: impl Into<Message<S>>,
        choices: Vec<Choice<V>>,
    ) -> Result<Self, PromptError> {
        if choices.is_empty() {
            return Err(PromptError::EmptyChoices);
        }
        let viewport = Viewport::new(choices.len(), choices.len());
        Ok(Self {
            choices,
            message: message.into(),
            viewport,
            selection: S::default(),
            status: Status::Running,
            options: PromptOptions::default(),
        })
    }

    /// Replace the prompt's options.
    pub fn with_options(mut self, options: PromptOptions) -> Self {
        self.options = options;
        self
    }

    /// The options in effect.
    pub fn options(&self) -> &PromptOptions {
        &self.options
    }

    /// All choices, in display order.
    pub fn choices(&self) -> &[Choice<V>] {
        &self.choices
    }

    /// Current scroll window and pointer row.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// What has been picked so far.
    pub fn selection(&self) -> &S {
        &self.selection
    }

    /// Whether the prompt is still running.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The choice under the pointer.
    pub fn current(&self) -> &Choice<V> {
        &self.choices[self.viewport.absolute_index()]
    }

    /// Header text for the current selection.
    pub fn message(&self) -> String {
        self.message.resolve(&self.selection)
    }

    /// Apply one input event and return the resulting status.
    ///
    /// Events arriving after the prompt has finished are ignored.
    pub fn update(&mut self, event: &TerminalEvent) -> Status {
        if self.status != Status::Running {
            return self.status;
        }
        if let Some(action) = event
            .key_press()
            .and_then(|key| self.options.key_bindings.action(key))
        {
            self.apply(action);
        }
        self.status
    }

    /// Apply an action directly, bypassing key bindings.
    pub fn apply(&mut self, action: Action) {
        if self.status != Status::Running {
            return;
        }
        match action {
            Action::Up => self.viewport.move_up(),
            Action::Down => self.viewport.move_down(),
            Action::Toggle => {
                let index = self.viewport.absolute_index();
                self.selection.toggle(&self.choices[index].value);
                debug!(index, selected = self.selection.len(), "toggled choice");
            }
            Action::Confirm => {
                let index = self.viewport.absolute_index();
                self.selection.confirm_with(&self.choices[index].value);
                self.status = Status::Confirmed;
            }
            Action::Cancel => self.status = Status::Canceled,
        }
    }

    /// Fit the viewport to a terminal `rows` tall.
    pub fn fit(&mut self, rows: u16) {
        let renderer = self.renderer();
        let height = self.viewport.usable_height(
            usize::from(rows),
            renderer.header_rows(),
            renderer.hint_rows(),
        );
        self.viewport.resize(height);
    }

    /// Rows of the current frame, fitted to `width` columns.
    ///
    /// The message is resolved afresh on every call.
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let message = self.message();
        let frame = FrameState {
            choices: &self.choices,
            viewport: &self.viewport,
            selection: &self.selection,
            message: &message,
        };
        self.renderer().lines(&frame, usize::from(width))
    }

    /// Draw the current state to `backend`, re-querying its size first.
    pub fn render<B: Backend>(&mut self, backend: &mut B) -> io::Result<()> {
        let (cols, rows) = backend.size()?;
        self.fit(rows);
        trace!(
            cursor = self.viewport.cursor(),
            offset = self.viewport.offset(),
            height = self.viewport.height(),
            "render"
        );
        backend.clear();
        for line in self.lines(cols) {
            backend.write_line(line);
        }
        backend.flush()
    }

    /// Run the prompt until the user confirms or cancels.
    ///
    /// The backend is initialised once and closed exactly once on every exit
    /// path, including I/O errors and panics raised while the prompt runs.
    pub fn run<B: Backend>(mut self, backend: &mut B) -> Result<PromptResult<S::Output>, PromptError> {
        backend.init()?;
        debug!(choices = self.choices.len(), "prompt started");

        let mut session = Session {
            backend,
            closed: false,
        };
        let outcome = self.event_loop(&mut *session.backend);
        let closed = session.close();

        outcome?;
        closed?;
        debug!(status = ?self.status, "prompt finished");
        Ok(self.into_result())
    }

    /// Consume the prompt into its result.
    ///
    /// A canceled prompt yields an empty selection regardless of what had
    /// been picked.
    pub fn into_result(self) -> PromptResult<S::Output> {
        let canceled = self.status == Status::Canceled;
        let selection = if canceled {
            S::default().into_output()
        } else {
            self.selection.into_output()
        };
        PromptResult {
            selection,
            canceled,
        }
    }

    fn event_loop<B: Backend>(&mut self, backend: &mut B) -> io::Result<()> {
        self.render(backend)?;
        loop {
            let event = backend.next_event()?;
            if self.update(&event) != Status::Running {
                return Ok(());
            }
            self.render(backend)?;
        }
    }

    fn renderer(&self) -> Renderer<'_> {
        Renderer {
            style: &self.options.style,
            key_bindings: &self.options.key_bindings,
            header: self.options.header,
            scroll_hint: self.options.scroll_hint,
        }
    }
}

/// Closes the backend exactly once: explicitly through [`Session::close`],
/// or on drop if the loop unwinds.
struct Session<'a, B: Backend> {
    backend: &'a mut B,
    closed: bool,
}

impl<B: Backend> Session<'_, B> {
    fn close(mut self) -> io::Result<()> {
        self.closed = true;
        self.backend.close()
    }
}

impl<B: Backend> Drop for Session<'_, B> {
    fn drop(&mut self) {
        if !self.closed {
            if let Err(e) = self.backend.close() {
                warn!(error = %e, "failed to restore terminal");
            }
        }
    }
}
