//! Core engine for **picklist** terminal prompts.
//!
//! A prompt shows a question and a list of choices that may be far longer
//! than the terminal is tall. The user moves a pointer with the arrow keys,
//! toggles choices with space, confirms with enter and cancels with escape.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Prompt`] | The key-driven state machine and its blocking run loop |
//! | [`Viewport`] | Which slice of the list is on screen, and where the pointer is |
//! | [`SelectionState`] | [`Single`] (radio) or [`Multi`] (checkbox) selection |
//! | [`Message`] | Header text, fixed or computed from the selection |
//! | [`Backend`] | The terminal seam; [`CrosstermTerminal`] is the real one |
//! | [`ScriptedBackend`](testing::ScriptedBackend) | Headless backend for tests |
//!
//! # Quick example
//!
//! ```no_run
//! use picklist_core::{ask_multi, Choice};
//!
//! let choices = (1..=100).map(|i| Choice::new(format!("Option {i}"), i)).collect();
//! let result = ask_multi("Choose which tenants to install.", choices)?;
//! if !result.canceled {
//!     println!("{:?}", result.selection);
//! }
//! # Ok::<(), picklist_core::PromptError>(())
//! ```

pub mod backend;
pub mod choice;
pub mod error;
pub mod key;
pub mod message;
pub mod prompt;
pub mod render;
pub mod runeutil;
pub mod selection;
pub mod terminal;
pub mod testing;
pub mod viewport;

pub use backend::{Backend, TerminalEvent};
pub use choice::Choice;
pub use error::PromptError;
pub use key::{Action, Binding, KeyCombination, PromptKeyBindings};
pub use message::Message;
pub use prompt::{Prompt, PromptOptions, PromptResult, Status};
pub use render::PromptStyle;
pub use selection::{Multi, SelectionState, Single};
pub use terminal::{CrosstermTerminal, OutputTarget, TerminalOptions};
pub use viewport::Viewport;

/// Ask the user to pick at most one value, with default options.
pub fn ask_single<V: PartialEq + Clone>(
    message: impl Into<Message<Single<V>>>,
    choices: Vec<Choice<V>>,
) -> Result<PromptResult<Option<V>>, PromptError> {
    ask_single_with(message, choices, PromptOptions::default())
}

/// Ask the user to pick at most one value.
pub fn ask_single_with<V: PartialEq + Clone>(
    message: impl Into<Message<Single<V>>>,
    choices: Vec<Choice<V>>,
    options: PromptOptions,
) -> Result<PromptResult<Option<V>>, PromptError> {
    let mut terminal = CrosstermTerminal::new(options.terminal.clone());
    Prompt::single(message, choices)?
        .with_options(options)
        .run(&mut terminal)
}

/// Ask the user to pick any number of values, with default options.
pub fn ask_multi<V: PartialEq + Clone>(
    message: impl Into<Message<Multi<V>>>,
    choices: Vec<Choice<V>>,
) -> Result<PromptResult<Vec<V>>, PromptError> {
    ask_multi_with(message, choices, PromptOptions::default())
}

/// Ask the user to pick any number of values.
pub fn ask_multi_with<V: PartialEq + Clone>(
    message: impl Into<Message<Multi<V>>>,
    choices: Vec<Choice<V>>,
    options: PromptOptions,
) -> Result<PromptResult<Vec<V>>, PromptError> {
    let mut terminal = CrosstermTerminal::new(options.terminal.clone());
    Prompt::multi(message, choices)?
        .with_options(options)
        .run(&mut terminal)
}
