//! The question shown in the prompt header.

use std::fmt;

/// Header text: either fixed, or computed from the current selection.
///
/// A computed message is re-evaluated on every frame, so it can reflect the
/// selection the moment it changes:
///
/// ```
/// use picklist_core::message::Message;
/// use picklist_core::selection::{Multi, SelectionState};
///
/// let message = Message::computed(|s: &Multi<u32>| match s.len() {
///     0 => "Choose some options.".to_string(),
///     n => format!("You have chosen {n} option(s)."),
/// });
///
/// let mut selection = Multi::default();
/// assert_eq!(message.resolve(&selection), "Choose some options.");
/// selection.toggle(&4);
/// assert_eq!(message.resolve(&selection), "You have chosen 1 option(s).");
/// ```
pub enum Message<S> {
    /// Shown verbatim.
    Literal(String),
    /// Called with the current selection on every render.
    Computed(Box<dyn Fn(&S) -> String>),
}

impl<S> Message<S> {
    /// Build a message from a function of the current selection.
    pub fn computed(f: impl Fn(&S) -> String + 'static) -> Self {
        Message::Computed(Box::new(f))
    }

    /// Resolve the text for the given selection.
    pub fn resolve(&self, selection: &S) -> String {
        match self {
            Message::Literal(text) => text.clone(),
            Message::Computed(f) => f(selection),
        }
    }
}

impl<S> From<&str> for Message<S> {
    fn from(text: &str) -> Self {
        Message::Literal(text.to_string())
    }
}

impl<S> From<String> for Message<S> {
    fn from(text: String) -> Self {
        Message::Literal(text)
    }
}

impl<S> fmt::Debug for Message<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Message::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}
