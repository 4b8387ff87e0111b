//! Key bindings for the prompt's five actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key press with optional modifier keys (Ctrl, Alt, Shift).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    /// The base key code.
    pub code: KeyCode,
    /// Modifier keys that must be held alongside the base key.
    pub modifiers: KeyModifiers,
}

impl KeyCombination {
    /// A key with no modifiers.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A key held with Ctrl.
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Short label used in header hints, e.g. `<enter>` or `<ctrl+c>`.
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            other => format!("{other:?}").to_lowercase(),
        };
        let mut prefix = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            prefix.push_str("ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            prefix.push_str("alt+");
        }
        format!("<{prefix}{key}>")
    }
}

/// One or more key combinations that trigger the same action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Combinations that trigger this binding. The first one is used for hints.
    pub keys: Vec<KeyCombination>,
}

impl Binding {
    /// A binding triggered by a single key combination.
    pub fn new(key: KeyCombination) -> Self {
        Self { keys: vec![key] }
    }

    /// A binding triggered by any of `keys`. The first one labels hints.
    pub fn with_keys(keys: Vec<KeyCombination>) -> Self {
        Self { keys }
    }

    /// Return whether the key event matches any of this binding's combinations.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.keys
            .iter()
            .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }

    /// Hint label of the first combination, or an empty string.
    pub fn label(&self) -> String {
        self.keys.first().map(KeyCombination::label).unwrap_or_default()
    }
}

/// What a key press asks the prompt to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the pointer one row up.
    Up,
    /// Move the pointer one row down.
    Down,
    /// Select or deselect the choice under the pointer.
    Toggle,
    /// Finish with the current selection.
    Confirm,
    /// Finish with nothing selected.
    Cancel,
}

/// Configurable key map for a prompt.
///
/// ```ignore
/// use picklist_core::key::{Binding, KeyCombination, PromptKeyBindings};
/// use crossterm::event::KeyCode;
///
/// let mut keys = PromptKeyBindings::default();
/// keys.toggle = Binding::with_keys(vec![
///     KeyCombination::new(KeyCode::Char(' ')),
///     KeyCombination::new(KeyCode::Char('x')),
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct PromptKeyBindings {
    /// Move the pointer up. Default: Up
    pub up: Binding,
    /// Move the pointer down. Default: Down
    pub down: Binding,
    /// Toggle the choice under the pointer. Default: Space
    pub toggle: Binding,
    /// Accept the current selection. Default: Enter
    pub confirm: Binding,
    /// Abandon the prompt. Default: Esc, Ctrl+C
    pub cancel: Binding,
}

impl Default for PromptKeyBindings {
    fn default() -> Self {
        Self {
            up: Binding::new(KeyCombination::new(KeyCode::Up)),
            down: Binding::new(KeyCombination::new(KeyCode::Down)),
            toggle: Binding::new(KeyCombination::new(KeyCode::Char(' '))),
            confirm: Binding::new(KeyCombination::new(KeyCode::Enter)),
            cancel: Binding::with_keys(vec![
                KeyCombination::new(KeyCode::Esc),
                KeyCombination::ctrl(KeyCode::Char('c')),
            ]),
        }
    }
}

impl PromptKeyBindings {
    /// Map a key press to an action. Cancel is checked first so Ctrl+C wins
    /// over any binding on a bare `c`.
    pub fn action(&self, key: &KeyEvent) -> Option<Action> {
        if self.cancel.matches(key) {
            Some(Action::Cancel)
        } else if self.confirm.matches(key) {
            Some(Action::Confirm)
        } else if self.toggle.matches(key) {
            Some(Action::Toggle)
        } else if self.up.matches(key) {
            Some(Action::Up)
        } else if self.down.matches(key) {
            Some(Action::Down)
        } else {
            None
        }
    }
}
