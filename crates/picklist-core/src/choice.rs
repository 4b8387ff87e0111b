/// One row of a prompt: the text shown to the user and the value handed back
/// when it is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<V> {
    /// Label drawn in the list.
    pub text: String,
    /// Returned to the caller when this choice is picked.
    pub value: V,
}

impl<V> Choice<V> {
    /// A choice labelled `text` that yields `value`.
    pub fn new(text: impl Into<String>, value: V) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

impl<V: ToString> From<V> for Choice<V> {
    /// A choice whose text is its value's `Display` form.
    fn from(value: V) -> Self {
        Self {
            text: value.to_string(),
            value,
        }
    }
}
