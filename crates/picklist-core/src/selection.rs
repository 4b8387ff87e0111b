//! What the user has picked so far.
//!
//! A prompt is generic over its [`SelectionState`]: [`Single`] behaves like a
//! group of radio buttons, [`Multi`] like a column of checkboxes. Membership
//! is decided by the value's own [`PartialEq`], so two choices carrying equal
//! values are indistinguishable: toggling one marks both as selected.

/// Selection semantics plugged into a [`Prompt`](crate::prompt::Prompt).
pub trait SelectionState<V>: Default {
    /// What the prompt hands back once the user confirms.
    type Output;

    /// Whether `value` is currently selected.
    fn is_selected(&self, value: &V) -> bool;

    /// Select `value` if it is not selected, deselect it otherwise.
    fn toggle(&mut self, value: &V);

    /// Called when the user confirms with the pointer on `pointed`.
    ///
    /// The default leaves the selection untouched.
    fn confirm_with(&mut self, _pointed: &V) {}

    /// Number of selected values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the state into the value returned to the caller.
    fn into_output(self) -> Self::Output;
}

/// At most one selected value.
///
/// Toggling a different value replaces the current one; toggling the current
/// value clears it. Confirming with nothing toggled picks the choice under
/// the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Single<V> {
    current: Option<V>,
}

impl<V> Default for Single<V> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<V> Single<V> {
    /// The selected value, if any.
    pub fn value(&self) -> Option<&V> {
        self.current.as_ref()
    }
}

impl<V: PartialEq + Clone> SelectionState<V> for Single<V> {
    type Output = Option<V>;

    fn is_selected(&self, value: &V) -> bool {
        self.current.as_ref() == Some(value)
    }

    fn toggle(&mut self, value: &V) {
        if self.is_selected(value) {
            self.current = None;
        } else {
            self.current = Some(value.clone());
        }
    }

    fn confirm_with(&mut self, pointed: &V) {
        if self.current.is_none() {
            self.current = Some(pointed.clone());
        }
    }

    fn len(&self) -> usize {
        usize::from(self.current.is_some())
    }

    fn into_output(self) -> Option<V> {
        self.current
    }
}

/// Any number of selected values, kept in the order they were picked.
///
/// Membership is a linear scan. Prompt lists are sized for a human to scroll
/// through, so the selection stays small.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multi<V> {
    values: Vec<V>,
}

impl<V> Default for Multi<V> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<V> Multi<V> {
    /// The selected values in pick order.
    pub fn values(&self) -> &[V] {
        &self.values
    }
}

impl<V: PartialEq + Clone> SelectionState<V> for Multi<V> {
    type Output = Vec<V>;

    fn is_selected(&self, value: &V) -> bool {
        self.values.contains(value)
    }

    fn toggle(&mut self, value: &V) {
        match self.values.iter().position(|v| v == value) {
            Some(pos) => {
                self.values.remove(pos);
            }
            None => self.values.push(value.clone()),
        }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn into_output(self) -> Vec<V> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_starts_empty() {
        let s = Single::<u32>::default();
        assert!(s.is_empty());
        assert_eq!(s.value(), None);
        assert!(!s.is_selected(&1));
    }

    #[test]
    fn single_replaces_previous_value() {
        let mut s = Single::default();
        s.toggle(&1);
        s.toggle(&2);
        assert!(!s.is_selected(&1));
        assert!(s.is_selected(&2));
        assert_eq!(s.len(), 1);
        assert_eq!(s.into_output(), Some(2));
    }

    #[test]
    fn single_toggle_twice_evicts_other_value() {
        let mut s = Single::default();
        s.toggle(&1);
        let before = s.clone();
        s.toggle(&2);
        s.toggle(&2);
        // the first toggle of 2 evicted 1, the second cleared 2
        assert_ne!(s, before);
        assert_eq!(s.value(), None);

        let mut empty = Single::<u32>::default();
        empty.toggle(&7);
        empty.toggle(&7);
        assert_eq!(empty, Single::default());
    }

    #[test]
    fn single_toggle_on_selected_clears_then_reselects() {
        let mut s = Single::default();
        s.toggle(&3);
        s.toggle(&3);
        assert_eq!(s.value(), None);
        s.toggle(&3);
        assert_eq!(s.value(), Some(&3));
    }

    #[test]
    fn single_confirm_falls_back_to_pointer() {
        let mut s = Single::default();
        s.confirm_with(&5);
        assert_eq!(s.value(), Some(&5));

        let mut picked = Single::default();
        picked.toggle(&1);
        picked.confirm_with(&5);
        assert_eq!(picked.value(), Some(&1));
    }

    #[test]
    fn multi_confirm_keeps_selection() {
        let mut m = Multi::default();
        m.confirm_with(&5);
        assert!(m.is_empty());
    }

    #[test]
    fn multi_toggle_twice_is_identity() {
        let mut m = Multi::default();
        m.toggle(&"a");
        m.toggle(&"b");
        let before = m.clone();

        m.toggle(&"c");
        m.toggle(&"c");
        assert_eq!(m, before);

        m.toggle(&"a");
        m.toggle(&"a");
        assert_eq!(m.len(), before.len());
        assert!(m.is_selected(&"a"));
        assert!(m.is_selected(&"b"));
    }

    #[test]
    fn multi_keeps_pick_order() {
        let mut m = Multi::default();
        for v in [3, 1, 2] {
            m.toggle(&v);
        }
        m.toggle(&1);
        assert_eq!(m.values(), &[3, 2]);
        assert_eq!(m.into_output(), vec![3, 2]);
    }

    #[test]
    fn equal_values_share_selection() {
        let mut m = Multi::default();
        m.toggle(&"dup");
        // a second choice carrying the same value reads as selected too
        assert!(m.is_selected(&"dup"));
        m.toggle(&"dup");
        assert!(m.is_empty());
    }
}
