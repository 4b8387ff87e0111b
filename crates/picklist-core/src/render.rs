//! Turns prompt state into the rows of one frame.
//!
//! A frame is, top to bottom:
//!
//! 1. an optional header: `? <message> (Press <enter> to confirm)` once
//!    something is selected, `(Press <space> to select)` before that;
//! 2. one row per visible choice: pointer, selection marker, text;
//! 3. an optional hint row, only when the list scrolls.

use crate::choice::Choice;
use crate::key::PromptKeyBindings;
use crate::runeutil;
use crate::selection::SelectionState;
use crate::viewport::Viewport;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SCROLL_HINT: &str = "(Move up and down to reveal more choices)";

/// Glyphs and styles used by the renderer.
#[derive(Debug, Clone)]
pub struct PromptStyle {
    /// Drawn in front of the row under the pointer.
    pub pointer: String,
    /// Marker for selected choices.
    pub selected_marker: String,
    /// Marker for choices that are not selected.
    pub unselected_marker: String,
    /// Leading `?` of the header.
    pub prefix: String,
    /// Style of the pointer glyph.
    pub pointer_style: Style,
    /// Style of the selected marker and the header prefix.
    pub selected_style: Style,
    /// Style of the question text.
    pub question_style: Style,
    /// Style of each choice's text.
    pub choice_style: Style,
    /// Style of the key label in the header hint.
    pub key_style: Style,
    /// Style of the scroll hint row.
    pub hint_style: Style,
}

impl Default for PromptStyle {
    fn default() -> Self {
        Self {
            pointer: "❯".to_string(),
            selected_marker: "◉".to_string(),
            unselected_marker: "◯".to_string(),
            prefix: "?".to_string(),
            pointer_style: Style::default().fg(Color::LightGreen),
            selected_style: Style::default().fg(Color::Green),
            question_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            choice_style: Style::default().fg(Color::Yellow),
            key_style: Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
            hint_style: Style::default().add_modifier(Modifier::DIM),
        }
    }
}

/// Everything the renderer reads for one frame.
pub struct FrameState<'a, V, S> {
    pub choices: &'a [Choice<V>],
    pub viewport: &'a Viewport,
    pub selection: &'a S,
    /// Header text, already resolved for this frame.
    pub message: &'a str,
}

/// Frame layout switches and styling.
pub struct Renderer<'a> {
    pub style: &'a PromptStyle,
    pub key_bindings: &'a PromptKeyBindings,
    pub header: bool,
    pub scroll_hint: bool,
}

impl Renderer<'_> {
    /// Rows reserved above the list.
    pub fn header_rows(&self) -> usize {
        usize::from(self.header)
    }

    /// Rows reserved below the list when it scrolls.
    pub fn hint_rows(&self) -> usize {
        usize::from(self.scroll_hint)
    }

    /// Build the rows of one frame, each fitted to `width` columns.
    pub fn lines<V, S: SelectionState<V>>(
        &self,
        frame: &FrameState<'_, V, S>,
        width: usize,
    ) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(frame.viewport.height() + 2);

        if self.header {
            lines.push(self.header_line(frame.message, !frame.selection.is_empty()));
        }

        let range = frame.viewport.visible_range();
        let start = range.start;
        for (i, choice) in frame.choices[range].iter().enumerate() {
            let under_pointer = start + i == frame.viewport.absolute_index();
            let selected = frame.selection.is_selected(&choice.value);
            lines.push(self.choice_line(&choice.text, under_pointer, selected, width));
        }

        if self.scroll_hint && frame.viewport.scrolls() {
            lines.push(Line::from(Span::styled(
                runeutil::truncate(SCROLL_HINT, width, "…"),
                self.style.hint_style,
            )));
        }

        lines
    }

    fn header_line(&self, message: &str, has_selection: bool) -> Line<'static> {
        let (key, action) = if has_selection {
            (self.key_bindings.confirm.label(), "to confirm)")
        } else {
            (self.key_bindings.toggle.label(), "to select)")
        };
        Line::from(vec![
            Span::styled(self.style.prefix.clone(), self.style.selected_style),
            Span::raw(" "),
            Span::styled(message.to_string(), self.style.question_style),
            Span::raw(" (Press "),
            Span::styled(key, self.style.key_style),
            Span::raw(" "),
            Span::raw(action),
        ])
    }

    fn choice_line(
        &self,
        text: &str,
        under_pointer: bool,
        selected: bool,
        width: usize,
    ) -> Line<'static> {
        let pointer = if under_pointer {
            Span::styled(self.style.pointer.clone(), self.style.pointer_style)
        } else {
            Span::raw(" ".repeat(runeutil::display_width(&self.style.pointer)))
        };
        let marker = if selected {
            Span::styled(self.style.selected_marker.clone(), self.style.selected_style)
        } else {
            Span::raw(self.style.unselected_marker.clone())
        };

        let used = runeutil::display_width(&pointer.content)
            + runeutil::display_width(&marker.content)
            + 2;
        let text = runeutil::truncate(text, width.saturating_sub(used), "…");

        Line::from(vec![
            pointer,
            Span::raw(" "),
            marker,
            Span::raw(" "),
            Span::styled(text, self.style.choice_style),
        ])
    }
}
