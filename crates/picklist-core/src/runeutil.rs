//! Display-width helpers for fitting choice text on one terminal row.

use ratatui::text::Line;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_width` display columns.
///
/// Strings that fit are returned unchanged. Otherwise `tail` is appended and
/// the result, tail included, never exceeds `max_width` columns.
///
/// ```
/// use picklist_core::runeutil::truncate;
///
/// assert_eq!(truncate("hello world", 8, "..."), "hello...");
/// assert_eq!(truncate("hi", 10, "..."), "hi");
/// ```
pub fn truncate(s: &str, max_width: usize, tail: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let tail_width = display_width(tail);
    if tail_width >= max_width {
        return take_columns(tail, max_width);
    }

    let mut result = take_columns(s, max_width - tail_width);
    result.push_str(tail);
    result
}

/// Plain text of a styled line, spans concatenated.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn take_columns(s: &str, columns: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > columns {
            break;
        }
        result.push(c);
        width += cw;
    }
    result
}
