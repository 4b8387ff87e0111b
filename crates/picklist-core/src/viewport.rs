//! Scrolling window over a fixed-length choice list.
//!
//! `Viewport` tracks which contiguous slice of the list is on screen
//! (`offset`) and which row of that slice carries the pointer (`cursor`).
//! Moving keeps the pointer parked on the middle row whenever the window can
//! scroll instead, so long lists scroll "around" the pointer rather than the
//! pointer chasing the screen edge. At either end of the list the pointer
//! travels to the boundary rows.
//!
//! The invariant maintained by every operation is
//! `cursor < height` and `offset + height <= len`. An empty list has a
//! zero-height window and no pointer row; moves and resizes leave it as is.

use std::ops::Range;

/// Cursor and scroll offset for a list of `len` choices shown `height` rows
/// at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    cursor: usize,
    offset: usize,
    len: usize,
    height: usize,
}

impl Viewport {
    /// Create a viewport at the top of the list.
    ///
    /// `height` is clamped into `1..=len`, or to zero for an empty list.
    pub fn new(len: usize, height: usize) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            len,
            height: clamp_height(height, len),
        }
    }

    /// Row inside the visible window that carries the pointer.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first visible choice.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of visible rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of choices.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no choices at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index into the choice list of the row under the pointer.
    pub fn absolute_index(&self) -> usize {
        self.offset + self.cursor
    }

    /// Choice indices currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        self.offset..(self.offset + self.height).min(self.len)
    }

    /// Whether some choices are off screen.
    pub fn scrolls(&self) -> bool {
        self.len > self.height
    }

    /// Rows available for choices on a terminal `rows` tall.
    ///
    /// `header_rows` are always reserved. `hint_rows` are only reserved when
    /// the list does not fit in what remains after the header, since the
    /// scroll hint is only drawn for lists that scroll. The result is never
    /// less than one row unless the list is empty.
    pub fn usable_height(&self, rows: usize, header_rows: usize, hint_rows: usize) -> usize {
        let available = rows.saturating_sub(header_rows);
        let height = if self.len <= available {
            self.len
        } else {
            available.saturating_sub(hint_rows)
        };
        clamp_height(height, self.len)
    }

    /// Change the window height, keeping the choice under the pointer.
    ///
    /// The pointer is pulled into the window if the window shrank below it,
    /// and the window is pulled back if it would run past the end of the list.
    pub fn resize(&mut self, height: usize) {
        let height = clamp_height(height, self.len);
        if height == self.height || self.len == 0 {
            return;
        }
        let index = self.absolute_index();
        self.height = height;
        if self.cursor >= height {
            self.cursor = height - 1;
        }
        self.offset = index - self.cursor;

        let max_offset = self.len.saturating_sub(height);
        if self.offset > max_offset {
            self.offset = max_offset;
            self.cursor = index - max_offset;
        }

        // Re-park the pointer on the middle row where the window has room to
        // scroll, otherwise later steps could stall against the window edge.
        let middle = self.middle();
        if self.cursor > middle {
            let shift = (self.cursor - middle).min(max_offset - self.offset);
            self.offset += shift;
            self.cursor -= shift;
        } else if self.cursor < middle {
            let shift = (middle - self.cursor).min(self.offset);
            self.offset -= shift;
            self.cursor += shift;
        }
    }

    /// Move the pointer `delta` rows, one centered step at a time.
    ///
    /// Negative values move up. Steps that would leave the list are no-ops.
    pub fn move_by(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        for _ in 0..delta.unsigned_abs() {
            if delta < 0 {
                self.step_up();
            } else {
                self.step_down();
            }
        }
    }

    /// Move the pointer one row up.
    pub fn move_up(&mut self) {
        self.move_by(-1);
    }

    /// Move the pointer one row down.
    pub fn move_down(&mut self) {
        self.move_by(1);
    }

    fn middle(&self) -> usize {
        self.height / 2
    }

    fn step_up(&mut self) {
        if self.cursor == self.middle() && self.offset > 0 {
            self.offset -= 1;
        } else if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn step_down(&mut self) {
        if self.cursor == self.middle() && self.len - self.offset > self.height {
            self.offset += 1;
        } else if self.absolute_index() + 1 < self.len && self.cursor + 1 < self.height {
            self.cursor += 1;
        }
    }
}

fn clamp_height(height: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        height.clamp(1, len)
    }
}
