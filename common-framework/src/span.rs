use crate::buffer::BufferView;
use crate::cursor::Cursor;
use std::fmt;

/// A half-open range of cursors, always normalised so `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextSpan {
    start: Cursor,
    end: Cursor,
}

impl TextSpan {
    /// Creates a span between two cursors, swapping them if reversed.
    pub fn new(a: Cursor, b: Cursor) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Creates a span that includes the character under the larger cursor.
    ///
    /// The cursors are normalised first, then the end moves one column to
    /// the right, so `inclusive(c, c)` bounds exactly the character at `c`.
    pub fn inclusive(a: Cursor, b: Cursor) -> Self {
        let span = Self::new(a, b);
        Self {
            start: span.start,
            end: span.end.next_column(),
        }
    }

    /// Creates a zero-width span at `cursor`.
    pub fn empty(cursor: Cursor) -> Self {
        Self {
            start: cursor,
            end: cursor,
        }
    }

    /// Convenience constructor for single-row spans.
    pub fn on_row(row: usize, start_column: usize, end_column: usize) -> Self {
        Self::new(Cursor::new(row, start_column), Cursor::new(row, end_column))
    }

    /// Returns the first cursor of the span.
    pub fn start(&self) -> Cursor {
        self.start
    }

    /// Returns the cursor just past the span.
    pub fn end(&self) -> Cursor {
        self.end
    }

    /// Returns true if the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `cursor` lies in `[start, end)`.
    pub fn contains(&self, cursor: Cursor) -> bool {
        self.start <= cursor && cursor < self.end
    }

    /// Extends this span to the union of both spans.
    pub fn join(&mut self, other: &TextSpan) {
        self.start = self.start.min(other.start);
        self.end = self.end.max(other.end);
    }

    /// By-value form of [`TextSpan::join`].
    pub fn joined(mut self, other: &TextSpan) -> Self {
        self.join(other);
        self
    }

    /// Iterates the cursors from `start` up to, but excluding, `end`.
    ///
    /// The iterator is finite: it also stops once the buffer yields no more
    /// positions. Call `iter` again to restart.
    pub fn iter<'b, B: BufferView + ?Sized>(&self, buffer: &'b B) -> SpanIter<'b, B> {
        SpanIter {
            buffer,
            next: self.start,
            end: self.end,
        }
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Lazy cursor sequence produced by [`TextSpan::iter`].
#[derive(Debug)]
pub struct SpanIter<'b, B: ?Sized> {
    buffer: &'b B,
    next: Cursor,
    end: Cursor,
}

impl<B: BufferView + ?Sized> Iterator for SpanIter<'_, B> {
    type Item = Cursor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let current = self.next;
        self.next.move_forward(self.buffer);
        if self.next == current {
            // No further positions in the buffer.
            self.end = current;
        }
        Some(current)
    }
}
