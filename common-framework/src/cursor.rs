use crate::buffer::BufferView;
use std::fmt;

/// A position in a line-indexed buffer.
///
/// Cursors are ordered row-major, then by column. Moving back from `(0, 0)`
/// produces [`Cursor::BeforeStart`], which orders before every real position
/// and becomes `(0, 0)` again when moved forward.
///
/// Columns count characters, not bytes. The line break between two lines is
/// addressed as the virtual character at `column == line length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cursor {
    /// Sentinel position in front of the first character.
    BeforeStart,
    /// A position inside (or past the end of) the buffer.
    At {
        /// Line number (0-indexed)
        row: usize,
        /// Column number (0-indexed, in characters)
        column: usize,
    },
}

impl Cursor {
    /// Creates a cursor at the given row and column.
    pub const fn new(row: usize, column: usize) -> Self {
        Cursor::At { row, column }
    }

    /// The `(0, 0)` position.
    pub const fn origin() -> Self {
        Cursor::new(0, 0)
    }

    /// Returns the row, or `None` before the start of the buffer.
    pub fn row(&self) -> Option<usize> {
        match self {
            Cursor::BeforeStart => None,
            Cursor::At { row, .. } => Some(*row),
        }
    }

    /// Returns the column, or `None` before the start of the buffer.
    pub fn column(&self) -> Option<usize> {
        match self {
            Cursor::BeforeStart => None,
            Cursor::At { column, .. } => Some(*column),
        }
    }

    /// Returns true for the sentinel in front of the buffer.
    pub fn is_before_start(&self) -> bool {
        matches!(self, Cursor::BeforeStart)
    }

    /// Advances the cursor by one character.
    ///
    /// Stepping past the line break wraps to the start of the next row. A
    /// cursor on a row outside the buffer does not move.
    pub fn move_forward<B: BufferView + ?Sized>(&mut self, buffer: &B) {
        match *self {
            Cursor::BeforeStart => *self = Cursor::origin(),
            Cursor::At { row, column } => {
                if let Some(len) = buffer.line_len(row) {
                    let column = column + 1;
                    *self = if column > len {
                        Cursor::new(row + 1, 0)
                    } else {
                        Cursor::new(row, column)
                    };
                }
            }
        }
    }

    /// Moves the cursor back by one character.
    ///
    /// From column 0 the cursor lands on the line break at the end of the
    /// previous row; from `(0, 0)` it becomes [`Cursor::BeforeStart`].
    pub fn move_back<B: BufferView + ?Sized>(&mut self, buffer: &B) {
        if let Cursor::At { row, column } = *self {
            *self = if column > 0 {
                Cursor::new(row, column - 1)
            } else if row == 0 {
                Cursor::BeforeStart
            } else {
                Cursor::new(row - 1, buffer.line_len(row - 1).unwrap_or(0))
            };
        }
    }

    /// By-value form of [`Cursor::move_forward`].
    pub fn forward<B: BufferView + ?Sized>(mut self, buffer: &B) -> Self {
        self.move_forward(buffer);
        self
    }

    /// By-value form of [`Cursor::move_back`].
    pub fn back<B: BufferView + ?Sized>(mut self, buffer: &B) -> Self {
        self.move_back(buffer);
        self
    }

    /// Steps one column to the right without consulting a buffer.
    ///
    /// Used to turn an inclusive end position into an exclusive one.
    pub fn next_column(self) -> Self {
        match self {
            Cursor::BeforeStart => Cursor::origin(),
            Cursor::At { row, column } => Cursor::new(row, column + 1),
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::origin()
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cursor::BeforeStart => write!(f, "(start)"),
            Cursor::At { row, column } => write!(f, "({}, {})", row, column),
        }
    }
}
