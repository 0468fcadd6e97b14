use crate::cursor::Cursor;
use crate::scan::ScanChar;
use crate::span::TextSpan;

/// Read access to line-indexed text.
///
/// This is the whole contract an editor integration has to provide. The
/// provided methods derive everything the lexer and detectors need from the
/// three required ones.
pub trait BufferView {
    /// Returns the character at `cursor`.
    ///
    /// The line break between two lines is reported as `'\n'` at
    /// `column == line length`. There is no line break after the last line;
    /// `None` is returned there, past the end and before the start.
    fn char_at(&self, cursor: Cursor) -> Option<char>;

    /// Returns the text of a line without its line break.
    fn line(&self, row: usize) -> Option<&str>;

    /// Returns the number of lines.
    fn line_count(&self) -> usize;

    /// Returns the length of a line in characters.
    fn line_len(&self, row: usize) -> Option<usize> {
        self.line(row).map(|line| line.chars().count())
    }

    /// Returns the last position holding a character.
    ///
    /// For an empty last line this is the line break in front of it, and
    /// for an empty buffer it is [`Cursor::BeforeStart`].
    fn last_cursor(&self) -> Cursor {
        let rows = self.line_count();
        if rows == 0 {
            return Cursor::BeforeStart;
        }
        let row = rows - 1;
        match self.line_len(row) {
            Some(len) if len > 0 => Cursor::new(row, len - 1),
            _ => Cursor::new(row, 0).back(self),
        }
    }

    /// Classifies the position for a scanner.
    fn scan_char(&self, cursor: Cursor) -> ScanChar {
        match (cursor, self.char_at(cursor)) {
            (Cursor::BeforeStart, _) => ScanChar::BeforeStart,
            (_, Some(ch)) => ScanChar::Char(ch),
            (_, None) => ScanChar::EndOfStream,
        }
    }

    /// Materialises the text covered by `span`.
    fn text(&self, span: &TextSpan) -> String {
        let mut text = String::new();
        let mut cursor = span.start();
        while cursor != span.end() {
            match self.char_at(cursor) {
                Some(ch) => text.push(ch),
                None => break,
            }
            cursor.move_forward(self);
        }
        text
    }
}

/// An immutable in-memory buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
}

impl Buffer {
    /// Creates a buffer by splitting `text` on `'\n'`.
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
        }
    }

    /// Creates a buffer from already split lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&str> for Buffer {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl BufferView for Buffer {
    fn char_at(&self, cursor: Cursor) -> Option<char> {
        let Cursor::At { row, column } = cursor else {
            return None;
        };
        let line = self.lines.get(row)?;
        match line.chars().nth(column) {
            Some(ch) => Some(ch),
            None if column == line.chars().count() && row + 1 < self.lines.len() => Some('\n'),
            None => None,
        }
    }

    fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }
}
