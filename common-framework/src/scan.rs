use crate::buffer::BufferView;
use crate::cursor::Cursor;

/// What a scanner sees at a position.
///
/// Keeps "before the first character" and "past the last character" apart
/// from real characters, so neither can be confused with the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanChar {
    Char(char),
    BeforeStart,
    EndOfStream,
}

/// The direction a scan walks the buffer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanDirection {
    Forward,
    Backward,
}

impl ScanDirection {
    /// Moves `cursor` one character in this direction.
    pub fn step<B: BufferView + ?Sized>(self, cursor: &mut Cursor, buffer: &B) {
        match self {
            ScanDirection::Forward => cursor.move_forward(buffer),
            ScanDirection::Backward => cursor.move_back(buffer),
        }
    }
}
