//! Helpers shared by the token-driven detectors.

use crate::lexer::{cpp_lexer, is_id, line_comment_column, LexerOptions};
use crate::token::TokenKind;
use common_framework::{BufferView, Cursor, ScanDirection, TextSpan};
use parser_framework::{Parser, SideChannel};
use pipeline_core::parse_text;
use std::fmt::Debug;
use std::hash::Hash;

/// Moves `cursor` to the start of the token under it.
///
/// A cursor on or behind a line comment snaps to its `//`. Inside an
/// identifier it moves to the identifier's first character. The second
/// character of `->` or `::` moves back onto the first.
pub fn token_head(cursor: Cursor, buffer: &dyn BufferView) -> Cursor {
    let Some(line) = cursor.row().and_then(|row| buffer.line(row)) else {
        return cursor;
    };
    if let (Some(row), Some(column)) = (cursor.row(), cursor.column()) {
        match line_comment_column(line) {
            Some(comment) if column >= comment => return Cursor::new(row, comment),
            _ => {}
        }
    }

    match buffer.char_at(cursor) {
        Some(ch) if is_id(ch) => {
            let mut head = cursor;
            let mut back = cursor.back(buffer);
            while buffer.char_at(back).is_some_and(is_id) {
                head = back;
                back.move_back(buffer);
            }
            head
        }
        Some(':') => {
            let before = cursor.back(buffer);
            if buffer.char_at(before) == Some(':') {
                before
            } else {
                cursor
            }
        }
        Some('>') => {
            let before = cursor.back(buffer);
            if buffer.char_at(before) == Some('-') {
                before
            } else {
                cursor
            }
        }
        _ => cursor,
    }
}

/// Spans found by a backward and a forward scan from the same token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanPair {
    pub forward: Option<TextSpan>,
    pub backward: Option<TextSpan>,
}

impl ScanPair {
    /// Union of both spans, or whichever one exists.
    pub fn merged(&self) -> Option<TextSpan> {
        match (self.backward, self.forward) {
            (Some(backward), Some(forward)) => Some(backward.joined(&forward)),
            (Some(span), None) | (None, Some(span)) => Some(span),
            (None, None) => None,
        }
    }
}

/// Runs `backward` then `forward` from the token head of `cursor`.
///
/// The backward scan starts one position before the head unless
/// `same_start` is set.
pub fn run_bidirectional<FS, BS, FD, BD>(
    forward: &mut Parser<'_, FS, TokenKind, FD>,
    backward: &mut Parser<'_, BS, TokenKind, BD>,
    cursor: Cursor,
    buffer: &dyn BufferView,
    options: LexerOptions,
    same_start: bool,
) -> ScanPair
where
    FS: Copy + Eq + Hash + Debug,
    BS: Copy + Eq + Hash + Debug,
    FD: SideChannel<TokenKind>,
    BD: SideChannel<TokenKind>,
{
    let cursor = token_head(cursor, buffer);
    let back_cursor = if same_start {
        cursor
    } else {
        cursor.back(buffer)
    };

    let mut lexer = cpp_lexer(ScanDirection::Backward, options);
    let backward_report = parse_text(&mut lexer, backward, buffer, back_cursor);

    let mut lexer = cpp_lexer(ScanDirection::Forward, options);
    let forward_report = parse_text(&mut lexer, forward, buffer, cursor);

    ScanPair {
        forward: forward_report.span,
        backward: backward_report.span,
    }
}

/// Walks from `cursor` until `pred` accepts the character under it or the
/// buffer runs out, and returns where it stopped.
pub fn search<F>(
    buffer: &dyn BufferView,
    cursor: Cursor,
    direction: ScanDirection,
    pred: F,
) -> Cursor
where
    F: Fn(char) -> bool,
{
    let mut cursor = cursor;
    while let Some(ch) = buffer.char_at(cursor) {
        if pred(ch) {
            break;
        }
        direction.step(&mut cursor, buffer);
    }
    cursor
}
