//! The C++ lexer: transition tables for both scan directions.
//!
//! The lexer assumes the scan does not start inside a string literal or a
//! block comment.

use crate::token::{Token, TokenKind};
use common_framework::{Buffer, BufferView, Cursor, ScanDirection, TextSpan};
use lexer_framework::{Action, Anchor, Lexer, Matcher, Outcome, RuleInput, TransitionTable};
use once_cell::sync::Lazy;

/// States of the C++ lexer tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexState {
    Default,
    InId,
    Space,
    Subtract,
    RightAngled,
    ForwardSlash,
    CommentLine,
    String,
    StringEscape,
    StringPotentialEscapedQuote,
    CommentMultiline,
    CommentMultilineStar,
    End,
}

/// Switches that select one of the shared lexer tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LexerOptions {
    /// Emit one `Space` token per whitespace run instead of dropping it.
    pub whitespace_tokens: bool,
}

impl LexerOptions {
    pub const WITH_SPACES: LexerOptions = LexerOptions {
        whitespace_tokens: true,
    };
}

/// A lexer over one of the shared C++ tables.
pub type CppLexer = Lexer<'static, LexState, TokenKind>;
pub type CppTable = TransitionTable<LexState, TokenKind>;

/// Characters that may appear in an identifier.
pub fn is_id(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

pub fn is_space(ch: char) -> bool {
    ch.is_whitespace()
}

/// Column of the `//` that starts a line comment on `line`, in characters.
///
/// The row is run through the forward lexer, so a `//` inside a string
/// literal or a `/* ... */` comment on the same row does not count. The row
/// is assumed to start outside both.
pub fn line_comment_column(line: &str) -> Option<usize> {
    if !line.contains("//") {
        return None;
    }
    let row = Buffer::from_lines([line]);
    let mut lexer = cpp_lexer(ScanDirection::Forward, LexerOptions::default());
    let mut cursor = Cursor::origin();
    while !lexer.is_finished() {
        let (_, lexed) = lexer.lex(cursor, &row);
        if lexer.state() == LexState::CommentLine {
            return lexed.column().and_then(|column| column.checked_sub(1));
        }
        cursor = lexed.forward(&row);
        if cursor == lexed {
            break;
        }
    }
    None
}

const PUNCTUATION: [(char, TokenKind); 11] = [
    (',', TokenKind::Comma),
    ('<', TokenKind::LeftAngle),
    ('{', TokenKind::LeftBrace),
    ('}', TokenKind::RightBrace),
    ('[', TokenKind::LeftBracket),
    (']', TokenKind::RightBracket),
    ('(', TokenKind::LeftParen),
    (')', TokenKind::RightParen),
    (';', TokenKind::Semicolon),
    (':', TokenKind::Colon),
    ('*', TokenKind::Star),
];

fn end_identifier(input: &RuleInput<'_>) -> Outcome<LexState, TokenKind> {
    let span = TextSpan::inclusive(input.anchor, input.previous);
    let word = input.buffer.text(&span);
    let kind = TokenKind::keyword(&word).unwrap_or(TokenKind::Identifier);
    Outcome::new(Some(LexState::Default), Anchor::At(input.current), false)
        .with_token(Token::new(span, kind))
}

/// Backward scans entering a row behind a line comment jump onto the `//`
/// and see a line break there, so the comment text is never lexed.
fn skip_line_comment(cursor: Cursor, buffer: &dyn BufferView) -> (Cursor, Option<char>) {
    let (Some(row), Some(column)) = (cursor.row(), cursor.column()) else {
        return (cursor, None);
    };
    match buffer.line(row).and_then(line_comment_column) {
        Some(comment) if column >= comment => (Cursor::new(row, comment), Some('\n')),
        _ => (cursor, None),
    }
}

fn build_table(direction: ScanDirection, options: LexerOptions) -> CppTable {
    use Action as A;
    use LexState as S;
    use Matcher as M;
    use TokenKind as K;

    let mut table = CppTable::new(S::Default, S::End);

    table.push(S::Default, M::EndOfStream, A::Finish(K::End));
    table.push(S::Default, M::Class(is_id), A::Enter(S::InId));
    for (ch, kind) in PUNCTUATION {
        table.push(S::Default, M::Char(ch), A::Emit(kind));
    }
    table.push(S::Default, M::Char('"'), A::Enter(S::String));
    table.push(S::Default, M::Char('/'), A::Enter(S::ForwardSlash));
    if options.whitespace_tokens {
        table.push(S::Default, M::Class(is_space), A::Enter(S::Space));
        table.push(S::Space, M::Class(is_space), A::Extend);
        table.push(S::Space, M::Any, A::EmitBefore(K::Space, S::Default));
    } else {
        table.push(S::Default, M::Class(is_space), A::Discard);
    }

    table.push(S::InId, M::Class(is_id), A::Extend);
    table.push(S::InId, M::Any, A::Custom(end_identifier));

    table.push(
        S::String,
        M::EndOfStream,
        A::EmitBefore(K::String, S::Default),
    );

    table.push(
        S::ForwardSlash,
        M::Char('*'),
        A::EnterDiscard(S::CommentMultiline),
    );

    table.push(S::CommentMultiline, M::EndOfStream, A::HandOff(S::Default));
    table.push(
        S::CommentMultiline,
        M::Char('*'),
        A::EnterDiscard(S::CommentMultilineStar),
    );
    table.push(S::CommentMultiline, M::Any, A::Discard);

    table.push(
        S::CommentMultilineStar,
        M::EndOfStream,
        A::HandOff(S::Default),
    );
    table.push(
        S::CommentMultilineStar,
        M::Char('/'),
        A::EnterDiscard(S::Default),
    );
    table.push(S::CommentMultilineStar, M::Char('*'), A::Discard);
    table.push(
        S::CommentMultilineStar,
        M::Any,
        A::EnterDiscard(S::CommentMultiline),
    );

    match direction {
        ScanDirection::Forward => {
            table.push(S::Default, M::Char('>'), A::Emit(K::RightAngle));
            table.push(S::Default, M::Char('-'), A::Enter(S::Subtract));

            table.push(S::String, M::Char('"'), A::Emit(K::String));
            table.push(S::String, M::Char('\\'), A::Enter(S::StringEscape));

            table.push(
                S::StringEscape,
                M::EndOfStream,
                A::EmitBefore(K::String, S::Default),
            );
            table.push(S::StringEscape, M::Any, A::Enter(S::String));

            table.push(
                S::ForwardSlash,
                M::Char('/'),
                A::EnterDiscard(S::CommentLine),
            );

            table.push(S::CommentLine, M::Char('\n'), A::EnterDiscard(S::Default));
            table.push(S::CommentLine, M::EndOfStream, A::HandOff(S::Default));
            table.push(S::CommentLine, M::Any, A::Discard);

            table.push(S::Subtract, M::Char('>'), A::Emit(K::Arrow));
            table.push(S::Subtract, M::Any, A::EmitBefore(K::Subtract, S::Default));
        }
        ScanDirection::Backward => {
            table.push(S::Default, M::Char('-'), A::Emit(K::Subtract));
            table.push(S::Default, M::Char('>'), A::Enter(S::RightAngled));

            table.push(
                S::String,
                M::Char('"'),
                A::Enter(S::StringPotentialEscapedQuote),
            );

            table.push(
                S::StringPotentialEscapedQuote,
                M::Char('\\'),
                A::Enter(S::String),
            );
            table.push(
                S::StringPotentialEscapedQuote,
                M::Any,
                A::EmitBefore(K::String, S::Default),
            );

            table.push(S::RightAngled, M::Char('-'), A::Emit(K::Arrow));
            table.push(
                S::RightAngled,
                M::Any,
                A::EmitBefore(K::RightAngle, S::Default),
            );
        }
    }

    table.push(S::Default, M::Any, A::Emit(K::Other));
    table.push(S::String, M::Any, A::Extend);
    table.push(
        S::ForwardSlash,
        M::Any,
        A::EmitBefore(K::ForwardSlash, S::Default),
    );

    if direction == ScanDirection::Backward {
        table = table.with_line_hook(skip_line_comment);
    }
    table
}

static FORWARD: Lazy<CppTable> =
    Lazy::new(|| build_table(ScanDirection::Forward, LexerOptions::default()));
static FORWARD_SPACES: Lazy<CppTable> =
    Lazy::new(|| build_table(ScanDirection::Forward, LexerOptions::WITH_SPACES));
static BACKWARD: Lazy<CppTable> =
    Lazy::new(|| build_table(ScanDirection::Backward, LexerOptions::default()));
static BACKWARD_SPACES: Lazy<CppTable> =
    Lazy::new(|| build_table(ScanDirection::Backward, LexerOptions::WITH_SPACES));

/// The shared table for a direction and whitespace mode.
pub fn table(direction: ScanDirection, options: LexerOptions) -> &'static CppTable {
    match (direction, options.whitespace_tokens) {
        (ScanDirection::Forward, false) => &*FORWARD,
        (ScanDirection::Forward, true) => &*FORWARD_SPACES,
        (ScanDirection::Backward, false) => &*BACKWARD,
        (ScanDirection::Backward, true) => &*BACKWARD_SPACES,
    }
}

/// Creates a C++ lexer for `direction` over the shared tables.
pub fn cpp_lexer(direction: ScanDirection, options: LexerOptions) -> CppLexer {
    Lexer::new(table(direction, options), direction)
}

/// Lexes from `start` to the end of the buffer in `direction`.
///
/// Tokens come back in scan order, so a backward scan yields them last to
/// first. The final token is always `End`.
pub fn tokenize(
    buffer: &dyn BufferView,
    start: Cursor,
    direction: ScanDirection,
    options: LexerOptions,
) -> Vec<Token> {
    let mut lexer = cpp_lexer(direction, options);
    let mut tokens = Vec::new();
    let mut cursor = start;
    loop {
        let (new_tokens, lexed) = lexer.lex(cursor, buffer);
        tokens.extend(new_tokens);
        if lexer.is_finished() {
            return tokens;
        }
        cursor = lexed;
        direction.step(&mut cursor, buffer);
        if cursor == lexed {
            return tokens;
        }
    }
}
