//! Parameter boundaries inside an argument or parameter list.

use crate::lexer::LexerOptions;
use crate::object::Mode;
use crate::scan::{run_bidirectional, search};
use crate::token::TokenKind;
use common_framework::{BufferView, Cursor, ScanDirection, TextSpan};
use once_cell::sync::Lazy;
use parser_framework::{ParseTable, Parser, Transition};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum State {
    Start,
    Default,
    InParen,
    InBrace,
    InAngled,
    InBracket,
    InnerTerminate,
}

type ParameterTable = ParseTable<State, TokenKind, ()>;

/// Opening kind, closing kind, and the state for the region between them.
const BRACKETS: [(TokenKind, TokenKind, State); 4] = [
    (TokenKind::LeftParen, TokenKind::RightParen, State::InParen),
    (TokenKind::LeftBrace, TokenKind::RightBrace, State::InBrace),
    (TokenKind::LeftAngle, TokenKind::RightAngle, State::InAngled),
    (TokenKind::LeftBracket, TokenKind::RightBracket, State::InBracket),
];

const NOT_END: [TokenKind; 1] = [TokenKind::End];

static FORWARD: Lazy<ParameterTable> = Lazy::new(|| {
    use TokenKind as K;

    let mut table = ParameterTable::new();
    table
        .on_all_except(State::Default, &K::ALL, &NOT_END, Transition::Join)
        .on(State::Default, K::Comma, Transition::SkipTo(State::InnerTerminate))
        .on(State::Default, K::Space, Transition::Skip);

    for (open, close, inside) in BRACKETS {
        table
            .on(State::Default, open, Transition::JoinTo(inside))
            .on(State::Default, close, Transition::SkipTo(State::InnerTerminate));
        table
            .on_all_except(inside, &K::ALL, &NOT_END, Transition::Join)
            .on(inside, open, Transition::Open)
            .on(inside, close, Transition::Close(State::Default))
            .on(inside, K::Space, Transition::Skip);
    }
    table
});

static BACKWARD: Lazy<ParameterTable> = Lazy::new(|| {
    use TokenKind as K;

    let mut table = ParameterTable::new();
    // A comma or space right under the cursor is stepped over.
    table
        .on_all_except(State::Start, &K::ALL, &NOT_END, Transition::JoinTo(State::Default))
        .on(State::Start, K::Comma, Transition::SkipTo(State::Default))
        .on(State::Start, K::Space, Transition::SkipTo(State::Default));
    table
        .on_all_except(State::Default, &K::ALL, &NOT_END, Transition::Join)
        .on(State::Default, K::Comma, Transition::SkipTo(State::InnerTerminate))
        .on(State::Default, K::Space, Transition::Skip);

    // Walking backward, closing brackets open a region.
    for (open, close, inside) in BRACKETS {
        table
            .on(State::Start, close, Transition::JoinTo(inside))
            .on(State::Default, close, Transition::JoinTo(inside))
            .on(State::Default, open, Transition::SkipTo(State::InnerTerminate));
        table
            .on_all_except(inside, &K::ALL, &NOT_END, Transition::Join)
            .on(inside, close, Transition::Open)
            .on(inside, open, Transition::Close(State::Default))
            .on(inside, K::Space, Transition::Skip);
    }
    table
});

fn inner_span(cursor: Cursor, buffer: &dyn BufferView) -> Option<TextSpan> {
    let mut forward =
        Parser::new(&*FORWARD, State::Default, ()).with_end_state(State::InnerTerminate);
    let mut backward =
        Parser::new(&*BACKWARD, State::Start, ()).with_end_state(State::InnerTerminate);
    let pair = run_bidirectional(
        &mut forward,
        &mut backward,
        cursor,
        buffer,
        LexerOptions::WITH_SPACES,
        true,
    );
    debug!(forward = ?pair.forward, backward = ?pair.backward, "parameter scans");
    pair.merged()
}

fn is_opening(ch: char) -> bool {
    matches!(ch, '(' | '{' | '<' | '[')
}

fn is_closing(ch: char) -> bool {
    matches!(ch, ')' | '}' | '>' | ']')
}

/// Extends an inner parameter over one neighbouring separator.
///
/// A following comma is taken together with the whitespace after it. The
/// last parameter takes the preceding comma instead, and a lone parameter
/// grows to just inside its brackets. Only whitespace separates the inner
/// span from those neighbours, so the nearest comma or bracket is the one
/// at the list's own level.
fn outer_span(inner: TextSpan, buffer: &dyn BufferView) -> TextSpan {
    let mut forward = search(buffer, inner.end(), ScanDirection::Forward, |ch| {
        ch == ',' || is_closing(ch)
    });

    let backward = if buffer.char_at(forward) == Some(',') {
        forward.move_forward(buffer);
        forward = search(buffer, forward, ScanDirection::Forward, |ch| !ch.is_whitespace());
        inner.start()
    } else {
        let mut backward = search(buffer, inner.start(), ScanDirection::Backward, |ch| {
            ch == ',' || is_opening(ch)
        });
        if buffer.char_at(backward).map_or(true, is_opening) {
            backward.move_forward(buffer);
        }
        backward
    };
    TextSpan::new(backward, forward)
}

/// Finds the parameter under `cursor`.
pub fn detect_parameter(cursor: Cursor, buffer: &dyn BufferView, mode: Mode) -> Option<TextSpan> {
    let inner = inner_span(cursor, buffer)?;
    match mode {
        Mode::Inner => Some(inner),
        Mode::Outer => Some(outer_span(inner, buffer)),
    }
}
