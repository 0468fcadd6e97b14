//! Type expression boundaries: `a::b<c, d*>` and friends.
//!
//! The forward scan understands template arguments; the backward scan only
//! follows `::` qualification, so starting inside `<...>` finds the
//! innermost qualified name.

use crate::lexer::LexerOptions;
use crate::scan::run_bidirectional;
use crate::token::TokenKind;
use common_framework::{BufferView, Cursor, TextSpan};
use once_cell::sync::Lazy;
use parser_framework::{ParseTable, Parser, Transition};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum State {
    Start,
    Type,
    Template,
    Colon1,
    Colon2,
    Terminate,
}

type TypeTable = ParseTable<State, TokenKind, ()>;

static FORWARD: Lazy<TypeTable> = Lazy::new(|| {
    use TokenKind as K;

    let mut table = TypeTable::new();
    table
        .on(State::Start, K::Identifier, Transition::JoinTo(State::Type))
        .on(State::Start, K::Colon, Transition::JoinTo(State::Colon1))
        .on(State::Type, K::LeftAngle, Transition::JoinTo(State::Template))
        .on(State::Type, K::Colon, Transition::JoinTo(State::Colon1))
        .on(State::Colon1, K::Colon, Transition::JoinTo(State::Colon2))
        .on(State::Colon2, K::Identifier, Transition::JoinTo(State::Type))
        .on(State::Template, K::LeftAngle, Transition::Open)
        .on(State::Template, K::RightAngle, Transition::Close(State::Terminate))
        .on_each(
            State::Template,
            &[K::Identifier, K::Comma, K::Colon, K::Star],
            Transition::Join,
        );
    table
});

static BACKWARD: Lazy<TypeTable> = Lazy::new(|| {
    use TokenKind as K;

    let mut table = TypeTable::new();
    table
        .on(State::Start, K::Identifier, Transition::JoinTo(State::Type))
        .on(State::Start, K::Colon, Transition::JoinTo(State::Colon1))
        .on(State::Type, K::Colon, Transition::JoinTo(State::Colon1))
        .on(State::Colon1, K::Colon, Transition::JoinTo(State::Colon2))
        .on(State::Colon2, K::Identifier, Transition::JoinTo(State::Type));
    table
});

/// Finds the type expression under `cursor`.
pub fn detect_type(cursor: Cursor, buffer: &dyn BufferView) -> Option<TextSpan> {
    let mut forward = Parser::new(&*FORWARD, State::Start, ());
    let mut backward = Parser::new(&*BACKWARD, State::Start, ());
    let pair = run_bidirectional(
        &mut forward,
        &mut backward,
        cursor,
        buffer,
        LexerOptions::default(),
        false,
    );
    debug!(forward = ?pair.forward, backward = ?pair.backward, "type scans");
    pair.merged()
}
