//! Function body boundaries.
//!
//! A forward scan looks for the `}` closing the block the cursor is in.
//! A backward scan from that brace balances back to its `{` and then checks
//! for `name(params)` or `name(params) const` in front of it, followed by a
//! return type. Braces that turn out to belong to plain blocks are joined,
//! and the search continues outward.

use crate::config::Config;
use crate::lexer::{cpp_lexer, LexerOptions};
use crate::scan::token_head;
use crate::token::{Token, TokenKind};
use common_framework::{BufferView, Cursor, ScanDirection, TextSpan};
use once_cell::sync::Lazy;
use parser_framework::{ParseContext, ParseTable, Parser, SideChannel, Transition};
use pipeline_core::{Pipeline, ScanReport};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum State {
    Start,
    Unknown,
    InBlock,
    BraceHead,
    BraceHeadConst,
    FunctionParams,
    FunctionName,
    FunctionType,
    Terminate,
}

/// What the function scans remember besides their span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Track {
    last: Option<TokenKind>,
    second_last: Option<TokenKind>,
    /// The backward scan balanced back to the opening brace.
    brace_found: bool,
    /// The backward scan walked through a whole function head.
    confirmed: bool,
}

impl SideChannel<TokenKind> for Track {
    fn observe(&mut self, token: &Token) {
        self.second_last = self.last;
        self.last = Some(token.kind);
    }
}

type FunctionTable = ParseTable<State, TokenKind, Track>;

/// `{` after `)` or `) const` opens a function body; any other `{` opens
/// an inner block.
fn classify_brace(context: &mut ParseContext<Track>, token: &Token) -> Option<State> {
    context.join(&token.span);
    let track = context.data;
    let function_entry = match track.last {
        Some(TokenKind::RightParen) => true,
        // Starting on `const` counts as `) const`.
        Some(TokenKind::Const) => matches!(track.second_last, None | Some(TokenKind::RightParen)),
        _ => false,
    };
    if !function_entry {
        context.open();
    }
    debug!(function_entry, level = context.level(), "brace classified");
    Some(State::InBlock)
}

fn enter_brace_head(context: &mut ParseContext<Track>, token: &Token) -> Option<State> {
    context.join(&token.span);
    if context.close() {
        context.data.brace_found = true;
        Some(State::BraceHead)
    } else {
        None
    }
}

fn confirm(context: &mut ParseContext<Track>, _token: &Token) -> Option<State> {
    context.data.confirmed = true;
    Some(State::Terminate)
}

static FORWARD: Lazy<FunctionTable> = Lazy::new(|| {
    use State::*;
    use TokenKind as K;

    let mut table = FunctionTable::new();
    table
        .on_all_except(Start, &K::ALL, &[K::End], Transition::JoinTo(Unknown))
        .on(Start, K::RightBrace, Transition::JoinTo(Terminate))
        .on(Start, K::Semicolon, Transition::JoinTo(InBlock));
    table
        .on_all_except(Unknown, &K::ALL, &[K::End], Transition::Join)
        .on(Unknown, K::LeftBrace, Transition::Custom(classify_brace))
        .on(Unknown, K::Semicolon, Transition::JoinTo(InBlock));
    table
        .on_all_except(InBlock, &K::ALL, &[K::End], Transition::Join)
        .on(InBlock, K::RightBrace, Transition::Close(Terminate))
        .on(InBlock, K::LeftBrace, Transition::Open);
    table
});

static BACKWARD: Lazy<FunctionTable> = Lazy::new(|| {
    use State::*;
    use TokenKind as K;

    let mut table = FunctionTable::new();
    table
        .on(Start, K::RightBrace, Transition::JoinTo(InBlock))
        .on(Start, K::LeftBrace, Transition::JoinTo(BraceHead));
    table
        .on_all_except(InBlock, &K::ALL, &[K::End], Transition::Join)
        .on(InBlock, K::LeftBrace, Transition::Custom(enter_brace_head))
        .on(InBlock, K::RightBrace, Transition::Open);
    table
        .on(BraceHead, K::RightParen, Transition::JoinTo(FunctionParams))
        .on(BraceHead, K::Const, Transition::JoinTo(BraceHeadConst))
        .on(BraceHeadConst, K::RightParen, Transition::JoinTo(FunctionParams));
    table
        .on_all_except(FunctionParams, &K::ALL, &[K::End], Transition::Join)
        .on(FunctionParams, K::LeftParen, Transition::Close(FunctionName))
        .on(FunctionParams, K::RightParen, Transition::Open);
    table
        .on(FunctionName, K::Identifier, Transition::JoinTo(FunctionType))
        .on_each(
            FunctionName,
            &[K::LeftParen, K::RightParen, K::LeftAngle, K::RightAngle],
            Transition::Join,
        );
    table
        .on_all_except(FunctionType, &K::ALL, &[K::End], Transition::Join)
        .on_each(
            FunctionType,
            &[K::Semicolon, K::RightBrace, K::LeftBrace, K::String, K::End],
            Transition::Custom(confirm),
        );
    table
});

fn scan(
    table: &'static FunctionTable,
    direction: ScanDirection,
    buffer: &dyn BufferView,
    cursor: Cursor,
) -> (ScanReport, Track) {
    let mut pipeline = Pipeline::new(
        cpp_lexer(direction, LexerOptions::default()),
        Parser::new(table, State::Start, Track::default()),
    );
    let report = pipeline.run(buffer, cursor);
    (report, *pipeline.parser().data())
}

/// Finds the function whose body or head contains `cursor`.
///
/// The span runs from the first token of the return type through the
/// closing brace.
pub fn detect_function(
    cursor: Cursor,
    buffer: &dyn BufferView,
    config: &Config,
) -> Option<TextSpan> {
    let cursor = token_head(cursor, buffer);
    let mut processed = TextSpan::empty(cursor);
    let mut last = processed;

    for round in 0..config.max_function_rounds {
        let (forward, _) = scan(&FORWARD, ScanDirection::Forward, buffer, processed.end());
        processed.join(&forward.span?);

        let mut back_cursor = processed.end();
        if buffer.char_at(back_cursor).is_none() {
            back_cursor.move_back(buffer);
        }
        let (backward, track) = scan(&BACKWARD, ScanDirection::Backward, buffer, back_cursor);
        if track.confirmed {
            if let Some(span) = backward.span {
                processed.join(&span);
            }
            debug!(round, span = %processed, "function found");
            return Some(processed);
        }
        if !track.brace_found {
            debug!(round, "no opening brace");
            return None;
        }
        if let Some(span) = backward.span {
            processed.join(&span);
        }
        if last == processed {
            break;
        }
        last = processed;
    }
    debug!("function search gave up");
    None
}
