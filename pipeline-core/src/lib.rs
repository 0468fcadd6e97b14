//! Drives a streaming lexer and a parser in lockstep over a buffer.

use common_framework::{BufferView, Cursor, TextSpan};
use lexer_framework::Lexer;
use parser_framework::{ParseStep, Parser, SideChannel, Termination};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// Result of one directional scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    /// The parser's accumulated span when it stopped.
    pub span: Option<TextSpan>,
    pub termination: Termination,
}

/// Lexes from `cursor` in the lexer's direction and feeds every token to
/// `parser` until the parser stops or the lexer has nothing left.
///
/// The first position lexed is `cursor` itself. The lexer has nothing left
/// once it is finished, or when a step no longer moves the cursor and no
/// token came out.
pub fn parse_text<LS, PS, K, D>(
    lexer: &mut Lexer<'_, LS, K>,
    parser: &mut Parser<'_, PS, K, D>,
    buffer: &dyn BufferView,
    cursor: Cursor,
) -> ScanReport
where
    LS: Copy + Eq + Hash + Debug,
    PS: Copy + Eq + Hash + Debug,
    K: Copy + Eq + Hash + Debug,
    D: SideChannel<K>,
{
    let direction = lexer.direction();
    debug!(%cursor, ?direction, "scan begin");

    let mut cursor = cursor;
    let mut last: Option<Cursor> = None;
    let termination = 'scan: loop {
        if last.is_some() {
            direction.step(&mut cursor, buffer);
        }

        let (tokens, lexed) = lexer.lex(cursor, buffer);
        cursor = lexed;
        // A table without an end-of-stream rule leaves the cursor parked
        // past the buffer.
        if tokens.is_empty() && (lexer.is_finished() || last == Some(lexed)) {
            break 'scan Termination::Exhausted;
        }
        last = Some(lexed);
        for token in &tokens {
            if let ParseStep::Stop(termination) = parser.parse_token(token) {
                break 'scan termination;
            }
        }
    };

    let report = ScanReport {
        span: parser.span(),
        termination,
    };
    debug!(span = ?report.span, ?termination, "scan end");
    report
}

/// Owns a lexer/parser pair for a single scan.
pub struct Pipeline<'t, LS, PS, K, D> {
    lexer: Lexer<'t, LS, K>,
    parser: Parser<'t, PS, K, D>,
}

impl<'t, LS, PS, K, D> Pipeline<'t, LS, PS, K, D>
where
    LS: Copy + Eq + Hash + Debug,
    PS: Copy + Eq + Hash + Debug,
    K: Copy + Eq + Hash + Debug,
    D: SideChannel<K>,
{
    /// Pairs a lexer with a parser.
    pub fn new(lexer: Lexer<'t, LS, K>, parser: Parser<'t, PS, K, D>) -> Self {
        Self { lexer, parser }
    }

    /// Runs one scan from `cursor`.
    pub fn run(&mut self, buffer: &dyn BufferView, cursor: Cursor) -> ScanReport {
        parse_text(&mut self.lexer, &mut self.parser, buffer, cursor)
    }

    /// The parser, for inspecting its side channel after a run.
    pub fn parser(&self) -> &Parser<'t, PS, K, D> {
        &self.parser
    }

    /// Consumes the pipeline and returns its parser.
    pub fn into_parser(self) -> Parser<'t, PS, K, D> {
        self.parser
    }
}
