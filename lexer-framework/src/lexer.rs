use crate::rules::{Anchor, LexingRule, RuleInput};
use crate::table::TransitionTable;
use crate::token::Token;
use common_framework::{BufferView, Cursor, ScanChar, ScanDirection};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::trace;

/// A streaming lexer over a shared [`TransitionTable`].
///
/// The lexer is driven one position at a time by the caller, which also
/// owns the scan direction: [`Lexer::lex`] never moves the cursor on its
/// own, except when the table's line hook relocates it.
pub struct Lexer<'t, S, K> {
    table: &'t TransitionTable<S, K>,
    state: S,
    anchor: Option<Cursor>,
    previous: Option<Cursor>,
    last_row: Option<Option<usize>>,
    direction: ScanDirection,
}

impl<'t, S, K> Lexer<'t, S, K>
where
    S: Copy + Eq + Hash + Debug,
    K: Copy + Debug,
{
    /// Creates a lexer in the table's initial state.
    pub fn new(table: &'t TransitionTable<S, K>, direction: ScanDirection) -> Self {
        Self {
            table,
            state: table.initial(),
            anchor: None,
            previous: None,
            last_row: None,
            direction,
        }
    }

    /// Returns the direction this lexer was built for.
    pub fn direction(&self) -> ScanDirection {
        self.direction
    }

    /// Returns the current lexer state.
    pub fn state(&self) -> S {
        self.state
    }

    /// Returns true once the end marker has been produced.
    pub fn is_finished(&self) -> bool {
        self.state == self.table.finished()
    }

    /// Lexes the character at `cursor`.
    ///
    /// Returns the tokens completed by this character, in scan order, and
    /// the cursor actually lexed.
    pub fn lex(&mut self, cursor: Cursor, buffer: &dyn BufferView) -> (Vec<Token<K>>, Cursor) {
        let table = self.table;
        let mut cursor = cursor;
        self.anchor.get_or_insert(cursor);
        let previous = *self.previous.get_or_insert(cursor);

        let mut overridden = None;
        if self.last_row != Some(cursor.row()) {
            if let Some(hook) = table.line_hook() {
                let (relocated, ch) = hook(cursor, buffer);
                if relocated != cursor {
                    trace!(from = %cursor, to = %relocated, "line hook moved cursor");
                }
                cursor = relocated;
                overridden = ch;
            }
        }
        self.last_row = Some(cursor.row());

        let ch = match overridden {
            Some(ch) => ScanChar::Char(ch),
            None => buffer.scan_char(cursor),
        };

        let mut tokens = Vec::new();
        loop {
            let anchor = *self.anchor.get_or_insert(cursor);
            let Some(rule) = table
                .rules(self.state)
                .iter()
                .find(|rule| rule.quick_check(ch))
            else {
                break;
            };

            let input = RuleInput {
                anchor,
                current: cursor,
                previous,
                buffer,
            };
            let outcome = rule.apply(&input, table.initial(), table.finished());

            for token in &outcome.tokens {
                trace!(kind = ?token.kind, span = %token.span, "token");
            }
            tokens.extend(outcome.tokens);

            match outcome.anchor {
                Anchor::Keep => {}
                Anchor::At(at) => self.anchor = Some(at),
                Anchor::Reset => self.anchor = None,
            }

            if let Some(next) = outcome.next_state {
                if next != self.state {
                    trace!(from = ?self.state, to = ?next, at = %cursor, "lexer state");
                    self.state = next;
                }
            }

            if outcome.commit {
                break;
            }
        }

        self.previous = Some(cursor);
        (tokens, cursor)
    }
}
