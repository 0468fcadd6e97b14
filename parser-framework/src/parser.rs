use crate::context::ParseContext;
use crate::table::ParseTable;
use crate::traits::SideChannel;
use common_framework::TextSpan;
use lexer_framework::Token;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::trace;

/// Why a parse stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The current state has no transition for the token.
    NoTransition,
    /// The designated end state was reached.
    EndState,
    /// The lexer ran out of input before the parser stopped.
    Exhausted,
}

/// Outcome of feeding one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStep {
    Continue,
    Stop(Termination),
}

/// A token-driven state machine over a shared [`ParseTable`].
pub struct Parser<'t, S, K, D> {
    table: &'t ParseTable<S, K, D>,
    state: S,
    end_state: Option<S>,
    context: ParseContext<D>,
}

impl<'t, S, K, D> Parser<'t, S, K, D>
where
    S: Copy + Eq + Hash + Debug,
    K: Copy + Eq + Hash + Debug,
    D: SideChannel<K>,
{
    /// Creates a parser in `start` with an empty context.
    pub fn new(table: &'t ParseTable<S, K, D>, start: S, data: D) -> Self {
        Self {
            table,
            state: start,
            end_state: None,
            context: ParseContext::new(data),
        }
    }

    /// Stops the parse as soon as `state` is entered.
    pub fn with_end_state(mut self, state: S) -> Self {
        self.end_state = Some(state);
        self
    }

    /// Feeds one token and reports whether the parse goes on.
    pub fn parse_token(&mut self, token: &Token<K>) -> ParseStep {
        let Some(transition) = self.table.get(self.state, token.kind) else {
            trace!(state = ?self.state, kind = ?token.kind, "no transition");
            return ParseStep::Stop(Termination::NoTransition);
        };

        if let Some(next) = transition.apply(&mut self.context, token) {
            if next != self.state {
                trace!(from = ?self.state, to = ?next, kind = ?token.kind, "parser state");
            }
            self.state = next;
        }
        self.context.data.observe(token);

        if Some(self.state) == self.end_state {
            trace!(state = ?self.state, "end state reached");
            return ParseStep::Stop(Termination::EndState);
        }
        ParseStep::Continue
    }

    /// Returns the current parser state.
    pub fn state(&self) -> S {
        self.state
    }

    /// Returns the span joined so far.
    pub fn span(&self) -> Option<TextSpan> {
        self.context.span()
    }

    /// Returns the current nesting level.
    pub fn level(&self) -> usize {
        self.context.level()
    }

    /// Returns the parse context.
    pub fn context(&self) -> &ParseContext<D> {
        &self.context
    }

    /// Returns the side channel.
    pub fn data(&self) -> &D {
        &self.context.data
    }

    /// Consumes the parser and returns its context.
    pub fn into_context(self) -> ParseContext<D> {
        self.context
    }
}
