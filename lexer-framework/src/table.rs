use crate::rules::{Action, Matcher, Rule};
use common_framework::{BufferView, Cursor};
use std::collections::HashMap;
use std::hash::Hash;

/// Called when a scan enters a new row. May relocate the cursor and
/// override the character seen there.
pub type LineHook = fn(Cursor, &dyn BufferView) -> (Cursor, Option<char>);

/// Ordered rules per lexer state.
///
/// Tables are immutable once built and are meant to be shared by many
/// short-lived [`Lexer`](crate::Lexer) instances.
pub struct TransitionTable<S, K> {
    rules: HashMap<S, Vec<Rule<S, K>>>,
    initial: S,
    finished: S,
    line_hook: Option<LineHook>,
}

impl<S, K> TransitionTable<S, K>
where
    S: Copy + Eq + Hash,
{
    /// Creates an empty table with its start and end states.
    pub fn new(initial: S, finished: S) -> Self {
        Self {
            rules: HashMap::new(),
            initial,
            finished,
            line_hook: None,
        }
    }

    /// Appends a rule to `state`. Earlier rules take precedence.
    pub fn rule(mut self, state: S, matcher: Matcher, action: Action<S, K>) -> Self {
        self.push(state, matcher, action);
        self
    }

    /// In-place form of [`TransitionTable::rule`].
    pub fn push(&mut self, state: S, matcher: Matcher, action: Action<S, K>) {
        self.rules
            .entry(state)
            .or_default()
            .push(Rule { matcher, action });
    }

    /// Installs the hook run whenever a scan enters a new row.
    pub fn with_line_hook(mut self, hook: LineHook) -> Self {
        self.line_hook = Some(hook);
        self
    }

    /// Returns the rules of `state` in evaluation order.
    pub fn rules(&self, state: S) -> &[Rule<S, K>] {
        self.rules.get(&state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the state every scan starts in.
    pub fn initial(&self) -> S {
        self.initial
    }

    /// Returns the state entered once the end marker is emitted.
    pub fn finished(&self) -> S {
        self.finished
    }

    /// Returns the installed line hook, if any.
    pub fn line_hook(&self) -> Option<LineHook> {
        self.line_hook
    }
}
