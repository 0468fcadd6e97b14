use crate::context::ParseContext;
use lexer_framework::Token;
use std::collections::HashMap;
use std::hash::Hash;

/// What a parser does with a token in a given state.
pub enum Transition<S, K, D> {
    /// Join the token and switch state.
    JoinTo(S),
    /// Switch state without joining.
    SkipTo(S),
    /// Join and stay.
    Join,
    /// Ignore the token and stay.
    Skip,
    /// Join and nest one level deeper.
    Open,
    /// Join; at level 0 switch to the state, otherwise leave one level.
    Close(S),
    Custom(fn(&mut ParseContext<D>, &Token<K>) -> Option<S>),
}

impl<S: Copy, K, D> Clone for Transition<S, K, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Copy, K, D> Copy for Transition<S, K, D> {}

impl<S: Copy, K, D> Transition<S, K, D> {
    /// Runs the transition and returns the state to switch to, if any.
    pub fn apply(&self, context: &mut ParseContext<D>, token: &Token<K>) -> Option<S> {
        match *self {
            Transition::JoinTo(state) => {
                context.join(&token.span);
                Some(state)
            }
            Transition::SkipTo(state) => Some(state),
            Transition::Join => {
                context.join(&token.span);
                None
            }
            Transition::Skip => None,
            Transition::Open => {
                context.join(&token.span);
                context.open();
                None
            }
            Transition::Close(state) => {
                context.join(&token.span);
                context.close().then_some(state)
            }
            Transition::Custom(transition) => transition(context, token),
        }
    }
}

/// `(state, token kind) -> transition` map.
///
/// A pair without an entry terminates the parse.
pub struct ParseTable<S, K, D> {
    transitions: HashMap<(S, K), Transition<S, K, D>>,
}

impl<S, K, D> Default for ParseTable<S, K, D> {
    fn default() -> Self {
        Self {
            transitions: HashMap::new(),
        }
    }
}

impl<S, K, D> ParseTable<S, K, D>
where
    S: Copy + Eq + Hash,
    K: Copy + Eq + Hash,
{
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a transition, replacing any earlier one for the same pair.
    pub fn on(&mut self, state: S, kind: K, transition: Transition<S, K, D>) -> &mut Self {
        self.transitions.insert((state, kind), transition);
        self
    }

    /// Installs `transition` for each kind in `kinds`.
    pub fn on_each(&mut self, state: S, kinds: &[K], transition: Transition<S, K, D>) -> &mut Self {
        for &kind in kinds {
            self.on(state, kind, transition);
        }
        self
    }

    /// Installs `transition` for every kind in `all` that is not in `except`.
    pub fn on_all_except(
        &mut self,
        state: S,
        all: &[K],
        except: &[K],
        transition: Transition<S, K, D>,
    ) -> &mut Self {
        for &kind in all.iter().filter(|kind| !except.contains(kind)) {
            self.on(state, kind, transition);
        }
        self
    }

    /// Looks up the transition for a state and token kind.
    pub fn get(&self, state: S, kind: K) -> Option<&Transition<S, K, D>> {
        self.transitions.get(&(state, kind))
    }

    /// Returns the number of installed transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Returns true if no transition is installed.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
