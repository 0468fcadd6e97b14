use crate::token::Token;
use common_framework::{BufferView, Cursor, ScanChar, TextSpan};

/// Decides whether a rule applies to the character under the cursor.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Matches when there is no character: before start or past the end.
    EndOfStream,
    /// Always matches. Tables end every state with one of these.
    Any,
    /// Matches one specific character.
    Char(char),
    /// Matches any character accepted by the predicate.
    Class(fn(char) -> bool),
}

impl Matcher {
    /// Returns true if the matcher accepts `ch`.
    pub fn matches(&self, ch: ScanChar) -> bool {
        match (self, ch) {
            (Matcher::Any, _) => true,
            (Matcher::EndOfStream, ScanChar::Char(_)) => false,
            (Matcher::EndOfStream, _) => true,
            (Matcher::Char(expected), ScanChar::Char(c)) => *expected == c,
            (Matcher::Class(class), ScanChar::Char(c)) => class(c),
            _ => false,
        }
    }
}

/// Where the next token starts after an action ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Leave the anchor where it is.
    Keep,
    /// Move the anchor to this cursor.
    At(Cursor),
    /// Clear the anchor; the next position considered becomes the anchor.
    Reset,
}

/// Everything an action may look at.
pub struct RuleInput<'a> {
    /// Start of the token being built.
    pub anchor: Cursor,
    /// The position being lexed.
    pub current: Cursor,
    /// The position lexed by the previous call.
    pub previous: Cursor,
    pub buffer: &'a dyn BufferView,
}

/// The effect of running one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<S, K> {
    pub tokens: Vec<Token<K>>,
    pub next_state: Option<S>,
    pub anchor: Anchor,
    /// `true` consumes the character; `false` re-evaluates it in the new state.
    pub commit: bool,
}

impl<S, K> Outcome<S, K> {
    /// Creates an outcome without tokens.
    pub fn new(next_state: Option<S>, anchor: Anchor, commit: bool) -> Self {
        Self {
            tokens: Vec::new(),
            next_state,
            anchor,
            commit,
        }
    }

    /// Appends a token to the outcome.
    pub fn with_token(mut self, token: Token<K>) -> Self {
        self.tokens.push(token);
        self
    }
}

/// Behaviour attached to a matched rule.
pub enum Action<S, K> {
    /// Switch state and keep the anchor.
    Enter(S),
    /// Switch state and drop everything read so far.
    EnterDiscard(S),
    /// Switch state, drop the anchor and hand the same character to the new state.
    HandOff(S),
    /// The character belongs to the current token.
    Extend,
    /// The character is skipped.
    Discard,
    /// Emit `anchor..=current` and return to the initial state.
    Emit(K),
    /// Emit `anchor..=previous`, switch state and re-evaluate the current
    /// character with the anchor on it.
    EmitBefore(K, S),
    /// Emit the end marker and move to the finished state.
    Finish(K),
    Custom(fn(&RuleInput<'_>) -> Outcome<S, K>),
}

impl<S: Copy, K: Copy> Action<S, K> {
    /// Runs the action against `input`.
    pub fn apply(&self, input: &RuleInput<'_>, initial: S, finished: S) -> Outcome<S, K> {
        match *self {
            Action::Enter(state) => Outcome::new(Some(state), Anchor::Keep, true),
            Action::EnterDiscard(state) => Outcome::new(Some(state), Anchor::Reset, true),
            Action::HandOff(state) => Outcome::new(Some(state), Anchor::Reset, false),
            Action::Extend => Outcome::new(None, Anchor::Keep, true),
            Action::Discard => Outcome::new(None, Anchor::Reset, true),
            Action::Emit(kind) => Outcome::new(Some(initial), Anchor::Reset, true).with_token(
                Token::new(TextSpan::inclusive(input.anchor, input.current), kind),
            ),
            Action::EmitBefore(kind, state) => {
                Outcome::new(Some(state), Anchor::At(input.current), false).with_token(
                    Token::new(TextSpan::inclusive(input.anchor, input.previous), kind),
                )
            }
            Action::Finish(kind) => Outcome::new(Some(finished), Anchor::Reset, true)
                .with_token(Token::new(TextSpan::empty(input.current), kind)),
            Action::Custom(action) => action(input),
        }
    }
}

/// A lexing rule: a matcher and what to do when it matches.
///
/// Rules are tried in insertion order within a state; the first one whose
/// `quick_check` accepts the character wins.
pub trait LexingRule<S, K> {
    fn quick_check(&self, ch: ScanChar) -> bool;

    fn apply(&self, input: &RuleInput<'_>, initial: S, finished: S) -> Outcome<S, K>;
}

/// A matcher paired with the action it triggers.
pub struct Rule<S, K> {
    pub matcher: Matcher,
    pub action: Action<S, K>,
}

impl<S: Copy, K: Copy> LexingRule<S, K> for Rule<S, K> {
    #[inline]
    fn quick_check(&self, ch: ScanChar) -> bool {
        self.matcher.matches(ch)
    }

    fn apply(&self, input: &RuleInput<'_>, initial: S, finished: S) -> Outcome<S, K> {
        self.action.apply(input, initial, finished)
    }
}
