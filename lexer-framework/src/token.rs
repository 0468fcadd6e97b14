use common_framework::TextSpan;
use std::fmt;

/// A token produced by the lexer: the covered span and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<K> {
    pub span: TextSpan,
    pub kind: K,
}

impl<K> Token<K> {
    /// Creates a token.
    pub fn new(span: TextSpan, kind: K) -> Self {
        Self { span, kind }
    }
}

impl<K: fmt::Debug> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.kind, self.span)
    }
}
