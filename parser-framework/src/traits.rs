use lexer_framework::Token;

/// Detector-specific data that watches every token a parser accepts.
///
/// The hook runs after the transition and after the state change.
pub trait SideChannel<K> {
    fn observe(&mut self, token: &Token<K>) {
        let _ = token;
    }
}

impl<K> SideChannel<K> for () {}
