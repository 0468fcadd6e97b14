/// Token kinds produced by the C++ lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Identifier,
    String,
    Const,
    If,
    Else,
    While,
    Switch,
    Comma,
    Colon,
    Semicolon,
    Star,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    LeftAngle,
    RightAngle,
    Arrow,
    Subtract,
    ForwardSlash,
    /// Only produced when whitespace tokens are enabled.
    Space,
    Other,
    /// End of the scan. Produced once.
    End,
}

impl TokenKind {
    pub const ALL: [TokenKind; 25] = [
        TokenKind::Identifier,
        TokenKind::String,
        TokenKind::Const,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::Switch,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Star,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::LeftAngle,
        TokenKind::RightAngle,
        TokenKind::Arrow,
        TokenKind::Subtract,
        TokenKind::ForwardSlash,
        TokenKind::Space,
        TokenKind::Other,
        TokenKind::End,
    ];

    /// Maps a reserved word to its keyword kind.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "const" => Some(TokenKind::Const),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "while" => Some(TokenKind::While),
            "switch" => Some(TokenKind::Switch),
            _ => None,
        }
    }
}

/// A token of the C++ lexer.
pub type Token = lexer_framework::Token<TokenKind>;
