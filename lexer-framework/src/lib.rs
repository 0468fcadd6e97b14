//! 表驱动的流式词法分析框架
//!
//! A lexer here sees one position per call and may be driven in either
//! direction. The language lives entirely in a [`TransitionTable`].

pub mod lexer;
pub mod rules;
pub mod table;
pub mod token;

pub use lexer::Lexer;
pub use rules::{Action, Anchor, LexingRule, Matcher, Outcome, Rule, RuleInput};
pub use table::{LineHook, TransitionTable};
pub use token::Token;
