//! 基于状态表的流式语法分析框架
//!
//! Parsers consume tokens one at a time, accumulate a span and a nesting
//! level, and stop on the first token their table has no answer for.

pub mod context;
pub mod parser;
pub mod table;
pub mod traits;

pub use context::ParseContext;
pub use parser::{ParseStep, Parser, Termination};
pub use table::{ParseTable, Transition};
pub use traits::SideChannel;
