//! Common Framework
//!
//! 文本模型：lexer-framework、parser-framework 与各个文本对象检测器共享的
//! 位置、区间与缓冲区类型。

pub mod buffer;
pub mod cursor;
pub mod scan;
pub mod span;

pub use buffer::{Buffer, BufferView};
pub use cursor::Cursor;
pub use scan::{ScanChar, ScanDirection};
pub use span::{SpanIter, TextSpan};
