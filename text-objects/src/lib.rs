//! C/C++ 文本对象
//!
//! Locates functions, parameters, type expressions and comment blocks
//! around a cursor without parsing the whole file. Every detector streams
//! tokens outward from the cursor in both directions and stops at the
//! first token that cannot belong to the object.
//!
//! ```
//! use common_framework::{Buffer, Cursor, TextSpan};
//! use text_objects::{detect, Mode, TextObjectKind};
//!
//! let buffer = Buffer::new("func(hello, world, tests)");
//! let span = detect(TextObjectKind::Parameter, Cursor::new(0, 13), &buffer, Mode::Inner);
//! assert_eq!(span, Some(TextSpan::on_row(0, 12, 17)));
//! ```

pub mod comment;
pub mod config;
pub mod error;
pub mod function;
pub mod lexer;
pub mod object;
pub mod parameter;
pub mod scan;
pub mod token;
pub mod type_expr;

pub use config::Config;
pub use error::{Error, Result};
pub use lexer::{cpp_lexer, tokenize, LexState, LexerOptions};
pub use object::{
    detect, detect_with, text_object, CommentObject, FunctionObject, Mode, ParameterObject,
    TextObject, TextObjectKind, TypeObject,
};
pub use token::{Token, TokenKind};
