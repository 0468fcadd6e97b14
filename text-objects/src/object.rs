use crate::comment::detect_comment;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::function::detect_function;
use crate::parameter::detect_parameter;
use crate::type_expr::detect_type;
use common_framework::{BufferView, Cursor, TextSpan};
use std::fmt;
use std::str::FromStr;

/// Inner objects hug their content; outer objects also take surrounding
/// separators or blank lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Inner,
    Outer,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "inner" | "i" => Ok(Mode::Inner),
            "outer" | "a" => Ok(Mode::Outer),
            _ => Err(Error::UnknownMode(s.to_owned())),
        }
    }
}

/// The text objects that can be detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextObjectKind {
    Function,
    Parameter,
    Type,
    Comment,
}

impl TextObjectKind {
    pub const ALL: [TextObjectKind; 4] = [
        TextObjectKind::Function,
        TextObjectKind::Parameter,
        TextObjectKind::Type,
        TextObjectKind::Comment,
    ];

    /// Returns the canonical name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            TextObjectKind::Function => "function",
            TextObjectKind::Parameter => "parameter",
            TextObjectKind::Type => "type",
            TextObjectKind::Comment => "comment",
        }
    }
}

impl fmt::Display for TextObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextObjectKind {
    type Err = Error;

    /// Accepts the full name or the editor mnemonic.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "function" | "f" => Ok(TextObjectKind::Function),
            "parameter" | "param" | "p" | "a" => Ok(TextObjectKind::Parameter),
            "type" | "t" => Ok(TextObjectKind::Type),
            "comment" | "c" => Ok(TextObjectKind::Comment),
            _ => Err(Error::UnknownKind(s.to_owned())),
        }
    }
}

/// A text object that can be located from a cursor.
pub trait TextObject {
    fn kind(&self) -> TextObjectKind;

    /// Returns the object's span, or `None` when the cursor is not on one.
    fn detect(&self, cursor: Cursor, buffer: &dyn BufferView, mode: Mode) -> Option<TextSpan>;
}

/// Function definitions, from return type to closing brace. Mode is ignored.
#[derive(Debug, Clone, Default)]
pub struct FunctionObject {
    config: Config,
}

impl FunctionObject {
    /// Creates a function detector using `config`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl TextObject for FunctionObject {
    fn kind(&self) -> TextObjectKind {
        TextObjectKind::Function
    }

    fn detect(&self, cursor: Cursor, buffer: &dyn BufferView, _mode: Mode) -> Option<TextSpan> {
        detect_function(cursor, buffer, &self.config)
    }
}

/// Detects the parameter under the cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterObject;

impl TextObject for ParameterObject {
    fn kind(&self) -> TextObjectKind {
        TextObjectKind::Parameter
    }

    fn detect(&self, cursor: Cursor, buffer: &dyn BufferView, mode: Mode) -> Option<TextSpan> {
        detect_parameter(cursor, buffer, mode)
    }
}

/// Type expressions. Mode is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeObject;

impl TextObject for TypeObject {
    fn kind(&self) -> TextObjectKind {
        TextObjectKind::Type
    }

    fn detect(&self, cursor: Cursor, buffer: &dyn BufferView, _mode: Mode) -> Option<TextSpan> {
        detect_type(cursor, buffer)
    }
}

/// Detects the `//` comment block around the cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentObject;

impl TextObject for CommentObject {
    fn kind(&self) -> TextObjectKind {
        TextObjectKind::Comment
    }

    fn detect(&self, cursor: Cursor, buffer: &dyn BufferView, mode: Mode) -> Option<TextSpan> {
        detect_comment(cursor, buffer, mode)
    }
}

/// Builds the detector for `kind`.
pub fn text_object(kind: TextObjectKind, config: &Config) -> Box<dyn TextObject> {
    match kind {
        TextObjectKind::Function => Box::new(FunctionObject::new(*config)),
        TextObjectKind::Parameter => Box::new(ParameterObject),
        TextObjectKind::Type => Box::new(TypeObject),
        TextObjectKind::Comment => Box::new(CommentObject),
    }
}

/// Locates a text object with the default configuration.
pub fn detect(
    kind: TextObjectKind,
    cursor: Cursor,
    buffer: &dyn BufferView,
    mode: Mode,
) -> Option<TextSpan> {
    detect_with(&Config::default(), kind, cursor, buffer, mode)
}

/// Locates a text object with an explicit configuration.
pub fn detect_with(
    config: &Config,
    kind: TextObjectKind,
    cursor: Cursor,
    buffer: &dyn BufferView,
    mode: Mode,
) -> Option<TextSpan> {
    text_object(kind, config).detect(cursor, buffer, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names() {
        assert_eq!("inner".parse::<Mode>().unwrap(), Mode::Inner);
        assert_eq!("i".parse::<Mode>().unwrap(), Mode::Inner);
        assert_eq!("outer".parse::<Mode>().unwrap(), Mode::Outer);
        assert_eq!("a".parse::<Mode>().unwrap(), Mode::Outer);
        assert!(
            matches!("around".parse::<Mode>(), Err(Error::UnknownMode(name)) if name == "around")
        );
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in TextObjectKind::ALL {
            assert_eq!(kind.to_string().parse::<TextObjectKind>().unwrap(), kind);
        }
        assert_eq!("a".parse::<TextObjectKind>().unwrap(), TextObjectKind::Parameter);
        assert!(matches!("block".parse::<TextObjectKind>(), Err(Error::UnknownKind(_))));
    }

    #[test]
    fn test_text_object_reports_kind() {
        for kind in TextObjectKind::ALL {
            assert_eq!(text_object(kind, &Config::default()).kind(), kind);
        }
    }
}
