//! Errors raised by the text object front door.
//!
//! Failing to find a text object is not an error; detectors return `None`.

use thiserror::Error;

/// Errors of the text object front door.
#[derive(Debug, Error)]
pub enum Error {
    /// Mode name not recognised.
    #[error("Unknown text object mode: {0}")]
    UnknownMode(String),

    /// Text object name not recognised.
    #[error("Unknown text object kind: {0}")]
    UnknownKind(String),

    /// Configuration text could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
