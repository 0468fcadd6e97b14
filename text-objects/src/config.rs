use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Tunables for text object detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Forward/backward round trips the function detector makes before
    /// giving up.
    pub max_function_rounds: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_function_rounds: 100,
        }
    }
}

impl Config {
    /// Parses a TOML snippet. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
