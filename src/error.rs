//! Crate-level error types.
//!
//! Camera navigation and playback never fail; every input is clamped.
//! Only loading and saving option presets can go wrong.

use std::fmt;

/// Errors produced by the packview crate.
#[derive(Debug)]
pub enum PackViewError {
    /// Generic I/O failure while reading or writing a preset.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for PackViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for PackViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for PackViewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
