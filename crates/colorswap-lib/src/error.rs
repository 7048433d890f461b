//! Unified error type for the colorswap-lib crate.
//!
//! [`ColorswapError`] carries the three recoverable failure kinds of a
//! conversion request (`NoColorFound`, `Parse`, `UnsupportedConversion`) plus
//! the ambient `Io` and `Config` kinds used by the settings file.
//! `From` impls allow `?` to propagate across module boundaries seamlessly.

use std::fmt;

use crate::parse::ParseError;

/// Unified error type for colorswap-lib operations.
#[derive(Debug)]
pub enum ColorswapError {
    /// Nothing at the requested offset looks like a color.
    NoColorFound,
    /// A color-like token was found but its syntax is invalid.
    Parse(ParseError),
    /// The color cannot be expressed in the requested notation (e.g. no CSS name).
    UnsupportedConversion(String),
    /// Standard I/O error (settings persistence, host file access).
    Io(std::io::Error),
    /// Settings validation error.
    Config(String),
}

impl fmt::Display for ColorswapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorswapError::NoColorFound => write!(f, "That does not seem to be a color"),
            ColorswapError::Parse(e) => write!(f, "That does not seem to be a color ({e})"),
            ColorswapError::UnsupportedConversion(e) => write!(f, "{e}"),
            ColorswapError::Io(e) => write!(f, "I/O error: {e}"),
            ColorswapError::Config(e) => write!(f, "Config error: {e}"),
        }
    }
}

impl std::error::Error for ColorswapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ColorswapError::Parse(e) => Some(e),
            ColorswapError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for ColorswapError {
    fn from(e: ParseError) -> Self {
        ColorswapError::Parse(e)
    }
}

impl From<std::io::Error> for ColorswapError {
    fn from(e: std::io::Error) -> Self {
        ColorswapError::Io(e)
    }
}

/// Crate-level Result alias using [`ColorswapError`].
pub type Result<T> = std::result::Result<T, ColorswapError>;
