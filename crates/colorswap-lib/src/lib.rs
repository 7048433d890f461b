//! colorswap: locate, parse, convert and reformat CSS color notations in text.

pub mod buffer;
pub mod color;
pub mod commands;
pub mod config;
pub mod decimal;
pub mod error;
pub mod format;
pub mod locate;
pub mod parse;

pub use error::ColorswapError;
