//! Configuration for the grammar
//!
//! Defaults live in [`constants`]; [`GrammarConfig`] can override any symbol
//! from a TOML document.

pub mod constants;
mod error;
mod grammar;

pub use error::{ConfigError, ConfigResult};
pub use grammar::GrammarConfig;
