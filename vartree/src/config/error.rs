//! Configuration errors

use crate::logging::{codes, Code};
use std::path::PathBuf;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration syntax: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Cannot render configuration: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("Invalid symbol {name}: {reason}")]
    InvalidSymbol {
        name: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    pub fn invalid_symbol(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidSymbol { name, reason }
    }

    /// Get error code for logging
    pub fn error_code(&self) -> Code {
        match self {
            Self::Io { .. } => codes::config::CONFIG_IO,
            Self::Toml(_) | Self::Render(_) => codes::config::CONFIG_SYNTAX,
            Self::InvalidSymbol { .. } => codes::config::INVALID_SYMBOL,
        }
    }
}
