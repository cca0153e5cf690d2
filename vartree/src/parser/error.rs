//! Grammar errors with absolute positions
//!
//! Every position is a byte offset into the original top-level string, no
//! matter how deep in the recursion the error was raised.

use crate::containers::ContainerError;
use crate::logging::{codes, Code};

pub type GrammarResult<T> = Result<T, GrammarError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("At {position}: The value \"{token}\" cannot be converted to a placeholder or with the converter {converter}: {reason}")]
    InvalidToken {
        position: usize,
        token: String,
        converter: String,
        reason: String,
    },

    #[error("At {position}: The range \"{segment}\" needs literal endpoints with an integer form")]
    InvalidRange { position: usize, segment: String },

    #[error("At {position}: At least one more level required or level opener ( \"{opener}\" ) or lazy opener ( \"{lazy_opener}\" ) missing")]
    MissingLevel {
        position: usize,
        opener: String,
        lazy_opener: String,
    },

    #[error("At {position}: Expected {count} more level closer(s) ( \"{closer}\" )")]
    MissingClosers {
        position: usize,
        closer: String,
        count: usize,
    },

    #[error("At {position}: Level closer ( \"{closer}\" ) has no matching level opener")]
    UnmatchedCloser { position: usize, closer: String },

    #[error("At {position}: Expected level delimiter ( \"{delimiter}\" ) or end of input after a level closer")]
    MissingLevelDelimiter { position: usize, delimiter: String },

    #[error("At {position}: At least one level converter is required")]
    NoLevels { position: usize },

    #[error("At {position}: {source}")]
    Container {
        position: usize,
        #[source]
        source: ContainerError,
    },
}

impl GrammarError {
    pub fn invalid_token(position: usize, token: &str, converter: &str, reason: &str) -> Self {
        Self::InvalidToken {
            position,
            token: token.to_string(),
            converter: converter.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_range(position: usize, segment: &str) -> Self {
        Self::InvalidRange {
            position,
            segment: segment.to_string(),
        }
    }

    pub fn missing_level(position: usize, opener: &str, lazy_opener: &str) -> Self {
        Self::MissingLevel {
            position,
            opener: opener.to_string(),
            lazy_opener: lazy_opener.to_string(),
        }
    }

    pub fn missing_closers(position: usize, closer: &str, count: usize) -> Self {
        Self::MissingClosers {
            position,
            closer: closer.to_string(),
            count,
        }
    }

    pub fn unmatched_closer(position: usize, closer: &str) -> Self {
        Self::UnmatchedCloser {
            position,
            closer: closer.to_string(),
        }
    }

    pub fn missing_level_delimiter(position: usize, delimiter: &str) -> Self {
        Self::MissingLevelDelimiter {
            position,
            delimiter: delimiter.to_string(),
        }
    }

    pub fn container(position: usize, source: ContainerError) -> Self {
        Self::Container { position, source }
    }

    /// Absolute offset into the parsed string
    pub fn position(&self) -> usize {
        match self {
            Self::InvalidToken { position, .. }
            | Self::InvalidRange { position, .. }
            | Self::MissingLevel { position, .. }
            | Self::MissingClosers { position, .. }
            | Self::UnmatchedCloser { position, .. }
            | Self::MissingLevelDelimiter { position, .. }
            | Self::NoLevels { position }
            | Self::Container { position, .. } => *position,
        }
    }

    /// Get error code for logging
    pub fn error_code(&self) -> Code {
        match self {
            Self::InvalidToken { .. } => codes::grammar::INVALID_TOKEN,
            Self::InvalidRange { .. } => codes::grammar::INVALID_RANGE,
            Self::MissingLevel { .. } => codes::grammar::MISSING_LEVEL,
            Self::NoLevels { .. } => codes::grammar::NO_LEVELS,
            Self::MissingClosers { .. } => codes::grammar::MISSING_CLOSERS,
            Self::UnmatchedCloser { .. } => codes::grammar::UNMATCHED_CLOSER,
            Self::MissingLevelDelimiter { .. } => codes::grammar::MISSING_LEVEL_DELIMITER,
            Self::Container { source, .. } => source.error_code(),
        }
    }

    /// Error message without the position prefix
    pub fn cause(&self) -> String {
        let rendered = self.to_string();
        let prefix = format!("At {}: ", self.position());
        rendered
            .strip_prefix(&prefix)
            .map(str::to_string)
            .unwrap_or(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_position() {
        let error = GrammarError::invalid_token(4, "x", "i64", "invalid digit found in string");
        assert_eq!(
            error.to_string(),
            "At 4: The value \"x\" cannot be converted to a placeholder or with the converter i64: invalid digit found in string"
        );
        assert_eq!(error.position(), 4);
        assert_eq!(error.error_code(), codes::grammar::INVALID_TOKEN);
    }

    #[test]
    fn test_cause_strips_position() {
        let error = GrammarError::unmatched_closer(9, "]");
        assert_eq!(
            error.cause(),
            "Level closer ( \"]\" ) has no matching level opener"
        );
    }

    #[test]
    fn test_container_error_code() {
        let error = GrammarError::container(0, ContainerError::kind_mismatch("value-set", "keyed-tree"));
        assert_eq!(error.error_code(), codes::container::KIND_MISMATCH);
        assert_eq!(error.to_string(), "At 0: Cannot merge a value-set with a keyed-tree");
    }
}
