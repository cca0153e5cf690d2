//! Resolution errors
//!
//! Raised while evaluating placeholders against a value space. They are
//! structural: an insufficient population does not become sufficient by
//! drawing again, so nothing here is retried.

use crate::containers::ContainerError;
use crate::logging::{codes, Code};
use std::fmt;

pub type ResolveResult<T> = Result<T, ResolveError>;

/// Longest prefix of a value space rendered into an error message
const MAX_RENDERED_SPACE: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Placeholder {placeholder} cannot be resolved in {space}: cannot draw {requested} values from {available} values")]
    SampleTooLarge {
        placeholder: String,
        space: String,
        requested: usize,
        available: usize,
    },

    #[error("Placeholder {placeholder} cannot be resolved in {space}: sampling without the original value needs an original value")]
    OriginalRequired { placeholder: String, space: String },

    #[error("Placeholder {placeholder} cannot be resolved in {space}: index {index} is outside a space of {len} values")]
    IndexOutOfRange {
        placeholder: String,
        space: String,
        index: i64,
        len: usize,
    },

    #[error("Placeholder {placeholder} cannot be resolved in {space}: range endpoint resolved to {count} values instead of one")]
    EndpointNotLeaf {
        placeholder: String,
        space: String,
        count: usize,
    },

    #[error("Placeholder {placeholder} cannot be resolved in {space}: value {value} has no integer form")]
    NotInteger {
        placeholder: String,
        space: String,
        value: String,
    },

    #[error("Placeholder {placeholder} cannot be resolved in {space}: integer {value} is not a valid value")]
    NotRepresentable {
        placeholder: String,
        space: String,
        value: i64,
    },

    #[error(transparent)]
    Container(#[from] ContainerError),
}

impl ResolveError {
    /// Get error code for logging
    pub fn error_code(&self) -> Code {
        match self {
            Self::SampleTooLarge { .. } => codes::resolution::SAMPLE_TOO_LARGE,
            Self::OriginalRequired { .. } => codes::resolution::ORIGINAL_REQUIRED,
            Self::IndexOutOfRange { .. } => codes::resolution::INDEX_OUT_OF_RANGE,
            Self::EndpointNotLeaf { .. } => codes::resolution::ENDPOINT_NOT_LEAF,
            Self::NotInteger { .. } => codes::resolution::NOT_INTEGER,
            Self::NotRepresentable { .. } => codes::resolution::NOT_REPRESENTABLE,
            Self::Container(error) => error.error_code(),
        }
    }

    /// Rendered form of the placeholder that failed, if any
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::SampleTooLarge { placeholder, .. }
            | Self::OriginalRequired { placeholder, .. }
            | Self::IndexOutOfRange { placeholder, .. }
            | Self::EndpointNotLeaf { placeholder, .. }
            | Self::NotInteger { placeholder, .. }
            | Self::NotRepresentable { placeholder, .. } => Some(placeholder.as_str()),
            Self::Container(_) => None,
        }
    }
}

/// Render a value space for an error message, eliding long tails
pub(crate) fn render_space<T: fmt::Debug>(space: &[T]) -> String {
    let shown: Vec<String> = space
        .iter()
        .take(MAX_RENDERED_SPACE)
        .map(|value| format!("{:?}", value))
        .collect();

    if space.len() > MAX_RENDERED_SPACE {
        format!(
            "[{}, ... ({} more)]",
            shown.join(", "),
            space.len() - MAX_RENDERED_SPACE
        )
    } else {
        format!("[{}]", shown.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_short_space() {
        assert_eq!(render_space(&[5, 1, 9]), "[5, 1, 9]");
        assert_eq!(render_space::<i32>(&[]), "[]");
    }

    #[test]
    fn test_render_long_space_is_elided() {
        let space: Vec<u32> = (0..20).collect();
        let rendered = render_space(&space);
        assert!(rendered.ends_with("... (4 more)]"));
        assert!(rendered.starts_with("[0, 1, 2"));
    }

    #[test]
    fn test_error_message_and_code() {
        let error = ResolveError::SampleTooLarge {
            placeholder: "SAMPLE(3)".to_string(),
            space: "[1, 2]".to_string(),
            requested: 3,
            available: 2,
        };
        assert_eq!(
            error.to_string(),
            "Placeholder SAMPLE(3) cannot be resolved in [1, 2]: cannot draw 3 values from 2 values"
        );
        assert_eq!(error.error_code(), codes::resolution::SAMPLE_TOO_LARGE);
        assert_eq!(error.placeholder(), Some("SAMPLE(3)"));
    }
}
