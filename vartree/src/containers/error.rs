//! Container errors

use crate::logging::{codes, Code};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    /// Merging is only defined between containers of the same kind
    #[error("Cannot merge a {left} with a {right}")]
    KindMismatch {
        left: &'static str,
        right: &'static str,
    },
}

impl ContainerError {
    pub fn kind_mismatch(left: &'static str, right: &'static str) -> Self {
        Self::KindMismatch { left, right }
    }

    /// Get error code for logging
    pub fn error_code(&self) -> Code {
        match self {
            Self::KindMismatch { .. } => codes::container::KIND_MISMATCH,
        }
    }
}
