//! Consolidated codes and their metadata
//!
//! Every error type in the crate maps its variants onto one of these codes,
//! and the `log_*!` macros prefix log lines with them.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata attached to a code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

impl CodeMetadata {
    const fn new(code: &'static str, category: &'static str, description: &'static str) -> Self {
        Self {
            code,
            category,
            description,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

pub mod grammar {
    use super::Code;

    pub const INVALID_TOKEN: Code = Code::new("G001");
    pub const INVALID_RANGE: Code = Code::new("G002");
    pub const MISSING_LEVEL: Code = Code::new("G003");
    pub const MISSING_CLOSERS: Code = Code::new("G004");
    pub const UNMATCHED_CLOSER: Code = Code::new("G005");
    pub const MISSING_LEVEL_DELIMITER: Code = Code::new("G006");
    pub const NO_LEVELS: Code = Code::new("G007");
}

pub mod resolution {
    use super::Code;

    pub const SAMPLE_TOO_LARGE: Code = Code::new("R001");
    pub const ORIGINAL_REQUIRED: Code = Code::new("R002");
    pub const INDEX_OUT_OF_RANGE: Code = Code::new("R003");
    pub const ENDPOINT_NOT_LEAF: Code = Code::new("R004");
    pub const NOT_INTEGER: Code = Code::new("R005");
    pub const NOT_REPRESENTABLE: Code = Code::new("R006");
}

pub mod container {
    use super::Code;

    pub const KIND_MISMATCH: Code = Code::new("C001");
}

pub mod config {
    use super::Code;

    pub const CONFIG_IO: Code = Code::new("K001");
    pub const CONFIG_SYNTAX: Code = Code::new("K002");
    pub const INVALID_SYMBOL: Code = Code::new("K003");
}

pub mod success {
    use super::Code;

    pub const TREE_PARSED: Code = Code::new("I001");
    pub const TREE_RESOLVED: Code = Code::new("I002");
    pub const CONFIG_LOADED: Code = Code::new("I003");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

const METADATA: &[CodeMetadata] = &[
    CodeMetadata::new("G001", "Grammar", "Token is neither a placeholder nor accepted by the level converter"),
    CodeMetadata::new("G002", "Grammar", "Literal range endpoints have no integer form"),
    CodeMetadata::new("G003", "Grammar", "Another level was required but no opener was found"),
    CodeMetadata::new("G004", "Grammar", "Input ended with strict openers still pending"),
    CodeMetadata::new("G005", "Grammar", "Level closer without a pending strict opener"),
    CodeMetadata::new("G006", "Grammar", "Level group is not followed by the level delimiter"),
    CodeMetadata::new("G007", "Grammar", "Parse requested with an empty converter list"),
    CodeMetadata::new("R001", "Resolution", "Sample size exceeds the value space"),
    CodeMetadata::new("R002", "Resolution", "Exclusion requested without an original value"),
    CodeMetadata::new("R003", "Resolution", "Index lies outside the value space"),
    CodeMetadata::new("R004", "Resolution", "Range endpoint did not resolve to exactly one value"),
    CodeMetadata::new("R005", "Resolution", "Value has no integer form"),
    CodeMetadata::new("R006", "Resolution", "Integer cannot be represented as a value"),
    CodeMetadata::new("C001", "Container", "Merge of a value-set with a keyed-tree"),
    CodeMetadata::new("K001", "Config", "Configuration file could not be read"),
    CodeMetadata::new("K002", "Config", "Configuration file is not valid TOML"),
    CodeMetadata::new("K003", "Config", "Grammar symbols are empty or collide"),
    CodeMetadata::new("I001", "Success", "Tree parsed"),
    CodeMetadata::new("I002", "Success", "Tree resolved"),
    CodeMetadata::new("I003", "Success", "Configuration loaded"),
];

fn registry() -> &'static HashMap<&'static str, &'static CodeMetadata> {
    static REGISTRY: OnceLock<HashMap<&'static str, &'static CodeMetadata>> = OnceLock::new();
    REGISTRY.get_or_init(|| METADATA.iter().map(|meta| (meta.code, meta)).collect())
}

pub fn get_metadata(code: &str) -> Option<&'static CodeMetadata> {
    registry().get(code).copied()
}

pub fn get_description(code: &str) -> &'static str {
    get_metadata(code)
        .map(|meta| meta.description)
        .unwrap_or("Unknown error")
}

pub fn get_category(code: &str) -> &'static str {
    get_metadata(code)
        .map(|meta| meta.category)
        .unwrap_or("Unknown")
}
