//! Shared helpers for the parser

pub mod ordering;

pub use ordering::{compare_found, earliest};
