//! # vartree
//!
//! One-line grammar for nested, fixed-depth collections with deferred
//! placeholders. Parsing yields value-sets and keyed-trees that still hold
//! placeholders; resolving them against value spaces yields concrete data.
//!
//! ```
//! use vartree::{parse_tree, Converter};
//! use rand::SeedableRng;
//!
//! let converters: Vec<Converter<i64>> = vec![Converter::parsing(), Converter::parsing()];
//! let tree = parse_tree("0,1:[#0,3~4]", &converters).unwrap();
//!
//! let spaces = [vec![7, 8, 9]];
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let resolved = tree.resolve_deep(&spaces, None, &mut rng).unwrap();
//! assert_eq!(resolved.to_json().unwrap(), r#"{"0":[3,4,7],"1":[3,4,7]}"#);
//! ```

// Internal modules
pub mod config;
pub mod containers;
#[macro_use]
pub mod logging;
pub mod parser;
pub mod utils;
pub mod variables;

// Re-export key types for library consumers
pub use config::{ConfigError, GrammarConfig};
pub use containers::{merge, ContainerError, KeyedTree, Node, Resolved, ValueSet};
pub use parser::{
    classify, parse_tree, resolve_listing, Classified, Converter, GrammarError, GrammarResult,
    TreeParser,
};
pub use variables::{Element, Placeholder, RangeEndpoint, ResolveError, ResolveResult};
