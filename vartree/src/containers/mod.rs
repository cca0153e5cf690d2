//! Deferred containers
//!
//! Value-sets and keyed-trees hold literal entries next to unresolved
//! placeholders. They are built by the parser, deep-merged while parsing, and
//! resolved by consuming them against a value space. Resolution returns new
//! concrete data, so a parsed tree can be cloned and resolved many times as a
//! template.

mod error;
mod keyed_tree;
mod node;
mod resolved;
mod value_set;

pub use error::ContainerError;
pub use keyed_tree::KeyedTree;
pub use node::Node;
pub use resolved::Resolved;
pub use value_set::ValueSet;

/// Deep merge of two containers of the same kind into a new one
pub fn merge<T: crate::variables::Element>(
    first: &Node<T>,
    second: &Node<T>,
) -> Result<Node<T>, ContainerError> {
    first.merge(second)
}
