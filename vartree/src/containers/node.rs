//! One depth of a parsed tree

use super::error::ContainerError;
use super::keyed_tree::KeyedTree;
use super::resolved::Resolved;
use super::value_set::ValueSet;
use crate::variables::{Element, ResolveResult};
use crate::{log_debug, log_success};
use crate::logging::codes;
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;

/// Either the deepest level (a value-set) or an intermediate level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<T> {
    Set(ValueSet<T>),
    Tree(KeyedTree<T>),
}

impl<T> Node<T> {
    /// Name of the container kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Set(_) => "value-set",
            Self::Tree(_) => "keyed-tree",
        }
    }

    pub fn as_set(&self) -> Option<&ValueSet<T>> {
        match self {
            Self::Set(values) => Some(values),
            Self::Tree(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&KeyedTree<T>> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::Set(_) => None,
        }
    }
}

impl<T: Element> Node<T> {
    /// Number of nested levels below and including this one
    pub fn depth(&self) -> usize {
        match self {
            Self::Set(_) => 1,
            Self::Tree(tree) => {
                1 + tree
                    .fixed()
                    .values()
                    .chain(tree.deferred().values())
                    .next()
                    .map(Node::depth)
                    .unwrap_or(0)
            }
        }
    }

    /// Deep merge into a new container of the same kind
    pub fn merge(&self, other: &Self) -> Result<Self, ContainerError> {
        let mut merged = self.clone();
        merged.absorb(other.clone())?;
        Ok(merged)
    }

    /// Deep merge `other` into this container
    pub fn absorb(&mut self, other: Self) -> Result<(), ContainerError> {
        match (self, other) {
            (Self::Set(values), Self::Set(other)) => {
                values.absorb(other);
                Ok(())
            }
            (Self::Tree(tree), Self::Tree(other)) => tree.absorb(other),
            (this, other) => Err(ContainerError::kind_mismatch(this.kind(), other.kind())),
        }
    }

    /// Resolve every depth of the tree.
    ///
    /// Depth `d` is resolved against `spaces[d]`; when fewer spaces than
    /// depths are given, the last space is reused for the remaining depths.
    /// `original` is handed to every placeholder that excludes the original
    /// value.
    pub fn resolve_deep<S, R>(
        self,
        spaces: &[S],
        original: Option<&T>,
        rng: &mut R,
    ) -> ResolveResult<Resolved<T>>
    where
        S: AsRef<[T]>,
        R: Rng + ?Sized,
    {
        let resolved = self.resolve_level(spaces, original, rng)?;
        log_success!(codes::success::TREE_RESOLVED, "Tree resolved",
            "entries" => resolved.len()
        );
        Ok(resolved)
    }

    fn resolve_level<S, R>(
        self,
        spaces: &[S],
        original: Option<&T>,
        rng: &mut R,
    ) -> ResolveResult<Resolved<T>>
    where
        S: AsRef<[T]>,
        R: Rng + ?Sized,
    {
        let space: &[T] = spaces.first().map(|space| space.as_ref()).unwrap_or(&[]);
        let deeper = if spaces.len() > 1 { &spaces[1..] } else { spaces };

        match self {
            Self::Set(values) => Ok(Resolved::Set(values.resolve(space, original, rng)?)),
            Self::Tree(tree) => {
                let level = tree.resolve(space, original, rng)?;
                log_debug!("Resolved level keys", "keys" => level.len());

                let mut resolved = BTreeMap::new();
                for (key, subtree) in level {
                    resolved.insert(key, subtree.resolve_level(deeper, original, rng)?);
                }
                Ok(Resolved::Map(resolved))
            }
        }
    }
}

impl<T: Element> From<ValueSet<T>> for Node<T> {
    fn from(values: ValueSet<T>) -> Self {
        Self::Set(values)
    }
}

impl<T: Element> From<KeyedTree<T>> for Node<T> {
    fn from(tree: KeyedTree<T>) -> Self {
        Self::Tree(tree)
    }
}

impl<T: fmt::Debug> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(values) => write!(f, "{}", values),
            Self::Tree(tree) => write!(f, "{}", tree),
        }
    }
}
