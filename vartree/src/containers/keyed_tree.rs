//! Keyed-tree: literal or placeholder keys mapped to sub-trees

use super::error::ContainerError;
use super::node::Node;
use super::value_set::ValueSet;
use crate::variables::{Element, Placeholder, ResolveResult};
use rand::Rng;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

/// Keys of one level with the sub-tree bound to each.
///
/// All sub-trees of one tree have the same kind, which the parser guarantees
/// by building every depth from the same converter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedTree<T> {
    fixed: BTreeMap<T, Node<T>>,
    deferred: BTreeMap<Placeholder<T>, Node<T>>,
}

impl<T> Default for KeyedTree<T> {
    fn default() -> Self {
        Self {
            fixed: BTreeMap::new(),
            deferred: BTreeMap::new(),
        }
    }
}

impl<T: Element> KeyedTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        fixed: BTreeMap<T, Node<T>>,
        deferred: BTreeMap<Placeholder<T>, Node<T>>,
    ) -> Self {
        Self { fixed, deferred }
    }

    /// Bind every member of `keys` to its own copy of `subtree`
    pub fn bind(keys: ValueSet<T>, subtree: &Node<T>) -> Self {
        let (fixed, deferred) = keys.into_parts();
        Self {
            fixed: fixed.into_iter().map(|key| (key, subtree.clone())).collect(),
            deferred: deferred
                .into_iter()
                .map(|key| (key, subtree.clone()))
                .collect(),
        }
    }

    pub fn fixed(&self) -> &BTreeMap<T, Node<T>> {
        &self.fixed
    }

    pub fn deferred(&self) -> &BTreeMap<Placeholder<T>, Node<T>> {
        &self.deferred
    }

    pub fn get(&self, key: &T) -> Option<&Node<T>> {
        self.fixed.get(key)
    }

    pub fn get_deferred(&self, key: &Placeholder<T>) -> Option<&Node<T>> {
        self.deferred.get(key)
    }

    /// Number of keys as observed before resolution
    pub fn len(&self) -> usize {
        self.fixed.len() + self.deferred.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty() && self.deferred.is_empty()
    }

    /// Whether no key of this level is a placeholder
    pub fn is_concrete(&self) -> bool {
        self.deferred.is_empty()
    }

    /// Insert under a literal key, merging with a sub-tree already there
    pub fn insert_value(&mut self, key: T, subtree: Node<T>) -> Result<(), ContainerError> {
        merge_into(self.fixed.entry(key), subtree)
    }

    /// Insert under a placeholder key, merging with a sub-tree already there
    pub fn insert_placeholder(
        &mut self,
        key: Placeholder<T>,
        subtree: Node<T>,
    ) -> Result<(), ContainerError> {
        merge_into(self.deferred.entry(key), subtree)
    }

    /// Deep merge into a new tree; neither input is affected
    pub fn merge(&self, other: &Self) -> Result<Self, ContainerError> {
        let mut merged = self.clone();
        merged.absorb(other.clone())?;
        Ok(merged)
    }

    /// Move every entry of `other` into this tree, merging colliding keys
    pub fn absorb(&mut self, other: Self) -> Result<(), ContainerError> {
        for (key, subtree) in other.fixed {
            self.insert_value(key, subtree)?;
        }
        for (key, subtree) in other.deferred {
            self.insert_placeholder(key, subtree)?;
        }
        Ok(())
    }

    /// Resolve the keys of this level.
    ///
    /// Each placeholder key is replaced by its values; where a value is
    /// already a key, the two sub-trees are deep-merged. Sub-trees are
    /// returned unresolved.
    pub fn resolve<R>(
        self,
        space: &[T],
        original: Option<&T>,
        rng: &mut R,
    ) -> ResolveResult<BTreeMap<T, Node<T>>>
    where
        R: Rng + ?Sized,
    {
        let mut resolved = self.fixed;
        for (placeholder, subtree) in self.deferred {
            for key in placeholder.resolve(space, original, rng)? {
                merge_into(resolved.entry(key), subtree.clone())?;
            }
        }
        Ok(resolved)
    }
}

fn merge_into<K: Ord, T: Element>(
    entry: Entry<'_, K, Node<T>>,
    subtree: Node<T>,
) -> Result<(), ContainerError> {
    match entry {
        Entry::Vacant(vacant) => {
            vacant.insert(subtree);
        }
        Entry::Occupied(mut occupied) => {
            occupied.get_mut().absorb(subtree)?;
        }
    }
    Ok(())
}

impl<T: fmt::Debug> fmt::Display for KeyedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .fixed
            .iter()
            .map(|(key, subtree)| format!("{:?}: {}", key, subtree))
            .chain(
                self.deferred
                    .iter()
                    .map(|(key, subtree)| format!("{}: {}", key, subtree)),
            )
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn leaf(values: &[i64]) -> Node<i64> {
        Node::Set(ValueSet::from_parts(
            values.iter().copied().collect(),
            BTreeSet::new(),
        ))
    }

    fn keys(values: &[i64]) -> ValueSet<i64> {
        ValueSet::from_parts(values.iter().copied().collect(), BTreeSet::new())
    }

    #[test]
    fn test_bind_shares_subtree_by_value() {
        let tree = KeyedTree::bind(keys(&[0, 1]), &leaf(&[2, 3]));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(&0), Some(&leaf(&[2, 3])));
        assert_eq!(tree.get(&1), Some(&leaf(&[2, 3])));
    }

    #[test]
    fn test_merge_combines_shared_keys() {
        let first = KeyedTree::bind(keys(&[1, 2]), &leaf(&[10]));
        let second = KeyedTree::bind(keys(&[1, 3]), &leaf(&[20]));

        let merged = first.merge(&second).unwrap();
        assert_eq!(merged.get(&1), Some(&leaf(&[10, 20])));
        assert_eq!(merged.get(&2), Some(&leaf(&[10])));
        assert_eq!(merged.get(&3), Some(&leaf(&[20])));

        // inputs are untouched
        assert_eq!(first.get(&1), Some(&leaf(&[10])));
        assert_eq!(second.get(&1), Some(&leaf(&[20])));
    }

    #[test]
    fn test_merge_recurses_through_levels() {
        let inner_a = Node::Tree(KeyedTree::bind(keys(&[5]), &leaf(&[1])));
        let inner_b = Node::Tree(KeyedTree::bind(keys(&[5, 6]), &leaf(&[2])));
        let first = KeyedTree::bind(keys(&[0]), &inner_a);
        let second = KeyedTree::bind(keys(&[0]), &inner_b);

        let merged = first.merge(&second).unwrap();
        let inner = merged.get(&0).and_then(Node::as_tree).unwrap();
        assert_eq!(inner.get(&5), Some(&leaf(&[1, 2])));
        assert_eq!(inner.get(&6), Some(&leaf(&[2])));
    }

    #[test]
    fn test_merge_rejects_mixed_kinds() {
        let first = KeyedTree::bind(keys(&[0]), &leaf(&[1]));
        let second = KeyedTree::bind(
            keys(&[0]),
            &Node::Tree(KeyedTree::bind(keys(&[1]), &leaf(&[2]))),
        );
        assert_matches!(
            first.merge(&second),
            Err(ContainerError::KindMismatch {
                left: "value-set",
                right: "keyed-tree"
            })
        );
    }

    #[test]
    fn test_resolve_merges_colliding_keys() {
        let mut tree = KeyedTree::bind(keys(&[7]), &leaf(&[1]));
        tree.insert_placeholder(Placeholder::index(0), leaf(&[2]))
            .unwrap();
        tree.insert_placeholder(Placeholder::all(), leaf(&[3]))
            .unwrap();

        let resolved = tree
            .resolve(&[7, 8], None, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved.get(&7), Some(&leaf(&[1, 2, 3])));
        assert_eq!(resolved.get(&8), Some(&leaf(&[3])));
    }

    #[test]
    fn test_display() {
        let mut tree = KeyedTree::bind(keys(&[0]), &leaf(&[2]));
        tree.insert_placeholder(Placeholder::size(), leaf(&[]))
            .unwrap();
        assert_eq!(tree.to_string(), "{0: {2}, SIZE: {}}");
    }
}
