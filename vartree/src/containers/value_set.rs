//! Value-set: the deepest level of a tree

use crate::variables::{Element, Placeholder, ResolveResult};
use rand::Rng;
use std::collections::BTreeSet;
use std::fmt;

/// Literal values plus unresolved placeholders.
///
/// Before resolution the placeholders are opaque members of the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSet<T> {
    fixed: BTreeSet<T>,
    deferred: BTreeSet<Placeholder<T>>,
}

impl<T> Default for ValueSet<T> {
    fn default() -> Self {
        Self {
            fixed: BTreeSet::new(),
            deferred: BTreeSet::new(),
        }
    }
}

impl<T: Element> ValueSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(fixed: BTreeSet<T>, deferred: BTreeSet<Placeholder<T>>) -> Self {
        Self { fixed, deferred }
    }

    pub fn insert_value(&mut self, value: T) -> bool {
        self.fixed.insert(value)
    }

    pub fn insert_placeholder(&mut self, placeholder: Placeholder<T>) -> bool {
        self.deferred.insert(placeholder)
    }

    pub fn fixed(&self) -> &BTreeSet<T> {
        &self.fixed
    }

    pub fn deferred(&self) -> &BTreeSet<Placeholder<T>> {
        &self.deferred
    }

    pub fn into_parts(self) -> (BTreeSet<T>, BTreeSet<Placeholder<T>>) {
        (self.fixed, self.deferred)
    }

    /// Number of members as observed before resolution
    pub fn len(&self) -> usize {
        self.fixed.len() + self.deferred.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty() && self.deferred.is_empty()
    }

    /// Whether no placeholder is left
    pub fn is_concrete(&self) -> bool {
        self.deferred.is_empty()
    }

    pub fn contains_value(&self, value: &T) -> bool {
        self.fixed.contains(value)
    }

    pub fn contains_placeholder(&self, placeholder: &Placeholder<T>) -> bool {
        self.deferred.contains(placeholder)
    }

    /// Union of both partitions into a new set
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.absorb(other.clone());
        merged
    }

    /// Union `other` into this set
    pub fn absorb(&mut self, other: Self) {
        self.fixed.extend(other.fixed);
        self.deferred.extend(other.deferred);
    }

    /// Replace every placeholder by its values.
    ///
    /// Sample and random placeholders draw from `rng`, so resolving two
    /// clones of the same set generally gives different results.
    pub fn resolve<R>(self, space: &[T], original: Option<&T>, rng: &mut R) -> ResolveResult<BTreeSet<T>>
    where
        R: Rng + ?Sized,
    {
        let mut resolved = self.fixed;
        for placeholder in &self.deferred {
            resolved.extend(placeholder.resolve(space, original, rng)?);
        }
        Ok(resolved)
    }
}

impl<T: fmt::Debug> fmt::Display for ValueSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self
            .fixed
            .iter()
            .map(|value| format!("{:?}", value))
            .chain(self.deferred.iter().map(|placeholder| placeholder.to_string()))
            .collect();
        write!(f, "{{{}}}", members.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn literal(values: &[i64]) -> ValueSet<i64> {
        ValueSet::from_parts(values.iter().copied().collect(), BTreeSet::new())
    }

    #[test]
    fn test_merge_unions_fixed() {
        let merged = literal(&[1, 2]).merge(&literal(&[2, 3]));
        assert_eq!(merged, literal(&[1, 2, 3]));
    }

    #[test]
    fn test_merge_keeps_distinct_samples() {
        let mut first = literal(&[1]);
        first.insert_placeholder(Placeholder::sample(1, false));
        let mut second = literal(&[1]);
        second.insert_placeholder(Placeholder::sample(1, false));

        let merged = first.merge(&second);
        assert_eq!(merged.deferred().len(), 2);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_merge_leaves_inputs_untouched() {
        let first = literal(&[1]);
        let second = literal(&[2]);
        let mut merged = first.merge(&second);
        merged.insert_value(3);

        assert_eq!(first, literal(&[1]));
        assert_eq!(second, literal(&[2]));
    }

    #[test]
    fn test_resolve_folds_placeholders_into_fixed() {
        let mut values = literal(&[1]);
        values.insert_placeholder(Placeholder::index(0));
        values.insert_placeholder(Placeholder::size());

        let resolved = values
            .resolve(&[7, 8, 9], None, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(resolved, BTreeSet::from([1, 3, 7]));
    }

    #[test]
    fn test_resolve_propagates_errors() {
        let mut values = literal(&[]);
        values.insert_placeholder(Placeholder::sample(4, false));
        assert!(values
            .resolve(&[1, 2], None, &mut StdRng::seed_from_u64(0))
            .is_err());
    }

    #[test]
    fn test_observed_membership() {
        let index = Placeholder::index(1);
        let mut values = literal(&[4]);
        values.insert_placeholder(index.clone());

        assert!(values.contains_value(&4));
        assert!(values.contains_placeholder(&index));
        assert!(!values.is_concrete());
        assert_eq!(values.to_string(), "{4, INDEX(1)}");
    }

    #[test]
    fn test_empty() {
        let values: ValueSet<i64> = ValueSet::new();
        assert!(values.is_empty());
        assert!(values.is_concrete());
        assert_eq!(values.to_string(), "{}");
    }
}
