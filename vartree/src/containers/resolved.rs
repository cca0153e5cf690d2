//! Fully concrete trees

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Output of resolving every depth of a tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Resolved<T: Ord> {
    Set(BTreeSet<T>),
    Map(BTreeMap<T, Resolved<T>>),
}

impl<T: Ord> Resolved<T> {
    /// Keys of a map level, or members of the deepest level
    pub fn len(&self) -> usize {
        match self {
            Self::Set(values) => values.len(),
            Self::Map(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_set(&self) -> Option<&BTreeSet<T>> {
        match self {
            Self::Set(values) => Some(values),
            Self::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<T, Resolved<T>>> {
        match self {
            Self::Map(entries) => Some(entries),
            Self::Set(_) => None,
        }
    }

    /// Number of root-to-leaf combinations described by the tree
    pub fn combinations(&self) -> usize {
        match self {
            Self::Set(values) => values.len(),
            Self::Map(entries) => entries.values().map(Resolved::combinations).sum(),
        }
    }
}

impl<T: Ord + Serialize> Resolved<T> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<T: Ord + fmt::Debug> fmt::Display for Resolved<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(values) => {
                let members: Vec<String> = values.iter().map(|v| format!("{:?}", v)).collect();
                write!(f, "{{{}}}", members.join(", "))
            }
            Self::Map(entries) => {
                let members: Vec<String> = entries
                    .iter()
                    .map(|(key, sub)| format!("{:?}: {}", key, sub))
                    .collect();
                write!(f, "{{{}}}", members.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Resolved<i64> {
        Resolved::Map(BTreeMap::from([
            (0, Resolved::Set(BTreeSet::from([2, 3]))),
            (1, Resolved::Set(BTreeSet::from([4]))),
        ]))
    }

    #[test]
    fn test_json_rendering() {
        assert_eq!(sample().to_json().unwrap(), r#"{"0":[2,3],"1":[4]}"#);
    }

    #[test]
    fn test_display_and_counts() {
        let tree = sample();
        assert_eq!(tree.to_string(), "{0: {2, 3}, 1: {4}}");
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.combinations(), 3);
        assert!(tree.as_map().is_some());
        assert!(tree.as_set().is_none());
    }
}
