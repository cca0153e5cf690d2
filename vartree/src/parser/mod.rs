//! Grammar parsing
//!
//! Turns a tree string such as `0,1:[2~4],5:#0,??2` into deferred containers.
//! The free functions use the default symbols and report positions relative
//! to the start of their input; [`TreeParser`] takes a custom
//! [`GrammarConfig`](crate::config::GrammarConfig) and an outer offset.

mod classify;
mod converter;
mod error;
mod listing;
mod tree;

pub use classify::Classified;
pub use converter::Converter;
pub use error::{GrammarError, GrammarResult};
pub use tree::TreeParser;

use crate::containers::{Node, ValueSet};
use crate::variables::Element;

/// Parse `text` with one converter per depth and the default symbols
pub fn parse_tree<T: Element>(text: &str, converters: &[Converter<T>]) -> GrammarResult<Node<T>> {
    TreeParser::new().parse_tree(text, converters, 0)
}

/// Resolve a single listing with the default symbols
pub fn resolve_listing<T: Element>(text: &str, converter: &Converter<T>) -> GrammarResult<ValueSet<T>> {
    TreeParser::new().resolve_listing(text, converter, 0)
}

/// Classify a single token with the default symbols
pub fn classify<T>(token: &str, converter: &Converter<T>) -> GrammarResult<Classified<T>> {
    TreeParser::new().classify(token, converter, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::{Placeholder, ResolveError};
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    #[test]
    fn test_parse_then_resolve() {
        let converters: Vec<Converter<i64>> = vec![Converter::parsing(), Converter::parsing()];
        let node = parse_tree("#0,#-1:[##,*]", &converters).unwrap();

        let spaces = [vec![10, 20, 30], vec![1, 2]];
        let mut rng = StdRng::seed_from_u64(3);
        let resolved = node.resolve_deep(&spaces, None, &mut rng).unwrap();

        assert_eq!(resolved.to_json().unwrap(), r#"{"10":[1,2],"30":[1,2]}"#);
    }

    #[test]
    fn test_parsed_tree_is_a_template() {
        let converters: Vec<Converter<i64>> = vec![Converter::parsing(), Converter::parsing()];
        let template = parse_tree("?2:[??1]", &converters).unwrap();
        let spaces = [(0..10).collect::<Vec<i64>>()];

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let resolved = template
                .clone()
                .resolve_deep(&spaces, Some(&4), &mut rng)
                .unwrap();
            let map = resolved.as_map().unwrap();
            assert_eq!(map.len(), 2);
            for leaves in map.values() {
                let leaves = leaves.as_set().unwrap();
                assert_eq!(leaves.len(), 1);
                assert!(!leaves.contains(&4));
            }
        }
    }

    #[test]
    fn test_oversized_sample_fails_to_resolve() {
        let converters: Vec<Converter<i64>> = vec![Converter::parsing()];
        let node = parse_tree("??18446744073709551615", &converters).unwrap();
        let spaces = [vec![1i64, 2, 3]];
        let result = node.resolve_deep(&spaces, Some(&1), &mut StdRng::seed_from_u64(0));
        assert_matches!(result, Err(ResolveError::SampleTooLarge { .. }));
    }

    #[test]
    fn test_free_functions() {
        let converter = Converter::<u32>::parsing();
        let set = resolve_listing("1~3,#0", &converter).unwrap();
        assert_eq!(set.fixed(), &BTreeSet::from([1, 2, 3]));
        assert!(set.contains_placeholder(&Placeholder::Index(0)));

        assert_eq!(
            classify("##", &converter),
            Ok(Classified::Placeholder(Placeholder::Size))
        );
    }
}
