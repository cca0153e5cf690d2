//! Ordering over string-search results
//!
//! `str::find` reports "not found" as `None`. When several searches race for
//! the next structural symbol, a found offset always wins over a missing one,
//! and two found offsets compare numerically.

use std::cmp::Ordering;

/// Three-way comparison where `None` (not found) sorts after every offset.
pub fn compare_found(first: Option<usize>, second: Option<usize>) -> Ordering {
    match (first, second) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Smallest found offset, or `None` if nothing was found.
pub fn earliest<I>(offsets: I) -> Option<usize>
where
    I: IntoIterator<Item = Option<usize>>,
{
    offsets.into_iter().flatten().min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_beats_missing() {
        assert_eq!(compare_found(Some(10), None), Ordering::Less);
        assert_eq!(compare_found(None, Some(0)), Ordering::Greater);
        assert_eq!(compare_found(None, None), Ordering::Equal);
    }

    #[test]
    fn test_found_offsets_compare_numerically() {
        assert_eq!(compare_found(Some(2), Some(5)), Ordering::Less);
        assert_eq!(compare_found(Some(5), Some(2)), Ordering::Greater);
        assert_eq!(compare_found(Some(3), Some(3)), Ordering::Equal);
    }

    #[test]
    fn test_earliest() {
        assert_eq!(earliest([None, Some(4), Some(2)]), Some(2));
        assert_eq!(earliest([None, None]), None);
        assert_eq!(earliest([Some(7)]), Some(7));
        assert_eq!(earliest(Vec::<Option<usize>>::new()), None);
    }
}
