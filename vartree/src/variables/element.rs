//! Values that can live in a tree

use std::fmt;
use std::hash::Hash;

/// A concrete value held by value-sets and used as keyed-tree keys.
///
/// The integer conversions give ranges (`a~b`) and the size placeholder
/// (`##`) their meaning. A type without an integer form returns `None` and
/// simply cannot take part in ranges.
pub trait Element: Clone + Ord + Hash + fmt::Debug {
    /// Integer form of the value, used as a range endpoint
    fn to_integer(&self) -> Option<i64>;

    /// Value for an integer produced by a range or by a size
    fn from_integer(value: i64) -> Option<Self>;
}

macro_rules! impl_element_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                fn to_integer(&self) -> Option<i64> {
                    i64::try_from(*self).ok()
                }

                fn from_integer(value: i64) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_element_for_integers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Strings take part in ranges only when they hold a decimal integer.
impl Element for String {
    fn to_integer(&self) -> Option<i64> {
        self.trim().parse().ok()
    }

    fn from_integer(value: i64) -> Option<Self> {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_round_trip_limits() {
        assert_eq!(u8::from_integer(255), Some(255u8));
        assert_eq!(u8::from_integer(256), None);
        assert_eq!(u8::from_integer(-1), None);
        assert_eq!(u64::MAX.to_integer(), None);
        assert_eq!((-4i32).to_integer(), Some(-4));
    }

    #[test]
    fn test_string_integer_form() {
        assert_eq!("42".to_string().to_integer(), Some(42));
        assert_eq!("abc".to_string().to_integer(), None);
        assert_eq!(String::from_integer(7), Some("7".to_string()));
    }
}
