//! Placeholder variants and their evaluation
//!
//! A placeholder is a deferred value. It only becomes a concrete set of values
//! when resolved against a value space. Resolution never mutates the space;
//! the injected random source is its only side channel.

use super::element::Element;
use super::error::{render_space, ResolveError, ResolveResult};
use crate::log_debug;
use rand::seq::index;
use rand::Rng;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SAMPLE_ID: AtomicU64 = AtomicU64::new(0);

fn next_sample_id() -> u64 {
    NEXT_SAMPLE_ID.fetch_add(1, Ordering::Relaxed)
}

/// A deferred value.
///
/// Equality is structural, except for `Sample` and `Random` which carry an
/// `id` unique within the process. Two sample placeholders written the same
/// way are therefore never the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder<T> {
    /// Element at a position of the space; negative positions count from the end
    Index(i64),
    /// Cardinality of the space
    Size,
    /// Fixed value injected where a placeholder is expected
    Constant(T),
    /// Every element of the space
    All,
    /// Inclusive integer range between two endpoints
    Range {
        first: RangeEndpoint<T>,
        last: RangeEndpoint<T>,
    },
    /// `count` distinct elements drawn without replacement
    Sample {
        id: u64,
        count: usize,
        exclude_original: bool,
    },
    /// A single drawn element
    Random { id: u64, exclude_original: bool },
}

/// One side of a range placeholder
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RangeEndpoint<T> {
    Literal(i64),
    Placeholder(Box<Placeholder<T>>),
}

impl<T> From<i64> for RangeEndpoint<T> {
    fn from(value: i64) -> Self {
        Self::Literal(value)
    }
}

impl<T> From<Placeholder<T>> for RangeEndpoint<T> {
    fn from(placeholder: Placeholder<T>) -> Self {
        Self::Placeholder(Box::new(placeholder))
    }
}

impl<T> Placeholder<T> {
    pub fn index(index: i64) -> Self {
        Self::Index(index)
    }

    pub fn size() -> Self {
        Self::Size
    }

    pub fn constant(value: T) -> Self {
        Self::Constant(value)
    }

    pub fn all() -> Self {
        Self::All
    }

    pub fn range(first: impl Into<RangeEndpoint<T>>, last: impl Into<RangeEndpoint<T>>) -> Self {
        Self::Range {
            first: first.into(),
            last: last.into(),
        }
    }

    /// New sample placeholder with a fresh identity
    pub fn sample(count: usize, exclude_original: bool) -> Self {
        Self::Sample {
            id: next_sample_id(),
            count,
            exclude_original,
        }
    }

    /// New random placeholder with a fresh identity
    pub fn random(exclude_original: bool) -> Self {
        Self::Random {
            id: next_sample_id(),
            exclude_original,
        }
    }

    /// Whether this placeholder always resolves to exactly one value
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Self::Index(_) | Self::Size | Self::Constant(_) | Self::Random { .. }
        )
    }

    /// Whether resolution consumes randomness
    pub fn is_random(&self) -> bool {
        match self {
            Self::Sample { .. } | Self::Random { .. } => true,
            Self::Range { first, last } => first.is_random() || last.is_random(),
            _ => false,
        }
    }
}

impl<T> RangeEndpoint<T> {
    fn is_random(&self) -> bool {
        match self {
            Self::Literal(_) => false,
            Self::Placeholder(placeholder) => placeholder.is_random(),
        }
    }
}

impl<T: Element> Placeholder<T> {
    /// Resolve against `space`.
    ///
    /// `original` is only consulted by sample and random placeholders that
    /// exclude the original value.
    pub fn resolve<R>(
        &self,
        space: &[T],
        original: Option<&T>,
        rng: &mut R,
    ) -> ResolveResult<BTreeSet<T>>
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::Index(index) => {
                let position = if *index < 0 {
                    i64::try_from(space.len()).ok().map(|len| len + index)
                } else {
                    Some(*index)
                };
                position
                    .and_then(|position| usize::try_from(position).ok())
                    .and_then(|position| space.get(position))
                    .map(|value| BTreeSet::from([value.clone()]))
                    .ok_or_else(|| ResolveError::IndexOutOfRange {
                        placeholder: self.to_string(),
                        space: render_space(space),
                        index: *index,
                        len: space.len(),
                    })
            }
            Self::Size => {
                let size = i64::try_from(space.len()).unwrap_or(i64::MAX);
                T::from_integer(size)
                    .map(|value| BTreeSet::from([value]))
                    .ok_or_else(|| self.not_representable(space, size))
            }
            Self::Constant(value) => Ok(BTreeSet::from([value.clone()])),
            Self::All => Ok(space.iter().cloned().collect()),
            Self::Range { first, last } => {
                let first = self.resolve_endpoint(first, space, original, rng)?;
                let last = self.resolve_endpoint(last, space, original, rng)?;
                (first..=last)
                    .map(|n| T::from_integer(n).ok_or_else(|| self.not_representable(space, n)))
                    .collect()
            }
            Self::Sample {
                count,
                exclude_original,
                ..
            } => self.draw(*count, *exclude_original, space, original, rng),
            Self::Random {
                exclude_original, ..
            } => self.draw(1, *exclude_original, space, original, rng),
        }
    }

    fn resolve_endpoint<R>(
        &self,
        endpoint: &RangeEndpoint<T>,
        space: &[T],
        original: Option<&T>,
        rng: &mut R,
    ) -> ResolveResult<i64>
    where
        R: Rng + ?Sized,
    {
        let placeholder = match endpoint {
            RangeEndpoint::Literal(value) => return Ok(*value),
            RangeEndpoint::Placeholder(placeholder) => placeholder,
        };

        let values = placeholder.resolve(space, original, rng)?;
        let mut values = values.into_iter();
        match (values.next(), values.next()) {
            (Some(value), None) => value.to_integer().ok_or_else(|| ResolveError::NotInteger {
                placeholder: self.to_string(),
                space: render_space(space),
                value: format!("{:?}", value),
            }),
            (first, second) => Err(ResolveError::EndpointNotLeaf {
                placeholder: self.to_string(),
                space: render_space(space),
                count: first.iter().count() + second.iter().count() + values.count(),
            }),
        }
    }

    /// Draw `count` distinct values from `space`; duplicates in the space
    /// count once.
    ///
    /// With `exclude_original`, `count + 1` values are drawn and the
    /// original value is removed from the draw. When the original was not
    /// drawn, the last drawn element is dropped instead; which element goes is
    /// unspecified and callers must not rely on it.
    fn draw<R>(
        &self,
        count: usize,
        exclude_original: bool,
        space: &[T],
        original: Option<&T>,
        rng: &mut R,
    ) -> ResolveResult<BTreeSet<T>>
    where
        R: Rng + ?Sized,
    {
        let (requested, original) = if exclude_original {
            let original = original.ok_or_else(|| ResolveError::OriginalRequired {
                placeholder: self.to_string(),
                space: render_space(space),
            })?;
            (count.checked_add(1), Some(original))
        } else {
            (Some(count), None)
        };

        // Draws are over distinct values of the space
        let distinct: Vec<&T> = space.iter().collect::<BTreeSet<&T>>().into_iter().collect();

        let requested = match requested {
            Some(requested) if requested <= distinct.len() => requested,
            requested => {
                return Err(ResolveError::SampleTooLarge {
                    placeholder: self.to_string(),
                    space: render_space(space),
                    requested: requested.unwrap_or(usize::MAX),
                    available: distinct.len(),
                });
            }
        };

        let drawn: Vec<&T> = index::sample(rng, distinct.len(), requested)
            .into_iter()
            .map(|position| distinct[position])
            .collect();

        log_debug!("Drew sample",
            "placeholder" => self,
            "requested" => requested,
            "available" => distinct.len()
        );

        let mut result: BTreeSet<T> = drawn.iter().map(|value| (*value).clone()).collect();
        if let Some(original) = original {
            if !result.remove(original) {
                if let Some(last) = drawn.last() {
                    result.remove(*last);
                }
            }
        }
        Ok(result)
    }

    fn not_representable(&self, space: &[T], value: i64) -> ResolveError {
        ResolveError::NotRepresentable {
            placeholder: self.to_string(),
            space: render_space(space),
            value,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Placeholder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "INDEX({})", index),
            Self::Size => write!(f, "SIZE"),
            Self::Constant(value) => write!(f, "CONST({:?})", value),
            Self::All => write!(f, "ALL"),
            Self::Range { first, last } => write!(f, "RANGE({}, {})", first, last),
            Self::Sample {
                count,
                exclude_original: false,
                ..
            } => write!(f, "SAMPLE({})", count),
            Self::Sample {
                count,
                exclude_original: true,
                ..
            } => write!(f, "SAMPLE({}, excluding original)", count),
            Self::Random {
                exclude_original: false,
                ..
            } => write!(f, "RANDOM"),
            Self::Random {
                exclude_original: true,
                ..
            } => write!(f, "RANDOM(excluding original)"),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for RangeEndpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{}", value),
            Self::Placeholder(placeholder) => write!(f, "{}", placeholder),
        }
    }
}
