//! Token classification
//!
//! Markers are checked in a fixed priority: index, random, all, and only then
//! the level converter.

use super::converter::Converter;
use super::error::{GrammarError, GrammarResult};
use crate::config::GrammarConfig;
use crate::variables::Placeholder;
use std::fmt;

/// Outcome of classifying one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified<T> {
    Value(T),
    Placeholder(Placeholder<T>),
}

impl<T> Classified<T> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

impl<T: fmt::Debug> fmt::Display for Classified<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{:?}", value),
            Self::Placeholder(placeholder) => write!(f, "{}", placeholder),
        }
    }
}

pub(crate) fn classify_token<T>(
    config: &GrammarConfig,
    token: &str,
    converter: &Converter<T>,
    position: usize,
) -> GrammarResult<Classified<T>> {
    if let Some(rest) = token.strip_prefix(config.index_marker.as_str()) {
        if rest.starts_with(config.index_marker.as_str()) {
            return Ok(Classified::Placeholder(Placeholder::size()));
        }
        return rest
            .parse::<i64>()
            .map(|index| Classified::Placeholder(Placeholder::index(index)))
            .map_err(|error| {
                GrammarError::invalid_token(position, token, "index placeholder", &error.to_string())
            });
    }

    if let Some(rest) = token.strip_prefix(config.random_marker.as_str()) {
        let (rest, exclude_original) = match rest.strip_prefix(config.random_marker.as_str()) {
            Some(rest) => (rest, true),
            None => (rest, false),
        };
        if rest.is_empty() {
            return Ok(Classified::Placeholder(Placeholder::random(exclude_original)));
        }
        return rest
            .parse::<usize>()
            .map(|count| Classified::Placeholder(Placeholder::sample(count, exclude_original)))
            .map_err(|error| {
                GrammarError::invalid_token(position, token, "sample placeholder", &error.to_string())
            });
    }

    if token == config.all_marker {
        return Ok(Classified::Placeholder(Placeholder::all()));
    }

    converter
        .convert(token)
        .map(Classified::Value)
        .map_err(|reason| GrammarError::invalid_token(position, token, converter.name(), &reason))
}
