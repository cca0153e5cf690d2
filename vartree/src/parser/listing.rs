//! Listing resolution: one level's comma separated values and ranges

use super::classify::{classify_token, Classified};
use super::converter::Converter;
use super::error::{GrammarError, GrammarResult};
use crate::config::GrammarConfig;
use crate::containers::ValueSet;
use crate::variables::{Element, Placeholder, RangeEndpoint};

pub(crate) fn resolve_listing_at<T: Element>(
    config: &GrammarConfig,
    text: &str,
    converter: &Converter<T>,
    position: usize,
) -> GrammarResult<ValueSet<T>> {
    let mut set = ValueSet::new();
    if text.is_empty() {
        return Ok(set);
    }

    let mut offset = position;
    for segment in text.split(config.listing_delimiter.as_str()) {
        match segment.split_once(config.range_delimiter.as_str()) {
            Some((first, last)) => {
                let last_position = offset + first.len() + config.range_delimiter.len();
                let first = classify_token(config, first, converter, offset)?;
                let last = classify_token(config, last, converter, last_position)?;

                if first.is_placeholder() || last.is_placeholder() {
                    let first = range_endpoint(first, offset, segment)?;
                    let last = range_endpoint(last, offset, segment)?;
                    set.insert_placeholder(Placeholder::range(first, last));
                } else {
                    for value in literal_range(&first, &last, offset, segment)? {
                        set.insert_value(value);
                    }
                }
            }
            None => match classify_token(config, segment, converter, offset)? {
                Classified::Value(value) => {
                    set.insert_value(value);
                }
                Classified::Placeholder(placeholder) => {
                    set.insert_placeholder(placeholder);
                }
            },
        }

        offset += segment.len() + config.listing_delimiter.len();
    }

    Ok(set)
}

fn range_endpoint<T: Element>(
    classified: Classified<T>,
    position: usize,
    segment: &str,
) -> GrammarResult<RangeEndpoint<T>> {
    match classified {
        Classified::Placeholder(placeholder) => Ok(RangeEndpoint::from(placeholder)),
        Classified::Value(value) => value
            .to_integer()
            .map(RangeEndpoint::Literal)
            .ok_or_else(|| GrammarError::invalid_range(position, segment)),
    }
}

/// Inclusive expansion of two literal endpoints
fn literal_range<T: Element>(
    first: &Classified<T>,
    last: &Classified<T>,
    position: usize,
    segment: &str,
) -> GrammarResult<Vec<T>> {
    let integer = |classified: &Classified<T>| match classified {
        Classified::Value(value) => value.to_integer(),
        Classified::Placeholder(_) => None,
    };
    let (first, last) = match (integer(first), integer(last)) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(GrammarError::invalid_range(position, segment)),
    };

    (first..=last)
        .map(|value| T::from_integer(value).ok_or_else(|| GrammarError::invalid_range(position, segment)))
        .collect()
}
