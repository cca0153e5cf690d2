//! Per-level value converters
//!
//! A converter turns one raw token into a domain value. It is supplied by the
//! caller and is opaque to the parser; its name only appears in diagnostics.

use std::fmt;
use std::str::FromStr;

type ConvertFn<T> = dyn Fn(&str) -> Result<T, String>;

/// Named conversion from a token to a value
pub struct Converter<T> {
    name: String,
    func: Box<ConvertFn<T>>,
}

impl<T: 'static> Converter<T> {
    pub fn new<F, E>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str) -> Result<T, E> + 'static,
        E: fmt::Display + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(move |token| func(token).map_err(|error| error.to_string())),
        }
    }
}

impl<T> Converter<T>
where
    T: FromStr + 'static,
    T::Err: fmt::Display + 'static,
{
    /// Converter based on `FromStr`, ignoring surrounding whitespace
    pub fn parsing() -> Self {
        Self::new(std::any::type_name::<T>(), |token: &str| {
            token.trim().parse::<T>()
        })
    }
}

impl<T> Converter<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn convert(&self, token: &str) -> Result<T, String> {
        (self.func)(token)
    }
}

impl<T> fmt::Debug for Converter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
