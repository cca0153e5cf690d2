//! Placeholders and the values they resolve to

mod element;
mod error;
mod placeholder;

pub use element::Element;
pub use error::{ResolveError, ResolveResult};
pub(crate) use error::render_space;
pub use placeholder::{Placeholder, RangeEndpoint};
