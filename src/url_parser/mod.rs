//! Reduces raw user input to a single candidate handle.
//!
//! Input may be a bare token (`jerry`), an `@`-prefixed token (`@jerry`) or a
//! profile URL with or without a scheme (`twitter.com/jerry?ref=x`). URLs are
//! parsed with the `url` crate and only the first non-empty path segment is
//! kept.

mod error;
mod parser;
mod url_processor;
mod url_validator;

pub use error::NormalizeError;
pub use parser::normalize;
pub use url_processor::{first_path_segment, raw_path};
pub use url_validator::{check_control_characters, parse_with_default_scheme, validate_scheme};
