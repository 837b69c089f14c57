use std::borrow::Cow;

use tracing::{debug, trace};
use url::Url;

use super::NormalizeError;

/// Scheme assumed for URLs typed without one, e.g. `twitter.com/jerry`
const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Parses a URL candidate, retrying with `https://` when it has no scheme
///
/// Only a missing scheme triggers the retry. Any other syntax error is
/// returned as is.
///
/// # Returns
/// * `(Url, Cow<str>)` - The parsed URL and the exact text that was parsed,
///   which carries the scheme prefix when one had to be added
pub fn parse_with_default_scheme(candidate: &str) -> Result<(Url, Cow<'_, str>), NormalizeError> {
    check_control_characters(candidate)?;

    match Url::parse(candidate) {
        Ok(parsed) => Ok((parsed, Cow::Borrowed(candidate))),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            debug!("No scheme in '{}', assuming {}", candidate, DEFAULT_SCHEME_PREFIX);
            let text = format!("{DEFAULT_SCHEME_PREFIX}{candidate}");
            let parsed = Url::parse(&text)?;
            Ok((parsed, Cow::Owned(text)))
        }
        Err(e) => {
            debug!("Failed to parse URL '{}': {}", candidate, e);
            Err(e.into())
        }
    }
}

/// Rejects URLs containing ASCII control characters
///
/// The URL parser silently drops tabs and newlines, which would let
/// `twitter.com/jer\try` through as `jerry`.
pub fn check_control_characters(candidate: &str) -> Result<(), NormalizeError> {
    match candidate.chars().find(|c| c.is_ascii_control()) {
        Some(c) => {
            debug!("URL contains control character {:?}", c);
            Err(NormalizeError::InvalidSyntax(format!(
                "control character {:?} in URL",
                c
            )))
        }
        None => Ok(()),
    }
}

/// Accepts only `http` and `https` URLs
pub fn validate_scheme(url: &Url) -> Result<(), NormalizeError> {
    match url.scheme() {
        "http" | "https" => {
            trace!("Accepted URL scheme: {}", url.scheme());
            Ok(())
        }
        other => {
            debug!("Rejecting URL with scheme '{}'", other);
            Err(NormalizeError::UnsupportedScheme(other.to_string()))
        }
    }
}
