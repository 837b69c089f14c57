use tracing::{debug, instrument};

use super::error::ParseError;
use super::patterns::INSTAGRAM_HANDLE_REGEX;
use crate::url_parser::normalize;

social_identifier! {
    /// A user's handle on Instagram, without the URL or a leading `@`.
    InstagramHandle,
    parse_instagram_handle
}

/// Parses untrusted input into an [`InstagramHandle`].
///
/// A leading `@` is allowed and stripped. Does not verify the handle exists.
#[instrument(level = "trace", skip_all, fields(input_len = s.len()))]
pub fn parse_instagram_handle(s: &str) -> Result<InstagramHandle, ParseError> {
    let candidate = normalize(s).map_err(|e| {
        debug!("Failed to normalize Instagram input: {}", e);
        ParseError::InvalidInstagramHandle
    })?;

    if !INSTAGRAM_HANDLE_REGEX.is_match(&candidate) {
        debug!("Instagram candidate '{}' breaks the handle rule", candidate);
        return Err(ParseError::InvalidInstagramHandle);
    }

    Ok(InstagramHandle(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_prefixed_forms() {
        assert_eq!(parse_instagram_handle("@jack").unwrap().as_str(), "jack");
        assert_eq!(
            parse_instagram_handle("instagram.com/@chelseahandler").unwrap().as_str(),
            "chelseahandler"
        );
    }

    #[test]
    fn test_empty_candidates_fail_the_length_rule() {
        assert_eq!(parse_instagram_handle(""), Err(ParseError::InvalidInstagramHandle));
        assert_eq!(parse_instagram_handle("@"), Err(ParseError::InvalidInstagramHandle));
        assert_eq!(
            parse_instagram_handle("https://instagram.com/@"),
            Err(ParseError::InvalidInstagramHandle)
        );
    }
}
