use tracing::{debug, instrument};

use super::error::ParseError;
use super::patterns::TWITTER_HANDLE_REGEX;
use crate::url_parser::normalize;

social_identifier! {
    /// A user's handle on Twitter/X, without the URL or a leading `@`.
    TwitterHandle,
    parse_twitter_handle
}

/// Parses untrusted input into a [`TwitterHandle`].
///
/// Failing to find any candidate (empty input, bad scheme, no path) is
/// [`ParseError::InvalidTwitterUrl`]. A candidate that breaks the handle rule
/// is [`ParseError::InvalidTwitterHandle`]. Does not verify the handle exists.
#[instrument(level = "trace", skip_all, fields(input_len = twitter_url.len()))]
pub fn parse_twitter_handle(twitter_url: &str) -> Result<TwitterHandle, ParseError> {
    let candidate = normalize(twitter_url).map_err(|e| {
        debug!("Failed to normalize Twitter input: {}", e);
        ParseError::InvalidTwitterUrl
    })?;

    if candidate.is_empty() {
        debug!("No Twitter handle candidate in input");
        return Err(ParseError::InvalidTwitterUrl);
    }

    if !TWITTER_HANDLE_REGEX.is_match(&candidate) {
        debug!("Twitter candidate '{}' breaks the handle rule", candidate);
        return Err(ParseError::InvalidTwitterHandle);
    }

    Ok(TwitterHandle(candidate))
}
