use tracing::{debug, instrument};

use super::error::ParseError;
use super::patterns::FACEBOOK_USERNAME_REGEX;
use crate::url_parser::normalize;

social_identifier! {
    /// A username on Facebook.
    ///
    /// It can be a user-defined name like `joe.smith` or a name Facebook
    /// generated for a public page, like `Joe-Smith-Magician-129875824511529`.
    FacebookUsername,
    parse_facebook_username
}

/// Parses untrusted input into a [`FacebookUsername`].
///
/// Accepts a bare username or a profile URL. Unlike the other platforms, any
/// `@` in the input is rejected outright, before the input is normalized.
/// Only the format is checked, never whether the account exists.
#[instrument(level = "trace", skip_all, fields(input_len = username.len()))]
pub fn parse_facebook_username(username: &str) -> Result<FacebookUsername, ParseError> {
    if username.contains('@') {
        debug!("Facebook username contains '@'");
        return Err(ParseError::InvalidFacebookUsername);
    }

    let candidate = normalize(username).map_err(|e| {
        debug!("Failed to normalize Facebook input: {}", e);
        ParseError::InvalidFacebookUsername
    })?;

    if !FACEBOOK_USERNAME_REGEX.is_match(&candidate) {
        debug!("Facebook candidate '{}' breaks the username rule", candidate);
        return Err(ParseError::InvalidFacebookUsername);
    }

    Ok(FacebookUsername(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_anywhere_is_rejected_before_normalizing() {
        // Would normalize to "mark" for the other platforms
        assert_eq!(parse_facebook_username("@mark"), Err(ParseError::InvalidFacebookUsername));
        assert_eq!(
            parse_facebook_username("https://facebook.com/@mark"),
            Err(ParseError::InvalidFacebookUsername)
        );
        assert_eq!(parse_facebook_username("ma@rk"), Err(ParseError::InvalidFacebookUsername));
    }

    #[test]
    fn test_url_errors_collapse_into_one_variant() {
        for input in ["ftp://facebook.com/jerry", "https://facebook.com/", "http://[::1/x"] {
            assert_eq!(parse_facebook_username(input), Err(ParseError::InvalidFacebookUsername));
        }
    }

    #[test]
    fn test_parse_via_type() {
        let username: FacebookUsername = "zuck".parse().unwrap();
        assert_eq!(username.as_str(), "zuck");
        assert_eq!(FacebookUsername::parse("https://facebook.com/zuck").unwrap(), username);
    }
}
