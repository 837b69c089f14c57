use thiserror::Error;

/// Failure to extract a valid identifier for a platform.
///
/// Facebook and Instagram collapse every failure into one variant. Twitter
/// separates "no candidate could be found" from "the candidate is malformed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid facebook username")]
    InvalidFacebookUsername,

    #[error("invalid instagram handle")]
    InvalidInstagramHandle,

    /// Input was empty, unparseable, used a disallowed scheme or had no path.
    #[error("invalid twitter URL")]
    InvalidTwitterUrl,

    /// A candidate was found but breaks the handle rule.
    #[error("invalid twitter handle")]
    InvalidTwitterHandle,
}

/// Returned when a platform name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown social platform: {0}")]
pub struct UnknownPlatform(pub String);
