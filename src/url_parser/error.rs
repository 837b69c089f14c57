use thiserror::Error;

/// Reasons raw input could not be reduced to a candidate token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("failed to parse URL: {0}")]
    MalformedUrl(#[from] url::ParseError),

    #[error("invalid URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid social media URL - bad path: {path:?}")]
    MissingPath { path: String },

    /// Syntax the URL parser would have repaired silently, such as a bad `%` escape
    #[error("invalid URL syntax: {0}")]
    InvalidSyntax(String),
}
