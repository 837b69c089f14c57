//! Extracts and validates Facebook, Instagram and Twitter/X handles from
//! untrusted input.
//!
//! Input can be a bare handle, an `@`-prefixed handle or a profile URL. Only
//! the syntax of the handle is checked against each platform's public rules;
//! nothing here ever touches the network.
//!
//! ```
//! use social_parse::{parse_facebook_username, parse_instagram_handle, parse_twitter_handle};
//!
//! let fb = parse_facebook_username("https://facebook.com/zuck").unwrap();
//! assert_eq!(fb.as_str(), "zuck");
//!
//! for raw in ["jack", "@jack", "twitter.com/@jack"] {
//!     assert_eq!(parse_twitter_handle(raw).unwrap().as_str(), "jack");
//! }
//!
//! let insta = parse_instagram_handle("instagram.com/@chelseahandler").unwrap();
//! assert_eq!(insta.to_string(), "chelseahandler");
//! ```
//!
//! When the platform is only known at runtime, go through [`Platform`]:
//!
//! ```
//! use social_parse::Platform;
//!
//! let platform: Platform = "x".parse().unwrap();
//! let handle = platform.parse("https://twitter.com/jerry?ref=somejunk").unwrap();
//! assert_eq!(handle.profile_url(), "https://twitter.com/jerry");
//! ```

pub mod social;
pub mod url_parser;
pub mod utils;

pub use social::{
    parse_facebook_username, parse_instagram_handle, parse_twitter_handle, FacebookUsername,
    InstagramHandle, ParseError, Platform, SocialHandle, TwitterHandle, UnknownPlatform,
};
pub use url_parser::{normalize, NormalizeError};
