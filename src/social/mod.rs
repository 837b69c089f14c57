//! Platform handle validators
//!
//! Each validator runs untrusted input through [`crate::url_parser::normalize`]
//! and then applies the platform's own pre/post-conditions and format rule.
//! None of them check whether the account actually exists.

/// Declares a validated identifier newtype.
///
/// The inner string is private to the declaring module, so the only way to
/// obtain a value is through `$parse`. `FromStr`, `TryFrom<String>` and serde
/// deserialization all route through it.
macro_rules! social_identifier {
    ($(#[$meta:meta])* $name:ident, $parse:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parses untrusted input into this identifier.
            pub fn parse(raw: &str) -> Result<Self, $crate::social::ParseError> {
                $parse(raw)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::social::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::social::ParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                $parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

pub mod config;
mod error;
mod facebook;
mod instagram;
mod patterns;
mod platform;
mod twitter;

pub use config::{HandleRules, FACEBOOK_RULES, INSTAGRAM_RULES, TWITTER_RULES};
pub use error::{ParseError, UnknownPlatform};
pub use facebook::{parse_facebook_username, FacebookUsername};
pub use instagram::{parse_instagram_handle, InstagramHandle};
pub use platform::{Platform, SocialHandle};
pub use twitter::{parse_twitter_handle, TwitterHandle};
