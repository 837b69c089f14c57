use std::fmt;
use std::str::FromStr;

use regex::Regex;

use super::config::{HandleRules, FACEBOOK_RULES, INSTAGRAM_RULES, TWITTER_RULES};
use super::error::{ParseError, UnknownPlatform};
use super::patterns::{FACEBOOK_USERNAME_REGEX, INSTAGRAM_HANDLE_REGEX, TWITTER_HANDLE_REGEX};
use super::{
    parse_facebook_username, parse_instagram_handle, parse_twitter_handle, FacebookUsername,
    InstagramHandle, TwitterHandle,
};

/// A supported social network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Facebook,
    Instagram,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Facebook, Platform::Instagram, Platform::Twitter];

    /// Lowercase identifier, e.g. `"twitter"`
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
        }
    }

    pub fn host(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook.com",
            Platform::Instagram => "instagram.com",
            Platform::Twitter => "twitter.com",
        }
    }

    pub fn rules(&self) -> &'static HandleRules {
        match self {
            Platform::Facebook => &FACEBOOK_RULES,
            Platform::Instagram => &INSTAGRAM_RULES,
            Platform::Twitter => &TWITTER_RULES,
        }
    }

    /// Compiled form of [`Platform::rules`]
    pub fn pattern(&self) -> &'static Regex {
        match self {
            Platform::Facebook => &FACEBOOK_USERNAME_REGEX,
            Platform::Instagram => &INSTAGRAM_HANDLE_REGEX,
            Platform::Twitter => &TWITTER_HANDLE_REGEX,
        }
    }

    /// Runs the validator for this platform.
    pub fn parse(&self, raw: &str) -> Result<SocialHandle, ParseError> {
        match self {
            Platform::Facebook => parse_facebook_username(raw).map(SocialHandle::Facebook),
            Platform::Instagram => parse_instagram_handle(raw).map(SocialHandle::Instagram),
            Platform::Twitter => parse_twitter_handle(raw).map(SocialHandle::Twitter),
        }
    }

    /// Callers pass a handle that has already been through [`Platform::parse`].
    pub(crate) fn profile_url(&self, handle: &str) -> String {
        format!("https://{}/{}", self.host(), handle)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "facebook" => Ok(Platform::Facebook),
            "instagram" => Ok(Platform::Instagram),
            "twitter" | "x" => Ok(Platform::Twitter),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}

/// A validated identifier on any supported platform
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SocialHandle {
    Facebook(FacebookUsername),
    Instagram(InstagramHandle),
    Twitter(TwitterHandle),
}

impl SocialHandle {
    pub fn platform(&self) -> Platform {
        match self {
            SocialHandle::Facebook(_) => Platform::Facebook,
            SocialHandle::Instagram(_) => Platform::Instagram,
            SocialHandle::Twitter(_) => Platform::Twitter,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SocialHandle::Facebook(username) => username.as_str(),
            SocialHandle::Instagram(handle) => handle.as_str(),
            SocialHandle::Twitter(handle) => handle.as_str(),
        }
    }

    /// Canonical `https://<host>/<handle>` URL for this handle
    pub fn profile_url(&self) -> String {
        self.platform().profile_url(self.as_str())
    }
}

impl fmt::Display for SocialHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
