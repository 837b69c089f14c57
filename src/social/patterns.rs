use once_cell::sync::Lazy;
use regex::Regex;

use super::config::{FACEBOOK_RULES, INSTAGRAM_RULES, TWITTER_RULES};

pub static FACEBOOK_USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&FACEBOOK_RULES.pattern()).unwrap());

pub static INSTAGRAM_HANDLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&INSTAGRAM_RULES.pattern()).unwrap());

pub static TWITTER_HANDLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&TWITTER_RULES.pattern()).unwrap());
