//! Public handle-format rules for each supported platform.

/// Character class and inclusive length range a handle must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleRules {
    /// Body of a regex character class, e.g. `A-Za-z0-9_`
    pub charset: &'static str,

    /// Minimum number of characters
    pub min_len: usize,

    /// Maximum number of characters
    pub max_len: usize,
}

impl HandleRules {
    /// Renders the anchored pattern for these rules
    pub fn pattern(&self) -> String {
        format!("^[{}]{{{},{}}}$", self.charset, self.min_len, self.max_len)
    }
}

/// User-defined names like `joe.smith` and generated page names like
/// `Joe-Smith-Magician-129875824511529`
pub const FACEBOOK_RULES: HandleRules = HandleRules {
    charset: r"a-zA-Z0-9\.\-",
    min_len: 1,
    max_len: 60,
};

pub const INSTAGRAM_RULES: HandleRules = HandleRules {
    charset: r"a-zA-Z0-9_\.",
    min_len: 1,
    max_len: 30,
};

pub const TWITTER_RULES: HandleRules = HandleRules {
    charset: "A-Za-z0-9_",
    min_len: 4,
    max_len: 15,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_rendering() {
        assert_eq!(TWITTER_RULES.pattern(), "^[A-Za-z0-9_]{4,15}$");
        assert_eq!(FACEBOOK_RULES.pattern(), r"^[a-zA-Z0-9\.\-]{1,60}$");
        assert_eq!(INSTAGRAM_RULES.pattern(), r"^[a-zA-Z0-9_\.]{1,30}$");
    }
}
