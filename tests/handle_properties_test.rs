//! Property tests for the platform validators.

use proptest::prelude::*;
use social_parse::Platform;

proptest! {
    #[test]
    fn accepted_handles_satisfy_their_rule(input in ".*") {
        for platform in Platform::ALL {
            if let Ok(handle) = platform.parse(&input) {
                prop_assert!(platform.pattern().is_match(handle.as_str()));
                prop_assert!(!handle.as_str().starts_with('@'));
                prop_assert_eq!(handle.as_str().trim(), handle.as_str());
            }
        }
    }

    #[test]
    fn facebook_bare_and_url_forms_agree(name in "[a-zA-Z0-9.\\-]{1,60}") {
        let bare = Platform::Facebook.parse(&name).unwrap();
        let url = Platform::Facebook.parse(&format!("https://facebook.com/{}", name)).unwrap();
        prop_assert_eq!(bare.as_str(), name.as_str());
        prop_assert_eq!(bare, url);
    }

    #[test]
    fn instagram_bare_and_url_forms_agree(name in "[a-zA-Z0-9_.]{1,30}") {
        let bare = Platform::Instagram.parse(&format!("@{}", name)).unwrap();
        let url = Platform::Instagram.parse(&format!("instagram.com/@{}", name)).unwrap();
        prop_assert_eq!(bare.as_str(), name.as_str());
        prop_assert_eq!(bare, url);
    }

    #[test]
    fn twitter_bare_and_url_forms_agree(name in "[A-Za-z0-9_]{4,15}") {
        let bare = Platform::Twitter.parse(&name).unwrap();
        let url = Platform::Twitter.parse(&format!("http://twitter.com/{}?ref=x", name)).unwrap();
        prop_assert_eq!(bare.as_str(), name.as_str());
        prop_assert_eq!(bare, url);
    }

    #[test]
    fn surrounding_whitespace_is_rejected(name in "[a-z]{4,15}", pad in "[ \t]{1,3}") {
        for platform in Platform::ALL {
            let leading = format!("{}{}", pad, name);
            let trailing = format!("{}{}", name, pad);
            prop_assert!(platform.parse(&leading).is_err());
            prop_assert!(platform.parse(&trailing).is_err());
        }
    }
}
