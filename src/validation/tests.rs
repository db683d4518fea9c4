use crate::validation::{
    build_url, has_valid_top_level_domain, has_valid_top_level_domain_in_url,
    is_valid_email, is_valid_path_segment, is_valid_query_parameter_name,
    is_valid_uri_slug, is_valid_username, try_convert_to_slug,
    DEFAULT_OKAY_IF_NOT_DNS_HOST,
};
use url::Url;

// Path segments
#[test]
fn test_path_segment() {
    assert!(is_valid_path_segment("foo", false));
    assert!(is_valid_path_segment("foo-bar_9", false));
    assert!(!is_valid_path_segment(None, false));
    assert!(!is_valid_path_segment(None, true));
    assert!(is_valid_path_segment("", true));
    assert!(!is_valid_path_segment("", false));
    assert!(!is_valid_path_segment("@foo", false));
    assert!(!is_valid_path_segment(" ", false));
    assert!(!is_valid_path_segment("Foo Bar", false));
    assert!(!is_valid_path_segment("9lives", false));
}

#[test]
fn test_navigation_segments_always_pass() {
    assert!(is_valid_path_segment(".", false));
    assert!(is_valid_path_segment("..", false));
    assert!(!is_valid_path_segment("...", false));
}

// Slugs
#[test]
fn test_uri_slug() {
    assert!(is_valid_uri_slug("foo"));
    assert!(is_valid_uri_slug("foo-bar"));
    assert!(is_valid_uri_slug("2024-recap"));
    assert!(!is_valid_uri_slug(""));
    assert!(!is_valid_uri_slug(None));
    assert!(!is_valid_uri_slug("Foo"));
    assert!(!is_valid_uri_slug("Foo Bar"));
    assert!(!is_valid_uri_slug("foo--bar"));
    assert!(!is_valid_uri_slug("-foo"));
}

#[test]
fn test_convert_to_slug() {
    assert_eq!(try_convert_to_slug("foo-bar").as_deref(), Some("foo-bar"));
    assert_eq!(try_convert_to_slug("Foo Bar").as_deref(), Some("foo-bar"));
    assert_eq!(try_convert_to_slug("-"), None);
    assert_eq!(try_convert_to_slug("fooBarBaz").as_deref(), Some("foo-bar-baz"));
    assert_eq!(try_convert_to_slug("FooBarBaz").as_deref(), Some("foo-bar-baz"));
}

#[test]
fn test_converted_slug_is_stable() {
    for input in ["Hello, World", "someCamelCase", "already-a-slug", "Mixed_case Words 42"] {
        let slug = try_convert_to_slug(input).expect("Failed to convert");
        assert!(is_valid_uri_slug(slug.as_str()));
        assert_eq!(try_convert_to_slug(slug.as_str()), Some(slug.clone()));
    }
}

// Usernames
#[test]
fn test_username_empty_handling() {
    assert!(!is_valid_username(None, false), "None should be false by default");
    assert!(is_valid_username(None, true), "None should be true if empty is okay");
    assert!(!is_valid_username("", false), "Empty should be false by default");
    assert!(is_valid_username("", true), "Empty should be true if empty is okay");
}

#[test]
fn test_username_userinfo_characters() {
    for valid in ["user", "user123", "user.name", "user_name", "user-name", "user~name"] {
        assert!(is_valid_username(valid, false), "{} should be valid", valid);
    }
    assert!(is_valid_username("user:password", false), "Colon is valid in userinfo");
    assert!(is_valid_username("!$&'()*+,;=", false), "Sub-delims are valid");

    assert!(!is_valid_username("user name", false), "Spaces are invalid");
    assert!(!is_valid_username("user@host", false), "At-sign is the delimiter");
    assert!(!is_valid_username("user#fragment", false), "Hash is invalid");
    assert!(!is_valid_username("user/path", false), "Slash is invalid");
    assert!(!is_valid_username("user?query", false), "Question mark is invalid");
    assert!(!is_valid_username("user[bracket]", false), "Brackets are invalid");
}

// Query parameter names
#[test]
fn test_query_parameter_name() {
    for valid in ["foo", "foo_bar", "foo.bar", "foo-bar", "FOO123", "_foo"] {
        assert!(is_valid_query_parameter_name(valid), "{} should be valid", valid);
    }
    assert!(!is_valid_query_parameter_name(None));
    for invalid in ["", " ", "foo bar", "foo@bar", "foo=bar", "foo?bar", "foo&bar", "foo!"] {
        assert!(!is_valid_query_parameter_name(invalid), "{:?} should be invalid", invalid);
    }
}

// Top-level domains
#[test]
fn test_top_level_domain() {
    assert!(has_valid_top_level_domain("example.com", DEFAULT_OKAY_IF_NOT_DNS_HOST));
    assert!(has_valid_top_level_domain("example.museum", DEFAULT_OKAY_IF_NOT_DNS_HOST));
    assert!(has_valid_top_level_domain("EXAMPLE.Org", DEFAULT_OKAY_IF_NOT_DNS_HOST));
    assert!(!has_valid_top_level_domain("example.web", DEFAULT_OKAY_IF_NOT_DNS_HOST));
    assert!(!has_valid_top_level_domain("example.com.", DEFAULT_OKAY_IF_NOT_DNS_HOST));
}

#[test]
fn test_top_level_domain_for_non_dns_hosts() {
    assert!(has_valid_top_level_domain("192.168.1.1", true));
    assert!(!has_valid_top_level_domain("192.168.1.1", false));
    assert!(has_valid_top_level_domain("[::1]", true));
    assert!(has_valid_top_level_domain("", true));
    assert!(!has_valid_top_level_domain("", false));
    assert!(has_valid_top_level_domain("-bad-.web", true));
}

#[test]
fn test_top_level_domain_in_url() {
    let url = Url::parse("https://example.com/path").unwrap();
    assert!(has_valid_top_level_domain_in_url(&url, true));
    let url = Url::parse("https://example.web").unwrap();
    assert!(!has_valid_top_level_domain_in_url(&url, true));
    let url = Url::parse("https://10.0.0.1/").unwrap();
    assert!(!has_valid_top_level_domain_in_url(&url, false));
}

// URL building
#[test]
fn test_build_url_pairs() {
    let url = build_url("/baz", [("foo", "bar"), ("bob", "dole")]);
    assert_eq!(url, "/baz?foo=bar&bob=dole");
}

#[test]
fn test_build_url_array_keys() {
    let query = vec![
        ("foo[]".to_string(), "bar".to_string()),
        ("foo[]".to_string(), "baz".to_string()),
        ("bob".to_string(), "dole".to_string()),
    ];
    assert_eq!(build_url("/baz", query), "/baz?foo[]=bar&foo[]=baz&bob=dole");
}

// Email
#[test]
fn test_email_valid_standard() {
    let valid = [
        "email@example.com",
        "firstname.lastname@example.com",
        "email@subdomain.example.com",
        "firstname+lastname@example.com",
        "email@123.123.123.123",
        "1234567890@example.com",
        "_______@example.com",
        "email@example.name",
        "email@example.museum",
        "email@example.co.jp",
        "firstname-lastname@example.com",
    ];
    for email in valid {
        assert!(is_valid_email(email), "{} should be valid", email);
    }
}

#[test]
fn test_email_invalid_strange() {
    assert!(!is_valid_email("”(),:;<>[\\]@example.com"));
    assert!(!is_valid_email("just”not”right@example.com"));
    assert!(!is_valid_email("this\\ is\"really\"not\\allowed@example.com"));
}

#[test]
fn test_email_invalid_standard() {
    let invalid = [
        "plainaddress",
        "#@%^%#$@#$@#.com",
        "@example.com",
        "Joe Smith <email@example.com>",
        "email.example.com",
        "email@example@example.com",
        ".email@example.com",
        "email.@example.com",
        "email..email@example.com",
        "email@example.com (Joe Smith)",
        "email@example",
        "email@-example.com",
        "email@example.web",
        "email@111.222.333.44444",
        "email@example..com",
        "Abc..123@example.com",
        "あいうえお@example.com",
    ];
    for email in invalid {
        assert!(!is_valid_email(email), "{} should be invalid", email);
    }
}

#[test]
fn test_email_blank() {
    assert!(!is_valid_email(None));
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("   "));
}
