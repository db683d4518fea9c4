use once_cell::sync::Lazy;
use regex::Regex;

/// A path segment: a letter followed by letters, digits, dashes or underscores
pub static PATH_SEGMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][-a-zA-Z0-9_]*$").unwrap()
});

/// Lowercase alphanumeric groups joined by single dashes
pub static SLUG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap()
});

/// Anything a slug may not contain
pub static SLUG_REPLACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-z0-9\-]").unwrap()
});

pub static UPPERCASE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Z]").unwrap()
});

pub static MULTIPLE_DASHES_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"-{2,}").unwrap()
});

/// RFC 3986 userinfo: unreserved, sub-delims and ':'
pub static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9\-._~!$&'()*+,;=:]+$").unwrap()
});

pub static QUERY_PARAMETER_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+$").unwrap()
});

/// Local part of an email address. Lowercase only, no leading, trailing or doubled dots.
pub static EMAIL_USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9_](\.?[\-+a-z0-9_])*[a-z0-9_]$").unwrap()
});

/// An encoded `[]` pair, which array-style query keys keep literal
pub static ENCODED_BRACKETS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)%5b%5d").unwrap()
});

/// One DNS label in letter-digit-hyphen form
pub static DNS_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?$").unwrap()
});

pub static HTML_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9_\-]*[a-zA-Z0-9]$").unwrap()
});

pub static HTML_ID_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9_\-]*$").unwrap()
});

pub static YOUTUBE_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_\-]{11}$").unwrap()
});
