use tracing::trace;
use url::Url;

use super::host::{classify_host, HostKind};
use super::patterns::{
    PATH_SEGMENT_REGEX, QUERY_PARAMETER_NAME_REGEX, SLUG_REGEX, USERNAME_REGEX,
};
use super::tld::TldRegistry;

const SINGLE_DOT: &str = ".";
const DOUBLE_DOT: &str = "..";

/// Default for `okay_if_not_dns_host`: IP literals have no TLD to check
pub const DEFAULT_OKAY_IF_NOT_DNS_HOST: bool = true;

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks a proposed URL path segment
///
/// `None` is never valid, even when `empty_is_okay` is set. `.` and `..`
/// are always accepted. Anything else must survive URL-encoding unchanged
/// and start with a letter.
pub fn is_valid_path_segment<'a>(segment: impl Into<Option<&'a str>>, empty_is_okay: bool) -> bool {
    let Some(segment) = segment.into() else {
        return false;
    };
    if segment.is_empty() {
        return empty_is_okay;
    }
    if segment == SINGLE_DOT || segment == DOUBLE_DOT {
        return true;
    }
    if urlencoding::encode(segment) != segment {
        trace!("Path segment changes under encoding: {}", segment);
        return false;
    }
    PATH_SEGMENT_REGEX.is_match(segment)
}

/// Checks a URL userinfo username (RFC 3986 unreserved and sub-delims, plus `:`)
pub fn is_valid_username<'a>(username: impl Into<Option<&'a str>>, empty_is_okay: bool) -> bool {
    match username.into() {
        None | Some("") => empty_is_okay,
        Some(username) => USERNAME_REGEX.is_match(username),
    }
}

pub fn is_valid_query_parameter_name<'a>(name: impl Into<Option<&'a str>>) -> bool {
    match name.into() {
        Some(name) if !is_blank(name) => QUERY_PARAMETER_NAME_REGEX.is_match(name),
        _ => false,
    }
}

/// Is the proposed slug valid
pub fn is_valid_uri_slug<'a>(slug: impl Into<Option<&'a str>>) -> bool {
    match slug.into() {
        Some(slug) if !is_blank(slug) => SLUG_REGEX.is_match(slug),
        _ => false,
    }
}

/// Checks the top-level domain of `host` against the IANA registry
///
/// Hosts that are not DNS names (IP literals, empty or malformed hosts)
/// have no TLD; for those the answer is `okay_if_not_dns_host`.
pub fn has_valid_top_level_domain(host: &str, okay_if_not_dns_host: bool) -> bool {
    if host.is_empty() || !classify_host(host).is_dns() {
        return okay_if_not_dns_host;
    }
    top_level_domain_is_registered(host)
}

/// Same check as [`has_valid_top_level_domain`] on the host of a parsed URL
pub fn has_valid_top_level_domain_in_url(url: &Url, okay_if_not_dns_host: bool) -> bool {
    match url.host() {
        Some(host) if HostKind::from(&host).is_dns() => {
            top_level_domain_is_registered(url.host_str().unwrap_or_default())
        }
        _ => okay_if_not_dns_host,
    }
}

fn top_level_domain_is_registered(host: &str) -> bool {
    let tld = host.rsplit('.').next().unwrap_or_default().to_ascii_uppercase();
    if is_blank(&tld) {
        trace!("Host has an empty top-level domain: {}", host);
        return false;
    }
    let registered = TldRegistry::global().contains(&tld);
    if !registered {
        trace!("Unregistered top-level domain {} in host {}", tld, host);
    }
    registered
}
