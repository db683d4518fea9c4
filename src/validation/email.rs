//! Email address validation.
//!
//! Limitations: only ASCII addresses are supported. Quoted local parts,
//! comments and display names are all rejected.

use tracing::{instrument, trace};
use url::Url;

use super::host::{dns_safe_host, HostKind};
use super::patterns::EMAIL_USERNAME_REGEX;
use super::url_validator::{
    has_valid_top_level_domain_in_url, is_blank, DEFAULT_OKAY_IF_NOT_DNS_HOST,
};

/// Validates an email address
///
/// The address is parsed as the authority of a synthetic `https://` URL.
/// The checks run in order and stop at the first failure:
/// 1. Not blank, with `@` after at least one character and no `:`
/// 2. Parses as a URL
/// 3. Username is lowercase alphanumerics, `_`, `-`, `+` and single inner dots
/// 4. Host is a DNS name with at least one dot, or an IP literal
/// 5. A DNS host ends in a registered top-level domain
/// 6. `username@host` rebuilt from the parsed URL equals the input exactly
///
/// ```
/// use micro_utilities::is_valid_email;
///
/// assert!(is_valid_email("email@example.com"));
/// assert!(!is_valid_email("email..email@example.com"));
/// assert!(!is_valid_email("email@example.web"));
/// ```
#[instrument(level = "trace", skip_all)]
pub fn is_valid_email<'a>(email: impl Into<Option<&'a str>>) -> bool {
    let Some(email) = email.into().filter(|email| !is_blank(email)) else {
        return false;
    };
    if !matches!(email.find('@'), Some(index) if index >= 1) {
        trace!("Missing username or '@' in {:?}", email);
        return false;
    }
    if email.contains(':') {
        trace!("Colon in {:?}", email);
        return false;
    }

    let url = match Url::parse(&format!("https://{}", email)) {
        Ok(url) => url,
        Err(e) => {
            trace!("Failed to parse {:?} as a URL authority: {}", email, e);
            return false;
        }
    };

    let username = url.username();
    if !EMAIL_USERNAME_REGEX.is_match(username) {
        trace!("Invalid email username {:?}", username);
        return false;
    }

    let Some(host) = url.host() else {
        return false;
    };
    let kind = HostKind::from(&host);
    if !matches!(kind, HostKind::Dns | HostKind::Ipv4 | HostKind::Ipv6) {
        trace!("Unsupported host type for {:?}", email);
        return false;
    }
    if kind.is_dns() && !matches!(url.host_str().and_then(|h| h.find('.')), Some(index) if index >= 1) {
        trace!("Single-label host in {:?}", email);
        return false;
    }
    if !has_valid_top_level_domain_in_url(&url, DEFAULT_OKAY_IF_NOT_DNS_HOST) {
        return false;
    }

    // The parse may have normalized or dropped characters
    let rebuilt = format!("{}@{}", username, dns_safe_host(&host));
    if rebuilt != email {
        trace!("Email {:?} does not survive parsing, got {:?}", email, rebuilt);
        return false;
    }
    true
}
