use std::net::{Ipv4Addr, Ipv6Addr};
use url::Host;

use super::patterns::DNS_LABEL_REGEX;

const MAX_HOST_LENGTH: usize = 255;

/// The kind of host found in a URL authority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    Dns,
    Ipv4,
    Ipv6,
    /// Anything that is neither an IP literal nor a letter-digit-hyphen DNS name
    Basic,
}

impl HostKind {
    pub fn is_dns(self) -> bool {
        self == HostKind::Dns
    }
}

/// Classifies a raw host string
///
/// IPv6 literals are accepted with or without brackets. A single trailing
/// dot is tolerated on DNS names, every other label must be non-empty.
pub fn classify_host(host: &str) -> HostKind {
    if host.is_empty() {
        return HostKind::Basic;
    }

    if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        return match inner.parse::<Ipv6Addr>() {
            Ok(_) => HostKind::Ipv6,
            Err(_) => HostKind::Basic,
        };
    }

    if host.parse::<Ipv6Addr>().is_ok() {
        return HostKind::Ipv6;
    }

    if host.parse::<Ipv4Addr>().is_ok() {
        return HostKind::Ipv4;
    }

    if is_dns_name(host) {
        HostKind::Dns
    } else {
        HostKind::Basic
    }
}

fn is_dns_name(host: &str) -> bool {
    if host.len() > MAX_HOST_LENGTH {
        return false;
    }
    let host = host.strip_suffix('.').unwrap_or(host);
    !host.is_empty() && host.split('.').all(|label| DNS_LABEL_REGEX.is_match(label))
}

impl From<&Host<&str>> for HostKind {
    fn from(host: &Host<&str>) -> Self {
        match host {
            Host::Domain(domain) => classify_host(domain),
            Host::Ipv4(_) => HostKind::Ipv4,
            Host::Ipv6(_) => HostKind::Ipv6,
        }
    }
}

/// Host text suitable for DNS resolution: IPv6 addresses lose their brackets
pub fn dns_safe_host(host: &Host<&str>) -> String {
    match host {
        Host::Domain(domain) => (*domain).to_owned(),
        Host::Ipv4(addr) => addr.to_string(),
        Host::Ipv6(addr) => addr.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_dns() {
        assert_eq!(classify_host("example.com"), HostKind::Dns);
        assert_eq!(classify_host("localhost"), HostKind::Dns);
        assert_eq!(classify_host("example.com."), HostKind::Dns);
        assert_eq!(classify_host("sub.my-site.co.jp"), HostKind::Dns);
    }

    #[test]
    fn test_classify_ip_literals() {
        assert_eq!(classify_host("192.168.1.1"), HostKind::Ipv4);
        assert_eq!(classify_host("::1"), HostKind::Ipv6);
        assert_eq!(classify_host("[2001:db8::1]"), HostKind::Ipv6);
        assert_eq!(classify_host("[not-an-ip]"), HostKind::Basic);
    }

    #[test]
    fn test_classify_basic() {
        assert_eq!(classify_host(""), HostKind::Basic);
        assert_eq!(classify_host("-example.com"), HostKind::Basic);
        assert_eq!(classify_host("example..com"), HostKind::Basic);
        assert_eq!(classify_host("exa mple.com"), HostKind::Basic);
        assert_eq!(classify_host("."), HostKind::Basic);
    }

    #[test]
    fn test_from_url_host() {
        let url = url::Url::parse("https://[::1]/").unwrap();
        let host = url.host().unwrap();
        assert_eq!(HostKind::from(&host), HostKind::Ipv6);
        assert_eq!(dns_safe_host(&host), "::1");

        let url = url::Url::parse("https://Example.COM/").unwrap();
        let host = url.host().unwrap();
        assert_eq!(HostKind::from(&host), HostKind::Dns);
        assert_eq!(dns_safe_host(&host), "example.com");
    }
}
