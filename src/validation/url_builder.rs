use url::Url;

use super::patterns::ENCODED_BRACKETS_REGEX;

const LITERAL_BRACKETS: &str = "[]";

/// Builds a URL from a base path and query parameters, URL-encoding every
/// key and value
///
/// Pairs are emitted in iteration order and duplicate keys are kept, so
/// array-style keys such as `foo[]` can repeat. The `[]` in such keys stays
/// literal. Maps work too and are emitted in their own key order, so pass a
/// `Vec` of pairs when insertion order matters.
///
/// ```
/// use micro_utilities::build_url;
///
/// let url = build_url("/baz", [("foo[]", "bar"), ("foo[]", "baz"), ("bob", "dole")]);
/// assert_eq!(url, "/baz?foo[]=bar&foo[]=baz&bob=dole");
/// ```
pub fn build_url<I, K, V>(base_url: &str, query: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = String::from(base_url);
    let mut first = true;

    for (key, value) in query {
        url.push(if first { '?' } else { '&' });
        first = false;
        url.push_str(&encode_key(key.as_ref()));
        url.push('=');
        url.push_str(&urlencoding::encode(value.as_ref()));
    }

    url
}

fn encode_key(key: &str) -> String {
    let encoded = urlencoding::encode(key);
    ENCODED_BRACKETS_REGEX.replace_all(&encoded, LITERAL_BRACKETS).into_owned()
}

/// Serializes an absolute URL, dropping any explicit port unless
/// `include_port` is set
pub fn build_absolute_url(url: &Url, include_port: bool) -> String {
    if include_port || url.port().is_none() {
        return url.as_str().to_owned();
    }

    let mut without_port = url.clone();
    // Only fails for URLs that cannot carry a port, which have none to drop
    if without_port.set_port(None).is_err() {
        return url.as_str().to_owned();
    }
    without_port.into()
}
