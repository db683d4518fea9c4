use tracing::trace;

use super::patterns::{MULTIPLE_DASHES_REGEX, SLUG_REPLACE_REGEX, UPPERCASE_REGEX};
use super::url_validator::{is_blank, is_valid_uri_slug};

/// Converts a string into a slug
///
/// camelCase and PascalCase boundaries become dashes, every character
/// outside `[a-z0-9-]` becomes a dash, and dash runs collapse to one.
/// Returns `None` when the result is not a valid slug, e.g. for `"-"`.
///
/// ```
/// use micro_utilities::try_convert_to_slug;
///
/// assert_eq!(try_convert_to_slug("fooBarBaz").as_deref(), Some("foo-bar-baz"));
/// assert_eq!(try_convert_to_slug("Foo Bar").as_deref(), Some("foo-bar"));
/// assert_eq!(try_convert_to_slug("-"), None);
/// ```
pub fn try_convert_to_slug<'a>(input: impl Into<Option<&'a str>>) -> Option<String> {
    let input = input.into().filter(|value| !is_blank(value))?;

    let mut chars = input.chars();
    let first = chars.next()?;
    let rest = chars.as_str();

    // Case boundaries
    let mut converting: String = first.to_lowercase().collect();
    converting.push_str(&UPPERCASE_REGEX.replace_all(rest, |caps: &regex::Captures| {
        format!("-{}", caps[0].to_ascii_lowercase())
    }));

    let converting = SLUG_REPLACE_REGEX.replace_all(&converting, "-");
    let converting = MULTIPLE_DASHES_REGEX.replace_all(&converting, "-");

    if is_valid_uri_slug(&*converting) {
        Some(converting.into_owned())
    } else {
        trace!("Could not form a slug from {:?}, got {:?}", input, converting);
        None
    }
}
