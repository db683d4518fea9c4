//! Generation and validation of HTML `id` attribute values.

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, UtilityError};
use crate::validation::patterns::{HTML_ID_PREFIX_REGEX, HTML_ID_REGEX};
use crate::validation::url_validator::is_blank;

pub const DEFAULT_PREFIX: &str = "id";

/// Source of the unique middle part of a generated id
///
/// Integers are written in base 10. A UUID is written as 32 lowercase hex
/// digits without dashes.
pub trait UniqueToken {
    fn token(&self) -> String;
}

impl UniqueToken for Uuid {
    fn token(&self) -> String {
        self.simple().to_string()
    }
}

macro_rules! impl_unique_token_for_integer {
    ($($ty:ty),*) => {
        $(impl UniqueToken for $ty {
            fn token(&self) -> String {
                self.to_string()
            }
        })*
    };
}

impl_unique_token_for_integer!(i32, u32, i64, u64);

/// What [`try_get_as_valid_id`] hands back when the proposed id is invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackStrategy {
    #[default]
    EmptyOnInvalid,
    GenerateOnInvalid,
}

impl fmt::Display for FallbackStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackStrategy::EmptyOnInvalid => write!(f, "empty"),
            FallbackStrategy::GenerateOnInvalid => write!(f, "generate"),
        }
    }
}

impl FromStr for FallbackStrategy {
    type Err = UtilityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "empty" | "EmptyOnInvalid" => Ok(FallbackStrategy::EmptyOnInvalid),
            "generate" | "GenerateOnInvalid" => Ok(FallbackStrategy::GenerateOnInvalid),
            other => Err(UtilityError::BadFormat(other.to_string())),
        }
    }
}

/// Outcome of [`try_get_as_valid_id`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedId {
    /// Whether the proposed id was usable as given
    pub already_valid: bool,
    /// The proposed id, or the fallback
    pub id: String,
}

/// Generates a valid html id from a fresh random UUID
///
/// ```
/// use micro_utilities::html_id::{get_valid_html_id, is_valid_id, DEFAULT_PREFIX};
///
/// let id = get_valid_html_id(DEFAULT_PREFIX, "").unwrap();
/// assert!(id.starts_with("id"));
/// assert!(is_valid_id(id.as_str()));
/// ```
pub fn get_valid_html_id(prefix: &str, suffix: &str) -> Result<String> {
    get_valid_html_id_from(Uuid::new_v4(), prefix, suffix)
}

/// Generates a valid html id as `prefix + token + suffix`
///
/// The prefix is checked first and fails with [`UtilityError::BadPrefix`].
/// The suffix is trimmed, and the assembled id fails with
/// [`UtilityError::BadFormat`] if it does not end in a letter or digit.
pub fn get_valid_html_id_from<T: UniqueToken>(source: T, prefix: &str, suffix: &str) -> Result<String> {
    if !is_valid_id_prefix(prefix) {
        return Err(UtilityError::BadPrefix(prefix.to_string()));
    }
    let id = format!("{}{}{}", prefix, source.token(), suffix.trim());
    if !is_valid_id(id.as_str()) {
        return Err(UtilityError::BadFormat(id));
    }
    debug!("Generated html id {}", id);
    Ok(id)
}

pub fn is_valid_id<'a>(id: impl Into<Option<&'a str>>) -> bool {
    match id.into() {
        Some(id) if !is_blank(id) => HTML_ID_REGEX.is_match(id),
        _ => false,
    }
}

/// Ensures the proposed id is usable, falling back per `fallback` when it is not
///
/// Never fails: an empty fallback yields `""` and a generated fallback
/// yields a fresh id with the default prefix.
pub fn try_get_as_valid_id<'a>(id: impl Into<Option<&'a str>>, fallback: FallbackStrategy) -> CheckedId {
    match id.into() {
        Some(id) if is_valid_id(id) => CheckedId {
            already_valid: true,
            id: id.to_string(),
        },
        _ => {
            let id = match fallback {
                FallbackStrategy::EmptyOnInvalid => String::new(),
                FallbackStrategy::GenerateOnInvalid => generate_default_id(),
            };
            CheckedId {
                already_valid: false,
                id,
            }
        }
    }
}

// The default prefix and a hex token always form a valid id
fn generate_default_id() -> String {
    let id = format!("{}{}", DEFAULT_PREFIX, Uuid::new_v4().token());
    debug_assert!(is_valid_id(id.as_str()));
    id
}

fn is_valid_id_prefix(prefix: &str) -> bool {
    prefix == DEFAULT_PREFIX || (!is_blank(prefix) && HTML_ID_PREFIX_REGEX.is_match(prefix))
}
