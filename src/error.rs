//! Errors raised by the constructor-style helpers.
//!
//! Predicates never return these. An error here means the caller passed
//! something it should have validated first.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilityError {
    /// The html id prefix is neither the default nor a valid id start.
    #[error("The given html id prefix is invalid: \"{0}\"")]
    BadPrefix(String),

    /// The assembled html id, or a fallback strategy name, is invalid.
    #[error("The given html id is invalid: \"{0}\"")]
    BadFormat(String),

    /// The YouTube video id is not 11 characters of `[A-Za-z0-9_-]`.
    #[error("The given youtube id is invalid: \"{0}\"")]
    BadYoutubeId(String),

    #[error("URL parsing error: {0}")]
    UrlParse(String),
}

impl From<url::ParseError> for UtilityError {
    fn from(err: url::ParseError) -> Self {
        UtilityError::UrlParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UtilityError>;
