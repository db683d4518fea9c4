//! Small validators and normalizers for web-facing identifiers.
//!
//! - Email addresses ([`is_valid_email`])
//! - URL path segments, userinfo usernames and query parameter names
//! - Slugs ([`is_valid_uri_slug`], [`try_convert_to_slug`])
//! - Top-level domains against the bundled IANA list
//! - Query string building ([`build_url`])
//! - HTML element ids ([`html_id`])
//! - YouTube video ids and URLs ([`youtube`])
//!
//! Predicates take `impl Into<Option<&str>>` and answer `false` for anything
//! invalid or absent. Helpers that construct values return
//! `Result<_, UtilityError>` instead.
//!
//! ```
//! use micro_utilities::{build_url, is_valid_email, try_convert_to_slug};
//!
//! assert!(is_valid_email("firstname.lastname@example.com"));
//! assert_eq!(try_convert_to_slug("FooBarBaz").as_deref(), Some("foo-bar-baz"));
//! assert_eq!(build_url("/baz", [("foo", "bar"), ("bob", "dole")]), "/baz?foo=bar&bob=dole");
//! ```

pub mod error;
pub mod html_id;
pub mod utils;
pub mod validation;
pub mod youtube;

pub use error::UtilityError;
pub use html_id::{
    get_valid_html_id, get_valid_html_id_from, is_valid_id, try_get_as_valid_id, CheckedId,
    FallbackStrategy, UniqueToken,
};
pub use validation::{
    build_absolute_url, build_url, has_valid_top_level_domain, has_valid_top_level_domain_in_url,
    is_valid_email, is_valid_path_segment, is_valid_query_parameter_name, is_valid_uri_slug,
    is_valid_username, try_convert_to_slug, HostKind, TldRegistry,
};
pub use youtube::{
    get_youtube_iframe_url, get_youtube_thumbnail, get_youtube_thumbnail_with,
    is_valid_youtube_id, YoutubeThumbnail,
};
