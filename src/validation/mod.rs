//! Validation and normalization of URL components, slugs and email addresses.
//!
//! Every predicate here returns `false` for invalid or absent input and never
//! fails loudly. Inputs are `impl Into<Option<&str>>`, so both `"foo"` and
//! `None` can be passed.

pub mod email;
pub mod host;
pub mod patterns;
pub mod slug;
pub mod tld;
pub mod url_builder;
pub mod url_validator;

#[cfg(test)]
mod tests;

pub use email::is_valid_email;
pub use host::{classify_host, HostKind};
pub use slug::try_convert_to_slug;
pub use tld::TldRegistry;
pub use url_builder::{build_absolute_url, build_url};
pub use url_validator::{
    has_valid_top_level_domain, has_valid_top_level_domain_in_url, is_valid_path_segment,
    is_valid_query_parameter_name, is_valid_uri_slug, is_valid_username,
    DEFAULT_OKAY_IF_NOT_DNS_HOST,
};
