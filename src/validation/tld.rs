//! Registry of IANA top-level domains.
//!
//! The list is compiled into the crate from `resources/tlds.txt`
//! (https://data.iana.org/TLD/tlds-alpha-by-domain.txt) and parsed once on
//! first use. After that the set is read-only.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::debug;

const TLD_LIST: &str = include_str!("../../resources/tlds.txt");

static GLOBAL_REGISTRY: Lazy<TldRegistry> = Lazy::new(|| {
    let registry = TldRegistry::from_list(TLD_LIST);
    debug!("Loaded {} top-level domains", registry.len());
    registry
});

/// An immutable set of uppercase top-level domain labels
#[derive(Debug, Clone, Default)]
pub struct TldRegistry {
    labels: HashSet<String>,
}

impl TldRegistry {
    /// The process-wide registry built from the bundled IANA list
    pub fn global() -> &'static TldRegistry {
        &GLOBAL_REGISTRY
    }

    /// Builds a registry from newline-delimited text. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn from_list(list: &str) -> Self {
        let labels = list
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_ascii_uppercase)
            .collect();

        TldRegistry { labels }
    }

    /// Whether `label` is a registered TLD. The lookup is case-sensitive
    /// against the uppercase entries.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
