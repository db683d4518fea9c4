use anyhow::{anyhow, Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use micro_utilities::html_id::{FallbackStrategy, DEFAULT_PREFIX};
use micro_utilities::YoutubeThumbnail;

/// Looked up in the working directory as `micro_utilities.{toml,json,yaml,...}`
pub const DEFAULT_CONFIG_NAME: &str = "micro_utilities";

/// Environment variables named `MICRO_UTILITIES_<KEY>` override file values
pub const ENV_PREFIX: &str = "MICRO_UTILITIES";

/// Configuration for the command line tool
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Tracing filter directive used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Write logs to a timestamped file here instead of stderr
    pub log_dir: Option<String>,

    /// Prefix for generated html ids
    pub id_prefix: String,

    /// Fallback for `check-id`: "empty" or "generate"
    pub fallback: String,

    /// Thumbnail size for `youtube`: "hqdefault" or "maxresdefault"
    pub thumbnail: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            log_dir: None,
            id_prefix: DEFAULT_PREFIX.to_string(),
            fallback: FallbackStrategy::default().to_string(),
            thumbnail: YoutubeThumbnail::default().to_string(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration from `path`, or from the optional default
    /// file when no path is given, then applies environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn fallback_strategy(&self) -> Result<FallbackStrategy> {
        self.fallback
            .parse()
            .with_context(|| format!("Invalid fallback in configuration: {}", self.fallback))
    }

    pub fn thumbnail(&self) -> Result<YoutubeThumbnail> {
        self.thumbnail
            .parse()
            .map_err(|e| anyhow!("Invalid thumbnail in configuration: {}", e))
    }
}
