pub mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use micro_utilities::html_id::{get_valid_html_id, get_valid_html_id_from, try_get_as_valid_id};
use micro_utilities::{
    build_url, get_youtube_iframe_url, get_youtube_thumbnail_with, has_valid_top_level_domain,
    is_valid_email, is_valid_path_segment, is_valid_query_parameter_name, is_valid_username,
    try_convert_to_slug, FallbackStrategy, UtilityError, YoutubeThumbnail,
};

use self::config::CliConfig;

/// Validate and normalize web identifiers
#[derive(Parser, Debug)]
#[command(name = "micro_utilities", version, about)]
pub struct Cli {
    /// Configuration file (defaults to ./micro_utilities.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the result as a JSON object
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an email address
    Email { address: String },
    /// Convert text to a slug
    Slug { text: String },
    /// Validate a URL path segment
    Segment {
        segment: String,
        #[arg(long)]
        empty_ok: bool,
    },
    /// Validate a URL userinfo username
    Username {
        name: String,
        #[arg(long)]
        empty_ok: bool,
    },
    /// Validate a query parameter name
    Param { name: String },
    /// Check the top-level domain of a host
    Tld {
        host: String,
        /// Reject hosts that are not DNS names
        #[arg(long)]
        strict: bool,
    },
    /// Build a URL with an encoded query string
    Url {
        base: String,
        /// Query parameter as KEY=VALUE, repeatable
        #[arg(short = 'p', long = "param", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },
    /// Generate an html id
    Id {
        #[arg(long)]
        prefix: Option<String>,
        #[arg(long, default_value = "")]
        suffix: String,
        /// Use this number instead of a random token
        #[arg(long)]
        number: Option<u64>,
    },
    /// Check an html id, falling back when it is invalid
    CheckId {
        id: String,
        #[arg(long)]
        fallback: Option<FallbackStrategy>,
    },
    /// Build a YouTube thumbnail or embed URL
    Youtube {
        id: String,
        #[arg(long)]
        iframe: bool,
        #[arg(long)]
        thumbnail: Option<YoutubeThumbnail>,
    },
}

fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {}", raw))
}

/// Result of one command
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub command: &'static str,
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Outcome {
    fn verdict(command: &'static str, input: &str, valid: bool) -> Self {
        Outcome {
            command,
            input: input.to_string(),
            valid,
            output: None,
            error: None,
        }
    }

    fn produced(command: &'static str, input: &str, result: Result<String, UtilityError>) -> Self {
        let mut outcome = Outcome::verdict(command, input, result.is_ok());
        match result {
            Ok(output) => outcome.output = Some(output),
            Err(e) => outcome.error = Some(e.to_string()),
        }
        outcome
    }

    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            return Ok(serde_json::to_string(self)?);
        }
        Ok(match (&self.output, &self.error) {
            (_, Some(error)) => format!("error: {}", error),
            (Some(output), None) if self.valid => output.clone(),
            (Some(output), None) => format!("invalid (fallback: {:?})", output),
            (None, None) => if self.valid { "valid" } else { "invalid" }.to_string(),
        })
    }
}

pub fn run(command: &Command, config: &CliConfig) -> Result<Outcome> {
    debug!("Running {:?}", command);

    let outcome = match command {
        Command::Email { address } => Outcome::verdict("email", address, is_valid_email(address.as_str())),
        Command::Slug { text } => {
            let slug = try_convert_to_slug(text.as_str());
            let mut outcome = Outcome::verdict("slug", text, slug.is_some());
            outcome.output = slug;
            outcome
        }
        Command::Segment { segment, empty_ok } => Outcome::verdict(
            "segment",
            segment,
            is_valid_path_segment(segment.as_str(), *empty_ok),
        ),
        Command::Username { name, empty_ok } => {
            Outcome::verdict("username", name, is_valid_username(name.as_str(), *empty_ok))
        }
        Command::Param { name } => {
            Outcome::verdict("param", name, is_valid_query_parameter_name(name.as_str()))
        }
        Command::Tld { host, strict } => {
            Outcome::verdict("tld", host, has_valid_top_level_domain(host, !*strict))
        }
        Command::Url { base, params } => {
            let mut outcome = Outcome::verdict("url", base, true);
            outcome.output = Some(build_url(base, params.iter().map(|(k, v)| (k, v))));
            outcome
        }
        Command::Id { prefix, suffix, number } => {
            let prefix = prefix.as_deref().unwrap_or(&config.id_prefix);
            let result = match number {
                Some(number) => get_valid_html_id_from(*number, prefix, suffix),
                None => get_valid_html_id(prefix, suffix),
            };
            Outcome::produced("id", prefix, result)
        }
        Command::CheckId { id, fallback } => {
            let fallback = match fallback {
                Some(fallback) => *fallback,
                None => config.fallback_strategy()?,
            };
            let checked = try_get_as_valid_id(id.as_str(), fallback);
            let mut outcome = Outcome::verdict("check-id", id, checked.already_valid);
            outcome.output = Some(checked.id);
            outcome
        }
        Command::Youtube { id, iframe, thumbnail } => {
            let result = if *iframe {
                get_youtube_iframe_url(id)
            } else {
                let thumbnail = match thumbnail {
                    Some(thumbnail) => *thumbnail,
                    None => config.thumbnail()?,
                };
                get_youtube_thumbnail_with(id, thumbnail)
            };
            Outcome::produced("youtube", id, result)
        }
    };

    Ok(outcome)
}
