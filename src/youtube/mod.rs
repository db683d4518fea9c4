//! YouTube video id checks and thumbnail / embed URL construction.
//!
//! URLs are only built from ids that pass [`is_valid_youtube_id`], so a
//! hostile id cannot smuggle extra path or query content into them.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{Result, UtilityError};
use crate::validation::patterns::YOUTUBE_ID_REGEX;
use crate::validation::url_builder::build_absolute_url;

const YOUTUBE_ID_LENGTH: usize = 11;
const THUMBNAIL_HOST: &str = "https://i.ytimg.com/vi";
const EMBED_HOST: &str = "https://www.youtube.com/embed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YoutubeThumbnail {
    MaxResDefault,
    #[default]
    HqDefault,
}

impl YoutubeThumbnail {
    pub fn as_str(&self) -> &'static str {
        match self {
            YoutubeThumbnail::MaxResDefault => "maxresdefault",
            YoutubeThumbnail::HqDefault => "hqdefault",
        }
    }
}

impl fmt::Display for YoutubeThumbnail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YoutubeThumbnail {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "maxresdefault" => Ok(YoutubeThumbnail::MaxResDefault),
            "hqdefault" => Ok(YoutubeThumbnail::HqDefault),
            other => Err(format!("unknown thumbnail size: {}", other)),
        }
    }
}

/// True iff `id` is exactly 11 characters of `[A-Za-z0-9_-]`
pub fn is_valid_youtube_id<'a>(id: impl Into<Option<&'a str>>) -> bool {
    match id.into() {
        Some(id) => id.len() == YOUTUBE_ID_LENGTH && YOUTUBE_ID_REGEX.is_match(id),
        None => false,
    }
}

/// The default (high quality) thumbnail URL for a video
pub fn get_youtube_thumbnail(id: &str) -> Result<String> {
    get_youtube_thumbnail_with(id, YoutubeThumbnail::default())
}

pub fn get_youtube_thumbnail_with(id: &str, thumbnail: YoutubeThumbnail) -> Result<String> {
    ensure_valid_id(id)?;
    let url = Url::parse(&format!("{}/{}/{}.jpg", THUMBNAIL_HOST, id, thumbnail))?;
    Ok(build_absolute_url(&url, false))
}

/// The iframe `src` URL for embedding a video
pub fn get_youtube_iframe_url(id: &str) -> Result<String> {
    ensure_valid_id(id)?;
    let url = Url::parse(&format!("{}/{}", EMBED_HOST, id))?;
    Ok(build_absolute_url(&url, false))
}

fn ensure_valid_id(id: &str) -> Result<()> {
    if is_valid_youtube_id(id) {
        Ok(())
    } else {
        Err(UtilityError::BadYoutubeId(id.to_string()))
    }
}
