use crate::core::error::InfoError;
use regex::Regex;
use std::fmt;
use tracing::{debug, error};

/// Video id pattern accepted inside watch and short links. The capture is
/// over the allowed character set only, not a fixed length: format
/// validation, never existence validation.
const LINK_PATTERN: &str =
    r"^(http|https)://(www\.youtube\.com/watch\?v=|youtu\.be/)(?P<id>[a-zA-Z0-9\-_]+)(&.*)?$";

/// A canonical video identifier, derived once per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the video id from a link.
///
/// An 11 character input is returned unchanged: video ids are 11 characters
/// long, and the fast path performs no character-set validation. Anything
/// else must match one of the two known URL shapes
/// (`www.youtube.com/watch?v=` or `youtu.be/`), with trailing `&...` query
/// parameters ignored.
pub fn extract_video_id(link: &str) -> Result<VideoId, InfoError> {
    if link.len() == 11 {
        debug!("found an 11 character string, could be a video id: {link}");
        return Ok(VideoId(link.to_string()));
    }

    let pattern = Regex::new(LINK_PATTERN).expect("link pattern is valid");
    match pattern.captures(link).and_then(|c| c.name("id")) {
        Some(id) => {
            debug!("video id extracted from link: {}", id.as_str());
            Ok(VideoId(id.as_str().to_string()))
        }
        None => {
            error!("'{link}' is not an extended or contracted youtube link or an 11 character video id");
            Err(InfoError::InvalidLink(link.to_string()))
        }
    }
}
