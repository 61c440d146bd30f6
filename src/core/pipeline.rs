use crate::core::decoder::{decode, filter};
use crate::core::dump::DumpOptions;
use crate::core::error::InfoError;
use crate::core::extractor::{extract_video_id, VideoId};
use crate::core::metadata::VideoInfo;
use async_trait::async_trait;

/// A provider of raw video info bodies, keyed by video id. The HTTP endpoint
/// implements this; tests substitute canned bodies.
#[async_trait]
pub trait InfoSource: Send + Sync {
    async fn fetch(&self, id: &VideoId) -> Result<Vec<u8>, InfoError>;
}

/// Runs the full pipeline for one link:
/// link -> video id -> fetch -> decode -> filter.
///
/// Strictly linear, no retries, no state across invocations.
pub async fn fetch_video_info(
    source: &dyn InfoSource,
    link: &str,
    options: &DumpOptions,
) -> Result<VideoInfo, InfoError> {
    let id = extract_video_id(link)?;
    let raw_body = source.fetch(&id).await?;
    let raw = decode(&raw_body, options)?;
    filter(&raw, options)
}
