use crate::core::dump::DumpOptions;
use crate::core::error::InfoError;
use crate::core::metadata::{RawInfo, VideoInfo};
use crate::utils::strip_non_ascii;
use serde_json::Value;
use tracing::error;

/// Decodes a raw `get_video_info` body into a [`RawInfo`].
///
/// The body is an ampersand-delimited, percent-encoded `key=value` string,
/// not top-level JSON. Non-ASCII bytes are dropped before unescaping, then
/// each value is parsed as JSON where possible and kept as a raw string
/// otherwise. Segments without a `=` are skipped.
pub fn decode(raw_body: &[u8], options: &DumpOptions) -> Result<RawInfo, InfoError> {
    let ascii = strip_non_ascii(raw_body);
    let unescaped = urlencoding::decode_binary(ascii.as_bytes());
    let text = String::from_utf8_lossy(&unescaped);

    let mut raw = RawInfo::new();
    for segment in text.split('&') {
        if let Some((key, value)) = segment.split_once('=') {
            let parsed = serde_json::from_str::<Value>(value)
                .unwrap_or_else(|_| Value::String(value.to_string()));
            raw.insert(key.to_string(), parsed);
        }
    }

    match raw.status() {
        Some("fail") => {
            error!("request got 'fail' status");
            return Err(InfoError::RequestFail);
        }
        Some(_) => {}
        None => return Err(InfoError::MissingField("status")),
    }

    options.emit("PROCESS", &raw)?;
    Ok(raw)
}

/// Projects a [`RawInfo`] down to the two fields of interest under
/// `player_response`.
///
/// `player_response` must have decoded as a nested JSON structure; a raw
/// string value fails the lookup the same way an absent key does.
pub fn filter(raw: &RawInfo, options: &DumpOptions) -> Result<VideoInfo, InfoError> {
    let player_response = raw
        .get("player_response")
        .ok_or(InfoError::MissingField("player_response"))?;

    let streaming_data = player_response
        .get("streamingData")
        .cloned()
        .ok_or(InfoError::MissingField("player_response.streamingData"))?;
    let video_details = player_response
        .get("videoDetails")
        .cloned()
        .ok_or(InfoError::MissingField("player_response.videoDetails"))?;

    let info = VideoInfo {
        streaming_data,
        video_details,
    };

    options.emit("FILTERING", &info)?;
    Ok(info)
}

/// Decode and filter composed: raw body bytes in, [`VideoInfo`] out.
pub fn decode_and_filter(raw_body: &[u8], options: &DumpOptions) -> Result<VideoInfo, InfoError> {
    let raw = decode(raw_body, options)?;
    filter(&raw, options)
}
