use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Decoded form of a `get_video_info` response body: one entry per
/// `key=value` segment, with each value opportunistically parsed as JSON.
/// Values that fail to parse are kept as `Value::String`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RawInfo {
    fields: HashMap<String, Value>,
}

impl RawInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: Value) {
        self.fields.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The endpoint's `status` field, when it decoded as a string.
    pub fn status(&self) -> Option<&str> {
        self.fields.get("status").and_then(Value::as_str)
    }
}

/// The two fields of interest projected out of `player_response`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(rename = "streamingData")]
    pub streaming_data: Value,
    #[serde(rename = "videoDetails")]
    pub video_details: Value,
}
