use crate::config::Config;
use crate::core::{InfoError, InfoSource, VideoId};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// The `get_video_info` HTTP collaborator.
pub struct YouTubeSource {
    client: reqwest::Client,
    endpoint: String,
}

impl YouTubeSource {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            endpoint: config.endpoint.clone(),
        }
    }
}

#[async_trait]
impl InfoSource for YouTubeSource {
    async fn fetch(&self, id: &VideoId) -> Result<Vec<u8>, InfoError> {
        // The endpoint takes the id as a bare query parameter; the `?&` is
        // the wire shape it has always been queried with.
        let url = format!("{}?&video_id={}", self.endpoint, id);
        debug!("querying video info endpoint for id {id}");

        let response = self.client.get(&url).send().await?;
        Ok(response.bytes().await?.to_vec())
    }
}
