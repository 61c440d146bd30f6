use thiserror::Error;

/// Errors surfaced by the info pipeline. Every variant is terminal for the
/// invocation; nothing is caught or retried internally.
#[derive(Debug, Error)]
pub enum InfoError {
    /// The link is neither a known YouTube URL shape nor an 11 character
    /// video id.
    #[error("'{0}' is not an extended or contracted youtube link or an 11 character video id")]
    InvalidLink(String),

    /// The endpoint reported a 'fail' status in the decoded body.
    #[error("video info request got 'fail' status")]
    RequestFail,

    /// An expected field was absent from the decoded body, e.g. the API
    /// response shape changed or the video is unavailable.
    #[error("missing field '{0}' in video info response")]
    MissingField(&'static str),

    #[error("video info request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("dump write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("dump serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
