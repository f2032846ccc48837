use thiserror::Error;

/// Failures at the fetch boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON shape we expected
    #[error("unexpected payload from {url}: {message}")]
    Decode { url: String, message: String },

    /// The backend reported an error in a success body
    #[error("{0}")]
    Backend(String),
}

impl ApiError {
    /// Short category name for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
            ApiError::Backend(_) => "backend",
        }
    }
}
