use thiserror::Error;

pub type Result<T> = std::result::Result<T, UpstreamError>;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("HTTP request failed: {0}")]
    Transport(reqwest::Error),

    #[error("Malformed upstream response: {reason}")]
    MalformedResponse { body: String, reason: String },

    #[error("Upstream reported an error: {0}")]
    UpstreamReported(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(error: reqwest::Error) -> Self {
        // The request URL carries the access key.
        Self::Transport(error.without_url())
    }
}

impl UpstreamError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
