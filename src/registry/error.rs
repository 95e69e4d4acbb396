use thiserror::Error;

/// Failure modes for a single registry lookup
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid lookup URL: {0}")]
    InvalidRequest(String),

    #[error("Invalid response body: {0}")]
    Parse(String),

    #[error("Registry response for {0} has no usable version")]
    MissingVersion(String),
}
