use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatboardError {
    #[cfg(feature = "cli")]
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("profile '{0}' not found")]
    NotFound(String),

    #[error("api returned status {0}")]
    Api(u16),

    #[error("malformed api payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StatboardError>;
