use thiserror::Error;

/// Failure while fetching or decoding one of the JSON content documents.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetch {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("fetch {url} returned {status}")]
    Status { url: String, status: u16 },
    #[error("decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Invalid(#[from] serde_json::Error),
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}
