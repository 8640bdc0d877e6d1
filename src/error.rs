use std::path::PathBuf;

/// All errors that can occur while talking to the scoreboard backend or its
/// local cache mirror.
#[derive(thiserror::Error, Debug)]
pub enum ScoreboardError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Response body could not be decoded as the expected JSON shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: reqwest::Error,
    },

    /// Match list could not be serialized for the cache mirror.
    #[error("failed to encode cache payload: {0}")]
    CacheEncode(#[from] serde_json::Error),

    /// Cache mirror file could not be written.
    #[error("failed to write cache file {path}: {source}")]
    CacheWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;
