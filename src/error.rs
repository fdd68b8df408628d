use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the whole run before any image is fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read configuration {path:?}: {source}")]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("malformed configuration {path:?}: {source}")]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid image service url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("failed to create output directory {path:?}: {source}")]
    OutputDirectory { path: PathBuf, source: io::Error },
}

/// Why a single image could not be saved. Never aborts the batch.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("server responded with status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("could not read response body: {0}")]
    InvalidBody(String),

    #[error("failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}
