mod fetcher;
mod task;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::error::{DownloadError, FetchError};

pub use fetcher::UReqFetcher;
pub use task::{ImageTask, TaskTemplate};

#[cfg(test)]
pub use fetcher::MockFetcher;

#[derive(Debug, Clone)]
pub enum Response {
    Ok(Vec<u8>),
    InvalidBody(String),
    Status(u16),
    NetworkError(String),
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::Ok(body)
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody(message.into())
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self::NetworkError(message.into())
    }
}

/// Performs one blocking GET. Shared by every worker of the pool.
pub trait FileDownloader: Send + Sync {
    fn fetch(&self, url: &str) -> Response;
}

impl<T: FileDownloader + ?Sized> FileDownloader for &T {
    fn fetch(&self, url: &str) -> Response {
        (**self).fetch(url)
    }
}

/// Result of a single task. Failures are values, not errors.
#[derive(Debug)]
pub enum DownloadOutcome {
    Saved { id: i64, path: PathBuf, bytes: usize },
    Failed { id: i64, reason: DownloadError },
}

impl DownloadOutcome {
    pub fn id(&self) -> i64 {
        match self {
            Self::Saved { id, .. } | Self::Failed { id, .. } => *id,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

pub struct Downloader<T: FileDownloader> {
    fetcher: T,
    throttle: Duration,
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    pub fn with_fetcher(fetcher: T, throttle: Duration) -> Self {
        Downloader { fetcher, throttle }
    }

    /// Fetches one image and writes it to `task.output_path`. Errors are
    /// logged and returned as [`DownloadOutcome::Failed`].
    pub fn download_one(&self, task: &ImageTask) -> DownloadOutcome {
        match self.save(task) {
            Ok(bytes) => {
                tracing::info!(id = task.id, bytes, "Downloaded image {}", task.id);

                thread::sleep(self.throttle);

                DownloadOutcome::Saved {
                    id: task.id,
                    path: task.output_path.clone(),
                    bytes,
                }
            }

            Err(reason) => {
                tracing::warn!(id = task.id, "Error downloading image {}: {}", task.id, reason);

                DownloadOutcome::Failed {
                    id: task.id,
                    reason,
                }
            }
        }
    }

    fn save(&self, task: &ImageTask) -> Result<usize, DownloadError> {
        tracing::debug!(id = task.id, url = %task.url, "fetching");

        let body = match self.fetcher.fetch(task.url.as_str()) {
            Response::Ok(body) => body,
            Response::Status(code) => return Err(DownloadError::Status(code)),
            Response::InvalidBody(message) => return Err(DownloadError::InvalidBody(message)),
            Response::NetworkError(message) => return Err(DownloadError::Network(message)),
        };

        fs::write(&task.output_path, &body).map_err(|source| DownloadError::Write {
            path: task.output_path.clone(),
            source,
        })?;

        Ok(body.len())
    }
}

/// Creates `path` and its parents if missing, returning it as an absolute path.
pub fn ensure_output_directory(path: &Path) -> Result<PathBuf, FetchError> {
    let failed = |source| FetchError::OutputDirectory {
        path: path.to_path_buf(),
        source,
    };

    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().map_err(failed)?.join(path)
    };

    fs::create_dir_all(&absolute_path).map_err(failed)?;

    Ok(absolute_path)
}
