use std::path::{Path, PathBuf};

use url::Url;

use crate::error::FetchError;

/// One identifier together with where it comes from and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTask {
    pub id: i64,
    pub url: Url,
    pub output_path: PathBuf,
}

/// Derives [`ImageTask`]s from identifiers.
#[derive(Debug, Clone)]
pub struct TaskTemplate {
    base: Url,
    width: u32,
    height: u32,
    output_dir: PathBuf,
}

impl TaskTemplate {
    pub fn new(
        base: &str,
        width: u32,
        height: u32,
        output_dir: &Path,
    ) -> Result<Self, FetchError> {
        let invalid = |source| FetchError::InvalidBaseUrl {
            url: base.to_string(),
            source,
        };

        let mut base = Url::parse(base).map_err(invalid)?;

        if base.cannot_be_a_base() {
            return Err(invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }

        // `join` replaces the last segment unless the path ends with a slash
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            base,
            width,
            height,
            output_dir: output_dir.to_path_buf(),
        })
    }

    pub fn task(&self, id: i64) -> Result<ImageTask, FetchError> {
        let relative = format!("id/{}/{}/{}", id, self.width, self.height);

        let url = self
            .base
            .join(&relative)
            .map_err(|source| FetchError::InvalidBaseUrl {
                url: self.base.to_string(),
                source,
            })?;

        let output_path = self.output_dir.join(format!("{}.jpg", id));

        Ok(ImageTask {
            id,
            url,
            output_path,
        })
    }

    pub fn tasks(&self, ids: &[i64]) -> Result<Vec<ImageTask>, FetchError> {
        ids.iter().map(|&id| self.task(id)).collect()
    }
}
