use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::FetchError;

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/image_ids.json";
pub const DEFAULT_OUTPUT_DIR: &str = "assets/images/picsum";
pub const DEFAULT_BASE_URL: &str = "https://picsum.photos/";

/// Identifiers to fetch, as stored in `image_ids.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageConfig {
    #[serde(rename = "imageIds")]
    pub image_ids: Vec<i64>,
}

/// Everything a run needs to know. `Default` gives the production values.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub config_path: PathBuf,
    pub output_dir: PathBuf,
    /// Image service root; requests go to `<base_url>/id/<id>/<width>/<height>`.
    pub base_url: String,
    pub width: u32,
    pub height: u32,
    pub workers: usize,
    /// Pause after each saved image, per worker.
    pub throttle: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
            width: 1920,
            height: 1080,
            workers: 4,
            throttle: Duration::from_millis(100),
        }
    }
}

pub fn load_configuration(path: &Path) -> Result<ImageConfig, FetchError> {
    let raw = fs::read_to_string(path).map_err(|source| FetchError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| FetchError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{load_configuration, FetchSettings};
    use crate::error::FetchError;

    #[test]
    fn test_load_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image_ids.json");

        fs::write(&path, r#"{ "imageIds": [10, 42, 7], "comment": "ignored" }"#).unwrap();

        let config = load_configuration(&path).unwrap();

        assert_eq!(config.image_ids, vec![10, 42, 7]);
    }

    #[test]
    fn test_negative_ids_are_still_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image_ids.json");

        fs::write(&path, r#"{ "imageIds": [10, -1, 11] }"#).unwrap();

        let config = load_configuration(&path).unwrap();

        assert_eq!(config.image_ids, vec![10, -1, 11]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let error = load_configuration(&dir.path().join("nope.json")).unwrap_err();

        assert!(matches!(error, FetchError::ReadConfig { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image_ids.json");

        for content in [
            "{ not json",
            r#"{ "ids": [1, 2] }"#,
            r#"{ "imageIds": ["1"] }"#,
        ] {
            fs::write(&path, content).unwrap();

            let error = load_configuration(&path).unwrap_err();

            assert!(
                matches!(error, FetchError::ParseConfig { .. }),
                "{content} should not parse"
            );
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = FetchSettings::default();

        assert_eq!(settings.workers, 4);
        assert_eq!(settings.base_url, "https://picsum.photos/");
        assert_eq!((settings.width, settings.height), (1920, 1080));
        assert!(settings.output_dir.ends_with("assets/images/picsum"));
    }
}
