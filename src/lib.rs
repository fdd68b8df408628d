//! Fetches a fixed list of placeholder images from picsum and stores them as
//! `<output_dir>/<id>.jpg`, a few at a time.

pub mod config;
pub mod downloader;
pub mod error;
pub mod pool;

pub use config::{load_configuration, FetchSettings, ImageConfig};
pub use downloader::{
    ensure_output_directory, DownloadOutcome, Downloader, FileDownloader, ImageTask, Response,
    TaskTemplate, UReqFetcher,
};
pub use error::{DownloadError, FetchError};
pub use pool::{run_all, BatchReport};

/// Creates the output directory, loads the identifiers and downloads them.
///
/// Everything that can go wrong before the first request is returned as a
/// [`FetchError`]; per-image failures end up in the [`BatchReport`].
pub fn run<T>(settings: &FetchSettings, fetcher: T) -> Result<BatchReport, FetchError>
where
    T: FileDownloader,
{
    let output_dir = ensure_output_directory(&settings.output_dir)?;
    let config = load_configuration(&settings.config_path)?;

    let template = TaskTemplate::new(
        &settings.base_url,
        settings.width,
        settings.height,
        &output_dir,
    )?;
    let tasks = template.tasks(&config.image_ids)?;

    tracing::info!(
        images = tasks.len(),
        workers = settings.workers,
        dir = %output_dir.display(),
        "downloading images"
    );

    let downloader = Downloader::with_fetcher(fetcher, settings.throttle);

    Ok(run_all(&downloader, tasks, settings.workers))
}
