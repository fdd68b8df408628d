//! Backends behind [`FileDownloader`](super::FileDownloader).

mod ureq_fetcher;
#[cfg(test)]
mod mock_fetcher;

pub use ureq_fetcher::UReqFetcher;
#[cfg(test)]
pub use mock_fetcher::MockFetcher;
