use std::process::ExitCode;

use picsum_fetcher::{run, FetchSettings, UReqFetcher};
use tracing_subscriber::EnvFilter;

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    setup_logging();

    let settings = FetchSettings::default();

    match run(&settings, UReqFetcher::new()) {
        Ok(report) => {
            tracing::info!(
                succeeded = report.succeeded(),
                failed = report.failed(),
                "finished downloading images"
            );

            ExitCode::SUCCESS
        }

        Err(error) => {
            tracing::error!("{}", error);

            ExitCode::FAILURE
        }
    }
}
