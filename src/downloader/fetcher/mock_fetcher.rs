use std::collections::HashMap;
use std::sync::Mutex;

use crate::downloader::{FileDownloader, Response};

/// Answers by URL. Unknown URLs get a network error.
pub struct MockFetcher {
    responses: HashMap<String, Response>,
    calls: Mutex<Vec<String>>,
}

impl FileDownloader for MockFetcher {
    fn fetch(&self, url: &str) -> Response {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(url.to_string());

        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Response::network_error("no mocked response"))
    }
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, url: &str, response: Response) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}
