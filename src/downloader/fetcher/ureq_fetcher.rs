use std::io::Read;

use ureq::Error::{Status, Transport};
use ureq::{Agent, AgentBuilder};

use crate::downloader::{FileDownloader, Response};

/// Blocking HTTP fetcher. One agent, and so one connection pool, is shared
/// by all workers.
pub struct UReqFetcher {
    agent: Agent,
}

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let response = self.agent.get(url).call();

        match response {
            Ok(response) => {
                let mut body = Vec::new();

                // `into_string` caps bodies at 10MB, the raw reader does not.
                if let Err(error) = response.into_reader().read_to_end(&mut body) {
                    return Response::invalid_body(error.to_string());
                }

                Response::ok(body)
            }

            Err(Status(code, _)) => Response::status(code),

            Err(Transport(error)) => Response::network_error(error.to_string()),
        }
    }
}

impl UReqFetcher {
    pub fn new() -> Self {
        UReqFetcher {
            agent: AgentBuilder::new().build(),
        }
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
