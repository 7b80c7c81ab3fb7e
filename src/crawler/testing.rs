//! In-memory fetcher for unit tests

use crate::crawler::fetcher::{FetchError, FetchResponse, Fetcher};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

/// Serves canned responses and records every requested URL
#[derive(Default)]
pub struct StaticFetcher {
    responses: HashMap<String, FetchResponse>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `body` with status 200 at `url`
    pub fn page(self, url: &str, body: &str) -> Self {
        self.response(url, 200, body)
    }

    /// Serves an empty body with `status` at `url`
    pub fn status(self, url: &str, status: u16) -> Self {
        self.response(url, status, "")
    }

    fn response(mut self, url: &str, status: u16, body: &str) -> Self {
        let key = Url::parse(url).unwrap().to_string();
        self.responses.insert(
            key,
            FetchResponse {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| FetchError::Connect(format!("no route to {}", url)))
    }
}
