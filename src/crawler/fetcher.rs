//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the configured user agent and timeouts
//! - GET requests for page content
//! - Error classification
//!
//! Every URL gets exactly one attempt. A non-2xx status is a normal response
//! and is left to the caller to judge; only transport faults are errors.

use crate::config::{CrawlerConfig, UserAgentConfig};
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Maximum number of redirects followed for a single fetch
pub const MAX_REDIRECTS: usize = 10;

/// A fetched document
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,

    /// Page body content
    pub body: String,
}

impl FetchResponse {
    /// Returns true for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level fetch failures
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::Connect(e.to_string())
        } else if e.is_body() || e.is_decode() {
            FetchError::Body(e.to_string())
        } else {
            FetchError::Other(e.to_string())
        }
    }
}

/// Retrieves raw documents for the page processor
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` once
    ///
    /// Returns `Err` only when no response could be obtained (DNS, connection,
    /// timeout, unreadable body).
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError>;
}

#[async_trait]
impl<T: Fetcher + ?Sized> Fetcher for Arc<T> {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        (**self).fetch(url).await
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `crawler` - Crawler settings providing the request timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use site_scribe::config::{CrawlerConfig, UserAgentConfig};
/// use site_scribe::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &CrawlerConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(crawler.request_timeout())
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`Fetcher`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client from configuration and wraps it
    pub fn from_config(
        user_agent: &UserAgentConfig,
        crawler: &CrawlerConfig,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(user_agent, crawler)?))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();

        if response.url() != url {
            tracing::debug!("{} redirected to {}", url, response.url());
        }

        let body = response.text().await?;
        Ok(FetchResponse { status, body })
    }
}
