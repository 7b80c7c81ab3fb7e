//! Site-Scribe: a bounded site crawler that saves pages as Markdown
//!
//! This crate crawls a single website breadth-first from a seed URL, selects the
//! main content region of every page, converts it to Markdown and writes one
//! file per page. Crawls are bounded by depth and page budgets and never leave
//! the seed's host.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Site-Scribe operations
#[derive(Debug, Error)]
pub enum ScribeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL '{url}': {source}")]
    Parse {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL: {0}")]
    MissingDomain(String),
}

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Coordinator, CrawlBudget, PageError, Scheduler};
pub use output::CrawlSummary;
pub use url::{derive_filename, extract_domain, parse_start_url};
