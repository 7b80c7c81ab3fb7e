//! Configuration module for Site-Scribe
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every value has a default, so a crawl can run without
//! any file at all.
//!
//! # Example
//!
//! ```no_run
//! use site_scribe::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scribe.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    default_output_dir, Config, CrawlerConfig, ExtractionConfig, OutputConfig, UserAgentConfig,
    DEFAULT_CONTENT_SELECTORS, DEFAULT_IGNORED_ELEMENTS, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PAGES,
    DEFAULT_OUTPUT_DIR, DEFAULT_POLITENESS_DELAY_MS, DEFAULT_REQUEST_TIMEOUT_SECS,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
