//! Output module for page artifacts and run reporting
//!
//! This module handles:
//! - Writing converted pages to the output directory
//! - Collecting and printing crawl statistics

pub mod stats;
mod writer;

pub use stats::{print_summary, CrawlSummary};
pub use writer::{ArtifactWriter, FsWriter};
