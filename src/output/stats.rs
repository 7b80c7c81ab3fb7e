//! Crawl run statistics
//!
//! The coordinator fills a [`CrawlSummary`] while it runs; the CLI prints it
//! once the crawl ends.

use std::time::Duration;

/// Outcome counters for one crawl run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Pages handed to the page processor (successful or not)
    pub pages_scraped: u32,

    /// Pages whose processing failed
    pub pages_failed: u32,

    /// Markdown files written
    pub files_written: u32,

    /// Pages converted from `<body>` because no content region matched
    pub fallback_pages: u32,

    /// Frontier entries added from discovered links
    pub links_enqueued: u64,

    /// Frontier entries left when the crawl ended
    pub frontier_remaining: usize,

    /// True when the page budget ended the crawl with work still queued
    pub stopped_early: bool,

    /// Wall-clock duration of the crawl
    pub elapsed: Duration,
}

impl CrawlSummary {
    /// Percentage of processed pages that produced a file
    pub fn success_rate(&self) -> f64 {
        if self.pages_scraped == 0 {
            0.0
        } else {
            self.files_written as f64 / self.pages_scraped as f64 * 100.0
        }
    }
}

/// Prints a crawl summary to stdout
pub fn print_summary(summary: &CrawlSummary) {
    println!("=== Crawl Summary ===\n");
    println!("  Pages scraped: {}", summary.pages_scraped);
    println!(
        "  Files written: {} ({:.1}%)",
        summary.files_written,
        summary.success_rate()
    );
    println!("  Pages failed: {}", summary.pages_failed);
    println!("  Body fallbacks: {}", summary.fallback_pages);
    println!("  Links queued: {}", summary.links_enqueued);
    println!("  Duration: {:.2}s", summary.elapsed.as_secs_f64());

    if summary.stopped_early {
        println!(
            "\n  Stopped early with {} URLs still queued (page limit reached)",
            summary.frontier_remaining
        );
    }
}
