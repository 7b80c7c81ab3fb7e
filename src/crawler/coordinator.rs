//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the main crawl loop that ties the scheduler to the page
//! processor:
//! - Dequeuing the next URL within budget
//! - Processing the page and isolating its failures
//! - Feeding discovered links back into the frontier
//! - Pausing between fetches
//! - Reporting the run

use crate::config::Config;
use crate::crawler::fetcher::{Fetcher, HttpFetcher};
use crate::crawler::page::PageProcessor;
use crate::crawler::scheduler::{CrawlBudget, FrontierEntry, Scheduler};
use crate::output::{ArtifactWriter, CrawlSummary, FsWriter};
use crate::url::extract_domain;
use crate::{ScribeError, UrlError};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use url::Url;

/// Main crawler coordinator structure
///
/// One coordinator drives exactly one crawl run. Pages are processed strictly
/// one at a time.
pub struct Coordinator<F, W> {
    scheduler: Scheduler,
    processor: PageProcessor<F, W>,
    allowed_domain: String,
    politeness_delay: Duration,
    summary: CrawlSummary,
}

impl<F: Fetcher, W: ArtifactWriter> Coordinator<F, W> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `start_url` - Seed URL; its host becomes the allowed domain
    /// * `output_dir` - Directory receiving the Markdown files
    /// * `fetcher` - Document transport
    /// * `writer` - Artifact persistence
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(ScribeError)` - The start URL has no host or a selector is invalid
    pub fn new(
        config: &Config,
        start_url: Url,
        output_dir: PathBuf,
        fetcher: F,
        writer: W,
    ) -> Result<Self, ScribeError> {
        let allowed_domain = extract_domain(&start_url)
            .ok_or_else(|| UrlError::MissingDomain(start_url.to_string()))?;

        let budget = CrawlBudget {
            max_depth: config.crawler.max_depth,
            max_pages: config.crawler.max_pages,
        };

        let processor = PageProcessor::new(fetcher, writer, &config.extraction, output_dir)?;

        Ok(Self {
            scheduler: Scheduler::new(start_url, budget),
            processor,
            allowed_domain,
            politeness_delay: config.crawler.politeness_delay(),
            summary: CrawlSummary::default(),
        })
    }

    /// The host links must stay on
    pub fn allowed_domain(&self) -> &str {
        &self.allowed_domain
    }

    /// Runs the main crawl loop
    ///
    /// Per-page failures are logged and never end the run. The loop stops when
    /// the frontier is empty or the page budget is spent.
    pub async fn run(mut self) -> CrawlSummary {
        let start_time = Instant::now();
        let max_pages = self.scheduler.budget().max_pages;

        while let Some(entry) = self.scheduler.next_entry() {
            tracing::info!(
                "[Depth: {}, Page: {}/{}] Scraping: {}",
                entry.depth,
                self.scheduler.pages_scraped(),
                max_pages,
                entry.url
            );

            self.process_entry(&entry).await;

            if !self.politeness_delay.is_zero() {
                tokio::time::sleep(self.politeness_delay).await;
            }
        }

        self.summary.pages_scraped = self.scheduler.pages_scraped();
        self.summary.frontier_remaining = self.scheduler.frontier_size();
        self.summary.stopped_early = !self.scheduler.is_empty();
        self.summary.elapsed = start_time.elapsed();

        tracing::info!(
            "Crawling finished. Scraped {} pages.",
            self.summary.pages_scraped
        );
        if self.summary.stopped_early {
            tracing::info!(
                "Stopped early because max pages ({}) limit was reached.",
                max_pages
            );
        }

        self.summary
    }

    /// Processes a single frontier entry and enqueues what it links to
    async fn process_entry(&mut self, entry: &FrontierEntry) {
        match self
            .processor
            .process(&entry.url, &self.allowed_domain)
            .await
        {
            Ok(page) => {
                self.summary.files_written += 1;
                if page.used_fallback {
                    self.summary.fallback_pages += 1;
                }

                let added = self.scheduler.enqueue_links(entry.depth, page.links);
                self.summary.links_enqueued += added as u64;
                tracing::debug!(
                    "Queued {} links from {} ({} in frontier)",
                    added,
                    entry.url,
                    self.scheduler.frontier_size()
                );
            }
            Err(e) => {
                self.summary.pages_failed += 1;
                tracing::error!("Failed to scrape {}: {}", entry.url, e);
            }
        }
    }
}

/// Runs a complete crawl over HTTP, writing to the configured output directory
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `start_url` - Seed URL, already validated
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - The crawl ran (individual pages may have failed)
/// * `Err(ScribeError)` - The crawl could not start
///
/// # Example
///
/// ```no_run
/// use site_scribe::config::Config;
/// use site_scribe::crawler::run_crawl;
/// use site_scribe::url::parse_start_url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let start = parse_start_url("https://example.com/")?;
/// let summary = run_crawl(&Config::default(), start).await?;
/// println!("{} pages", summary.pages_scraped);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config, start_url: Url) -> Result<CrawlSummary, ScribeError> {
    let fetcher = HttpFetcher::from_config(&config.user_agent, &config.crawler)?;
    let output_dir = config.output.resolve_directory();
    let coordinator = Coordinator::new(config, start_url, output_dir, fetcher, FsWriter)?;
    Ok(coordinator.run().await)
}
