//! Scheduler for managing the crawl frontier and budgets
//!
//! This module handles:
//! - FIFO frontier management (breadth-first order)
//! - Visited-set deduplication at dequeue time
//! - Depth and page budget enforcement
//!
//! The scheduler holds plain state and performs no I/O, so the whole budget
//! logic is testable without a network.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// Depth and page limits for one crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlBudget {
    /// Deepest link level processed (the start URL is depth 0)
    pub max_depth: u32,

    /// Maximum number of pages processed
    pub max_pages: u32,
}

/// A URL waiting in the frontier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    /// The URL to fetch
    pub url: Url,

    /// Link distance from the start URL
    pub depth: u32,
}

/// Scheduler owns the frontier, the visited set and the page counter
///
/// A URL is marked visited when it is handed out for processing, not when it is
/// discovered. The same URL may therefore sit in the frontier several times; the
/// visited check at dequeue time guarantees it is processed once.
#[derive(Debug)]
pub struct Scheduler {
    /// URLs waiting to be processed, oldest first
    frontier: VecDeque<FrontierEntry>,

    /// URLs already handed out for processing
    visited: HashSet<String>,

    /// Crawl limits
    budget: CrawlBudget,

    /// Pages handed out so far
    pages_scraped: u32,

    /// Entries discarded as visited or too deep
    skipped: u64,
}

impl Scheduler {
    /// Creates a scheduler seeded with `start` at depth 0
    pub fn new(start: Url, budget: CrawlBudget) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(FrontierEntry {
            url: start,
            depth: 0,
        });

        Self {
            frontier,
            visited: HashSet::new(),
            budget,
            pages_scraped: 0,
            skipped: 0,
        }
    }

    /// Gets the next URL to process
    ///
    /// Entries that were already visited or lie deeper than the depth budget are
    /// discarded without charging the page budget. The returned entry is marked
    /// visited and counted.
    ///
    /// # Returns
    ///
    /// * `Some(FrontierEntry)` - A URL to process now
    /// * `None` - The frontier is empty or the page budget is spent
    pub fn next_entry(&mut self) -> Option<FrontierEntry> {
        while !self.is_budget_exhausted() {
            let entry = self.frontier.pop_front()?;

            if entry.depth > self.budget.max_depth {
                tracing::debug!(
                    "Skipping {} at depth {} (max depth {})",
                    entry.url,
                    entry.depth,
                    self.budget.max_depth
                );
                self.skipped += 1;
                continue;
            }

            if !self.visited.insert(entry.url.as_str().to_string()) {
                tracing::trace!("Skipping already visited {}", entry.url);
                self.skipped += 1;
                continue;
            }

            self.pages_scraped += 1;
            return Some(entry);
        }

        None
    }

    /// Adds links discovered on a page at `parent_depth`
    ///
    /// Nothing is added when the parent already sits at the depth limit. Links
    /// that were processed already are dropped; links merely waiting in the
    /// frontier are added again.
    ///
    /// # Returns
    ///
    /// The number of entries added to the frontier
    pub fn enqueue_links<I>(&mut self, parent_depth: u32, links: I) -> usize
    where
        I: IntoIterator<Item = Url>,
    {
        if parent_depth >= self.budget.max_depth {
            return 0;
        }

        let depth = parent_depth + 1;
        let before = self.frontier.len();
        for url in links {
            if !self.visited.contains(url.as_str()) {
                self.frontier.push_back(FrontierEntry { url, depth });
            }
        }

        self.frontier.len() - before
    }

    /// Returns true once the page budget is used up
    pub fn is_budget_exhausted(&self) -> bool {
        self.pages_scraped >= self.budget.max_pages
    }

    /// Returns true if the URL was already handed out for processing
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Returns the number of entries in the frontier
    pub fn frontier_size(&self) -> usize {
        self.frontier.len()
    }

    /// Returns whether the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Pages handed out so far
    pub fn pages_scraped(&self) -> u32 {
        self.pages_scraped
    }

    /// Entries discarded as visited or too deep
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn budget(&self) -> CrawlBudget {
        self.budget
    }
}
