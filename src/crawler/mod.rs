//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - Content region selection and Markdown conversion
//! - Link extraction
//! - Frontier scheduling and budgets
//! - Overall crawl coordination

mod converter;
mod coordinator;
mod document;
mod fetcher;
mod links;
mod page;
mod scheduler;
mod selector;

#[cfg(test)]
pub(crate) mod testing;

pub use converter::MarkdownConverter;
pub use coordinator::{run_crawl, Coordinator};
pub use document::{DocumentHandle, HtmlDocument};
pub use fetcher::{build_http_client, FetchError, FetchResponse, Fetcher, HttpFetcher};
pub use links::extract_links;
pub use page::{PageError, PageProcessor, ScrapedPage};
pub use scheduler::{CrawlBudget, FrontierEntry, Scheduler};
pub use selector::{ContentSelector, EmptyContent, SelectedContent, FALLBACK_SELECTOR};
