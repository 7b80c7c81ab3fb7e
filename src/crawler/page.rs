//! Single page processing
//!
//! Fetch, parse, select content, convert, persist, discover links. Any failure
//! along the way ends processing of this page only and is reported as a
//! [`PageError`]; nothing is written for a failed page.

use crate::config::ExtractionConfig;
use crate::crawler::converter::MarkdownConverter;
use crate::crawler::document::HtmlDocument;
use crate::crawler::fetcher::{FetchError, Fetcher};
use crate::crawler::links::extract_links;
use crate::crawler::selector::ContentSelector;
use crate::output::ArtifactWriter;
use crate::url::derive_filename;
use crate::ConfigError;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

/// Reasons a single page could not be processed
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Fetch failed: {0}")]
    Transport(#[from] FetchError),

    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("Could not extract content HTML (selector '{selector}' is empty)")]
    Extraction { selector: String },

    #[error("Markdown conversion failed: {0}")]
    Conversion(std::io::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A page that was converted and written
#[derive(Debug, Clone)]
pub struct ScrapedPage {
    /// Where the Markdown was written
    pub path: PathBuf,

    /// Crawlable links found anywhere in the page
    pub links: Vec<Url>,

    /// True when the whole body was converted
    pub used_fallback: bool,
}

/// Markdown and links produced from a fetched body
struct RenderedPage {
    markdown: String,
    links: Vec<Url>,
    used_fallback: bool,
}

/// Turns one URL into one Markdown artifact plus its outgoing links
pub struct PageProcessor<F, W> {
    fetcher: F,
    writer: W,
    selector: ContentSelector,
    converter: MarkdownConverter,
    output_dir: PathBuf,
}

impl<F: Fetcher, W: ArtifactWriter> PageProcessor<F, W> {
    /// Creates a processor writing into `output_dir`
    ///
    /// # Returns
    ///
    /// * `Ok(PageProcessor)` - Ready to process pages
    /// * `Err(ConfigError)` - An ignored-element selector is invalid
    pub fn new(
        fetcher: F,
        writer: W,
        extraction: &ExtractionConfig,
        output_dir: PathBuf,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            fetcher,
            writer,
            selector: ContentSelector::from_config(extraction),
            converter: MarkdownConverter::from_config(extraction)?,
            output_dir,
        })
    }

    /// Processes one page
    ///
    /// # Flow
    ///
    /// 1. Fetch `url`; transport faults and non-2xx statuses fail the page
    /// 2. Select the content region; an empty region fails the page
    /// 3. Convert the region to Markdown without ignored elements
    /// 4. Collect same-domain links from the whole document
    /// 5. Write the Markdown under the derived filename
    ///
    /// # Returns
    ///
    /// * `Ok(ScrapedPage)` - The file was written
    /// * `Err(PageError)` - Nothing was written and no links are reported
    pub async fn process(&self, url: &Url, allowed_domain: &str) -> Result<ScrapedPage, PageError> {
        let response = self.fetcher.fetch(url).await?;
        if !response.is_success() {
            return Err(PageError::Status {
                status: response.status,
            });
        }

        let rendered = self.render(url, allowed_domain, &response.body)?;

        let path = self.output_dir.join(derive_filename(url.as_str()));
        self.writer
            .ensure_dir(&self.output_dir)
            .await
            .map_err(|source| PageError::Write {
                path: self.output_dir.clone(),
                source,
            })?;
        self.writer
            .write_file(&path, &rendered.markdown)
            .await
            .map_err(|source| PageError::Write {
                path: path.clone(),
                source,
            })?;
        tracing::info!("   -> Saved to {}", path.display());

        Ok(ScrapedPage {
            path,
            links: rendered.links,
            used_fallback: rendered.used_fallback,
        })
    }

    /// Parses the body and derives the artifact and links
    ///
    /// Kept synchronous so the parsed tree never lives across an await point.
    fn render(&self, url: &Url, allowed_domain: &str, body: &str) -> Result<RenderedPage, PageError> {
        let document = HtmlDocument::parse(body);

        let content = self
            .selector
            .select(&document)
            .map_err(|e| PageError::Extraction {
                selector: e.selector,
            })?;

        if content.used_fallback {
            tracing::warn!(
                "No specific content container found for {}, using <body>. Filtering might be less effective.",
                url
            );
        }

        let markdown = self
            .converter
            .convert(&content.markup)
            .map_err(PageError::Conversion)?;

        let links = extract_links(&document, url, allowed_domain);

        Ok(RenderedPage {
            markdown,
            links,
            used_fallback: content.used_fallback,
        })
    }
}
