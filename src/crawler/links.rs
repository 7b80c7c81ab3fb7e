//! Link discovery
//!
//! Every `<a href>` in a page is resolved against the page URL, stripped of its
//! fragment and kept only when it stays on the crawl's allowed domain over
//! `http` or `https`.

use crate::crawler::document::DocumentHandle;
use crate::url::is_crawlable;
use std::collections::HashSet;
use url::Url;

/// Extracts the crawlable links of a page
///
/// # Arguments
///
/// * `doc` - The whole parsed page (navigation included)
/// * `page_url` - The URL the page was requested from, used as the base
/// * `allowed_domain` - Host that links must match exactly
///
/// # Returns
///
/// Absolute, fragment-free URLs without duplicates, in the order they first
/// appear. Hrefs that cannot be resolved are skipped.
///
/// # Example
///
/// ```
/// use site_scribe::crawler::{extract_links, HtmlDocument};
/// use url::Url;
///
/// let doc = HtmlDocument::parse(r#"<a href="/a#top">A</a><a href="https://other.com/">B</a>"#);
/// let base = Url::parse("https://example.com/").unwrap();
/// let links = extract_links(&doc, &base, "example.com");
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].as_str(), "https://example.com/a");
/// ```
pub fn extract_links<D: DocumentHandle + ?Sized>(
    doc: &D,
    page_url: &Url,
    allowed_domain: &str,
) -> Vec<Url> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for href in doc.attribute_values("a", "href") {
        let Some(link) = resolve_link(&href, page_url) else {
            continue;
        };

        if is_crawlable(&link, allowed_domain) && seen.insert(link.as_str().to_string()) {
            links.push(link);
        }
    }

    tracing::debug!("Extracted {} links from {}", links.len(), page_url);
    links
}

/// Resolves an href against the page URL and drops its fragment
fn resolve_link(href: &str, page_url: &Url) -> Option<Url> {
    match page_url.join(href) {
        Ok(mut url) => {
            url.set_fragment(None);
            Some(url)
        }
        Err(e) => {
            tracing::debug!("Skipping href '{}' on {}: {}", href, page_url, e);
            None
        }
    }
}
