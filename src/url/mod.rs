//! URL handling module for Site-Scribe
//!
//! This module provides start URL validation, domain extraction and the
//! URL-to-filename mapping used for page artifacts.

mod domain;
mod filename;

use crate::UrlError;
use url::Url;

// Re-export main functions
pub use domain::{extract_domain, is_crawlable};
pub use filename::{derive_filename, FALLBACK_NAME_LIMIT, OUTPUT_EXTENSION};

/// Parses and validates the URL a crawl starts from
///
/// The start URL must parse, use the `http` or `https` scheme and carry a host,
/// since that host becomes the allowed domain for the whole crawl. Any fragment
/// is dropped so the seed is recorded in the same form as discovered links.
///
/// # Arguments
///
/// * `raw` - The start URL as given on the command line
///
/// # Returns
///
/// * `Ok(Url)` - The parsed seed URL
/// * `Err(UrlError)` - The URL cannot seed a crawl
///
/// # Examples
///
/// ```
/// use site_scribe::url::parse_start_url;
///
/// let url = parse_start_url("https://example.com/docs#intro").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/docs");
///
/// assert!(parse_start_url("not a url").is_err());
/// assert!(parse_start_url("ftp://example.com/").is_err());
/// ```
pub fn parse_start_url(raw: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(raw.trim()).map_err(|source| UrlError::Parse {
        url: raw.to_string(),
        source,
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if extract_domain(&url).is_none() {
        return Err(UrlError::MissingDomain(raw.to_string()));
    }

    url.set_fragment(None);
    Ok(url)
}
