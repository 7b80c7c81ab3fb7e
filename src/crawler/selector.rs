//! Main content region selection
//!
//! Pages are reduced to their main content before conversion. The candidate
//! regions are an explicit ordered list of selectors; the first selector that
//! matches anything wins and only its first element is used. Pages without any
//! candidate fall back to the whole `<body>`.

use crate::config::ExtractionConfig;
use crate::crawler::document::DocumentHandle;
use thiserror::Error;

/// Selector used when no configured content region matches
pub const FALLBACK_SELECTOR: &str = "body";

/// The chosen region yielded no markup
#[derive(Debug, Error)]
#[error("Could not extract content HTML (selector '{selector}' matched an empty element)")]
pub struct EmptyContent {
    pub selector: String,
}

/// Markup of the selected content region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedContent {
    /// The selector that produced the markup
    pub selector: String,

    /// Inner markup of the chosen element
    pub markup: String,

    /// True when no configured selector matched and `<body>` was used
    pub used_fallback: bool,
}

/// Ordered content region selector
#[derive(Debug, Clone)]
pub struct ContentSelector {
    selectors: Vec<String>,
}

impl ContentSelector {
    pub fn new(selectors: Vec<String>) -> Self {
        Self { selectors }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(config.content_selectors.clone())
    }

    /// Picks the content region of `doc`
    ///
    /// # Returns
    ///
    /// * `Ok(SelectedContent)` - Non-empty markup of the chosen region
    /// * `Err(EmptyContent)` - The chosen region (or the body) has no inner
    ///   markup at all; whitespace counts as content
    pub fn select<D: DocumentHandle + ?Sized>(
        &self,
        doc: &D,
    ) -> Result<SelectedContent, EmptyContent> {
        let found = self.selectors.iter().find_map(|selector| {
            doc.first_inner_markup(selector)
                .map(|markup| (selector.as_str(), markup, false))
        });

        let (selector, markup, used_fallback) = match found {
            Some(found) => found,
            None => (
                FALLBACK_SELECTOR,
                doc.first_inner_markup(FALLBACK_SELECTOR).unwrap_or_default(),
                true,
            ),
        };

        if markup.is_empty() {
            return Err(EmptyContent {
                selector: selector.to_string(),
            });
        }

        Ok(SelectedContent {
            selector: selector.to_string(),
            markup,
            used_fallback,
        })
    }
}

impl Default for ContentSelector {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}
