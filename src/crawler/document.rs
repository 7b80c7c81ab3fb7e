//! Parsed document access
//!
//! The content selector and link extractor only need a handful of queries on a
//! parsed page. [`DocumentHandle`] captures them so the extraction logic does not
//! depend on a particular HTML backend; [`HtmlDocument`] implements it on top of
//! `scraper`.

use scraper::{Html, Selector};

/// Read-only queries over a parsed markup document
pub trait DocumentHandle {
    /// Returns the inner markup of the first element matching `selector`
    ///
    /// `None` means nothing matched (or the selector is invalid); an element
    /// that matched but has no children yields `Some("")`.
    fn first_inner_markup(&self, selector: &str) -> Option<String>;

    /// Returns the value of `attr` for every `tag` element that carries it, in
    /// document order
    fn attribute_values(&self, tag: &str, attr: &str) -> Vec<String>;
}

/// A best-effort parsed HTML page
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses a full HTML document
    ///
    /// Parsing never fails: malformed markup is repaired the way browsers do,
    /// and `html`, `head` and `body` elements always exist afterwards.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }
}

fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(compiled) => Some(compiled),
        Err(e) => {
            tracing::debug!("Ignoring invalid selector '{}': {}", selector, e);
            None
        }
    }
}

impl DocumentHandle for HtmlDocument {
    fn first_inner_markup(&self, selector: &str) -> Option<String> {
        let selector = compile(selector)?;
        self.html
            .select(&selector)
            .next()
            .map(|element| element.inner_html())
    }

    fn attribute_values(&self, tag: &str, attr: &str) -> Vec<String> {
        let Some(selector) = compile(&format!("{}[{}]", tag, attr)) else {
            return Vec::new();
        };

        self.html
            .select(&selector)
            .filter_map(|element| element.value().attr(attr))
            .map(str::to_string)
            .collect()
    }
}
