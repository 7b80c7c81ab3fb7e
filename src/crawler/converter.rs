//! HTML to Markdown conversion
//!
//! Content markup is cleaned of ignored elements (navigation, scripts, ...)
//! and rendered with ATX headings and fenced code blocks.

use crate::config::ExtractionConfig;
use crate::ConfigError;
use htmd::options::{CodeBlockStyle, HeadingStyle, Options};
use htmd::HtmlToMarkdown;
use scraper::{Html, Selector};

/// Converts content markup into Markdown
pub struct MarkdownConverter {
    ignored: Vec<Selector>,
    renderer: HtmlToMarkdown,
}

impl MarkdownConverter {
    /// Creates a converter that strips every element matching `ignored`
    ///
    /// # Returns
    ///
    /// * `Ok(MarkdownConverter)` - All selectors compiled
    /// * `Err(ConfigError)` - One of the selectors is not valid CSS
    pub fn new<S: AsRef<str>>(ignored: &[S]) -> Result<Self, ConfigError> {
        let ignored = ignored
            .iter()
            .map(|selector| {
                let selector = selector.as_ref();
                Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
                    selector: selector.to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let renderer = HtmlToMarkdown::builder()
            .options(Options {
                heading_style: HeadingStyle::Atx,
                code_block_style: CodeBlockStyle::Fenced,
                ..Default::default()
            })
            .build();

        Ok(Self { ignored, renderer })
    }

    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ConfigError> {
        Self::new(config.ignored_elements.as_slice())
    }

    /// Converts an element's inner markup to Markdown
    pub fn convert(&self, markup: &str) -> std::io::Result<String> {
        let cleaned = self.strip_ignored(markup);
        self.renderer.convert(&cleaned)
    }

    /// Removes ignored elements (with their subtrees) from a markup fragment
    fn strip_ignored(&self, markup: &str) -> String {
        if self.ignored.is_empty() {
            return markup.to_string();
        }

        let mut fragment = Html::parse_fragment(markup);
        let doomed: Vec<_> = self
            .ignored
            .iter()
            .flat_map(|selector| fragment.select(selector).map(|element| element.id()))
            .collect();

        for id in doomed {
            if let Some(mut node) = fragment.tree.get_mut(id) {
                node.detach();
            }
        }

        fragment.root_element().inner_html()
    }
}
