use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default maximum crawl depth (the seed is depth 0)
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Default maximum number of pages processed per run
pub const DEFAULT_MAX_PAGES: u32 = 10;

/// Default pause between consecutive page fetches (milliseconds)
pub const DEFAULT_POLITENESS_DELAY_MS: u64 = 200;

/// Default HTTP request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Name of the output directory created next to the executable
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Content region selectors, tried in order
pub const DEFAULT_CONTENT_SELECTORS: &[&str] = &["main", "article", "#content", "#main-content"];

/// Elements removed from the content region before conversion
pub const DEFAULT_IGNORED_ELEMENTS: &[&str] = &[
    "nav",
    "footer",
    "header",
    "script",
    "style",
    ".sidebar",
    ".menu",
    "#navigation",
];

/// Main configuration structure for Site-Scribe
///
/// Every section is optional in the TOML file; missing sections and keys take
/// their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    pub extraction: ExtractionConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum link depth from the start URL
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Maximum number of pages processed in one run
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Pause after each processed page (milliseconds)
    #[serde(rename = "politeness-delay-ms")]
    pub politeness_delay_ms: u64,

    /// Whole-request timeout for page fetches (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_pages: DEFAULT_MAX_PAGES,
            politeness_delay_ms: DEFAULT_POLITENESS_DELAY_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl CrawlerConfig {
    pub fn politeness_delay(&self) -> Duration {
        Duration::from_millis(self.politeness_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value as `Name/Version`
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.crawler_name, self.crawler_version)
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving one Markdown file per page
    ///
    /// When unset, `output/` next to the running executable is used.
    pub directory: Option<PathBuf>,
}

impl OutputConfig {
    /// Resolves the directory artifacts are written to
    pub fn resolve_directory(&self) -> PathBuf {
        match &self.directory {
            Some(dir) => dir.clone(),
            None => default_output_dir(),
        }
    }
}

/// Returns `output/` beside the current executable, or beside the working
/// directory if the executable path is unavailable
pub fn default_output_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_OUTPUT_DIR)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
}

/// Content extraction configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// CSS selectors for the main content region, highest priority first
    #[serde(rename = "content-selectors")]
    pub content_selectors: Vec<String>,

    /// CSS selectors stripped from the content region before conversion
    #[serde(rename = "ignored-elements")]
    pub ignored_elements: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            content_selectors: DEFAULT_CONTENT_SELECTORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ignored_elements: DEFAULT_IGNORED_ELEMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
