//! Site-Scribe main entry point
//!
//! This is the command-line interface for the Site-Scribe crawler.

use anyhow::Context;
use clap::Parser;
use site_scribe::config::{load_config, validate, Config};
use site_scribe::crawler::run_crawl;
use site_scribe::output::print_summary;
use site_scribe::url::parse_start_url;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Scribe: crawl a website and save every page as Markdown
///
/// Starting from START_URL, Site-Scribe follows links on the same host
/// breadth-first, extracts the main content of each page and writes it as one
/// Markdown file per page.
#[derive(Parser, Debug)]
#[command(name = "site-scribe")]
#[command(version)]
#[command(about = "Crawl a website and save each page as Markdown", long_about = None)]
#[command(after_help = "Example: site-scribe https://example.com 2 20")]
struct Cli {
    /// URL to start crawling from; its host bounds the crawl
    #[arg(value_name = "START_URL")]
    start_url: String,

    /// How many link levels deep to crawl (default: 2)
    #[arg(value_name = "MAX_DEPTH", allow_hyphen_values = true)]
    max_depth: Option<String>,

    /// Maximum number of pages to scrape (default: 10)
    #[arg(value_name = "MAX_PAGES", allow_hyphen_values = true)]
    max_pages: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for the Markdown files (default: output/ next to the executable)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Pause between page fetches in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Validate the start URL before anything else
    let start_url = parse_start_url(&cli.start_url)
        .with_context(|| format!("Invalid start URL provided: {}", cli.start_url))?;

    let config = build_config(&cli)?;
    let output_dir = config.output.resolve_directory();

    tracing::info!("Starting crawl from: {}", start_url);
    tracing::info!(
        "Max Depth: {}, Max Pages: {}",
        config.crawler.max_depth,
        config.crawler.max_pages
    );
    tracing::info!(
        "Ignoring elements: {}",
        config.extraction.ignored_elements.join(", ")
    );
    tracing::info!("Output directory: {}", output_dir.display());

    let summary = run_crawl(&config, start_url).await.map_err(|e| {
        tracing::error!("Crawl failed: {}", e);
        e
    })?;

    if !cli.quiet {
        print_summary(&summary);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_scribe=info,warn"),
            1 => EnvFilter::new("site_scribe=debug,info"),
            2 => EnvFilter::new("site_scribe=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the optional config file and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    config.crawler.max_depth = parse_limit(
        cli.max_depth.as_deref(),
        "max depth",
        config.crawler.max_depth,
        true,
    );
    config.crawler.max_pages = parse_limit(
        cli.max_pages.as_deref(),
        "max pages",
        config.crawler.max_pages,
        false,
    );

    if let Some(dir) = &cli.output_dir {
        config.output.directory = Some(dir.clone());
    }
    if let Some(delay) = cli.delay_ms {
        config.crawler.politeness_delay_ms = delay;
    }

    validate(&config)?;
    Ok(config)
}

/// Parses a positional limit, falling back to `default` when it is absent or
/// not a usable number
fn parse_limit(raw: Option<&str>, name: &str, default: u32, allow_zero: bool) -> u32 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<u32>() {
        Ok(0) if !allow_zero => {
            tracing::warn!("{} must be at least 1, using default {}", name, default);
            default
        }
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("Ignoring invalid {} '{}', using default {}", name, raw, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit_absent() {
        assert_eq!(parse_limit(None, "max depth", 2, true), 2);
    }

    #[test]
    fn test_parse_limit_number() {
        assert_eq!(parse_limit(Some("5"), "max depth", 2, true), 5);
        assert_eq!(parse_limit(Some(" 7 "), "max pages", 10, false), 7);
    }

    #[test]
    fn test_parse_limit_non_numeric_falls_back() {
        assert_eq!(parse_limit(Some("deep"), "max depth", 2, true), 2);
        assert_eq!(parse_limit(Some("-3"), "max depth", 2, true), 2);
        assert_eq!(parse_limit(Some("1.5"), "max pages", 10, false), 10);
    }

    #[test]
    fn test_parse_limit_zero() {
        assert_eq!(parse_limit(Some("0"), "max depth", 2, true), 0);
        assert_eq!(parse_limit(Some("0"), "max pages", 10, false), 10);
    }

    #[test]
    fn test_cli_positionals() {
        let cli = Cli::try_parse_from(["site-scribe", "https://example.com", "1", "abc"]).unwrap();
        let config = build_config(&cli).unwrap();

        assert_eq!(cli.start_url, "https://example.com");
        assert_eq!(config.crawler.max_depth, 1);
        assert_eq!(config.crawler.max_pages, 10);
    }

    #[test]
    fn test_cli_requires_start_url() {
        assert!(Cli::try_parse_from(["site-scribe"]).is_err());
    }

    #[test]
    fn test_cli_flags_override_config() {
        let cli = Cli::try_parse_from([
            "site-scribe",
            "https://example.com",
            "--output-dir",
            "/tmp/pages",
            "--delay-ms",
            "0",
        ])
        .unwrap();
        let config = build_config(&cli).unwrap();

        assert_eq!(config.output.directory, Some(PathBuf::from("/tmp/pages")));
        assert_eq!(config.crawler.politeness_delay_ms, 0);
    }
}
