use crate::config::types::{Config, CrawlerConfig, ExtractionConfig, OutputConfig, UserAgentConfig};
use crate::ConfigError;
use scraper::Selector;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    validate_extraction_config(&config.extraction)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // max_depth >= 0 is always true for u32, so no check needed

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    // The name ends up in a header value
    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_ascii_graphic() && c != '/')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must be printable ASCII without spaces or '/', got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if let Some(dir) = &config.directory {
        if dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output directory cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates extraction selectors
fn validate_extraction_config(config: &ExtractionConfig) -> Result<(), ConfigError> {
    if config.content_selectors.is_empty() {
        return Err(ConfigError::Validation(
            "content_selectors must list at least one selector".to_string(),
        ));
    }

    for selector in config
        .content_selectors
        .iter()
        .chain(config.ignored_elements.iter())
    {
        validate_selector(selector)?;
    }

    Ok(())
}

/// Checks that a selector string is valid CSS
pub(crate) fn validate_selector(selector: &str) -> Result<(), ConfigError> {
    Selector::parse(selector)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidSelector {
            selector: selector.to_string(),
            message: e.to_string(),
        })
}
