use url::Url;

/// Extracts the domain from a URL
///
/// The crawl's allowed domain and every candidate link are compared through this
/// function, so both sides see the same lowercase host without port. URLs such
/// as `mailto:` or `data:` have no host and yield None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_scribe::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM:8443/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns true if the URL may be crawled inside `allowed_domain`
///
/// Only `http` and `https` URLs whose host equals the allowed domain exactly
/// qualify. Subdomains and `www.` variants are different hosts.
pub fn is_crawlable(url: &Url, allowed_domain: &str) -> bool {
    matches!(url.scheme(), "http" | "https")
        && extract_domain(url).is_some_and(|host| host == allowed_domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_extract_simple_domain() {
        assert_eq!(
            extract_domain(&url("https://example.com/")),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_extract_drops_port() {
        assert_eq!(
            extract_domain(&url("http://127.0.0.1:8080/page")),
            Some("127.0.0.1".to_string())
        );
    }

    #[test]
    fn test_extract_keeps_www() {
        assert_eq!(
            extract_domain(&url("https://www.example.com/")),
            Some("www.example.com".to_string())
        );
    }

    #[test]
    fn test_extract_no_host() {
        assert_eq!(extract_domain(&url("mailto:someone@example.com")), None);
    }

    #[test]
    fn test_crawlable_same_host() {
        assert!(is_crawlable(&url("https://example.com/a"), "example.com"));
        assert!(is_crawlable(&url("http://example.com/b?x=1"), "example.com"));
    }

    #[test]
    fn test_not_crawlable_other_host() {
        assert!(!is_crawlable(&url("https://other.com/"), "example.com"));
        assert!(!is_crawlable(&url("https://sub.example.com/"), "example.com"));
        assert!(!is_crawlable(&url("https://www.example.com/"), "example.com"));
    }

    #[test]
    fn test_not_crawlable_other_scheme() {
        assert!(!is_crawlable(&url("ftp://example.com/file"), "example.com"));
        assert!(!is_crawlable(&url("mailto:me@example.com"), "example.com"));
        assert!(!is_crawlable(&url("javascript:void(0)"), "example.com"));
    }
}
