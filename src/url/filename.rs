use url::Url;

/// Extension of every page artifact
pub const OUTPUT_EXTENSION: &str = "md";

/// Maximum length of the name stem produced for unparsable URLs
pub const FALLBACK_NAME_LIMIT: usize = 50;

/// Derives the artifact filename for a page URL
///
/// # Naming Rules
///
/// | Part | Rule |
/// |------|------|
/// | Host | leading `www.` removed, characters outside `[a-z0-9.-]` become `_` |
/// | Path | one leading and one trailing `/` removed, inner `/` become `_`, characters outside `[a-z0-9_-]` become `_` |
/// | Empty path | `index` |
/// | Query, fragment | ignored |
///
/// The result is `{host}_{path}.md`. Strings that do not parse as URLs are
/// sanitized as a whole and truncated to [`FALLBACK_NAME_LIMIT`] characters
/// instead, so this function never fails.
///
/// # Examples
///
/// ```
/// use site_scribe::url::derive_filename;
///
/// assert_eq!(derive_filename("https://www.example.com/"), "example.com_index.md");
/// assert_eq!(derive_filename("https://example.com/docs/intro/"), "example.com_docs_intro.md");
/// assert_eq!(derive_filename("not a url"), "not_a_url.md");
/// ```
pub fn derive_filename(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) => filename_from_url(&url),
        Err(e) => {
            tracing::debug!("Could not parse URL for filename: {} ({}), using fallback", raw, e);
            fallback_filename(raw)
        }
    }
}

fn filename_from_url(url: &Url) -> String {
    let host = url.host_str().unwrap_or("");
    let host = host.strip_prefix("www.").unwrap_or(host);

    let path = url.path();
    let path = path.strip_suffix('/').unwrap_or(path);
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.replace('/', "_");
    let path = if path.is_empty() || path == "_" {
        "index"
    } else {
        path.as_str()
    };

    format!(
        "{}_{}.{}",
        sanitize(host, |c| c == '.' || c == '-'),
        sanitize(path, |c| c == '_' || c == '-'),
        OUTPUT_EXTENSION
    )
}

fn fallback_filename(raw: &str) -> String {
    let stem: String = sanitize(raw, |c| c == '_' || c == '-')
        .chars()
        .take(FALLBACK_NAME_LIMIT)
        .collect();
    let stem = if stem.is_empty() { "index".to_string() } else { stem };
    format!("{}.{}", stem, OUTPUT_EXTENSION)
}

/// Keeps ASCII alphanumerics and the extra characters accepted by `keep`,
/// replacing every other character with `_`
fn sanitize(input: &str, keep: impl Fn(char) -> bool) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || keep(c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}
