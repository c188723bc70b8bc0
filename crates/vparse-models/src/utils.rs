//! URL helpers shared across crates.

use url::Url;

/// Check that a string parses as an absolute `http`/`https` URL.
///
/// Every URL accepted into the catalog or forwarded to an upstream
/// endpoint must pass this check.
pub fn is_absolute_http_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_absolute_http_url("https://bilibili.com/video/1"));
        assert!(is_absolute_http_url("http://example.com/watch?v=1"));
    }

    #[test]
    fn test_rejects_other_schemes_and_garbage() {
        assert!(!is_absolute_http_url("ftp://example.com/file"));
        assert!(!is_absolute_http_url("javascript:alert(1)"));
        assert!(!is_absolute_http_url("not a url"));
        assert!(!is_absolute_http_url(""));
        // Relative references are not absolute URLs
        assert!(!is_absolute_http_url("/video/1"));
    }
}
