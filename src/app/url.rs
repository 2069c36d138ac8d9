//! URL normalization utilities.

use log::debug;

use crate::config::{DEFAULT_SCHEME_PREFIX, SCHEME_MARKER};

/// Normalizes user input into the URL sent to the backend.
///
/// Trims surrounding whitespace, then adds the `https://` prefix unless the
/// trimmed text already begins with `http`. The check is syntactic only; the
/// URL is not parsed or otherwise validated here (the backend owns that), so
/// `httpfoo` is passed through unchanged.
///
/// # Arguments
///
/// * `raw` - The text the user typed
///
/// # Returns
///
/// The normalized URL string.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with(SCHEME_MARKER) {
        trimmed.to_string()
    } else {
        debug!("Adding {DEFAULT_SCHEME_PREFIX} prefix to {trimmed}");
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_url;

    #[test]
    fn test_normalize_url_adds_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_url_preserves_http() {
        assert_eq!(normalize_url("http://foo.com"), "http://foo.com");
    }

    #[test]
    fn test_normalize_url_preserves_https() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_url_trims_before_checking() {
        assert_eq!(normalize_url("  http://foo.com  "), "http://foo.com");
        assert_eq!(normalize_url("\texample.com\n"), "https://example.com");
    }

    #[test]
    fn test_normalize_url_prefix_check_is_syntactic() {
        // Anything starting with "http" is left alone, well-formed or not
        assert_eq!(normalize_url("httpfoo"), "httpfoo");
        assert_eq!(normalize_url("http-login.example"), "http-login.example");
    }

    #[test]
    fn test_normalize_url_other_schemes_get_prefixed() {
        assert_eq!(normalize_url("ftp://example.com"), "https://ftp://example.com");
    }

    #[test]
    fn test_normalize_url_with_path_and_port() {
        assert_eq!(
            normalize_url("example.com:8080/path?query=value"),
            "https://example.com:8080/path?query=value"
        );
    }

    #[test]
    fn test_normalize_url_is_case_sensitive() {
        // Upper-case schemes do not match the marker
        assert_eq!(normalize_url("HTTP://EXAMPLE.COM"), "https://HTTP://EXAMPLE.COM");
    }
}
