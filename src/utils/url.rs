// src/utils/url.rs

//! URL manipulation utilities.

use percent_encoding::percent_decode_str;
use url::Url;

/// Pull a documentation URL out of a (possibly percent-encoded) query string.
///
/// # Examples
/// ```
/// use docpack::utils::url::extract_url_from_query;
///
/// assert_eq!(
///     extract_url_from_query("https%3A%2F%2Fdocs.rs%2Fserde"),
///     Some("https://docs.rs/serde".to_string())
/// );
/// assert_eq!(extract_url_from_query("key=value"), None);
/// ```
pub fn extract_url_from_query(query: &str) -> Option<String> {
    if query.is_empty() {
        return None;
    }

    let decoded = percent_decode_str(query).decode_utf8_lossy();
    if decoded.starts_with("http://") || decoded.starts_with("https://") {
        Some(decoded.into_owned())
    } else {
        None
    }
}

/// Drop query and fragment, and a trailing slash unless the path is `/`.
///
/// Unparseable input is returned unchanged.
///
/// # Examples
/// ```
/// use docpack::utils::url::normalize_url;
///
/// assert_eq!(
///     normalize_url("https://example.com/docs/?tab=1#intro"),
///     "https://example.com/docs"
/// );
/// ```
pub fn normalize_url(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };
    parsed.set_query(None);
    parsed.set_fragment(None);

    let normalized = parsed.to_string();
    if parsed.path() != "/" {
        if let Some(stripped) = normalized.strip_suffix('/') {
            return stripped.to_string();
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_url() {
        assert_eq!(
            extract_url_from_query("https://developer.apple.com/documentation/swiftui"),
            Some("https://developer.apple.com/documentation/swiftui".to_string())
        );
    }

    #[test]
    fn test_extract_encoded_url() {
        assert_eq!(
            extract_url_from_query("https%3A%2F%2Fdeveloper.apple.com%2Fdocumentation%2Fswiftui"),
            Some("https://developer.apple.com/documentation/swiftui".to_string())
        );
    }

    #[test]
    fn test_extract_rejects_non_urls() {
        assert_eq!(extract_url_from_query(""), None);
        assert_eq!(extract_url_from_query("random-string"), None);
        assert_eq!(extract_url_from_query("key=value"), None);
        assert_eq!(extract_url_from_query("ftp://example.com"), None);
    }

    #[test]
    fn test_normalize_strips_query_fragment_and_slash() {
        assert_eq!(
            normalize_url("https://pointfreeco.github.io/swift-composable-architecture/#top"),
            "https://pointfreeco.github.io/swift-composable-architecture"
        );
        assert_eq!(
            normalize_url("https://docs.rs/serde?search=derive"),
            "https://docs.rs/serde"
        );
    }

    #[test]
    fn test_normalize_keeps_root_slash() {
        assert_eq!(normalize_url("https://example.com/"), "https://example.com/");
        assert_eq!(normalize_url("https://example.com"), "https://example.com/");
    }

    #[test]
    fn test_normalize_leaves_garbage_alone() {
        assert_eq!(normalize_url("not-a-url"), "not-a-url");
    }
}
