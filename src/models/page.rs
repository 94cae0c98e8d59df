//! Page and export data structures.

use serde::{Deserialize, Serialize};

/// A page fetched by the crawler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageResult {
    /// Page URL
    pub url: String,

    /// Extracted page text (Markdown)
    #[serde(default)]
    pub content: String,
}

impl PageResult {
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: content.into(),
        }
    }

    /// Whether the page carries any non-whitespace text.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Load a list of pages from a JSON file.
    pub fn load_all(path: impl AsRef<std::path::Path>) -> crate::error::Result<Vec<Self>> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Which filter stages run on each page.
///
/// The derived default disables every stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Rewrite `[text](target)` links to their text
    #[serde(default)]
    pub filter_urls: bool,

    /// Drop repeated paragraphs
    #[serde(default)]
    pub deduplicate_content: bool,

    /// Strip platform availability notices such as `iOS 14.0+`
    #[serde(default)]
    pub filter_availability: bool,
}

impl FilterOptions {
    /// Every stage enabled.
    pub fn all() -> Self {
        Self {
            filter_urls: true,
            deduplicate_content: true,
            filter_availability: true,
        }
    }
}

/// Page counts reported in the export header.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub total_pages: usize,
    pub pages_with_content: usize,
}

/// Assembled document ready to be saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportDocument {
    /// Full Markdown text
    pub text: String,

    /// Suggested file name
    pub filename: String,

    pub stats: ExportStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_content() {
        assert!(PageResult::new("https://a", "x").has_content());
        assert!(!PageResult::new("https://a", "").has_content());
        assert!(!PageResult::new("https://a", " \n\t ").has_content());
    }

    #[test]
    fn test_pages_from_json_without_content() {
        let pages: Vec<PageResult> =
            serde_json::from_str(r#"[{"url": "https://a"}, {"url": "https://b", "content": "B"}]"#)
                .unwrap();
        assert_eq!(pages[0].content, "");
        assert_eq!(pages[1], PageResult::new("https://b", "B"));
    }

    #[test]
    fn test_load_all_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages.json");
        std::fs::write(&path, r#"[{"url": "https://a", "content": "A"}]"#).unwrap();

        let pages = PageResult::load_all(&path).unwrap();
        assert_eq!(pages, vec![PageResult::new("https://a", "A")]);
    }

    #[test]
    fn test_filter_options_defaults() {
        let none = FilterOptions::default();
        assert!(!none.filter_urls && !none.deduplicate_content && !none.filter_availability);

        let partial: FilterOptions = toml::from_str("filter_urls = true").unwrap();
        assert!(partial.filter_urls);
        assert!(!partial.deduplicate_content);
    }
}
