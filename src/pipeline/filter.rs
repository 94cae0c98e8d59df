// src/pipeline/filter.rs

//! Per-page content filters.
//!
//! Stages always run in the same order so deduplication sees text that has
//! already lost its links and availability notices:
//!
//! 1. link stripping (`[text](target)` → `text`)
//! 2. availability notice stripping (`iOS 14.0+iPadOS 14.0+ ` → ``)
//! 3. paragraph deduplication

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::{FilterConfig, FilterOptions};

/// Matches Markdown links, capturing the link text.
///
/// The target ends at the first `)`, so a target that itself contains
/// parentheses leaves its tail behind.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());

/// Blank-line paragraph separator, LF or CRLF.
static PARAGRAPH_SEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n(?:[ \t\r]*\n)+").unwrap());

/// Availability notices for the default platform list.
static DEFAULT_AVAILABILITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    let platforms = FilterConfig::default().availability_platforms;
    Regex::new(&availability_pattern(&platforms)).unwrap()
});

/// Build the availability pattern for a list of platform names.
///
/// One or more `<Platform> <version>+` annotations in a row, each optionally
/// tagged `Beta` or `Deprecated`, plus trailing spaces (regular or
/// non-breaking). Newlines are never
/// consumed, so paragraph breaks around a notice survive.
fn availability_pattern(platforms: &[String]) -> String {
    let mut names: Vec<&str> = platforms
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    // Longest first so a platform never shadows a longer one sharing its start.
    names.sort_by_key(|n| std::cmp::Reverse(n.len()));
    let alternatives = names
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");

    let space = r"[ \t\x{a0}]";
    format!(
        r"(?:\b(?:{alternatives}){space}+\d+(?:\.\d+)*\+(?:{space}+(?:Beta|Deprecated)\b)?{space}*)+"
    )
}

/// Applies the enabled filter stages to page content.
#[derive(Debug, Clone)]
pub struct ContentFilter {
    availability: Regex,
}

impl ContentFilter {
    /// Create a filter recognizing the default platform names.
    pub fn new() -> Self {
        Self {
            availability: DEFAULT_AVAILABILITY_RE.clone(),
        }
    }

    /// Create a filter recognizing the given platform names.
    pub fn with_platforms(platforms: &[String]) -> Result<Self> {
        if platforms.iter().all(|p| p.trim().is_empty()) {
            return Err(AppError::config("no availability platforms configured"));
        }
        let pattern = availability_pattern(platforms);
        let availability = Regex::new(&pattern).map_err(|e| AppError::pattern(&pattern, e))?;
        Ok(Self { availability })
    }

    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        Self::with_platforms(&config.availability_platforms)
    }

    /// Run every enabled stage over one page's content.
    pub fn filter_page(&self, content: &str, options: &FilterOptions) -> String {
        let mut text = content.to_string();

        if options.filter_urls {
            text = strip_links(&text);
        }
        if options.filter_availability {
            text = self.strip_availability(&text);
        }
        if options.deduplicate_content {
            text = deduplicate_paragraphs(&text);
        }

        text
    }

    /// Remove platform availability notices.
    pub fn strip_availability(&self, content: &str) -> String {
        self.availability.replace_all(content, "").into_owned()
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace `[text](target)` with `text` everywhere.
pub fn strip_links(content: &str) -> String {
    LINK_RE.replace_all(content, "$1").into_owned()
}

/// Keep only the first occurrence of each paragraph.
///
/// Paragraphs are compared trimmed but emitted verbatim, each preceded by the
/// separator it had in the input. Blank paragraphs are never dropped.
pub fn deduplicate_paragraphs(content: &str) -> String {
    let mut blocks: Vec<(&str, &str)> = Vec::new();
    let mut separator = "";
    let mut start = 0;
    for sep in PARAGRAPH_SEP_RE.find_iter(content) {
        blocks.push((separator, &content[start..sep.start()]));
        separator = sep.as_str();
        start = sep.end();
    }
    blocks.push((separator, &content[start..]));

    let mut seen: HashSet<&str> = HashSet::new();
    let mut output = String::with_capacity(content.len());
    let mut kept_any = false;
    let mut dropped = 0usize;

    for (separator, paragraph) in blocks {
        let key = paragraph.trim();
        if !key.is_empty() && !seen.insert(key) {
            dropped += 1;
            continue;
        }
        if kept_any {
            output.push_str(separator);
        }
        output.push_str(paragraph);
        kept_any = true;
    }

    if dropped > 0 {
        log::debug!("Dropped {dropped} duplicate paragraph(s)");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_stages_are_identity() {
        let filter = ContentFilter::new();
        let content = "See [docs](https://x.test)\n\niOS 14.0+ Text\n\niOS 14.0+ Text";
        assert_eq!(filter.filter_page(content, &FilterOptions::default()), content);
    }

    #[test]
    fn test_strip_links() {
        let filter = ContentFilter::new();
        let options = FilterOptions {
            filter_urls: true,
            ..FilterOptions::default()
        };
        assert_eq!(
            filter.filter_page("Check [this link](https://example.com) for more info.", &options),
            "Check this link for more info."
        );
        assert_eq!(
            strip_links("[a](1) and [b](2), not [c] or (d)"),
            "a and b, not [c] or (d)"
        );
    }

    #[test]
    fn test_strip_availability() {
        let filter = ContentFilter::new();
        let out = filter.strip_availability("iOS 14.0+iPadOS 14.0+ This feature is available");
        assert_eq!(out, "This feature is available");
        assert!(!out.contains("iOS 14.0+"));
        assert!(!out.contains("iPadOS 14.0+"));
    }

    #[test]
    fn test_strip_availability_run_with_beta() {
        let filter = ContentFilter::new();
        assert_eq!(
            filter.strip_availability(
                "iOS 13.0+iPadOS 13.0+Mac Catalyst 13.0+macOS 10.15+visionOS 1.0+ Beta A view."
            ),
            "A view."
        );
    }

    #[test]
    fn test_strip_availability_with_non_breaking_space() {
        let filter = ContentFilter::new();
        assert_eq!(
            filter.strip_availability("iOS\u{a0}14.0+\u{a0}macOS\u{a0}11.0+ Text"),
            "Text"
        );
    }

    #[test]
    fn test_strip_availability_keeps_plain_versions() {
        let filter = ContentFilter::new();
        let text = "Requires version 14.0+ of the toolkit. iOS 14 added widgets.";
        assert_eq!(filter.strip_availability(text), text);
    }

    #[test]
    fn test_custom_platforms() {
        let filter = ContentFilter::with_platforms(&["Android".to_string()]).unwrap();
        assert_eq!(filter.strip_availability("Android 12+ Intro"), "Intro");
        assert_eq!(filter.strip_availability("iOS 14.0+ Intro"), "iOS 14.0+ Intro");
        assert!(ContentFilter::with_platforms(&[]).is_err());
    }

    #[test]
    fn test_deduplicate_paragraphs() {
        let out = deduplicate_paragraphs("Duplicate content\n\nUnique content\n\nDuplicate content");
        assert_eq!(out.matches("Duplicate content").count(), 1);
        assert!(out.contains("Unique content"));
        assert_eq!(out, "Duplicate content\n\nUnique content");
    }

    #[test]
    fn test_deduplicate_crlf_paragraphs() {
        let out = deduplicate_paragraphs("Dup\r\n\r\nUnique\r\n\r\nDup");
        assert_eq!(out.matches("Dup").count(), 1);
        assert_eq!(out, "Dup\r\n\r\nUnique");
        assert_eq!(
            deduplicate_paragraphs("a\r\nb\r\n \r\n\r\na\r\nb"),
            "a\r\nb"
        );
    }

    #[test]
    fn test_strip_links_target_with_parentheses() {
        assert_eq!(
            strip_links("[Foo](https://w.org/Foo_(bar)) end"),
            "Foo) end"
        );
    }

    #[test]
    fn test_deduplicate_keeps_order_and_separators() {
        let content = "A\n\nB\n  \nA \n\n\nC\n\nB";
        assert_eq!(deduplicate_paragraphs(content), "A\n\nB\n\n\nC");
    }

    #[test]
    fn test_deduplicate_does_not_merge_lines_within_paragraph() {
        let content = "line one\nline one\n\nline one";
        assert_eq!(deduplicate_paragraphs(content), "line one\nline one\n\nline one");
    }

    #[test]
    fn test_stage_order_dedup_sees_filtered_text() {
        let filter = ContentFilter::new();
        let content = "See [the guide](https://a.test)\n\nSee the guide\n\niOS 14.0+ Tip\n\nTip";
        assert_eq!(
            filter.filter_page(content, &FilterOptions::all()),
            "See the guide\n\nTip"
        );
    }
}
