// src/services/filename.rs

//! Export file naming.
//!
//! Names look like `2025-06-14_apple-developer-documentation-swiftui-docs.md`:
//! a date stamp, then either the matched site's name plus up to two path
//! segments, or the hostname plus the first path segment.

use chrono::NaiveDate;
use url::Url;

use crate::services::UrlClassifier;

const FALLBACK_NAME: &str = "documentation.md";
const SUFFIX: &str = "-docs.md";

/// Derives dated, filesystem-safe file names for exports.
#[derive(Debug, Clone, Copy)]
pub struct FilenameGenerator<'a> {
    classifier: &'a UrlClassifier,
}

impl<'a> FilenameGenerator<'a> {
    pub fn new(classifier: &'a UrlClassifier) -> Self {
        Self { classifier }
    }

    /// Generate the file name for an export of `url` made on `today`.
    ///
    /// Never fails: unparseable URLs get `<date>_documentation.md`.
    pub fn generate(&self, url: &str, today: NaiveDate) -> String {
        let prefix = date_prefix(today);

        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::debug!("Unparseable export URL {url:?} ({e}), using generic name");
                return format!("{prefix}{FALLBACK_NAME}");
            }
        };
        let Some(host) = parsed.host_str() else {
            return format!("{prefix}{FALLBACK_NAME}");
        };

        let segments: Vec<&str> = parsed.path().split('/').filter(|s| !s.is_empty()).collect();

        if let Some(descriptor) = self.classifier.classify(url) {
            let base = slugify(&descriptor.name);
            return if segments.is_empty() {
                format!("{prefix}{base}{SUFFIX}")
            } else {
                let path = segments.iter().take(2).copied().collect::<Vec<_>>().join("-");
                format!("{prefix}{base}-{path}{SUFFIX}")
            };
        }

        // Unknown sites only use the first path segment.
        let host = host.replace('.', "-");
        match segments.first() {
            Some(first) => format!("{prefix}{host}-{first}{SUFFIX}"),
            None => format!("{prefix}{host}{SUFFIX}"),
        }
    }
}

/// `YYYY-MM-DD_`
fn date_prefix(today: NaiveDate) -> String {
    format!("{}_", today.format("%Y-%m-%d"))
}

/// Lowercase and replace every character outside `[a-z0-9]` with `-`.
///
/// Runs are not collapsed, so `"GitHub Pages (*.github.io)"` becomes
/// `"github-pages----github-io-"`.
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect()
}
