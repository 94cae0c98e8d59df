// src/pipeline/export.rs

//! Export document assembly.

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{Config, ExportDocument, ExportStats, FilterOptions, PageResult};
use crate::pipeline::ContentFilter;
use crate::services::{FilenameGenerator, UrlClassifier};

const DEFAULT_BRANDING: &str = "docpack";

/// Combines filtered pages into a single Markdown document.
#[derive(Debug, Clone)]
pub struct ExportAssembler {
    classifier: UrlClassifier,
    filter: ContentFilter,
    branding: String,
}

impl ExportAssembler {
    /// Create an assembler from its collaborators.
    pub fn new(classifier: UrlClassifier, filter: ContentFilter) -> Self {
        Self {
            classifier,
            filter,
            branding: DEFAULT_BRANDING.to_string(),
        }
    }

    /// Build an assembler from configuration, compiling sites and filters.
    pub fn from_config(config: &Config) -> Result<Self> {
        let classifier = UrlClassifier::new(config.registry()?);
        let filter = ContentFilter::from_config(&config.filters)?;
        Ok(Self::new(classifier, filter).with_branding(&config.export.branding))
    }

    /// Set the name shown in the "Downloaded via" header line.
    pub fn with_branding(mut self, branding: impl Into<String>) -> Self {
        self.branding = branding.into();
        self
    }

    pub fn classifier(&self) -> &UrlClassifier {
        &self.classifier
    }

    /// Assemble the export for `source_url` from crawled pages.
    ///
    /// Pages are emitted in the order given. Pages without content are left
    /// out of the body but still counted as processed.
    pub fn assemble(
        &self,
        source_url: &str,
        pages: &[PageResult],
        options: &FilterOptions,
        today: NaiveDate,
    ) -> ExportDocument {
        let mut sections = Vec::new();

        for page in pages {
            if !page.has_content() {
                log::debug!("Skipping empty page {}", page.url);
                continue;
            }

            let filtered = self.filter.filter_page(&page.content, options);
            let body = filtered.trim_end();
            if body.trim().is_empty() {
                sections.push(format!("# {}", page.url));
            } else {
                sections.push(format!("# {}\n\n{}", page.url, body));
            }
        }

        let stats = ExportStats {
            total_pages: pages.len(),
            pages_with_content: sections.len(),
        };

        let mut text = self.header(source_url, &stats);
        for section in &sections {
            text.push_str("\n\n");
            text.push_str(section);
        }
        text.push('\n');

        let filename = FilenameGenerator::new(&self.classifier).generate(source_url, today);

        log::info!(
            "Assembled {} ({} of {} pages with content)",
            filename,
            stats.pages_with_content,
            stats.total_pages
        );

        ExportDocument {
            text,
            filename,
            stats,
        }
    }

    fn header(&self, source_url: &str, stats: &ExportStats) -> String {
        format!(
            "<!--\nDownloaded via {}\nSource URL: {}\nTotal pages processed: {}\nPages with content: {}\n-->",
            self.branding, source_url, stats.total_pages, stats.pages_with_content
        )
    }
}

impl Default for ExportAssembler {
    fn default() -> Self {
        Self::new(UrlClassifier::default(), ContentFilter::default())
    }
}
