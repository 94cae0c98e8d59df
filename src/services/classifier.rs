// src/services/classifier.rs

//! URL classification against the documentation site registry.

use url::Url;

use crate::models::{DomainDescriptor, DomainRegistry};

/// Decides whether URLs belong to a supported documentation site.
#[derive(Debug, Clone, Default)]
pub struct UrlClassifier {
    registry: DomainRegistry,
}

impl UrlClassifier {
    /// Create a classifier over the given registry.
    pub fn new(registry: DomainRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &DomainRegistry {
        &self.registry
    }

    /// Check whether the URL is well-formed and served by a known site.
    pub fn is_valid(&self, url: &str) -> bool {
        if url.is_empty() || Url::parse(url).is_err() {
            return false;
        }
        self.registry.iter().any(|d| d.matches(url))
    }

    /// Find the first registered site recognizing the URL.
    pub fn classify(&self, url: &str) -> Option<&DomainDescriptor> {
        if url.is_empty() {
            return None;
        }
        self.registry.iter().find(|d| d.matches(url))
    }

    /// Label shown in help text, e.g. "35 supported documentation sites".
    pub fn supported_count_label(&self) -> String {
        format!("{} supported documentation sites", self.registry.len())
    }
}
