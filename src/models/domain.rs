// src/models/domain.rs

//! Documentation site descriptors and the ordered registry holding them.

use std::slice;

use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::SiteConfig;

/// Rule deciding whether a URL belongs to a documentation site.
#[derive(Debug, Clone)]
pub enum MatchRule {
    /// URL must start with this string
    LiteralPrefix(String),

    /// URL must contain a match for this expression
    Pattern(Regex),
}

impl MatchRule {
    /// Test the rule against a raw URL string.
    pub fn matches(&self, url: &str) -> bool {
        match self {
            MatchRule::LiteralPrefix(prefix) => url.starts_with(prefix.as_str()),
            MatchRule::Pattern(re) => re.is_match(url),
        }
    }

    /// Human-readable form of the rule, used in listings.
    pub fn describe(&self) -> String {
        match self {
            MatchRule::LiteralPrefix(prefix) => format!("prefix {prefix}"),
            MatchRule::Pattern(re) => format!("pattern {}", re.as_str()),
        }
    }
}

/// A registered documentation site.
#[derive(Debug, Clone)]
pub struct DomainDescriptor {
    /// Display name (e.g., "Apple Developer")
    pub name: String,

    /// How URLs of this site are recognized
    pub match_rule: MatchRule,
}

impl DomainDescriptor {
    pub fn prefix(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            match_rule: MatchRule::LiteralPrefix(prefix.into()),
        }
    }

    /// Compile a pattern-matched descriptor.
    pub fn pattern(name: impl Into<String>, pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|e| AppError::pattern(pattern, e))?;
        Ok(Self {
            name: name.into(),
            match_rule: MatchRule::Pattern(re),
        })
    }

    /// Build a descriptor from its configuration entry.
    pub fn from_site(site: &SiteConfig) -> Result<Self> {
        if site.name.trim().is_empty() {
            return Err(AppError::validation("site name is empty"));
        }
        match (&site.prefix, &site.pattern) {
            (Some(prefix), None) => Ok(Self::prefix(&site.name, prefix)),
            (None, Some(pattern)) => Self::pattern(&site.name, pattern),
            (Some(_), Some(_)) => Err(AppError::config(format!(
                "site '{}' sets both prefix and pattern",
                site.name
            ))),
            (None, None) => Err(AppError::config(format!(
                "site '{}' needs a prefix or a pattern",
                site.name
            ))),
        }
    }

    /// Whether this descriptor recognizes the URL.
    pub fn matches(&self, url: &str) -> bool {
        self.match_rule.matches(url)
    }
}

/// Ordered, read-only collection of documentation sites.
///
/// Order is significant: when several descriptors match a URL, the one
/// registered first wins.
#[derive(Debug, Clone)]
pub struct DomainRegistry {
    descriptors: Vec<DomainDescriptor>,
}

impl DomainRegistry {
    /// Create a registry from already-built descriptors, keeping their order.
    pub fn new(descriptors: Vec<DomainDescriptor>) -> Self {
        Self { descriptors }
    }

    /// Compile a registry from configuration entries.
    ///
    /// Fails on the first invalid entry.
    pub fn from_sites(sites: &[SiteConfig]) -> Result<Self> {
        let descriptors = sites
            .iter()
            .map(DomainDescriptor::from_site)
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Compiled {} documentation sites", descriptors.len());
        Ok(Self::new(descriptors))
    }

    /// Iterate descriptors in registration order.
    pub fn iter(&self) -> slice::Iter<'_, DomainDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for DomainRegistry {
    /// The built-in site list. Entries that fail to compile are skipped.
    fn default() -> Self {
        let descriptors = crate::models::config::default_sites()
            .iter()
            .filter_map(|site| {
                DomainDescriptor::from_site(site)
                    .inspect_err(|e| log::warn!("Skipping built-in site {}: {}", site.name, e))
                    .ok()
            })
            .collect();
        Self::new(descriptors)
    }
}

impl<'a> IntoIterator for &'a DomainRegistry {
    type Item = &'a DomainDescriptor;
    type IntoIter = slice::Iter<'a, DomainDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(name: &str, prefix: Option<&str>, pattern: Option<&str>) -> SiteConfig {
        SiteConfig {
            name: name.to_string(),
            prefix: prefix.map(String::from),
            pattern: pattern.map(String::from),
        }
    }

    #[test]
    fn test_prefix_rule_matches_start_only() {
        let rule = MatchRule::LiteralPrefix("https://docs.rs/".to_string());
        assert!(rule.matches("https://docs.rs/serde"));
        assert!(!rule.matches("see https://docs.rs/serde"));
    }

    #[test]
    fn test_pattern_rule() {
        let desc = DomainDescriptor::pattern("Pages", r"^https://[a-z0-9-]+\.github\.io(/|$)")
            .unwrap();
        assert!(desc.matches("https://pointfreeco.github.io/swift-composable-architecture/"));
        assert!(!desc.matches("https://github.com/pointfreeco"));
    }

    #[test]
    fn test_from_sites_preserves_order() {
        let sites = vec![
            site("First", Some("https://a.example"), None),
            site("Second", None, Some("example")),
        ];
        let registry = DomainRegistry::from_sites(&sites).unwrap();
        let names: Vec<_> = registry.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_from_sites_rejects_bad_pattern() {
        let sites = vec![site("Broken", None, Some("(unclosed"))];
        let err = DomainRegistry::from_sites(&sites).unwrap_err();
        assert!(matches!(err, AppError::Pattern { .. }));
    }

    #[test]
    fn test_from_sites_requires_exactly_one_rule() {
        assert!(DomainRegistry::from_sites(&[site("None", None, None)]).is_err());
        assert!(
            DomainRegistry::from_sites(&[site("Both", Some("https://x"), Some("x"))]).is_err()
        );
    }

    #[test]
    fn test_default_registry_compiles_every_builtin() {
        let registry = DomainRegistry::default();
        assert_eq!(
            registry.len(),
            crate::models::config::default_sites().len()
        );
        assert!(!registry.is_empty());
    }
}
