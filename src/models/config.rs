//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{DomainRegistry, FilterOptions};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Export document settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Content filter tuning
    #[serde(default)]
    pub filters: FilterConfig,

    /// Supported documentation sites, in match priority order
    #[serde(default = "default_sites")]
    pub sites: Vec<SiteConfig>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Serialize the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Compile the configured site list.
    pub fn registry(&self) -> Result<DomainRegistry> {
        DomainRegistry::from_sites(&self.sites)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.export.branding.trim().is_empty() {
            return Err(AppError::validation("export.branding is empty"));
        }
        if self.export.output_dir.trim().is_empty() {
            return Err(AppError::validation("export.output_dir is empty"));
        }
        if self.filters.availability_platforms.is_empty() {
            return Err(AppError::validation(
                "filters.availability_platforms is empty",
            ));
        }
        if self
            .filters
            .availability_platforms
            .iter()
            .any(|p| p.trim().is_empty())
        {
            return Err(AppError::validation(
                "filters.availability_platforms contains a blank name",
            ));
        }
        if self.sites.is_empty() {
            return Err(AppError::validation("No sites defined"));
        }
        self.registry()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: ExportConfig::default(),
            filters: FilterConfig::default(),
            sites: default_sites(),
        }
    }
}

/// Export document settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Name shown in the "Downloaded via" header line
    #[serde(default = "defaults::branding")]
    pub branding: String,

    /// Directory the CLI writes exports into
    #[serde(default = "defaults::output_dir")]
    pub output_dir: String,

    /// Filter stages enabled unless overridden on the command line
    #[serde(default = "FilterOptions::all")]
    pub filters: FilterOptions,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            branding: defaults::branding(),
            output_dir: defaults::output_dir(),
            filters: FilterOptions::all(),
        }
    }
}

/// Content filter tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Platform names recognized in availability notices
    #[serde(default = "defaults::availability_platforms")]
    pub availability_platforms: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            availability_platforms: defaults::availability_platforms(),
        }
    }
}

/// A documentation site entry. Exactly one of `prefix` and `pattern` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    /// Display name, also the base of generated file names
    pub name: String,

    /// URL must start with this string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// URL must match this regular expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl SiteConfig {
    fn prefix(name: &str, prefix: &str) -> Self {
        Self {
            name: name.to_string(),
            prefix: Some(prefix.to_string()),
            pattern: None,
        }
    }

    fn pattern(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            prefix: None,
            pattern: Some(pattern.to_string()),
        }
    }
}

/// Built-in documentation sites.
///
/// Apple Developer, Swift Package Index and GitHub Pages come first; the
/// order decides which name wins when several entries match.
pub fn default_sites() -> Vec<SiteConfig> {
    vec![
        SiteConfig::prefix("Apple Developer", "https://developer.apple.com"),
        SiteConfig::prefix("Swift Package Index", "https://swiftpackageindex.com/"),
        SiteConfig::pattern(
            "GitHub Pages (*.github.io)",
            r"^https?://[a-z0-9-]+\.github\.io(/|$)",
        ),
        SiteConfig::prefix("Swift.org", "https://www.swift.org/documentation"),
        SiteConfig::prefix("The Swift Programming Language", "https://docs.swift.org"),
        SiteConfig::prefix("Python", "https://docs.python.org"),
        SiteConfig::prefix("MDN Web Docs", "https://developer.mozilla.org"),
        SiteConfig::prefix("Rust", "https://doc.rust-lang.org"),
        SiteConfig::prefix("Docs.rs", "https://docs.rs/"),
        SiteConfig::prefix("Node.js", "https://nodejs.org/api"),
        SiteConfig::prefix("React", "https://react.dev"),
        SiteConfig::prefix("Next.js", "https://nextjs.org/docs"),
        SiteConfig::prefix("Vue.js", "https://vuejs.org"),
        SiteConfig::prefix("Angular", "https://angular.dev"),
        SiteConfig::prefix("Svelte", "https://svelte.dev/docs"),
        SiteConfig::prefix("TypeScript", "https://www.typescriptlang.org/docs"),
        SiteConfig::prefix("Go Packages", "https://pkg.go.dev"),
        SiteConfig::prefix("Kotlin", "https://kotlinlang.org/docs"),
        SiteConfig::prefix("Django", "https://docs.djangoproject.com"),
        SiteConfig::prefix("Flask", "https://flask.palletsprojects.com"),
        SiteConfig::prefix("FastAPI", "https://fastapi.tiangolo.com"),
        SiteConfig::prefix("PyTorch", "https://pytorch.org/docs"),
        SiteConfig::prefix("TensorFlow", "https://www.tensorflow.org/api_docs"),
        SiteConfig::prefix("NumPy", "https://numpy.org/doc"),
        SiteConfig::prefix("pandas", "https://pandas.pydata.org/docs"),
        SiteConfig::prefix("Tailwind CSS", "https://tailwindcss.com/docs"),
        SiteConfig::prefix("Docker", "https://docs.docker.com"),
        SiteConfig::prefix("Kubernetes", "https://kubernetes.io/docs"),
        SiteConfig::prefix("Terraform", "https://developer.hashicorp.com/terraform"),
        SiteConfig::prefix("AWS", "https://docs.aws.amazon.com"),
        SiteConfig::prefix("Google Cloud", "https://cloud.google.com/docs"),
        SiteConfig::prefix("Microsoft Learn", "https://learn.microsoft.com"),
        SiteConfig::prefix("PostgreSQL", "https://www.postgresql.org/docs"),
        SiteConfig::pattern(
            "Read the Docs (*.readthedocs.io)",
            r"^https?://[a-z0-9-]+\.readthedocs\.io(/|$)",
        ),
        SiteConfig::pattern(
            "GitLab Pages (*.gitlab.io)",
            r"^https?://[a-z0-9-]+\.gitlab\.io(/|$)",
        ),
    ]
}

mod defaults {
    pub fn branding() -> String {
        "docpack".into()
    }
    pub fn output_dir() -> String {
        "exports".into()
    }

    pub fn availability_platforms() -> Vec<String> {
        [
            "iOS",
            "iPadOS",
            "Mac Catalyst",
            "macOS",
            "tvOS",
            "visionOS",
            "watchOS",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
}
