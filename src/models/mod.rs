// src/models/mod.rs

//! Domain models for docpack.
//!
//! Configuration, documentation site descriptors, and the page/export
//! data passed through the pipeline.

pub(crate) mod config;
mod domain;
mod page;

// Re-export all public types
pub use config::{Config, ExportConfig, FilterConfig, SiteConfig, default_sites};
pub use domain::{DomainDescriptor, DomainRegistry, MatchRule};
pub use page::{ExportDocument, ExportStats, FilterOptions, PageResult};
