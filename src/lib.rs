// src/lib.rs

//! docpack Library
//!
//! Bundles crawled documentation pages into one Markdown export and names
//! the file after the documentation site it came from.
//!
//! ```
//! use chrono::NaiveDate;
//! use docpack::{ExportAssembler, FilterOptions, PageResult};
//!
//! let pages = vec![PageResult::new(
//!     "https://developer.apple.com/documentation/swiftui/view",
//!     "iOS 13.0+ A type that represents part of your app's user interface.",
//! )];
//! let today = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
//!
//! let doc = ExportAssembler::default().assemble(
//!     "https://developer.apple.com/documentation/swiftui",
//!     &pages,
//!     &FilterOptions::all(),
//!     today,
//! );
//! assert_eq!(doc.filename, "2025-06-14_apple-developer-documentation-swiftui-docs.md");
//! assert!(doc.text.contains("\nA type that represents part of your app's user interface.\n"));
//! ```

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;

pub use models::{
    Config, DomainDescriptor, DomainRegistry, ExportDocument, ExportStats, FilterOptions,
    MatchRule, PageResult,
};
pub use pipeline::{ContentFilter, ExportAssembler};
pub use services::{FilenameGenerator, UrlClassifier};
