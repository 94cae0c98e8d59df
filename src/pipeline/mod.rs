//! Export pipeline.
//!
//! - `ContentFilter`: per-page link, availability and duplicate stripping
//! - `ExportAssembler`: header, page sections and file name for a whole export

pub mod export;
pub mod filter;

pub use export::ExportAssembler;
pub use filter::{ContentFilter, deduplicate_paragraphs, strip_links};
