//! Persistence for finished exports.
//!
//! The export core only produces strings; a `DocumentStorage` backend decides
//! where the bytes end up. The CLI uses `LocalStorage`.

pub mod local;

use std::path::PathBuf;

use crate::error::Result;
use crate::models::ExportDocument;

// Re-export for convenience
pub use local::LocalStorage;

/// Trait for export storage backends.
pub trait DocumentStorage {
    /// Persist the document under its generated file name.
    ///
    /// Returns the location the document was written to.
    fn save(&self, document: &ExportDocument) -> Result<PathBuf>;
}
