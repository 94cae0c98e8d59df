//! Service layer for docpack.
//!
//! This module contains the naming logic:
//! - URL classification against the site registry (`UrlClassifier`)
//! - Export file naming (`FilenameGenerator`)

mod classifier;
mod filename;

pub use classifier::UrlClassifier;
pub use filename::FilenameGenerator;
