//! Utility functions and helpers.

pub mod url;

pub use self::url::{extract_url_from_query, normalize_url};
