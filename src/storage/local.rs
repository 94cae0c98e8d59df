//! Local filesystem storage implementation.
//!
//! ## Storage Layout
//!
//! ```text
//! {root}/
//! ├── 2025-06-14_apple-developer-documentation-swiftui-docs.md
//! └── 2025-06-14_example-com-docs.md
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::ExportDocument;
use crate::storage::DocumentStorage;

/// Writes exports as Markdown files into a directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Get the full path for a file name, refusing anything but a bare name.
    fn path(&self, file_name: &str) -> Result<PathBuf> {
        let is_bare = !file_name.is_empty()
            && Path::new(file_name).file_name().and_then(|n| n.to_str()) == Some(file_name);
        if !is_bare {
            return Err(AppError::validation(format!(
                "refusing to write export to '{file_name}'"
            )));
        }
        Ok(self.root_dir.join(file_name))
    }

    /// Write bytes atomically (write to temp, then rename).
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.root_dir)?;

        let tmp = path.with_extension("tmp");
        let written = Self::write_file(&tmp, bytes).and_then(|()| Ok(fs::rename(&tmp, path)?));
        if written.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        written
    }

    fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = fs::File::create(path)?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(())
    }
}

impl DocumentStorage for LocalStorage {
    fn save(&self, document: &ExportDocument) -> Result<PathBuf> {
        let path = self.path(&document.filename)?;
        self.write_bytes(&path, document.text.as_bytes())?;
        log::info!(
            "Saved {} bytes to {}",
            document.text.len(),
            path.display()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExportStats;

    fn document(filename: &str) -> ExportDocument {
        ExportDocument {
            text: "# Title\n\nBody\n".to_string(),
            filename: filename.to_string(),
            stats: ExportStats::default(),
        }
    }

    #[test]
    fn test_save_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().join("exports"));

        let path = storage.save(&document("2025-06-14_example-com-docs.md")).unwrap();

        assert_eq!(path, dir.path().join("exports/2025-06-14_example-com-docs.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Title\n\nBody\n");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        storage.save(&document("a.md")).unwrap();

        let mut second = document("a.md");
        second.text = "new".to_string();
        let path = storage.save(&second).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        // A directory already occupies the target name, so the rename fails.
        fs::create_dir(dir.path().join("taken.md")).unwrap();

        assert!(storage.save(&document("taken.md")).is_err());
        assert!(!dir.path().join("taken.tmp").exists());
    }

    #[test]
    fn test_rejects_path_like_names() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        assert!(storage.save(&document("../escape.md")).is_err());
        assert!(storage.save(&document("")).is_err());
    }
}
