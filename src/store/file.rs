//! Flat-file store backend.
//!
//! The document lives in one JSON file. Writes go to a sibling temp file,
//! are fsynced, then renamed over the target so a concurrent `load` never
//! observes a partial write. No cross-process locking is attempted.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::document::StoreDocument;
use super::errors::{StoreError, StoreResult};
use super::seed::seed_document;
use super::Store;

/// Default location of the backing file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "./store_data.json";

/// File-backed [`Store`] implementation.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the file at `path`. The file is not touched
    /// until the first `load` or `ensure_initialized` call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store backed by the default data file.
    pub fn with_default_path() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the seed document if the backing file does not exist.
    ///
    /// Idempotent: an existing file is never overwritten, whatever its
    /// contents.
    pub fn ensure_initialized(&self) -> StoreResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        self.write_atomic(&seed_document())
    }

    fn write_atomic(&self, doc: &StoreDocument) -> StoreResult<()> {
        let bytes = serde_json::to_vec(doc)?;

        let tmp_path = self.path.with_extension("json.tmp");
        let mut tmp = File::create(&tmp_path).map_err(|e| StoreError::io(&tmp_path, e))?;
        tmp.write_all(&bytes)
            .map_err(|e| StoreError::io(&tmp_path, e))?;
        // fsync before rename, so the rename never exposes a short file
        tmp.sync_all().map_err(|e| StoreError::io(&tmp_path, e))?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))
    }
}

impl Store for FileStore {
    fn load(&self) -> StoreResult<StoreDocument> {
        self.ensure_initialized()?;

        let bytes = fs::read(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::corruption(&self.path, e.to_string()))
    }

    fn save(&self, doc: &StoreDocument) -> StoreResult<()> {
        self.write_atomic(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("store_data.json"))
    }

    #[test]
    fn load_seeds_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let doc = store.load().unwrap();
        assert_eq!(doc.products.len(), 2);
        assert!(doc.orders.is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn ensure_initialized_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut doc = store.load().unwrap();
        doc.products.clear();
        store.save(&doc).unwrap();

        store.ensure_initialized().unwrap();
        assert!(store.load().unwrap().products.is_empty());
    }

    #[test]
    fn malformed_file_is_corruption() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), b"not json {").unwrap();

        let err = store.load().unwrap_err();
        assert!(err.is_corruption());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&seed_document()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["store_data.json"]);
    }
}
