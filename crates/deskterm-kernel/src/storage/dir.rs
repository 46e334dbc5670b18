//! Directory-backed storage.
//!
//! Each key maps to `<root>/<key>.json`. Writes go to a sibling temp file and
//! are renamed into place, so a reader never observes a half-written snapshot.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::traits::{Storage, StorageError};

/// Directory-backed key-value storage.
///
/// The directory is created lazily on first write.
#[derive(Debug, Clone)]
pub struct DirStorage {
    root: PathBuf,
}

impl DirStorage {
    /// Create a storage rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a key to its backing file.
    ///
    /// Keys are plain identifiers; anything that could address outside the
    /// root is rejected.
    fn resolve(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl Storage for DirStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.resolve(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_err(&path)(e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.resolve(key)?;
        fs::create_dir_all(&self.root).map_err(io_err(&self.root))?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(io_err(&tmp))?;
        fs::rename(&tmp, &path).map_err(io_err(&path))?;
        tracing::trace!(key, bytes = value.len(), "storage snapshot written");
        Ok(())
    }
}
