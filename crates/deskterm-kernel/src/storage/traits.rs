//! Core storage trait and error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Key contains characters the backend cannot address.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Underlying host I/O failed.
    #[error("storage I/O on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Abstract key-value storage.
///
/// Values are complete snapshots: `set_item` overwrites whatever was there,
/// and `get_item` returns exactly what the last `set_item` wrote.
pub trait Storage: Send {
    /// Read the value stored under `key`, or `None` if nothing was ever written.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
