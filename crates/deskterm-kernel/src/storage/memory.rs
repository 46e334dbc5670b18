//! In-memory storage.
//!
//! Used for tests and throwaway sessions. All data is lost when the last
//! handle is dropped.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::traits::{Storage, StorageError};

/// In-memory key-value storage.
///
/// Cloning yields another handle onto the same map, so a test can keep one
/// handle while the store owns the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create a new empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-seeded with a single value.
    pub fn with_item(key: &str, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.lock().insert(key.to_string(), value.into());
        storage
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // Every mutation is a single insert or remove, so a poisoned map is still whole.
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
