//! The file store.

use tracing::{debug, error, info, warn};

use super::error::FsError;
use super::record::FileRecord;
use crate::desktop::DesktopView;
use crate::storage::Storage;

/// Storage key the full record list is persisted under.
pub const STORAGE_KEY: &str = "virtualFileSystem";

/// Ordered, persisted store of file records.
///
/// Construct one per session with a storage port and a desktop port, then
/// call [`load`](Self::load). Every successful mutation writes the full
/// record list to storage and hands the full list to the desktop; callers
/// never see a state where the two disagree with memory.
pub struct FileSystem {
    files: Vec<FileRecord>,
    storage: Box<dyn Storage>,
    desktop: Box<dyn DesktopView>,
}

impl FileSystem {
    /// Create an empty store. Nothing is read until [`load`](Self::load).
    pub fn new(storage: impl Storage + 'static, desktop: impl DesktopView + 'static) -> Self {
        Self {
            files: Vec::new(),
            storage: Box::new(storage),
            desktop: Box::new(desktop),
        }
    }

    /// Populate the store from storage, then refresh the desktop.
    ///
    /// Missing, unreadable or malformed storage yields an empty store. Later
    /// duplicates of a name in the persisted list are dropped. Returns the
    /// number of records loaded.
    pub fn load(&mut self) -> usize {
        self.files = match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(snapshot)) => match serde_json::from_str::<Vec<FileRecord>>(&snapshot) {
                Ok(records) => dedup_names(records),
                Err(e) => {
                    warn!("unable to parse saved file system, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("unable to read saved file system, starting empty: {}", e);
                Vec::new()
            }
        };
        info!(files = self.files.len(), "file system loaded");
        self.desktop.refresh(&self.files);
        self.files.len()
    }

    /// Append a new file.
    ///
    /// Fails with [`FsError::AlreadyExists`] if the name is taken; the
    /// existing record is left untouched.
    pub fn create(&mut self, name: &str, content: &str) -> Result<String, FsError> {
        if self.contains(name) {
            return Err(FsError::AlreadyExists(name.to_string()));
        }
        self.files.push(FileRecord::new(name, content));
        self.commit();
        Ok(format!("File {} created", name))
    }

    /// Overwrite the content of an existing file.
    pub fn update(&mut self, name: &str, content: &str) -> Result<String, FsError> {
        let record = self
            .files
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        record.set_content(content);
        self.commit();
        Ok(format!("File {} updated", name))
    }

    /// Create the file if absent, otherwise overwrite it.
    pub fn write(&mut self, name: &str, content: &str) -> Result<String, FsError> {
        if self.contains(name) {
            self.update(name, content)
        } else {
            self.create(name, content)
        }
    }

    /// Remove a file.
    pub fn delete(&mut self, name: &str) -> Result<String, FsError> {
        let index = self
            .files
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        self.files.remove(index);
        self.commit();
        Ok(format!("File {} deleted", name))
    }

    /// Look up a file by name.
    pub fn get(&self, name: &str) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Check if a file exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All file names, in insertion order.
    pub fn list_names(&self) -> Vec<String> {
        self.files.iter().map(|f| f.name.clone()).collect()
    }

    /// All records, in insertion order.
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The JSON snapshot that storage holds after the last mutation.
    pub fn snapshot(&self) -> String {
        // Vec<FileRecord> of plain strings cannot fail to serialize.
        serde_json::to_string(&self.files).unwrap_or_else(|_| "[]".to_string())
    }

    /// Persist the full list and refresh the desktop.
    ///
    /// A failed write is logged; memory stays authoritative for the session.
    fn commit(&mut self) {
        let snapshot = self.snapshot();
        if let Err(e) = self.storage.set_item(STORAGE_KEY, &snapshot) {
            error!("failed to persist file system: {}", e);
        } else {
            debug!(files = self.files.len(), bytes = snapshot.len(), "file system persisted");
        }
        self.desktop.refresh(&self.files);
    }
}

impl std::fmt::Debug for FileSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSystem")
            .field("files", &self.list_names())
            .finish()
    }
}

/// Keep the first record for each name.
fn dedup_names(records: Vec<FileRecord>) -> Vec<FileRecord> {
    let mut kept: Vec<FileRecord> = Vec::with_capacity(records.len());
    for record in records {
        if kept.iter().any(|k| k.name == record.name) {
            warn!(name = %record.name, "dropping duplicate file in saved file system");
            continue;
        }
        kept.push(record);
    }
    kept
}
