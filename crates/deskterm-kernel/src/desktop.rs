//! The desktop: a visual mirror of the file store.
//!
//! The store pushes its full record list into a [`DesktopView`] after load and
//! after every successful mutation. [`Desktop`] keeps that list as icons and
//! implements the two icon actions:
//!
//! - **activate**: show a read-only view of the file's contents
//! - **delete**: ask for confirmation, then delete through the store

use std::sync::{Arc, Mutex, MutexGuard};

use crate::vfs::{FileRecord, FileSystem, FsError};

/// Observer notified with the full record list.
///
/// Implementations replace whatever they showed before; there are no
/// incremental updates.
pub trait DesktopView: Send {
    fn refresh(&self, files: &[FileRecord]);
}

/// A desktop that shows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDesktop;

impl DesktopView for NoDesktop {
    fn refresh(&self, _files: &[FileRecord]) {}
}

/// One tile on the desktop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopIcon {
    /// File name, also the label under the icon.
    pub name: String,
    /// Content size in bytes.
    pub size: usize,
    pub modified: String,
}

impl DesktopIcon {
    fn from_record(record: &FileRecord) -> Self {
        Self {
            name: record.name.clone(),
            size: record.size(),
            modified: record.modified.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct Icons {
    icons: Vec<DesktopIcon>,
    generation: u64,
}

/// Shared icon list.
///
/// Cloning yields another handle onto the same icons: give one handle to the
/// store and keep one to draw from.
#[derive(Debug, Clone, Default)]
pub struct Desktop {
    inner: Arc<Mutex<Icons>>,
}

impl Desktop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current icons, in store order.
    pub fn icons(&self) -> Vec<DesktopIcon> {
        self.lock().icons.clone()
    }

    /// Current icon labels, in store order.
    pub fn names(&self) -> Vec<String> {
        self.lock().icons.iter().map(|i| i.name.clone()).collect()
    }

    /// Number of refreshes received so far.
    ///
    /// Hosts compare this against the last value they drew to know when the
    /// icon list needs redrawing.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Activation action: the read-only view of a file.
    ///
    /// Returns `None` if the file no longer exists.
    pub fn activate(&self, name: &str, fs: &FileSystem) -> Option<String> {
        let record = fs.get(name)?;
        let content = if record.content.is_empty() {
            "(empty)"
        } else {
            record.content.as_str()
        };
        Some(format!("File: {}\n\nContent:\n{}", name, content))
    }

    /// Secondary action: confirm, then delete.
    ///
    /// `confirm` receives the question `Delete <name>?`. Returns `None` when
    /// the user declines, otherwise the store's result.
    pub fn request_delete(
        &self,
        name: &str,
        fs: &mut FileSystem,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Option<Result<String, FsError>> {
        if !confirm(&format!("Delete {}?", name)) {
            return None;
        }
        Some(fs.delete(name))
    }

    fn lock(&self) -> MutexGuard<'_, Icons> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DesktopView for Desktop {
    fn refresh(&self, files: &[FileRecord]) {
        let mut inner = self.lock();
        inner.icons = files.iter().map(DesktopIcon::from_record).collect();
        inner.generation += 1;
        tracing::debug!(icons = inner.icons.len(), "desktop refreshed");
    }
}
