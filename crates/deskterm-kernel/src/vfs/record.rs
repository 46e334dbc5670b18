//! File records and their persisted shape.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Kind tag of a record. Only plain files exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    #[default]
    File,
}

/// One virtual file.
///
/// Serializes as `{"name", "content", "type": "file", "created", "modified"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique, case-sensitive name. Acts as the primary key.
    pub name: String,
    /// File body. May be empty.
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: FileKind,
    /// Creation time, see [`timestamp`].
    pub created: String,
    /// Time of the last content write, see [`timestamp`].
    pub modified: String,
}

impl FileRecord {
    /// Create a record stamped with the current time.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let now = timestamp();
        Self {
            name: name.into(),
            content: content.into(),
            kind: FileKind::File,
            created: now.clone(),
            modified: now,
        }
    }

    /// Replace the content and bump `modified`.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.modified = timestamp();
    }

    /// Size of the content in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Current UTC time as ISO-8601 with millisecond precision, e.g.
/// `2024-05-01T12:00:00.000Z`. Fixed width, so lexical order is time order.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
