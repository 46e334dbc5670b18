//! Virtual File System (VFS) for deskterm.
//!
//! The VFS is a flat list of named text files. There are no directories,
//! no permissions and no streaming; a file is a name, a body of text and two
//! timestamps.
//!
//! # Design
//!
//! ```text
//! FileSystem ──(full snapshot on every mutation)──▶ Storage["virtualFileSystem"]
//!      │
//!      └──────(full record list on load + every mutation)──▶ DesktopView
//! ```
//!
//! Records keep insertion order, and that order is what `ls` and the desktop
//! show. Names are unique (case-sensitive).

mod error;
mod record;
mod store;

pub use error::FsError;
pub use record::{FileKind, FileRecord, timestamp};
pub use store::{FileSystem, STORAGE_KEY};
