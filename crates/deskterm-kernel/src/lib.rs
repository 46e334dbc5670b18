//! deskterm-kernel: the core of deskterm.
//!
//! This crate provides:
//!
//! - **VFS**: a flat, ordered store of named text files ([`vfs::FileSystem`])
//! - **Storage**: the persistence port the store snapshots into
//! - **Desktop**: the observer that mirrors the store as a list of icons
//! - **Tools**: the fixed command table (`ls`, `touch`, `write`, ...)
//! - **Terminal**: the interactive session: transcript, prompt, history recall
//!
//! Data flows one way: input → terminal → tools → store → storage + desktop.
//! The store never calls back into the terminal.

pub mod desktop;
pub mod paths;
pub mod storage;
pub mod terminal;
pub mod tools;
pub mod vfs;

pub use desktop::{Desktop, DesktopIcon, DesktopView, NoDesktop};
pub use storage::{DirStorage, MemoryStorage, Storage, StorageError};
pub use terminal::{Line, LineStyle, Phase, Submission, Terminal};
pub use tools::{Command, CommandOutput, DispatchError, Invocation};
pub use vfs::{FileKind, FileRecord, FileSystem, FsError, STORAGE_KEY};
