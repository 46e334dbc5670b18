//! Persistence port for the file store.
//!
//! Storage is a flat key-value space of strings, read and written as whole
//! snapshots. There are two backends:
//!
//! - **MemoryStorage**: ephemeral, shareable handle (tests, `--ephemeral` hosts)
//! - **DirStorage**: one file per key under a directory on the host
//!
//! Writes always replace the full value for a key; nothing is appended.

mod dir;
mod memory;
mod traits;

pub use dir::DirStorage;
pub use memory::MemoryStorage;
pub use traits::{Storage, StorageError};
