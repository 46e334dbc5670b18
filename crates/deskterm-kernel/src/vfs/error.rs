//! Errors surfaced by store operations.

use thiserror::Error;

/// Failure of a store mutation or lookup.
///
/// The `Display` text is what the terminal shows after `Error: `.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// `create` on a name that is already taken.
    #[error("File {0} already exists")]
    AlreadyExists(String),

    /// `update`, `delete` or a read on a name that is not present.
    #[error("File {0} not found")]
    NotFound(String),
}
