//! cat: Show file contents.

use crate::tools::CommandOutput;
use crate::vfs::{FileSystem, FsError};

/// `cat <name>`. Empty files show `(empty file)`.
pub fn run(name: &str, fs: &FileSystem) -> CommandOutput {
    match fs.get(name) {
        Some(record) if record.content.is_empty() => {
            CommandOutput::Message("(empty file)".to_string())
        }
        Some(record) => CommandOutput::Message(record.content.clone()),
        None => CommandOutput::from_store(Err(FsError::NotFound(name.to_string()))),
    }
}
