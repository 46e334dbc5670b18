//! ls: List files.

use crate::tools::CommandOutput;
use crate::vfs::FileSystem;

/// List every file name in store order, two spaces apart.
pub fn run(fs: &FileSystem) -> CommandOutput {
    let names = fs.list_names();
    if names.is_empty() {
        return CommandOutput::Message("No files found".to_string());
    }
    CommandOutput::Message(names.join("  "))
}
