//! rm: Delete a file.

use crate::tools::CommandOutput;
use crate::vfs::FileSystem;

/// `rm <name>`. Extra arguments never reach here.
pub fn run(name: &str, fs: &mut FileSystem) -> CommandOutput {
    CommandOutput::from_store(fs.delete(name))
}
