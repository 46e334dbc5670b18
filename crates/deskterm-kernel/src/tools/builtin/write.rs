//! write: Create or overwrite a file.

use crate::tools::CommandOutput;
use crate::vfs::FileSystem;

/// `write <name> <content...>`. Creates the file if absent, updates it otherwise.
pub fn run(name: &str, content: &[String], fs: &mut FileSystem) -> CommandOutput {
    CommandOutput::from_store(fs.write(name, &content.join(" ")))
}
