//! CommandOutput: what a command hands back to the terminal.

use crate::vfs::FsError;

/// The result of running a command.
///
/// Nothing is rendered here; the terminal decides styling from the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text styled by content: error if it mentions `Error:`, success if it
    /// mentions `created`, `deleted` or `updated`, plain otherwise.
    Message(String),
    /// Plain multi-line text, never styled by content.
    Listing(String),
    /// Wipe the transcript.
    Clear,
}

impl CommandOutput {
    /// Wrap a store result: the success message, or `Error: <reason>`.
    pub fn from_store(result: Result<String, FsError>) -> Self {
        match result {
            Ok(message) => CommandOutput::Message(message),
            Err(e) => CommandOutput::Message(format!("Error: {}", e)),
        }
    }

    /// The text carried, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            CommandOutput::Message(s) | CommandOutput::Listing(s) => Some(s),
            CommandOutput::Clear => None,
        }
    }
}
