//! Terminal commands: parsing, the command table and dispatch.
//!
//! A line is split on whitespace. The first token, lower-cased, names the
//! command; the rest are positional arguments. There is no quoting, no pipes,
//! no variables and no chaining.

pub mod builtin;
mod registry;
mod result;

pub use registry::Command;
pub use result::CommandOutput;

use thiserror::Error;

use crate::vfs::FileSystem;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Lower-cased command name.
    pub name: String,
    /// Positional arguments, in order.
    pub args: Vec<String>,
}

impl Invocation {
    /// Parse a line. Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?.to_lowercase();
        Some(Self {
            name,
            args: tokens.map(str::to_string).collect(),
        })
    }
}

/// Why a line could not be run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The command name is not in the table.
    #[error("Command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),

    /// Required arguments are missing. Displays the usage string.
    #[error("{0}")]
    Usage(&'static str),
}

/// Look up and run an invocation against the store.
pub fn dispatch(invocation: &Invocation, fs: &mut FileSystem) -> Result<CommandOutput, DispatchError> {
    let command = Command::lookup(&invocation.name)
        .ok_or_else(|| DispatchError::UnknownCommand(invocation.name.clone()))?;
    tracing::debug!(command = command.name(), args = invocation.args.len(), "dispatching");
    command.execute(&invocation.args, fs)
}
