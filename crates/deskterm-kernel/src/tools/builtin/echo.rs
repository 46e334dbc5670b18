//! echo: Print arguments.

use crate::tools::CommandOutput;

/// Join the arguments with single spaces.
pub fn run(args: &[String]) -> CommandOutput {
    CommandOutput::Message(args.join(" "))
}
