//! The fixed command table.

use super::DispatchError;
use super::builtin;
use super::result::CommandOutput;
use crate::vfs::FileSystem;

/// Every command the terminal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Ls,
    Touch,
    Write,
    Rm,
    Cat,
    Echo,
    Clear,
    Help,
}

impl Command {
    /// All commands, in help order.
    pub const ALL: [Command; 8] = [
        Command::Ls,
        Command::Touch,
        Command::Write,
        Command::Rm,
        Command::Cat,
        Command::Echo,
        Command::Clear,
        Command::Help,
    ];

    /// Look up a command by its (already lower-cased) name.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// The name typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Command::Ls => "ls",
            Command::Touch => "touch",
            Command::Write => "write",
            Command::Rm => "rm",
            Command::Cat => "cat",
            Command::Echo => "echo",
            Command::Clear => "clear",
            Command::Help => "help",
        }
    }

    /// Number of required positional arguments.
    pub fn min_args(self) -> usize {
        match self {
            Command::Touch | Command::Rm | Command::Cat => 1,
            Command::Write => 2,
            Command::Ls | Command::Echo | Command::Clear | Command::Help => 0,
        }
    }

    /// Usage line shown when required arguments are missing.
    pub fn usage(self) -> Option<&'static str> {
        match self {
            Command::Touch => Some("Usage: touch <filename>"),
            Command::Write => Some("Usage: write <file> <content>"),
            Command::Rm => Some("Usage: rm <filename>"),
            Command::Cat => Some("Usage: cat <filename>"),
            Command::Ls | Command::Echo | Command::Clear | Command::Help => None,
        }
    }

    /// Reject argument lists shorter than [`min_args`](Self::min_args).
    pub fn check_arity(self, args: &[String]) -> Result<(), DispatchError> {
        if args.len() < self.min_args() {
            return Err(self.usage_error());
        }
        Ok(())
    }

    fn usage_error(self) -> DispatchError {
        DispatchError::Usage(self.usage().unwrap_or_default())
    }

    /// Run the command, or report its usage if required arguments are missing.
    pub fn execute(
        self,
        args: &[String],
        fs: &mut FileSystem,
    ) -> Result<CommandOutput, DispatchError> {
        self.check_arity(args)?;
        let output = match (self, args) {
            (Command::Ls, _) => builtin::ls::run(fs),
            (Command::Touch, [name, content @ ..]) => builtin::touch::run(name, content, fs),
            (Command::Write, [name, content @ ..]) => builtin::write::run(name, content, fs),
            (Command::Rm, [name, ..]) => builtin::rm::run(name, fs),
            (Command::Cat, [name, ..]) => builtin::cat::run(name, fs),
            (Command::Echo, _) => builtin::echo::run(args),
            (Command::Clear, _) => CommandOutput::Clear,
            (Command::Help, _) => builtin::help::run(),
            (Command::Touch | Command::Write | Command::Rm | Command::Cat, _) => {
                return Err(self.usage_error());
            }
        };
        Ok(output)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn lookup_round_trips_every_name() {
        for command in Command::ALL {
            assert_eq!(Command::lookup(command.name()), Some(command));
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(Command::lookup("LS"), None);
        assert_eq!(Command::lookup("l"), None);
        assert_eq!(Command::lookup(""), None);
    }

    #[test]
    fn commands_with_required_args_have_usage() {
        for command in Command::ALL {
            assert_eq!(
                command.min_args() > 0,
                command.usage().is_some(),
                "{command}"
            );
        }
    }

    #[rstest]
    #[case::touch_none(Command::Touch, &[], false)]
    #[case::touch_one(Command::Touch, &["a"], true)]
    #[case::write_one(Command::Write, &["a"], false)]
    #[case::write_two(Command::Write, &["a", "b"], true)]
    #[case::rm_none(Command::Rm, &[], false)]
    #[case::cat_none(Command::Cat, &[], false)]
    #[case::ls_none(Command::Ls, &[], true)]
    #[case::echo_none(Command::Echo, &[], true)]
    #[case::help_extra(Command::Help, &["x"], true)]
    fn arity(#[case] command: Command, #[case] args: &[&str], #[case] ok: bool) {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        assert_eq!(command.check_arity(&args).is_ok(), ok);
    }

    #[test]
    fn execute_short_args_is_usage() {
        let mut fs = crate::tools::builtin::test_support::make_fs();
        let args = vec!["only-a-name".to_string()];
        assert_eq!(
            Command::Write.execute(&args, &mut fs),
            Err(DispatchError::Usage("Usage: write <file> <content>"))
        );
        assert!(fs.is_empty());
    }
}
