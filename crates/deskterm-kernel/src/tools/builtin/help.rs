//! help: Show available commands.

use crate::tools::CommandOutput;

const HELP_TEXT: &str = "Available commands:
  ls                    - List files
  touch <file> [content] - Create a file (optionally with content)
  write <file> <content> - Write content to a file (creates if doesn't exist)
  rm <file>            - Delete a file
  cat <file>           - View file contents
  echo <text>          - Print text
  clear                - Clear terminal
  help                 - Show this help

Tip: Files created with 'touch' or 'write' will appear on the desktop.
     Double-click desktop files to view them, or right-click to delete.";

pub fn run() -> CommandOutput {
    CommandOutput::Listing(HELP_TEXT.to_string())
}
