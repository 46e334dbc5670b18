//! deskterm REPL: an interactive terminal over the virtual file store.
//!
//! Lines typed at the `$ ` prompt go to the kernel's [`Terminal`]. Lines
//! starting with `/` are meta-commands for the host:
//!
//! - `/help`, `/quit`
//! - `/desktop`: show the desktop icons
//! - `/open <file>`: the desktop's read-only file view
//! - `/trash <file>`: the desktop's confirm-then-delete action
//! - `/history`: commands entered this session

pub mod cli;
pub mod config;

use std::io::{self, Write as _};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

use deskterm_kernel::terminal::PROMPT;
use deskterm_kernel::{
    Desktop, DirStorage, FileSystem, Line, LineStyle, MemoryStorage, Storage, Terminal,
};

pub use config::ReplConfig;

/// ANSI sequence to wipe the screen and home the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

type Confirm = Box<dyn FnMut(&str) -> bool>;

/// REPL state: one store, one desktop, one terminal.
pub struct Repl {
    fs: FileSystem,
    desktop: Desktop,
    terminal: Terminal,
    config: ReplConfig,
    /// Desktop generation last printed.
    drawn: u64,
    confirm: Confirm,
    quit: bool,
}

impl Repl {
    /// Create a REPL whose storage is chosen by the config.
    pub fn new(config: ReplConfig) -> Self {
        if config.ephemeral {
            Self::with_storage(config, MemoryStorage::new())
        } else {
            let storage = DirStorage::new(&config.storage_dir);
            Self::with_storage(config, storage)
        }
    }

    /// Create a REPL over the given storage and load the store from it.
    pub fn with_storage(config: ReplConfig, storage: impl Storage + 'static) -> Self {
        let desktop = Desktop::new();
        let mut fs = FileSystem::new(storage, desktop.clone());
        fs.load();
        Self {
            fs,
            // The initial load is drawn by `open`.
            drawn: desktop.generation(),
            desktop,
            terminal: Terminal::new(),
            config,
            confirm: Box::new(|_| false),
            quit: false,
        }
    }

    /// Replace the yes/no question used by `/trash`. Defaults to always "no".
    pub fn set_confirm(&mut self, confirm: impl FnMut(&str) -> bool + 'static) {
        self.confirm = Box::new(confirm);
    }

    /// Open the terminal window: the welcome banner and the desktop.
    pub fn open(&mut self) -> String {
        self.terminal.open();
        let mut out: Vec<String> = self
            .terminal
            .transcript()
            .iter()
            .map(|line| render_line(line, self.config.color))
            .collect();
        if self.config.show_desktop {
            out.push(self.render_desktop_row());
        }
        out.join("\n")
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn fs(&self) -> &FileSystem {
        &self.fs
    }

    pub fn desktop(&self) -> &Desktop {
        &self.desktop
    }

    /// True once `/quit` has been entered.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Process a single line of input.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>> {
        let trimmed = line.trim();

        if trimmed.starts_with('/') {
            return self.handle_meta_command(trimmed);
        }

        self.terminal.set_input(line);
        let submission = self.terminal.submit(&mut self.fs);

        let mut out: Vec<String> = submission
            .lines
            .iter()
            .map(|l| render_line(l, self.config.color))
            .collect();
        if submission.cleared {
            out.insert(0, CLEAR_SCREEN.to_string());
        }
        if let Some(row) = self.desktop_row_if_changed() {
            out.push(row);
        }

        Ok(if out.is_empty() {
            None
        } else {
            Some(out.join("\n"))
        })
    }

    /// Handle a meta-command (starts with /).
    fn handle_meta_command(&mut self, cmd: &str) -> Result<Option<String>> {
        let parts: Vec<&str> = cmd.split_whitespace().collect();
        let command = parts.first().copied().unwrap_or("");
        let arg = parts.get(1).copied();

        match (command, arg) {
            ("/quit" | "/q" | "/exit", _) => {
                self.quit = true;
                Ok(None)
            }
            ("/help" | "/h" | "/?", _) => Ok(Some(HELP_TEXT.trim_end().to_string())),
            ("/desktop", _) => {
                let icons = self.desktop.icons();
                if icons.is_empty() {
                    return Ok(Some("(no files on the desktop)".to_string()));
                }
                let lines: Vec<String> = icons
                    .iter()
                    .map(|i| format!("  {}  ({} bytes, modified {})", i.name, i.size, i.modified))
                    .collect();
                Ok(Some(lines.join("\n")))
            }
            ("/open", Some(name)) => Ok(Some(
                self.desktop
                    .activate(name, &self.fs)
                    .unwrap_or_else(|| format!("No such file: {}", name)),
            )),
            ("/trash", Some(name)) => {
                let confirm = &mut self.confirm;
                let out = match self.desktop.request_delete(name, &mut self.fs, |q| confirm(q)) {
                    None => "Cancelled".to_string(),
                    Some(Ok(message)) => render_line(&Line::success(message), self.config.color),
                    Some(Err(e)) => {
                        render_line(&Line::error(format!("Error: {}", e)), self.config.color)
                    }
                };
                Ok(Some(match self.desktop_row_if_changed() {
                    Some(row) => format!("{}\n{}", out, row),
                    None => out,
                }))
            }
            ("/open" | "/trash", None) => Ok(Some(format!("Usage: {} <file>", command))),
            ("/history", _) => {
                let history = self.terminal.history();
                if history.is_empty() {
                    return Ok(Some("(no history)".to_string()));
                }
                let lines: Vec<String> = history
                    .iter()
                    .enumerate()
                    .map(|(i, c)| format!("{:>4}  {}", i + 1, c))
                    .collect();
                Ok(Some(lines.join("\n")))
            }
            _ => Ok(Some(format!(
                "Unknown command: {}\nType /help for available commands.",
                command
            ))),
        }
    }

    fn desktop_row_if_changed(&mut self) -> Option<String> {
        if !self.config.show_desktop || self.desktop.generation() == self.drawn {
            return None;
        }
        Some(self.render_desktop_row())
    }

    fn render_desktop_row(&mut self) -> String {
        self.drawn = self.desktop.generation();
        let names = self.desktop.names();
        let row = if names.is_empty() {
            "[desktop] (empty)".to_string()
        } else {
            format!("[desktop] {}", names.join("  "))
        };
        if self.config.color {
            row.dimmed().to_string()
        } else {
            row
        }
    }
}

/// Render one transcript line for a text terminal.
pub fn render_line(line: &Line, color: bool) -> String {
    if !color {
        return match line.style {
            LineStyle::Input => format!("{}{}", PROMPT, line.text),
            _ => line.text.clone(),
        };
    }
    match line.style {
        LineStyle::Output => line.text.clone(),
        LineStyle::Error => line.text.red().to_string(),
        LineStyle::Success => line.text.green().to_string(),
        LineStyle::Input => format!("{}{}", PROMPT, line.text.bold()),
    }
}

const HELP_TEXT: &str = r#"deskterm: a terminal over a persisted virtual file store

Terminal commands (type 'help' for details):
  ls, touch, write, rm, cat, echo, clear, help

Meta commands:
  /help, /h, /?     Show this help
  /quit, /q, /exit  Exit
  /desktop          Show desktop icons
  /open <file>      View a file as the desktop shows it
  /trash <file>     Delete a file from the desktop (asks first)
  /history          Commands entered this session
"#;

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is no.
fn ask_stdin(question: &str) -> bool {
    print!("{} [y/N] ", question);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

/// Line editor settings. Repeated commands each get their own history entry,
/// matching the terminal's recall.
fn editor_config() -> Result<Config> {
    Ok(Config::builder()
        .history_ignore_dups(false)
        .context("configuring editor history")?
        .auto_add_history(false)
        .build())
}

/// Run the REPL.
pub fn run(config: ReplConfig) -> Result<()> {
    tracing::info!(
        storage = %config.storage_dir.display(),
        ephemeral = config.ephemeral,
        "starting deskterm"
    );

    // History lives only in memory: each launch starts a fresh session.
    let mut rl =
        DefaultEditor::with_config(editor_config()?).context("Failed to create editor")?;

    let mut repl = Repl::new(config);
    repl.set_confirm(ask_stdin);
    println!("{}", repl.open());

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() && !line.trim_start().starts_with('/') {
                    let _ = rl.add_history_entry(line.trim());
                }

                match repl.process_line(&line) {
                    Ok(Some(output)) => println!("{}", output),
                    Ok(None) => {}
                    Err(e) => eprintln!("Error: {}", e),
                }
                if repl.should_quit() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    repl.terminal.close();
    Ok(())
}
