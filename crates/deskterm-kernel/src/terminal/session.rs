//! Terminal session state: transcript, prompt and history recall.

use tracing::debug;

use super::transcript::{Line, LineStyle, classify};
use crate::tools::{self, CommandOutput, DispatchError, Invocation};
use crate::vfs::FileSystem;

/// Glyph drawn in front of the live prompt and frozen input lines.
pub const PROMPT: &str = "$ ";

const WELCOME: [&str; 2] = ["Welcome to Terminal", "Type 'help' for available commands"];

/// Where the session is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Prompt visible and editable.
    AwaitingInput,
    /// Prompt locked and echoed; the command is running.
    Executing,
    /// Output appended; a fresh prompt comes next.
    Rendered,
}

/// What one submit did, for hosts that draw incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The trimmed command that was submitted (possibly empty).
    pub command: String,
    /// True if the transcript was wiped; hosts should redraw from scratch.
    pub cleared: bool,
    /// Output lines appended after the frozen prompt.
    pub lines: Vec<Line>,
    /// Phases entered during this submit, in order. Always ends in
    /// [`Phase::AwaitingInput`].
    pub phases: Vec<Phase>,
}

/// One interactive terminal.
#[derive(Debug)]
pub struct Terminal {
    transcript: Vec<Line>,
    history: Vec<String>,
    /// Index into `history`; `history.len()` means "past the end".
    cursor: usize,
    input: String,
    phase: Phase,
    /// Set once the banner has been written; `clear` does not reset it.
    initialized: bool,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    /// Create a terminal with an empty transcript and no history.
    pub fn new() -> Self {
        Self {
            transcript: Vec::new(),
            history: Vec::new(),
            cursor: 0,
            input: String::new(),
            phase: Phase::AwaitingInput,
            initialized: false,
        }
    }

    /// Show the window. Writes the welcome banner the first time only.
    ///
    /// Returns true if the banner was written.
    pub fn open(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.transcript.extend(WELCOME.iter().map(|l| Line::output(*l)));
        true
    }

    /// Close the window, discarding history and transcript.
    pub fn close(self) {
        debug!(history = self.history.len(), "terminal closed");
    }

    /// Current value of the live prompt.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the value of the live prompt.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Rendered lines, oldest first. The live prompt is not included.
    pub fn transcript(&self) -> &[Line] {
        &self.transcript
    }

    /// Previously submitted commands, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Recall cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Submit the live prompt (Enter).
    ///
    /// A blank line only freezes the prompt and spawns a new one. Anything
    /// else is recorded in history and executed against `fs`.
    pub fn submit(&mut self, fs: &mut FileSystem) -> Submission {
        let command = std::mem::take(&mut self.input).trim().to_string();
        let mut phases = Vec::with_capacity(3);

        self.advance(Phase::Executing, &mut phases);
        self.transcript.push(Line::new(LineStyle::Input, command.clone()));

        let Some(invocation) = Invocation::parse(&command) else {
            self.advance(Phase::AwaitingInput, &mut phases);
            return Submission {
                command,
                cleared: false,
                lines: Vec::new(),
                phases,
            };
        };

        self.history.push(command.clone());
        self.cursor = self.history.len();

        let (cleared, lines) = match tools::dispatch(&invocation, fs) {
            Ok(CommandOutput::Clear) => {
                self.transcript.clear();
                (true, Vec::new())
            }
            Ok(output) => (false, classify(&output)),
            Err(e @ DispatchError::UnknownCommand(_)) => (false, vec![Line::error(e.to_string())]),
            Err(e @ DispatchError::Usage(_)) => {
                (false, classify(&CommandOutput::Message(e.to_string())))
            }
        };

        self.transcript.extend(lines.iter().cloned());
        self.advance(Phase::Rendered, &mut phases);
        debug!(command = %invocation.name, lines = lines.len(), cleared, "command rendered");

        self.advance(Phase::AwaitingInput, &mut phases);
        Submission {
            command,
            cleared,
            lines,
            phases,
        }
    }

    fn advance(&mut self, phase: Phase, trace: &mut Vec<Phase>) {
        self.phase = phase;
        trace.push(phase);
        debug!(?phase, "terminal phase");
    }

    /// Recall the previous history entry (Up). Stops at the first entry.
    pub fn history_up(&mut self) -> &str {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.input = self.history[self.cursor].clone();
        }
        &self.input
    }

    /// Recall the next history entry (Down). Moving past the last entry
    /// clears the prompt.
    pub fn history_down(&mut self) -> &str {
        if self.cursor + 1 < self.history.len() {
            self.cursor += 1;
            self.input = self.history[self.cursor].clone();
        } else {
            self.cursor = self.history.len();
            self.input.clear();
        }
        &self.input
    }
}
