//! End-to-end terminal behavior: lines typed at the prompt, checked against
//! the transcript, the store and what storage holds.

use deskterm_kernel::{
    Desktop, FileSystem, Line, LineStyle, MemoryStorage, STORAGE_KEY, Storage, Terminal,
};
use rstest::rstest;

struct Session {
    term: Terminal,
    fs: FileSystem,
    storage: MemoryStorage,
    desktop: Desktop,
}

impl Session {
    fn new() -> Self {
        Self::with_storage(MemoryStorage::new())
    }

    fn with_storage(storage: MemoryStorage) -> Self {
        let desktop = Desktop::new();
        let mut fs = FileSystem::new(storage.clone(), desktop.clone());
        fs.load();
        let mut term = Terminal::new();
        term.open();
        Self {
            term,
            fs,
            storage,
            desktop,
        }
    }

    /// Type a line, press Enter, return the rendered output lines.
    fn run(&mut self, line: &str) -> Vec<Line> {
        self.term.set_input(line);
        self.term.submit(&mut self.fs).lines
    }

    fn run_text(&mut self, line: &str) -> Vec<String> {
        self.run(line).into_iter().map(|l| l.text).collect()
    }
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn touch_then_ls_then_rm() {
    let mut s = Session::new();
    s.run("touch report.txt");
    assert!(s.run_text("ls")[0].contains("report.txt"));

    s.run("rm report.txt");
    let listing = s.run_text("ls");
    assert!(!listing.iter().any(|l| l.contains("report.txt")));
    assert_eq!(listing, vec!["No files found"]);
}

#[test]
fn write_creates_then_updates() {
    let mut s = Session::new();
    assert_eq!(
        s.run("write log.txt hello"),
        vec![Line::success("File log.txt created")]
    );
    assert_eq!(
        s.run("write log.txt world"),
        vec![Line::success("File log.txt updated")]
    );
    assert_eq!(s.fs.list_names(), vec!["log.txt"]);
    assert_eq!(s.run_text("cat log.txt"), vec!["world"]);
}

#[test]
fn cat_empty_file() {
    let mut s = Session::new();
    s.run("touch empty.txt");
    assert_eq!(s.run("cat empty.txt"), vec![Line::output("(empty file)")]);
}

#[test]
fn cat_missing_file() {
    let mut s = Session::new();
    assert_eq!(
        s.run("cat ghost.txt"),
        vec![Line::error("Error: File ghost.txt not found")]
    );
}

#[test]
fn unknown_command_message() {
    let mut s = Session::new();
    assert_eq!(
        s.run("foo"),
        vec![Line::error(
            "Command not found: foo. Type 'help' for available commands."
        )]
    );
}

#[test]
fn command_names_are_case_insensitive() {
    let mut s = Session::new();
    s.run("ToUcH Mixed.txt");
    assert_eq!(s.run_text("LS"), vec!["Mixed.txt"]);
}

#[test]
fn echo_without_args_renders_nothing() {
    let mut s = Session::new();
    assert!(s.run("echo").is_empty());
}

#[test]
fn echo_collapses_whitespace() {
    let mut s = Session::new();
    assert_eq!(s.run_text("echo   a    b"), vec!["a b"]);
}

#[test]
fn duplicate_touch_is_an_error() {
    let mut s = Session::new();
    s.run("touch a.txt first");
    assert_eq!(
        s.run("touch a.txt second"),
        vec![Line::error("Error: File a.txt already exists")]
    );
    assert_eq!(s.run_text("cat a.txt"), vec!["first"]);
}

#[test]
fn multi_line_content_renders_line_by_line() {
    let mut s = Session::new();
    s.fs.create("poem", "roses\n\nviolets").unwrap();
    assert_eq!(s.run_text("cat poem"), vec!["roses", "violets"]);
}

#[rstest]
#[case::touch("touch", "Usage: touch <filename>")]
#[case::rm("rm", "Usage: rm <filename>")]
#[case::cat("cat", "Usage: cat <filename>")]
#[case::write_none("write", "Usage: write <file> <content>")]
#[case::write_one("write only.txt", "Usage: write <file> <content>")]
fn usage_strings(#[case] line: &str, #[case] usage: &str) {
    let mut s = Session::new();
    assert_eq!(s.run(line), vec![Line::output(usage)]);
    assert!(s.fs.is_empty());
}

// ============================================================================
// Transcript and prompt
// ============================================================================

#[test]
fn clear_leaves_only_a_fresh_prompt() {
    let mut s = Session::new();
    s.run("touch a");
    s.run("ls");
    s.term.set_input("clear");
    let sub = s.term.submit(&mut s.fs);
    assert!(sub.cleared);
    assert!(s.term.transcript().is_empty());
    assert_eq!(s.term.input(), "");

    // The next command starts a new transcript
    s.run("echo after");
    assert_eq!(
        s.term.transcript(),
        &[Line::new(LineStyle::Input, "echo after"), Line::output("after")]
    );
}

#[test]
fn history_recall() {
    let mut s = Session::new();
    for cmd in ["a", "b", "c"] {
        s.run(cmd);
    }
    s.term.history_up();
    s.term.history_up();
    s.term.history_up();
    assert_eq!(s.term.input(), "a");
    s.term.history_down();
    assert_eq!(s.term.input(), "b");
}

#[test]
fn recalled_command_runs_again() {
    let mut s = Session::new();
    s.run("echo again");
    s.term.history_up();
    let sub = s.term.submit(&mut s.fs);
    assert_eq!(sub.lines, vec![Line::output("again")]);
    assert_eq!(s.term.history().len(), 2);
}

// ============================================================================
// Persistence and desktop
// ============================================================================

#[test]
fn files_survive_a_new_session() {
    let mut s = Session::new();
    s.run("write a.txt alpha");
    s.run("touch b.txt");
    let storage = s.storage.clone();
    drop(s);

    let mut next = Session::with_storage(storage);
    // History does not survive
    assert!(next.term.history().is_empty());
    assert_eq!(next.run_text("ls"), vec!["a.txt  b.txt"]);
    assert_eq!(next.run_text("cat a.txt"), vec!["alpha"]);
}

#[test]
fn storage_holds_json_array() {
    let mut s = Session::new();
    s.run("write notes.txt hi there");
    let raw = s.storage.get_item(STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["name"], "notes.txt");
    assert_eq!(json[0]["content"], "hi there");
    assert_eq!(json[0]["type"], "file");
    assert!(json[0]["created"].is_string());
    assert!(json[0]["modified"].is_string());
}

#[test]
fn corrupt_storage_starts_empty() {
    let storage = MemoryStorage::with_item(STORAGE_KEY, "[{broken");
    let mut s = Session::with_storage(storage);
    assert_eq!(s.run_text("ls"), vec!["No files found"]);
}

#[test]
fn desktop_follows_terminal() {
    let mut s = Session::new();
    s.run("touch one");
    s.run("touch two");
    assert_eq!(s.desktop.names(), vec!["one", "two"]);

    let deleted = s.desktop.request_delete("one", &mut s.fs, |_| true);
    assert!(matches!(deleted, Some(Ok(_))));
    assert_eq!(s.run_text("ls"), vec!["two"]);
}
