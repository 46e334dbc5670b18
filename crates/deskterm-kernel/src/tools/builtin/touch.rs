//! touch: Create a file, optionally with content.

use crate::tools::CommandOutput;
use crate::vfs::FileSystem;

/// `touch <name> [content...]`. Trailing words become the content.
pub fn run(name: &str, content: &[String], fs: &mut FileSystem) -> CommandOutput {
    CommandOutput::from_store(fs.create(name, &content.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::test_support::{args, make_fs};

    #[test]
    fn test_touch_empty() {
        let mut fs = make_fs();
        let out = run("report.txt", &[], &mut fs);
        assert_eq!(out.text(), Some("File report.txt created"));
        assert_eq!(fs.get("report.txt").unwrap().content, "");
    }

    #[test]
    fn test_touch_with_content() {
        let mut fs = make_fs();
        run("todo", &args(&["buy", "milk"]), &mut fs);
        assert_eq!(fs.get("todo").unwrap().content, "buy milk");
    }

    #[test]
    fn test_touch_existing() {
        let mut fs = make_fs();
        run("a", &args(&["one"]), &mut fs);
        let out = run("a", &args(&["two"]), &mut fs);
        assert_eq!(out.text(), Some("Error: File a already exists"));
        assert_eq!(fs.get("a").unwrap().content, "one");
    }
}
