//! Transcript lines and output styling.

use crate::tools::CommandOutput;

/// How a transcript line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Plain command output.
    Output,
    Error,
    Success,
    /// A submitted prompt, frozen with the command that was entered.
    Input,
}

/// One rendered line of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub style: LineStyle,
    pub text: String,
}

impl Line {
    pub fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Output, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Error, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Success, text)
    }
}

/// Turn command output into transcript lines.
///
/// A message mentioning `Error:` becomes one error line; one mentioning
/// `created`, `deleted` or `updated` becomes one success line. Everything
/// else is split on newlines into plain lines, dropping blank ones.
pub fn classify(output: &CommandOutput) -> Vec<Line> {
    match output {
        CommandOutput::Message(text) if text.contains("Error:") => vec![Line::error(text)],
        CommandOutput::Message(text)
            if ["created", "deleted", "updated"]
                .iter()
                .any(|word| text.contains(word)) =>
        {
            vec![Line::success(text)]
        }
        CommandOutput::Message(text) | CommandOutput::Listing(text) => plain_lines(text),
        CommandOutput::Clear => Vec::new(),
    }
}

fn plain_lines(text: &str) -> Vec<Line> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(Line::output)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn message(text: &str) -> CommandOutput {
        CommandOutput::Message(text.to_string())
    }

    #[rstest]
    #[case::error("Error: File a not found", LineStyle::Error)]
    #[case::created("File a created", LineStyle::Success)]
    #[case::deleted("File a deleted", LineStyle::Success)]
    #[case::updated("File a updated", LineStyle::Success)]
    #[case::plain("hello", LineStyle::Output)]
    #[case::error_wins("Error: created twice", LineStyle::Error)]
    fn single_line_style(#[case] text: &str, #[case] style: LineStyle) {
        assert_eq!(classify(&message(text)), vec![Line::new(style, text)]);
    }

    #[test]
    fn plain_text_splits_and_drops_blanks() {
        let lines = classify(&message("one\n\n  \ntwo\n"));
        assert_eq!(lines, vec![Line::output("one"), Line::output("two")]);
    }

    #[test]
    fn styled_text_stays_whole() {
        let lines = classify(&message("Error: a\nb"));
        assert_eq!(lines, vec![Line::error("Error: a\nb")]);
    }

    #[test]
    fn listing_ignores_keywords() {
        let lines = classify(&CommandOutput::Listing("files created\nhere".into()));
        assert_eq!(lines, vec![Line::output("files created"), Line::output("here")]);
    }

    #[test]
    fn empty_message_renders_nothing() {
        assert!(classify(&message("")).is_empty());
    }

    #[test]
    fn clear_renders_nothing() {
        assert!(classify(&CommandOutput::Clear).is_empty());
    }
}
