//! Submit handling: validation and emission of the prompt text.

use std::io::{self, Write};

/// What the window should do in response to a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// Print the stripped prompt and close the window.
    Emit(String),
    /// Show the "Missing Prompt" warning and keep the window open.
    Warn,
    /// Ignore the submit.
    NoOp,
}

/// Remove leading and trailing whitespace, keeping interior whitespace and
/// newlines untouched.
///
/// The ASCII information separators (U+001C..=U+001F) are stripped too.
pub fn strip(text: &str) -> &str {
    text.trim_matches(is_strippable)
}

fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Decide the action for the current buffer contents.
pub fn handle_submit(buffer: &str) -> SubmitAction {
    let prompt = strip(buffer);
    if prompt.is_empty() {
        SubmitAction::Warn
    } else {
        SubmitAction::Emit(prompt.to_string())
    }
}

/// Write the prompt as a single newline-terminated record and flush it so
/// the reader sees it before the window goes away.
pub fn emit<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{text}")?;
    out.flush()
}
