//! # Command Interpreter
//!
//! Classifies one raw line of user input into a [`Command`] consumed by the
//! session loops. The original tool returned `'quit'`/`'read'`/`'continue'`
//! strings; here every outcome is a variant of one sum type.

/// One classified line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/q`: write the closing marker and leave the session.
    Quit,
    /// `/r`: suspend recording and page through the log.
    EnterRead,
    /// `/n`: append a blank separator.
    Blank,
    /// `/n=`: append a decorative divider.
    Divider,
    /// `/h`: show help, block for acknowledgment, resume.
    Help,
    /// Anything non-empty after trimming; carries the raw line as typed.
    Note(String),
    /// Empty or whitespace-only input: no file mutation, no error.
    Noop,
}

/// Control tokens match the raw line exactly, with no trimming first: a
/// line that *is* `/q` quits, while ` /q` is saved as a note. A user who
/// wants to save the literal text `/q` cannot; accepted limitation of the
/// minimal grammar.
pub fn parse(line: &str) -> Command {
    match line {
        "/q" => Command::Quit,
        "/r" => Command::EnterRead,
        "/n" => Command::Blank,
        "/n=" => Command::Divider,
        "/h" => Command::Help,
        _ if line.trim().is_empty() => Command::Noop,
        _ => Command::Note(line.to_string()),
    }
}
