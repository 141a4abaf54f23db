//! # Record Builders
//!
//! Every line that ever reaches the note log is built here. Four kinds
//! exist: timestamped notes, blank separators, the decorative divider
//! (`/n=`) and the two session markers (normal close, interruption).
//!
//! Builders take the timestamp as a `&str` argument so their output is
//! deterministic under test; [`timestamp`] stamps the wall clock at the
//! moment of the append and is never recomputed afterwards.

use chrono::Local;

/// `[DD-MM-YYYY | HH:MM]`, minute resolution: two writes within the
/// same minute are indistinguishable by timestamp alone.
pub const TIMESTAMP_FORMAT: &str = "[%d-%m-%Y | %H:%M]";

/// Fill of a `/n=` divider line.
const DIVIDER_FILL: &str =
    "==========================================================================";

/// Marker appended by `/q`.
const CLOSING_MARKER: &str =
    "============================ Sesión finalizada ===========================";

/// Marker appended when Ctrl+C lands mid-prompt.
const INTERRUPTED_MARKER: &str = "========== Interrupción del usuario ==========";

/// The current moment, formatted as a log line prefix.
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// `<timestamp> <text>\n`. Callers only pass text that is non-empty after
/// trimming; the text itself is stored untrimmed, exactly as typed.
pub fn note_line(timestamp: &str, text: &str) -> String {
    format!("{timestamp} {text}\n")
}

/// A bare separator line, no timestamp.
pub fn blank_line() -> String {
    "\n".to_string()
}

/// `<timestamp> ====…====\n`
pub fn divider_line(timestamp: &str) -> String {
    format!("{timestamp} {DIVIDER_FILL}\n")
}

/// `<timestamp> ==== Sesión finalizada ====\n`
pub fn closing_line(timestamp: &str) -> String {
    format!("{timestamp} {CLOSING_MARKER}\n")
}

/// `<timestamp> ==== Interrupción del usuario ====\n`
pub fn interrupted_line(timestamp: &str) -> String {
    format!("{timestamp} {INTERRUPTED_MARKER}\n")
}
