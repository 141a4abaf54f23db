//! Terminal capability abstraction.
//!
//! The session loops talk to a [`Screen`] instead of emitting escape
//! sequences; crossterm commands live only inside [`TerminalScreen`], so
//! the rendering logic stays portable and testable.

use std::io::{self, stdout};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};

/// Geometry used when the real size is unavailable, e.g. when output is
/// piped.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub trait Screen {
    /// Clear everything and home the cursor.
    fn clear(&mut self) -> io::Result<()>;

    /// Current (columns, rows).
    fn size(&self) -> (u16, u16);
}

/// Crossterm-backed implementation used by the real loops.
pub struct TerminalScreen;

impl Screen for TerminalScreen {
    fn clear(&mut self) -> io::Result<()> {
        execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }

    fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or(FALLBACK_SIZE)
    }
}
