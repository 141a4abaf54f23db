//! # Pager
//!
//! Backward pagination over the loaded note log: the last 10 lines first,
//! then 5 more per advance, walking toward the start of the file.
//!
//! State is a single cursor `current_end` (exclusive upper bound) that only
//! ever decreases. Windows never overlap and never skip: advancing from the
//! initial position down to index 0 covers every line exactly once.

use std::ops::Range;

/// Lines shown when the pager opens.
pub const INITIAL_PAGE: usize = 10;
/// Lines revealed per subsequent advance.
pub const SCROLL_STEP: usize = 5;

/// Cursor over the full line sequence.
#[derive(Debug)]
pub struct Pager {
    current_end: usize,
}

impl Pager {
    pub fn new(total_lines: usize) -> Self {
        Self {
            current_end: total_lines,
        }
    }

    /// The initial window: the last [`INITIAL_PAGE`] lines, or fewer for a
    /// short file. Moves the cursor to the start of the returned range.
    pub fn first_page(&mut self) -> Range<usize> {
        self.take(INITIAL_PAGE)
    }

    /// The next [`SCROLL_STEP`] lines preceding everything shown so far, or
    /// `None` once the start of the file has been reached (the cursor does
    /// not move in that case).
    pub fn advance(&mut self) -> Option<Range<usize>> {
        if self.at_start() {
            return None;
        }
        Some(self.take(SCROLL_STEP))
    }

    pub fn at_start(&self) -> bool {
        self.current_end == 0
    }

    fn take(&mut self, count: usize) -> Range<usize> {
        let start = self.current_end.saturating_sub(count);
        let range = start..self.current_end;
        self.current_end = start;
        range
    }
}
