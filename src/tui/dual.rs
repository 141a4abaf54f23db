//! # Dual-Panel Renderer
//!
//! Pure function from (lines, terminal geometry, ratio) to a fixed-height
//! block of display lines: a header border, tail-anchored content rows with
//! a line-number gutter, and a footer border. Each row is truncated or
//! padded to exactly the terminal width.
//!
//! The renderer is stateless. The dual loop re-reads the whole file before
//! every call, so the panel always reflects the latest on-disk state; no
//! caching, no incremental diff. Fine for personal-note volumes; a
//! large-log variant would tail-read the needed bytes but must keep the
//! always-latest contract.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns consumed by the `%4d │ ` line-number gutter.
pub const GUTTER_WIDTH: usize = 7;
/// The read panel never shrinks below this many rows.
pub const MIN_PANEL_HEIGHT: usize = 5;

pub struct DualPanel {
    ratio: f32,
}

impl DualPanel {
    /// `ratio` is the share of the terminal height given to the read panel,
    /// threaded in from configuration so alternate ratios are testable.
    pub fn new(ratio: f32) -> Self {
        Self { ratio }
    }

    /// `max(5, ⌊height × ratio⌋)` rows, borders included.
    pub fn panel_height(&self, term_height: u16) -> usize {
        MIN_PANEL_HEIGHT.max((term_height as f32 * self.ratio) as usize)
    }

    /// Renders the read panel: exactly [`Self::panel_height`] lines, each
    /// exactly `width` columns. Content is tail-anchored: the most recent
    /// lines sit against the footer, gutter-only rows fill the space above
    /// when the log is shorter than the content region.
    pub fn render(&self, lines: &[String], width: u16, height: u16) -> Vec<String> {
        let panel_height = self.panel_height(height);
        let width = width as usize;
        let content_rows = panel_height - 2;

        let mut out = Vec::with_capacity(panel_height);
        out.push(frame_row(
            &format!("── noteZ DUAL ── {} líneas ", lines.len()),
            width,
            '╭',
            '╮',
        ));

        let visible = lines.len().min(content_rows);
        let first_shown = lines.len() - visible;
        for _ in 0..content_rows - visible {
            out.push(content_row(None, "", width));
        }
        for (idx, line) in lines.iter().enumerate().skip(first_shown) {
            out.push(content_row(Some(idx + 1), line, width));
        }

        out.push(frame_row("", width, '╰', '╯'));
        out
    }
}

/// A numbered (or gutter-only) content row, padded to `width` columns.
fn content_row(number: Option<usize>, text: &str, width: usize) -> String {
    let gutter = match number {
        Some(n) => format!("{n:4} │ "),
        None => "     │ ".to_string(),
    };
    let body = fit(text, width.saturating_sub(GUTTER_WIDTH));
    pad(fit(&format!("{gutter}{body}"), width), width)
}

/// A `╭──…──╮` style border row carrying an optional label, exactly
/// `width` columns.
fn frame_row(label: &str, width: usize, left: char, right: char) -> String {
    if width < 2 {
        return "─".repeat(width);
    }
    let inner = width - 2;
    let label = fit(label, inner);
    let mut row = String::new();
    row.push(left);
    let used = label.width();
    row.push_str(&label);
    for _ in used..inner {
        row.push('─');
    }
    row.push(right);
    row
}

/// Cuts `text` to at most `budget` display columns, ending in `…` when
/// anything was dropped. Never splits a wide character.
fn fit(text: &str, budget: usize) -> String {
    if text.width() <= budget {
        return text.to_string();
    }
    if budget == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pads with spaces up to `width` display columns.
fn pad(mut row: String, width: usize) -> String {
    let used = row.width();
    if used < width {
        row.push_str(&" ".repeat(width - used));
    }
    row
}
