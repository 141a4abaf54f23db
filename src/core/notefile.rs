//! # Note Log File
//!
//! The append-only log: one record per line, plain UTF-8, readable by any
//! line-oriented tool. `NoteFile` owns no state beyond the path: every
//! append re-opens the file and every load re-reads it, so the on-disk file
//! is the single source of truth between calls.
//!
//! Records are never edited or reordered in place; only appended. The file
//! is created lazily on the first write and never truncated.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::record;

/// Result of loading the log. A missing or empty file is normal control
/// flow ("no notes yet"), not an error; only a genuine read failure
/// surfaces as `Err` from [`NoteFile::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    Missing,
    Empty,
    Lines(Vec<String>),
}

impl Snapshot {
    /// The loaded lines, or an empty slice for missing/empty files.
    pub fn lines(&self) -> &[String] {
        match self {
            Snapshot::Lines(lines) => lines,
            _ => &[],
        }
    }
}

/// Handle on the append-only note log.
pub struct NoteFile {
    path: PathBuf,
}

impl NoteFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open-append-close. The payload must already be fully formatted,
    /// trailing newline included.
    fn append(&self, payload: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(payload.as_bytes())?;
        debug!("appended {} bytes to {}", payload.len(), self.path.display());
        Ok(())
    }

    /// Timestamped note. `text` is written untrimmed, exactly as typed.
    pub fn append_note(&self, text: &str) -> io::Result<()> {
        self.append(&record::note_line(&record::timestamp(), text))
    }

    /// Blank separator (`/n`).
    pub fn append_blank(&self) -> io::Result<()> {
        self.append(&record::blank_line())
    }

    /// Decorative divider (`/n=`).
    pub fn append_divider(&self) -> io::Result<()> {
        self.append(&record::divider_line(&record::timestamp()))
    }

    /// Session-end marker (`/q`).
    pub fn append_closing(&self) -> io::Result<()> {
        self.append(&record::closing_line(&record::timestamp()))
    }

    /// Interruption marker (Ctrl+C in recording/dual mode).
    pub fn append_interrupted(&self) -> io::Result<()> {
        self.append(&record::interrupted_line(&record::timestamp()))
    }

    /// The full ordered line sequence as currently on disk.
    pub fn load(&self) -> io::Result<Snapshot> {
        if !self.path.exists() {
            return Ok(Snapshot::Missing);
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.is_empty() {
            return Ok(Snapshot::Empty);
        }
        Ok(Snapshot::Lines(contents.lines().map(str::to_string).collect()))
    }
}
