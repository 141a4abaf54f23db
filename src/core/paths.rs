//! Platform-resolved location of the notes directory.
//!
//! Everything lives under `~/notez/`: the log itself (`notas.txt`), the
//! optional config and the tool log. Termux on Android marks itself with
//! `ANDROID_ROOT` in the environment; the resolved shape is the same
//! home-relative path, so detection is only logged.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::debug;

/// Directory under the home dir holding all noteZ files.
pub const NOTES_DIR: &str = "notez";
/// File name of the append-only note log.
pub const NOTES_FILE: &str = "notas.txt";

/// Returns `~/notez/`, creating it if needed.
pub fn notes_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    if is_termux() {
        debug!("Termux detected (ANDROID_ROOT set)");
    }
    let dir = home.join(NOTES_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path to `~/notez/notas.txt`, creating the directory if missing.
pub fn notes_path() -> io::Result<PathBuf> {
    Ok(notes_dir()?.join(NOTES_FILE))
}

fn is_termux() -> bool {
    cfg!(target_os = "linux") && env::var_os("ANDROID_ROOT").is_some()
}
