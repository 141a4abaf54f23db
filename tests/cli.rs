//! End-to-end tests driving the `notez` binary with piped stdin.
//!
//! `HOME` points at a fresh temp dir per test, so each run gets its own
//! `~/notez/notas.txt` and never touches the real one.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn notez(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("notez").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

fn notes_path(home: &TempDir) -> PathBuf {
    home.path().join("notez").join("notas.txt")
}

fn notes_lines(home: &TempDir) -> Vec<String> {
    fs::read_to_string(notes_path(home))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Asserts the `[DD-MM-YYYY | HH:MM]` prefix.
fn assert_timestamped(line: &str) {
    assert!(line.len() >= 20, "line too short for a timestamp: {line:?}");
    chrono::NaiveDateTime::parse_from_str(&line[..20], "[%d-%m-%Y | %H:%M]")
        .unwrap_or_else(|e| panic!("bad timestamp prefix in {line:?}: {e}"));
}

#[test]
fn version_flag_prints_name_and_version() {
    Command::cargo_bin("notez")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("notez"));
}

#[test]
fn read_and_dual_flags_are_mutually_exclusive() {
    let home = TempDir::new().unwrap();
    notez(&home).args(["--read", "--dual"]).assert().failure();
}

#[test]
fn recording_appends_timestamped_note_and_closing_marker() {
    let home = TempDir::new().unwrap();
    notez(&home).write_stdin("buy milk\n/q\n").assert().success();

    let lines = notes_lines(&home);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" buy milk"));
    assert_timestamped(&lines[0]);
    assert!(lines[1].contains("Sesión finalizada"));
    assert_timestamped(&lines[1]);
}

#[test]
fn divider_then_quit_appends_exactly_two_lines() {
    let home = TempDir::new().unwrap();
    notez(&home).write_stdin("/n=\n/q\n").assert().success();

    let lines = notes_lines(&home);
    assert_eq!(lines.len(), 2);
    let fill = &lines[0][21..];
    assert_eq!(fill.len(), 74);
    assert!(fill.chars().all(|c| c == '='));
    assert!(lines[1].contains("Sesión finalizada"));
}

#[test]
fn blank_command_appends_untimestamped_separator() {
    let home = TempDir::new().unwrap();
    notez(&home).write_stdin("/n\n/q\n").assert().success();

    let lines = notes_lines(&home);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "");
}

#[test]
fn empty_and_whitespace_input_mutate_nothing() {
    let home = TempDir::new().unwrap();
    notez(&home).write_stdin("\n   \n\t\n/q\n").assert().success();

    // Only the closing marker made it to disk.
    let lines = notes_lines(&home);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Sesión finalizada"));
}

#[test]
fn padded_control_token_is_saved_as_a_note() {
    let home = TempDir::new().unwrap();
    notez(&home).write_stdin(" /q\n/q\n").assert().success();

    let lines = notes_lines(&home);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("  /q"));
    assert_timestamped(&lines[0]);
}

#[test]
fn end_of_input_exits_cleanly_without_marker() {
    let home = TempDir::new().unwrap();
    notez(&home)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hasta luego"));

    // No write ever happened, so the log was never created.
    assert!(!notes_path(&home).exists());
}

#[test]
fn help_blocks_for_acknowledgment_and_resumes() {
    let home = TempDir::new().unwrap();
    notez(&home)
        .write_stdin("/h\n\n/q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ayuda Rápida"));

    let lines = notes_lines(&home);
    assert_eq!(lines.len(), 1);
}

#[test]
fn read_mode_without_notes_says_so() {
    let home = TempDir::new().unwrap();
    notez(&home)
        .arg("--read")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No hay notas guardadas"));
}

#[test]
fn read_mode_with_empty_file_reports_it() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join("notez")).unwrap();
    fs::write(notes_path(&home), "").unwrap();

    notez(&home)
        .arg("--read")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("vacío"));
}

#[test]
fn round_trip_read_shows_the_saved_note() {
    let home = TempDir::new().unwrap();
    notez(&home).write_stdin("buy milk\n/q\n").assert().success();

    notez(&home)
        .arg("-r")
        .write_stdin("/q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("noteZ READ MODE"))
        .stdout(predicate::str::contains("buy milk"));
}

#[test]
fn pagination_walks_back_to_the_start() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join("notez")).unwrap();
    let contents: String = (1..=12).map(|i| format!("linea {i}\n")).collect();
    fs::write(notes_path(&home), contents).unwrap();

    // Initial page shows 3..12; two advances reach the start; the third
    // only reports it.
    notez(&home)
        .arg("--read")
        .write_stdin("\n\n\n/q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("12 líneas totales"))
        .stdout(predicate::str::contains("  12 │ linea 12"))
        .stdout(predicate::str::contains("   1 │ linea 1"))
        .stdout(predicate::str::contains("Ya estás en el inicio"));
}

#[test]
fn read_mode_entered_from_recording_returns_to_it() {
    let home = TempDir::new().unwrap();
    notez(&home)
        .write_stdin("una nota\n/r\n/q\notra nota\n/q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("desde grabación"))
        .stdout(predicate::str::contains("Volviendo al modo grabación"));

    // Both notes landed, in order, around the read detour.
    let lines = notes_lines(&home);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with(" una nota"));
    assert!(lines[1].ends_with(" otra nota"));
    assert!(lines[2].contains("Sesión finalizada"));
}

#[test]
fn dual_mode_saves_notes_and_redraws() {
    let home = TempDir::new().unwrap();
    notez(&home)
        .arg("--dual")
        .write_stdin("hola dual\n/q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("noteZ DUAL"))
        .stdout(predicate::str::contains("   1 │ hola dual"));

    let lines = notes_lines(&home);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" hola dual"));
    assert!(lines[1].contains("Sesión finalizada"));
}

#[test]
fn dual_mode_read_command_is_informational() {
    let home = TempDir::new().unwrap();
    notez(&home)
        .arg("-d")
        .write_stdin("/r\n/q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("panel superior"));

    let lines = notes_lines(&home);
    assert_eq!(lines.len(), 1);
}

#[test]
fn dual_panel_height_honors_default_ratio() {
    let home = TempDir::new().unwrap();
    // Piped output falls back to 80×24 → panel of 19 rows, 17 content rows,
    // all gutter-only for a missing file.
    let output = notez(&home).arg("-d").write_stdin("/q\n").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("     │").count(), 17);
}

#[test]
fn dual_panel_ratio_is_configurable() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join("notez")).unwrap();
    fs::write(
        home.path().join("notez").join("config.toml"),
        "[dual]\npanel_ratio = 0.5\n",
    )
    .unwrap();

    // 24 rows × 0.5 → panel of 12 rows, 10 content rows.
    let output = notez(&home).arg("-d").write_stdin("/q\n").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("     │").count(), 10);
}

#[test]
fn malformed_config_degrades_to_defaults() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join("notez")).unwrap();
    fs::write(
        home.path().join("notez").join("config.toml"),
        "[dual]\npanel_ratio = \"wide\"\n",
    )
    .unwrap();

    notez(&home)
        .arg("-d")
        .write_stdin("/q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("noteZ DUAL"));
}

#[test]
fn file_only_ever_grows_across_sessions() {
    let home = TempDir::new().unwrap();
    notez(&home).write_stdin("primera\n/q\n").assert().success();
    let before = fs::read(notes_path(&home)).unwrap();

    notez(&home).write_stdin("segunda\n/q\n").assert().success();
    let after = fs::read(notes_path(&home)).unwrap();

    assert!(after.len() > before.len());
    assert_eq!(&after[..before.len()], &before[..]);
}
