//! # Session Loops
//!
//! The record / read / dual interactive loops. Input comes from rustyline;
//! `ReadlineError::Interrupted` (Ctrl+C) and `ReadlineError::Eof` (Ctrl+D,
//! closed stdin) are matched at every read call site and never propagate:
//! recording and dual write a best-effort interruption marker on Ctrl+C,
//! the pager and end-of-input just say goodbye.
//!
//! A failed append is reported inline and the loop keeps going: a single
//! write error never ends a session.

use std::io;
use std::ops::Range;

use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::core::command::{self, Command};
use crate::core::notefile::{NoteFile, Snapshot};
use crate::core::pager::Pager;
use crate::tui::dual::DualPanel;
use crate::tui::screen::Screen;

/// Interactive states. `Recording` is the default; the other two are
/// selected by the mutually exclusive CLI flags and never transition into
/// each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Recording,
    Reading,
    Dual,
}

const RECORD_PROMPT: &str = "[noteZ] > ";
const DUAL_PROMPT: &str = "[noteZ DUAL] > ";
const READ_PROMPT: &str = "[noteZ READ MODE] -- Enter para más, /q para salir -- ";
const READ_PROMPT_AT_START: &str = "[noteZ READ MODE] -- Inicio del archivo -- /q para salir -- ";

const HELP_TEXT: &str = "\
╭─────────────────────────────────────────╮
│            noteZ - Ayuda Rápida         │
├─────────────────────────────────────────┤
│ COMANDOS ESPECIALES:                    │
│                                         │
│  /n      → Línea vacía (separador)      │
│  /n=     → Línea decorativa =====       │
│  /r      → Leer notas (modo lectura)    │
│  /h      → Mostrar esta ayuda           │
│  /q      → Salir y guardar              │
│                                         │
│ MODOS DE USO:                           │
│                                         │
│  notez           → Modo grabación       │
│  notez -r        → Modo lectura         │
│  notez -d        → Modo dual            │
│                                         │
│ TIPS:                                   │
│                                         │
│  • Cada nota se guarda con timestamp    │
│  • Ctrl+C guarda automáticamente        │
│  • Pegar texto funciona transparente    │
╰─────────────────────────────────────────╯

Presiona Enter para continuar...";

/// Entry point for all three modes.
pub fn run(
    file: &NoteFile,
    mode: Mode,
    panel_ratio: f32,
    screen: &mut dyn Screen,
) -> io::Result<()> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| io::Error::other(format!("no se pudo inicializar la entrada: {e}")))?;

    match mode {
        Mode::Recording => record_loop(file, &mut rl),
        Mode::Reading => read_loop(file, &mut rl, false),
        Mode::Dual => dual_loop(file, &DualPanel::new(panel_ratio), screen, &mut rl),
    }
    Ok(())
}

// ============================================================================
// Recording mode
// ============================================================================

fn record_loop(file: &NoteFile, rl: &mut DefaultEditor) {
    print_banner(file);

    loop {
        match rl.readline(RECORD_PROMPT) {
            Ok(line) => match command::parse(&line) {
                Command::Quit => {
                    save_or_report(file.append_closing());
                    println!("\n¡Notas guardadas! Hasta luego.");
                    break;
                }
                Command::EnterRead => {
                    read_loop(file, rl, true);
                }
                Command::Blank => save_or_report(file.append_blank()),
                Command::Divider => save_or_report(file.append_divider()),
                Command::Help => show_help(rl),
                Command::Note(text) => {
                    let _ = rl.add_history_entry(&text);
                    save_or_report(file.append_note(&text));
                }
                Command::Noop => {}
            },
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C: best-effort closing write, then a clean exit.
                println!("\n\nGuardando y cerrando...");
                match file.append_interrupted() {
                    Ok(()) => println!("¡Notas guardadas! Hasta luego."),
                    Err(e) => println!("Error al guardar: {e}"),
                }
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("\n¡Hasta luego!");
                break;
            }
            Err(err) => {
                warn!("readline failed: {err}");
                eprintln!("Error de entrada: {err}");
                break;
            }
        }
    }
}

fn print_banner(file: &NoteFile) {
    println!("╭─────────────────────────────────────────╮");
    println!("│     noteZ - Notas Rápidas Continuas     │");
    println!("│                                         │");
    println!("│  Escribe tus notas y presiona Enter     │");
    println!("│  Comandos: /n /n= /r /h /q              │");
    println!("│  Ctrl+C para salir seguro               │");
    println!("╰─────────────────────────────────────────╯");
    println!("\nArchivo: {}\n", file.path().display());
}

// ============================================================================
// Reading mode (pager)
// ============================================================================

fn read_loop(file: &NoteFile, rl: &mut DefaultEditor, from_recording: bool) {
    let lines = match file.load() {
        Ok(Snapshot::Missing) => {
            println!("No hay notas guardadas aún. Usa 'notez' para empezar a escribir.");
            return;
        }
        Ok(Snapshot::Empty) => {
            println!("El archivo de notas está vacío.");
            return;
        }
        Ok(Snapshot::Lines(lines)) => lines,
        Err(e) => {
            warn!("load failed entering read mode: {e}");
            println!("Error al leer archivo: {e}");
            return;
        }
    };

    let context = if from_recording { " (desde grabación)" } else { "" };
    println!(
        "\n╭── noteZ READ MODE{context} ── {} líneas totales ──╮",
        lines.len()
    );

    let mut pager = Pager::new(lines.len());
    print_window(&lines, pager.first_page());

    loop {
        let prompt = if pager.at_start() {
            READ_PROMPT_AT_START
        } else {
            READ_PROMPT
        };
        println!();
        match rl.readline(prompt) {
            Ok(input) => match input.trim() {
                "/q" => break,
                "/h" => show_help(rl),
                _ => match pager.advance() {
                    Some(range) => {
                        println!();
                        print_window(&lines, range);
                    }
                    None => println!("\n── Ya estás en el inicio del archivo ──"),
                },
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("\n\n¡Hasta luego!");
                break;
            }
            Err(err) => {
                warn!("readline failed: {err}");
                eprintln!("Error de entrada: {err}");
                break;
            }
        }
    }

    if from_recording {
        println!("\nVolviendo al modo grabación...");
    } else {
        println!("\nSaliendo del modo lectura...");
    }
}

fn print_window(lines: &[String], range: Range<usize>) {
    for i in range {
        println!("{:4} │ {}", i + 1, lines[i]);
    }
}

// ============================================================================
// Dual mode
// ============================================================================

fn dual_loop(file: &NoteFile, panel: &DualPanel, screen: &mut dyn Screen, rl: &mut DefaultEditor) {
    redraw(file, panel, screen);

    loop {
        match rl.readline(DUAL_PROMPT) {
            Ok(line) => match command::parse(&line) {
                Command::Quit => {
                    save_or_report(file.append_closing());
                    println!("\n¡Notas guardadas! Hasta luego.");
                    break;
                }
                // Dual already shows live content; switching makes no sense.
                Command::EnterRead => {
                    println!("El panel superior ya muestra las notas en vivo.");
                }
                Command::Blank => {
                    save_or_report(file.append_blank());
                    redraw(file, panel, screen);
                }
                Command::Divider => {
                    save_or_report(file.append_divider());
                    redraw(file, panel, screen);
                }
                Command::Help => {
                    show_help(rl);
                    redraw(file, panel, screen);
                }
                Command::Note(text) => {
                    let _ = rl.add_history_entry(&text);
                    save_or_report(file.append_note(&text));
                    redraw(file, panel, screen);
                }
                Command::Noop => {}
            },
            Err(ReadlineError::Interrupted) => {
                println!("\n\nGuardando y cerrando...");
                match file.append_interrupted() {
                    Ok(()) => println!("¡Notas guardadas! Hasta luego."),
                    Err(e) => println!("Error al guardar: {e}"),
                }
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("\n¡Hasta luego!");
                break;
            }
            Err(err) => {
                warn!("readline failed: {err}");
                eprintln!("Error de entrada: {err}");
                break;
            }
        }
    }
}

/// Full repaint: clear, re-read the file, print the panel. Read errors
/// degrade to an inline placeholder; the loop keeps running either way.
fn redraw(file: &NoteFile, panel: &DualPanel, screen: &mut dyn Screen) {
    if let Err(e) = screen.clear() {
        warn!("screen clear failed: {e}");
    }
    let (width, height) = screen.size();
    match file.load() {
        Ok(snapshot) => {
            for row in panel.render(snapshot.lines(), width, height) {
                println!("{row}");
            }
        }
        Err(e) => {
            warn!("load failed during redraw: {e}");
            println!("Error al leer archivo: {e}");
        }
    }
    println!();
}

// ============================================================================
// Shared helpers
// ============================================================================

fn save_or_report(result: io::Result<()>) {
    if let Err(e) = result {
        warn!("append failed: {e}");
        println!("Error al guardar: {e}");
    }
}

/// Static help box; blocks until the user acknowledges.
fn show_help(rl: &mut DefaultEditor) {
    info!("help requested");
    println!("{HELP_TEXT}");
    let _ = rl.readline("");
}
