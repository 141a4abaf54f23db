use std::fs::File;
use std::io;
use std::path::Path;
use std::process;

use clap::Parser;
use log::info;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use notez::core::{config, notefile::NoteFile, paths};
use notez::tui::screen::TerminalScreen;
use notez::tui::session::{self, Mode};

#[derive(Parser)]
#[command(
    name = "notez",
    version,
    about = "CLI minimalista para notas incrementales rápidas y continuas"
)]
struct Args {
    /// Inicia modo lectura de notas guardadas
    #[arg(short, long)]
    read: bool,

    /// Inicia modo dual: panel de lectura en vivo sobre el prompt
    #[arg(short, long, conflicts_with = "read")]
    dual: bool,
}

fn main() {
    let args = Args::parse();
    // Single fatal boundary: everything below reports its own errors inline.
    if let Err(e) = run(&args) {
        eprintln!("Error crítico: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> io::Result<()> {
    let notes_dir = paths::notes_dir()?;
    init_logger(&notes_dir);
    info!("notez starting (read={}, dual={})", args.read, args.dual);

    let cfg = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config: {e}");
        config::NotezConfig::default()
    });
    let resolved = config::resolve(&cfg);

    let file = NoteFile::new(paths::notes_path()?);
    let mode = if args.read {
        Mode::Reading
    } else if args.dual {
        Mode::Dual
    } else {
        Mode::Recording
    };

    let mut screen = TerminalScreen;
    session::run(&file, mode, resolved.panel_ratio, &mut screen)
}

/// File logger in the notes directory. Setup failure is ignored; the tool
/// works without a log.
fn init_logger(notes_dir: &Path) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(notes_dir.join("notez.log")) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}
