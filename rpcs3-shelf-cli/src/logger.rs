//! Terminal logger behind the `log` facade.
//!
//! `info` is the command's normal output and goes to stdout; everything else
//! goes to stderr so `--json` output stays clean. With `--logfile`, every
//! record is also appended to the file with color codes removed.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::error::CliError;

struct CliLogger {
    verbose: bool,
    file: Option<Mutex<File>>,
}

/// Install the logger. `quiet` wins over `verbose`.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let file = match logfile {
        Some(path) => Some(Mutex::new(
            OpenOptions::new().create(true).append(true).open(path)?,
        )),
        None => None,
    };

    log::set_boxed_logger(Box::new(CliLogger { verbose, file }))
        .map_err(|e| CliError::other(e.to_string()))?;
    log::set_max_level(level_filter(quiet, verbose));
    Ok(())
}

fn level_filter(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Render a record for the terminal (may contain ANSI codes from the caller).
fn render(level: Level, message: &str, verbose: bool) -> String {
    let body = match level {
        Level::Error => format!(
            "{} {}",
            "error:".if_supports_color(Stderr, |t| t.red()),
            message
        ),
        Level::Warn => format!(
            "{} {}",
            "warning:".if_supports_color(Stderr, |t| t.yellow()),
            message
        ),
        Level::Info => message.to_string(),
        Level::Debug | Level::Trace => {
            format!("{}", message.if_supports_color(Stderr, |t| t.dimmed()))
        }
    };

    if verbose {
        format!("{} {}", chrono::Local::now().format("%H:%M:%S%.3f"), body)
    } else {
        body
    }
}

fn plain(line: &str) -> String {
    strip_ansi_escapes::strip_str(line)
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = render(record.level(), &record.args().to_string(), self.verbose);
        if record.level() == Level::Info {
            println!("{}", line);
        } else {
            eprintln!("{}", line);
        }

        if let Some(file) = &self.file {
            let mut file = file.lock().unwrap_or_else(|e| e.into_inner());
            let _ = writeln!(file, "{}", plain(&line));
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            let mut file = file.lock().unwrap_or_else(|e| e.into_inner());
            let _ = file.flush();
        }
    }
}
