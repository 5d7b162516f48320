use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rpcs3_shelf_core::util::format_bytes_approx;
use rpcs3_shelf_sfo::{Sfo, read_header};

use crate::error::CliError;

pub(crate) fn run_sfo(path: &Path, json: bool) -> Result<(), CliError> {
    if !path.is_file() {
        return Err(CliError::not_found(path.display().to_string()));
    }

    let file = File::open(path)?;
    let size = file.metadata()?.len();
    let mut reader = BufReader::new(file);
    let header = read_header(&mut reader)?;
    let sfo = rpcs3_shelf_sfo::decode_sfo(&mut reader)?;

    if json {
        return super::print_json(&sfo);
    }

    log::info!(
        "{} ({})",
        path.display().if_supports_color(Stdout, |t| t.bold()),
        format_bytes_approx(size),
    );
    log::info!(
        "  version {:#06X}, {} entries",
        header.version,
        sfo.len()
    );
    log::info!("");
    print_attributes(&sfo);
    Ok(())
}

/// One `KEY  value` line per attribute, keys aligned.
pub(crate) fn print_attributes(sfo: &Sfo) {
    let key_width = sfo.keys().map(str::len).max().unwrap_or(0);
    for (key, value) in sfo.iter() {
        let key = format!("{:<width$}", key, width = key_width);
        if value.is_absent() {
            log::info!(
                "  {}  {}",
                key.if_supports_color(Stdout, |t| t.cyan()),
                value.if_supports_color(Stdout, |t| t.dimmed()),
            );
        } else {
            log::info!("  {}  {}", key.if_supports_color(Stdout, |t| t.cyan()), value);
        }
    }
}
