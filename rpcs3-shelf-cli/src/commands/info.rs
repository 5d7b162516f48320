use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rpcs3_shelf_lib::Rpcs3Install;

use crate::error::CliError;

pub(crate) fn run_info(install: &Rpcs3Install, id: &str, json: bool) -> Result<(), CliError> {
    let catalog = install.catalog()?;
    let entry = catalog.get(id)?;
    let sfo = entry.metadata()?;

    if json {
        return super::print_json(&serde_json::json!({
            "id": entry.id(),
            "directory": entry.directory(),
            "attributes": &*sfo,
        }));
    }

    log::info!(
        "{} {}",
        entry.id().if_supports_color(Stdout, |t| t.bold()),
        sfo.title().unwrap_or(rpcs3_shelf_lib::UNKNOWN_TITLE),
    );
    log::info!("  Directory: {}", entry.directory().display());
    if let Some(category) = sfo.category() {
        log::info!("  Category:  {}", category);
    }
    if let Some(version) = sfo.app_version() {
        log::info!("  Version:   {}", version);
    }
    if entry.eboot_path().is_file() {
        log::info!(
            "  Payload:   {}",
            entry.eboot_path().display().if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Payload:   {}",
            "missing".if_supports_color(Stdout, |t| t.red()),
        );
    }
    log::info!("");
    super::sfo::print_attributes(&sfo);
    Ok(())
}
