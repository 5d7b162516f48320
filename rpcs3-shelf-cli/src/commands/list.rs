use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rpcs3_shelf_lib::Rpcs3Install;

use crate::error::CliError;

pub(crate) fn run_list(install: &Rpcs3Install, json: bool) -> Result<(), CliError> {
    let titles = install.list_titles()?;
    if json {
        return super::print_json(&titles);
    }

    if titles.is_empty() {
        log::info!(
            "No titles registered in {}",
            install.games_file().display()
        );
        return Ok(());
    }

    let id_width = titles.iter().map(|t| t.id.len()).max().unwrap_or(0);
    for summary in &titles {
        let id = format!("{:<width$}", summary.id, width = id_width);
        if summary.is_resolved() {
            log::info!(
                "  {}  {}",
                id.if_supports_color(Stdout, |t| t.bold()),
                summary.display_title(),
            );
        } else {
            log::info!(
                "  {}  {}",
                id.if_supports_color(Stdout, |t| t.bold()),
                summary
                    .display_title()
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        log::debug!("    {}", summary.directory.display());
    }

    let unresolved = titles.iter().filter(|t| !t.is_resolved()).count();
    log::info!("");
    if unresolved > 0 {
        log::info!(
            "{} titles, {}",
            titles.len(),
            format!("{} without readable metadata", unresolved)
                .if_supports_color(Stdout, |t| t.yellow()),
        );
    } else {
        log::info!("{} titles", titles.len());
    }
    Ok(())
}
