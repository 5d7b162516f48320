use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rpcs3_shelf_lib::settings::{
    CONFIG_DIR_KEY, EXECUTABLE_KEY, load_settings_from, load_settings_string, save_rpcs3_setting,
};
use rpcs3_shelf_lib::{HostPlatform, Rpcs3Install, settings_path};

use crate::error::CliError;

/// Where an effective value came from.
fn source_label(cli: bool, saved: bool) -> &'static str {
    if cli {
        "(command line)"
    } else if saved {
        "(settings.toml)"
    } else {
        "(default)"
    }
}

/// Show the settings file and the effective RPCS3 location.
pub(crate) fn run_config_show(
    executable: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Result<(), CliError> {
    let path = settings_path();
    let settings = load_settings_from(&path);

    log::info!(
        "{}",
        "RPCS3 Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("  Host: {}", HostPlatform::current());
    log::info!("");

    let exe_source = source_label(executable.is_some(), settings.rpcs3.executable.is_some());
    let cfg_source = source_label(config_dir.is_some(), settings.rpcs3.config_dir.is_some());

    match Rpcs3Install::resolve(executable, config_dir, &settings, HostPlatform::current()) {
        Ok(install) => {
            show_path("executable", &install.executable, exe_source);
            show_path("config_dir", &install.config_dir, cfg_source);
            let games = install.games_file();
            if games.is_file() {
                show_path("games.yml", &games, "(exists)");
            } else {
                log::info!(
                    "  {} {} {}",
                    "games.yml:".if_supports_color(Stdout, |t| t.cyan()),
                    games.display(),
                    "(not found)".if_supports_color(Stdout, |t| t.yellow()),
                );
            }
        }
        Err(e) => {
            log::info!(
                "  {} {}",
                "config_dir:".if_supports_color(Stdout, |t| t.cyan()),
                "not set".if_supports_color(Stdout, |t| t.yellow()),
            );
            log::warn!("{}", e);
        }
    }

    if let Some(contents) = load_settings_string(&path) {
        log::info!("");
        for line in contents.lines() {
            log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
    Ok(())
}

fn show_path(name: &str, path: &Path, source: &str) {
    log::info!(
        "  {} {} {}",
        format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
        path.display(),
        source.if_supports_color(Stdout, |t| t.dimmed()),
    );
}

/// Save the given values; an empty path clears the key.
pub(crate) fn run_config_set(
    executable: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Result<(), CliError> {
    if executable.is_none() && config_dir.is_none() {
        return Err(CliError::config(
            "nothing to set; pass --executable and/or --config-dir",
        ));
    }

    let path = settings_path();
    for (key, value) in [(EXECUTABLE_KEY, executable), (CONFIG_DIR_KEY, config_dir)] {
        let Some(value) = value else { continue };
        if value.as_os_str().is_empty() {
            save_rpcs3_setting(&path, key, None)?;
            log::info!("Cleared {}", key);
        } else {
            if !value.exists() {
                log::warn!("{} does not exist (saving anyway)", value.display());
            }
            save_rpcs3_setting(&path, key, Some(&value))?;
            log::info!(
                "Set {} = {}",
                key,
                value.display().if_supports_color(Stdout, |t| t.cyan())
            );
        }
    }
    log::info!("Saved {}", path.display());
    Ok(())
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}
