pub(crate) mod config;
pub(crate) mod info;
pub(crate) mod launch;
pub(crate) mod list;
pub(crate) mod sfo;

use std::path::PathBuf;

use rpcs3_shelf_lib::{HostPlatform, Rpcs3Install, load_settings};

use crate::error::CliError;

/// Resolve the installation from CLI overrides, saved settings and host defaults.
pub(crate) fn resolve_install(
    executable: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Result<Rpcs3Install, CliError> {
    let settings = load_settings();
    Ok(Rpcs3Install::resolve(
        executable,
        config_dir,
        &settings,
        HostPlatform::current(),
    )?)
}

pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
