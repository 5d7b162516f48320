//! Building and spawning the emulator command for a title.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use crate::entry::CatalogEntry;
use crate::error::CatalogError;

/// Emulator flag that boots straight into the title without the main window.
pub const NO_GUI_FLAG: &str = "--no-gui";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub no_gui: bool,
}

/// Starts titles with one RPCS3 executable.
#[derive(Debug, Clone)]
pub struct Launcher {
    executable: PathBuf,
    options: LaunchOptions,
}

impl Launcher {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            options: LaunchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LaunchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn options(&self) -> LaunchOptions {
        self.options
    }

    /// Arguments passed to the executable for `entry`, payload last.
    pub fn arguments(&self, entry: &CatalogEntry) -> Vec<OsString> {
        let mut args = Vec::with_capacity(2);
        if self.options.no_gui {
            args.push(OsString::from(NO_GUI_FLAG));
        }
        args.push(entry.eboot_path().into_os_string());
        args
    }

    /// The command that would start `entry`. Nothing is spawned.
    pub fn command_for(&self, entry: &CatalogEntry) -> Result<Command, CatalogError> {
        let payload = entry.eboot_path();
        if !payload.is_file() {
            return Err(CatalogError::PayloadMissing(payload));
        }

        let mut cmd = Command::new(&self.executable);
        cmd.args(self.arguments(entry));
        Ok(cmd)
    }

    /// Spawn the emulator for `entry` and return without waiting.
    pub fn launch(&self, entry: &CatalogEntry) -> Result<Child, CatalogError> {
        let mut cmd = self.command_for(entry)?;
        log::debug!("Spawning {:?}", cmd);
        let child = cmd.spawn().map_err(|source| CatalogError::Launch {
            executable: self.executable.clone(),
            source,
        })?;
        log::debug!("Started {} as pid {}", entry.id(), child.id());
        Ok(child)
    }
}

#[cfg(test)]
#[path = "tests/launcher_tests.rs"]
mod tests;
