//! Locating an RPCS3 installation and its game registry.

use std::path::{Path, PathBuf};

use rpcs3_shelf_core::HostPlatform;

use crate::catalog::{Catalog, TitleSummary};
use crate::entry::CatalogEntry;
use crate::error::CatalogError;
use crate::launcher::{LaunchOptions, Launcher};
use crate::registry::read_registry;
use crate::settings::Settings;

/// Registry file name inside the RPCS3 configuration directory.
pub const GAMES_FILE_NAME: &str = "games.yml";

/// One RPCS3 installation: the executable and the configuration directory
/// holding `games.yml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rpcs3Install {
    pub executable: PathBuf,
    pub config_dir: PathBuf,
}

impl Rpcs3Install {
    pub fn new(executable: impl Into<PathBuf>, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            config_dir: config_dir.into(),
        }
    }

    /// A portable install: executable and configuration share one folder.
    pub fn from_root(root: &Path) -> Self {
        Self::new(
            root.join(HostPlatform::current().executable_name()),
            root,
        )
    }

    /// Work out the installation from CLI flags, saved settings and host
    /// defaults, in that order.
    ///
    /// The configuration directory falls back to the host default and then
    /// to the executable's folder (portable layout). The executable falls
    /// back to the configuration directory on Windows and to `rpcs3` on the
    /// `PATH` elsewhere.
    pub fn resolve(
        executable: Option<PathBuf>,
        config_dir: Option<PathBuf>,
        settings: &Settings,
        host: HostPlatform,
    ) -> Result<Self, CatalogError> {
        let executable = executable.or_else(|| settings.rpcs3.executable.clone());

        let config_dir = config_dir
            .or_else(|| settings.rpcs3.config_dir.clone())
            .or_else(|| host.default_config_dir())
            .or_else(|| {
                executable
                    .as_deref()
                    .and_then(Path::parent)
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Path::to_path_buf)
            })
            .ok_or_else(|| {
                CatalogError::not_configured(
                    "set the RPCS3 folder with --config-dir or `config set --config-dir`",
                )
            })?;

        let executable = executable.unwrap_or_else(|| match host {
            HostPlatform::Windows => config_dir.join(host.executable_name()),
            HostPlatform::MacOs | HostPlatform::Linux => PathBuf::from(host.executable_name()),
        });

        log::debug!(
            "Using RPCS3 at {} with configuration in {}",
            executable.display(),
            config_dir.display()
        );
        Ok(Self::new(executable, config_dir))
    }

    pub fn games_file(&self) -> PathBuf {
        self.config_dir.join(GAMES_FILE_NAME)
    }

    /// Registry entries, in file order.
    pub fn read_games(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        read_registry(&self.games_file())
    }

    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        self.read_games().map(Catalog::new)
    }

    /// Every installed title with its resolved name. Only an unreadable
    /// registry is an error; per-title failures end up on the summaries.
    pub fn list_titles(&self) -> Result<Vec<TitleSummary>, CatalogError> {
        Ok(self.catalog()?.summaries())
    }

    pub fn launcher(&self, options: LaunchOptions) -> Launcher {
        Launcher::new(&self.executable).with_options(options)
    }
}

#[cfg(test)]
#[path = "tests/install_tests.rs"]
mod tests;
