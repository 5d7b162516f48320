//! Persistent settings: where RPCS3 lives.
//!
//! The file is `<config dir>/rpcs3-shelf/settings.toml`:
//!
//! ```toml
//! [rpcs3]
//! executable = "/opt/rpcs3/rpcs3"
//! config_dir = "/home/me/.config/rpcs3"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Table holding the RPCS3 location.
pub const RPCS3_TABLE: &str = "rpcs3";
pub const EXECUTABLE_KEY: &str = "executable";
pub const CONFIG_DIR_KEY: &str = "config_dir";

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("rpcs3-shelf").join("settings.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub rpcs3: Rpcs3Settings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rpcs3Settings {
    /// RPCS3 executable
    pub executable: Option<PathBuf>,
    /// RPCS3 configuration directory (holds `games.yml`)
    pub config_dir: Option<PathBuf>,
}

impl Rpcs3Settings {
    /// Empty strings in the file count as unset.
    fn normalized(self) -> Self {
        let keep = |p: Option<PathBuf>| p.filter(|p| !p.as_os_str().is_empty());
        Self {
            executable: keep(self.executable),
            config_dir: keep(self.config_dir),
        }
    }
}

/// Load settings from the canonical location.
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`.
///
/// A missing file gives defaults. So does an unreadable or malformed one,
/// with a warning.
pub fn load_settings_from(path: &Path) -> Settings {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Settings::default(),
        Err(e) => {
            log::warn!("Cannot read {}: {}", path.display(), e);
            return Settings::default();
        }
    };

    match toml::from_str::<Settings>(&contents) {
        Ok(settings) => Settings {
            rpcs3: settings.rpcs3.normalized(),
        },
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

/// Set (or clear, with `None`) one key of the `[rpcs3]` table in `path`.
///
/// Uses `toml::Value` for a surgical update so keys this tool does not know
/// about are preserved.
pub fn save_rpcs3_setting(path: &Path, key: &str, value: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(path) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let root = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let rpcs3 = root
        .entry(RPCS3_TABLE)
        .or_insert_with(|| toml::Value::Table(Default::default()))
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[rpcs3] is not a table"))?;

    match value {
        Some(p) => {
            rpcs3.insert(
                key.to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            rpcs3.remove(key);
        }
    }

    write_atomic(path, &doc)
}

fn write_atomic(path: &Path, doc: &toml::Value) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(doc).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)
}

/// The settings file re-rendered for display, if it exists and parses.
pub fn load_settings_string(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
