use std::path::{Path, PathBuf};

/// Host operating systems RPCS3 ships for.
///
/// Everything that differs between hosts (executable name, where the
/// emulator keeps its configuration, what the filesystem roots look like)
/// is answered here, so callers resolve the host once and never branch
/// on `cfg!` themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPlatform {
    Windows,
    MacOs,
    Linux,
}

/// All host variants in declaration order.
const ALL_HOSTS: &[HostPlatform] = &[
    HostPlatform::Windows,
    HostPlatform::MacOs,
    HostPlatform::Linux,
];

/// Directory name RPCS3 uses under the user config directory.
const RPCS3_DIR_NAME: &str = "rpcs3";

impl HostPlatform {
    /// The host this binary was compiled for.
    ///
    /// Any non-Windows, non-macOS target is treated as Linux; the BSDs lay
    /// RPCS3 out the same way.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    /// Canonical short name used in settings and CLI arguments.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
        }
    }

    /// Full display name for the host.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
        }
    }

    /// Suffix appended to executable file names (`".exe"` or empty).
    pub fn executable_suffix(&self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            Self::MacOs | Self::Linux => "",
        }
    }

    /// File name of the RPCS3 executable inside its install directory.
    pub fn executable_name(&self) -> &'static str {
        match self {
            Self::Windows => "rpcs3.exe",
            Self::MacOs | Self::Linux => "rpcs3",
        }
    }

    /// Where RPCS3 keeps `games.yml` when installed the usual way.
    ///
    /// Windows builds are portable and keep their configuration next to the
    /// executable, so there is no default there.
    pub fn default_config_dir(&self) -> Option<PathBuf> {
        match self {
            Self::Windows => None,
            Self::MacOs | Self::Linux => dirs::config_dir().map(|d| d.join(RPCS3_DIR_NAME)),
        }
    }

    /// Filesystem roots a directory browser should start from.
    ///
    /// On Windows these are the drive letters that currently exist (`"C:"`,
    /// `"D:"`, ...); everywhere else it is just `"/"`.
    pub fn filesystem_roots(&self) -> Vec<String> {
        match self {
            Self::Windows => ('A'..='Z')
                .map(|letter| format!("{letter}:"))
                .filter(|drive| Path::new(&format!("{drive}\\")).exists())
                .collect(),
            Self::MacOs | Self::Linux => vec!["/".to_string()],
        }
    }

    /// All accepted names for this host (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Windows => &["windows", "win", "win32", "win64"],
            Self::MacOs => &["macos", "mac", "osx", "darwin"],
            Self::Linux => &["linux", "unix"],
        }
    }

    /// All host variants.
    pub fn all() -> &'static [HostPlatform] {
        ALL_HOSTS
    }
}

impl std::fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `HostPlatform`.
#[derive(Debug, Clone)]
pub struct HostPlatformParseError(pub String);

impl std::fmt::Display for HostPlatformParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown host platform: '{}'", self.0)
    }
}

impl std::error::Error for HostPlatformParseError {}

impl std::str::FromStr for HostPlatform {
    type Err = HostPlatformParseError;

    /// Parse a host from its short name or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_HOSTS
            .iter()
            .copied()
            .find(|host| host.aliases().contains(&lower.as_str()))
            .ok_or_else(|| HostPlatformParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/host_tests.rs"]
mod tests;
