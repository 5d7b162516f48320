use std::path::PathBuf;

use rpcs3_shelf_sfo::SfoError;
use thiserror::Error;

/// Errors raised by the catalog layer.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The registry file (`games.yml`) could not be read
    #[error("Cannot read registry {}: {source}", path.display())]
    RegistryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A title's PARAM.SFO is missing or failed to decode
    #[error("{}: {source}", path.display())]
    Metadata { path: PathBuf, source: SfoError },

    /// The decoded PARAM.SFO has no value under the requested key
    #[error("{id} has no '{key}' attribute")]
    KeyNotPresent { id: String, key: String },

    /// The value exists but has a different type than requested
    #[error("{id}: '{key}' is {found}, expected {expected}")]
    UnexpectedType {
        id: String,
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// No registry entry carries this identifier
    #[error("Unknown title: {0}")]
    UnknownTitle(String),

    /// The title's executable payload (EBOOT.BIN) does not exist
    #[error("Executable payload not found: {}", .0.display())]
    PayloadMissing(PathBuf),

    /// Spawning the emulator failed
    #[error("Failed to launch {}: {source}", executable.display())]
    Launch {
        executable: PathBuf,
        source: std::io::Error,
    },

    /// Not enough configuration to locate the RPCS3 installation
    #[error("RPCS3 is not configured: {0}")]
    NotConfigured(String),
}

impl CatalogError {
    pub fn not_configured(msg: impl Into<String>) -> Self {
        Self::NotConfigured(msg.into())
    }
}
