//! A single installed title with lazily decoded PARAM.SFO metadata.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use rpcs3_shelf_sfo::{Sfo, SfoValue, decode_sfo_file, keys};

use crate::error::CatalogError;

/// Disc-layout content folder inside a title directory.
pub const GAME_DIR_NAME: &str = "PS3_GAME";

/// Metadata container file name.
pub const SFO_FILE_NAME: &str = "PARAM.SFO";

/// Folder holding the executable payload, relative to the content root.
pub const USRDIR_NAME: &str = "USRDIR";

/// Executable payload file name.
pub const EBOOT_FILE_NAME: &str = "EBOOT.BIN";

/// One title from the RPCS3 registry.
///
/// Identifier and directory are fixed at construction. The PARAM.SFO is
/// decoded on first use and the result is kept for the lifetime of the
/// entry. Failed decodes are not remembered: the next call tries again, so
/// metadata that appears later (an install finishing in the background) is
/// picked up.
#[derive(Debug)]
pub struct CatalogEntry {
    id: String,
    directory: PathBuf,
    /// Held across the decode so concurrent callers wait for a single read.
    metadata: Mutex<Option<Arc<Sfo>>>,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            directory: directory.into(),
            metadata: Mutex::new(None),
        }
    }

    /// Title identifier (e.g. `BLUS30443`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Storage directory as listed in the registry.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Folder that holds `PARAM.SFO` and `USRDIR`.
    ///
    /// Disc dumps keep these under `PS3_GAME/`; HDD installs keep them at the
    /// top of the title directory. The disc layout is assumed unless the
    /// directory has a top-level `PARAM.SFO` and no `PS3_GAME/` folder.
    pub fn content_root(&self) -> PathBuf {
        let disc_root = self.directory.join(GAME_DIR_NAME);
        if !disc_root.is_dir() && self.directory.join(SFO_FILE_NAME).is_file() {
            self.directory.clone()
        } else {
            disc_root
        }
    }

    pub fn sfo_path(&self) -> PathBuf {
        self.content_root().join(SFO_FILE_NAME)
    }

    /// Path of the executable payload handed to the emulator.
    pub fn eboot_path(&self) -> PathBuf {
        self.content_root().join(USRDIR_NAME).join(EBOOT_FILE_NAME)
    }

    /// Whether the PARAM.SFO has already been decoded successfully.
    pub fn is_resolved(&self) -> bool {
        self.lock_metadata().is_some()
    }

    /// The decoded PARAM.SFO, decoding it on first call.
    pub fn metadata(&self) -> Result<Arc<Sfo>, CatalogError> {
        let mut slot = self.lock_metadata();
        if let Some(sfo) = slot.as_ref() {
            return Ok(Arc::clone(sfo));
        }

        let path = self.sfo_path();
        log::debug!("Resolving metadata for {} from {}", self.id, path.display());
        let sfo = decode_sfo_file(&path)
            .map(Arc::new)
            .map_err(|source| CatalogError::Metadata { path, source })?;

        *slot = Some(Arc::clone(&sfo));
        Ok(sfo)
    }

    /// Any attribute by key.
    pub fn attribute(&self, key: &str) -> Result<SfoValue, CatalogError> {
        self.metadata()?
            .get(key)
            .cloned()
            .ok_or_else(|| CatalogError::KeyNotPresent {
                id: self.id.clone(),
                key: key.to_string(),
            })
    }

    /// The human-readable title (`TITLE`).
    pub fn title(&self) -> Result<String, CatalogError> {
        self.string_attribute(keys::TITLE)
    }

    /// The `TITLE_ID` stored inside the PARAM.SFO, which may differ from the
    /// registry identifier for patched or relocated installs.
    pub fn title_id(&self) -> Result<String, CatalogError> {
        self.string_attribute(keys::TITLE_ID)
    }

    fn string_attribute(&self, key: &str) -> Result<String, CatalogError> {
        match self.attribute(key)? {
            SfoValue::Utf8(s) => Ok(s),
            other => Err(CatalogError::UnexpectedType {
                id: self.id.clone(),
                key: key.to_string(),
                expected: "string",
                found: other.kind(),
            }),
        }
    }

    fn lock_metadata(&self) -> std::sync::MutexGuard<'_, Option<Arc<Sfo>>> {
        // The slot is only ever replaced whole, so a poisoned lock still holds
        // a consistent value.
        self.metadata.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "tests/entry_tests.rs"]
mod tests;
