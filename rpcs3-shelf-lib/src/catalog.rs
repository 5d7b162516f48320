//! The set of installed titles and their listing summaries.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::entry::CatalogEntry;
use crate::error::CatalogError;
use crate::registry::{parse_registry, read_registry};

/// Shown in place of a title whose metadata could not be resolved.
pub const UNKNOWN_TITLE: &str = "<unknown title>";

/// Ordered collection of registry entries.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn from_registry_text(text: &str) -> Self {
        Self::new(parse_registry(text))
    }

    /// Read the registry file at `path`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        read_registry(path).map(Self::new)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry with this identifier.
    pub fn find(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Like [`Catalog::find`], but a missing title is an error.
    pub fn get(&self, id: &str) -> Result<&CatalogEntry, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::UnknownTitle(id.to_string()))
    }

    /// One summary per entry, in registry order.
    ///
    /// Resolves every title. A failure is logged and recorded on that
    /// entry's summary; the remaining entries are still listed.
    pub fn summaries(&self) -> Vec<TitleSummary> {
        self.entries.iter().map(TitleSummary::from_entry).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Listing row for one installed title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleSummary {
    pub id: String,
    pub directory: PathBuf,
    /// Decoded `TITLE`, if resolution succeeded
    pub title: Option<String>,
    /// Why resolution failed, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TitleSummary {
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        let (title, error) = match entry.title() {
            Ok(title) => (Some(title), None),
            Err(e) => {
                log::warn!("{}: {}", entry.id(), e);
                (None, Some(e.to_string()))
            }
        };
        Self {
            id: entry.id().to_string(),
            directory: entry.directory().to_path_buf(),
            title,
            error,
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN_TITLE)
    }

    pub fn is_resolved(&self) -> bool {
        self.title.is_some()
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
