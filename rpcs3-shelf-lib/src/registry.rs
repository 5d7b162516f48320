//! RPCS3 game registry (`games.yml`) parsing.
//!
//! The registry is line-oriented: `<identifier>: <directory>` per title.
//! Only the separator is significant. Lines without it (comments, blank
//! lines, YAML anchors) are skipped rather than reported.

use std::path::Path;

use crate::entry::CatalogEntry;
use crate::error::CatalogError;

/// Separates identifier and directory on a registry line.
pub const ENTRY_SEPARATOR: &str = ": ";

/// Split one registry line at the first separator.
///
/// Returns `(identifier, directory)`, both trimmed, or `None` when the line
/// holds no separator.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (id, directory) = line.split_once(ENTRY_SEPARATOR)?;
    Some((id.trim(), directory.trim()))
}

/// Parse registry text into entries, in file order.
///
/// Identifiers are not deduplicated here.
pub fn parse_registry(text: &str) -> Vec<CatalogEntry> {
    let mut entries = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        match parse_line(line) {
            Some((id, directory)) => entries.push(CatalogEntry::new(id, directory)),
            None => {
                if !line.trim().is_empty() {
                    log::debug!("Skipping registry line {}: no separator", line_no + 1);
                }
            }
        }
    }
    entries
}

/// Read and parse a registry file.
pub fn read_registry(path: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::RegistryUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_registry(&text);
    log::debug!("Read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
