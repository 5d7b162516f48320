//! Catalog of titles installed in an RPCS3 emulator setup.
//!
//! Reads the emulator's game registry, resolves each title's PARAM.SFO on
//! demand, and builds the command that boots a title.

pub mod catalog;
pub mod entry;
pub mod error;
pub mod install;
pub mod launcher;
pub mod registry;
pub mod settings;

pub use catalog::{Catalog, TitleSummary, UNKNOWN_TITLE};
pub use entry::CatalogEntry;
pub use error::CatalogError;
pub use install::{GAMES_FILE_NAME, Rpcs3Install};
pub use launcher::{LaunchOptions, Launcher};
pub use registry::{parse_registry, read_registry};
pub use settings::{Settings, load_settings, settings_path};

pub use rpcs3_shelf_core::HostPlatform;
pub use rpcs3_shelf_sfo::{Category, Sfo, SfoError, SfoValue};

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
