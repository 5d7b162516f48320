use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::category::Category;

/// Well-known PARAM.SFO keys.
pub mod keys {
    pub const APP_VER: &str = "APP_VER";
    pub const ATTRIBUTE: &str = "ATTRIBUTE";
    pub const BOOTABLE: &str = "BOOTABLE";
    pub const CATEGORY: &str = "CATEGORY";
    pub const LANG: &str = "LANG";
    pub const LICENSE: &str = "LICENSE";
    pub const PARENTAL_LEVEL: &str = "PARENTAL_LEVEL";
    pub const PS3_SYSTEM_VER: &str = "PS3_SYSTEM_VER";
    pub const RESOLUTION: &str = "RESOLUTION";
    pub const SOUND_FORMAT: &str = "SOUND_FORMAT";
    pub const TITLE: &str = "TITLE";
    pub const TITLE_ID: &str = "TITLE_ID";
    pub const VERSION: &str = "VERSION";
}

/// A decoded PARAM.SFO value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum SfoValue {
    /// A `utf8` or `utf8-S` entry
    Utf8(String),
    /// An `int32` entry (at most four bytes wide)
    Integer(u32),
    /// A reserved entry with `data_length == 0`; distinct from `Integer(0)`
    /// and from an empty string
    Absent,
}

impl SfoValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Utf8(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Utf8(_) => "string",
            Self::Integer(_) => "integer",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for SfoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8(s) => write!(f, "{}", s),
            Self::Integer(n) => write!(f, "{} (0x{:08X})", n, n),
            Self::Absent => write!(f, "<absent>"),
        }
    }
}

/// A decoded PARAM.SFO container: key to value, keys unique.
///
/// Iteration is in key order. Lookups for missing keys return `None`; there
/// are no defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sfo {
    values: BTreeMap<String, SfoValue>,
}

impl Sfo {
    pub fn new(values: BTreeMap<String, SfoValue>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&SfoValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// String value for `key`; `None` if missing or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(SfoValue::as_str)
    }

    /// Integer value for `key`; `None` if missing or not an integer.
    pub fn get_u32(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(SfoValue::as_u32)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SfoValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get_str(keys::TITLE)
    }

    /// Localized title, `TITLE_00` through `TITLE_20`.
    ///
    /// `None` when that language has no entry; [`Sfo::title`] holds the default.
    pub fn localized_title(&self, language: u8) -> Option<&str> {
        self.get_str(&format!("{}_{:02}", keys::TITLE, language))
    }

    pub fn title_id(&self) -> Option<&str> {
        self.get_str(keys::TITLE_ID)
    }

    pub fn license(&self) -> Option<&str> {
        self.get_str(keys::LICENSE)
    }

    pub fn language(&self) -> Option<&str> {
        self.get_str(keys::LANG)
    }

    /// Application version (`APP_VER`, e.g. `"02.00"`).
    pub fn app_version(&self) -> Option<&str> {
        self.get_str(keys::APP_VER)
    }

    /// Data version (`VERSION`).
    pub fn version(&self) -> Option<&str> {
        self.get_str(keys::VERSION)
    }

    pub fn category(&self) -> Option<Category> {
        self.get_str(keys::CATEGORY).map(Category::from_code)
    }

    pub fn parental_level(&self) -> Option<u32> {
        self.get_u32(keys::PARENTAL_LEVEL)
    }

    /// Supported output resolutions bitmask.
    pub fn resolution(&self) -> Option<u32> {
        self.get_u32(keys::RESOLUTION)
    }

    /// Supported sound formats bitmask.
    pub fn sound_format(&self) -> Option<u32> {
        self.get_u32(keys::SOUND_FORMAT)
    }
}

impl FromIterator<(String, SfoValue)> for Sfo {
    /// Later pairs replace earlier ones with the same key.
    fn from_iter<I: IntoIterator<Item = (String, SfoValue)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "tests/param_tests.rs"]
mod tests;
