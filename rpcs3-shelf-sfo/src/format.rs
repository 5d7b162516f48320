//! On-disk layout of a PARAM.SFO container.
//!
//! ```text
//! 0x00  header (20 bytes)
//! 0x14  index table: 16-byte entries up to key_table_start
//!       key table:   NUL-terminated UTF-8 key names
//!       data table:  values, addressed relative to data_table_start
//! ```
//!
//! All multi-byte fields are little-endian.

use rpcs3_shelf_core::util::{read_u16_le, read_u32_le};

/// Signature at offset 0: `"\0PSF"`.
pub const SFO_MAGIC: [u8; 4] = *b"\0PSF";

/// Size of the fixed header in bytes.
pub const HEADER_SIZE: u64 = 20;

/// Size of one index table entry in bytes.
pub const INDEX_ENTRY_SIZE: u64 = 16;

/// Parsed header fields (the magic is validated and dropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SfoHeader {
    /// Format version, usually `0x0101`. Not validated.
    pub version: u32,
    /// Absolute offset of the key table; also the end of the index table.
    pub key_table_start: u32,
    /// Absolute offset of the data table.
    pub data_table_start: u32,
    /// Entry count as declared by the file. Informational only; the index
    /// table is read up to `key_table_start` regardless of this value.
    pub entry_count: u32,
}

impl SfoHeader {
    pub(crate) fn parse(buf: &[u8; HEADER_SIZE as usize]) -> Self {
        Self {
            version: read_u32_le(buf, 0x04),
            key_table_start: read_u32_le(buf, 0x08),
            data_table_start: read_u32_le(buf, 0x0C),
            entry_count: read_u32_le(buf, 0x10),
        }
    }
}

/// Encoding of a value in the data table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormat {
    /// Exactly `data_length` bytes of UTF-8, not NUL-terminated (`APP_VER`, ...)
    Utf8Special,
    /// NUL-terminated UTF-8
    Utf8,
    /// Little-endian unsigned integer of `data_length` bytes
    UnsignedInt,
}

impl DataFormat {
    /// Map the raw `data_format` field to a known encoding.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0x0004 => Some(Self::Utf8Special),
            0x0204 => Some(Self::Utf8),
            0x0404 => Some(Self::UnsignedInt),
            _ => None,
        }
    }

    /// The raw `data_format` value (bytes `04 00`, `04 02`, `04 04` on disk).
    pub fn code(&self) -> u16 {
        match self {
            Self::Utf8Special => 0x0004,
            Self::Utf8 => 0x0204,
            Self::UnsignedInt => 0x0404,
        }
    }

    /// Short name as used by PS3 tooling.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8Special => "utf8-S",
            Self::Utf8 => "utf8",
            Self::UnsignedInt => "int32",
        }
    }
}

/// One 16-byte index table record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IndexEntry {
    /// Offset of the key name, relative to `key_table_start`.
    pub(crate) key_offset: u16,
    /// Raw format code; checked against [`DataFormat`] when the value is read.
    pub(crate) data_format: u16,
    /// Meaningful bytes of the value. Zero marks a reserved entry.
    pub(crate) data_length: u32,
    /// Reserved capacity. Not needed for decoding.
    #[allow(dead_code)]
    pub(crate) data_max_length: u32,
    /// Offset of the value, relative to `data_table_start`.
    pub(crate) data_offset: u32,
}

impl IndexEntry {
    pub(crate) fn parse(buf: &[u8; INDEX_ENTRY_SIZE as usize]) -> Self {
        Self {
            key_offset: read_u16_le(buf, 0x00),
            data_format: read_u16_le(buf, 0x02),
            data_length: read_u32_le(buf, 0x04),
            data_max_length: read_u32_le(buf, 0x08),
            data_offset: read_u32_le(buf, 0x0C),
        }
    }
}
