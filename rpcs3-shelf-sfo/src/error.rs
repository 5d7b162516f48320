use std::str::Utf8Error;

use thiserror::Error;

/// Errors that can occur while decoding a PARAM.SFO container.
///
/// Every variant is terminal for the decode call that produced it; there is
/// no partial result.
#[derive(Debug, Error)]
pub enum SfoError {
    /// I/O error other than running off the end of the source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source cannot even hold the fixed header
    #[error("PARAM.SFO too small: expected at least {expected} bytes, got {actual}")]
    TooSmall { expected: u64, actual: u64 },

    /// The first four bytes are not `\0PSF`
    #[error("Invalid PARAM.SFO magic: {found:02X?}")]
    InvalidMagic { found: [u8; 4] },

    /// The index table does not end cleanly at the key table boundary
    #[error("Index table truncated at offset {offset:#X}")]
    TruncatedIndex { offset: u64 },

    /// A key or value lies (partly) beyond the end of the source
    #[error("Data truncated at offset {offset:#X}")]
    TruncatedData { offset: u64 },

    /// A key or string value is not valid UTF-8
    #[error("Invalid UTF-8 at offset {offset:#X}: {source}")]
    InvalidEncoding { offset: u64, source: Utf8Error },

    /// An index entry declares a data format this decoder does not know
    #[error("Unknown data format 0x{0:04X}")]
    UnknownFormat(u16),

    /// An integer value declares more than four bytes
    #[error("Integer at offset {offset:#X} is {length} bytes wide (at most 4 supported)")]
    IntegerTooWide { offset: u64, length: u32 },
}
