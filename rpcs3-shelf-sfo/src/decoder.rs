//! PARAM.SFO decoding.
//!
//! The decoder reads the header, walks the index table up to the key table
//! boundary, then resolves each entry's key and value by seeking into the
//! key and data tables. A single bad entry fails the whole decode.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Cursor, ErrorKind, SeekFrom};
use std::path::Path;

use rpcs3_shelf_core::ReadSeek;
use rpcs3_shelf_core::util::{read_uint_le, trim_trailing_nuls};

use crate::error::SfoError;
use crate::format::{DataFormat, HEADER_SIZE, INDEX_ENTRY_SIZE, IndexEntry, SFO_MAGIC, SfoHeader};
use crate::param::{Sfo, SfoValue};

/// Decode a PARAM.SFO container from any seekable reader.
///
/// The reader may be positioned anywhere; offsets are absolute from the
/// start of the stream.
pub fn decode_sfo(reader: &mut dyn ReadSeek) -> Result<Sfo, SfoError> {
    let mut decoder = Decoder::new(reader)?;
    let header = decoder.header()?;
    let entries = decoder.index_table(&header)?;

    let mut values = BTreeMap::new();
    for entry in &entries {
        let key = decoder.key(&header, entry)?;
        let value = decoder.value(&header, entry)?;
        if values.contains_key(&key) {
            log::debug!("Duplicate PARAM.SFO key '{}', keeping the later value", key);
        }
        values.insert(key, value);
    }

    log::debug!(
        "Decoded PARAM.SFO: {} entries, version {:#06X}",
        values.len(),
        header.version
    );
    Ok(Sfo::new(values))
}

/// Decode a PARAM.SFO container held in memory.
pub fn decode_sfo_bytes(bytes: &[u8]) -> Result<Sfo, SfoError> {
    decode_sfo(&mut Cursor::new(bytes))
}

/// Open and decode a PARAM.SFO file.
pub fn decode_sfo_file(path: &Path) -> Result<Sfo, SfoError> {
    log::debug!("Decoding {}", path.display());
    let file = File::open(path)?;
    decode_sfo(&mut BufReader::new(file))
}

/// Read and validate only the fixed header.
pub fn read_header(reader: &mut dyn ReadSeek) -> Result<SfoHeader, SfoError> {
    Decoder::new(reader)?.header()
}

/// Map an end-of-file read failure to a format error; pass other I/O errors through.
fn eof_as(err: std::io::Error, on_eof: SfoError) -> SfoError {
    if err.kind() == ErrorKind::UnexpectedEof {
        on_eof
    } else {
        SfoError::Io(err)
    }
}

fn decode_utf8(bytes: Vec<u8>, offset: u64) -> Result<String, SfoError> {
    String::from_utf8(bytes).map_err(|e| SfoError::InvalidEncoding {
        offset,
        source: e.utf8_error(),
    })
}

struct Decoder<'a> {
    reader: &'a mut dyn ReadSeek,
    /// Total stream length, used to reject reads past the end before
    /// allocating for them.
    len: u64,
}

impl<'a> Decoder<'a> {
    fn new(reader: &'a mut dyn ReadSeek) -> Result<Self, SfoError> {
        let len = reader.seek(SeekFrom::End(0))?;
        Ok(Self { reader, len })
    }

    fn header(&mut self) -> Result<SfoHeader, SfoError> {
        if self.len < HEADER_SIZE {
            return Err(SfoError::TooSmall {
                expected: HEADER_SIZE,
                actual: self.len,
            });
        }

        self.reader.seek(SeekFrom::Start(0))?;
        let mut buf = [0u8; HEADER_SIZE as usize];
        self.reader.read_exact(&mut buf)?;

        if buf[0..4] != SFO_MAGIC {
            return Err(SfoError::InvalidMagic {
                found: [buf[0], buf[1], buf[2], buf[3]],
            });
        }

        Ok(SfoHeader::parse(&buf))
    }

    /// Read index entries until the read position reaches `key_table_start`.
    ///
    /// The header's entry count is only compared against the result.
    fn index_table(&mut self, header: &SfoHeader) -> Result<Vec<IndexEntry>, SfoError> {
        let boundary = u64::from(header.key_table_start);
        if boundary < HEADER_SIZE {
            return Err(SfoError::TruncatedIndex { offset: boundary });
        }

        self.reader.seek(SeekFrom::Start(HEADER_SIZE))?;
        let mut position = HEADER_SIZE;
        let mut entries = Vec::new();

        while position < boundary {
            if position + INDEX_ENTRY_SIZE > boundary {
                return Err(SfoError::TruncatedIndex { offset: position });
            }
            let mut buf = [0u8; INDEX_ENTRY_SIZE as usize];
            self.reader
                .read_exact(&mut buf)
                .map_err(|e| eof_as(e, SfoError::TruncatedIndex { offset: position }))?;
            entries.push(IndexEntry::parse(&buf));
            position += INDEX_ENTRY_SIZE;
        }

        if entries.len() as u64 != u64::from(header.entry_count) {
            log::warn!(
                "PARAM.SFO header declares {} entries but the index table holds {}",
                header.entry_count,
                entries.len()
            );
        }

        Ok(entries)
    }

    fn key(&mut self, header: &SfoHeader, entry: &IndexEntry) -> Result<String, SfoError> {
        let offset = u64::from(header.key_table_start) + u64::from(entry.key_offset);
        self.nul_terminated(offset)
    }

    fn value(&mut self, header: &SfoHeader, entry: &IndexEntry) -> Result<SfoValue, SfoError> {
        // Reserved entry: nothing stored, whatever the format says.
        if entry.data_length == 0 {
            return Ok(SfoValue::Absent);
        }

        let offset = u64::from(header.data_table_start) + u64::from(entry.data_offset);
        let format = DataFormat::from_code(entry.data_format)
            .ok_or(SfoError::UnknownFormat(entry.data_format))?;

        match format {
            DataFormat::Utf8Special => {
                let bytes = self.exact(offset, entry.data_length)?;
                let text = trim_trailing_nuls(&bytes).to_vec();
                decode_utf8(text, offset).map(SfoValue::Utf8)
            }
            DataFormat::Utf8 => self.nul_terminated(offset).map(SfoValue::Utf8),
            DataFormat::UnsignedInt => {
                let too_wide = SfoError::IntegerTooWide {
                    offset,
                    length: entry.data_length,
                };
                if entry.data_length > 4 {
                    return Err(too_wide);
                }
                let bytes = self.exact(offset, entry.data_length)?;
                read_uint_le(&bytes).map(SfoValue::Integer).ok_or(too_wide)
            }
        }
    }

    /// Read exactly `length` bytes at `offset`.
    fn exact(&mut self, offset: u64, length: u32) -> Result<Vec<u8>, SfoError> {
        let length = u64::from(length);
        if offset.saturating_add(length) > self.len {
            return Err(SfoError::TruncatedData { offset });
        }

        self.reader.seek(SeekFrom::Start(offset))?;
        let mut buf = vec![0u8; length as usize];
        self.reader
            .read_exact(&mut buf)
            .map_err(|e| eof_as(e, SfoError::TruncatedData { offset }))?;
        Ok(buf)
    }

    /// Read a NUL-terminated UTF-8 string starting at `offset`, one byte at a time.
    fn nul_terminated(&mut self, offset: u64) -> Result<String, SfoError> {
        if offset >= self.len {
            return Err(SfoError::TruncatedData { offset });
        }

        self.reader.seek(SeekFrom::Start(offset))?;
        let mut bytes = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            self.reader
                .read_exact(&mut byte)
                .map_err(|e| eof_as(e, SfoError::TruncatedData { offset }))?;
            if byte[0] == 0 {
                break;
            }
            bytes.push(byte[0]);
        }

        decode_utf8(bytes, offset)
    }
}

#[cfg(test)]
#[path = "tests/decoder_tests.rs"]
mod tests;
