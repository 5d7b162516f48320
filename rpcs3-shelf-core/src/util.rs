/// Read a little-endian `u16` at `offset`.
pub fn read_u16_le(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

/// Read a little-endian `u32` at `offset`.
pub fn read_u32_le(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

/// Interpret up to four bytes as a little-endian unsigned integer.
///
/// Shorter slices are zero-extended (`[0x01, 0x02]` is `0x0201`). Returns
/// `None` for slices longer than four bytes.
pub fn read_uint_le(bytes: &[u8]) -> Option<u32> {
    if bytes.len() > 4 {
        return None;
    }
    let mut padded = [0u8; 4];
    padded[..bytes.len()].copy_from_slice(bytes);
    Some(u32::from_le_bytes(padded))
}

/// Strip trailing NUL padding from a fixed-width field.
pub fn trim_trailing_nuls(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}

/// Format a byte count with fractional KB/MB (e.g., "1.5 KB", "2.3 MB").
pub fn format_bytes_approx(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_le_fields() {
        let buf = [0x00, 0x50, 0x53, 0x46, 0x01, 0x01, 0x00, 0x00];
        assert_eq!(read_u32_le(&buf, 0), 0x4653_5000);
        assert_eq!(read_u32_le(&buf, 4), 0x0101);
        assert_eq!(read_u16_le(&buf, 4), 0x0101);
    }

    #[test]
    fn test_read_uint_le() {
        assert_eq!(read_uint_le(&[]), Some(0));
        assert_eq!(read_uint_le(&[0x2A]), Some(42));
        assert_eq!(read_uint_le(&[0x01, 0x02]), Some(0x0201));
        assert_eq!(read_uint_le(&[0xFF, 0xFF, 0xFF, 0xFF]), Some(u32::MAX));
        assert_eq!(read_uint_le(&[0, 0, 0, 0, 1]), None);
    }

    #[test]
    fn test_trim_trailing_nuls() {
        assert_eq!(trim_trailing_nuls(b"02.00\0\0\0"), b"02.00");
        assert_eq!(trim_trailing_nuls(b"\0\0"), b"");
        assert_eq!(trim_trailing_nuls(b"A\0B"), b"A\0B");
        assert_eq!(trim_trailing_nuls(b""), b"");
    }

    #[test]
    fn test_format_bytes_approx() {
        assert_eq!(format_bytes_approx(0), "0 B");
        assert_eq!(format_bytes_approx(512), "512 B");
        assert_eq!(format_bytes_approx(1536), "1.5 KB");
        assert_eq!(format_bytes_approx(1048576), "1.0 MB");
    }
}
