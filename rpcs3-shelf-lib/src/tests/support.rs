//! Fixtures shared by the catalog tests: minimal PARAM.SFO images and
//! title directories on disk.

use std::path::{Path, PathBuf};

use crate::entry::{EBOOT_FILE_NAME, GAME_DIR_NAME, SFO_FILE_NAME, USRDIR_NAME};

pub(crate) enum Value<'a> {
    Text(&'a str),
    Int(u32),
}

/// Encode a PARAM.SFO with the given entries, in order.
pub(crate) fn sfo_bytes(fields: &[(&str, Value<'_>)]) -> Vec<u8> {
    let mut keys = Vec::new();
    let mut data = Vec::new();
    let mut index = Vec::new();

    for (key, value) in fields {
        let key_offset = keys.len() as u16;
        keys.extend_from_slice(key.as_bytes());
        keys.push(0);

        let data_offset = data.len() as u32;
        let (format, bytes): (u16, Vec<u8>) = match value {
            Value::Text(s) => {
                let mut b = s.as_bytes().to_vec();
                b.push(0);
                (0x0204, b)
            }
            Value::Int(n) => (0x0404, n.to_le_bytes().to_vec()),
        };
        let len = bytes.len() as u32;
        data.extend_from_slice(&bytes);

        index.extend_from_slice(&key_offset.to_le_bytes());
        index.extend_from_slice(&format.to_le_bytes());
        index.extend_from_slice(&len.to_le_bytes());
        index.extend_from_slice(&len.to_le_bytes());
        index.extend_from_slice(&data_offset.to_le_bytes());
    }
    while keys.len() % 4 != 0 {
        keys.push(0);
    }

    let key_table_start = 20 + index.len() as u32;
    let data_table_start = key_table_start + keys.len() as u32;

    let mut out = Vec::new();
    out.extend_from_slice(b"\0PSF");
    out.extend_from_slice(&0x0101u32.to_le_bytes());
    out.extend_from_slice(&key_table_start.to_le_bytes());
    out.extend_from_slice(&data_table_start.to_le_bytes());
    out.extend_from_slice(&(fields.len() as u32).to_le_bytes());
    out.extend_from_slice(&index);
    out.extend_from_slice(&keys);
    out.extend_from_slice(&data);
    out
}

/// A typical game PARAM.SFO with `TITLE` and `TITLE_ID`.
pub(crate) fn game_sfo(title: &str, title_id: &str) -> Vec<u8> {
    sfo_bytes(&[
        ("CATEGORY", Value::Text("DG")),
        ("PARENTAL_LEVEL", Value::Int(3)),
        ("TITLE", Value::Text(title)),
        ("TITLE_ID", Value::Text(title_id)),
    ])
}

/// Create `<dir>/PS3_GAME/PARAM.SFO` (disc layout) and return its path.
pub(crate) fn write_disc_title(dir: &Path, sfo: &[u8]) -> PathBuf {
    let game = dir.join(GAME_DIR_NAME);
    std::fs::create_dir_all(&game).unwrap();
    let path = game.join(SFO_FILE_NAME);
    std::fs::write(&path, sfo).unwrap();
    path
}

/// Create `<root>/USRDIR/EBOOT.BIN` with placeholder content.
pub(crate) fn write_eboot(content_root: &Path) -> PathBuf {
    let usrdir = content_root.join(USRDIR_NAME);
    std::fs::create_dir_all(&usrdir).unwrap();
    let path = usrdir.join(EBOOT_FILE_NAME);
    std::fs::write(&path, b"SCE\0").unwrap();
    path
}
