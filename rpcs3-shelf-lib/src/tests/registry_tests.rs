use super::*;
use tempfile::TempDir;

fn ids(entries: &[CatalogEntry]) -> Vec<&str> {
    entries.iter().map(CatalogEntry::id).collect()
}

#[test]
fn test_parse_line() {
    assert_eq!(
        parse_line("BLUS30443: /games/demons/"),
        Some(("BLUS30443", "/games/demons/"))
    );
    assert_eq!(
        parse_line("  NPUA80083:   /hdd/game/NPUA80083  "),
        Some(("NPUA80083", "/hdd/game/NPUA80083"))
    );
}

#[test]
fn test_parse_line_requires_space_after_colon() {
    assert_eq!(parse_line("B:/games/B"), None);
    assert_eq!(parse_line("no separator here"), None);
    assert_eq!(parse_line(""), None);
}

#[test]
fn test_parse_line_splits_at_first_separator() {
    assert_eq!(
        parse_line("BLES00001: C:: weird: path"),
        Some(("BLES00001", "C:: weird: path"))
    );
}

#[test]
fn test_windows_drive_paths() {
    // "C:/" has no space after the colon, so only the first ": " splits.
    assert_eq!(
        parse_line("BLUS30443: C:/Games/Demon's Souls/"),
        Some(("BLUS30443", "C:/Games/Demon's Souls/"))
    );
}

#[test]
fn test_parse_registry_skips_malformed_lines() {
    let entries = parse_registry("A: /games/A\nB:/games/B\nmalformed line\nC: /games/C");
    assert_eq!(ids(&entries), ["A", "C"]);
    assert_eq!(entries[0].directory(), Path::new("/games/A"));
    assert_eq!(entries[1].directory(), Path::new("/games/C"));
}

#[test]
fn test_parse_registry_keeps_order_and_duplicates() {
    let entries = parse_registry("Z: /z\nA: /a\nZ: /z2\n");
    assert_eq!(ids(&entries), ["Z", "A", "Z"]);
}

#[test]
fn test_parse_registry_empty_and_crlf() {
    assert!(parse_registry("").is_empty());
    assert!(parse_registry("\n\n   \n").is_empty());

    let entries = parse_registry("A: /games/A\r\nB: /games/B\r\n");
    assert_eq!(ids(&entries), ["A", "B"]);
    assert_eq!(entries[1].directory(), Path::new("/games/B"));
}

#[test]
fn test_parse_registry_does_not_resolve_metadata() {
    let entries = parse_registry("A: /nonexistent/A");
    assert!(!entries[0].is_resolved());
}

#[test]
fn test_read_registry() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("games.yml");
    std::fs::write(&path, "BLUS30443: /games/demons/\nNPUA80083: /hdd/flower/\n").unwrap();

    let entries = read_registry(&path).unwrap();
    assert_eq!(ids(&entries), ["BLUS30443", "NPUA80083"]);
}

#[test]
fn test_read_registry_missing_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("games.yml");

    match read_registry(&path).unwrap_err() {
        CatalogError::RegistryUnreadable { path: p, source } => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_read_registry_invalid_utf8() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("games.yml");
    std::fs::write(&path, [0xFF, 0xFE, b':', b' ', b'x']).unwrap();

    assert!(matches!(
        read_registry(&path),
        Err(CatalogError::RegistryUnreadable { .. })
    ));
}
