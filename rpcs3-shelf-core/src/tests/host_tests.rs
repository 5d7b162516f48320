use super::*;

#[test]
fn canonical_names_round_trip() {
    for &host in HostPlatform::all() {
        let parsed: HostPlatform = host.short_name().parse().unwrap();
        assert_eq!(parsed, host, "round-trip failed for {:?}", host);
    }
}

#[test]
fn aliases_resolve_correctly() {
    let cases = [
        ("win", HostPlatform::Windows),
        ("WIN64", HostPlatform::Windows),
        ("darwin", HostPlatform::MacOs),
        ("OSX", HostPlatform::MacOs),
        ("Linux", HostPlatform::Linux),
        (" unix ", HostPlatform::Linux),
    ];
    for (input, expected) in cases {
        let parsed: HostPlatform = input.parse().unwrap();
        assert_eq!(
            parsed, expected,
            "alias '{}' should parse to {:?}",
            input, expected
        );
    }
}

#[test]
fn unknown_name_is_rejected() {
    let err = "amiga".parse::<HostPlatform>().unwrap_err();
    assert_eq!(err.to_string(), "unknown host platform: 'amiga'");
}

#[test]
fn executable_names_carry_suffix() {
    for &host in HostPlatform::all() {
        assert!(host.executable_name().ends_with(host.executable_suffix()));
        assert!(host.executable_name().starts_with("rpcs3"));
    }
    assert_eq!(HostPlatform::Windows.executable_name(), "rpcs3.exe");
    assert_eq!(HostPlatform::Linux.executable_suffix(), "");
}

#[test]
fn windows_has_no_default_config_dir() {
    assert_eq!(HostPlatform::Windows.default_config_dir(), None);
}

#[test]
fn unix_default_config_dir_ends_in_rpcs3() {
    if let Some(dir) = HostPlatform::Linux.default_config_dir() {
        assert!(dir.ends_with("rpcs3"));
    }
}

#[test]
fn unix_roots_are_slash() {
    assert_eq!(HostPlatform::Linux.filesystem_roots(), vec!["/".to_string()]);
    assert_eq!(HostPlatform::MacOs.filesystem_roots(), vec!["/".to_string()]);
}

#[test]
fn current_matches_compile_target() {
    let host = HostPlatform::current();
    if cfg!(target_os = "windows") {
        assert_eq!(host, HostPlatform::Windows);
    } else if cfg!(target_os = "macos") {
        assert_eq!(host, HostPlatform::MacOs);
    } else {
        assert_eq!(host, HostPlatform::Linux);
    }
}
