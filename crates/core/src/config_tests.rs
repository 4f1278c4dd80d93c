// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn defaults_match_deployment() {
    let config = Config::default();
    assert_eq!(config.database_path, PathBuf::from("points.db"));
    assert_eq!(config.owner_id, None);
    assert_eq!(config.history.page_size, 10);
    assert_eq!(config.history.timeout, Duration::from_secs(60));
    assert_eq!(config.manage.page_size, 5);
    assert_eq!(config.manage.timeout, Duration::from_secs(120));
}

#[test]
fn empty_toml_yields_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.history.page_size, 10);
}

#[test]
fn parses_full_config() {
    let config = Config::parse(
        r#"
database_path = "/var/lib/kudos/ledger.db"
owner_id = 923600698967461898

[history]
page_size = 20
timeout = "90s"

[manage]
page_size = 8
timeout = "5m"
"#,
    )
    .unwrap();

    assert_eq!(config.database_path, PathBuf::from("/var/lib/kudos/ledger.db"));
    assert_eq!(config.owner_id, Some(UserId(923600698967461898)));
    assert_eq!(config.history.page_size, 20);
    assert_eq!(config.history.timeout, Duration::from_secs(90));
    assert_eq!(config.manage.page_size, 8);
    assert_eq!(config.manage.timeout, Duration::from_secs(300));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Config::parse("database_path = [").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn load_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kudos.toml");
    std::fs::write(&path, "[manage]\npage_size = 3\ntimeout = \"30s\"\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.manage.page_size, 3);
    // Unspecified sections keep their defaults
    assert_eq!(config.history.page_size, 10);
}

#[test]
fn load_missing_file_is_io_error() {
    let err = Config::load(Path::new("/nonexistent/kudos.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
