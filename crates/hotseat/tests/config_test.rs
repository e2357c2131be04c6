//! Tests for loading configuration files.

use hotseat::GameConfig;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_file_values_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[players]\none = \"Alice\"\ntwo = \"Bob\"\n\n[logging]\nfile = \"game.log\"\nfilter = \"debug\""
    )
    .unwrap();

    let config = GameConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.players().one(), "Alice");
    assert_eq!(config.players().two(), "Bob");
    assert_eq!(config.logging().file(), &PathBuf::from("game.log"));
    assert_eq!(config.logging().filter(), "debug");
}

#[test]
fn test_invalid_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "players = 3").unwrap();
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_cli_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[players]\none = \"Alice\"").unwrap();
    let config = GameConfig::from_file(file.path())
        .unwrap()
        .with_overrides(Some("Carol".to_string()), None);
    assert_eq!(config.players().one(), "Carol");
    assert_eq!(config.players().two(), "Player 2");
}
