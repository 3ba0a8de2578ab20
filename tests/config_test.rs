//! Configuration file loading.

use std::io::Write;
use std::path::PathBuf;
use strictly_hangman_tui::{EmptyAnswer, GameConfig};
use tempfile::NamedTempFile;

#[test]
fn test_config_file_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "word_list = \"animals.txt\"").unwrap();
    writeln!(file, "track_streak = false").unwrap();
    writeln!(file, "empty_answer = \"reprompt\"").unwrap();
    writeln!(file, "seed = 42").unwrap();

    let config = GameConfig::from_file(file.path()).expect("Config should parse");
    assert_eq!(config.word_list(), &PathBuf::from("animals.txt"));
    assert!(!config.track_streak());
    assert_eq!(*config.empty_answer(), EmptyAnswer::Reprompt);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("hangman.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
    assert!(config.track_streak());
    assert_eq!(*config.empty_answer(), EmptyAnswer::Quit);
}

#[test]
fn test_unreadable_config_reports_location() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be read as a file
    let err = GameConfig::from_file(dir.path()).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));
}
