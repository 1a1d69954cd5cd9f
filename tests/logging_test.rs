//! Logging initialization test
//!
//! Kept in its own test binary because the global subscriber can be set once.

use telebill::config::LoggingConfig;
use telebill::utils::logging::init_logging;
use telebill::{InMemoryUserStateStore, TelebillError, UserState, UserStateStore};

#[test]
fn test_init_logging_writes_to_file_once() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = LoggingConfig {
        level: "debug".to_string(),
        directory: Some(dir.path().to_string_lossy().into_owned()),
        file_name: "telebill-test.log".to_string(),
        json: false,
    };

    let guard = init_logging(&config).expect("First initialization should succeed");

    let store = InMemoryUserStateStore::new();
    store.set_state(42, UserState::creating_bill("food")).unwrap();
    store.clear_state(42).unwrap();

    // Second initialization must report instead of panicking
    assert!(matches!(init_logging(&config), Err(TelebillError::Logging(_))));

    drop(guard);

    let written: Vec<_> = std::fs::read_dir(dir.path())
        .expect("Log directory should exist")
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with("telebill-test.log")
        })
        .collect();
    assert_eq!(written.len(), 1);

    let contents = std::fs::read_to_string(written[0].path()).expect("Log file should be readable");
    assert!(contents.contains("User state transition"));
    assert!(contents.contains("User state cleared"));
}

#[test]
fn test_invalid_filter_is_rejected() {
    let config = LoggingConfig {
        level: "telebill=loudest".to_string(),
        ..LoggingConfig::default()
    };

    assert!(matches!(init_logging(&config), Err(TelebillError::Logging(_))));
}
