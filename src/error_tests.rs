use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = DarkGuardError::Config("unknown algorithm".to_string());
    assert_eq!(err.to_string(), "Configuration error: unknown algorithm");
}

#[test]
fn error_display_file_read() {
    let err = DarkGuardError::FileRead {
        path: PathBuf::from("custom.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("custom.toml"));
}

#[test]
fn error_display_not_a_directory() {
    let err = DarkGuardError::NotADirectory(PathBuf::from("notes.txt"));
    assert_eq!(err.to_string(), "notes.txt is not a valid path to validate");
}

#[test]
fn error_display_invalid_skip_lists_every_name() {
    let err = DarkGuardError::InvalidSkip(vec![
        "valid-windows-filename".to_string(),
        "bogus".to_string(),
    ]);
    assert_eq!(
        err.to_string(),
        "Invalid --skip value(s): valid-windows-filename, bogus"
    );
}

#[test]
fn error_display_duplicate_rule() {
    let err = DarkGuardError::DuplicateRule("no-spaces".to_string());
    assert_eq!(err.to_string(), "Rule \"no-spaces\" is already registered");
}

#[test]
fn error_io_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: DarkGuardError = io.into();
    assert!(matches!(err, DarkGuardError::Io(_)));
    assert_eq!(err.error_type(), "IO");
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(DarkGuardError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(
        DarkGuardError::NotADirectory(PathBuf::from("x")).error_type(),
        "Path"
    );
    assert_eq!(DarkGuardError::InvalidSkip(Vec::new()).error_type(), "Usage");
    assert_eq!(
        DarkGuardError::DuplicateRule("x".to_string()).error_type(),
        "Registry"
    );
}

#[test]
fn suggestion_present_for_usage_errors() {
    assert!(DarkGuardError::InvalidSkip(vec!["x".to_string()])
        .suggestion()
        .is_some());
    assert!(DarkGuardError::DuplicateRule("x".to_string())
        .suggestion()
        .is_none());
}

#[test]
fn usage_error_displays_message_as_is() {
    let err = DarkGuardError::Usage("Cannot combine --quick and --sha-output".to_string());
    assert_eq!(err.to_string(), "Cannot combine --quick and --sha-output");
    assert_eq!(err.error_type(), "Usage");
}
