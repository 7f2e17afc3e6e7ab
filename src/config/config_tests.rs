use super::*;
use crate::error::ButtonKitError;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.initial_story, None);
    assert_eq!(config.get_window_width(), DEFAULT_WINDOW_WIDTH);
    assert_eq!(config.get_window_height(), DEFAULT_WINDOW_HEIGHT);
    assert_eq!(config.get_log_filter(), DEFAULT_LOG_FILTER);
}

#[test]
fn test_window_size_is_clamped() {
    let config = Config {
        window_width: Some(10.0),
        window_height: Some(f32::NAN),
        ..Default::default()
    };
    assert_eq!(config.get_window_width(), MIN_WINDOW_WIDTH);
    assert_eq!(config.get_window_height(), DEFAULT_WINDOW_HEIGHT);
}

#[test]
fn test_config_serialization_uses_camel_case() {
    let config = Config {
        initial_story: Some("button".to_string()),
        window_width: Some(900.0),
        window_height: None,
        log_filter: Some("debug".to_string()),
    };

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"initialStory\":\"button\""));
    assert!(json.contains("\"logFilter\":\"debug\""));
    assert!(!json.contains("windowHeight"));

    let deserialized: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, config);
}

#[test]
fn test_load_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"initialStory":"button-playground","windowWidth":1024}"#);

    let config = load_config_from(&path);
    assert_eq!(config.initial_story.as_deref(), Some("button-playground"));
    assert_eq!(config.get_window_width(), 1024.0);
    assert_eq!(config.get_window_height(), DEFAULT_WINDOW_HEIGHT);
}

#[test]
fn test_load_config_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(&dir.path().join("nope.json"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_config_invalid_json_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{ not json");
    assert_eq!(load_config_from(&path), Config::default());
}

#[test]
fn test_read_config_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"windowWidth":"wide"}"#);
    match read_config(&path) {
        Err(ButtonKitError::ConfigParse(_)) => {}
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_read_config_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    match read_config(&path) {
        Err(ButtonKitError::ConfigRead { path: reported, .. }) => {
            assert!(reported.ends_with("absent.json"));
        }
        other => panic!("expected read error, got {:?}", other),
    }
}

#[test]
fn test_unknown_fields_are_ignored() {
    let config: Config = serde_json::from_str(r#"{"theme":"dark","logFilter":"warn"}"#).unwrap();
    assert_eq!(config.get_log_filter(), "warn");
}
