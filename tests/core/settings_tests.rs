//! Tests for user settings persistence
//!
//! Tests cover:
//! - Default settings values
//! - Serialization/deserialization
//! - Saving and loading through a file
//! - Fallback on missing or broken files

use crate::common::write_temp_file;
use lunastory::settings::UserSettings;
use lunastory::state::{DetailMode, FontScale};
use std::path::PathBuf;

// ============================================
// Default Settings Tests
// ============================================

#[test]
fn test_settings_defaults() {
    let settings = UserSettings::default();
    assert_eq!(settings.version, 1);
    assert_eq!(settings.last_data_file, None);
    assert_eq!(settings.last_story_file, None);
    assert_eq!(settings.detail_mode, DetailMode::ToggleInPlace);
    assert_eq!(settings.font_scale, FontScale::Medium);
}

// ============================================
// Serialization Tests
// ============================================

#[test]
fn test_settings_deserialize_partial() {
    let settings: UserSettings = serde_json::from_str(r#"{"detail_mode": "OpenEventPage"}"#).unwrap();
    assert_eq!(settings.version, 1);
    assert_eq!(settings.detail_mode, DetailMode::OpenEventPage);
    assert_eq!(settings.font_scale, FontScale::Medium);
}

#[test]
fn test_settings_deserialize_empty_object() {
    let settings: UserSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, UserSettings::default());
}

// ============================================
// File Persistence Tests
// ============================================

#[test]
fn test_settings_save_and_load() {
    let placeholder = write_temp_file("placeholder.txt", "");
    let path = placeholder
        .parent()
        .expect("temp file has a parent")
        .join("nested")
        .join("settings.json");

    let settings = UserSettings {
        last_data_file: Some(PathBuf::from("/data/market_chart.json")),
        last_story_file: Some(PathBuf::from("/data/story.json")),
        detail_mode: DetailMode::OpenEventPage,
        font_scale: FontScale::Large,
        ..UserSettings::default()
    };
    settings.save_to(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains('\n'), "settings should be pretty printed");

    assert_eq!(UserSettings::load_from(&path), settings);
}

#[test]
fn test_settings_missing_file_gives_defaults() {
    let path = std::env::temp_dir().join("lunastory-tests-does-not-exist").join("settings.json");
    assert_eq!(UserSettings::load_from(&path), UserSettings::default());
}

#[test]
fn test_settings_broken_file_gives_defaults() {
    let path = write_temp_file("settings.json", "{ not json");
    assert_eq!(UserSettings::load_from(&path), UserSettings::default());
}
