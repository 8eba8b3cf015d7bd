//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use super::test_utils::TestFixture;
use crate::config::filter::AlphabetKind;
use crate::config::vocabulary::VocabularyConfig;
use crate::config::{ConfigLoader, LogConfig, Validate, WordFilterConfig};
use crate::error::config::ConfigError;
use std::path::PathBuf;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = WordFilterConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.filter.alphabet, AlphabetKind::Unicode);
    assert!(config.filter.case_sensitive);
    assert!(config.vocabulary.path.is_none());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = WordFilterConfig::default();

    config.vocabulary.max_words = 0;
    assert!(config.validate().is_err());

    config.vocabulary.max_words = 10;
    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test that validation fails for various invalid configurations.
#[test]
fn test_specific_validation_rules() {
    let vocabulary = VocabularyConfig {
        path: Some(PathBuf::new()),
        ..VocabularyConfig::default()
    };
    assert!(matches!(
        vocabulary.validate(),
        Err(ConfigError::ValidationError(_))
    ));

    for level in ["trace", "debug", "info", "warn", "error"] {
        let log = LogConfig {
            level: level.to_string(),
            ..LogConfig::default()
        };
        assert!(log.validate().is_ok(), "level {level} should be valid");
    }
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
    [filter]
    alphabet = "lowercase"
    case_sensitive = false

    [vocabulary]
    path = "words.txt"
    max_words = 50
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_WF_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.filter.alphabet, AlphabetKind::Lowercase);
    assert!(!config.filter.case_sensitive);
    assert_eq!(config.vocabulary.path, Some(PathBuf::from("words.txt")));
    assert_eq!(config.vocabulary.max_words, 50);

    // Other values should be defaults
    assert!(config.vocabulary.trim);
    assert_eq!(config.log.level, "info");
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config.json", r#"{ "log": { "level": "warn", "json": true } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_WF_JSON")
        .load()
        .unwrap();
    assert_eq!(config.log.level, "warn");
    assert!(config.log.json);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_env_test.toml",
            r#"
    [filter]
    alphabet = "unicode"
    "#,
        )
        .unwrap();

    fixture.set_env("TEST_WF_ENV__FILTER__ALPHABET", "lowercase");
    fixture.set_env("TEST_WF_ENV__VOCABULARY__MAX_WORDS", "7");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_WF_ENV");
    let config = loader.load().unwrap();

    assert_eq!(config.filter.alphabet, AlphabetKind::Lowercase);
    assert_eq!(config.vocabulary.max_words, 7);
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("absent.toml");

    let err = ConfigLoader::new(Some(&path), "TEST_WF_MISSING")
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(p) if p == path));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "invalid.toml",
            r#"
    [filter
    alphabet = lowercase"
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_WF_INVALID");
    assert!(loader.load().is_err());
}

/// Test that an unknown alphabet name is rejected.
#[test]
fn test_unknown_alphabet_is_rejected() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("alphabet.toml", "[filter]\nalphabet = \"klingon\"\n")
        .unwrap();

    let err = ConfigLoader::new(Some(&config_path), "TEST_WF_ALPHABET")
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

/// Test that unsupported extensions are rejected before reading.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.create_file("config.ini", "level=info").unwrap();

    let err = ConfigLoader::new(Some(&config_path), "TEST_WF_INI")
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

/// Test that the default configuration survives a TOML round trip through the loader.
#[test]
fn test_generated_config_loads() {
    let fixture = TestFixture::new().unwrap();
    let rendered = toml::to_string_pretty(&WordFilterConfig::default()).unwrap();
    let config_path = fixture.create_file("generated.toml", rendered).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_WF_GENERATED")
        .load()
        .unwrap();
    assert_eq!(config.filter.alphabet, AlphabetKind::Unicode);
    assert_eq!(config.vocabulary.max_words, VocabularyConfig::default().max_words);
}
