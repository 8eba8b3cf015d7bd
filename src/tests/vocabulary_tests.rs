//! Tests for vocabulary loading.

use super::test_utils::TestFixture;
use crate::config::vocabulary::VocabularyConfig;
use crate::data_structures::word_filter::WordFilter;
use crate::error::vocabulary::VocabularyError;
use crate::vocabulary::{load, parse};

/// Test that default parsing trims and drops blanks and comments.
#[test]
fn test_parse_defaults() {
    let text = "# fruit\napple\n  apply \n\nape\r\nbanana\n";
    let words = parse(text, &VocabularyConfig::default()).unwrap();
    assert_eq!(words, vec!["apple", "apply", "ape", "banana"]);
}

/// Test that disabling filters keeps lines verbatim.
#[test]
fn test_parse_verbatim() {
    let config = VocabularyConfig {
        trim: false,
        skip_blank_lines: false,
        skip_comments: false,
        ..VocabularyConfig::default()
    };
    let words = parse("#tag\n a\n\nb", &config).unwrap();
    assert_eq!(words, vec!["#tag", " a", "", "b"]);
}

/// Test that duplicate lines keep distinct positions.
#[test]
fn test_parse_keeps_duplicates() {
    let words = parse("apple\napple\napple\n", &VocabularyConfig::default()).unwrap();
    let filter = WordFilter::build(words).unwrap();
    assert_eq!(filter.f("app", "le"), 2);
}

/// Test the word limit.
#[test]
fn test_parse_limit() {
    let config = VocabularyConfig {
        max_words: 2,
        ..VocabularyConfig::default()
    };
    assert_eq!(parse("a\nb\n# c\n\n", &config).unwrap().len(), 2);
    assert!(matches!(
        parse("a\nb\nc", &config),
        Err(VocabularyError::TooManyWords { limit: 2 })
    ));
}

/// Test loading from disk.
#[test]
fn test_load_from_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("words.txt", "apple\napply\nape\nbanana\n").unwrap();

    let words = load(&path, &VocabularyConfig::default()).unwrap();
    let filter = WordFilter::build(words).unwrap();
    assert_eq!(filter.f("ap", "e"), 2);
}

/// Test that read failures carry the path.
#[test]
fn test_load_missing_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("missing.txt");

    match load(&path, &VocabularyConfig::default()) {
        Err(VocabularyError::Read { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected read error, got {other:?}"),
    }
}
