//! Vocabulary loading.
//!
//! A vocabulary file holds one word per line. Line order defines word
//! indices, so the n-th accepted line becomes index n - 1.

use std::path::Path;

use crate::config::vocabulary::VocabularyConfig;
use crate::error::vocabulary::VocabularyError;

/// Parses a word list from `text` according to `config`.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The accepted words in file order.
/// * `Err(VocabularyError::TooManyWords)` - If more than `max_words` lines are accepted.
pub fn parse(text: &str, config: &VocabularyConfig) -> Result<Vec<String>, VocabularyError> {
    let mut words = Vec::new();

    for line in text.lines() {
        let word = if config.trim { line.trim() } else { line };

        if config.skip_blank_lines && word.is_empty() {
            continue;
        }
        if config.skip_comments && word.starts_with('#') {
            continue;
        }
        if words.len() == config.max_words {
            return Err(VocabularyError::TooManyWords {
                limit: config.max_words,
            });
        }
        words.push(word.to_string());
    }

    Ok(words)
}

/// Reads and parses the word list at `path`.
pub fn load(path: &Path, config: &VocabularyConfig) -> Result<Vec<String>, VocabularyError> {
    let text = std::fs::read_to_string(path).map_err(|source| VocabularyError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse(&text, config)?;
    tracing::info!(path = %path.display(), words = words.len(), "Loaded vocabulary");
    Ok(words)
}
