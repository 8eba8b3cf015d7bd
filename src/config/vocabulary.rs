//! Vocabulary configuration module.
//!
//! This module defines where the word list comes from and how its lines are
//! turned into vocabulary entries.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Vocabulary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Path to the word list, one word per line
    pub path: Option<PathBuf>,

    /// Whether to strip leading and trailing whitespace from every line
    pub trim: bool,

    /// Whether to drop empty lines instead of indexing them as empty words
    pub skip_blank_lines: bool,

    /// Whether to drop lines starting with `#`
    pub skip_comments: bool,

    /// Maximum number of words accepted
    pub max_words: usize,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            path: None,
            trim: true,
            skip_blank_lines: true,
            skip_comments: true,
            max_words: 1_000_000,
        }
    }
}

impl Validate for VocabularyConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_words == 0 {
            return Err(ConfigError::ValidationError(
                "max_words must be greater than 0".to_string(),
            ));
        }

        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "vocabulary path must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
