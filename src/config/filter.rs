//! Filter configuration module.
//!
//! This module selects the trie alphabet and the matching options used when
//! the word filter is built.

use super::{ConfigResult, Validate};
use crate::data_structures::word_filter::FilterOptions;
use serde::{Deserialize, Serialize};

/// Child-table strategy for both tries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetKind {
    /// Hash-map children keyed by any Unicode scalar value
    #[default]
    Unicode,
    /// Fixed 26-slot children, `a..=z` only
    Lowercase,
}

/// Filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Alphabet used by the tries
    pub alphabet: AlphabetKind,

    /// Whether words and queries are matched case-sensitively
    pub case_sensitive: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            alphabet: AlphabetKind::default(),
            case_sensitive: true,
        }
    }
}

impl FilterConfig {
    /// Matching options derived from this configuration.
    pub fn options(&self) -> FilterOptions {
        FilterOptions::new().case_sensitive(self.case_sensitive)
    }
}

impl Validate for FilterConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Every combination of alphabet and case folding is valid
        Ok(())
    }
}
