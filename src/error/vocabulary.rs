//! Vocabulary error module.
//!
//! Errors raised while reading a word list from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a vocabulary.
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// Error when the vocabulary file cannot be read.
    #[error("Failed to read vocabulary file {path:?}: {source}")]
    Read {
        /// The file that failed to read
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error when the vocabulary holds more words than allowed.
    #[error("Vocabulary exceeds the limit of {limit} words")]
    TooManyWords {
        /// The configured limit
        limit: usize,
    },
}
