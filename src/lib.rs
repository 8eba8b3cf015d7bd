//! Word Filter Library
//!
//! This library answers "which is the last vocabulary word that starts with
//! P and ends with S" with a pair of index tries: one over the words, one over
//! the reversed words. The library is designed to be used by the binary
//! crate, but can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::affix_trie`] holds the prefix trie and its reversed
//!   (suffix) counterpart
//! - [`data_structures::word_filter`] composes both and merges their sorted
//!   index lists
//! - [`config`], [`error`] and [`vocabulary`] provide the surrounding
//!   configuration, error handling and word list loading

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod vocabulary;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

pub use data_structures::{FilterOptions, WordFilter};
pub use error::{WordFilterError, WordFilterResult};

/// Version information for the word filter.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
