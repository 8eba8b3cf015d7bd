//! Data structures for the word filter.
//!
//! This module contains the index structures behind prefix/suffix queries.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Immutable after construction, shareable by reference across threads
//! - Allocation-free lookups

pub mod affix_trie;
pub mod word_filter;

// Re-export common data structures
pub use affix_trie::{ReversedTrie, Trie, TrieError, TrieResult};
pub use word_filter::{FilterOptions, FilterStats, WordFilter};
