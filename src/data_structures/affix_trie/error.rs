//! Error types for the affix trie.
//!
//! Only construction can fail. Lookups are total and report a miss with an
//! empty index slice.

/// Errors that can occur while building an affix trie.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// A word contains a character the configured alphabet cannot store.
    #[error(
        "Invalid character {character:?} at position {position} of word {word_index} \
         (alphabet: {alphabet})"
    )]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Index of the offending word in the vocabulary.
        word_index: usize,
        /// Character position inside the word, in insertion order.
        position: usize,
        /// Name of the alphabet that rejected the character.
        alphabet: &'static str,
    },
}
