//! Node implementation for the affix trie.
//!
//! Each node stands for one character position of a shared prefix and records
//! every vocabulary index whose word passes through it.

use super::alphabet::Alphabet;

/// A node in the affix trie.
#[derive(Debug, Default)]
pub struct TrieNode<A> {
    /// Child table, keyed by the next character
    pub(crate) children: A,

    /// Word indices passing through this node, strictly increasing
    pub(crate) indexes: Vec<usize>,
}

impl<A: Alphabet> TrieNode<A> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: A::default(),
            indexes: Vec::new(),
        }
    }

    /// Word indices recorded at this node, in increasing order.
    pub fn indexes(&self) -> &[usize] {
        &self.indexes
    }

    /// Appends `index`, keeping the list strictly increasing.
    ///
    /// A word visiting the same node twice cannot happen (every step goes one
    /// level deeper), so an equal tail is never expected.
    pub(crate) fn record(&mut self, index: usize) {
        debug_assert!(self.indexes.last().map_or(true, |&last| last < index));
        self.indexes.push(index);
    }
}
