//! Suffix index built on top of [`Trie`].
//!
//! Words are reversed on the way in and queries on the way out, so every
//! suffix lookup is a plain prefix walk on the wrapped trie. Reversal is by
//! Unicode scalar value, not by grapheme cluster.

use super::{Alphabet, CharMap, Trie, TrieResult};

/// A [`Trie`] over the reversed vocabulary, answering "which words end with".
#[derive(Debug)]
pub struct ReversedTrie<A = CharMap> {
    inner: Trie<A>,
}

impl<A: Alphabet> ReversedTrie<A> {
    /// Builds the suffix index over `words`, assigning indices in iteration order.
    pub fn build<I, S>(words: I) -> TrieResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inner = Trie::<A>::empty();
        for word in words {
            let index = inner.len();
            inner.insert(index, word.as_ref().chars().rev())?;
        }

        tracing::debug!(
            words = inner.len(),
            nodes = inner.node_count(),
            alphabet = A::NAME,
            "Built suffix trie"
        );
        Ok(Self { inner })
    }

    /// Returns the indices of every word ending with `suffix`, in increasing order.
    pub fn search(&self, suffix: &str) -> &[usize] {
        self.inner.search_chars(suffix.chars().rev())
    }

    /// Checks whether any word ends with `suffix`.
    pub fn contains_suffix(&self, suffix: &str) -> bool {
        !self.search(suffix).is_empty()
    }

    /// Returns the number of words indexed.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks whether the vocabulary was empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Counts every node of the underlying trie.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }
}
