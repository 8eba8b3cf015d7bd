//! Affix Trie Implementation
//!
//! This module provides the index trie behind the word filter. Every node
//! stores the sorted list of vocabulary indices whose word has the path from
//! the root to that node as a prefix. The root therefore holds every index
//! and a lookup is a single walk followed by a borrowed slice.
//!
//! [`ReversedTrie`] is the same structure built over reversed words, which
//! turns suffix lookups into prefix lookups.
//!
//! The vocabulary is closed at construction. There is no insert or remove
//! after [`Trie::build`] returns, so a built trie can be shared by reference
//! across threads without synchronisation.

mod alphabet;
mod error;
mod node;
mod reversed;

pub use alphabet::{Alphabet, CharMap, LowercaseAscii};
pub use error::TrieError;
pub use node::TrieNode;
pub use reversed::ReversedTrie;

/// Result type for affix trie operations
pub type TrieResult<T> = Result<T, TrieError>;

/// Trie restricted to `a..=z`, backed by fixed child arrays.
pub type LowercaseTrie = Trie<LowercaseAscii>;

/// Prefix index over a fixed vocabulary.
///
/// Key features:
/// * Pluggable child table (see [`Alphabet`])
/// * Per-node index lists kept in increasing order for free, since words are
///   inserted in index order
/// * Allocation-free lookups returning `&[usize]`
#[derive(Debug)]
pub struct Trie<A = CharMap> {
    /// The root node; its index list covers the whole vocabulary
    root: TrieNode<A>,

    /// Number of words indexed
    len: usize,
}

impl<A: Alphabet> Trie<A> {
    /// Builds a trie over `words`, assigning indices in iteration order.
    ///
    /// # Arguments
    ///
    /// * `words` - The vocabulary. Duplicates keep distinct indices.
    ///
    /// # Returns
    ///
    /// * `Ok(Trie)` - The finished trie.
    /// * `Err(TrieError)` - If a word contains a character the alphabet rejects.
    pub fn build<I, S>(words: I) -> TrieResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::empty();
        for word in words {
            let index = trie.len;
            trie.insert(index, word.as_ref().chars())?;
        }

        tracing::debug!(
            words = trie.len,
            nodes = trie.node_count(),
            alphabet = A::NAME,
            "Built prefix trie"
        );
        Ok(trie)
    }

    pub(crate) fn empty() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Records `index` along the path spelled by `chars`.
    ///
    /// `index` must equal the current number of words so every index list
    /// stays strictly increasing.
    pub(crate) fn insert<C>(&mut self, index: usize, chars: C) -> TrieResult<()>
    where
        C: IntoIterator<Item = char>,
    {
        debug_assert_eq!(index, self.len);

        self.root.record(index);
        let mut node = &mut self.root;
        for (position, c) in chars.into_iter().enumerate() {
            node = node
                .children
                .child_or_insert(c)
                .ok_or(TrieError::InvalidCharacter {
                    character: c,
                    word_index: index,
                    position,
                    alphabet: A::NAME,
                })?;
            node.record(index);
        }

        self.len += 1;
        Ok(())
    }

    /// Returns the indices of every word starting with `query`.
    ///
    /// The empty query returns every index. A miss returns an empty slice.
    pub fn search(&self, query: &str) -> &[usize] {
        self.search_chars(query.chars())
    }

    pub(crate) fn search_chars<C>(&self, chars: C) -> &[usize]
    where
        C: IntoIterator<Item = char>,
    {
        self.walk(chars).map(TrieNode::indexes).unwrap_or_default()
    }

    fn walk<C>(&self, chars: C) -> Option<&TrieNode<A>>
    where
        C: IntoIterator<Item = char>,
    {
        let mut node = &self.root;
        for c in chars {
            node = node.children.child(c)?;
        }
        Some(node)
    }

    /// Checks whether any word starts with `query`.
    pub fn contains_prefix(&self, query: &str) -> bool {
        !self.search(query).is_empty()
    }

    /// Returns the number of words indexed.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the vocabulary was empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Counts every node including the root.
    ///
    /// This traverses the whole trie, so it's an O(n) operation.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![&self.root];
        while let Some(node) = pending.pop() {
            count += 1;
            node.children.for_each_child(&mut |child| pending.push(child));
        }
        count
    }
}
