// Copyright (c) 2025 Word Filter Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix/suffix word filter.
//!
//! [`WordFilter`] answers "which is the last word starting with `prefix` and
//! ending with `suffix`" over a vocabulary fixed at construction. It pairs a
//! forward [`Trie`] with a [`ReversedTrie`] and intersects the two sorted
//! index lists from their tails.
//!
//! # Example
//!
//! ```
//! use word_filter_lib::data_structures::word_filter::WordFilter;
//!
//! let filter = WordFilter::build(["apple", "apply", "ape", "banana"]).unwrap();
//!
//! assert_eq!(filter.f("app", "le"), 0);
//! assert_eq!(filter.f("ap", "e"), 2);
//! assert_eq!(filter.f("app", "na"), -1);
//! assert_eq!(filter.find("", ""), Some(3));
//! ```
//!
//! # Performance Characteristics
//!
//! - Build: O(total characters) for each of the two tries
//! - Query: O(|prefix| + |suffix|) to locate both nodes, then O(|A| + |B|)
//!   for the merge, where A and B are the two index lists
//! - No allocation per query unless case folding is enabled

pub mod merge;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::data_structures::affix_trie::{Alphabet, CharMap, ReversedTrie, Trie, TrieResult};

/// Options applied while building and querying a [`WordFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Whether words and queries are matched case-sensitively
    pub case_sensitive: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

impl FilterOptions {
    /// Creates the default options (case-sensitive).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether matching is case-sensitive.
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    fn fold<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(fold_case(text))
        }
    }
}

/// Lowercases `text` one character at a time, with no word-final rules.
///
/// Every folded affix of a word is an affix of the folded word.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Size summary of a built filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    /// Number of vocabulary entries
    pub words: usize,
    /// Nodes in the prefix trie, root included
    pub prefix_nodes: usize,
    /// Nodes in the suffix trie, root included
    pub suffix_nodes: usize,
}

/// Dual-trie filter over a closed vocabulary.
#[derive(Debug)]
pub struct WordFilter<A = CharMap> {
    /// Vocabulary as supplied, indexed by word index
    words: Vec<String>,

    /// Forward index for prefix lookups
    prefixes: Trie<A>,

    /// Reversed index for suffix lookups
    suffixes: ReversedTrie<A>,

    options: FilterOptions,
}

impl WordFilter<CharMap> {
    /// Builds a case-sensitive filter accepting any Unicode word.
    ///
    /// With the default [`CharMap`] alphabet this never fails; the `Result`
    /// is kept so callers can switch alphabets without changing call sites.
    pub fn build<I, S>(words: I) -> TrieResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_options(words, FilterOptions::default())
    }
}

impl<A: Alphabet> WordFilter<A> {
    /// Builds a filter with the given alphabet and options.
    ///
    /// # Arguments
    ///
    /// * `words` - The vocabulary; indices follow iteration order.
    /// * `options` - Matching options.
    ///
    /// # Returns
    ///
    /// * `Ok(WordFilter)` - The finished filter.
    /// * `Err(TrieError)` - If the alphabet rejects a character. No partially
    ///   built filter is ever returned.
    pub fn with_options<I, S>(words: I, options: FilterOptions) -> TrieResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        let (prefixes, suffixes) = if options.case_sensitive {
            (Trie::<A>::build(&words)?, ReversedTrie::<A>::build(&words)?)
        } else {
            let folded: Vec<String> = words.iter().map(|w| fold_case(w)).collect();
            (Trie::<A>::build(&folded)?, ReversedTrie::<A>::build(&folded)?)
        };

        tracing::debug!(
            words = words.len(),
            case_sensitive = options.case_sensitive,
            alphabet = A::NAME,
            "Built word filter"
        );

        Ok(Self {
            words,
            prefixes,
            suffixes,
            options,
        })
    }

    /// Returns the largest index whose word starts with `prefix` and ends
    /// with `suffix`, or `-1` when there is none.
    pub fn f(&self, prefix: &str, suffix: &str) -> i64 {
        self.find(prefix, suffix)
            .and_then(|index| i64::try_from(index).ok())
            .unwrap_or(-1)
    }

    /// Returns the largest index whose word starts with `prefix` and ends
    /// with `suffix`.
    ///
    /// Empty strings act as wildcards: `find("", "")` is the last index of a
    /// non-empty vocabulary.
    pub fn find(&self, prefix: &str, suffix: &str) -> Option<usize> {
        let prefix = self.options.fold(prefix);
        let suffix = self.options.fold(suffix);

        let starts = self.prefixes.search(&prefix);
        let ends = self.suffixes.search(&suffix);

        let found = merge::max_common(starts, ends);
        tracing::trace!(
            prefix = %prefix,
            suffix = %suffix,
            prefix_matches = starts.len(),
            suffix_matches = ends.len(),
            ?found,
            "Word filter query"
        );
        found
    }

    /// Returns the word stored at `index`, as originally supplied.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Returns the number of vocabulary entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Checks whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the options the filter was built with.
    pub fn options(&self) -> FilterOptions {
        self.options
    }

    /// Returns the prefix index.
    pub fn prefix_trie(&self) -> &Trie<A> {
        &self.prefixes
    }

    /// Returns the suffix index.
    pub fn suffix_trie(&self) -> &ReversedTrie<A> {
        &self.suffixes
    }

    /// Summarises the size of both indices.
    ///
    /// This walks both tries, so it's an O(n) operation.
    pub fn stats(&self) -> FilterStats {
        FilterStats {
            words: self.len(),
            prefix_nodes: self.prefixes.node_count(),
            suffix_nodes: self.suffixes.node_count(),
        }
    }
}
