//! Child-table strategies for trie nodes.
//!
//! [`CharMap`] accepts any Unicode scalar value and is the default.
//! [`LowercaseAscii`] stores children in a fixed 26-slot array indexed by
//! `c - 'a'` and rejects everything else at build time.

use fnv::FnvHashMap;

use super::node::TrieNode;

/// Storage strategy for the children of a [`TrieNode`].
pub trait Alphabet: Default + Sized {
    /// Human readable name, used in error messages and logs.
    const NAME: &'static str;

    /// Returns the child reached through `c`, if any.
    fn child(&self, c: char) -> Option<&TrieNode<Self>>;

    /// Returns the child reached through `c`, creating it when missing.
    ///
    /// Returns `None` when `c` is outside the alphabet.
    fn child_or_insert(&mut self, c: char) -> Option<&mut TrieNode<Self>>;

    /// Calls `f` once for every direct child.
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'a TrieNode<Self>));
}

/// Children keyed by arbitrary `char` in a hash map.
#[derive(Debug, Default)]
pub struct CharMap {
    children: FnvHashMap<char, TrieNode<CharMap>>,
}

impl Alphabet for CharMap {
    const NAME: &'static str = "unicode";

    fn child(&self, c: char) -> Option<&TrieNode<Self>> {
        self.children.get(&c)
    }

    fn child_or_insert(&mut self, c: char) -> Option<&mut TrieNode<Self>> {
        Some(self.children.entry(c).or_default())
    }

    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'a TrieNode<Self>)) {
        for child in self.children.values() {
            f(child);
        }
    }
}

/// Number of slots in a [`LowercaseAscii`] table.
const LOWERCASE_SLOTS: usize = 26;

/// Children stored in a fixed array, one slot per letter `a..=z`.
#[derive(Debug, Default)]
pub struct LowercaseAscii {
    slots: [Option<Box<TrieNode<LowercaseAscii>>>; LOWERCASE_SLOTS],
}

impl LowercaseAscii {
    #[inline]
    fn slot(c: char) -> Option<usize> {
        c.is_ascii_lowercase().then(|| c as usize - 'a' as usize)
    }
}

impl Alphabet for LowercaseAscii {
    const NAME: &'static str = "lowercase";

    fn child(&self, c: char) -> Option<&TrieNode<Self>> {
        let slot = Self::slot(c)?;
        self.slots[slot].as_deref()
    }

    fn child_or_insert(&mut self, c: char) -> Option<&mut TrieNode<Self>> {
        let slot = Self::slot(c)?;
        let node = self.slots[slot].get_or_insert_with(Box::default);
        Some(&mut **node)
    }

    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'a TrieNode<Self>)) {
        for child in self.slots.iter().flatten() {
            f(&**child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_map_accepts_any_char() {
        let mut table = CharMap::default();
        assert!(table.child('é').is_none());
        assert!(table.child_or_insert('é').is_some());
        assert!(table.child_or_insert('Ж').is_some());
        assert!(table.child('é').is_some());

        let mut count = 0;
        table.for_each_child(&mut |_| count += 1);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_lowercase_rejects_outside_range() {
        let mut table = LowercaseAscii::default();
        assert!(table.child_or_insert('a').is_some());
        assert!(table.child_or_insert('z').is_some());
        assert!(table.child_or_insert('A').is_none());
        assert!(table.child_or_insert('{').is_none());
        assert!(table.child_or_insert('`').is_none());
        assert!(table.child('A').is_none());
        assert!(table.child('a').is_some());
    }

    #[test]
    fn test_lowercase_reuses_existing_slot() {
        let mut table = LowercaseAscii::default();
        table.child_or_insert('q').unwrap().record(7);
        assert_eq!(table.child_or_insert('q').unwrap().indexes(), &[7]);
    }
}
