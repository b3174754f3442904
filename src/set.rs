//! Existence-only trie flavor.
//!
//! A `RadixSet` records which keys were added, with no payload. It is the
//! map flavor instantiated at `V = ()`: the terminal marking is the data,
//! and both flavors share every structural algorithm.

use crate::error::InvalidKey;
use crate::tree::RadixTree;

/// A compressed radix trie recording key existence only.
///
/// ```rust
/// use bytetrie::RadixSet;
///
/// let mut set = RadixSet::new();
/// set.insert("apple").unwrap();
/// set.insert("apply").unwrap();
///
/// assert!(set.contains("apple"));
/// assert!(!set.contains("appl"));
/// ```
pub struct RadixSet {
    tree: RadixTree<()>,
}

impl RadixSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            tree: RadixTree::new(),
        }
    }

    /// Add `key` to the set. Returns whether the key was newly added. An
    /// empty key is rejected.
    pub fn insert(&mut self, key: impl AsRef<[u8]>) -> Result<bool, InvalidKey> {
        Ok(self.tree.insert(key, ())?.is_none())
    }

    /// Whether `key` was added and not since removed.
    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        self.tree.contains(key)
    }

    /// Remove the exact `key`. Returns whether it was present.
    pub fn remove(&mut self, key: impl AsRef<[u8]>) -> bool {
        self.tree.remove(key).is_some()
    }

    /// Remove every key that `prefix` is a prefix of, the exact match
    /// included. An empty prefix clears the set.
    pub fn remove_prefix(&mut self, prefix: impl AsRef<[u8]>) {
        self.tree.remove_prefix(prefix);
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Invoke `visit` for every key, in lexicographic order.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&[u8]),
    {
        self.tree.for_each(|key, _| visit(key));
    }

    /// Invoke `visit` for every key starting with `prefix`.
    pub fn for_each_prefix<F>(&self, prefix: impl AsRef<[u8]>, mut visit: F)
    where
        F: FnMut(&[u8]),
    {
        self.tree.for_each_prefix(prefix, |key, _| visit(key));
    }

    /// Iterate over all keys in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = Vec<u8>> + '_ {
        self.tree.iter().map(|(key, _)| key)
    }

    /// Iterate over the keys starting with `prefix`.
    pub fn scan_prefix(&self, prefix: impl AsRef<[u8]>) -> impl Iterator<Item = Vec<u8>> + '_ {
        self.tree.scan_prefix(prefix).map(|(key, _)| key)
    }

    /// Number of keys, counted by a full traversal.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

impl Default for RadixSet {
    fn default() -> Self {
        Self::new()
    }
}
