//! The key-value radix tree facade.
//!
//! `RadixTree` owns a single root node for its whole lifetime and forwards
//! every operation to it; all structural work happens in [`crate::node`].
//! Keys are raw byte sequences with no normalization, accepted as anything
//! `AsRef<[u8]>` so both byte slices and text work.

use crate::error::InvalidKey;
use crate::node::{longest_common_prefix, Node};

/// A compressed radix trie mapping byte-sequence keys to values.
///
/// Re-inserting an existing key overwrites its value; use
/// [`insert_if_absent`](RadixTree::insert_if_absent) for keep-old semantics.
/// The structure is not internally synchronized — wrap it in
/// [`SyncRadixTree`](crate::SyncRadixTree) (or your own lock around each
/// public call) for concurrent writers.
///
/// # Example
///
/// ```rust
/// use bytetrie::RadixTree;
///
/// let mut tree: RadixTree<u64> = RadixTree::new();
/// tree.insert("apple", 1).unwrap();
/// tree.insert("apply", 2).unwrap();
///
/// assert_eq!(tree.get("apple"), Some(&1));
/// assert_eq!(tree.len(), 2);
///
/// tree.remove_prefix("app");
/// assert!(tree.is_empty());
/// ```
pub struct RadixTree<V> {
    root: Node<V>,
}

impl<V> RadixTree<V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: Node::root() }
    }

    /// Insert `key` with `value`, overwriting and returning the previous
    /// value on an exact match.
    ///
    /// An empty key is rejected: it would be ambiguous with the root itself.
    pub fn insert(&mut self, key: impl AsRef<[u8]>, value: V) -> Result<Option<V>, InvalidKey> {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(InvalidKey);
        }
        Ok(self.root.insert(key, value))
    }

    /// Insert `key` with `value` only if the key is not already present.
    /// Returns whether the insertion happened.
    pub fn insert_if_absent(
        &mut self,
        key: impl AsRef<[u8]>,
        value: V,
    ) -> Result<bool, InvalidKey> {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(InvalidKey);
        }
        if self.root.get(key).is_some() {
            return Ok(false);
        }
        self.root.insert(key, value);
        Ok(true)
    }

    /// Remove the exact `key`, returning its value. Absent keys (and the
    /// empty key, which can never be present) are a no-op.
    pub fn remove(&mut self, key: impl AsRef<[u8]>) -> Option<V> {
        let key = key.as_ref();
        if key.is_empty() {
            return None;
        }
        self.root.remove(key)
    }

    /// Remove every key that `prefix` is a prefix of, the exact match
    /// included. An empty prefix clears the whole tree.
    pub fn remove_prefix(&mut self, prefix: impl AsRef<[u8]>) {
        let prefix = prefix.as_ref();
        if prefix.is_empty() {
            self.root.children.clear();
        } else {
            self.root.remove_prefix(prefix);
        }
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.root.children.clear();
    }

    /// Look up the value stored for `key`.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&V> {
        let key = key.as_ref();
        if key.is_empty() {
            return None;
        }
        self.root.get(key)
    }

    /// Whether `key` was inserted and not since deleted.
    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        self.get(key).is_some()
    }

    /// Invoke `visit` for every key in the tree with its value. Keys are
    /// reconstructed root-to-node and handed out in lexicographic order.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&[u8], &V),
    {
        let mut buf = Vec::new();
        self.root.visit_all(&mut buf, &mut visit);
    }

    /// Invoke `visit` for every key starting with `prefix`. Visited keys are
    /// full keys, not suffixes. An empty prefix visits everything.
    pub fn for_each_prefix<F>(&self, prefix: impl AsRef<[u8]>, mut visit: F)
    where
        F: FnMut(&[u8], &V),
    {
        let mut buf = Vec::new();
        self.root.visit_prefix(prefix.as_ref(), &mut buf, &mut visit);
    }

    /// Iterate over all `(key, value)` pairs in lexicographic key order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            stack: vec![(Vec::new(), &self.root)],
        }
    }

    /// Iterate over the `(key, value)` pairs whose keys start with `prefix`.
    pub fn scan_prefix(&self, prefix: impl AsRef<[u8]>) -> Iter<'_, V> {
        let mut prefix = prefix.as_ref();
        if prefix.is_empty() {
            return self.iter();
        }
        // Walk edges that the prefix fully consumes; the first child whose
        // edge the remaining prefix ends inside (or matches) roots the scan.
        let mut buf = Vec::new();
        let mut node = &self.root;
        loop {
            let Ok(idx) = node
                .children
                .binary_search_by_key(&prefix[0], |c| c.segment[0])
            else {
                return Iter { stack: Vec::new() };
            };
            let child = &node.children[idx];
            let lcp = longest_common_prefix(&child.segment, prefix);
            if lcp == prefix.len() {
                return Iter {
                    stack: vec![(buf, child)],
                };
            }
            if lcp < child.segment.len() {
                return Iter { stack: Vec::new() };
            }
            buf.extend_from_slice(&child.segment);
            node = child;
            prefix = &prefix[lcp..];
        }
    }

    /// Number of keys in the tree, counted by a full traversal of the live
    /// structure. O(n); nothing is cached.
    pub fn len(&self) -> usize {
        let mut n = 0;
        self.for_each(|_, _| n += 1);
        n
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    pub(crate) fn root(&self) -> &Node<V> {
        &self.root
    }
}

impl<V> Default for RadixTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first iterator over `(key, value)` pairs.
///
/// Each stack entry carries the key bytes accumulated above a pending node;
/// popping appends the node's own segment, yields if terminal, and schedules
/// the children in reverse so the leftmost sibling is visited first.
pub struct Iter<'a, V> {
    stack: Vec<(Vec<u8>, &'a Node<V>)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Vec<u8>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((mut key, node)) = self.stack.pop() {
            key.extend_from_slice(&node.segment);
            for child in node.children.iter().rev() {
                self.stack.push((key.clone(), child));
            }
            if let Some(value) = &node.value {
                return Some((key, value));
            }
        }
        None
    }
}
