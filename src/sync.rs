//! Whole-tree locking wrapper.
//!
//! The core trie is single-threaded by design: one logical mutation rewrites
//! several nodes, so per-node locking cannot keep observers away from a
//! mid-split state. The only sound granularity is the whole structure, one
//! lock acquisition per public call. This wrapper provides exactly that on
//! top of `parking_lot::RwLock`; reads take the shared lock and clone values
//! out so no guard escapes.

use parking_lot::RwLock;

use crate::error::InvalidKey;
use crate::tree::RadixTree;

/// A [`RadixTree`] behind a reader/writer lock, safe to share across
/// threads.
///
/// ```rust
/// use bytetrie::SyncRadixTree;
///
/// let tree: SyncRadixTree<u64> = SyncRadixTree::new();
/// tree.insert("user:1001", 42).unwrap();
/// assert_eq!(tree.get("user:1001"), Some(42));
/// ```
pub struct SyncRadixTree<V> {
    inner: RwLock<RadixTree<V>>,
}

impl<V: Clone> SyncRadixTree<V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RadixTree::new()),
        }
    }

    /// Insert `key` with `value`, overwriting and returning the previous
    /// value on an exact match.
    pub fn insert(&self, key: impl AsRef<[u8]>, value: V) -> Result<Option<V>, InvalidKey> {
        self.inner.write().insert(key, value)
    }

    /// Insert `key` only if absent. Returns whether the insertion happened.
    pub fn insert_if_absent(&self, key: impl AsRef<[u8]>, value: V) -> Result<bool, InvalidKey> {
        self.inner.write().insert_if_absent(key, value)
    }

    /// Remove the exact `key`, returning its value.
    pub fn remove(&self, key: impl AsRef<[u8]>) -> Option<V> {
        self.inner.write().remove(key)
    }

    /// Remove every key that `prefix` is a prefix of. An empty prefix
    /// clears the tree.
    pub fn remove_prefix(&self, prefix: impl AsRef<[u8]>) {
        self.inner.write().remove_prefix(prefix);
    }

    /// Remove every key.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Clone out the value stored for `key`.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<V> {
        self.inner.read().get(key).cloned()
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        self.inner.read().contains(key)
    }

    /// Collect every `(key, value)` pair, in lexicographic order. The
    /// snapshot is taken under the read lock.
    pub fn entries(&self) -> Vec<(Vec<u8>, V)> {
        self.inner
            .read()
            .iter()
            .map(|(k, v)| (k, v.clone()))
            .collect()
    }

    /// Collect the `(key, value)` pairs whose keys start with `prefix`.
    pub fn entries_with_prefix(&self, prefix: impl AsRef<[u8]>) -> Vec<(Vec<u8>, V)> {
        self.inner
            .read()
            .scan_prefix(prefix)
            .map(|(k, v)| (k, v.clone()))
            .collect()
    }

    /// Number of keys, counted by a full traversal under the read lock.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<V: Clone> Default for SyncRadixTree<V> {
    fn default() -> Self {
        Self::new()
    }
}
