//! # bytetrie
//!
//! A compressed prefix tree (radix trie) over byte-sequence keys.
//!
//! Edge labels hold whole byte runs rather than single bytes, so chains of
//! single-child nodes never exist: inserting splits or forks edges as keys
//! overlap, and deleting prunes nodes that no longer mark a key. Keys are
//! raw bytes with no normalization; anything `AsRef<[u8]>` is accepted.
//!
//! Three entry points:
//!
//! - [`RadixTree`] maps keys to values.
//! - [`RadixSet`] records key existence only.
//! - [`SyncRadixTree`] shares a tree across threads behind a whole-structure
//!   reader/writer lock.
//!
//! ## Example
//!
//! ```rust
//! use bytetrie::RadixTree;
//!
//! let mut tree: RadixTree<u32> = RadixTree::new();
//! tree.insert("apple", 1).unwrap();
//! tree.insert("apply", 2).unwrap();
//! tree.insert("actively", 3).unwrap();
//!
//! assert_eq!(tree.get("apple"), Some(&1));
//! assert!(!tree.contains("app"));
//!
//! let apps: Vec<_> = tree.scan_prefix("app").map(|(k, _)| k).collect();
//! assert_eq!(apps, vec![b"apple".to_vec(), b"apply".to_vec()]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod debug;
mod error;
mod node;
mod set;
mod sync;
mod tree;

#[cfg(test)]
mod proptests;

pub use error::InvalidKey;
pub use set::RadixSet;
pub use sync::SyncRadixTree;
pub use tree::{Iter, RadixTree};
