//! Radix trie nodes.
//!
//! A node owns the byte segment labeling the edge from its parent, an
//! optional value (`Some` iff a key ends here), and its children. Children
//! are kept sorted by the first byte of their segment, and no two siblings
//! ever start with the same byte; finding the one child that can match a key
//! is a binary search, and a node never holds two children whose labels
//! could be merged. That uniqueness is what keeps the trie compressed.
//!
//! Every mutation classifies the incoming key against the matching child's
//! segment by longest common prefix: exact match, key ends inside the edge
//! (split), edge exhausted (recurse), or divergence after a shared run
//! (fork). Deletion prunes a child that ends up non-terminal and childless.

use smallvec::SmallVec;

/// Edge labels are short in compressed tries; keep small ones inline.
pub(crate) type Segment = SmallVec<[u8; 8]>;

/// Length of the longest shared leading byte run of `a` and `b`.
pub(crate) fn longest_common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// A single trie node. The root is the one node with an empty segment; it is
/// never terminal and is never replaced for the lifetime of the tree.
pub(crate) struct Node<V> {
    /// Edge label from the parent. Non-empty except on the root.
    pub(crate) segment: Segment,
    /// `Some` iff the root-to-here segment concatenation is a live key.
    pub(crate) value: Option<V>,
    /// Sorted by `segment[0]`, which is unique among siblings.
    pub(crate) children: Vec<Node<V>>,
}

impl<V> Node<V> {
    pub(crate) fn root() -> Self {
        Node {
            segment: Segment::new(),
            value: None,
            children: Vec::new(),
        }
    }

    fn terminal(segment: &[u8], value: V) -> Self {
        Node {
            segment: Segment::from_slice(segment),
            value: Some(value),
            children: Vec::new(),
        }
    }

    pub(crate) fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// Index of the child whose segment starts with `byte`, if any. At most
    /// one can exist.
    fn find_child(&self, byte: u8) -> Result<usize, usize> {
        self.children.binary_search_by_key(&byte, |c| c.segment[0])
    }

    /// Ensure a terminal node exists for `key` below this node, overwriting
    /// the value on an exact match. Returns the previous value if the key
    /// was already present. `key` must be non-empty.
    pub(crate) fn insert(&mut self, key: &[u8], value: V) -> Option<V> {
        debug_assert!(!key.is_empty());
        let idx = match self.find_child(key[0]) {
            Ok(idx) => idx,
            Err(pos) => {
                // No child shares a leading byte with the key: attach a
                // fresh terminal child, keeping siblings sorted.
                self.children.insert(pos, Node::terminal(key, value));
                return None;
            }
        };
        let child = &mut self.children[idx];
        let lcp = longest_common_prefix(&child.segment, key);

        if lcp == key.len() && lcp == child.segment.len() {
            // Exact match, e.g. have "aa", inserting "aa".
            child.value.replace(value)
        } else if lcp == key.len() {
            // The key ends inside the child's edge, e.g. have "aaa",
            // inserting "aa": split the edge. The child keeps its tail and
            // becomes a grandchild of a new terminal node labeled `key`.
            let tail = Node {
                segment: Segment::from_slice(&child.segment[lcp..]),
                value: child.value.take(),
                children: std::mem::take(&mut child.children),
            };
            child.segment.truncate(lcp);
            child.value = Some(value);
            child.children.push(tail);
            None
        } else if lcp == child.segment.len() {
            // The child's edge is a strict prefix of the key, e.g. have
            // "aa", inserting "aaa": descend with the consumed bytes
            // stripped.
            child.insert(&key[lcp..], value)
        } else {
            // Shared run then divergence, e.g. have "abc", inserting "ayz":
            // fork a common-prefix node with the old tail and the new leaf
            // as its two children.
            let tail = Node {
                segment: Segment::from_slice(&child.segment[lcp..]),
                value: child.value.take(),
                children: std::mem::take(&mut child.children),
            };
            let leaf = Node::terminal(&key[lcp..], value);
            child.segment.truncate(lcp);
            child.children = if tail.segment[0] < leaf.segment[0] {
                vec![tail, leaf]
            } else {
                vec![leaf, tail]
            };
            None
        }
    }

    /// Remove the terminal marking for an exact `key` match, returning the
    /// value it held. No-op (`None`) when the key is not present.
    pub(crate) fn remove(&mut self, key: &[u8]) -> Option<V> {
        debug_assert!(!key.is_empty());
        let idx = self.find_child(key[0]).ok()?;
        let child = &mut self.children[idx];
        let lcp = longest_common_prefix(&child.segment, key);
        if lcp < child.segment.len() {
            // The key diverges inside the edge label (or ends inside it);
            // nothing below here can match exactly.
            return None;
        }
        let old = if lcp == key.len() {
            child.value.take()
        } else {
            child.remove(&key[lcp..])
        };
        // Each frame prunes only its own direct child; a parent that in turn
        // became empty is handled by the caller's frame.
        if !child.is_terminal() && child.children.is_empty() {
            self.children.remove(idx);
        }
        old
    }

    /// Detach every key below this node that `prefix` is a prefix of,
    /// including an exact match. No-op when nothing matches.
    pub(crate) fn remove_prefix(&mut self, prefix: &[u8]) {
        debug_assert!(!prefix.is_empty());
        let Ok(idx) = self.find_child(prefix[0]) else {
            return;
        };
        let child = &mut self.children[idx];
        let lcp = longest_common_prefix(&child.segment, prefix);
        if lcp == prefix.len() {
            // The whole child subtree is covered by the prefix.
            self.children.remove(idx);
        } else if lcp == child.segment.len() {
            child.remove_prefix(&prefix[lcp..]);
            if !child.is_terminal() && child.children.is_empty() {
                self.children.remove(idx);
            }
        }
        // Otherwise the prefix diverges mid-edge: no key below matches.
    }

    /// Look up the value stored for an exact `key` match.
    pub(crate) fn get(&self, key: &[u8]) -> Option<&V> {
        debug_assert!(!key.is_empty());
        let mut node = self;
        let mut key = key;
        loop {
            let idx = node.find_child(key[0]).ok()?;
            let child = &node.children[idx];
            let lcp = longest_common_prefix(&child.segment, key);
            if lcp < child.segment.len() {
                return None;
            }
            if lcp == key.len() {
                return child.value.as_ref();
            }
            node = child;
            key = &key[lcp..];
        }
    }

    /// Depth-first visit of every terminal node under (and including) this
    /// one. `buf` carries the segment concatenation from the root; it is
    /// restored before returning.
    pub(crate) fn visit_all<F>(&self, buf: &mut Vec<u8>, visit: &mut F)
    where
        F: FnMut(&[u8], &V),
    {
        buf.extend_from_slice(&self.segment);
        if let Some(value) = &self.value {
            visit(buf, value);
        }
        for child in &self.children {
            child.visit_all(buf, visit);
        }
        buf.truncate(buf.len() - self.segment.len());
    }

    /// Visit every terminal node whose key starts with the bytes consumed so
    /// far plus `prefix`. An empty `prefix` visits every child subtree. Keys
    /// handed to `visit` are full keys, prefix included.
    pub(crate) fn visit_prefix<F>(&self, prefix: &[u8], buf: &mut Vec<u8>, visit: &mut F)
    where
        F: FnMut(&[u8], &V),
    {
        if prefix.is_empty() {
            for child in &self.children {
                child.visit_all(buf, visit);
            }
            return;
        }
        let Ok(idx) = self.find_child(prefix[0]) else {
            return;
        };
        let child = &self.children[idx];
        let lcp = longest_common_prefix(&child.segment, prefix);
        if lcp == prefix.len() {
            // The prefix ends at or inside this edge: the whole child
            // subtree qualifies.
            child.visit_all(buf, visit);
        } else if lcp == child.segment.len() {
            buf.extend_from_slice(&child.segment);
            child.visit_prefix(&prefix[lcp..], buf, visit);
            buf.truncate(buf.len() - child.segment.len());
        }
        // Otherwise the prefix diverges mid-edge: nothing qualifies.
    }
}
