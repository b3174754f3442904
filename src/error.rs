//! Error types.
//!
//! The taxonomy is deliberately narrow: deletes and prefix drops on absent
//! keys are no-ops, so the only rejected input is the empty key on insert,
//! which would be ambiguous with the root itself.

use thiserror::Error;

/// The key handed to an insert was not a valid trie key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid key: byte-sequence keys must be non-empty")]
pub struct InvalidKey;
