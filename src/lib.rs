//! # Sequence Trie
//!
//! A prefix tree keyed by arbitrary finite sequences of elements.
//!
//! Keys can be strings (one node per `char`), vectors or slices of tokens
//! (one node per token), or any type implementing [`KeyElements`]. Besides the
//! usual map operations the trie answers prefix queries: every entry under a
//! prefix, and the longest stored key that is a prefix of a query.
//!
//! ## Features
//!
//! - **Map API**: insert, lookup, removal, `Index`/`IndexMut`, `Extend`,
//!   `FromIterator`
//! - **Pruning**: removing a key drops every node on its path that no longer
//!   leads to a value
//! - **Ordered enumeration**: entries come out sorted by key
//! - **Prefix queries**: [`Trie::by_prefix`] and [`Trie::longest_prefix`]
//!
//! ## Example
//!
//! ```rust
//! use sequence_trie::Trie;
//!
//! let mut trie = Trie::<String, u32>::new();
//! trie.insert("hello", 1);
//! trie.insert("help", 2);
//! trie.insert("world", 3);
//!
//! assert_eq!(trie.try_get("hello"), Some(&1));
//! assert_eq!(trie.by_prefix("hel").count(), 2);
//! assert_eq!(trie.longest_prefix("helpful"), "help");
//! ```

mod iter;
pub mod key;
mod node;
mod trie;

// Re-export public types
pub use crate::iter::Iter;
pub use crate::key::KeyElements;
pub use crate::trie::Trie;

use thiserror::Error;

/// A trie keyed by strings, one node per `char`.
pub type StringTrie<V> = Trie<String, V>;

/// Errors that can occur in trie operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No value is stored at the requested key
    #[error("key not found in trie")]
    KeyNotFound,
    /// The destination buffer of a bulk copy is too small
    #[error("destination too small: {available} slots available, {required} entries to copy")]
    CapacityExceeded {
        /// Slots from the start index to the end of the destination
        available: usize,
        /// Number of entries in the trie
        required: usize,
    },
}

/// Result type for fallible trie operations.
pub type Result<T> = std::result::Result<T, Error>;
