//! # Char Trie
//!
//! A prefix tree keyed by character sequences.
//!
//! Each edge of the tree is labeled by one `char`, and each node may hold a value
//! marking the end of a stored key. Nodes are owned by their parent alone, so the
//! trie is a plain tree that is cleaned up as keys are deleted.
//!
//! ## Features
//!
//! - **Map API**: `put`, `get`, `delete` and `longest_prefix_of` over string keys
//! - **Deterministic enumeration**: keys come out depth first, with branches in the
//!   order they were first created
//! - **Prefix Views**: scoped lookups and enumeration under a key prefix
//! - **Queries**: suffix counting and the longest common prefix of a word list
//!
//! Key operations reject the empty string with [`Error::InvalidArgument`]. The
//! query helpers never fail; they log bad input through `tracing` and return an
//! empty result.
//!
//! ## Example
//!
//! ```rust
//! use char_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.put("apple", 0).unwrap();
//! trie.put("application", 1).unwrap();
//!
//! assert_eq!(trie.get("apple").unwrap(), Some(&0));
//! assert_eq!(trie.keys_with_prefix("app"), vec!["apple", "application"]);
//! assert_eq!(trie.longest_prefix_of("apples").unwrap(), "apple");
//! ```

mod common_prefix;
mod error;
pub mod node;
mod prefix_view;
mod suffix;
mod trie;
mod util;
pub mod word;

/// Log target used for every record emitted by this crate.
pub const LOG_TARGET: &str = "char_trie";

// Re-export public types
pub use crate::common_prefix::longest_common_prefix;
pub use crate::error::{Error, Result};
pub use crate::node::TrieNode;
pub use crate::prefix_view::{Iter, PrefixView};
pub use crate::trie::Trie;
pub use crate::word::AsWord;
