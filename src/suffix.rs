//! Suffix and prefix existence queries.
//!
//! These never fail: bad input is reported through `tracing` at error level and
//! answered with an empty result. The `try_` variants return the error instead.

use tracing::{error, info};

use crate::error::{Error, Result};
use crate::Trie;
use crate::LOG_TARGET;

impl<V> Trie<V> {
    /// Counts the stored keys that end with `pattern`.
    ///
    /// The match is exact and case-sensitive. Every stored key is visited, so
    /// the cost is linear in the size of the trie.
    ///
    /// An empty pattern is reported as an error and counts nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// for (i, word) in ["apple", "application", "banana", "cat"].iter().enumerate() {
    ///     trie.put(word, i).unwrap();
    /// }
    ///
    /// assert_eq!(trie.count_words_with_suffix("ion"), 1);
    /// assert_eq!(trie.count_words_with_suffix("dog"), 0);
    /// assert_eq!(trie.count_words_with_suffix(""), 0);
    /// ```
    pub fn count_words_with_suffix(&self, pattern: &str) -> usize {
        match self.try_count_words_with_suffix(pattern) {
            Ok(count) => {
                info!(target: LOG_TARGET, pattern, count, "Counted words ending with suffix");
                count
            }
            Err(err) => {
                error!(target: LOG_TARGET, %err, "Suffix must be a non-empty string");
                0
            }
        }
    }

    /// Like [`count_words_with_suffix`](Trie::count_words_with_suffix), but returns
    /// an error for an empty pattern.
    pub fn try_count_words_with_suffix(&self, pattern: &str) -> Result<usize> {
        if pattern.is_empty() {
            return Err(Error::InvalidArgument {
                op: "count_words_with_suffix",
                reason: "suffix must be a non-empty string",
            });
        }

        Ok(self.iter().filter(|(key, _)| key.ends_with(pattern)).count())
    }

    /// Checks whether any stored key starts with `prefix`.
    ///
    /// A stored key counts as its own prefix. An empty prefix is reported as an
    /// error and answered with `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("banana", 2).unwrap();
    ///
    /// assert!(trie.has_prefix("ban"));
    /// assert!(trie.has_prefix("banana"));
    /// assert!(!trie.has_prefix("bat"));
    /// ```
    pub fn has_prefix(&self, prefix: &str) -> bool {
        match self.try_has_prefix(prefix) {
            Ok(true) => {
                info!(target: LOG_TARGET, prefix, "Words found with prefix");
                true
            }
            Ok(false) => {
                info!(target: LOG_TARGET, prefix, "No words found with prefix");
                false
            }
            Err(err) => {
                error!(target: LOG_TARGET, %err, "Prefix must be a non-empty string");
                false
            }
        }
    }

    /// Like [`has_prefix`](Trie::has_prefix), but returns an error for an empty prefix.
    pub fn try_has_prefix(&self, prefix: &str) -> Result<bool> {
        if prefix.is_empty() {
            return Err(Error::InvalidArgument {
                op: "has_prefix",
                reason: "prefix must be a non-empty string",
            });
        }

        Ok(self.view_subtrie(prefix).exists())
    }
}
