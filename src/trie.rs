//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for working
//! with the trie data structure.

use tracing::trace;

use crate::error::Result;
use crate::node::TrieNode;
use crate::prefix_view::{Iter, PrefixView};
use crate::util::{longest_accepted, require_non_empty};
use crate::LOG_TARGET;

/// A prefix tree keyed by character sequences.
///
/// Every edge is labeled by one `char` and every node may hold a value of type `V`.
/// A key is stored when the node at the end of its path holds a value, so storing
/// `"app"` and `"apple"` keeps both entries independently retrievable.
///
/// Operations that take a key reject the empty string with
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument). The exception is
/// [`keys_with_prefix`](Trie::keys_with_prefix), where the empty prefix selects
/// every key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie<V> {
    /// The root node of the trie
    pub(crate) root: TrieNode<V>,

    /// The number of values stored in the trie
    size: usize,
}

impl<V> Trie<V> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let trie = Trie::<i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            size: 0,
        }
    }

    /// Returns the number of keys stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.put("hello", 42).unwrap();
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the root node, for read-only traversal.
    pub fn root(&self) -> &TrieNode<V> {
        &self.root
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.size = 0;
    }

    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// Missing nodes along the path are created on the way down. The size grows
    /// only when the terminal node held no value before.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.put("hello", 1).unwrap(), None);
    /// assert_eq!(trie.put("hello", 2).unwrap(), Some(1));
    /// assert_eq!(trie.len(), 1);
    ///
    /// assert!(trie.put("", 3).is_err());
    /// ```
    pub fn put(&mut self, key: &str, value: V) -> Result<Option<V>> {
        require_non_empty("put", key)?;

        let mut current = &mut self.root;
        for c in key.chars() {
            current = current.children.entry(c).or_insert_with(TrieNode::new);
        }

        let previous = current.value.replace(value);
        if previous.is_none() {
            self.size += 1;
        }

        Ok(previous)
    }

    /// Retrieves a reference to the value stored for the given key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("hello", 42).unwrap();
    ///
    /// assert_eq!(trie.get("hello").unwrap(), Some(&42));
    /// assert_eq!(trie.get("hell").unwrap(), None);
    /// assert_eq!(trie.get("world").unwrap(), None);
    /// ```
    pub fn get(&self, key: &str) -> Result<Option<&V>> {
        require_non_empty("get", key)?;

        Ok(self.root.descend(key.chars()).and_then(TrieNode::value))
    }

    /// Returns `true` if the trie contains a value for the given key.
    pub fn contains_key(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Deletes `key`, reporting whether anything was removed.
    ///
    /// Deleting a key that was never stored, or that only exists as a prefix of
    /// longer keys, is not an error: nothing changes and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("hello", 42).unwrap();
    ///
    /// assert!(trie.delete("hello").unwrap());
    /// assert!(!trie.delete("hello").unwrap());
    /// assert!(trie.is_empty());
    /// ```
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        Ok(self.take_value("delete", key)?.is_some())
    }

    /// Removes `key` and returns the value it held.
    ///
    /// Nodes left without children and without a value are pruned, starting at
    /// the key's terminal node and moving toward the root. Pruning stops at the
    /// first node that is still needed, meaning it holds a value, has another
    /// child, or is the root.
    pub fn remove(&mut self, key: &str) -> Result<Option<V>> {
        self.take_value("remove", key)
    }

    // Shared by `delete` and `remove`; `op` names the caller in errors.
    fn take_value(&mut self, op: &'static str, key: &str) -> Result<Option<V>> {
        require_non_empty(op, key)?;

        let path: Vec<char> = key.chars().collect();

        // Descend once without mutating, remembering the deepest node on the path
        // that has to survive if the terminal node goes away.
        let mut current = &self.root;
        let mut keep_depth = 0;
        for (depth, c) in path.iter().enumerate() {
            if depth > 0 && (current.value.is_some() || current.children.len() > 1) {
                keep_depth = depth;
            }
            current = match current.children.get(c) {
                Some(child) => child,
                None => return Ok(None),
            };
        }

        if current.value.is_none() {
            return Ok(None);
        }
        let prune = current.is_leaf();

        let removed = match self.root.descend_mut(path.iter().copied()) {
            Some(terminal) => terminal.value.take(),
            None => None,
        };
        if removed.is_none() {
            return Ok(None);
        }
        self.size -= 1;

        // The detached branch is freed node by node by `TrieNode`'s `Drop`
        if prune {
            if let Some(keeper) = self.root.descend_mut(path[..keep_depth].iter().copied()) {
                keeper.children.shift_remove(&path[keep_depth]);
                trace!(
                    target: LOG_TARGET,
                    key,
                    pruned = path.len() - keep_depth,
                    "Pruned dead branch"
                );
            }
        }

        Ok(removed)
    }

    /// Finds the longest stored key that is a prefix of `s`.
    ///
    /// Returns the empty string when no stored key is a prefix of `s`.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("she", 0).unwrap();
    /// trie.put("shells", 1).unwrap();
    ///
    /// assert_eq!(trie.longest_prefix_of("shellsort").unwrap(), "shells");
    /// assert_eq!(trie.longest_prefix_of("shell").unwrap(), "she");
    /// assert_eq!(trie.longest_prefix_of("sea").unwrap(), "");
    /// ```
    pub fn longest_prefix_of<'s>(&self, s: &'s str) -> Result<&'s str> {
        require_non_empty("longest_prefix_of", s)?;

        let mut current = &self.root;
        let len = longest_accepted(s, |c| {
            current = current.children.get(&c)?;
            Some(current.value.is_some())
        });

        Ok(&s[..len])
    }

    /// Creates a view of the subtrie at the given key prefix.
    ///
    /// The empty prefix gives a view of the whole trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("hello", 1).unwrap();
    /// trie.put("help", 2).unwrap();
    ///
    /// let view = trie.view_subtrie("hel");
    /// assert_eq!(view.len(), 2);
    /// assert_eq!(view.get("help"), Some(&2));
    /// ```
    pub fn view_subtrie<'a>(&'a self, prefix: &str) -> PrefixView<'a, V> {
        PrefixView::new(self, prefix)
    }

    /// Returns every stored key starting with `prefix`, in traversal order.
    ///
    /// Unlike the other key operations, the empty prefix is accepted and selects
    /// every key. A prefix with no path in the trie yields an empty list.
    ///
    /// Keys are listed depth first: a node's own key comes before the keys below
    /// it, and children are visited in the order their edges were first created.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("she", 0).unwrap();
    /// trie.put("sells", 1).unwrap();
    /// trie.put("shells", 2).unwrap();
    ///
    /// assert_eq!(trie.keys_with_prefix("sh"), vec!["she", "shells"]);
    /// assert_eq!(trie.keys_with_prefix(""), vec!["she", "shells", "sells"]);
    /// assert!(trie.keys_with_prefix("x").is_empty());
    /// ```
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.view_subtrie(prefix).keys()
    }

    /// Returns every stored key, in traversal order.
    pub fn keys(&self) -> Vec<String> {
        self.keys_with_prefix("")
    }

    /// Returns an iterator over all `(key, value)` pairs, in traversal order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.root, String::new())
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
