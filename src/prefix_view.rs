//! Prefix view into a trie.
//!
//! This module provides the `PrefixView` type, which gives scoped access to the
//! keys stored below a prefix, and the depth-first `Iter` shared with `Trie::iter`.

use std::fmt;

use crate::node::TrieNode;
use crate::Trie;

/// A lightweight view into the subtrie defined by a key prefix.
///
/// The view borrows the trie and remembers the node the prefix leads to, so
/// repeated lookups and enumeration don't walk the prefix again.
///
/// # Examples
///
/// ```
/// use char_trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.put("hello", 1).unwrap();
/// trie.put("help", 2).unwrap();
/// trie.put("world", 3).unwrap();
///
/// let view = trie.view_subtrie("hel");
///
/// assert!(view.contains_key("hello"));
/// assert!(!view.contains_key("world"));
/// assert_eq!(view.keys(), vec!["hello", "help"]);
/// ```
#[derive(Clone)]
pub struct PrefixView<'a, V> {
    /// The source trie for this view
    trie: &'a Trie<V>,

    /// The key prefix defining this view
    prefix: String,

    /// The subtrie node at the prefix, if it exists
    subtrie_node: Option<&'a TrieNode<V>>,
}

/// An iterator over stored `(key, value)` pairs.
///
/// Keys come out in depth-first pre-order: a node's own key is yielded before
/// any key below it, and children are visited in the order their edges were
/// first created.
pub struct Iter<'a, V> {
    /// Key spelled by the path to the node visited last
    path: String,

    /// Nodes still to visit, each with the length its parent's key had and
    /// the character on its incoming edge
    stack: Vec<(&'a TrieNode<V>, usize, Option<char>)>,
}

impl<'a, V> PrefixView<'a, V> {
    /// Creates a new prefix view for the given trie and prefix.
    pub fn new(trie: &'a Trie<V>, prefix: &str) -> Self {
        PrefixView {
            trie,
            prefix: prefix.to_string(),
            subtrie_node: trie.root.descend(prefix.chars()),
        }
    }

    /// Returns the key prefix for this view.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &'a Trie<V> {
        self.trie
    }

    /// Returns the node the prefix leads to, if its path exists.
    pub fn node(&self) -> Option<&'a TrieNode<V>> {
        self.subtrie_node
    }

    /// Returns whether the prefix path exists in the trie.
    pub fn exists(&self) -> bool {
        self.subtrie_node.is_some()
    }

    /// Returns the number of keys in this view.
    pub fn len(&self) -> usize {
        self.subtrie_node.map_or(0, TrieNode::subtree_size)
    }

    /// Returns whether this view contains no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the value for a key if it is stored and starts with the prefix.
    pub fn get(&self, key: &str) -> Option<&'a V> {
        let rest = key.strip_prefix(self.prefix.as_str())?;
        self.subtrie_node?.descend(rest.chars())?.value()
    }

    /// Checks if the view contains a key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the keys in this view, in traversal order.
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Returns an iterator over the `(key, value)` pairs in the view.
    pub fn iter(&self) -> Iter<'a, V> {
        match self.subtrie_node {
            Some(node) => Iter::new(node, self.prefix.clone()),
            None => Iter::empty(),
        }
    }
}

impl<'a, V> fmt::Debug for PrefixView<'a, V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("subtrie", &self.subtrie_node)
            .finish()
    }
}

/// Views are equal when the subtrees under their prefixes hold the same
/// keys and values, wherever those subtrees sit.
impl<'a, 'b, V: PartialEq> PartialEq<PrefixView<'b, V>> for PrefixView<'a, V> {
    fn eq(&self, other: &PrefixView<'b, V>) -> bool {
        match (self.subtrie_node, other.subtrie_node) {
            (Some(a), Some(b)) => std::ptr::eq(a, b) || a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<'a, V: Eq> Eq for PrefixView<'a, V> {}

impl<'a, 'v, V> IntoIterator for &'v PrefixView<'a, V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> Iter<'a, V> {
    /// Starts a traversal at `node`, whose path from the root spells `path`.
    pub(crate) fn new(node: &'a TrieNode<V>, path: String) -> Self {
        let depth = path.len();
        Iter {
            path,
            stack: vec![(node, depth, None)],
        }
    }

    fn empty() -> Self {
        Iter {
            path: String::new(),
            stack: Vec::new(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, parent_len, edge)) = self.stack.pop() {
            self.path.truncate(parent_len);
            if let Some(c) = edge {
                self.path.push(c);
            }

            // Reversed so the first-created child is popped first
            let len = self.path.len();
            for (c, child) in node.children().rev() {
                self.stack.push((child, len, Some(c)));
            }

            if let Some(value) = node.value() {
                return Some((self.path.clone(), value));
            }
        }

        None
    }
}
