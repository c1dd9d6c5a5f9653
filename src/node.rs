//! Node implementation for the trie.
//!
//! A `TrieNode` owns its children directly: every node lives in exactly one slot of
//! its parent's child map (or is the trie's root), so the structure is a plain tree
//! with no shared or reference-counted nodes.

use indexmap::IndexMap;

/// A single node of the trie.
///
/// Each node contains a map from one character to the child reached over that
/// edge, and an optional value. A present value marks the end of a stored key;
/// an absent value means the node only exists as a prefix of longer keys.
///
/// Children keep the order in which their edges were first created, which makes
/// enumeration order reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode<V> {
    /// Child nodes indexed by the character on their incoming edge
    pub(crate) children: IndexMap<char, TrieNode<V>>,

    /// The value stored at this node, if any
    pub(crate) value: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new empty node
    pub fn new() -> Self {
        TrieNode {
            children: IndexMap::new(),
            value: None,
        }
    }

    /// Creates a new childless node holding `value`
    pub fn with_value(value: V) -> Self {
        TrieNode {
            children: IndexMap::new(),
            value: Some(value),
        }
    }

    /// Returns the value stored at this node, if a key ends here.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Returns the child edges of this node in creation order.
    pub fn children(
        &self,
    ) -> impl DoubleEndedIterator<Item = (char, &TrieNode<V>)> + ExactSizeIterator + '_ {
        self.children.iter().map(|(c, child)| (*c, child))
    }

    /// Returns the child reached over the edge labeled `c`.
    pub fn child(&self, c: char) -> Option<&TrieNode<V>> {
        self.children.get(&c)
    }

    /// Returns the number of child edges.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether a stored key ends at this node
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the number of values stored in this subtree
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.value.is_some() {
                count += 1;
            }
            stack.extend(node.children.values());
        }

        count
    }

    /// Follows `path` from this node, one edge per character.
    pub(crate) fn descend<I>(&self, path: I) -> Option<&TrieNode<V>>
    where
        I: IntoIterator<Item = char>,
    {
        let mut current = self;
        for c in path {
            current = current.children.get(&c)?;
        }
        Some(current)
    }

    pub(crate) fn descend_mut<I>(&mut self, path: I) -> Option<&mut TrieNode<V>>
    where
        I: IntoIterator<Item = char>,
    {
        let mut current = self;
        for c in path {
            current = current.children.get_mut(&c)?;
        }
        Some(current)
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlinks descendants one node at a time so that dropping a long chain
// doesn't nest one drop call per character.
impl<V> Drop for TrieNode<V> {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode<V>> =
            self.children.drain(..).map(|(_, child)| child).collect();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain(..).map(|(_, child)| child));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node() {
        let node: TrieNode<u32> = TrieNode::new();

        assert!(node.value().is_none());
        assert!(node.is_leaf());
        assert!(!node.is_terminal());
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn test_with_value() {
        let node = TrieNode::with_value(42);

        assert_eq!(node.value(), Some(&42));
        assert!(node.is_terminal());
        assert!(node.is_leaf());
    }

    #[test]
    fn test_subtree_size() {
        let mut root: TrieNode<u32> = TrieNode::new();
        let mut a = TrieNode::with_value(1);
        a.children.insert('b', TrieNode::with_value(2));
        a.children.insert('c', TrieNode::new());
        root.children.insert('a', a);
        root.children.insert('z', TrieNode::with_value(3));

        assert_eq!(root.subtree_size(), 3);
        assert_eq!(root.child('a').map(TrieNode::subtree_size), Some(2));
    }

    #[test]
    fn test_children_keep_creation_order() {
        let mut root: TrieNode<()> = TrieNode::new();
        for c in ['m', 'a', 'z', 'b'].iter() {
            root.children.insert(*c, TrieNode::with_value(()));
        }

        let order: Vec<char> = root.children().map(|(c, _)| c).collect();
        assert_eq!(order, vec!['m', 'a', 'z', 'b']);

        let reversed: Vec<char> = root.children().rev().map(|(c, _)| c).collect();
        assert_eq!(reversed, vec!['b', 'z', 'a', 'm']);
        assert_eq!(root.children().len(), 4);
    }

    #[test]
    fn test_deep_chain_drops() {
        let mut root: TrieNode<u32> = TrieNode::new();
        let mut current = &mut root;
        for _ in 0..200_000 {
            current = current.children.entry('a').or_insert_with(TrieNode::new);
        }
        current.value = Some(1);

        assert_eq!(root.subtree_size(), 1);
        drop(root);
    }

    #[test]
    fn test_descend() {
        let mut root: TrieNode<u32> = TrieNode::new();
        let mut h = TrieNode::new();
        h.children.insert('i', TrieNode::with_value(7));
        root.children.insert('h', h);

        assert_eq!(root.descend("hi".chars()).and_then(TrieNode::value), Some(&7));
        assert!(root.descend("h".chars()).is_some());
        assert!(root.descend("ho".chars()).is_none());
        assert!(std::ptr::eq(root.descend("".chars()).unwrap(), &root));

        if let Some(node) = root.descend_mut("hi".chars()) {
            node.value = Some(8);
        }
        assert_eq!(root.descend("hi".chars()).and_then(TrieNode::value), Some(&8));
    }
}
