//! Internal node implementation for the trie.
//!
//! A `TrieNode` owns its children outright. The element that leads to a child
//! is stored next to it in the parent's child list, so the root needs no
//! element of its own. Every algorithm consumes the remaining key elements
//! from an iterator, one element per level.

use log::trace;

/// Internal node type for the trie.
///
/// Invariants kept by every operation here:
/// - `children` is sorted by element and holds no duplicate elements;
/// - after a removal, no node below the root on the removed path is left
///   without both a value and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrieNode<E, V> {
    /// The value stored at this node, if a key ends here
    pub value: Option<V>,

    /// Child nodes, sorted by the element on the edge leading to them
    pub children: Vec<(E, TrieNode<E, V>)>,
}

impl<E, V> TrieNode<E, V> {
    /// Creates a new empty node
    pub fn new() -> Self {
        TrieNode {
            value: None,
            children: Vec::new(),
        }
    }

    /// Returns the number of values stored in this subtree
    pub fn subtree_size(&self) -> usize {
        let mut count = if self.value.is_some() { 1 } else { 0 };

        for (_, child) in &self.children {
            count += child.subtree_size();
        }

        count
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A node with neither a value nor children carries nothing and can be
    /// detached from its parent.
    pub fn is_prunable(&self) -> bool {
        self.value.is_none() && self.is_leaf()
    }

    /// Drops every descendant and the value held here.
    pub fn clear(&mut self) {
        self.value = None;
        self.children.clear();
    }
}

impl<E: Ord, V> TrieNode<E, V> {
    fn child_index(&self, element: &E) -> Result<usize, usize> {
        self.children.binary_search_by(|(e, _)| e.cmp(element))
    }

    /// Returns the child reached through `element`, if present.
    pub fn child(&self, element: &E) -> Option<&TrieNode<E, V>> {
        self.child_index(element).ok().map(|i| &self.children[i].1)
    }

    /// Returns the node at the end of the path spelled by `elements`.
    pub fn lookup<I>(&self, elements: I) -> Option<&TrieNode<E, V>>
    where
        I: Iterator<Item = E>,
    {
        let mut current = self;
        for element in elements {
            current = current.child(&element)?;
        }
        Some(current)
    }

    /// Mutable counterpart of [`lookup`](Self::lookup).
    pub fn lookup_mut<I>(&mut self, elements: I) -> Option<&mut TrieNode<E, V>>
    where
        I: Iterator<Item = E>,
    {
        let mut current = self;
        for element in elements {
            let idx = current.child_index(&element).ok()?;
            current = &mut current.children[idx].1;
        }
        Some(current)
    }

    /// Stores `value` at the end of the path, creating any missing nodes on
    /// the way. Returns the value previously stored there.
    pub fn insert<I>(&mut self, elements: I, value: V) -> Option<V>
    where
        I: Iterator<Item = E>,
    {
        let mut current = self;
        for element in elements {
            let idx = match current.child_index(&element) {
                Ok(idx) => idx,
                Err(idx) => {
                    current.children.insert(idx, (element, TrieNode::new()));
                    idx
                }
            };
            current = &mut current.children[idx].1;
        }
        current.value.replace(value)
    }

    /// Takes the value at the end of the path, then prunes every node on the
    /// path that was left empty. A missing path is a no-op.
    pub fn remove<I>(&mut self, elements: I) -> Option<V>
    where
        I: Iterator<Item = E>,
    {
        // Child indices along the path, and the depth of the last node that
        // must survive: the root, or a node with a value or another branch.
        let mut path = Vec::new();
        let mut keep = 0;

        let mut current = &*self;
        for element in elements {
            let idx = current.child_index(&element).ok()?;
            if current.value.is_some() || current.children.len() > 1 {
                keep = path.len();
            }
            path.push(idx);
            current = &current.children[idx].1;
        }
        current.value.as_ref()?;

        let mut terminal = &mut *self;
        for &idx in &path {
            terminal = &mut terminal.children[idx].1;
        }
        let removed = terminal.value.take();

        if !path.is_empty() && terminal.is_leaf() {
            let mut parent = self;
            for &idx in &path[..keep] {
                parent = &mut parent.children[idx].1;
            }
            parent.children.remove(path[keep]);
            trace!("pruned {} empty nodes below depth {}", path.len() - keep, keep);
        }

        removed
    }

    /// Walks the path as far as it exists and reports the deepest node along
    /// it (the starting node included) that holds a value, as the number of
    /// elements consumed to reach it together with the value.
    pub fn longest_prefix<I>(&self, elements: I) -> Option<(usize, &V)>
    where
        I: Iterator<Item = E>,
    {
        let mut best = self.value.as_ref().map(|v| (0, v));
        let mut current = self;

        for (depth, element) in elements.enumerate() {
            current = match current.child(&element) {
                Some(child) => child,
                None => break,
            };
            if let Some(value) = &current.value {
                best = Some((depth + 1, value));
            }
        }

        best
    }
}

// Unlink descendants onto a heap stack so dropping a deep path never recurses.
impl<E, V> Drop for TrieNode<E, V> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some((_, mut node)) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
