//! Lazy pre-order enumeration of trie entries.
//!
//! This module provides the `Iter` type, which walks a subtree depth-first and
//! rebuilds each stored key from the elements on the path to its node.

use std::fmt;
use std::marker::PhantomData;

use crate::key::KeyElements;
use crate::node::TrieNode;

/// An iterator over the entries below some node of a [`Trie`](crate::Trie).
///
/// Entries come out in pre-order: a node's own entry first, then each child
/// subtree in element order. Keys are full keys, including the prefix the
/// iterator was started from.
pub struct Iter<'a, K: KeyElements, V> {
    /// Nodes still to visit, with their depth below the start node and the
    /// element on the edge that leads to them
    stack: Vec<(usize, Option<&'a K::Element>, &'a TrieNode<K::Element, V>)>,

    /// Elements of the path to the node most recently visited
    path: Vec<K::Element>,

    /// Length of the prefix the walk started from
    base: usize,

    _key: PhantomData<fn() -> K>,
}

impl<'a, K: KeyElements, V> Iter<'a, K, V> {
    /// Starts a walk at `start`, whose path from the root is `prefix`.
    pub(crate) fn new(start: Option<&'a TrieNode<K::Element, V>>, prefix: Vec<K::Element>) -> Self {
        Iter {
            stack: start.map(|node| (0, None, node)).into_iter().collect(),
            base: prefix.len(),
            path: prefix,
            _key: PhantomData,
        }
    }

    /// An iterator that yields nothing.
    pub(crate) fn empty() -> Self {
        Self::new(None, Vec::new())
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: KeyElements + FromIterator<K::Element>,
{
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, element, node)) = self.stack.pop() {
            if let Some(element) = element {
                self.path.truncate(self.base + depth - 1);
                self.path.push(element.clone());
            }

            // Reverse so the smallest element is popped first.
            for (child_element, child) in node.children.iter().rev() {
                self.stack.push((depth + 1, Some(child_element), child));
            }

            if let Some(value) = &node.value {
                let key = self.path.iter().cloned().collect();
                return Some((key, value));
            }
        }

        None
    }
}

impl<'a, K: KeyElements, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
            path: self.path.clone(),
            base: self.base,
            _key: PhantomData,
        }
    }
}

impl<'a, K: KeyElements, V> fmt::Debug for Iter<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("pending", &self.stack.len())
            .field("depth", &self.path.len())
            .finish()
    }
}
