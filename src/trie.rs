//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the map-style API for
//! working with the trie data structure.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use log::debug;

use crate::iter::Iter;
use crate::key::KeyElements;
use crate::node::TrieNode;
use crate::{Error, Result};

/// A mutable trie mapping element sequences to values.
///
/// Keys are never stored whole. Each key is split into elements by
/// [`KeyElements`], one node per element, and keys handed back by
/// enumeration are rebuilt from those elements.
///
/// Enumeration order is pre-order over children sorted by element, which for
/// string keys is plain lexicographic order.
///
/// The trie does no internal locking. Wrap it in a `Mutex` or `RwLock` to
/// share it between threads; mutating it while an iterator is alive is
/// prevented by the borrow checker.
pub struct Trie<K: KeyElements, V> {
    /// The root node of the trie. It always exists and holds the value of
    /// the empty key, if any.
    root: TrieNode<K::Element, V>,

    _key: PhantomData<fn() -> K>,
}

impl<K: KeyElements, V> Trie<K, V> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_trie::Trie;
    ///
    /// let trie = Trie::<String, i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            _key: PhantomData,
        }
    }

    /// Returns the number of values stored in the trie.
    ///
    /// This walks the whole tree on every call.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_trie::Trie;
    ///
    /// let mut trie = Trie::<String, i32>::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.insert("hello", 42);
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.root.subtree_size()
    }

    /// Returns `true` if the trie contains no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_prunable()
    }

    /// Removes every entry. The root node itself is kept.
    pub fn clear(&mut self) {
        debug!("clearing trie with {} top-level branches", self.root.children.len());
        self.root.clear();
    }

    /// Inserts a value at `key`, returning the value it replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_trie::Trie;
    ///
    /// let mut trie = Trie::<String, i32>::new();
    /// assert_eq!(trie.insert("hello", 1), None);
    /// assert_eq!(trie.insert("hello", 2), Some(1));
    /// assert_eq!(trie["hello"], 2);
    /// ```
    pub fn insert<Q>(&mut self, key: &Q, value: V) -> Option<V>
    where
        Q: KeyElements<Element = K::Element> + ?Sized,
    {
        self.root.insert(key.elements(), value)
    }

    /// Returns a reference to the value stored at `key`, if any.
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: KeyElements<Element = K::Element> + ?Sized,
    {
        self.root.lookup(key.elements())?.value.as_ref()
    }

    /// Returns a reference to the value stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no value is stored at `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_trie::{Error, Trie};
    ///
    /// let mut trie = Trie::<String, i32>::new();
    /// trie.insert("hello", 42);
    ///
    /// assert_eq!(trie.get("hello"), Ok(&42));
    /// assert_eq!(trie.get("hell"), Err(Error::KeyNotFound));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        Q: KeyElements<Element = K::Element> + ?Sized,
    {
        self.try_get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value stored at `key`, if any.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: KeyElements<Element = K::Element> + ?Sized,
    {
        self.root.lookup_mut(key.elements())?.value.as_mut()
    }

    /// Returns `true` if a value is stored at exactly `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: KeyElements<Element = K::Element> + ?Sized,
    {
        self.try_get(key).is_some()
    }

    /// Returns `true` if the value stored at `key` equals `value`.
    pub fn contains_pair<Q>(&self, key: &Q, value: &V) -> bool
    where
        Q: KeyElements<Element = K::Element> + ?Sized,
        V: PartialEq,
    {
        self.try_get(key).map_or(false, |stored| stored == value)
    }

    /// Returns `true` if at least one stored key starts with `prefix`.
    pub fn contains_prefix<Q>(&self, prefix: &Q) -> bool
    where
        Q: KeyElements<Element = K::Element> + ?Sized,
    {
        // Pruning guarantees every non-root node leads to a value.
        match self.root.lookup(prefix.elements()) {
            Some(node) => !node.is_prunable(),
            None => false,
        }
    }

    /// Removes the value at `key`, returning whether there was one.
    ///
    /// Nodes on the path that are left with neither a value nor children are
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_trie::Trie;
    ///
    /// let mut trie = Trie::<String, i32>::new();
    /// trie.insert("abc", 1);
    ///
    /// assert!(trie.remove("abc"));
    /// assert!(!trie.remove("abc"));
    /// assert!(trie.is_empty());
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        Q: KeyElements<Element = K::Element> + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes the value at `key` and returns it. Prunes like [`remove`](Self::remove).
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: KeyElements<Element = K::Element> + ?Sized,
    {
        self.root.remove(key.elements())
    }

    /// Returns an iterator over all entries, in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(Some(&self.root), Vec::new())
    }

    /// Returns an iterator over the entries whose keys start with `prefix`.
    ///
    /// Yielded keys are full keys, prefix included. A prefix with no stored
    /// extension yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_trie::Trie;
    ///
    /// let mut trie = Trie::<String, i32>::new();
    /// trie.insert("hello", 1);
    /// trie.insert("help", 2);
    /// trie.insert("world", 3);
    ///
    /// let keys: Vec<String> = trie.by_prefix("hel").map(|(k, _)| k).collect();
    /// assert_eq!(keys, vec!["hello", "help"]);
    /// ```
    pub fn by_prefix<Q>(&self, prefix: &Q) -> Iter<'_, K, V>
    where
        Q: KeyElements<Element = K::Element> + ?Sized,
    {
        match self.root.lookup(prefix.elements()) {
            Some(node) => Iter::new(Some(node), prefix.elements().collect()),
            None => Iter::empty(),
        }
    }
}

impl<K, V> Trie<K, V>
where
    K: KeyElements + FromIterator<K::Element>,
{
    /// Returns every stored key, in key order.
    pub fn keys(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Returns every stored value, ordered by key.
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, value)| value).collect()
    }

    /// Returns the longest prefix of `key` that is itself a stored key, or
    /// the empty key if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_trie::Trie;
    ///
    /// let mut trie = Trie::<String, ()>::new();
    /// trie.insert("ab", ());
    /// trie.insert("abcd", ());
    ///
    /// assert_eq!(trie.longest_prefix("abcdefg"), "abcd");
    /// assert_eq!(trie.longest_prefix("abc"), "ab");
    /// assert_eq!(trie.longest_prefix("a"), "");
    /// ```
    pub fn longest_prefix<Q>(&self, key: &Q) -> K
    where
        Q: KeyElements<Element = K::Element> + ?Sized,
    {
        match self.longest_prefix_entry(key) {
            Some((prefix, _)) => prefix,
            None => K::from_iter(std::iter::empty()),
        }
    }

    /// Like [`longest_prefix`](Self::longest_prefix), but also returns the
    /// matched value, and `None` when no prefix of `key` is stored. This
    /// tells a stored empty key apart from no match at all.
    pub fn longest_prefix_entry<Q>(&self, key: &Q) -> Option<(K, &V)>
    where
        Q: KeyElements<Element = K::Element> + ?Sized,
    {
        let (len, value) = self.root.longest_prefix(key.elements())?;
        Some((key.elements().take(len).collect(), value))
    }

    /// Clones every entry into `dest`, starting at slot `start`, in key order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] when `dest` runs out of slots.
    /// The entries that fit have already been written by then.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_trie::{Error, Trie};
    ///
    /// let mut trie = Trie::<String, i32>::new();
    /// trie.insert("ab", 1);
    /// trie.insert("abcd", 2);
    ///
    /// let mut buffer: Vec<Option<(String, i32)>> = vec![None; 1];
    /// assert_eq!(
    ///     trie.copy_to(&mut buffer, 0),
    ///     Err(Error::CapacityExceeded { available: 1, required: 2 })
    /// );
    /// assert_eq!(buffer[0], Some(("ab".to_string(), 1)));
    /// ```
    pub fn copy_to(&self, dest: &mut [Option<(K, V)>], start: usize) -> Result<()>
    where
        V: Clone,
    {
        let available = dest.len().saturating_sub(start);
        let mut slots = dest.iter_mut().skip(start);

        for (key, value) in self.iter() {
            match slots.next() {
                Some(slot) => *slot = Some((key, value.clone())),
                None => {
                    let required = self.len();
                    debug!(
                        "copy_to stopped after {} of {} entries",
                        available, required
                    );
                    return Err(Error::CapacityExceeded { available, required });
                }
            }
        }

        Ok(())
    }
}

impl<K: KeyElements, V> Default for Trie<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KeyElements, V: Clone> Clone for Trie<K, V> {
    fn clone(&self) -> Self {
        Trie {
            root: self.root.clone(),
            _key: PhantomData,
        }
    }
}

// Two tries are equal when they store the same entries. Pruning makes the
// node structure a function of the entries, so comparing nodes is enough.
impl<K: KeyElements, V: PartialEq> PartialEq for Trie<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<K: KeyElements, V: Eq> Eq for Trie<K, V> {}

impl<K, V> fmt::Debug for Trie<K, V>
where
    K: KeyElements + FromIterator<K::Element> + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, Q> Index<&Q> for Trie<K, V>
where
    K: KeyElements,
    Q: KeyElements<Element = K::Element> + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics with [`Error::KeyNotFound`] if no value is stored at `key`.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<K, V, Q> IndexMut<&Q> for Trie<K, V>
where
    K: KeyElements,
    Q: KeyElements<Element = K::Element> + ?Sized,
{
    /// # Panics
    ///
    /// Panics with [`Error::KeyNotFound`] if no value is stored at `key`.
    fn index_mut(&mut self, key: &Q) -> &mut V {
        match self.get_mut(key) {
            Some(value) => value,
            None => panic!("{}", Error::KeyNotFound),
        }
    }
}

impl<K: KeyElements, V> Extend<(K, V)> for Trie<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(&key, value);
        }
    }
}

impl<K: KeyElements, V> FromIterator<(K, V)> for Trie<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<'a, K, V> IntoIterator for &'a Trie<K, V>
where
    K: KeyElements + FromIterator<K::Element>,
{
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
