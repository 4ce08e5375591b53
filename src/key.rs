//! Defines how trie keys are broken into element sequences.
use std::iter::Cloned;
use std::slice;
use std::str::Chars;

/// A key that can be walked one element at a time.
///
/// Every trie operation asks the key for a fresh element iterator, so the
/// same key value can be used across any number of calls.
pub trait KeyElements {
    /// The alphabet of the key. Children of a node are kept in this order.
    type Element: Ord + Clone;

    /// Iterator over the elements of a borrowed key.
    type Elements<'a>: Iterator<Item = Self::Element>
    where
        Self: 'a;

    /// Returns the elements of the key, front to back.
    fn elements(&self) -> Self::Elements<'_>;
}

impl KeyElements for str {
    type Element = char;
    type Elements<'a> = Chars<'a>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.chars()
    }
}

impl KeyElements for String {
    type Element = char;
    type Elements<'a> = Chars<'a>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.chars()
    }
}

impl<T: Ord + Clone> KeyElements for [T] {
    type Element = T;
    type Elements<'a> = Cloned<slice::Iter<'a, T>>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter().cloned()
    }
}

impl<T: Ord + Clone> KeyElements for Vec<T> {
    type Element = T;
    type Elements<'a> = Cloned<slice::Iter<'a, T>>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter().cloned()
    }
}
