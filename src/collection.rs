//! The eager, immutable, array-backed collection.
//!
//! A [`Collection`] is an ordered sequence of keyed items. Keys start as a
//! dense `0..len` sequence and survive the operations documented to keep
//! them (e.g. [`filter()`](Collection::filter)); every other operation
//! renumbers its result.
//!
//! No operation mutates `self`. Every transformation copies into a fresh
//! backing store, so two collections never share storage.
//!
//! # Examples
//!
//! ```
//! use collectibles::Collection;
//!
//! let nums = Collection::from([1, 2, 3, 4, 5, 6]);
//!
//! let sum = nums
//!     .filter(|num| num % 2 == 0)
//!     .map(|num| num * 2)
//!     .reduce(|sum, num| sum + num, 0);
//!
//! assert_eq!(sum, 24);
//! // Untouched.
//! assert_eq!(nums.values(), [1, 2, 3, 4, 5, 6]);
//! ```

mod flatten;
mod group;
mod set_ops;
mod source;
mod transform;

pub use flatten::*;
pub use group::*;

use std::{fmt::Debug, iter::FusedIterator};

/// An immutable, ordered sequence of keyed items.
///
/// See the [module-level documentation](self) for more.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Collection<T> {
    entries: Vec<(usize, T)>,
}

impl<T> Collection<T> {
    /// Creates an empty collection.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn from_entries(entries: Vec<(usize, T)>) -> Self {
        Self { entries }
    }

    /// Builds a collection keyed `0..len` in traversal order.
    #[inline]
    pub(crate) fn dense(items: impl IntoIterator<Item = T>) -> Self {
        Self::from_entries(items.into_iter().enumerate().collect())
    }

    #[inline]
    pub(crate) fn push_entry(&mut self, key: usize, item: T) {
        self.entries.push((key, item));
    }

    /// Returns the number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Alias for [`len()`](Collection::len).
    #[inline]
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the collection holds no item.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the item stored under `key`.
    pub fn get(&self, key: usize) -> Option<&T> {
        // Keys are dense unless a key-preserving operation dropped some.
        match self.entries.get(key) {
            Some((k, item)) if *k == key => Some(item),
            _ => self
                .entries
                .iter()
                .find_map(|(k, item)| (*k == key).then_some(item)),
        }
    }

    /// Returns `true` if an item equal to `item` is present.
    #[inline]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == item)
    }

    /// Returns the current keys in traversal order.
    pub fn keys(&self) -> Vec<usize> {
        self.entries.iter().map(|(key, _)| *key).collect()
    }

    /// Returns an iterator over the items in traversal order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.entries.iter())
    }

    /// Returns an iterator over `(key, item)` pairs in traversal order.
    #[inline]
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = (usize, &T)> + ExactSizeIterator {
        self.entries.iter().map(|(key, item)| (*key, item))
    }

    /// Returns a snapshot of the contents, keys included.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::Collection;
    ///
    /// let evens = Collection::from([1, 2, 3, 4]).filter(|num| num % 2 == 0);
    ///
    /// assert_eq!(evens.to_array(), [(1, 2), (3, 4)]);
    /// assert_eq!(evens.values(), [2, 4]);
    /// ```
    pub fn to_array(&self) -> Vec<(usize, T)>
    where
        T: Clone,
    {
        self.entries.clone()
    }

    /// Returns a snapshot of the items, renumbered from zero.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Calls `f` once per item in traversal order.
    pub fn each(&self, f: impl FnMut(&T)) {
        self.iter().for_each(f);
    }

    /// Left-folds the items into an accumulator.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::Collection;
    ///
    /// let fruits = Collection::from(["banana", "apple", "orange"]);
    /// let joined = fruits.reduce(
    ///     |joined, fruit| {
    ///         if joined.is_empty() {
    ///             fruit.to_string()
    ///         } else {
    ///             format!("{joined}, {fruit}")
    ///         }
    ///     },
    ///     String::new(),
    /// );
    ///
    /// assert_eq!(joined, "banana, apple, orange");
    /// ```
    pub fn reduce<A>(&self, f: impl FnMut(A, &T) -> A, initial: A) -> A {
        self.iter().fold(initial, f)
    }

    /// Returns `true` if every item satisfies `pred`.
    ///
    /// Stops at the first item that does not. An empty collection yields `true`.
    #[inline]
    pub fn every(&self, pred: impl FnMut(&T) -> bool) -> bool {
        self.iter().all(pred)
    }

    /// Returns `true` if at least one item satisfies `pred`.
    ///
    /// Stops at the first item that does.
    #[inline]
    pub fn some(&self, pred: impl FnMut(&T) -> bool) -> bool {
        self.iter().any(pred)
    }

    /// Returns `true` if no item satisfies `pred`.
    #[inline]
    pub fn none(&self, pred: impl FnMut(&T) -> bool) -> bool {
        !self.some(pred)
    }

    /// Returns the first item in traversal order.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.entries.first().map(|(_, item)| item)
    }
}

impl<T> Default for Collection<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(key, item)| (key, item)))
            .finish()
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::dense(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    #[inline]
    fn from(items: [T; N]) -> Self {
        Self::dense(items)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::dense(items)
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.entries.into_iter())
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowing iterator over the items of a [`Collection`].
///
/// This `struct` is created by [`Collection::iter()`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T>(std::slice::Iter<'a, (usize, T)>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, item)| item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(_, item)| item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the items of a [`Collection`].
///
/// This `struct` is created by `Collection::into_iter()`.
#[derive(Debug, Clone)]
pub struct IntoIter<T>(std::vec::IntoIter<(usize, T)>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, item)| item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(_, item)| item)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Collection<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Collection<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
