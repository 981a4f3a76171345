//! Free functions that build a collection from any iterable and delegate to it.
//!
//! Each one is equivalent to building a [`Collection`] with
//! [`Collection::from_iter()`](FromIterator::from_iter) (keys numbered from
//! zero) and calling the method of the same name.
//!
//! # Examples
//!
//! ```
//! use collectibles::helpers;
//!
//! let doubled = helpers::map(1..=3, |num| num * 2);
//! assert_eq!(doubled.values(), [2, 4, 6]);
//!
//! let sum = helpers::reduce(vec![1, 2, 3], |sum, num| sum + num, 0);
//! assert_eq!(sum, 6);
//! ```

use crate::{collection::Collection, lazy::LazyCollection};

/// Builds an eager [`Collection`].
#[inline]
pub fn collect<T>(items: impl IntoIterator<Item = T>) -> Collection<T> {
    items.into_iter().collect()
}

/// Builds a [`LazyCollection`] without consuming `items`.
#[inline]
pub fn generator<'a, I>(items: I) -> LazyCollection<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    LazyCollection::new(items)
}

/// See [`Collection::map()`].
pub fn map<T, U>(items: impl IntoIterator<Item = T>, f: impl FnMut(&T) -> U) -> Collection<U> {
    collect(items).map(f)
}

/// See [`Collection::filter()`].
pub fn filter<T: Clone>(
    items: impl IntoIterator<Item = T>,
    pred: impl FnMut(&T) -> bool,
) -> Collection<T> {
    collect(items).filter(pred)
}

/// See [`Collection::reject()`].
pub fn reject<T: Clone>(
    items: impl IntoIterator<Item = T>,
    pred: impl FnMut(&T) -> bool,
) -> Collection<T> {
    collect(items).reject(pred)
}

/// See [`Collection::reduce()`].
pub fn reduce<T, A>(items: impl IntoIterator<Item = T>, f: impl FnMut(A, &T) -> A, initial: A) -> A {
    collect(items).reduce(f, initial)
}

/// See [`Collection::merge()`].
///
/// ```
/// use collectibles::helpers;
///
/// let merged = helpers::merge([1, 2], [vec![3], vec![4, 5]]);
/// assert_eq!(merged.values(), [1, 2, 3, 4, 5]);
/// ```
pub fn merge<T, I>(items: impl IntoIterator<Item = T>, others: impl IntoIterator<Item = I>) -> Collection<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    let others: Vec<Collection<T>> = others.into_iter().map(collect).collect();
    collect(items).merge(&others)
}
