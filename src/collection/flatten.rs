use crate::{object::Element, typed::TypedCollection};

use super::Collection;

/// A value that may hold a [`Collection`] of `U`.
///
/// [`Collection::concat()`] folds every item for which this returns `Some`
/// and skips the others.
pub trait AsCollection<U> {
    /// Returns the held collection, if any.
    fn as_collection(&self) -> Option<&Collection<U>>;
}

impl<U> AsCollection<U> for Collection<U> {
    #[inline]
    fn as_collection(&self) -> Option<&Collection<U>> {
        Some(self)
    }
}

impl<U> AsCollection<U> for Option<Collection<U>> {
    #[inline]
    fn as_collection(&self) -> Option<&Collection<U>> {
        self.as_ref()
    }
}

impl AsCollection<Element> for TypedCollection {
    #[inline]
    fn as_collection(&self) -> Option<&Collection<Element>> {
        Some(self.as_inner())
    }
}

impl AsCollection<Element> for Element {
    fn as_collection(&self) -> Option<&Collection<Element>> {
        let value = &**self;

        value.downcast_ref::<Collection<Element>>().or_else(|| {
            value
                .downcast_ref::<TypedCollection>()
                .map(TypedCollection::as_inner)
        })
    }
}

impl<T> Collection<T> {
    /// Flattens a collection of collections into one collection, renumbered from zero.
    ///
    /// Items that do not hold a collection are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::Collection;
    ///
    /// let nested = Collection::from([
    ///     Collection::from([1, 2, 3]),
    ///     Collection::from([4, 5, 6]),
    /// ]);
    ///
    /// assert_eq!(nested.concat().values(), [1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn concat<U>(&self) -> Collection<U>
    where
        T: AsCollection<U>,
        U: Clone,
    {
        Collection::dense(
            self.iter()
                .filter_map(AsCollection::as_collection)
                .flat_map(Collection::iter)
                .cloned(),
        )
    }

    /// Maps every item to a collection, then flattens them with [`concat()`](Collection::concat).
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::Collection;
    ///
    /// let pairs = Collection::from([1, 2, 3]).flat_map(|&num| Collection::from([num, num * 10]));
    ///
    /// assert_eq!(pairs.values(), [1, 10, 2, 20, 3, 30]);
    /// ```
    pub fn flat_map<U, R>(&self, f: impl FnMut(&T) -> R) -> Collection<U>
    where
        R: AsCollection<U>,
        U: Clone,
    {
        self.map(f).concat()
    }

    /// Alias for [`flat_map()`](Collection::flat_map).
    #[inline]
    pub fn mapcat<U, R>(&self, f: impl FnMut(&T) -> R) -> Collection<U>
    where
        R: AsCollection<U>,
        U: Clone,
    {
        self.flat_map(f)
    }
}
