use std::{cmp::Ordering, ops::Range};

use super::Collection;

impl<T> Collection<T> {
    /// Creates a collection with `f` applied to every item.
    ///
    /// Keys are kept, so the result aligns with `self` item by item.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Collection<U> {
        Collection::from_entries(
            self.entries
                .iter()
                .map(|(key, item)| (*key, f(item)))
                .collect(),
        )
    }

    /// Creates a collection of the items satisfying `pred`.
    ///
    /// Keys are kept. Call [`values()`](Collection::values) for dense indices.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::Collection;
    ///
    /// let words = Collection::from(["foo", "bar", "fizz", "buzz"]);
    /// let with_f = words.filter(|word| word.contains('f'));
    ///
    /// assert_eq!(with_f.values(), ["foo", "fizz"]);
    /// assert_eq!(with_f.keys(), [0, 2]);
    /// ```
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
    {
        Self::from_entries(
            self.entries
                .iter()
                .filter(|(_, item)| pred(item))
                .cloned()
                .collect(),
        )
    }

    /// Alias for [`filter()`](Collection::filter).
    #[inline]
    pub fn select(&self, pred: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
    {
        self.filter(pred)
    }

    /// Creates a collection of the items *not* satisfying `pred`.
    ///
    /// This is the complement of [`filter()`](Collection::filter). Keys are kept.
    pub fn reject(&self, mut pred: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
    {
        self.filter(|item| !pred(item))
    }

    /// Creates a collection ordered by a three-way comparator.
    ///
    /// The sort is stable and keys travel with their items.
    /// `cmp` must be a strict weak ordering, otherwise the order is unspecified.
    pub fn sort(&self, mut cmp: impl FnMut(&T, &T) -> Ordering) -> Self
    where
        T: Clone,
    {
        let mut entries = self.entries.clone();
        entries.sort_by(|(_, a), (_, b)| cmp(a, b));
        Self::from_entries(entries)
    }

    /// Creates a collection over a window of the items.
    ///
    /// - A negative `offset` counts from the end.
    /// - `None` as `length` runs to the end. A negative `length` stops that many items
    ///   before the end.
    /// - `preserve_keys` keeps the original keys instead of renumbering from zero.
    ///
    /// Out-of-range windows are clamped, possibly to an empty collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::Collection;
    ///
    /// let nums = Collection::from([1, 2, 3, 4]);
    ///
    /// assert_eq!(nums.slice(1, Some(2), false).to_array(), [(0, 2), (1, 3)]);
    /// assert_eq!(nums.slice(1, Some(2), true).to_array(), [(1, 2), (2, 3)]);
    /// assert_eq!(nums.slice(-2, None, false).values(), [3, 4]);
    /// assert_eq!(nums.slice(0, Some(-1), false).values(), [1, 2, 3]);
    /// ```
    pub fn slice(&self, offset: isize, length: Option<isize>, preserve_keys: bool) -> Self
    where
        T: Clone,
    {
        let window = &self.entries[slice_range(self.len(), offset, length)];

        if preserve_keys {
            Self::from_entries(window.to_vec())
        } else {
            Self::dense(window.iter().map(|(_, item)| item.clone()))
        }
    }

    /// Creates a collection of the first `length` items.
    ///
    /// Equivalent to `slice(0, Some(length), preserve_keys)`.
    #[inline]
    pub fn take(&self, length: usize, preserve_keys: bool) -> Self
    where
        T: Clone,
    {
        let length = isize::try_from(length).unwrap_or(isize::MAX);
        self.slice(0, Some(length), preserve_keys)
    }

    /// Creates a collection of every item but the first, renumbered from zero.
    pub fn tail(&self) -> Self
    where
        T: Clone,
    {
        Self::dense(self.iter().skip(1).cloned())
    }
}

fn slice_range(len: usize, offset: isize, length: Option<isize>) -> Range<usize> {
    // `Vec` never holds more than `isize::MAX` items.
    let len = isize::try_from(len).unwrap_or(isize::MAX);

    let start = if offset < 0 {
        len.saturating_add(offset).max(0)
    } else {
        offset.min(len)
    };

    let end = match length {
        None => len,
        Some(length) if length < 0 => len.saturating_add(length),
        Some(length) => start.saturating_add(length).min(len),
    }
    .max(start);

    start.unsigned_abs()..end.unsigned_abs()
}
