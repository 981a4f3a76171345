use super::Collection;

impl<T: Clone + PartialEq> Collection<T> {
    /// Creates a collection without duplicated items, renumbered from zero.
    ///
    /// The first occurrence of each value wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::Collection;
    ///
    /// let nums = Collection::from([1, 6, 3, 4, 3, 5, 5, 3, 2, 1]);
    ///
    /// assert_eq!(nums.distinct().values(), [1, 6, 3, 4, 5, 2]);
    /// ```
    pub fn distinct(&self) -> Self {
        // Only `PartialEq` is required, so no hashing.
        let mut kept: Vec<T> = Vec::with_capacity(self.len());
        for item in self {
            if !kept.contains(item) {
                kept.push(item.clone());
            }
        }

        Self::dense(kept)
    }

    /// Creates a collection of the items that are not in `other`, renumbered from zero.
    ///
    /// The order follows `self`.
    pub fn difference(&self, other: &Self) -> Self {
        Self::dense(self.iter().filter(|item| !other.contains(item)).cloned())
    }

    /// Creates a collection of the items that are also in `other`, renumbered from zero.
    ///
    /// The order follows `self`.
    pub fn intersection(&self, other: &Self) -> Self {
        Self::dense(self.iter().filter(|item| other.contains(item)).cloned())
    }
}

impl<T: Clone> Collection<T> {
    /// Concatenates `self` with every collection of `others`, in argument order,
    /// renumbered from zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::Collection;
    ///
    /// let merged = Collection::from([1, 2]).merge([
    ///     &Collection::from([3, 4]),
    ///     &Collection::from([5, 6]),
    /// ]);
    ///
    /// assert_eq!(merged.values(), [1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn merge<'a>(&self, others: impl IntoIterator<Item = &'a Self>) -> Self
    where
        T: 'a,
    {
        Self::dense(
            self.iter()
                .cloned()
                .chain(others.into_iter().flat_map(|other| other.iter().cloned())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_duplicates() {
        let distinct = Collection::from([1, 6, 3, 4, 3, 5, 5, 3, 2, 1]).distinct();
        let values = distinct.values();

        for (i, value) in values.iter().enumerate() {
            assert!(!values[i + 1..].contains(value), "{value} is duplicated");
        }
        assert_eq!(distinct.keys(), [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn set_operations() {
        let nums = Collection::from([1, 2, 3, 4]);
        let other = Collection::from([2, 3]);

        assert_eq!(nums.difference(&other).values(), [1, 4]);
        assert_eq!(nums.intersection(&other).values(), [2, 3]);
        assert_eq!(nums.difference(&Collection::new()), nums);
        assert!(nums.intersection(&Collection::new()).is_empty());
    }

    #[test]
    fn set_operations_reindex() {
        let nums = Collection::from([1, 2, 3, 4]);
        let other = Collection::from([1, 3]);
        assert_eq!(nums.difference(&other).to_array(), [(0, 2), (1, 4)]);
    }

    #[test]
    fn merges_in_argument_order() {
        let merged = Collection::from([1, 2, 3]).merge([&Collection::from([4, 5, 6])]);
        assert_eq!(merged.values(), [1, 2, 3, 4, 5, 6]);

        let evens = Collection::from([0, 1, 2, 3]).filter(|num| num % 2 == 0);
        let merged = evens.merge([&Collection::from([7]), &Collection::new()]);
        assert_eq!(merged.to_array(), [(0, 0), (1, 2), (2, 7)]);

        let alone = Collection::from([1]).merge(std::iter::empty());
        assert_eq!(alone.values(), [1]);
    }

    #[test]
    fn merges_collections_outliving_the_receiver() {
        let others = vec![Collection::from([String::from("b")])];
        let merged = {
            let head = Collection::from([String::from("a")]);
            head.merge(&others)
        };
        assert_eq!(merged.values(), ["a", "b"]);
    }
}
