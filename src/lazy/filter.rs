use std::fmt::Debug;

use super::Shared;

/// A stage that only lets through the items satisfying a predicate.
///
/// Pulls upstream until an item passes or upstream is exhausted.
///
/// This `struct` is created by [`LazyCollection::filter()`](crate::LazyCollection::filter).
pub(crate) struct Filter<'a, T, F> {
    upstream: Shared<'a, T>,
    pred: F,
}

impl<'a, T, F> Filter<'a, T, F> {
    pub(crate) fn new(upstream: Shared<'a, T>, pred: F) -> Self {
        Self { upstream, pred }
    }
}

impl<T, F> Iterator for Filter<'_, T, F>
where
    F: FnMut(&T) -> bool,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.upstream.find(&mut self.pred)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.upstream.size_hint();
        (0, upper)
    }
}

impl<T, F> Debug for Filter<'_, T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("upstream", &self.upstream)
            .finish()
    }
}
