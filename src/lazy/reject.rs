use std::fmt::Debug;

use super::Shared;

/// A stage that drops the items satisfying a predicate.
///
/// This `struct` is created by [`LazyCollection::reject()`](crate::LazyCollection::reject).
pub(crate) struct Reject<'a, T, F> {
    upstream: Shared<'a, T>,
    pred: F,
}

impl<'a, T, F> Reject<'a, T, F> {
    pub(crate) fn new(upstream: Shared<'a, T>, pred: F) -> Self {
        Self { upstream, pred }
    }
}

impl<T, F> Iterator for Reject<'_, T, F>
where
    F: FnMut(&T) -> bool,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let pred = &mut self.pred;
        self.upstream.find(|item| !pred(item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.upstream.size_hint();
        (0, upper)
    }
}

impl<T, F> Debug for Reject<'_, T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reject")
            .field("upstream", &self.upstream)
            .finish()
    }
}
