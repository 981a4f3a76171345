use std::fmt::Debug;

use super::Shared;

/// A stage that calls a closure on each item pulled from upstream.
///
/// This `struct` is created by [`LazyCollection::map()`](crate::LazyCollection::map).
pub(crate) struct Map<'a, T, F> {
    upstream: Shared<'a, T>,
    f: F,
}

impl<'a, T, F> Map<'a, T, F> {
    pub(crate) fn new(upstream: Shared<'a, T>, f: F) -> Self {
        Self { upstream, f }
    }
}

impl<T, U, F> Iterator for Map<'_, T, F>
where
    F: FnMut(T) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.upstream.next().map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<T, F> Debug for Map<'_, T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("upstream", &self.upstream)
            .finish()
    }
}
