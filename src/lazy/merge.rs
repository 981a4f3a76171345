use std::vec;

use super::Shared;

/// A stage that drains its sources one after another.
///
/// This `struct` is created by [`LazyCollection::merge()`](crate::LazyCollection::merge).
#[derive(Debug)]
pub(crate) struct Merge<'a, T> {
    current: Option<Shared<'a, T>>,
    pending: vec::IntoIter<Shared<'a, T>>,
}

impl<'a, T> Merge<'a, T> {
    pub(crate) fn new(sources: Vec<Shared<'a, T>>) -> Self {
        let mut pending = sources.into_iter();
        Self {
            current: pending.next(),
            pending,
        }
    }
}

impl<T> Iterator for Merge<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.as_mut()?.next() {
                return Some(item);
            }

            self.current = self.pending.next();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.current
            .iter()
            .chain(self.pending.as_slice())
            .map(Iterator::size_hint)
            .fold((0, Some(0)), |(lower, upper), (l, u)| {
                (
                    lower.saturating_add(l),
                    upper.zip(u).and_then(|(a, b)| a.checked_add(b)),
                )
            })
    }
}
