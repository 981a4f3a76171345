use std::{cell::RefCell, fmt::Debug, rc::Rc};

type Producer<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// A handle to a producer that every derived stage pulls from.
///
/// Pulling through any handle advances the producer for all of them.
pub(crate) struct Shared<'a, T>(Rc<RefCell<Producer<'a, T>>>);

impl<'a, T> Shared<'a, T> {
    pub(crate) fn new(producer: impl Iterator<Item = T> + 'a) -> Self {
        Self(Rc::new(RefCell::new(Box::new(producer))))
    }
}

impl<T> Iterator for Shared<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        // A producer pulled from inside its own pipeline reports exhaustion
        // instead of panicking.
        self.0.try_borrow_mut().ok()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0
            .try_borrow()
            .map_or((0, None), |producer| producer.size_hint())
    }
}

impl<T> Clone for Shared<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Debug for Shared<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shared")
            .field("stages", &Rc::strong_count(&self.0))
            .finish_non_exhaustive()
    }
}
