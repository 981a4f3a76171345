use tracing::debug;

use crate::{
    error::{Error, Result},
    lazy::into_producer,
    object::Object,
};

use super::Collection;

impl<T: 'static> Collection<T> {
    /// Builds from a type-erased value.
    ///
    /// Accepts `Vec<T>`, `VecDeque<T>`, `Box<[T]>`, [`Collection<T>`],
    /// [`LazyCollection<T>`](crate::LazyCollection) and
    /// `Box<dyn Iterator<Item = T>>`. Iterators are drained eagerly.
    /// Concrete iterators and arrays are not recognised: erase an iterator to
    /// `Box<dyn Iterator<Item = T>>` before boxing it as an [`Object`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidInputKind`] naming the runtime type of `source`
    /// if it is none of the above.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::{Collection, Error};
    ///
    /// let nums = Collection::<i32>::try_from_object(Box::new(vec![1, 2, 3])).unwrap();
    /// assert_eq!(nums.values(), [1, 2, 3]);
    ///
    /// let err = Collection::<i32>::try_from_object(Box::new("hello")).unwrap_err();
    /// assert_eq!(err.to_string(), "argument must be an iterable or a sequence, &str given");
    /// ```
    pub fn try_from_object(source: Box<dyn Object>) -> Result<Self> {
        let kind = (*source).item_type();
        match into_producer::<T>(Object::into_any(source)) {
            Some(producer) => Ok(Self::dense(producer)),
            None => {
                debug!(kind = kind.name(), "rejected collection source");
                Err(Error::invalid_input(kind.name()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::lazy::LazyCollection;

    use super::*;

    fn rejected_kind(source: Box<dyn Object>) -> String {
        match Collection::<i32>::try_from_object(source) {
            Err(Error::InvalidInputKind { kind }) => kind,
            other => panic!("expected a rejection, got {other:?}"),
        }
    }

    #[test]
    fn accepts_sequences_and_iterators() {
        let expected = Collection::from([1, 2, 3]);
        let sources: [Box<dyn Object>; 6] = [
            Box::new(vec![1, 2, 3]),
            Box::new(VecDeque::from([1, 2, 3])),
            Box::new(vec![1, 2, 3].into_boxed_slice()),
            Box::new(Collection::from([1, 2, 3])),
            Box::new(LazyCollection::from([1, 2, 3])),
            Box::new(Box::new(1..4) as Box<dyn Iterator<Item = i32>>),
        ];

        for source in sources {
            assert_eq!(Collection::try_from_object(source), Ok(expected.clone()));
        }
    }

    #[test]
    fn iterators_must_be_type_erased() {
        let concrete = rejected_kind(Box::new(0..3));
        assert_eq!(concrete, std::any::type_name::<std::ops::Range<i32>>());

        let erased: Box<dyn Iterator<Item = i32>> = Box::new(0..3);
        let nums = Collection::<i32>::try_from_object(Box::new(erased)).unwrap();
        assert_eq!(nums.values(), [0, 1, 2]);
    }

    #[test]
    fn renumbers_filtered_collections() {
        let evens = Collection::from([1, 2, 3, 4]).filter(|num| num % 2 == 0);
        let rebuilt = Collection::<i32>::try_from_object(Box::new(evens)).unwrap();
        assert_eq!(rebuilt.to_array(), [(0, 2), (1, 4)]);
    }

    #[test]
    fn rejects_scalars_and_plain_structs() {
        struct Point;

        assert_eq!(rejected_kind(Box::new(15_i32)), "i32");
        assert_eq!(rejected_kind(Box::new("hello")), "&str");
        assert_eq!(rejected_kind(Box::new(true)), "bool");
        assert!(rejected_kind(Box::new(Point)).ends_with("Point"));
    }

    #[test]
    fn rejects_sequences_of_another_item_type() {
        assert_eq!(
            rejected_kind(Box::new(vec![1_u8])),
            std::any::type_name::<Vec<u8>>()
        );
    }
}
