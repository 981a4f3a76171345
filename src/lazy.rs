//! The lazy, single-pass, iterator-backed collection.
//!
//! A [`LazyCollection`] wraps a producer. Each of [`map()`](LazyCollection::map),
//! [`filter()`](LazyCollection::filter), [`reject()`](LazyCollection::reject) and
//! [`merge()`](LazyCollection::merge) wraps the current producer in a new stage
//! that pulls one item at a time from upstream. Nothing runs until the collection
//! is consumed by [`to_array()`](LazyCollection::to_array),
//! [`reduce()`](LazyCollection::reduce), [`persist()`](LazyCollection::persist)
//! or plain iteration.
//!
//! # Single pass
//!
//! A stage shares its upstream with every stage derived from it. Consuming any of
//! them advances, and eventually exhausts, the common source. A lazy collection can
//! therefore be materialized at most once: a second attempt observes an exhausted
//! source and yields nothing.
//!
//! ```
//! use collectibles::LazyCollection;
//!
//! let nums = LazyCollection::from([1, 2, 3]);
//!
//! assert_eq!(nums.to_array(), [1, 2, 3]);
//! assert_eq!(nums.to_array(), []);
//! ```
//!
//! A stage pulled again while it is already producing an item reports
//! exhaustion.

mod filter;
mod map;
mod merge;
mod reject;
mod shared;

use std::{any::Any, collections::VecDeque, fmt::Debug};

use filter::Filter;
use map::Map;
use merge::Merge;
use reject::Reject;
use shared::Shared;
use tracing::{debug, trace};

use crate::{
    collection::Collection,
    error::{Error, Result},
    object::Object,
};

/// A lazily evaluated, single-pass collection.
///
/// See the [module-level documentation](self) for more.
pub struct LazyCollection<'a, T> {
    source: Shared<'a, T>,
}

impl<'a, T: 'a> LazyCollection<'a, T> {
    /// Wraps a source without consuming it.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::LazyCollection;
    ///
    /// let squares = LazyCollection::new((1..).map(|num| num * num)).filter(|num| num % 2 == 1);
    /// let first = squares.head();
    ///
    /// assert_eq!(first, Some(1));
    /// assert_eq!(squares.head(), Some(9));
    /// ```
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self {
            source: Shared::new(source.into_iter()),
        }
    }

    /// Returns an iterator pulling from the shared source.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::LazyCollection;
    ///
    /// let nums = LazyCollection::from([1, 2, 3]);
    /// let mut iter = nums.iter();
    ///
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(nums.to_array(), [2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> LazyIter<'a, T> {
        LazyIter(self.source.clone())
    }

    /// Creates a stage that calls `f` on each item.
    pub fn map<U: 'a>(&self, f: impl FnMut(T) -> U + 'a) -> LazyCollection<'a, U> {
        LazyCollection::new(Map::new(self.source.clone(), f))
    }

    /// Creates a stage that only yields the items satisfying `pred`.
    pub fn filter(&self, pred: impl FnMut(&T) -> bool + 'a) -> Self {
        Self::new(Filter::new(self.source.clone(), pred))
    }

    /// Alias for [`filter()`](LazyCollection::filter).
    #[inline]
    pub fn select(&self, pred: impl FnMut(&T) -> bool + 'a) -> Self {
        self.filter(pred)
    }

    /// Creates a stage that drops the items satisfying `pred`.
    pub fn reject(&self, pred: impl FnMut(&T) -> bool + 'a) -> Self {
        Self::new(Reject::new(self.source.clone(), pred))
    }

    /// Creates a stage that yields every item of `self`, then every item of each
    /// of `others` in argument order.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::LazyCollection;
    ///
    /// let merged = LazyCollection::from([1, 2, 3]).merge([&LazyCollection::from([4, 5, 6])]);
    ///
    /// assert_eq!(merged.to_array(), [1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn merge<'b>(&self, others: impl IntoIterator<Item = &'b Self>) -> Self
    where
        'a: 'b,
    {
        let sources = std::iter::once(self.source.clone())
            .chain(others.into_iter().map(|lazy| lazy.source.clone()))
            .collect();

        Self::new(Merge::new(sources))
    }

    /// Creates a stage that drops items already yielded.
    #[cfg(feature = "itertools")]
    #[cfg_attr(docsrs, doc(cfg(feature = "itertools")))]
    pub fn unique(&self) -> Self
    where
        T: Clone + Eq + std::hash::Hash,
    {
        use itertools::Itertools;

        Self::new(self.source.clone().unique())
    }
}

impl<T> LazyCollection<'_, T> {
    /// Drives the pipeline to completion, left-folding the items into an accumulator.
    pub fn reduce<A>(&self, mut f: impl FnMut(A, T) -> A, initial: A) -> A {
        let mut produced = 0_usize;
        let accum = self.source.clone().fold(initial, |accum, item| {
            produced += 1;
            f(accum, item)
        });

        trace!(produced, "lazy collection reduced");
        accum
    }

    /// Drains the pipeline into a vector.
    pub fn to_array(&self) -> Vec<T> {
        let items: Vec<T> = self.source.clone().collect();
        trace!(produced = items.len(), "lazy collection drained");
        items
    }

    /// Alias for [`to_array()`](LazyCollection::to_array).
    #[inline]
    pub fn values(&self) -> Vec<T> {
        self.to_array()
    }

    /// Drains the pipeline into an eager [`Collection`].
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::{Collection, LazyCollection};
    ///
    /// let persisted = LazyCollection::from([0, 1, 2, 3]).map(|num| num * 2).persist();
    ///
    /// assert_eq!(persisted, Collection::from([0, 2, 4, 6]));
    /// ```
    #[inline]
    pub fn persist(&self) -> Collection<T> {
        Collection::from(self.to_array())
    }

    /// Drains the pipeline into an eager collection of kind `C`.
    ///
    /// # Errors
    ///
    /// Returns whatever `C` fails with when built from the drained items,
    /// e.g. [`Error::TypeMismatch`] for a [`TypedCollection`](crate::TypedCollection).
    /// The pipeline is drained regardless.
    pub fn persist_as<C>(&self) -> std::result::Result<C, C::Error>
    where
        C: TryFrom<Collection<T>>,
    {
        C::try_from(self.persist())
    }

    /// Drives the pipeline to completion, calling `f` on each item.
    pub fn each(&self, f: impl FnMut(T)) {
        self.source.clone().for_each(f);
    }

    /// Pulls the next item.
    #[inline]
    pub fn head(&self) -> Option<T> {
        self.source.clone().next()
    }

    /// Returns `true` if every item satisfies `pred`.
    ///
    /// Items are pulled up to the first one that does not.
    #[inline]
    pub fn every(&self, pred: impl FnMut(T) -> bool) -> bool {
        self.source.clone().all(pred)
    }

    /// Returns `true` if at least one item satisfies `pred`.
    ///
    /// Items are pulled up to the first one that does.
    #[inline]
    pub fn some(&self, pred: impl FnMut(T) -> bool) -> bool {
        self.source.clone().any(pred)
    }

    /// Returns `true` if no item satisfies `pred`.
    #[inline]
    pub fn none(&self, pred: impl FnMut(T) -> bool) -> bool {
        !self.some(pred)
    }
}

impl<T: 'static> LazyCollection<'static, T> {
    /// Builds from a type-erased value.
    ///
    /// Accepts `Vec<T>`, `VecDeque<T>`, `Box<[T]>`, [`Collection<T>`],
    /// `LazyCollection<T>` and `Box<dyn Iterator<Item = T>>`. Iterators are
    /// wrapped, not drained. Concrete iterators and arrays are not recognised:
    /// erase an iterator to `Box<dyn Iterator<Item = T>>` before boxing it
    /// as an [`Object`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidInputKind`] naming the runtime type of `source`
    /// if it is none of the above.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::{Error, LazyCollection};
    ///
    /// let nums = LazyCollection::<i32>::try_from_object(Box::new(vec![1, 2])).unwrap();
    /// assert_eq!(nums.to_array(), [1, 2]);
    ///
    /// let err = LazyCollection::<i32>::try_from_object(Box::new(15_i32)).unwrap_err();
    /// assert_eq!(err, Error::InvalidInputKind { kind: "i32".into() });
    /// ```
    pub fn try_from_object(source: Box<dyn Object>) -> Result<Self> {
        let kind = (*source).item_type();
        match into_producer::<T>(Object::into_any(source)) {
            Some(producer) => Ok(Self {
                source: Shared::new(producer),
            }),
            None => {
                debug!(kind = kind.name(), "rejected lazy collection source");
                Err(Error::invalid_input(kind.name()))
            }
        }
    }
}

/// Recovers an iterator from the runtime kinds a builder accepts.
pub(crate) fn into_producer<T: 'static>(
    source: Box<dyn Any>,
) -> Option<Box<dyn Iterator<Item = T>>> {
    macro_rules! try_kinds {
        ($source:ident: $($ty:ty),* $(,)?) => {$(
            let $source = match $source.downcast::<$ty>() {
                Ok(items) => return Some(Box::new(IntoIterator::into_iter(*items))),
                Err(source) => source,
            };
        )*};
    }

    try_kinds!(
        source: Vec<T>,
        VecDeque<T>,
        Box<[T]>,
        Collection<T>,
    );

    let source = match source.downcast::<LazyCollection<'static, T>>() {
        Ok(lazy) => return Some(Box::new(lazy.source.clone())),
        Err(source) => source,
    };

    source
        .downcast::<Box<dyn Iterator<Item = T>>>()
        .ok()
        .map(|items| *items)
}

/// An iterator pulling from the source of a [`LazyCollection`].
///
/// Pulling advances the source for every stage sharing it.
///
/// This `struct` is created by [`LazyCollection::iter()`] and
/// `LazyCollection::into_iter()`.
#[derive(Debug, Clone)]
pub struct LazyIter<'a, T>(Shared<'a, T>);

impl<T> Iterator for LazyIter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T> IntoIterator for LazyCollection<'a, T> {
    type Item = T;
    type IntoIter = LazyIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LazyIter(self.source)
    }
}

impl<'a, T: 'a> IntoIterator for &LazyCollection<'a, T> {
    type Item = T;
    type IntoIter = LazyIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Debug for LazyCollection<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyCollection")
            .field("source", &self.source)
            .finish()
    }
}

impl<'a, T: 'a> From<Vec<T>> for LazyCollection<'a, T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<'a, T: 'a, const N: usize> From<[T; N]> for LazyCollection<'a, T> {
    #[inline]
    fn from(items: [T; N]) -> Self {
        Self::new(items)
    }
}

impl<'a, T: 'a> From<Collection<T>> for LazyCollection<'a, T> {
    #[inline]
    fn from(items: Collection<T>) -> Self {
        Self::new(items)
    }
}

impl<T> From<LazyCollection<'_, T>> for Collection<T> {
    #[inline]
    fn from(lazy: LazyCollection<'_, T>) -> Self {
        lazy.persist()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{
        object::{ItemType, element},
        typed::TypedCollection,
    };

    use super::*;

    #[test]
    fn builds_from_sequences_and_iterators() {
        assert!(LazyCollection::<i32>::from(vec![]).to_array().is_empty());
        assert_eq!(LazyCollection::new(0..3).to_array(), [0, 1, 2]);
        assert_eq!(LazyCollection::new(VecDeque::from([1, 2])).to_array(), [1, 2]);
        assert_eq!(LazyCollection::from(Collection::from([3, 4])).to_array(), [3, 4]);

        let borrowed = [String::from("a"), String::from("b")];
        let lengths = LazyCollection::new(borrowed.iter()).map(String::len);
        assert_eq!(lengths.to_array(), [1, 1]);
    }

    #[test]
    fn builds_from_type_erased_values() {
        let from_vec = LazyCollection::<u8>::try_from_object(Box::new(vec![1_u8, 2]));
        assert_eq!(from_vec.unwrap().to_array(), [1, 2]);

        let iter: Box<dyn Iterator<Item = u8>> = Box::new(3..5);
        let from_iter = LazyCollection::<u8>::try_from_object(Box::new(iter));
        assert_eq!(from_iter.unwrap().to_array(), [3, 4]);

        let from_aggregate =
            LazyCollection::<u8>::try_from_object(Box::new(Collection::from([5_u8])));
        assert_eq!(from_aggregate.unwrap().to_array(), [5]);
    }

    #[test]
    fn rejects_non_iterables() {
        let kind_of = |source: Box<dyn Object>| match LazyCollection::<i32>::try_from_object(source)
        {
            Err(Error::InvalidInputKind { kind }) => kind,
            other => panic!("unexpected {other:?}"),
        };

        assert_eq!(kind_of(Box::new(())), "()");
        assert_eq!(kind_of(Box::new(true)), "bool");
        assert_eq!(kind_of(Box::new("toto")), "&str");
        assert_eq!(kind_of(Box::new(15_i32)), "i32");
        // Right shape, wrong item type.
        assert_eq!(kind_of(Box::new(vec![1_u8])), std::any::type_name::<Vec<u8>>());
    }

    #[test]
    fn maps_filters_and_rejects() {
        assert_eq!(LazyCollection::from([1, 2, 3]).map(|num| num + 1).to_array(), [2, 3, 4]);
        assert_eq!(
            LazyCollection::from(["test1", "test2"]).map(|s| format!("{s}1")).to_array(),
            ["test11", "test21"]
        );
        assert_eq!(
            LazyCollection::from([1, 2, 3, 4]).filter(|num| num % 2 == 0).to_array(),
            [2, 4]
        );
        assert_eq!(
            LazyCollection::from([1, 2, 3, 4]).select(|num| num % 2 == 0).to_array(),
            [2, 4]
        );
        assert_eq!(
            LazyCollection::from(["foo", "bar", "fizz", "buzz"])
                .reject(|word| word.contains('f'))
                .to_array(),
            ["bar", "buzz"]
        );
        assert!(LazyCollection::<i32>::from([]).map(|num| num + 1).to_array().is_empty());
    }

    #[test]
    fn stages_do_nothing_until_consumed() {
        let calls = Cell::new(0);
        let mapped = LazyCollection::from([1, 2, 3]).map(|num| {
            calls.set(calls.get() + 1);
            num * 2
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.head(), Some(2));
        assert_eq!(calls.get(), 1);
        assert_eq!(mapped.to_array(), [4, 6]);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn pulls_one_item_per_stage_at_a_time() {
        let log = std::cell::RefCell::new(vec![]);
        let pipeline = LazyCollection::from([1, 2, 3])
            .map(|num| {
                log.borrow_mut().push(format!("map {num}"));
                num
            })
            .filter(|num| {
                log.borrow_mut().push(format!("filter {num}"));
                num % 2 == 1
            });

        assert_eq!(pipeline.to_array(), [1, 3]);
        assert_eq!(
            *log.borrow(),
            ["map 1", "filter 1", "map 2", "filter 2", "map 3", "filter 3"]
        );
    }

    #[test]
    fn materializes_at_most_once() {
        let nums = LazyCollection::from([1, 2, 3]);
        assert_eq!(nums.to_array(), [1, 2, 3]);
        assert!(nums.to_array().is_empty());
        assert_eq!(nums.reduce(|sum, num| sum + num, 0), 0);
    }

    #[test]
    fn derived_stages_share_their_source() {
        let nums = LazyCollection::from([1, 2, 3, 4]);
        let doubled = nums.map(|num| num * 2);

        assert_eq!(nums.head(), Some(1));
        assert_eq!(doubled.to_array(), [4, 6, 8]);
        assert!(nums.to_array().is_empty());
    }

    #[test]
    fn merges_sequentially() {
        let merged = LazyCollection::from([1, 2, 3])
            .merge([&LazyCollection::from([4, 5]), &LazyCollection::from([6])]);
        assert_eq!(merged.to_array(), [1, 2, 3, 4, 5, 6]);

        let alone = LazyCollection::from([1]).merge([]);
        assert_eq!(alone.to_array(), [1]);

        // Merging a collection with itself only yields it once.
        let nums = LazyCollection::from([1, 2]);
        assert_eq!(nums.merge([&nums]).to_array(), [1, 2]);
    }

    #[test]
    fn reduces_the_whole_pipeline() {
        assert_eq!(LazyCollection::<i32>::from([]).reduce(|sum, num| sum + num, 0), 0);
        assert_eq!(LazyCollection::from([1, 2, 3, 4]).reduce(|sum, num| sum + num, 0), 10);
        assert_eq!(
            LazyCollection::from(["banana", "apple", "orange"]).reduce(
                |joined: String, fruit| if joined.is_empty() {
                    fruit.to_string()
                } else {
                    format!("{joined}, {fruit}")
                },
                String::new(),
            ),
            "banana, apple, orange"
        );
    }

    #[test]
    fn persists_into_eager_collections() {
        let persisted = LazyCollection::from([0, 1, 2, 3, 4, 5, 6]).persist();
        assert_eq!(persisted.values(), [0, 1, 2, 3, 4, 5, 6]);

        let eager: Collection<_> = LazyCollection::from([1, 2]).into();
        assert_eq!(eager.values(), [1, 2]);

        #[derive(Debug)]
        struct Point;

        let typed: TypedCollection = LazyCollection::from([element(Point), element(Point)])
            .persist_as()
            .unwrap();
        assert_eq!(typed.item_type(), ItemType::of::<Point>());
        assert_eq!(typed.len(), 2);

        let mixed = LazyCollection::from([element(Point), element(String::new())])
            .persist_as::<TypedCollection>();
        assert!(matches!(mixed, Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn quantifiers_pull_lazily() {
        let nums = LazyCollection::from([2, 4, 5, 6, 7]);
        assert!(!nums.every(|num| num % 2 == 0));
        // `2`, `4` and `5` were consumed.
        assert_eq!(nums.to_array(), [6, 7]);

        assert!(LazyCollection::from([1, 2]).some(|num| num == 2));
        assert!(LazyCollection::from([1, 2]).none(|num| num > 2));

        let mut seen = vec![];
        LazyCollection::from([1, 2]).each(|num| seen.push(num));
        assert_eq!(seen, [1, 2]);
    }

    #[test]
    fn closures_pulling_upstream_advance_it() {
        let nums = LazyCollection::from([1, 2, 3]);
        let sibling = nums.filter(|_| true);
        let peeked = nums.map(move |num| (num, sibling.head())).to_array();

        assert_eq!(peeked, [(1, Some(2)), (3, None)]);
    }

    #[test]
    fn stage_methods_are_not_shadowed() {
        let tens = LazyCollection::from([1, 2, 3]).map(|num| num * 10);
        let sum = LazyCollection::from([1, 2, 3]).reduce(|sum, num| sum + num, 0);

        assert_eq!(tens.filter(|num| *num > 10).to_array(), [20, 30]);
        assert_eq!(sum, 6);
    }

    #[test]
    fn iterating_advances_the_shared_source() {
        let tens = LazyCollection::from([1, 2, 3]).map(|num| num * 10);
        let mut iter = tens.iter();

        assert_eq!(iter.next(), Some(10));
        assert_eq!((&tens).into_iter().sum::<i32>(), 50);
        assert_eq!(iter.next(), None);
        assert_eq!(tens.into_iter().count(), 0);
    }

    #[cfg(feature = "itertools")]
    #[test]
    fn unique_drops_repeats() {
        let nums = LazyCollection::from([1, 2, 1, 3, 2]).unique();
        assert_eq!(nums.to_array(), [1, 2, 3]);
    }
}
