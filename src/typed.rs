//! A collection restricted to elements of a single runtime type.
//!
//! [`TypedCollection`] holds type-erased [`Element`]s together with an
//! [`ItemType`] tag. Every element is checked against the tag before it is
//! admitted, both at construction (all elements, all-or-nothing) and on
//! [`add()`](TypedCollection::add).
//!
//! When the element type is known at compile time, a plain
//! [`Collection<T>`](Collection) already is homogeneous and should be preferred.
//!
//! # Examples
//!
//! ```
//! use collectibles::{Error, ItemType, TypedCollection, element};
//!
//! #[derive(Debug)]
//! struct Point(i32, i32);
//! #[derive(Debug)]
//! struct Color;
//!
//! let mut points = TypedCollection::from_items([element(Point(0, 0)), element(Point(1, 2))]).unwrap();
//! assert_eq!(points.item_type(), ItemType::of::<Point>());
//!
//! let err = points.add(element(Color)).unwrap_err();
//! assert!(matches!(err, Error::TypeMismatch { .. }));
//! assert_eq!(points.len(), 2);
//! ```

use std::{cmp::Ordering, fmt::Debug, ops::Deref};

use tracing::{debug, trace};

use crate::{
    collection::Collection,
    error::{Error, Result},
    object::{Element, ItemType},
};

/// A [`Collection`] of [`Element`]s that all match one [`ItemType`].
///
/// Read operations come from the inner collection through [`Deref`].
/// Operations that cannot change the element type return a `TypedCollection`
/// with the same tag.
///
/// See the [module-level documentation](self) for more.
#[derive(Clone)]
pub struct TypedCollection {
    inner: Collection<Element>,
    item_type: ItemType,
}

impl TypedCollection {
    /// Creates a collection enforcing `item_type`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] on the first element that does not
    /// match `item_type`. Nothing is built in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::{ItemType, TypedCollection, element};
    ///
    /// struct Point;
    ///
    /// let empty = TypedCollection::new([], ItemType::of::<Point>()).unwrap();
    /// assert!(empty.is_empty());
    ///
    /// let err = TypedCollection::new([element(Point), element(3)], ItemType::of::<Point>());
    /// assert!(err.is_err());
    /// ```
    pub fn new(items: impl IntoIterator<Item = Element>, item_type: ItemType) -> Result<Self> {
        let items: Vec<Element> = items.into_iter().collect();
        for item in &items {
            validate(item_type, item)?;
        }

        Ok(Self {
            inner: Collection::from(items),
            item_type,
        })
    }

    /// Creates a collection enforcing the type of its first element.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInputKind`] if `items` is empty or its first element is
    ///   a scalar (see [`Object::is_structured()`](crate::Object::is_structured)).
    /// - [`Error::TypeMismatch`] if a later element has another type.
    pub fn from_items(items: impl IntoIterator<Item = Element>) -> Result<Self> {
        let items: Vec<Element> = items.into_iter().collect();

        let Some(first) = items.first() else {
            debug!("cannot infer an item type from an empty source");
            return Err(Error::invalid_input("an empty sequence"));
        };
        if !(**first).is_structured() {
            let kind = (**first).item_type();
            debug!(kind = kind.name(), "cannot infer an item type from a scalar");
            return Err(Error::invalid_input(kind.name()));
        }

        let item_type = (**first).item_type();
        Self::new(items, item_type)
    }

    /// Returns the enforced type.
    #[inline]
    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    /// Replaces the enforced type for future validations.
    ///
    /// Elements already held are *not* checked against the new type.
    pub fn set_item_type(&mut self, item_type: ItemType) -> &mut Self {
        trace!(
            from = self.item_type.name(),
            to = item_type.name(),
            "item type replaced"
        );
        self.item_type = item_type;
        self
    }

    /// Appends `item` under the key after the greatest one in use.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if `item` does not match
    /// [`item_type()`](TypedCollection::item_type). The collection is left
    /// unchanged in that case.
    pub fn add(&mut self, item: Element) -> Result<()> {
        validate(self.item_type, &item)?;

        let key = self
            .inner
            .entries()
            .map(|(key, _)| key + 1)
            .max()
            .unwrap_or(0);
        self.inner.push_entry(key, item);
        Ok(())
    }

    /// Returns the inner collection.
    #[inline]
    pub fn as_inner(&self) -> &Collection<Element> {
        &self.inner
    }

    /// Unwraps the inner collection, dropping the type constraint.
    #[inline]
    pub fn into_inner(self) -> Collection<Element> {
        self.inner
    }

    fn with_inner(&self, inner: Collection<Element>) -> Self {
        Self {
            inner,
            item_type: self.item_type,
        }
    }

    /// See [`Collection::filter()`].
    pub fn filter(&self, pred: impl FnMut(&Element) -> bool) -> Self {
        self.with_inner(self.inner.filter(pred))
    }

    /// See [`Collection::select()`].
    #[inline]
    pub fn select(&self, pred: impl FnMut(&Element) -> bool) -> Self {
        self.filter(pred)
    }

    /// See [`Collection::reject()`].
    pub fn reject(&self, pred: impl FnMut(&Element) -> bool) -> Self {
        self.with_inner(self.inner.reject(pred))
    }

    /// See [`Collection::sort()`].
    pub fn sort(&self, cmp: impl FnMut(&Element, &Element) -> Ordering) -> Self {
        self.with_inner(self.inner.sort(cmp))
    }

    /// See [`Collection::slice()`].
    pub fn slice(&self, offset: isize, length: Option<isize>, preserve_keys: bool) -> Self {
        self.with_inner(self.inner.slice(offset, length, preserve_keys))
    }

    /// See [`Collection::take()`].
    pub fn take(&self, length: usize, preserve_keys: bool) -> Self {
        self.with_inner(self.inner.take(length, preserve_keys))
    }

    /// See [`Collection::tail()`].
    pub fn tail(&self) -> Self {
        self.with_inner(self.inner.tail())
    }
}

fn validate(item_type: ItemType, item: &Element) -> Result<()> {
    if item_type.matches(&**item) {
        return Ok(());
    }

    let actual = (**item).item_type().name();
    debug!(
        expected = item_type.name(),
        actual, "typed collection rejected an element"
    );
    Err(Error::TypeMismatch {
        expected: item_type.name(),
        actual,
    })
}

impl Deref for TypedCollection {
    type Target = Collection<Element>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl TryFrom<Collection<Element>> for TypedCollection {
    type Error = Error;

    /// Infers the item type like [`TypedCollection::from_items()`].
    /// Keys are renumbered from zero.
    fn try_from(items: Collection<Element>) -> Result<Self> {
        Self::from_items(items)
    }
}

impl Debug for TypedCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedCollection")
            .field("item_type", &self.item_type)
            .field("items", &self.inner)
            .finish()
    }
}

impl<'a> IntoIterator for &'a TypedCollection {
    type Item = &'a Element;
    type IntoIter = crate::collection::Iter<'a, Element>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::object::element;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Point(i32, i32);

    #[derive(Debug)]
    struct Color;

    fn points(coords: &[(i32, i32)]) -> Vec<Element> {
        coords.iter().map(|&(x, y)| element(Point(x, y))).collect()
    }

    fn x_of(item: &Element) -> i32 {
        item.downcast_ref::<Point>().map_or(i32::MIN, |point| point.0)
    }

    #[test]
    fn validates_every_element_on_construction() {
        let typed = TypedCollection::new(points(&[(0, 0), (1, 1)]), ItemType::of::<Point>()).unwrap();
        assert_eq!(typed.len(), 2);

        let mut mixed = points(&[(0, 0)]);
        mixed.push(element(Color));
        let err = TypedCollection::new(mixed, ItemType::of::<Point>()).unwrap_err();

        assert_eq!(
            err,
            Error::TypeMismatch {
                expected: std::any::type_name::<Point>(),
                actual: std::any::type_name::<Color>(),
            }
        );
    }

    #[test]
    fn rejects_scalars_against_a_structured_type() {
        let err = TypedCollection::new([element(1_i32)], ItemType::of::<Point>()).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { actual: "i32", .. }));
    }

    #[test]
    fn infers_the_type_from_the_first_element() {
        let typed = TypedCollection::from_items(points(&[(3, 4)])).unwrap();
        assert_eq!(typed.item_type(), ItemType::of::<Point>());

        let mixed = [element(Point(0, 0)), element(Color)];
        assert!(matches!(
            TypedCollection::from_items(mixed),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn cannot_infer_from_empty_or_scalar_sources() {
        assert_eq!(
            TypedCollection::from_items([]).unwrap_err().to_string(),
            "argument must be an iterable or a sequence, an empty sequence given"
        );
        assert_eq!(
            TypedCollection::from_items([element("hello"), element(Point(0, 0))]).unwrap_err(),
            Error::invalid_input("&str")
        );
    }

    #[test]
    fn add_validates_one_element() {
        let mut typed = TypedCollection::from_items(points(&[(0, 0)])).unwrap();

        typed.add(element(Point(1, 1))).unwrap();
        assert_eq!(typed.len(), 2);
        assert_eq!(typed.keys(), [0, 1]);

        assert!(typed.add(element(Color)).is_err());
        assert_eq!(typed.len(), 2);
    }

    #[test]
    fn add_appends_after_the_greatest_key() {
        let typed = TypedCollection::from_items(points(&[(0, 0), (1, 1), (2, 2)])).unwrap();
        let mut odd = typed.filter(|item| x_of(item) != 1);

        odd.add(element(Point(3, 3))).unwrap();
        assert_eq!(odd.keys(), [0, 2, 3]);
    }

    #[test]
    fn set_item_type_does_not_revalidate() {
        let mut typed = TypedCollection::from_items(points(&[(0, 0)])).unwrap();
        typed.set_item_type(ItemType::of::<Color>());

        assert_eq!(typed.len(), 1);
        assert!(typed.add(element(Color)).is_ok());
        assert!(typed.add(element(Point(1, 1))).is_err());
    }

    #[test]
    fn shape_preserving_operations_keep_the_tag() {
        let typed = TypedCollection::from_items(points(&[(2, 0), (0, 0), (1, 0)])).unwrap();

        let sorted = typed.sort(|a, b| x_of(a).cmp(&x_of(b)));
        assert_eq!(sorted.item_type(), ItemType::of::<Point>());
        assert_eq!(sorted.map(x_of).values(), [0, 1, 2]);

        assert_eq!(typed.reject(|item| x_of(item) == 0).map(x_of).values(), [2, 1]);
        assert_eq!(typed.select(|item| x_of(item) == 0).len(), 1);
        assert_eq!(typed.slice(1, None, true).keys(), [1, 2]);
        assert_eq!(typed.take(1, false).map(x_of).values(), [2]);
        assert_eq!(typed.tail().map(x_of).values(), [0, 1]);
    }

    #[test]
    fn elements_are_shared_not_copied() {
        let typed = TypedCollection::from_items(points(&[(0, 0)])).unwrap();
        let filtered = typed.filter(|_| true);

        let (Some(a), Some(b)) = (typed.head(), filtered.head()) else {
            panic!("both hold an element");
        };
        assert!(Rc::ptr_eq(a, b));
    }

    #[test]
    fn converts_from_element_collections() {
        let items = Collection::from(points(&[(5, 5)]));
        let typed = TypedCollection::try_from(items).unwrap();
        assert_eq!(typed.head().and_then(|item| item.downcast_ref::<Point>()), Some(&Point(5, 5)));

        assert!(TypedCollection::try_from(Collection::new()).is_err());
    }
}
