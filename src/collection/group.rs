use std::{any::type_name, fmt, rc::Rc};

use indexmap::IndexMap;

use crate::{
    error::{Error, Result},
    object::{Element, Object},
};

use super::Collection;

/// The key of a group produced by [`Collection::group_by()`].
///
/// Only integers and strings are valid group keys.
/// With the `serde` feature, a key (de)serializes as a bare integer or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKey {
    /// An integer key.
    Int(i128),
    /// A string key.
    Str(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(int) => int.fmt(f),
            Self::Str(s) => f.write_str(s),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GroupKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Int(int) => serializer.serialize_i128(*int),
            Self::Str(s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GroupKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct KeyVisitor;

        impl serde::de::Visitor<'_> for KeyVisitor {
            type Value = GroupKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or a string")
            }

            fn visit_i64<E: serde::de::Error>(self, int: i64) -> std::result::Result<GroupKey, E> {
                Ok(GroupKey::from(int))
            }

            fn visit_u64<E: serde::de::Error>(self, int: u64) -> std::result::Result<GroupKey, E> {
                Ok(GroupKey::from(int))
            }

            fn visit_i128<E: serde::de::Error>(self, int: i128) -> std::result::Result<GroupKey, E> {
                Ok(GroupKey::Int(int))
            }

            fn visit_u128<E: serde::de::Error>(self, int: u128) -> std::result::Result<GroupKey, E> {
                i128::try_from(int)
                    .map(GroupKey::Int)
                    .map_err(|_| E::custom("integer group key out of range"))
            }

            fn visit_str<E: serde::de::Error>(self, s: &str) -> std::result::Result<GroupKey, E> {
                Ok(GroupKey::from(s))
            }

            fn visit_string<E: serde::de::Error>(self, s: String) -> std::result::Result<GroupKey, E> {
                Ok(GroupKey::Str(s))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

impl From<&str> for GroupKey {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for GroupKey {
    #[inline]
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

macro_rules! int_group_key_impl {
    ($($int:ty)*) => {$(
        impl From<$int> for GroupKey {
            #[inline]
            fn from(int: $int) -> Self {
                Self::Int(i128::from(int))
            }
        }

        impl IntoGroupKeys for $int {
            #[inline]
            fn push_group_keys(self, keys: &mut Vec<GroupKey>) -> Result<()> {
                keys.push(self.into());
                Ok(())
            }
        }
    )*};
}

int_group_key_impl!(i8 i16 i32 i64 i128 u8 u16 u32 u64);

macro_rules! size_group_key_impl {
    ($($int:ty)*) => {$(
        impl IntoGroupKeys for $int {
            #[inline]
            fn push_group_keys(self, keys: &mut Vec<GroupKey>) -> Result<()> {
                let int = i128::try_from(self).map_err(|_| Error::InvalidGroupKey {
                    kind: type_name::<$int>(),
                })?;
                keys.push(GroupKey::Int(int));
                Ok(())
            }
        }
    )*};
}

size_group_key_impl!(isize usize u128);

/// A value that names the group(s) an item belongs to.
///
/// A single key puts the item in one group. A `Vec` or an array of keys puts
/// it in every named group. Booleans and floats are deliberately not keys.
/// Type-erased [`Element`]s are checked at runtime and fail with
/// [`Error::InvalidGroupKey`] unless they hold an integer or a string.
pub trait IntoGroupKeys {
    /// Appends the keys to `keys`.
    fn push_group_keys(self, keys: &mut Vec<GroupKey>) -> Result<()>;
}

impl IntoGroupKeys for GroupKey {
    #[inline]
    fn push_group_keys(self, keys: &mut Vec<GroupKey>) -> Result<()> {
        keys.push(self);
        Ok(())
    }
}

impl IntoGroupKeys for &str {
    #[inline]
    fn push_group_keys(self, keys: &mut Vec<GroupKey>) -> Result<()> {
        keys.push(self.into());
        Ok(())
    }
}

impl IntoGroupKeys for String {
    #[inline]
    fn push_group_keys(self, keys: &mut Vec<GroupKey>) -> Result<()> {
        keys.push(self.into());
        Ok(())
    }
}

impl<K: IntoGroupKeys> IntoGroupKeys for Vec<K> {
    fn push_group_keys(self, keys: &mut Vec<GroupKey>) -> Result<()> {
        self.into_iter().try_for_each(|key| key.push_group_keys(keys))
    }
}

impl<K: IntoGroupKeys, const N: usize> IntoGroupKeys for [K; N] {
    fn push_group_keys(self, keys: &mut Vec<GroupKey>) -> Result<()> {
        self.into_iter().try_for_each(|key| key.push_group_keys(keys))
    }
}

impl IntoGroupKeys for Element {
    fn push_group_keys(self, keys: &mut Vec<GroupKey>) -> Result<()> {
        let value: &dyn Object = &*self;

        macro_rules! try_downcast {
            ($($ty:ty)*) => {$(
                if let Some(key) = value.downcast_ref::<$ty>() {
                    return key.clone().push_group_keys(keys);
                }
            )*};
        }

        try_downcast!(
            GroupKey String &'static str
            i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize
            Vec<Element>
        );

        if let Some(s) = value.downcast_ref::<Box<str>>() {
            return (&**s).push_group_keys(keys);
        }
        if let Some(s) = value.downcast_ref::<Rc<str>>() {
            return (&**s).push_group_keys(keys);
        }

        Err(Error::InvalidGroupKey {
            kind: value.item_type().name(),
        })
    }
}

/// Items of a [`Collection`] partitioned by key.
///
/// Groups appear in the order their key was first produced. Each group is a
/// freshly built [`Collection`].
///
/// This `struct` is created by [`Collection::group_by()`].
#[derive(Debug, Clone, PartialEq)]
pub struct Grouped<T> {
    groups: IndexMap<GroupKey, Collection<T>>,
}

impl<T> Grouped<T> {
    /// Returns the number of groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Alias for [`len()`](Grouped::len).
    #[inline]
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns `true` if there is no group.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the group of `key`.
    pub fn get(&self, key: impl Into<GroupKey>) -> Option<&Collection<T>> {
        self.groups.get(&key.into())
    }

    /// Returns the keys in first-seen order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &GroupKey> {
        self.groups.keys()
    }

    /// Returns the groups in first-seen order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, GroupKey, Collection<T>> {
        self.groups.iter()
    }

    /// Unwraps the underlying map.
    #[inline]
    pub fn into_inner(self) -> IndexMap<GroupKey, Collection<T>> {
        self.groups
    }
}

impl<T> IntoIterator for Grouped<T> {
    type Item = (GroupKey, Collection<T>);
    type IntoIter = indexmap::map::IntoIter<GroupKey, Collection<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Grouped<T> {
    type Item = (&'a GroupKey, &'a Collection<T>);
    type IntoIter = indexmap::map::Iter<'a, GroupKey, Collection<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Collection<T> {
    /// Partitions the items by the key(s) `f(item, key)` returns.
    ///
    /// An item lands in every group named by `f`. Members of a group keep their
    /// original keys if `preserve_keys` is set, otherwise they are numbered from zero
    /// within their group.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidGroupKey`] as soon as `f` produces a key that is
    /// neither an integer nor a string. No partial result is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use collectibles::Collection;
    ///
    /// let words = Collection::from(["apple", "avocado", "banana", "blueberry", "cherry"]);
    /// let by_initial = words
    ///     .group_by(|word, _| word[..1].to_string(), false)
    ///     .unwrap();
    ///
    /// assert_eq!(by_initial.len(), 3);
    /// assert_eq!(by_initial.get("b").unwrap().values(), ["banana", "blueberry"]);
    /// ```
    pub fn group_by<K>(
        &self,
        mut f: impl FnMut(&T, usize) -> K,
        preserve_keys: bool,
    ) -> Result<Grouped<T>>
    where
        K: IntoGroupKeys,
    {
        let mut groups: IndexMap<GroupKey, Vec<(usize, T)>> = IndexMap::new();
        let mut group_keys = Vec::new();

        for (key, item) in &self.entries {
            group_keys.clear();
            f(item, *key).push_group_keys(&mut group_keys)?;

            for group_key in group_keys.drain(..) {
                let members = groups.entry(group_key).or_default();
                let member_key = if preserve_keys { *key } else { members.len() };
                members.push((member_key, item.clone()));
            }
        }

        Ok(Grouped {
            groups: groups
                .into_iter()
                .map(|(group_key, members)| (group_key, Collection::from_entries(members)))
                .collect(),
        })
    }
}
