//! Type-erased values and reflection-free type tags.
//!
//! [`Object`] is implemented for every `'static` type. It carries enough
//! runtime information to compare a value against an [`ItemType`] and to
//! name its type in error messages, without any form of reflection.

use std::{
    any::{Any, TypeId, type_name},
    fmt::{self, Debug},
    rc::Rc,
};

/// A type-erased value that knows its own type.
pub trait Object: Any {
    /// Returns the type tag of the concrete value.
    fn item_type(&self) -> ItemType;

    /// Returns `true` if the value is a structured value rather than a scalar.
    ///
    /// Integers, floats, `bool`, `char`, strings and `()` are scalars.
    fn is_structured(&self) -> bool;

    /// Upcasts to [`Any`] for downcasting by reference.
    fn as_any(&self) -> &dyn Any;

    /// Upcasts to [`Any`] for downcasting by value.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> Object for T {
    #[inline]
    fn item_type(&self) -> ItemType {
        ItemType::of::<T>()
    }

    #[inline]
    fn is_structured(&self) -> bool {
        !is_scalar(TypeId::of::<T>())
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl dyn Object {
    /// Returns a reference to the inner value if it is of type `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Returns `true` if the inner value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

impl Debug for dyn Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("type", &self.item_type().name())
            .finish_non_exhaustive()
    }
}

/// A shared, type-erased element of a [`TypedCollection`](crate::TypedCollection).
///
/// Call [`Object`] methods on the pointee (`(*element).item_type()`),
/// since the `Rc` itself is an [`Object`] too.
pub type Element = Rc<dyn Object>;

/// Wraps a value into an [`Element`].
#[inline]
pub fn element<T: Any>(value: T) -> Element {
    Rc::new(value)
}

/// A nominal type identifier.
///
/// Two tags are equal when they were built from the same concrete type.
/// The name is only used for display.
#[derive(Clone, Copy)]
pub struct ItemType {
    id: TypeId,
    name: &'static str,
}

impl ItemType {
    /// Returns the tag of `T`.
    #[inline]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Returns the fully qualified name of the tagged type.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if `value` is an instance of the tagged type.
    #[inline]
    pub fn matches(&self, value: &dyn Object) -> bool {
        value.as_any().type_id() == self.id
    }
}

impl PartialEq for ItemType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ItemType {}

impl Debug for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ItemType").field(&self.name).finish()
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

fn is_scalar(id: TypeId) -> bool {
    macro_rules! any_of {
        ($($ty:ty),* $(,)?) => {
            $(id == TypeId::of::<$ty>())||*
        };
    }

    any_of!(
        (),
        bool,
        char,
        i8,
        i16,
        i32,
        i64,
        i128,
        isize,
        u8,
        u16,
        u32,
        u64,
        u128,
        usize,
        f32,
        f64,
        &'static str,
        String,
        Box<str>,
        Rc<str>,
    )
}
