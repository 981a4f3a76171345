//! Uniform invocation of plain functions, closures, and invokable objects.
//!
//! Every operation of [`Collection`](crate::Collection) and
//! [`LazyCollection`](crate::LazyCollection) takes an ordinary `FnMut`,
//! so function items, function pointers and closures are accepted as-is.
//! An *invokable object* is a value that implements [`Callable`] by hand.
//! The normalizers in this module turn any [`Callable`] into an `FnMut`
//! with the exact shape a collection operation expects, forwarding every
//! argument positionally and returning the callee's result unchanged.
//!
//! # Examples
//!
//! ```
//! use collectibles::{Collection, callable::{self, Callable}};
//!
//! struct Scale(i32);
//!
//! impl<'a> Callable<(&'a i32,)> for Scale {
//!     type Output = i32;
//!
//!     fn call(&mut self, (num,): (&'a i32,)) -> i32 {
//!         num * self.0
//!     }
//! }
//!
//! let nums = Collection::from([1, 2, 3]);
//!
//! assert_eq!(nums.map(callable::unary(Scale(10))).values(), [10, 20, 30]);
//! // Closures go through the same normalizer unchanged.
//! assert_eq!(nums.map(callable::unary(|num: &i32| num + 1)).values(), [2, 3, 4]);
//! ```

use std::cmp::Ordering;

/// A value that can be invoked with the argument tuple `Args`.
///
/// This trait is implemented for every `FnMut` of arity zero to three,
/// with the arguments packed in a tuple. Implement it for your own type to
/// make an invokable object.
pub trait Callable<Args> {
    /// The result of an invocation.
    type Output;

    /// Invokes the callable with the packed arguments.
    fn call(&mut self, args: Args) -> Self::Output;
}

impl<F, R> Callable<()> for F
where
    F: FnMut() -> R,
{
    type Output = R;

    #[inline]
    fn call(&mut self, (): ()) -> R {
        self()
    }
}

impl<F, A, R> Callable<(A,)> for F
where
    F: FnMut(A) -> R,
{
    type Output = R;

    #[inline]
    fn call(&mut self, (a,): (A,)) -> R {
        self(a)
    }
}

impl<F, A, B, R> Callable<(A, B)> for F
where
    F: FnMut(A, B) -> R,
{
    type Output = R;

    #[inline]
    fn call(&mut self, (a, b): (A, B)) -> R {
        self(a, b)
    }
}

impl<F, A, B, C, R> Callable<(A, B, C)> for F
where
    F: FnMut(A, B, C) -> R,
{
    type Output = R;

    #[inline]
    fn call(&mut self, (a, b, c): (A, B, C)) -> R {
        self(a, b, c)
    }
}

/// Normalizes a callable taking an element by reference.
///
/// The result fits `each`, `map`, `filter`, `reject`, `every`, `some`
/// and `none` of an eager collection.
#[inline]
pub fn unary<T, O, C>(mut callable: C) -> impl FnMut(&T) -> O
where
    T: ?Sized,
    C: for<'a> Callable<(&'a T,), Output = O>,
{
    move |item| callable.call((item,))
}

/// Normalizes a callable taking an element by value.
///
/// The result fits [`LazyCollection::map()`](crate::LazyCollection::map).
#[inline]
pub fn owned<A, O, C>(mut callable: C) -> impl FnMut(A) -> O
where
    C: Callable<(A,), Output = O>,
{
    move |item| callable.call((item,))
}

/// Normalizes a reducer taking the accumulator by value and an element by reference.
///
/// The result fits [`Collection::reduce()`](crate::Collection::reduce).
#[inline]
pub fn binary<A, T, C>(mut callable: C) -> impl FnMut(A, &T) -> A
where
    T: ?Sized,
    C: for<'a> Callable<(A, &'a T), Output = A>,
{
    move |accum, item| callable.call((accum, item))
}

/// Normalizes a three-way comparator.
///
/// The result fits [`Collection::sort()`](crate::Collection::sort).
#[inline]
pub fn comparator<T, C>(mut callable: C) -> impl FnMut(&T, &T) -> Ordering
where
    T: ?Sized,
    C: for<'a, 'b> Callable<(&'a T, &'b T), Output = Ordering>,
{
    move |a, b| callable.call((a, b))
}
