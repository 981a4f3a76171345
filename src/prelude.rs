//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the collections and the traits their operations
//! are bounded by.
//!
//! # Example
//!
//! ```
//! use collectibles::prelude::*;
//!
//! let nums = Collection::from([1, 2, 3]);
//! assert_eq!(nums.map(callable::unary(|num: &i32| num * 2)).values(), [2, 4, 6]);
//! ```

pub use crate::{
    callable::{self, Callable},
    collection::{AsCollection, Collection, GroupKey, Grouped, IntoGroupKeys},
    error::Error,
    lazy::LazyCollection,
    object::{Element, ItemType, Object, element},
    typed::TypedCollection,
};
