//! Immutable eager collections and single-pass lazy collections sharing one
//! set of higher-order operations.
//!
//! # Motivation
//!
//! Suppose we are given a list of numbers and asked for the sum of the doubled
//! even ones, while keeping the list around for later.
//!
//! - Approach 1: [`Iterator`] adaptors
//!
//! ```
//! let nums = vec![1, 2, 3, 4, 5, 6];
//! let sum: i32 = nums.iter().filter(|num| *num % 2 == 0).map(|num| num * 2).sum();
//!
//! assert_eq!(sum, 24);
//! ```
//!
//! This is fine until we need an intermediate result twice, or need to know
//! *where* the kept items came from. The keys are gone after `filter`.
//!
//! This crate offers two collections with the same vocabulary:
//!
//! ```
//! use collectibles::{Collection, LazyCollection};
//!
//! let nums = Collection::from([1, 2, 3, 4, 5, 6]);
//! let evens = nums.filter(|num| num % 2 == 0);
//!
//! // Keys survive filtering.
//! assert_eq!(evens.keys(), [1, 3, 5]);
//! assert_eq!(evens.map(|num| num * 2).reduce(|sum, num| sum + num, 0), 24);
//! // Both are still usable.
//! assert_eq!(nums.len(), 6);
//! assert_eq!(evens.len(), 3);
//!
//! // The same pipeline, evaluated on demand.
//! let lazy = LazyCollection::from([1, 2, 3, 4, 5, 6])
//!     .filter(|num| num % 2 == 0)
//!     .map(|num| num * 2);
//! assert_eq!(lazy.reduce(|sum, num| sum + num, 0), 24);
//! ```
//!
//! # The collections
//!
//! - [`Collection`]: eager and immutable. Every operation returns a new
//!   collection backed by its own storage. Items carry integer keys that
//!   key-preserving operations keep.
//! - [`LazyCollection`]: a pipeline over a producer. Stages pull one item at a
//!   time and nothing runs until the collection is drained. A lazy collection
//!   is *single-pass*: once drained, it and every stage sharing its source are
//!   empty.
//! - [`TypedCollection`]: a collection of type-erased [`Element`]s that all
//!   match one runtime [`ItemType`], checked on construction and on
//!   [`add()`](TypedCollection::add).
//!
//! Operations accept any closure or function. Hand-written invokable objects
//! go through the normalizers of the [`callable`] module.
//!
//! # Features
//!
//! - `itertools`: adds [`LazyCollection::unique()`].
//! - `serde`: (de)serializes [`Collection`] as a sequence of its items
//!   and [`GroupKey`] as a bare integer or string.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber:
//! `trace` when a lazy pipeline is drained, `debug` when an input or an
//! element is rejected.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod callable;
mod collection;
pub mod error;
pub mod helpers;
mod lazy;
pub mod object;
pub mod prelude;
mod typed;

#[cfg(test)]
mod test_utils;

pub use collection::*;
pub use error::{Error, Result};
pub use lazy::{LazyCollection, LazyIter};
pub use object::{Element, ItemType, Object, element};
pub use typed::TypedCollection;
