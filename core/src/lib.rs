#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! A contiguous sequence container with query operations.
//!
//! [`Sequence<T, K>`] is a `Vec<T>` with filtering, first-match search,
//! predicate tests, projection, aggregation, key sorting and predicate
//! erasure built in. The kind parameter `K` decides what the queries look at:
//!
//! - [`ByValue`] (default): the stored `T` itself.
//! - [`ByRef`]: the target of a [`Handle`] (`&T`, `Option<&T>`, `Box<T>`,
//!   `Rc<T>`, ...). Null handles count as absent.
//!
//! ```
//! use querylist_core::{RefSequence, Sequence};
//!
//! let numbers = Sequence::<i32>::from([5, 3, 8, 1]);
//! assert_eq!(numbers.sum(), 17);
//! assert_eq!(numbers.count(|n| *n > 3), 2);
//! assert_eq!(*numbers.first_or_default_where(|n| *n > 10), 0);
//!
//! // `filter` hands back a sequence of references into `numbers`.
//! let big: RefSequence<&i32> = numbers.filter(|n| *n > 3);
//! assert_eq!(big.to_values(), Sequence::from([5, 8]));
//! ```
//!
//! "Not found" is reported the way each operation always has: `None` from
//! `get`/`first*`, the instance's default value from `*_or_default*`,
//! `f64::MAX` from [`Sequence::min`]. The `try_*` operations return a
//! [`SequenceError`] instead.

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod convert;
mod erase;
pub mod error;
pub mod kind;
mod order;
mod query;
pub mod sequence;
#[cfg(feature = "serde")]
mod serde_impl;

pub use convert::Extends;
pub use error::SequenceError;
pub use kind::{ByRef, ByValue, ElementKind, Handle, SharedHandle};
pub use sequence::{Iter, RefSequence, Sequence};
