#![cfg_attr(not(feature = "std"), no_std)]

//! querylist - query operations on a contiguous sequence
//!
//! # Overview
//!
//! `querylist` provides [`Sequence`], a growable array with the query
//! vocabulary of language-integrated query built in: filtering, first-match
//! search, predicate tests, projection, aggregation, key sorting and
//! predicate erasure.
//!
//! The same operations work on two element kinds:
//!
//! - **Value sequences** (`Sequence<T>`): the elements are the data.
//! - **Handle sequences** (`RefSequence<H>`): the elements point at the data
//!   (`&T`, `Option<&T>`, `Box<T>`, `Rc<T>`, `Arc<T>` and their `Option`
//!   forms). Queries look through the handle; null handles count as absent.
//!
//! # Quick Start
//!
//! ```
//! use querylist::prelude::*;
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Book {
//!     title: &'static str,
//!     pages: u32,
//! }
//!
//! let mut shelf = Sequence::<Book>::new();
//! shelf.add(Book { title: "Dune", pages: 412 });
//! shelf.add(Book { title: "Emma", pages: 474 });
//! shelf.add(Book { title: "Ubik", pages: 202 });
//!
//! // Handles into `shelf`, in shelf order.
//! let long_reads = shelf.filter(|book| book.pages > 400);
//! assert_eq!(long_reads.select(|book| book.title), Sequence::from(["Dune", "Emma"]));
//!
//! // Sorting is in place and chains.
//! let shortest = shelf.order_by(|book| book.pages).first_or_default();
//! assert_eq!(shortest.title, "Ubik");
//!
//! // No match falls back to the sequence's default value.
//! assert_eq!(shelf.first_or_default_where(|book| book.pages > 1000), &Book::default());
//! ```
//!
//! # Features
//!
//! - `std` (default): link the standard library. Without it the crate is
//!   `no_std` and needs only `alloc`.
//! - `serde`: `Serialize` for every sequence, `Deserialize` for value
//!   sequences. Both use the plain sequence form of a `Vec`.

pub use querylist_core::*;

/// Everything needed to build and query sequences.
pub mod prelude {
    pub use querylist_core::{
        ByRef, ByValue, Extends, Handle, RefSequence, Sequence, SequenceError, SharedHandle,
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::prelude::*;

    #[test]
    fn test_prelude_exposes_both_kinds() {
        let numbers = Sequence::<i32>::from([5, 3, 8, 1]);
        let handles: RefSequence<&i32> = numbers.filter(|n| *n > 3);
        assert_eq!(handles.sum(), 13);
        assert_eq!(numbers.try_get(9), Err(SequenceError::OutOfBounds { index: 9, len: 4 }));
    }
}
