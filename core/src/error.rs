//! Error type for the checked accessors.
//!
//! The query surface reports "not found" through sentinels (`None`, the
//! per-instance default value, `f64::MAX`). Operations with a `try_` prefix
//! report the reason instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The index is not in `0..len`.
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// The slot exists but holds a null handle.
    #[error("element {index} is a null handle")]
    NullHandle { index: usize },

    /// An aggregate was requested over a sequence with no present elements.
    #[error("sequence has no elements")]
    Empty,
}
