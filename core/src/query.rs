//! Query operations: filtering, first-match search, predicate tests,
//! projection and aggregation.
//!
//! Every predicate and selector receives the logical element. For
//! reference-kind sequences null handles are never passed to user code: they
//! don't match and don't count. [`select`](Sequence::select) keeps positions
//! aligned by writing `R::default()` in their place.

use core::ops::AddAssign;

use crate::error::SequenceError;
use crate::kind::{ByRef, ByValue, ElementKind, Handle, SharedHandle};
use crate::sequence::Sequence;

// ============================================================================
// Filtering
// ============================================================================

impl<T> Sequence<T, ByValue> {
    /// Returns handles to the elements matching `predicate`, in their
    /// original order.
    ///
    /// The result borrows `self`, so filtering a temporary and keeping the
    /// result does not compile:
    ///
    /// ```compile_fail
    /// use querylist_core::Sequence;
    ///
    /// let evens = Sequence::<i32>::from([1, 2, 3, 4]).filter(|n| n % 2 == 0);
    /// assert_eq!(evens.len(), 2);
    /// ```
    ///
    /// Bind the sequence first:
    ///
    /// ```
    /// use querylist_core::Sequence;
    ///
    /// let numbers = Sequence::<i32>::from([1, 2, 3, 4]);
    /// let evens = numbers.filter(|n| n % 2 == 0);
    /// assert_eq!(evens.to_values(), Sequence::from([2, 4]));
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Sequence<&T, ByRef>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice()
            .iter()
            .filter(|&element| predicate(element))
            .collect()
    }
}

impl<H: SharedHandle> Sequence<H, ByRef> {
    /// Returns the handles whose targets match `predicate`, in their original
    /// order. Each result points at the same target as the handle it was
    /// cloned from.
    ///
    /// `Box` handles can't be filtered, since cloning a box copies its target:
    ///
    /// ```compile_fail
    /// use querylist_core::RefSequence;
    ///
    /// let boxes = RefSequence::<Box<i32>>::from([Box::new(5), Box::new(9)]);
    /// let big = boxes.filter(|n| *n > 6);
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&H::Target) -> bool,
    {
        self.as_slice()
            .iter()
            .filter(|&handle| H::get(handle).is_some_and(&mut predicate))
            .cloned()
            .collect()
    }
}

impl<H: Handle> Sequence<H, ByRef> {
    /// Copies every present target into a value sequence. Null handles are
    /// left out.
    pub fn to_values(&self) -> Sequence<H::Target>
    where
        H::Target: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T, K: ElementKind<T>> Sequence<T, K> {
    // ========================================================================
    // First-match queries
    // ========================================================================

    /// The first present element, or `None`.
    pub fn first(&self) -> Option<&K::Target> {
        self.iter().next()
    }

    /// The first element matching `predicate`, or `None`.
    pub fn first_where<P>(&self, mut predicate: P) -> Option<&K::Target>
    where
        P: FnMut(&K::Target) -> bool,
    {
        self.iter().find(|&element| predicate(element))
    }

    /// The first present element, or this sequence's default value.
    ///
    /// Leading null handles are skipped.
    pub fn first_or_default(&self) -> &K::Target
    where
        K::Target: Default,
    {
        match self.first() {
            Some(element) => element,
            None => self.fallback(),
        }
    }

    /// The first element matching `predicate`, or this sequence's default
    /// value.
    pub fn first_or_default_where<P>(&self, predicate: P) -> &K::Target
    where
        P: FnMut(&K::Target) -> bool,
        K::Target: Default,
    {
        match self.first_where(predicate) {
            Some(element) => element,
            None => self.fallback(),
        }
    }

    // ========================================================================
    // Predicate tests
    // ========================================================================

    /// `true` if at least one element matches. Stops at the first match.
    pub fn any_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&K::Target) -> bool,
    {
        self.iter().any(predicate)
    }

    /// `true` unless some element fails `predicate`. Stops at the first
    /// failure; `true` for an empty sequence.
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&K::Target) -> bool,
    {
        !self.iter().any(|element| !predicate(element))
    }

    /// Number of elements matching `predicate`.
    pub fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&K::Target) -> bool,
    {
        self.iter().filter(|&element| predicate(element)).count()
    }

    // ========================================================================
    // Projection
    // ========================================================================

    /// Maps every element through `selector` into a new value sequence of the
    /// same length. Position `i` of the result is the projection of element
    /// `i`; a null handle projects to `R::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use querylist_core::Sequence;
    ///
    /// let words = Sequence::<&str>::from(["a", "bb", "ccc"]);
    /// let lengths = words.select(|word| word.len());
    /// assert_eq!(lengths, Sequence::from([1, 2, 3]));
    /// ```
    pub fn select<R, F>(&self, mut selector: F) -> Sequence<R>
    where
        F: FnMut(&K::Target) -> R,
        R: Default,
    {
        self.as_slice()
            .iter()
            .map(|element| K::resolve(element).map_or_else(R::default, &mut selector))
            .collect()
    }

    // ========================================================================
    // Aggregation
    // ========================================================================

    /// Adds up every element, starting from `Target::default()`.
    ///
    /// An empty sequence sums to the default (zero for numbers).
    pub fn sum(&self) -> K::Target
    where
        K::Target: Clone + Default + AddAssign,
    {
        let mut total: K::Target = Default::default();
        for element in self.iter() {
            total += element.clone();
        }
        total
    }

    /// Smallest key produced by `selector`.
    ///
    /// Returns `f64::MAX` when there is nothing to compare, which can't be
    /// told apart from a minimum that really is `f64::MAX`; use
    /// [`try_min`](Self::try_min) when that matters. NaN keys are ignored.
    pub fn min<F>(&self, selector: F) -> f64
    where
        F: FnMut(&K::Target) -> f64,
    {
        self.iter().map(selector).fold(f64::MAX, f64::min)
    }

    /// Like [`min`](Self::min), but an empty sequence is an error.
    pub fn try_min<F>(&self, selector: F) -> Result<f64, SequenceError>
    where
        F: FnMut(&K::Target) -> f64,
    {
        self.iter()
            .map(selector)
            .reduce(f64::min)
            .ok_or(SequenceError::Empty)
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
