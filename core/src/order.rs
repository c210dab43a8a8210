//! In-place sorting by an extracted key.
//!
//! Sorts are permanent and unstable: elements with equal keys may be
//! reordered. Null handles are kept after every present element; their
//! relative order is unspecified.

use core::cmp::Ordering;

use crate::kind::ElementKind;
use crate::sequence::Sequence;

impl<T, K: ElementKind<T>> Sequence<T, K> {
    /// Sorts ascending by `key`. Returns `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use querylist_core::Sequence;
    ///
    /// let mut numbers = Sequence::<i32>::from([5, 3, 8, 1]);
    /// numbers.order_by(|n| *n);
    /// assert_eq!(numbers.as_slice(), &[1, 3, 5, 8]);
    /// ```
    pub fn order_by<Key, F>(&mut self, mut key: F) -> &mut Self
    where
        F: FnMut(&K::Target) -> Key,
        Key: Ord,
    {
        self.sort_with("ascending", |a, b| key(a).cmp(&key(b)))
    }

    /// Sorts descending by `key`. Returns `self` for chaining.
    pub fn order_by_descending<Key, F>(&mut self, mut key: F) -> &mut Self
    where
        F: FnMut(&K::Target) -> Key,
        Key: Ord,
    {
        self.sort_with("descending", |a, b| key(b).cmp(&key(a)))
    }

    /// Sorts ascending by a floating-point key, using IEEE 754 total order
    /// (`-NaN < -inf < ... < -0.0 < +0.0 < ... < +inf < +NaN`).
    pub fn order_by_float<F>(&mut self, mut key: F) -> &mut Self
    where
        F: FnMut(&K::Target) -> f64,
    {
        self.sort_with("ascending", |a, b| key(a).total_cmp(&key(b)))
    }

    /// Sorts descending by a floating-point key, using IEEE 754 total order.
    pub fn order_by_float_descending<F>(&mut self, mut key: F) -> &mut Self
    where
        F: FnMut(&K::Target) -> f64,
    {
        self.sort_with("descending", |a, b| key(b).total_cmp(&key(a)))
    }

    fn sort_with<C>(&mut self, direction: &'static str, mut compare: C) -> &mut Self
    where
        C: FnMut(&K::Target, &K::Target) -> Ordering,
    {
        tracing::trace!(len = self.len(), direction, "sorting sequence");
        self.items_mut()
            .sort_unstable_by(|a, b| match (K::resolve(a), K::resolve(b)) {
                (Some(a), Some(b)) => compare(a, b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        self
    }
}
