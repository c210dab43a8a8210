//! Removal by predicate and by position.

use crate::kind::ElementKind;
use crate::sequence::Sequence;

impl<T, K: ElementKind<T>> Sequence<T, K> {
    /// Removes every element whose logical value matches `predicate` and
    /// returns how many were removed.
    ///
    /// Survivors keep their relative order. Null handles are never passed to
    /// `predicate` and always survive.
    ///
    /// # Examples
    ///
    /// ```
    /// use querylist_core::Sequence;
    ///
    /// let mut numbers = Sequence::<i32>::from([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(numbers.erase_if(|n| n % 2 == 0), 3);
    /// assert_eq!(numbers.as_slice(), &[1, 3, 5]);
    /// ```
    pub fn erase_if<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&K::Target) -> bool,
    {
        let before = self.len();
        self.items_mut()
            .retain(|element| !K::resolve(element).is_some_and(&mut predicate));
        let removed = before - self.len();
        tracing::trace!(removed, remaining = self.len(), "erased matching elements");
        removed
    }

    /// Removes the element at `index`, shifting later elements down.
    ///
    /// Returns `false`, and leaves the sequence untouched, if `index` is out
    /// of bounds.
    pub fn erase_at(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.items_mut().remove(index);
        true
    }
}
