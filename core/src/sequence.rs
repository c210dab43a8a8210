//! The [`Sequence`] container: storage, construction and positional access.
//!
//! Queries, sorting and removal are inherent methods too, implemented in the
//! `query`, `order` and `erase` modules.

use alloc::vec::{self, Vec};
use core::{
    cell::OnceCell,
    fmt,
    iter::FusedIterator,
    marker::PhantomData,
    ops::{Deref, DerefMut, Index},
    ptr,
    slice,
};

use crate::error::SequenceError;
use crate::kind::{ByRef, ByValue, ElementKind, Handle};

/// A growable, contiguous, ordered container with query operations.
///
/// `K` selects how a stored `T` maps to the logical element that predicates
/// see: [`ByValue`] (the default) uses `T` itself, [`ByRef`] dereferences a
/// [`Handle`](crate::Handle) and treats null handles as absent.
///
/// Each instance owns a lazily created default value of the logical type,
/// returned by [`get_or_default`](Self::get_or_default) and the
/// `first_or_default*` queries when nothing is found. It is only ever handed
/// out by shared reference.
///
/// # Example
///
/// ```
/// use querylist_core::Sequence;
///
/// let mut numbers = Sequence::<i32>::from([5, 3, 8, 1]);
/// numbers.add(4);
///
/// assert_eq!(numbers.len(), 5);
/// assert_eq!(numbers.count(|n| *n > 3), 3);
/// assert_eq!(*numbers.get_or_default(99), 0);
/// ```
pub struct Sequence<T, K = ByValue>
where
    K: ElementKind<T>,
{
    items: Vec<T>,
    fallback: OnceCell<K::Target>,
    kind: PhantomData<K>,
}

/// A sequence of handles; see [`ByRef`].
pub type RefSequence<H> = Sequence<H, ByRef>;

static_assertions::assert_impl_all!(Sequence<i32>: Send, Clone, Default);
static_assertions::assert_impl_all!(RefSequence<Option<alloc::boxed::Box<i32>>>: Send);
// The default slot is a `OnceCell`; sharing across threads needs external locking.
static_assertions::assert_not_impl_any!(Sequence<i32>: Sync);
static_assertions::assert_eq_size!(Option<&u64>, &u64);

impl<T, K: ElementKind<T>> Sequence<T, K> {
    /// Creates an empty sequence.
    pub const fn new() -> Self {
        Self::from_items(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_items(Vec::with_capacity(capacity))
    }

    /// Creates a sequence of `len` default-constructed elements.
    ///
    /// For `Option` handles this is `len` null handles.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut items = Vec::with_capacity(len);
        items.resize_with(len, T::default);
        Self::from_items(items)
    }

    /// Copies the elements of `elements`, in order.
    pub fn from_slice(elements: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_items(elements.to_vec())
    }

    /// Copies `len` elements starting at `ptr`.
    ///
    /// # Safety
    ///
    /// When `len > 0`, `ptr` must be non-null, aligned, and valid for reads of
    /// `len` consecutive initialized `T`s, as for [`slice::from_raw_parts`].
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Self
    where
        T: Clone,
    {
        if len == 0 {
            return Self::new();
        }
        // SAFETY: upheld by the caller.
        let elements = unsafe { slice::from_raw_parts(ptr, len) };
        Self::from_slice(elements)
    }

    pub(crate) const fn from_items(items: Vec<T>) -> Self {
        Sequence {
            items,
            fallback: OnceCell::new(),
            kind: PhantomData,
        }
    }

    /// Appends `element` and returns a reference to its slot.
    pub fn add(&mut self, element: T) -> &mut T {
        let index = self.items.len();
        self.items.push(element);
        &mut self.items[index]
    }

    /// Removes every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of stored elements, null handles included.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `true` if the sequence holds at least one element.
    #[inline]
    pub fn any(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Returns the logical element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds or the slot holds a null handle.
    #[track_caller]
    pub fn at(&self, index: usize) -> &K::Target {
        match self.try_get(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the logical element at `index`, or `None` if the index is out
    /// of bounds or the slot holds a null handle.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&K::Target> {
        self.items.get(index).and_then(K::resolve)
    }

    /// Like [`get`](Self::get), but says why nothing was returned.
    pub fn try_get(&self, index: usize) -> Result<&K::Target, SequenceError> {
        let element = self.items.get(index).ok_or(SequenceError::OutOfBounds {
            index,
            len: self.items.len(),
        })?;
        K::resolve(element).ok_or(SequenceError::NullHandle { index })
    }

    /// Returns the logical element at `index`, or this sequence's default
    /// value if the index is out of bounds or the slot holds a null handle.
    pub fn get_or_default(&self, index: usize) -> &K::Target
    where
        K::Target: Default,
    {
        match self.get(index) {
            Some(element) => element,
            None => self.fallback(),
        }
    }

    /// The per-instance default value, created on first use.
    pub(crate) fn fallback(&self) -> &K::Target
    where
        K::Target: Default,
    {
        self.fallback.get_or_init(Default::default)
    }

    /// `true` if any stored element equals `element`.
    ///
    /// Stored elements are compared directly, so `&T`, `Rc<T>` and `Box<T>`
    /// handles compare their targets by value. Use
    /// [`contains_target`](Self::contains_target) to look for a specific
    /// object.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.iter().any(|current| current == element)
    }

    /// Iterates over the logical elements in order, skipping null handles.
    pub fn iter(&self) -> Iter<'_, T, K> {
        Iter {
            inner: self.items.iter(),
            kind: PhantomData,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }
}

impl<T> Sequence<T, ByValue> {
    /// Mutable access to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(element) => element,
            None => panic!("{}", SequenceError::OutOfBounds { index, len }),
        }
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn at_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.items.len());
        // SAFETY: upheld by the caller.
        unsafe { self.items.get_unchecked(index) }
    }
}

impl<H: Handle> Sequence<H, ByRef> {
    /// `true` if some handle points at `target` itself.
    ///
    /// Compares addresses, not values. Null handles never match.
    pub fn contains_target(&self, target: &H::Target) -> bool {
        self.iter().any(|current| ptr::eq(current, target))
    }
}

/// Iterator over the logical elements of a [`Sequence`].
///
/// Created by [`Sequence::iter`]. Null handles are skipped.
pub struct Iter<'a, T, K> {
    inner: slice::Iter<'a, T>,
    kind: PhantomData<K>,
}

impl<'a, T, K: ElementKind<T>> Iterator for Iter<'a, T, K> {
    type Item = &'a K::Target;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(K::resolve)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, T, K: ElementKind<T>> DoubleEndedIterator for Iter<'a, T, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(element) = self.inner.next_back() {
            if let Some(target) = K::resolve(element) {
                return Some(target);
            }
        }
        None
    }
}

impl<T, K: ElementKind<T>> FusedIterator for Iter<'_, T, K> {}

impl<T, K> Clone for Iter<'_, T, K> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            kind: PhantomData,
        }
    }
}

// --- Trait impls ---

impl<T, K: ElementKind<T>> Default for Sequence<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep-copies the elements. The copy gets its own default value.
impl<T: Clone, K: ElementKind<T>> Clone for Sequence<T, K> {
    fn clone(&self) -> Self {
        Self::from_items(self.items.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.items.clone_from(&source.items);
    }
}

impl<T: fmt::Debug, K: ElementKind<T>> fmt::Debug for Sequence<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq, K: ElementKind<T>> PartialEq for Sequence<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq, K: ElementKind<T>> Eq for Sequence<T, K> {}

impl<T, K: ElementKind<T>> Deref for Sequence<T, K> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T, K: ElementKind<T>> DerefMut for Sequence<T, K> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T, K: ElementKind<T>> Index<usize> for Sequence<T, K> {
    type Output = K::Target;

    #[track_caller]
    fn index(&self, index: usize) -> &K::Target {
        self.at(index)
    }
}

impl<T, K: ElementKind<T>> From<Vec<T>> for Sequence<T, K> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items)
    }
}

impl<T, K: ElementKind<T>, const N: usize> From<[T; N]> for Sequence<T, K> {
    fn from(elements: [T; N]) -> Self {
        Self::from_items(Vec::from(elements))
    }
}

impl<T: Clone, K: ElementKind<T>> From<&[T]> for Sequence<T, K> {
    fn from(elements: &[T]) -> Self {
        Self::from_slice(elements)
    }
}

impl<T, K: ElementKind<T>> From<Sequence<T, K>> for Vec<T> {
    fn from(sequence: Sequence<T, K>) -> Self {
        sequence.items
    }
}

impl<T, K: ElementKind<T>> FromIterator<T> for Sequence<T, K> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter.into_iter().collect())
    }
}

impl<T, K: ElementKind<T>> Extend<T> for Sequence<T, K> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T, K: ElementKind<T>> IntoIterator for Sequence<T, K> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, K: ElementKind<T>> IntoIterator for &'a Sequence<T, K> {
    type Item = &'a K::Target;
    type IntoIter = Iter<'a, T, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;
