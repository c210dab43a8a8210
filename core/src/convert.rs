//! Unchecked conversions from buffers of a base type.
//!
//! Rust has no inheritance, so "derived from `Base`" is spelled as a layout
//! promise: the derived type starts with a `Base`. The promise is made once,
//! with `unsafe impl Extends<Base> for Derived`, and every conversion that
//! relies on it is an `unsafe fn`, so misuse is visible at the call site.
//!
//! ```
//! use querylist_core::{Extends, Sequence};
//!
//! #[repr(C)]
//! #[derive(Clone, Copy, Default, Debug, PartialEq)]
//! struct Shape {
//!     id: u32,
//! }
//!
//! #[repr(C)]
//! #[derive(Clone, Copy, Default, Debug, PartialEq)]
//! struct Circle {
//!     shape: Shape,
//!     radius: u32,
//! }
//!
//! // SAFETY: `Circle` is `repr(C)` and its first field is a `Shape`.
//! unsafe impl Extends<Shape> for Circle {}
//!
//! let shapes = [Shape { id: 1 }, Shape { id: 2 }];
//! // SAFETY: a default `Circle` with the shape copied in is a valid `Circle`.
//! let circles = unsafe { Sequence::<Circle>::from_base_prefix(&shapes) };
//! assert_eq!(circles.at(1), &Circle { shape: Shape { id: 2 }, radius: 0 });
//! ```

use core::{any::type_name, mem, ptr, slice};

use crate::kind::{ByRef, ByValue};
use crate::sequence::Sequence;

/// Declares that `Self` begins with a layout-compatible `Base`.
///
/// # Safety
///
/// Implementors must guarantee that a valid `Base` lives at offset 0 of every
/// `Self` and that `Self` is at least as aligned as `Base`. This holds for a
/// `#[repr(C)]` struct whose first field is a `Base`, and for a
/// `#[repr(transparent)]` wrapper around a `Base`.
pub unsafe trait Extends<Base> {}

fn assert_same_layout<B, D>() {
    const {
        assert!(
            mem::size_of::<B>() == mem::size_of::<D>(),
            "base and derived types must have the same size"
        );
        assert!(
            mem::align_of::<B>() == mem::align_of::<D>(),
            "base and derived types must have the same alignment"
        );
    }
}

impl<D> Sequence<D, ByValue> {
    /// Builds one `D` per base element: a `D::default()` whose `B` prefix is
    /// overwritten with the base element.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that combining each base element with the
    /// default value of the remaining fields produces a valid `D`.
    pub unsafe fn from_base_prefix<B>(base: &[B]) -> Self
    where
        B: Copy,
        D: Extends<B> + Default,
    {
        const {
            assert!(
                mem::size_of::<B>() <= mem::size_of::<D>(),
                "a base prefix cannot be larger than the derived type"
            );
        }
        tracing::debug!(
            count = base.len(),
            base = type_name::<B>(),
            derived = type_name::<D>(),
            "copying base prefixes into derived values"
        );
        base.iter()
            .map(|&element| {
                let mut derived = D::default();
                // SAFETY: `D: Extends<B>` puts a suitably aligned `B` at offset 0,
                // and `B: Copy` means the overwritten prefix owns nothing.
                unsafe { ptr::from_mut(&mut derived).cast::<B>().write(element) };
                derived
            })
            .collect()
    }
}

impl<'a, D> Sequence<&'a D, ByRef> {
    /// Reinterprets references to `B` as references to `D`.
    ///
    /// Fails to compile unless `B` and `D` have the same size and alignment.
    ///
    /// # Safety
    ///
    /// Every referenced `B` must actually be the prefix of a live `D`.
    pub unsafe fn from_base_refs<B>(base: &[&'a B]) -> Self
    where
        D: Extends<B>,
    {
        assert_same_layout::<B, D>();
        tracing::debug!(
            count = base.len(),
            base = type_name::<B>(),
            derived = type_name::<D>(),
            "reinterpreting base handles"
        );
        // SAFETY: `&B` and `&D` are thin pointers with the same layout; the
        // caller guarantees each pointee is a `D`.
        let handles = unsafe { slice::from_raw_parts(base.as_ptr().cast::<&'a D>(), base.len()) };
        Self::from_slice(handles)
    }
}

impl<'a, D> Sequence<Option<&'a D>, ByRef> {
    /// Like [`from_base_refs`](Sequence::from_base_refs), for nullable
    /// handles. Null handles stay null.
    ///
    /// # Safety
    ///
    /// Every non-null handle must point at the prefix of a live `D`.
    pub unsafe fn from_base_handles<B>(base: &[Option<&'a B>]) -> Self
    where
        D: Extends<B>,
    {
        assert_same_layout::<B, D>();
        tracing::debug!(
            count = base.len(),
            base = type_name::<B>(),
            derived = type_name::<D>(),
            "reinterpreting nullable base handles"
        );
        // SAFETY: `Option<&T>` is pointer-sized with `None` as null for any
        // sized `T`, so the two slices share a layout.
        let handles =
            unsafe { slice::from_raw_parts(base.as_ptr().cast::<Option<&'a D>>(), base.len()) };
        Self::from_slice(handles)
    }
}
