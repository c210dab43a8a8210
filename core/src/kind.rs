//! Element kinds: how a stored element maps to the logical element.
//!
//! A [`Sequence`](crate::Sequence) stores `T` but runs every predicate,
//! selector and key extractor against the *logical* element. The mapping is
//! chosen at compile time by the kind marker:
//!
//! | Kind | Stored | Logical (`Target`) | Absent when |
//! |------|--------|--------------------|-------------|
//! | [`ByValue`] | `T` | `T` | never |
//! | [`ByRef`] | `H: Handle` | `H::Target` | the handle is null |
//!
//! Both markers are uninhabited; they only select an [`ElementKind`] impl,
//! so the dereference step is monomorphized away for value sequences.

use alloc::{boxed::Box, rc::Rc, sync::Arc};

mod private {
    pub trait Sealed {}
}

/// Marker for sequences whose elements are the logical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByValue {}

/// Marker for sequences whose elements are [`Handle`]s to the logical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByRef {}

impl private::Sealed for ByValue {}
impl private::Sealed for ByRef {}

/// Resolves a stored element to the logical element it stands for.
///
/// This is a sealed trait - only [`ByValue`] and [`ByRef`] implement it.
pub trait ElementKind<T>: private::Sealed + 'static {
    /// The logical element type that queries operate on.
    type Target;

    /// Returns the logical element, or `None` if the element is absent.
    fn resolve(element: &T) -> Option<&Self::Target>;
}

impl<T> ElementKind<T> for ByValue {
    type Target = T;

    #[inline(always)]
    fn resolve(element: &T) -> Option<&T> {
        Some(element)
    }
}

impl<H: Handle> ElementKind<H> for ByRef {
    type Target = H::Target;

    #[inline(always)]
    fn resolve(element: &H) -> Option<&H::Target> {
        element.get()
    }
}

/// A pointer-like element of a reference-kind sequence.
///
/// `Option`-wrapped handles model nullable pointers: `None` is the null
/// handle and is treated as "absent" by every query.
pub trait Handle {
    type Target;

    /// Dereferences the handle, or returns `None` for a null handle.
    fn get(&self) -> Option<&Self::Target>;
}

impl<T> Handle for &T {
    type Target = T;

    #[inline(always)]
    fn get(&self) -> Option<&T> {
        Some(*self)
    }
}

impl<T> Handle for &mut T {
    type Target = T;

    #[inline(always)]
    fn get(&self) -> Option<&T> {
        Some(&**self)
    }
}

impl<T> Handle for Option<&T> {
    type Target = T;

    #[inline(always)]
    fn get(&self) -> Option<&T> {
        *self
    }
}

/// A [`Handle`] whose clone points at the same target.
///
/// Reference-kind [`filter`](crate::Sequence::filter) clones handles, so it
/// only accepts these. `Box<T>` is a handle but not a shared one: cloning it
/// copies the target.
///
/// This is a sealed trait, implemented for `&T`, `Rc<T>`, `Arc<T>` and their
/// `Option` forms.
pub trait SharedHandle: Handle + Clone + private::Sealed {}

impl<T> private::Sealed for &T {}
impl<T> SharedHandle for &T {}

impl<T> private::Sealed for Option<&T> {}
impl<T> SharedHandle for Option<&T> {}

macro_rules! owning_handle {
    ($($ptr:ident),*) => {
        $(
            impl<T> Handle for $ptr<T> {
                type Target = T;

                #[inline(always)]
                fn get(&self) -> Option<&T> {
                    Some(&**self)
                }
            }

            impl<T> Handle for Option<$ptr<T>> {
                type Target = T;

                #[inline(always)]
                fn get(&self) -> Option<&T> {
                    self.as_deref()
                }
            }
        )*
    };
}

owning_handle!(Box, Rc, Arc);

macro_rules! shared_handle {
    ($($ptr:ident),*) => {
        $(
            impl<T> private::Sealed for $ptr<T> {}
            impl<T> SharedHandle for $ptr<T> {}

            impl<T> private::Sealed for Option<$ptr<T>> {}
            impl<T> SharedHandle for Option<$ptr<T>> {}
        )*
    };
}

shared_handle!(Rc, Arc);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_value_always_resolves() {
        assert_eq!(<ByValue as ElementKind<i32>>::resolve(&7), Some(&7));
    }

    #[test]
    fn test_null_handles_resolve_to_none() {
        let null_ref: Option<&i32> = None;
        let null_box: Option<Box<i32>> = None;
        assert_eq!(<ByRef as ElementKind<_>>::resolve(&null_ref), None);
        assert_eq!(<ByRef as ElementKind<_>>::resolve(&null_box), None);
    }

    #[test]
    fn test_owning_handles_dereference() {
        let value = 3;
        assert_eq!(Handle::get(&&value), Some(&3));
        assert_eq!(Box::new(4).get(), Some(&4));
        assert_eq!(Rc::new(5).get(), Some(&5));
        assert_eq!(Some(Arc::new(6)).get(), Some(&6));
    }

    fn clone_shares_target<H: SharedHandle>(handle: &H) -> bool {
        let copy = handle.clone();
        match (H::get(handle), H::get(&copy)) {
            (Some(a), Some(b)) => core::ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    #[test]
    fn test_shared_handle_clones_alias_target() {
        let value = 3;
        assert!(clone_shares_target(&&value));
        assert!(clone_shares_target(&Some(&value)));
        assert!(clone_shares_target(&Rc::new(4)));
        assert!(clone_shares_target(&Some(Arc::new(5))));
        assert!(clone_shares_target(&None::<Rc<i32>>));
    }
}
