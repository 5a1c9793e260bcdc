//! `UnownedRef<T, A>` implements the unowned wrapper generically across the
//! host (atomic vs. nonatomic).
//!
//! ## See also
//!
//! `weakref::rc::UnownedRef<T>` is the `Rc` flavor for single-threaded use.
//!
//! `weakref::arc::UnownedRef<T>` is the `Arc` flavor for sharing across
//! threads.
use core::{fmt, ptr::NonNull};

use crate::atomicity::Atomicity;
use crate::capability::{Identity, UnownedCapability};
use crate::cmp;
use crate::error::Result;
use crate::weak::WeakRef;

/// A non-owning reference to an object the holder promises will outlive it.
///
/// Unlike [`WeakRef`] there is no empty state and no check on access:
/// [`object`][UnownedRef::object] hands out the object directly. The promise
/// is made once, at construction, which is why the constructors are
/// `unsafe`.
///
/// Internally this keeps a host weak pointer, so the allocation (though not
/// the value) stays put and identity comparisons keep working even after the
/// object is gone. Only reading the object requires it to be alive.
pub struct UnownedRef<T: ?Sized, A: Atomicity> {
    weak: A::Weak<T>,
}

impl<T: ?Sized, A: Atomicity> UnownedRef<T, A> {
    /// Wraps a strong pointer without taking ownership of it.
    ///
    /// # Safety
    ///
    /// Some strong pointer to the object must stay alive for as long as the
    /// returned `UnownedRef`, or anything borrowed from it, is read. Calling
    /// [`object`][UnownedRef::object], formatting it with `{:?}` or comparing
    /// it by value after the object is destroyed is undefined behavior.
    /// Dropping it, cloning it, or comparing it with
    /// [`same_instance`][cmp::same_instance] is always fine.
    pub unsafe fn new(object: &A::Strong<T>) -> Self {
        UnownedRef {
            weak: A::downgrade(object),
        }
    }

    /// Turns a weak reference into an unowned one, failing with
    /// [`Error::Expired`][crate::Error::Expired] if the weak reference is
    /// empty.
    ///
    /// # Safety
    ///
    /// Same contract as [`UnownedRef::new`].
    pub unsafe fn try_from_weak(weak: &WeakRef<T, A>) -> Result<Self> {
        let object = weak.try_object()?;
        Ok(unsafe { UnownedRef::new(&object) })
    }

    /// The object.
    ///
    /// No check is made that the object is still alive; see the safety
    /// contract on [`UnownedRef::new`].
    pub fn object(&self) -> &T {
        // Safety: the caller of `new` promised the object outlives every use
        // of `self`, and the weak pointer keeps the address stable.
        unsafe { &*A::as_ptr(&self.weak) }
    }
}

impl<T: ?Sized, A: Atomicity> Identity for UnownedRef<T, A> {
    type Object = T;

    fn object_ptr(&self) -> Option<NonNull<T>> {
        // An unowned reference always names its object, alive or not.
        NonNull::new(A::as_ptr(&self.weak) as *mut T)
    }
}

impl<T: ?Sized, A: Atomicity> UnownedCapability for UnownedRef<T, A> {
    fn object(&self) -> &T {
        UnownedRef::object(self)
    }
}

impl<T: ?Sized, A: Atomicity> Clone for UnownedRef<T, A> {
    fn clone(&self) -> Self {
        UnownedRef {
            weak: self.weak.clone(),
        }
    }
}

impl<T: ?Sized, A: Atomicity> AsRef<T> for UnownedRef<T, A> {
    fn as_ref(&self) -> &T {
        self.object()
    }
}

impl<T: ?Sized + PartialEq, A: Atomicity> PartialEq for UnownedRef<T, A> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        cmp::equal_unowned(self, other)
    }
}

impl<T: ?Sized + Eq, A: Atomicity> Eq for UnownedRef<T, A> {}

impl<T: ?Sized + fmt::Debug, A: Atomicity> fmt::Debug for UnownedRef<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unowned({:?})", self.object())
    }
}

impl<T: ?Sized, A: Atomicity> fmt::Pointer for UnownedRef<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&A::as_ptr(&self.weak), f)
    }
}
