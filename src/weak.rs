//! `WeakRef<T, A>` implements the weak wrapper generically across the host
//! (atomic vs. nonatomic).
//!
//! ## See also
//!
//! `weakref::rc::WeakRef<T>` is the `Rc` flavor for single-threaded use.
//!
//! `weakref::arc::WeakRef<T>` is the `Arc` flavor for sharing across threads.
use core::{fmt, ptr::NonNull};

use crate::atomicity::Atomicity;
use crate::capability::{Identity, WeakCapability};
use crate::cmp;
use crate::error::{Error, Result};

/// A non-owning reference that reads as empty once its object is destroyed.
///
/// Holding a `WeakRef` never keeps the object alive. The host clears it:
/// after the last strong pointer is dropped, [`object`][WeakRef::object]
/// returns `None` and the reference compares like an empty one.
///
/// `==` compares the objects by value. Use [`cmp::same_instance`] to ask
/// whether two references name the same object.
pub struct WeakRef<T: ?Sized, A: Atomicity> {
    weak: Option<A::Weak<T>>,
}

impl<T: ?Sized, A: Atomicity> WeakRef<T, A> {
    /// Wraps an optional strong pointer without taking ownership of it.
    pub fn new(object: Option<&A::Strong<T>>) -> Self {
        WeakRef {
            weak: object.map(A::downgrade),
        }
    }

    /// A reference to nothing. Same as `WeakRef::new(None)`.
    pub const fn empty() -> Self {
        WeakRef { weak: None }
    }

    /// Wraps a weak pointer obtained directly from the host.
    pub fn from_weak(weak: A::Weak<T>) -> Self {
        WeakRef { weak: Some(weak) }
    }

    /// The object, if it is still alive.
    ///
    /// The answer is read from the host on every call and never cached.
    pub fn object(&self) -> Option<A::Strong<T>> {
        self.weak.as_ref().and_then(A::upgrade)
    }

    /// Like [`object`][WeakRef::object], but an empty reference is an
    /// [`Error::Expired`], for callers that want to propagate it with `?`.
    pub fn try_object(&self) -> Result<A::Strong<T>> {
        self.object().ok_or(Error::Expired)
    }

    /// Returns true if there is no live object behind this reference.
    pub fn is_empty(&self) -> bool {
        self.object_ptr().is_none()
    }
}

impl<T: ?Sized, A: Atomicity> Identity for WeakRef<T, A> {
    type Object = T;

    fn object_ptr(&self) -> Option<NonNull<T>> {
        let weak = self.weak.as_ref()?;
        if A::strong_count(weak) == 0 {
            return None;
        }
        NonNull::new(A::as_ptr(weak) as *mut T)
    }
}

impl<T: ?Sized, A: Atomicity> WeakCapability for WeakRef<T, A> {
    type Strong = A::Strong<T>;

    fn object(&self) -> Option<A::Strong<T>> {
        WeakRef::object(self)
    }
}

impl<T: ?Sized, A: Atomicity> Clone for WeakRef<T, A> {
    fn clone(&self) -> Self {
        WeakRef {
            weak: self.weak.clone(),
        }
    }
}

impl<T: ?Sized, A: Atomicity> Default for WeakRef<T, A> {
    fn default() -> Self {
        WeakRef::empty()
    }
}

impl<'a, T: ?Sized, A: Atomicity> From<&'a A::Strong<T>> for WeakRef<T, A> {
    fn from(object: &'a A::Strong<T>) -> Self {
        WeakRef::new(Some(object))
    }
}

impl<'a, T: ?Sized, A: Atomicity> From<Option<&'a A::Strong<T>>> for WeakRef<T, A> {
    fn from(object: Option<&'a A::Strong<T>>) -> Self {
        WeakRef::new(object)
    }
}

impl<T: ?Sized + PartialEq, A: Atomicity> PartialEq for WeakRef<T, A> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        cmp::equal_value(self, other)
    }
}

impl<T: ?Sized + Eq, A: Atomicity> Eq for WeakRef<T, A> {}

impl<T: ?Sized + fmt::Debug, A: Atomicity> fmt::Debug for WeakRef<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.object() {
            Some(object) => write!(f, "Weak({:?})", &*object),
            None => f.write_str("None"),
        }
    }
}
