//! `weakref::arc::WeakRef<T>` and `weakref::arc::UnownedRef<T>` observe
//! objects owned by [`alloc::sync::Arc`].
//!
//! See the generic [`WeakRef`][crate::WeakRef] and
//! [`UnownedRef`][crate::UnownedRef] for the API, and [`rc`][crate::rc] for
//! how the raw pointer types join in comparisons; it is the same here.
//!
//! No synchronization is added on top of what `Arc` already does. A weak
//! reference read on one thread may see the object destroyed by another
//! thread at any point after the read.
use alloc::sync::{Arc, Weak};
use core::ptr::NonNull;

use crate::atomicity::{private, Atomicity};
use crate::capability::{Identity, UnownedCapability, WeakCapability};
use crate::{cmp, unowned, weak};

/// Host for [`alloc::sync`]: atomic counts, shareable across threads.
pub enum Atomic {}

impl private::Sealed for Atomic {}

unsafe impl Atomicity for Atomic {
    type Strong<T: ?Sized> = Arc<T>;
    type Weak<T: ?Sized> = Weak<T>;

    fn downgrade<T: ?Sized>(this: &Arc<T>) -> Weak<T> {
        Arc::downgrade(this)
    }

    fn upgrade<T: ?Sized>(this: &Weak<T>) -> Option<Arc<T>> {
        this.upgrade()
    }

    fn strong_count<T: ?Sized>(this: &Weak<T>) -> usize {
        // advisory only, like `Arc::strong_count`
        this.strong_count()
    }

    fn as_ptr<T: ?Sized>(this: &Weak<T>) -> *const T {
        this.as_ptr()
    }
}

pub type WeakRef<T> = weak::WeakRef<T, Atomic>;
pub type UnownedRef<T> = unowned::UnownedRef<T, Atomic>;

impl<T: ?Sized> Identity for Arc<T> {
    type Object = T;

    fn object_ptr(&self) -> Option<NonNull<T>> {
        Some(NonNull::from(&**self))
    }
}

impl<T: ?Sized> UnownedCapability for Arc<T> {
    fn object(&self) -> &T {
        self
    }
}

impl<T: ?Sized> WeakCapability for Option<Arc<T>> {
    type Strong = Arc<T>;

    fn object(&self) -> Option<Arc<T>> {
        self.clone()
    }
}

impl<'a, T: ?Sized> WeakCapability for Option<&'a Arc<T>> {
    type Strong = Arc<T>;

    fn object(&self) -> Option<Arc<T>> {
        self.cloned()
    }
}

impl<T: ?Sized + PartialEq> PartialEq<Option<Arc<T>>> for WeakRef<T> {
    fn eq(&self, other: &Option<Arc<T>>) -> bool {
        cmp::equal_value(self, other)
    }
}

impl<T: ?Sized + PartialEq> PartialEq<WeakRef<T>> for Option<Arc<T>> {
    fn eq(&self, other: &WeakRef<T>) -> bool {
        cmp::equal_value(self, other)
    }
}

impl<T: ?Sized + PartialEq> PartialEq<Option<Arc<T>>> for UnownedRef<T> {
    fn eq(&self, other: &Option<Arc<T>>) -> bool {
        match other {
            Some(object) => *self.object() == **object,
            None => false,
        }
    }
}

impl<T: ?Sized + PartialEq> PartialEq<UnownedRef<T>> for Option<Arc<T>> {
    fn eq(&self, other: &UnownedRef<T>) -> bool {
        other == self
    }
}

impl<T: ?Sized + PartialEq> PartialEq<Arc<T>> for WeakRef<T> {
    fn eq(&self, other: &Arc<T>) -> bool {
        cmp::equal_value(self, &Some(other))
    }
}

impl<T: ?Sized + PartialEq> PartialEq<WeakRef<T>> for Arc<T> {
    fn eq(&self, other: &WeakRef<T>) -> bool {
        cmp::equal_value(&Some(self), other)
    }
}

impl<T: ?Sized + PartialEq> PartialEq<Arc<T>> for UnownedRef<T> {
    fn eq(&self, other: &Arc<T>) -> bool {
        cmp::equal_unowned(self, other)
    }
}

impl<T: ?Sized + PartialEq> PartialEq<UnownedRef<T>> for Arc<T> {
    fn eq(&self, other: &UnownedRef<T>) -> bool {
        cmp::equal_unowned(self, other)
    }
}
