//! `weakref::rc::WeakRef<T>` and `weakref::rc::UnownedRef<T>` observe objects
//! owned by [`alloc::rc::Rc`].
//!
//! See the generic [`WeakRef`][crate::WeakRef] and
//! [`UnownedRef`][crate::UnownedRef] for the API.
//!
//! Besides the wrappers themselves, this module makes the raw `Rc` types take
//! part in comparisons: `Rc<T>` is a non-null reference (identity and unowned
//! value equality) and `Option<Rc<T>>` is a nullable one (identity and weak
//! value equality).
//!
//! ## See also
//!
//! `weakref::arc` in this crate is the atomic version for sharing across
//! threads.
use alloc::rc::{Rc, Weak};
use core::ptr::NonNull;

use crate::atomicity::{private, Atomicity};
use crate::capability::{Identity, UnownedCapability, WeakCapability};
use crate::{cmp, unowned, weak};

/// Host for [`alloc::rc`]: counts are plain cells, single-threaded only.
pub enum Nonatomic {}

impl private::Sealed for Nonatomic {}

unsafe impl Atomicity for Nonatomic {
    type Strong<T: ?Sized> = Rc<T>;
    type Weak<T: ?Sized> = Weak<T>;

    fn downgrade<T: ?Sized>(this: &Rc<T>) -> Weak<T> {
        Rc::downgrade(this)
    }

    fn upgrade<T: ?Sized>(this: &Weak<T>) -> Option<Rc<T>> {
        this.upgrade()
    }

    fn strong_count<T: ?Sized>(this: &Weak<T>) -> usize {
        this.strong_count()
    }

    fn as_ptr<T: ?Sized>(this: &Weak<T>) -> *const T {
        this.as_ptr()
    }
}

pub type WeakRef<T> = weak::WeakRef<T, Nonatomic>;
pub type UnownedRef<T> = unowned::UnownedRef<T, Nonatomic>;

impl<T: ?Sized> Identity for Rc<T> {
    type Object = T;

    fn object_ptr(&self) -> Option<NonNull<T>> {
        Some(NonNull::from(&**self))
    }
}

impl<T: ?Sized> UnownedCapability for Rc<T> {
    fn object(&self) -> &T {
        self
    }
}

impl<T: ?Sized> WeakCapability for Option<Rc<T>> {
    type Strong = Rc<T>;

    fn object(&self) -> Option<Rc<T>> {
        self.clone()
    }
}

impl<'a, T: ?Sized> WeakCapability for Option<&'a Rc<T>> {
    type Strong = Rc<T>;

    fn object(&self) -> Option<Rc<T>> {
        self.cloned()
    }
}

impl<T: ?Sized + PartialEq> PartialEq<Option<Rc<T>>> for WeakRef<T> {
    fn eq(&self, other: &Option<Rc<T>>) -> bool {
        cmp::equal_value(self, other)
    }
}

impl<T: ?Sized + PartialEq> PartialEq<WeakRef<T>> for Option<Rc<T>> {
    fn eq(&self, other: &WeakRef<T>) -> bool {
        cmp::equal_value(self, other)
    }
}

impl<T: ?Sized + PartialEq> PartialEq<Option<Rc<T>>> for UnownedRef<T> {
    fn eq(&self, other: &Option<Rc<T>>) -> bool {
        match other {
            Some(object) => *self.object() == **object,
            None => false,
        }
    }
}

impl<T: ?Sized + PartialEq> PartialEq<UnownedRef<T>> for Option<Rc<T>> {
    fn eq(&self, other: &UnownedRef<T>) -> bool {
        other == self
    }
}

impl<T: ?Sized + PartialEq> PartialEq<Rc<T>> for WeakRef<T> {
    fn eq(&self, other: &Rc<T>) -> bool {
        cmp::equal_value(self, &Some(other))
    }
}

impl<T: ?Sized + PartialEq> PartialEq<WeakRef<T>> for Rc<T> {
    fn eq(&self, other: &WeakRef<T>) -> bool {
        cmp::equal_value(&Some(self), other)
    }
}

impl<T: ?Sized + PartialEq> PartialEq<Rc<T>> for UnownedRef<T> {
    fn eq(&self, other: &Rc<T>) -> bool {
        cmp::equal_unowned(self, other)
    }
}

impl<T: ?Sized + PartialEq> PartialEq<UnownedRef<T>> for Rc<T> {
    fn eq(&self, other: &UnownedRef<T>) -> bool {
        cmp::equal_unowned(self, other)
    }
}
