//! Structural contracts shared by every reference-like type in this crate.
//!
//! The comparisons in [`cmp`][crate::cmp] are written against these traits
//! rather than against the concrete wrappers, so a new wrapper type only has
//! to say how to reach its object to take part in them.
//!
//! | type                      | `Identity` | `WeakCapability` | `UnownedCapability` |
//! |---------------------------|:----------:|:----------------:|:-------------------:|
//! | `WeakRef<T, A>`           | yes        | yes              |                     |
//! | `UnownedRef<T, A>`        | yes        |                  | yes                 |
//! | `Rc<T>`, `Arc<T>`         | yes        |                  | yes                 |
//! | `Option<Rc<T>>`, ...      | yes        | yes              |                     |
//! | `&R`                      | as `R`     | as `R`           | as `R`              |
use core::ops::Deref;
use core::ptr::NonNull;

/// Anything that names at most one object.
///
/// `object_ptr` is what identity comparison looks at: the address of the
/// live referent, or `None` if there is nothing to point at. It must not
/// change any reference count.
pub trait Identity {
    type Object: ?Sized;

    fn object_ptr(&self) -> Option<NonNull<Self::Object>>;
}

/// A reference whose object may be gone.
pub trait WeakCapability: Identity {
    /// What reading the object hands back, e.g. `Rc<T>`.
    type Strong: Deref<Target = Self::Object>;

    /// The current object, or `None` if the reference is empty.
    fn object(&self) -> Option<Self::Strong>;
}

/// A reference whose object is always there while it is used.
pub trait UnownedCapability: Identity {
    fn object(&self) -> &Self::Object;
}

impl<R: Identity> Identity for Option<R> {
    type Object = R::Object;

    fn object_ptr(&self) -> Option<NonNull<R::Object>> {
        self.as_ref().and_then(Identity::object_ptr)
    }
}

impl<R: Identity + ?Sized> Identity for &R {
    type Object = R::Object;

    fn object_ptr(&self) -> Option<NonNull<R::Object>> {
        (**self).object_ptr()
    }
}

impl<R: WeakCapability + ?Sized> WeakCapability for &R {
    type Strong = R::Strong;

    fn object(&self) -> Option<R::Strong> {
        (**self).object()
    }
}

impl<R: UnownedCapability + ?Sized> UnownedCapability for &R {
    fn object(&self) -> &R::Object {
        (**self).object()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rc::{UnownedRef, WeakRef};
    use std::rc::Rc;

    #[test]
    fn test_option_resolves_through() {
        let a = Rc::new(1);
        let some: Option<Rc<i32>> = Some(a.clone());
        let none: Option<Rc<i32>> = None;
        assert_eq!(some.object_ptr(), a.object_ptr());
        assert_eq!(none.object_ptr(), None);
    }

    #[test]
    fn test_reference_resolves_through() {
        let a = Rc::new(1);
        let w = WeakRef::new(Some(&a));
        let r = &w;
        assert_eq!(r.object_ptr(), w.object_ptr());
        assert!(Rc::ptr_eq(&WeakCapability::object(&r).unwrap(), &a));
    }

    #[test]
    fn test_unowned_through_reference() {
        let a = Rc::new(7);
        let u = unsafe { UnownedRef::new(&a) };
        let r = &u;
        assert_eq!(*UnownedCapability::object(&r), 7);
        assert_eq!(r.object_ptr(), Some(NonNull::from(&*a)));
    }

    // A wrapper defined outside the crate's own types still takes part in
    // every comparison once it implements the capability traits.
    struct Slot(Option<Rc<i32>>);

    impl Identity for Slot {
        type Object = i32;

        fn object_ptr(&self) -> Option<NonNull<i32>> {
            self.0.object_ptr()
        }
    }

    impl WeakCapability for Slot {
        type Strong = Rc<i32>;

        fn object(&self) -> Option<Rc<i32>> {
            self.0.clone()
        }
    }

    #[test]
    fn test_custom_capability() {
        use crate::cmp::{equal_value, same_instance};

        let a = Rc::new(3);
        let slot = Slot(Some(a.clone()));
        let w = WeakRef::new(Some(&a));
        assert!(same_instance(&slot, &w));
        assert!(same_instance(&w, &slot));
        assert!(equal_value(&slot, &w));

        let other = Slot(Some(Rc::new(3)));
        assert!(!same_instance(&slot, &other));
        assert!(equal_value(&slot, &other));

        let empty = Slot(None);
        assert!(same_instance(&empty, &WeakRef::<i32>::empty()));
        assert!(!equal_value(&empty, &slot));
    }
}
