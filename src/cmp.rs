//! Named comparisons between references.
//!
//! Identity ([`same_instance`]) asks whether two references name the very
//! same object. It works across every pairing of reference kinds, weak or
//! unowned or raw.
//!
//! Value equality ([`equal_value`], [`equal_unowned`]) asks whether the
//! objects compare equal with their own `PartialEq`. It is only offered
//! within one family: weak with weak (raw `Option<Rc<T>>` counts as weak),
//! unowned with unowned (raw `Rc<T>` counts as unowned). To compare values
//! across the families, unwrap both sides first.
//!
//! The `PartialEq` impls on [`WeakRef`][crate::WeakRef] and
//! [`UnownedRef`][crate::UnownedRef] are the same functions behind `==`.
use crate::capability::{Identity, UnownedCapability, WeakCapability};

/// Returns true if both sides name the same object, or both name none.
///
/// Only the address is compared; pointer metadata such as a vtable is
/// ignored, since the same type may have several vtables.
///
/// ```
/// use std::rc::Rc;
/// use weakref::cmp::same_instance;
/// use weakref::rc::{UnownedRef, WeakRef};
///
/// let a = Rc::new(5);
/// let w = WeakRef::new(Some(&a));
/// let u = unsafe { UnownedRef::new(&a) };
///
/// assert!(same_instance(&w, &u));
/// assert!(same_instance(&u, &a));
/// assert!(!same_instance(&w, &Rc::new(5)));
/// assert!(same_instance(&WeakRef::<i32>::empty(), &None::<Rc<i32>>));
/// ```
pub fn same_instance<L, R>(lhs: &L, rhs: &R) -> bool
where
    L: Identity + ?Sized,
    R: Identity<Object = L::Object> + ?Sized,
{
    match (lhs.object_ptr(), rhs.object_ptr()) {
        (None, None) => true,
        (Some(l), Some(r)) => l.cast::<u8>() == r.cast::<u8>(),
        _ => false,
    }
}

/// Negation of [`same_instance`].
pub fn not_same_instance<L, R>(lhs: &L, rhs: &R) -> bool
where
    L: Identity + ?Sized,
    R: Identity<Object = L::Object> + ?Sized,
{
    !same_instance(lhs, rhs)
}

/// Returns true if both weak references are empty, or both hold objects
/// that compare equal.
pub fn equal_value<L, R>(lhs: &L, rhs: &R) -> bool
where
    L: WeakCapability + ?Sized,
    R: WeakCapability<Object = L::Object> + ?Sized,
    L::Object: PartialEq,
{
    match (lhs.object(), rhs.object()) {
        (None, None) => true,
        (Some(l), Some(r)) => *l == *r,
        _ => false,
    }
}

/// Negation of [`equal_value`].
pub fn not_equal_value<L, R>(lhs: &L, rhs: &R) -> bool
where
    L: WeakCapability + ?Sized,
    R: WeakCapability<Object = L::Object> + ?Sized,
    L::Object: PartialEq,
{
    !equal_value(lhs, rhs)
}

/// Returns true if the objects of two unowned references compare equal.
pub fn equal_unowned<L, R>(lhs: &L, rhs: &R) -> bool
where
    L: UnownedCapability + ?Sized,
    R: UnownedCapability<Object = L::Object> + ?Sized,
    L::Object: PartialEq,
{
    *lhs.object() == *rhs.object()
}

/// Negation of [`equal_unowned`].
pub fn not_equal_unowned<L, R>(lhs: &L, rhs: &R) -> bool
where
    L: UnownedCapability + ?Sized,
    R: UnownedCapability<Object = L::Object> + ?Sized,
    L::Object: PartialEq,
{
    !equal_unowned(lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rc::{UnownedRef, WeakRef};
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    struct Point(i32, i32);

    #[test]
    fn test_same_instance_basics() {
        let o = Rc::new(Point(1, 2));
        let w = WeakRef::new(Some(&o));
        let u = unsafe { UnownedRef::new(&o) };
        let empty = WeakRef::<Point>::empty();

        assert!(same_instance(&w, &WeakRef::new(Some(&o))));
        assert!(same_instance(&w, &u));
        assert!(same_instance(&empty, &WeakRef::<Point>::empty()));
        assert!(!same_instance(&w, &empty));
        assert!(not_same_instance(&w, &empty));
    }

    #[test]
    fn test_value_vs_identity() {
        let o1 = Rc::new(Point(1, 2));
        let o2 = Rc::new(Point(1, 2));
        let w1 = WeakRef::new(Some(&o1));
        let w2 = WeakRef::new(Some(&o2));

        assert!(equal_value(&w1, &w2));
        assert!(!same_instance(&w1, &w2));
        assert!(not_same_instance(&w1, &w2));
        assert!(!not_equal_value(&w1, &w2));
    }

    #[test]
    fn test_emptiness_collapse() {
        let o = Rc::new(Point(0, 0));
        let empty = WeakRef::<Point>::empty();
        assert!(equal_value(&empty, &WeakRef::<Point>::empty()));
        assert!(!equal_value(&empty, &WeakRef::new(Some(&o))));
        assert!(!equal_value(&WeakRef::new(Some(&o)), &empty));
        assert!(not_equal_value(&empty, &WeakRef::new(Some(&o))));
    }

    #[test]
    fn test_expired_is_same_as_empty() {
        let o = Rc::new(Point(0, 0));
        let w = WeakRef::new(Some(&o));
        assert!(not_same_instance(&w, &WeakRef::<Point>::empty()));
        drop(o);
        assert!(same_instance(&w, &WeakRef::<Point>::empty()));
        assert!(equal_value(&w, &None::<Rc<Point>>));
    }

    #[test]
    fn test_unowned_values() {
        let o1 = Rc::new(Point(3, 4));
        let o2 = Rc::new(Point(3, 4));
        let o3 = Rc::new(Point(5, 6));
        let u1 = unsafe { UnownedRef::new(&o1) };
        let u2 = unsafe { UnownedRef::new(&o2) };
        let u3 = unsafe { UnownedRef::new(&o3) };

        assert!(equal_unowned(&u1, &u2));
        assert!(not_equal_unowned(&u1, &u3));
        assert!(equal_unowned(&u1, &o2));
        assert!(equal_unowned(&o3, &u3));
        assert!(!same_instance(&u1, &u2));
    }

    #[test]
    fn test_unsized_objects() {
        let s: Rc<str> = Rc::from("hello");
        let t: Rc<str> = Rc::from("hello");
        let w = WeakRef::new(Some(&s));
        let u = unsafe { UnownedRef::new(&s) };

        assert!(same_instance(&w, &u));
        assert!(!same_instance(&w, &t));
        assert!(equal_value(&w, &Some(t.clone())));
        assert!(equal_unowned(&u, &t));
    }

    #[test]
    fn test_trait_objects_compare_by_address() {
        use core::fmt::Debug;
        let a: Rc<dyn Debug> = Rc::new(1);
        let b: Rc<dyn Debug> = a.clone();
        let w = WeakRef::new(Some(&a));
        assert!(same_instance(&w, &b));
        assert!(!same_instance(&w, &(Rc::new(1) as Rc<dyn Debug>)));
    }
}
