//! Helpers for sequences of references.
//!
//! These are thin conveniences over `map`; they never touch reference counts
//! beyond what reading a weak reference's object already does.
use alloc::vec::Vec;

use crate::atomicity::Atomicity;
use crate::capability::{UnownedCapability, WeakCapability};
use crate::unowned::UnownedRef;
use crate::weak::WeakRef;

/// The objects behind a sequence of weak references, in order, with `None`
/// for each empty reference.
pub fn weak_objects<'a, C, I>(refs: I) -> impl Iterator<Item = Option<C::Strong>> + 'a
where
    C: WeakCapability + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
    I::IntoIter: 'a,
{
    refs.into_iter().map(WeakCapability::object)
}

/// The objects behind a sequence of weak references, skipping empty ones.
pub fn live_objects<'a, C, I>(refs: I) -> impl Iterator<Item = C::Strong> + 'a
where
    C: WeakCapability + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
    I::IntoIter: 'a,
{
    refs.into_iter().filter_map(WeakCapability::object)
}

/// The objects behind a sequence of unowned references, in order.
///
/// ```
/// use std::rc::Rc;
/// use weakref::rc::UnownedRef;
/// use weakref::seq::unowned_objects;
///
/// let (a, b) = (Rc::new('a'), Rc::new('b'));
/// let refs = unsafe { [UnownedRef::new(&a), UnownedRef::new(&b)] };
/// let objects: Vec<char> = unowned_objects(&refs).copied().collect();
/// assert_eq!(objects, ['a', 'b']);
/// ```
pub fn unowned_objects<'a, C, I>(refs: I) -> impl Iterator<Item = &'a C::Object> + 'a
where
    C: UnownedCapability + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
    I::IntoIter: 'a,
{
    refs.into_iter().map(UnownedCapability::object)
}

/// Weak references to each of `objects`, in order.
pub fn downgrade_all<'a, T, A, I>(objects: I) -> Vec<WeakRef<T, A>>
where
    T: ?Sized + 'a,
    A: Atomicity,
    I: IntoIterator<Item = &'a A::Strong<T>>,
{
    objects.into_iter().map(|o| WeakRef::new(Some(o))).collect()
}

/// Unowned references to each of `objects`, in order.
///
/// # Safety
///
/// Every object must outlive every use of the reference made for it; see
/// [`UnownedRef::new`].
pub unsafe fn wrap_unowned<'a, T, A, I>(objects: I) -> Vec<UnownedRef<T, A>>
where
    T: ?Sized + 'a,
    A: Atomicity,
    I: IntoIterator<Item = &'a A::Strong<T>>,
{
    objects
        .into_iter()
        .map(|o| unsafe { UnownedRef::new(o) })
        .collect()
}
