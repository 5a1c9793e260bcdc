//! The host memory manager behind [`WeakRef`][crate::WeakRef] and
//! [`UnownedRef`][crate::UnownedRef].
//!
//! Reference counting, destruction and the clearing of weak pointers all
//! belong to `alloc::rc` (see [`Nonatomic`][crate::Nonatomic]) or
//! `alloc::sync` (see `Atomic`). This crate only observes
//! them through this trait.
use core::ops::Deref;

/// Trait to distinguish [`rc`][crate::rc] wrappers from `arc`
/// wrappers. The only implementers are [`Nonatomic`][crate::Nonatomic] and
/// `Atomic`.
///
/// It is `pub` so you can write code that's generic over atomicity, but there's
/// no reason to implement it for any other types.
///
/// # Safety
/// Trait is private. [`UnownedRef`][crate::UnownedRef] relies on `as_ptr`
/// returning the address of the referent for as long as the weak pointer
/// lives.
pub unsafe trait Atomicity: private::Sealed + Sized + 'static {
    /// Owning pointer of the host, e.g. `Rc<T>`.
    type Strong<T: ?Sized>: Deref<Target = T> + Clone;

    /// Weak pointer of the host, e.g. `rc::Weak<T>`.
    type Weak<T: ?Sized>: Clone;

    #[doc(hidden)]
    fn downgrade<T: ?Sized>(this: &Self::Strong<T>) -> Self::Weak<T>;
    #[doc(hidden)]
    fn upgrade<T: ?Sized>(this: &Self::Weak<T>) -> Option<Self::Strong<T>>;
    #[doc(hidden)]
    fn strong_count<T: ?Sized>(this: &Self::Weak<T>) -> usize;
    #[doc(hidden)]
    fn as_ptr<T: ?Sized>(this: &Self::Weak<T>) -> *const T;
}

pub(crate) mod private {
    pub trait Sealed {}
}
