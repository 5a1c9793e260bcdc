/*!
This crate provides two small wrappers for holding a reference to an object
owned by an [`Rc`][alloc::rc::Rc] or [`Arc`][alloc::sync::Arc] without owning
it, and a set of comparisons that work across them.

- [`WeakRef`] may become empty. Once the last strong pointer to its object is
  dropped it reads as `None`.
- [`UnownedRef`] is never empty. The holder promises, at construction, that
  the object outlives every use of the reference.

Both come in an `Rc` flavor ([`rc::WeakRef`], [`rc::UnownedRef`]) and an
`Arc` flavor (`arc::WeakRef`, `arc::UnownedRef`, with the default `sync`
feature).

```rust
    use std::rc::Rc;
    use weakref::cmp::same_instance;
    use weakref::rc::{UnownedRef, WeakRef};

    let a = Rc::new(String::from("a"));
    let w = WeakRef::new(Some(&a));
    let u = unsafe { UnownedRef::new(&a) };

    // both name the same object
    assert!(same_instance(&w, &u));
    assert_eq!(u.object(), "a");

    drop(a);
    // the weak reference noticed; the unowned one must not be read any more
    assert!(w.object().is_none());
```

# Identity and value

Two references can be compared in two ways:

- identity, with [`cmp::same_instance`]: do they name the very same object?
- value, with `==` (or [`cmp::equal_value`]): do the objects compare equal?

```
    # use std::rc::Rc;
    # use weakref::cmp::same_instance;
    # use weakref::rc::WeakRef;
    let a = Rc::new(1);
    let b = Rc::new(1);
    let (wa, wb) = (WeakRef::new(Some(&a)), WeakRef::new(Some(&b)));

    assert!(wa == wb);
    assert!(!same_instance(&wa, &wb));
```

An empty weak reference is the same instance as, and equal to, any other
empty one, and is neither the same instance as nor equal to any live
reference. A weak reference whose object was destroyed behaves exactly like
an empty one.

Identity works between any two kinds of reference: weak, unowned, a plain
`Rc<T>`, an `Option<Rc<T>>`, or your own type that implements
[`capability::Identity`]. Value equality only works inside a family: weak
with weak or `Option<Rc<T>>`, and unowned with unowned or `Rc<T>`. To compare
a weak reference with an unowned one by value, read both objects first.
As a convenience, both wrappers also compare with `==` against a plain
`Rc<T>`.

```
    # use std::rc::Rc;
    # use weakref::rc::WeakRef;
    let a = Rc::new(1);
    let w = WeakRef::new(Some(&a));

    assert!(w == Some(Rc::new(1)));
    assert!(w != None);
    assert!(WeakRef::<i32>::empty() == None);
```

# Containers

Both wrappers are plain values, so they can be stored in a `Vec`, cloned,
and mapped over. [`seq`] has the few helpers that come up every time:

```
    use std::rc::Rc;
    use weakref::rc::{Nonatomic, WeakRef};
    use weakref::seq::{downgrade_all, live_objects};

    let objects = vec![Rc::new(1), Rc::new(2), Rc::new(3)];
    let refs: Vec<WeakRef<i32>> = downgrade_all::<_, Nonatomic, _>(&objects);

    let mut objects = objects;
    objects.remove(1);

    let live: Vec<i32> = live_objects(&refs).map(|x| *x).collect();
    assert_eq!(live, [1, 3]);
```

# Notes

## Who clears a weak reference

Nothing in this crate does. Counting, destruction and the clearing of weak
pointers belong entirely to `alloc::rc` and `alloc::sync`; a `WeakRef` only
asks them, every time [`WeakRef::object`] is called, whether the object is
still there. Holding a `WeakRef` never keeps an object alive.

## Why `UnownedRef::new` is `unsafe`

[`UnownedRef::object`] hands out a plain `&T` with no liveness check. That is
the point of an unowned reference, and it is only sound if the object
outlives the reference, which the compiler cannot see. The promise is made
once, when the reference is created.

An `UnownedRef` keeps the allocation (not the value) of its object around,
so dropping it, cloning it and comparing its identity stay fine after the
object is destroyed. Reading the object, formatting it, or comparing it by
value does not.

## Differences from `std::rc::Weak`

`std::rc::Weak::ptr_eq` compares allocations, so a `Weak::new()` and a weak
pointer to a destroyed object are different. [`cmp::same_instance`] only
looks at live objects: every empty or expired weak reference is the same,
and none of them is the same as a live one.

`WeakRef` has an empty state that does not need `T: Sized`, so
`WeakRef<str>` and `WeakRef<dyn Trait>` can be empty too.
*/
#![no_std]
#[cfg(test)]
extern crate std;

extern crate alloc;

pub mod atomicity;
pub mod capability;
pub mod cmp;
pub mod error;
pub mod rc;
pub mod seq;
pub mod unowned;
pub mod weak;

#[cfg(feature = "sync")]
pub mod arc;

#[cfg(feature = "sync")]
pub use self::arc::Atomic;
pub use self::atomicity::Atomicity;
pub use self::error::{Error, Result};
pub use self::rc::Nonatomic;
pub use self::unowned::UnownedRef;
pub use self::weak::WeakRef;
