//! Shared heap wrapper for runtime objects.
//!
//! `Heap<T>` wraps `Rc<T>` and is the only way object payloads reach the
//! heap. The constructor is `pub(super)`, so code outside the object module
//! goes through the factory methods on [`Object`](super::Object).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

/// A reference-counted object payload.
///
/// Cloning shares the allocation. Equality, hashing and formatting look
/// through to the payload.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    /// Allocate a payload. Only visible within the object module.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether two handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + Eq> Eq for Heap<T> {}

impl<T: ?Sized + Hash> Hash for Heap<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        (*self.0).hash(state);
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl<T: ?Sized> AsRef<T> for Heap<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deref_reaches_payload() {
        let h = Heap::new(42i64);
        assert_eq!(*h, 42);
    }

    #[test]
    fn clone_shares_allocation() {
        let h1 = Heap::new(vec![1, 2, 3]);
        let h2 = h1.clone();
        assert_eq!(*h1, *h2);
        assert!(Heap::ptr_eq(&h1, &h2));
    }

    #[test]
    fn equality_is_by_value() {
        let h1 = Heap::new("hello".to_string());
        let h2 = Heap::new("hello".to_string());
        let h3 = Heap::new("world".to_string());
        assert_eq!(h1, h2);
        assert_ne!(h1, h3);
        assert!(!Heap::ptr_eq(&h1, &h2));
    }
}
