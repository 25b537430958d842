//! Lexical environments.
//!
//! An [`Environment`] is a shared handle to a [`Scope`]. Closures keep the
//! handle of the scope they were created in, and each call encloses that
//! scope in a fresh one for its parameters.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::object::Object;

/// A single-threaded, shared, mutable scope.
///
/// Wraps `Rc<RefCell<T>>` so every scope allocation goes through
/// [`LocalScope::new`]. Not `Send`: environments never leave the thread
/// that evaluates them.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bindings of one scope plus a link to the enclosing one.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Object>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` here, shadowing any outer binding.
    #[inline]
    pub fn define(&mut self, name: String, value: Object) {
        self.bindings.insert(name, value);
    }

    /// Innermost binding of `name`.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }
}

/// Handle to a scope chain. Cloning shares the scope.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A fresh, empty global environment.
    pub fn new() -> Self {
        Environment::default()
    }

    /// A new empty scope whose parent is `outer`.
    pub fn enclosed(outer: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(outer.scope.clone())),
        }
    }

    /// Look `name` up, walking outward.
    pub fn get(&self, name: &str) -> Option<Object> {
        self.scope.borrow().lookup(name)
    }

    /// Bind `name` in this scope only.
    pub fn set(&self, name: impl Into<String>, value: Object) {
        self.scope.borrow_mut().define(name.into(), value);
    }

    /// Whether both handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}
