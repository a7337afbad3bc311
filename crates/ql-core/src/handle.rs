//! `Handle<T>`: a shared, optionally-null reference to a value.
//!
//! Consumers such as the Garman-Kohlhagen process hold a `Handle` to their
//! market data rather than a copy, so that every holder observes the same
//! underlying object.  `T` may be unsized, which is how trait objects like
//! `Handle<dyn Quote>` are expressed.

use crate::errors::{Error, Result};
use std::sync::Arc;

/// A shared, optionally-null reference to a value of type `T`.
///
/// The handle is read-only; mutation, where supported, goes through the
/// interior mutability of `T` itself.
pub struct Handle<T: ?Sized> {
    inner: Option<Arc<T>>,
}

impl<T> Handle<T> {
    /// Create a non-null handle wrapping `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Some(Arc::new(value)),
        }
    }
}

impl<T: ?Sized> Handle<T> {
    /// Create a handle from an existing `Arc`.
    pub fn from_arc(arc: Arc<T>) -> Self {
        Self { inner: Some(arc) }
    }

    /// Create a null (empty) handle.
    pub fn null() -> Self {
        Self { inner: None }
    }

    /// Return `true` if the handle is null (contains no value).
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Return a reference to the inner `Arc<T>`, or `None` if this handle is
    /// null.
    pub fn as_arc(&self) -> Option<&Arc<T>> {
        self.inner.as_ref()
    }

    /// Attempt to borrow the contained value.
    pub fn get(&self) -> Option<&T> {
        self.inner.as_deref()
    }

    /// Borrow the contained value, failing with [`Error::NullValue`] if the
    /// handle is empty.
    pub fn current(&self) -> Result<&T> {
        self.inner
            .as_deref()
            .ok_or_else(|| Error::NullValue("empty handle cannot be dereferenced".into()))
    }

    /// `true` if both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Handle<T>) -> bool {
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T: ?Sized> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: ?Sized> Default for Handle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized> From<Arc<T>> for Handle<T> {
    fn from(arc: Arc<T>) -> Self {
        Self::from_arc(arc)
    }
}

impl<T: ?Sized + std::fmt::Debug> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Some(v) => write!(f, "Handle({:?})", v),
            None => write!(f, "Handle(null)"),
        }
    }
}
