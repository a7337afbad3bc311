//! `Quote` trait and `SimpleQuote` implementation.
//!
//! A quote is a single observable market value.  Consumers hold it through
//! a `Handle<dyn Quote>` and may subscribe to it as an [`Observer`]; every
//! accepted change is published to the subscribers.

use ql_core::{
    ensure_arg,
    errors::Result,
    patterns::{Observable, ObservableImpl, Observer},
    Real,
};
use std::sync::{PoisonError, RwLock, Weak};

/// A market-observable value.
pub trait Quote: Observable + std::fmt::Debug + Send + Sync {
    /// Return the current value.
    ///
    /// Returns `None` if the quote is not currently set.
    fn value(&self) -> Option<Real>;

    /// Return `true` if the quote currently holds a value.
    fn is_valid(&self) -> bool {
        self.value().is_some()
    }
}

/// A simple, mutable market quote.
///
/// The value sits behind an `RwLock`, so a quote shared between threads
/// serializes writers while readers proceed in parallel.
#[derive(Debug, Default)]
pub struct SimpleQuote {
    value: RwLock<Option<Real>>,
    observers: ObservableImpl,
}

impl SimpleQuote {
    /// Create a quote holding `value`.
    ///
    /// Fails with `InvalidArgument` if `value` is NaN or infinite.
    pub fn new(value: Real) -> Result<Self> {
        ensure_arg!(value.is_finite(), "quote value must be finite, got {value}");
        Ok(Self {
            value: RwLock::new(Some(value)),
            observers: ObservableImpl::new(),
        })
    }

    /// Create an empty (invalid) quote.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the value and notify observers if it changed.
    ///
    /// Returns the previous value.
    pub fn set_value(&self, value: Real) -> Result<Option<Real>> {
        ensure_arg!(value.is_finite(), "quote value must be finite, got {value}");
        let previous = {
            let mut slot = self.value.write().unwrap_or_else(PoisonError::into_inner);
            slot.replace(value)
        };
        if previous != Some(value) {
            self.observers.notify();
        }
        Ok(previous)
    }

    /// Clear the value and notify observers.
    pub fn reset(&self) {
        let previous = self
            .value
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if previous.is_some() {
            self.observers.notify();
        }
    }
}

impl Observable for SimpleQuote {
    fn register_observer(&self, observer: Weak<dyn Observer>) {
        self.observers.register(observer);
    }

    fn unregister_observer(&self, observer: &Weak<dyn Observer>) {
        self.observers.unregister(observer);
    }

    fn notify_observers(&self) {
        self.observers.notify();
    }
}

impl Quote for SimpleQuote {
    fn value(&self) -> Option<Real> {
        *self.value.read().unwrap_or_else(PoisonError::into_inner)
    }
}
