//! Observer / Observable pattern.
//!
//! * An **Observable** notifies its registered **Observer**s whenever its
//!   state changes.
//! * Observers react by calling `update()`.
//!
//! The registry only holds `Weak` references, so an observable never keeps
//! its subscribers alive and has no ownership back-edge to them.  The list
//! is guarded by a `Mutex` so observables can be shared across threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// An object that can notify interested parties when it changes.
///
/// All methods take `&self` to support shared ownership through `Arc`.
pub trait Observable {
    /// Register an observer to receive future change notifications.
    fn register_observer(&self, observer: Weak<dyn Observer>);

    /// Remove a previously registered observer.
    fn unregister_observer(&self, observer: &Weak<dyn Observer>);

    /// Notify all currently registered observers that this object has changed.
    fn notify_observers(&self);
}

/// An object that reacts to changes in [`Observable`]s it has subscribed to.
pub trait Observer: Send + Sync {
    /// Called by every observable this observer is registered with when that
    /// observable changes state.
    fn update(&self);
}

/// Observer-list management that can be embedded in any observable type.
#[derive(Default)]
pub struct ObservableImpl {
    observers: Mutex<Vec<Weak<dyn Observer>>>,
}

impl ObservableImpl {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn list(&self) -> MutexGuard<'_, Vec<Weak<dyn Observer>>> {
        // The list stays consistent even if a holder panicked.
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register an observer.
    pub fn register(&self, observer: Weak<dyn Observer>) {
        self.list().push(observer);
    }

    /// Remove an observer (by pointer equality of the `Weak`).
    pub fn unregister(&self, observer: &Weak<dyn Observer>) {
        self.list().retain(|o| !Weak::ptr_eq(o, observer));
    }

    /// Number of observers still alive.
    pub fn observer_count(&self) -> usize {
        self.list().iter().filter(|w| w.strong_count() > 0).count()
    }

    /// Notify all live observers, pruning dead references.
    ///
    /// `update()` runs after the lock is released, so an observer may query
    /// the observable that notified it.
    pub fn notify(&self) {
        let live: Vec<Arc<dyn Observer>> = {
            let mut list = self.list();
            list.retain(|w| w.strong_count() > 0);
            list.iter().filter_map(Weak::upgrade).collect()
        };
        for obs in live {
            obs.update();
        }
    }
}

impl std::fmt::Debug for ObservableImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableImpl")
            .field("observers", &self.observer_count())
            .finish()
    }
}
