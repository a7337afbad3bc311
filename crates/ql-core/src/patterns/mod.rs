//! Patterns sub-module: observer / observable.

pub mod observable;

pub use observable::{Observable, ObservableImpl, Observer};
