#![forbid(unsafe_code)]

//! Reactive state primitives.
//!
//! - [`Observable`]: shared, versioned value with change subscriptions.
//! - [`BatchScope`]: defers notifications so a burst of transitions
//!   produces a single re-render.

pub mod batch;
pub mod observable;

pub use batch::BatchScope;
pub use observable::{Observable, Subscription};
