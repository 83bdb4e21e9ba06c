#![forbid(unsafe_code)]

//! FrankenKit Runtime
//!
//! Stateful behaviors layered onto stateless components.
//!
//! # Key Components
//!
//! - [`Observable`] - Shared, versioned value with change subscriptions
//! - [`BatchScope`] - Defers notifications to the end of a synchronous turn
//! - [`with_counter`] - Wraps a component with its own counter state
//! - [`WindowSizeObserver`] - Tracks the latest size from a [`DimensionSource`]
//! - [`log_changes`] - Emits a tracing event for every state change
//!
//! # Role in FrankenKit
//! `fkit-runtime` owns all mutable state. Components from `fkit-widgets`
//! receive snapshots and callbacks through their props; hosts subscribe to
//! the observables here to learn when to re-render.

pub mod change_log;
pub mod counter;
pub mod reactive;
pub mod window_size;

pub use change_log::log_changes;
pub use counter::{
    Counted, CounterProps, Incrementer, Step, StepError, WithCounter, next_count, with_counter,
};
pub use reactive::{BatchScope, Observable, Subscription};
pub use window_size::{
    DimensionSource, Listener, ListenerId, WindowDimensions, WindowSizeObserver,
};
