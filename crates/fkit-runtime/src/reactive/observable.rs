#![forbid(unsafe_code)]

//! Shared state cells with change subscriptions.
//!
//! Every piece of component state lives in an [`Observable`]: counter
//! totals, the last observed window size, form fields, and the contact list.
//! Hosts subscribe to learn when to re-render.
//!
//! A mutation that leaves the value equal (by `PartialEq`) to what it was is
//! ignored. Any other mutation bumps the version by one and calls the live
//! subscribers in subscription order, or queues them while a
//! [`BatchScope`](super::BatchScope) is open.
//!
//! Subscribers are held weakly. The [`Subscription`] returned by
//! [`Observable::subscribe`] owns the callback; once it is dropped the
//! callback never runs again, even for a delivery a batch already queued.

use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, debug_span};
use web_time::Instant;

use super::batch;

type Callback<T> = dyn Fn(&T);

struct Slot<T> {
    value: T,
    version: u64,
    /// Dead entries are pruned on the next change.
    subscribers: Vec<Weak<Callback<T>>>,
}

/// Shared, versioned value.
///
/// Cloning yields another handle to the same value and subscribers.
pub struct Observable<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = self.slot.borrow();
        f.debug_struct("Observable")
            .field("value", &slot.value)
            .field("version", &slot.version)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// A cell holding `value` at version 0.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.slot.borrow().value.clone()
    }

    /// Borrow the current value for the duration of `f`.
    ///
    /// `f` must not mutate this observable.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.slot.borrow().value)
    }

    /// Store `value`.
    pub fn set(&self, value: T) {
        self.commit(|current| {
            if *current == value {
                return false;
            }
            *current = value;
            true
        });
    }

    /// Edit the value in place.
    ///
    /// `f` receives the value as stored right now, never a snapshot taken
    /// earlier, so successive calls compose like a fold.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.commit(|current| {
            let before = current.clone();
            f(current);
            *current != before
        });
    }

    /// Replace the value with `f(current)`.
    pub fn replace_with(&self, f: impl FnOnce(&T) -> T) {
        self.commit(|current| {
            let next = f(current);
            if next == *current {
                return false;
            }
            *current = next;
            true
        });
    }

    /// Call `callback` with each new value until the guard is dropped.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Rc<Callback<T>> = Rc::new(callback);
        self.slot
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&callback));
        Subscription {
            _callback: Box::new(callback),
        }
    }

    /// Number of value changes so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.slot.borrow().version
    }

    /// Registered subscribers, counting dropped ones not yet pruned.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.slot.borrow().subscribers.len()
    }

    /// True if both handles share one cell.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }

    /// Apply `change`; on `true`, bump the version and publish.
    fn commit(&self, change: impl FnOnce(&mut T) -> bool) {
        let changed = {
            let mut slot = self.slot.borrow_mut();
            let changed = change(&mut slot.value);
            if changed {
                slot.version += 1;
            }
            changed
        };
        if changed {
            self.publish();
        }
    }

    fn publish(&self) {
        let subscribers: Vec<Weak<Callback<T>>> = {
            let mut slot = self.slot.borrow_mut();
            slot.subscribers.retain(|s| s.strong_count() > 0);
            slot.subscribers.clone()
        };
        if subscribers.is_empty() {
            return;
        }

        if batch::is_batching() {
            for subscriber in subscribers {
                let key = subscriber.as_ptr().cast::<()>() as usize;
                let source = self.clone();
                batch::defer(
                    key,
                    Box::new(move || {
                        if let Some(callback) = subscriber.upgrade() {
                            callback(&source.get());
                        }
                    }),
                );
            }
            return;
        }

        // Subscribers may mutate this cell, so hand them a clone.
        let value = self.get();
        let start = Instant::now();
        let span = debug_span!(
            "fkit.notify",
            subscribers = subscribers.len(),
            duration_us = tracing::field::Empty
        );
        let _entered = span.enter();

        let mut delivered = 0usize;
        for subscriber in &subscribers {
            if let Some(callback) = subscriber.upgrade() {
                callback(&value);
                delivered += 1;
            }
        }

        let duration_us = start.elapsed().as_micros() as u64;
        span.record("duration_us", duration_us);
        debug!(delivered, duration_us, "observable notified");
    }
}

/// Keeps a subscriber alive. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    // `Rc<dyn Fn(&T)>` cannot unsize to `dyn Any`; box the Rc instead.
    _callback: Box<dyn Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Subscription")
    }
}
