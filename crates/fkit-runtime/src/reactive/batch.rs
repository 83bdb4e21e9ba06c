#![forbid(unsafe_code)]

//! Deferred change delivery.
//!
//! A burst of transitions in one synchronous turn (three clicks handled
//! before the host re-renders, say) would call every subscriber once per
//! transition. Inside a [`BatchScope`] observables still change immediately,
//! in trigger order, but their subscribers are queued instead of called.
//! When the outermost scope ends the queue is drained: each subscriber runs
//! once and reads the value current at that moment.
//!
//! A subscriber may itself change state while it is being delivered (one
//! counter driving another). Those changes queue further deliveries, and
//! the drain keeps going until the queue is empty. The turn is only closed
//! after that, so no change made during the drain goes unannounced.
//!
//! ```
//! use fkit_runtime::reactive::{BatchScope, Observable};
//!
//! let count = Observable::new(0u64);
//! {
//!     let _batch = BatchScope::new();
//!     count.update(|c| *c += 10);
//!     count.update(|c| *c += 10); // sees 10, not the pre-batch 0
//! }
//! assert_eq!(count.get(), 20);
//! ```

use std::any::Any;
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, debug_span};

/// One queued subscriber call. `key` is the subscriber's identity, so a
/// subscriber queued twice in one round runs once.
struct Delivery {
    key: usize,
    run: Box<dyn FnOnce()>,
}

struct Turn {
    /// Open scopes on this thread.
    depth: u32,
    /// Set while the outermost scope drains; inner scopes opened by
    /// subscribers leave the drain to it.
    draining: bool,
    queue: Vec<Delivery>,
}

thread_local! {
    static TURN: RefCell<Option<Turn>> = const { RefCell::new(None) };
}

/// True while a [`BatchScope`] is open on this thread, including during its
/// final drain.
pub(crate) fn is_batching() -> bool {
    TURN.with(|turn| turn.borrow().is_some())
}

/// Queue `run` under `key` unless that key is already waiting.
///
/// Queued deliveries read the latest value when they run, so a second
/// entry for the same subscriber would only repeat the first. Runs `run`
/// at once if no batch is open.
pub(crate) fn defer(key: usize, run: Box<dyn FnOnce()>) {
    let rejected = TURN.with(|turn| match turn.borrow_mut().as_mut() {
        Some(turn) => {
            if !turn.queue.iter().any(|queued| queued.key == key) {
                turn.queue.push(Delivery { key, run });
            }
            None
        }
        None => Some(run),
    });
    if let Some(run) = rejected {
        run();
    }
}

/// Drain the queue until it stays empty. Returns the first panic raised by
/// a subscriber; the others still run.
fn drain() -> Option<Box<dyn Any + Send>> {
    let _span = debug_span!("fkit.batch_flush").entered();
    let mut rounds = 0u32;
    let mut delivered = 0usize;
    let mut first_panic = None;

    loop {
        let round = TURN.with(|turn| {
            turn.borrow_mut()
                .as_mut()
                .map(|turn| std::mem::take(&mut turn.queue))
                .unwrap_or_default()
        });
        if round.is_empty() {
            break;
        }
        rounds += 1;
        delivered += round.len();
        for delivery in round {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(delivery.run)) {
                first_panic.get_or_insert(payload);
            }
        }
    }

    debug!(rounds, delivered, "batch drained");
    first_panic
}

/// Holds back subscriber calls on this thread until dropped.
///
/// Scopes nest; only the outermost one drains the queue.
#[must_use = "notifications are released when the scope is dropped"]
pub struct BatchScope {
    _private: (),
}

impl BatchScope {
    /// Open a scope, or nest inside the one already open.
    pub fn new() -> Self {
        TURN.with(|turn| {
            turn.borrow_mut()
                .get_or_insert_with(|| Turn {
                    depth: 0,
                    draining: false,
                    queue: Vec::new(),
                })
                .depth += 1;
        });
        Self { _private: () }
    }
}

impl Default for BatchScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BatchScope {
    fn drop(&mut self) {
        let owns_drain = TURN.with(|turn| {
            let mut guard = turn.borrow_mut();
            let Some(turn) = guard.as_mut() else {
                return false;
            };
            turn.depth = turn.depth.saturating_sub(1);
            if turn.depth == 0 && !turn.draining {
                turn.draining = true;
                true
            } else {
                false
            }
        });
        if !owns_drain {
            return;
        }

        let first_panic = drain();
        TURN.with(|turn| *turn.borrow_mut() = None);
        if let Some(payload) = first_panic
            && !std::thread::panicking()
        {
            panic::resume_unwind(payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::Observable;
    use std::cell::Cell;
    use std::rc::Rc;

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(&T) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value: &T| sink.borrow_mut().push(value.clone()))
    }

    #[test]
    fn values_change_immediately_subscribers_wait() {
        let count = Observable::new(0u64);
        let (seen, record) = recorder();
        let _sub = count.subscribe(record);

        {
            let _batch = BatchScope::new();
            count.set(1);
            count.set(2);
            assert_eq!(count.get(), 2);
            assert!(seen.borrow().is_empty());
        }

        assert_eq!(*seen.borrow(), vec![2]);
        assert!(!is_batching());
    }

    #[test]
    fn only_outermost_scope_delivers() {
        let count = Observable::new(0u64);
        let (seen, record) = recorder();
        let _sub = count.subscribe(record);

        let outer = BatchScope::new();
        {
            let _inner = BatchScope::new();
            count.set(5);
        }
        assert!(seen.borrow().is_empty());
        assert!(is_batching());
        drop(outer);

        assert_eq!(*seen.borrow(), vec![5]);
    }

    #[test]
    fn changes_made_while_draining_are_delivered() {
        let clicks = Observable::new(0u64);
        let total = Observable::new(0u64);
        let forward = total.clone();
        let _link = clicks.subscribe(move |c| forward.set(c * 10));
        let (seen, record) = recorder();
        let _sub = total.subscribe(record);

        {
            let _batch = BatchScope::new();
            clicks.set(1);
        }

        assert_eq!(total.get(), 10);
        assert_eq!(*seen.borrow(), vec![10]);
        assert!(!is_batching());
    }

    #[test]
    fn scope_opened_by_a_subscriber_does_not_close_the_turn() {
        let first = Observable::new(0u64);
        let second = Observable::new(0u64);
        let forward = second.clone();
        let _link = first.subscribe(move |v| {
            let _nested = BatchScope::new();
            forward.set(*v + 1);
        });
        let (seen, record) = recorder();
        let _sub = second.subscribe(record);

        {
            let _batch = BatchScope::new();
            first.set(1);
        }

        assert_eq!(*seen.borrow(), vec![2]);
        assert!(!is_batching());
    }

    #[test]
    fn dropped_subscription_is_skipped_at_drain() {
        let count = Observable::new(0u64);
        let hits = Rc::new(Cell::new(0u32));
        let hits_clone = Rc::clone(&hits);
        let sub = count.subscribe(move |_| hits_clone.set(hits_clone.get() + 1));

        {
            let _batch = BatchScope::new();
            count.set(1);
            drop(sub);
        }

        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn panicking_subscriber_still_closes_the_turn() {
        let count = Observable::new(0u64);
        let _boom = count.subscribe(|_| panic!("boom"));
        let (seen, record) = recorder();
        let _sub = count.subscribe(record);

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _batch = BatchScope::new();
            count.set(3);
        }));

        assert!(result.is_err());
        assert_eq!(*seen.borrow(), vec![3]);
        assert!(!is_batching());
    }
}
