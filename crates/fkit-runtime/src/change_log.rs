#![forbid(unsafe_code)]

//! Structured logging of observable changes.
//!
//! [`log_changes`] is the logging hook components attach to any piece of
//! state they want traced: every new value is emitted as a `tracing` event
//! on the `fkit::changes` target with the label and the value's `Debug`
//! form. Drop the returned guard to stop logging.

use std::fmt::Debug;

use tracing::info;

use crate::reactive::{Observable, Subscription};

/// Target used for change events.
pub const CHANGE_TARGET: &str = "fkit::changes";

/// Emit an `info` event each time `observable` changes.
pub fn log_changes<T>(observable: &Observable<T>, label: &'static str) -> Subscription
where
    T: Clone + PartialEq + Debug + 'static,
{
    let source = observable.clone();
    observable.subscribe(move |value| {
        info!(
            target: CHANGE_TARGET,
            label,
            version = source.version(),
            value = ?value,
            "state changed"
        );
    })
}
