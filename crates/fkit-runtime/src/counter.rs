#![forbid(unsafe_code)]

//! Counter augmentation for presentational components.
//!
//! [`with_counter`] wraps any [`Component`] whose props are
//! [`CounterProps<P>`] and returns a [`WithCounter`] factory. Each call to
//! [`WithCounter::mount`] produces a [`Counted`] instance that owns its own
//! count, accepts the plain props `P`, and renders the wrapped component
//! with `count` and `on_increment` injected next to the forwarded props.
//!
//! The wrapped component never sees the counter storage; it only receives
//! the current total and an [`Incrementer`] it may trigger from whichever
//! event it cares about (a click, a hover).
//!
//! # Invariants
//!
//! 1. A fresh instance starts at 0.
//! 2. After `k` triggers the count is `step * k` (saturating at `u64::MAX`).
//! 3. Every trigger applies [`next_count`] to the latest stored total, so
//!    triggers queued in one batch never lose updates.
//! 4. Instances never share storage, even when mounted from the same
//!    factory.

use std::rc::Rc;
use std::str::FromStr;

use fkit_core::component::Component;
use fkit_core::event::Event;
use fkit_core::frame::Frame;
use thiserror::Error;
use tracing::{debug, trace};

use crate::reactive::{Observable, Subscription};

/// Error raised when a counter step is configured with an invalid value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// The step was negative.
    #[error("counter step must be non-negative, got {0}")]
    Negative(i128),
    /// The step does not fit in a `u64`.
    #[error("counter step {0} is out of range")]
    OutOfRange(i128),
    /// The step could not be parsed as an integer.
    #[error("counter step {input:?} is not an integer")]
    NotANumber {
        /// Offending input, untrimmed.
        input: String,
    },
}

/// Amount added to a counter on each increment.
///
/// Always non-negative. Zero is legal: the counter never advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Step(u64);

impl Step {
    /// The default step.
    pub const ONE: Self = Self(1);

    /// Create a step from an unsigned amount.
    #[inline]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// The raw amount.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<u64> for Step {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl TryFrom<i128> for Step {
    type Error = StepError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(StepError::Negative(value));
        }
        u64::try_from(value)
            .map(Self)
            .map_err(|_| StepError::OutOfRange(value))
    }
}

impl TryFrom<i64> for Step {
    type Error = StepError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_from(i128::from(value))
    }
}

impl FromStr for Step {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i128 = s.trim().parse().map_err(|_| StepError::NotANumber {
            input: s.to_string(),
        })?;
        Self::try_from(value)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The counter transition: the next total given the previous one.
#[inline]
#[must_use]
pub const fn next_count(prev: u64, step: Step) -> u64 {
    prev.saturating_add(step.0)
}

/// Zero-argument increment trigger handed to wrapped components.
///
/// Cloning is cheap; every clone targets the same counter.
#[derive(Clone)]
pub struct Incrementer {
    count: Observable<u64>,
    step: Step,
}

impl Incrementer {
    /// Advance the counter by its step.
    pub fn trigger(&self) {
        let step = self.step;
        self.count.update(|count| {
            let next = next_count(*count, step);
            trace!(prev = *count, next, step = step.get(), "counter increment");
            *count = next;
        });
    }

    /// Step applied by [`trigger`](Self::trigger).
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }
}

impl std::fmt::Debug for Incrementer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Incrementer")
            .field("step", &self.step)
            .finish_non_exhaustive()
    }
}

/// Props received by a counter-augmented component.
#[derive(Debug, Clone)]
pub struct CounterProps<P> {
    /// Current total.
    pub count: u64,
    /// Trigger that advances `count` by the configured step.
    pub on_increment: Incrementer,
    /// Props passed to the mounted instance, forwarded unchanged.
    pub props: P,
}

/// Counter-augmented component factory returned by [`with_counter`].
///
/// Holds the wrapped component and the step; owns no counter state itself.
pub struct WithCounter<C> {
    inner: Rc<C>,
    step: Step,
}

impl<C> Clone for WithCounter<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            step: self.step,
        }
    }
}

impl<C> std::fmt::Debug for WithCounter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WithCounter")
            .field("step", &self.step)
            .finish_non_exhaustive()
    }
}

/// Wrap `inner` with counter state advancing by `step` per increment.
///
/// Use [`Step::default()`] for the conventional step of 1.
pub fn with_counter<C, P>(inner: C, step: Step) -> WithCounter<C>
where
    C: Component<Props = CounterProps<P>>,
{
    WithCounter {
        inner: Rc::new(inner),
        step,
    }
}

impl<C> WithCounter<C> {
    /// Step every mounted instance uses.
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    /// Create an instance with a fresh counter at 0.
    pub fn mount(&self) -> Counted<C> {
        debug!(step = self.step.get(), "counter mounted");
        Counted {
            inner: Rc::clone(&self.inner),
            step: self.step,
            count: Observable::new(0),
        }
    }
}

/// A mounted counter-augmented component.
///
/// Renders with the plain props `P` of the wrapped component's
/// `CounterProps<P>`; the counter fields are filled in here.
pub struct Counted<C> {
    inner: Rc<C>,
    step: Step,
    count: Observable<u64>,
}

impl<C> std::fmt::Debug for Counted<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Counted")
            .field("step", &self.step)
            .field("count", &self.count.get())
            .finish_non_exhaustive()
    }
}

impl<C> Counted<C> {
    /// Current total.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count.get()
    }

    /// Step applied per increment.
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    /// Trigger bound to this instance's counter.
    #[must_use]
    pub fn incrementer(&self) -> Incrementer {
        Incrementer {
            count: self.count.clone(),
            step: self.step,
        }
    }

    /// Advance the counter once.
    pub fn increment(&self) {
        self.incrementer().trigger();
    }

    /// Number of times the count has changed. Hosts compare it to decide
    /// whether to re-render.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.count.version()
    }

    /// Run `callback` with the new total whenever it changes.
    pub fn subscribe(&self, callback: impl Fn(&u64) + 'static) -> Subscription {
        self.count.subscribe(callback)
    }

    fn props_for<P: Clone>(&self, props: &P) -> CounterProps<P> {
        CounterProps {
            count: self.count.get(),
            on_increment: self.incrementer(),
            props: props.clone(),
        }
    }
}

impl<C, P> Component for Counted<C>
where
    C: Component<Props = CounterProps<P>>,
    P: Clone,
{
    type Props = P;

    fn render(&self, props: &P, frame: &mut Frame) {
        self.inner.render(&self.props_for(props), frame);
    }

    fn handle_event(&self, props: &P, event: &Event) -> bool {
        let consumed = self.inner.handle_event(&self.props_for(props), event);
        trace!(event = event.label(), consumed, "counter event");
        consumed
    }
}
