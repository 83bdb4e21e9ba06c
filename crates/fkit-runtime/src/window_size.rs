#![forbid(unsafe_code)]

//! Window-size observation.
//!
//! A [`DimensionSource`] is anything that knows the current window size and
//! can call listeners back when it changes. [`WindowDimensions`] is the
//! in-memory implementation hosts feed with resize events; tests substitute
//! their own sources.
//!
//! [`WindowSizeObserver`] is the consumer side. Activating one registers a
//! single listener; each callback re-reads the source and stores the new
//! size in an [`Observable`]. The registration handle lives in a private
//! guard whose `Drop` unregisters it, so a listener is released exactly once
//! per activation and cannot be registered twice.
//!
//! # Lifecycle
//!
//! ```text
//! activate ──▶ add_listener (once)      value = None
//!    │
//!    ├─ resize ─▶ listener ─▶ value = Some(source.current_size())
//!    ├─ resize ─▶ listener ─▶ value = Some(..)   (last write wins)
//!    │
//! deactivate / drop ──▶ remove_listener (once)
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use fkit_core::event::Event;
use fkit_core::geometry::Size;
use tracing::{debug, trace};

use crate::reactive::{Observable, Subscription};

/// Callback invoked by a source when its dimensions change.
pub type Listener = Rc<dyn Fn()>;

/// Handle identifying a registered listener within one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Create a listener id from a raw value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// External source of window dimensions.
pub trait DimensionSource {
    /// Current dimensions.
    fn current_size(&self) -> Size;

    /// Register a listener called after every dimension change.
    fn add_listener(&self, listener: Listener) -> ListenerId;

    /// Unregister a listener. Unknown ids are ignored.
    fn remove_listener(&self, id: ListenerId);
}

struct DimensionsInner {
    size: Size,
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

/// In-memory dimension source driven by resize events.
pub struct WindowDimensions {
    inner: RefCell<DimensionsInner>,
}

impl std::fmt::Debug for WindowDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("WindowDimensions")
            .field("size", &inner.size)
            .field("listener_count", &inner.listeners.len())
            .finish()
    }
}

impl WindowDimensions {
    /// Create a source reporting `size` until the first resize.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            inner: RefCell::new(DimensionsInner {
                size,
                next_id: 0,
                listeners: Vec::new(),
            }),
        }
    }

    /// Apply a resize and call every listener, in registration order.
    ///
    /// Listeners fire even if the size is unchanged; deduplication is the
    /// observer's job.
    pub fn resize(&self, size: Size) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            inner.size = size;
            inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        trace!(%size, listeners = listeners.len(), "window resized");
        for listener in &listeners {
            listener();
        }
    }

    /// Feed an input event. Returns `true` if it was a resize.
    pub fn dispatch(&self, event: &Event) -> bool {
        match event.resize_size() {
            Some(size) => {
                self.resize(size);
                true
            }
            None => false,
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl Default for WindowDimensions {
    fn default() -> Self {
        Self::new(Size::default())
    }
}

impl DimensionSource for WindowDimensions {
    fn current_size(&self) -> Size {
        self.inner.borrow().size
    }

    fn add_listener(&self, listener: Listener) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, listener));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(existing, _)| *existing != id);
    }
}

/// Owns one listener registration; unregisters on drop.
struct Registration {
    source: Rc<dyn DimensionSource>,
    id: ListenerId,
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.source.remove_listener(self.id);
        debug!(listener = self.id.raw(), "window size listener removed");
    }
}

/// Latest window size observed from a [`DimensionSource`].
///
/// Each observer owns its listener and its stored value; observers on the
/// same source never see each other's state.
pub struct WindowSizeObserver {
    value: Observable<Option<Size>>,
    registration: Registration,
}

impl std::fmt::Debug for WindowSizeObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowSizeObserver")
            .field("value", &self.value.get())
            .field("listener", &self.registration.id)
            .finish()
    }
}

impl WindowSizeObserver {
    /// Register with `source`. The stored value is `None` until the first
    /// resize notification.
    pub fn activate(source: Rc<dyn DimensionSource>) -> Self {
        let value = Observable::new(None);
        let sink = value.clone();
        let weak: Weak<dyn DimensionSource> = Rc::downgrade(&source);
        let listener: Listener = Rc::new(move || {
            if let Some(source) = weak.upgrade() {
                sink.set(Some(source.current_size()));
            }
        });
        let id = source.add_listener(listener);
        debug!(listener = id.raw(), "window size listener added");
        Self {
            value,
            registration: Registration { source, id },
        }
    }

    /// Latest observed size, or `None` before the first resize.
    #[must_use]
    pub fn get(&self) -> Option<Size> {
        self.value.get()
    }

    /// Run `callback` whenever the observed size changes.
    pub fn subscribe(&self, callback: impl Fn(&Option<Size>) + 'static) -> Subscription {
        self.value.subscribe(callback)
    }

    /// Underlying observable, for wiring into loggers or bindings.
    #[must_use]
    pub fn observable(&self) -> &Observable<Option<Size>> {
        &self.value
    }

    /// Id of this activation's listener.
    #[must_use]
    pub fn listener_id(&self) -> ListenerId {
        self.registration.id
    }

    /// Tear down, unregistering the listener.
    pub fn deactivate(self) {
        drop(self);
    }
}
