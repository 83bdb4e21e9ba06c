#![forbid(unsafe_code)]

//! Listener lifecycle tests for `WindowSizeObserver` against an
//! instrumented source.
//!
//! Run:
//!   cargo test -p fkit-runtime --test window_size_lifecycle

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fkit_core::geometry::Size;
use fkit_runtime::{BatchScope, DimensionSource, Listener, ListenerId, WindowSizeObserver};

/// Source that records every registration call.
#[derive(Default)]
struct CountingSource {
    size: Cell<Size>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    added: Cell<u32>,
    removed: RefCell<Vec<ListenerId>>,
}

impl CountingSource {
    fn fire(&self, size: Size) {
        self.size.set(size);
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl DimensionSource for CountingSource {
    fn current_size(&self) -> Size {
        self.size.get()
    }

    fn add_listener(&self, listener: Listener) -> ListenerId {
        let id = ListenerId::new(self.next_id.get());
        self.next_id.set(id.raw() + 1);
        self.added.set(self.added.get() + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.removed.borrow_mut().push(id);
        self.listeners.borrow_mut().retain(|(existing, _)| *existing != id);
    }
}

#[test]
fn activation_registers_exactly_once() {
    let source = Rc::new(CountingSource::default());
    let _observer = WindowSizeObserver::activate(source.clone());
    assert_eq!(source.added.get(), 1);
    assert!(source.removed.borrow().is_empty());
}

#[test]
fn deactivation_unregisters_exactly_once_after_many_changes() {
    let source = Rc::new(CountingSource::default());
    let observer = WindowSizeObserver::activate(source.clone());
    let id = observer.listener_id();

    for w in 1..=25 {
        source.fire(Size::new(w, w * 2));
    }
    assert_eq!(observer.get(), Some(Size::new(25, 50)));

    observer.deactivate();
    assert_eq!(*source.removed.borrow(), vec![id]);
    assert!(source.listeners.borrow().is_empty());
}

#[test]
fn reactivation_registers_again_with_fresh_state() {
    let source = Rc::new(CountingSource::default());

    let first = WindowSizeObserver::activate(source.clone());
    source.fire(Size::new(300, 200));
    assert_eq!(first.get(), Some(Size::new(300, 200)));
    drop(first);

    let second = WindowSizeObserver::activate(source.clone());
    assert_eq!(second.get(), None, "no residue from the prior activation");
    assert_eq!(source.added.get(), 2);
    assert_eq!(source.removed.borrow().len(), 1);

    source.fire(Size::new(10, 10));
    assert_eq!(second.get(), Some(Size::new(10, 10)));
}

#[test]
fn repeated_mount_cycles_do_not_leak_listeners() {
    let source = Rc::new(CountingSource::default());
    for cycle in 0..100 {
        let observer = WindowSizeObserver::activate(source.clone());
        source.fire(Size::new(cycle, cycle));
        drop(observer);
    }
    assert_eq!(source.added.get(), 100);
    assert_eq!(source.removed.borrow().len(), 100);
    assert!(source.listeners.borrow().is_empty());
}

#[test]
fn concurrent_activations_keep_separate_values() {
    let source = Rc::new(CountingSource::default());
    let a = WindowSizeObserver::activate(source.clone());
    source.fire(Size::new(1, 1));
    let b = WindowSizeObserver::activate(source.clone());

    assert_eq!(a.get(), Some(Size::new(1, 1)));
    assert_eq!(b.get(), None);

    drop(a);
    source.fire(Size::new(2, 2));
    assert_eq!(b.get(), Some(Size::new(2, 2)));
    assert_eq!(source.listeners.borrow().len(), 1);
}

#[test]
fn subscriber_dropped_inside_batch_is_not_called() {
    let source = Rc::new(CountingSource::default());
    let observer = WindowSizeObserver::activate(source.clone());
    let hits = Rc::new(Cell::new(0u32));
    let hits_clone = Rc::clone(&hits);
    let sub = observer.subscribe(move |_| hits_clone.set(hits_clone.get() + 1));

    {
        let _batch = BatchScope::new();
        source.fire(Size::new(3, 3));
        drop(sub);
    }

    assert_eq!(observer.get(), Some(Size::new(3, 3)));
    assert_eq!(hits.get(), 0);
}

#[test]
fn resize_inside_batch_reaches_subscriber_once() {
    let source = Rc::new(CountingSource::default());
    let observer = WindowSizeObserver::activate(source.clone());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = Rc::clone(&seen);
    let _sub = observer.subscribe(move |size| seen_clone.borrow_mut().push(*size));

    {
        let _batch = BatchScope::new();
        source.fire(Size::new(3, 3));
        source.fire(Size::new(4, 4));
    }

    assert_eq!(*seen.borrow(), vec![Some(Size::new(4, 4))]);
}
