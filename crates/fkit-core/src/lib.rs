#![forbid(unsafe_code)]

//! Core: geometry, input events, text frames, and the component contract.
//!
//! # Role in FrankenKit
//! `fkit-core` is the vocabulary layer. It owns the plain data types that
//! every other crate exchanges: window [`Size`](geometry::Size), input
//! [`Event`](event::Event)s, the line-oriented [`Frame`](frame::Frame) that
//! components render into, and the [`Component`](component::Component)
//! trait itself.
//!
//! # How it fits in the system
//! `fkit-runtime` builds stateful behaviors (counters, observers) on top of
//! these types, and `fkit-widgets` provides concrete presentational
//! components. Nothing in this crate holds state beyond a single render pass.

pub mod component;
pub mod event;
pub mod frame;
pub mod geometry;

pub use component::Component;
pub use event::Event;
pub use frame::Frame;
pub use geometry::Size;
