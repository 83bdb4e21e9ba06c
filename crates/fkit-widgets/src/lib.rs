#![forbid(unsafe_code)]

//! Components for FrankenKit.
//!
//! - [`counters`]: click and hover counter displays, stateless until
//!   wrapped with `fkit_runtime::with_counter`.
//! - [`window_size_view`]: renders the size held by a
//!   `fkit_runtime::WindowSizeObserver`.
//! - [`contacts`]: the phone book (form, sorted list, table).

pub mod contacts;
pub mod counters;
pub mod window_size_view;

pub use contacts::{ContactList, ContactRecord, InformationTable, PhoneBook, PhoneBookForm};
pub use counters::{ButtonProps, ClickCounter, HoverCounter, click_counter, hover_counter};
pub use window_size_view::WindowSizeView;
