#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! Events are delivered to mounted components by whatever host drives them
//! (the demo script, a test, a real backend). Components decide which
//! events they react to; the host never interprets them.

use crate::geometry::Size;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A pointer click (press and release) on the component.
    Click,

    /// The pointer moved over the component.
    Hover,

    /// The window was resized.
    Resize {
        /// New window width.
        width: u32,
        /// New window height.
        height: u32,
    },

    /// A form was submitted.
    Submit,
}

impl Event {
    /// The new size carried by a resize event.
    #[must_use]
    pub const fn resize_size(&self) -> Option<Size> {
        match self {
            Self::Resize { width, height } => Some(Size::new(*width, *height)),
            _ => None,
        }
    }

    /// Short label for logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Hover => "hover",
            Self::Resize { .. } => "resize",
            Self::Submit => "submit",
        }
    }
}
