#![forbid(unsafe_code)]

//! The component contract.

use crate::event::Event;
use crate::frame::Frame;

/// A `Component` is a presentational unit.
///
/// Presentational components keep no state of their own: what they show
/// comes in through `Props`, and what they do goes out through callbacks
/// carried in `Props`. State is layered on from the outside by a wrapper
/// that owns it and also implements `Component` (see
/// `fkit_runtime::counter::with_counter`).
pub trait Component {
    /// Inputs for one render pass.
    type Props;

    /// Render the component into the frame.
    fn render(&self, props: &Self::Props, frame: &mut Frame);

    /// React to an input event.
    ///
    /// Returns `true` if the event was consumed. The default ignores
    /// every event.
    fn handle_event(&self, _props: &Self::Props, _event: &Event) -> bool {
        false
    }
}

impl<C: Component + ?Sized> Component for &C {
    type Props = C::Props;

    fn render(&self, props: &Self::Props, frame: &mut Frame) {
        (**self).render(props, frame);
    }

    fn handle_event(&self, props: &Self::Props, event: &Event) -> bool {
        (**self).handle_event(props, event)
    }
}

impl<C: Component + ?Sized> Component for std::rc::Rc<C> {
    type Props = C::Props;

    fn render(&self, props: &Self::Props, frame: &mut Frame) {
        (**self).render(props, frame);
    }

    fn handle_event(&self, props: &Self::Props, event: &Event) -> bool {
        (**self).handle_event(props, event)
    }
}
