#![forbid(unsafe_code)]

//! Click and hover counter displays.
//!
//! Both components show the same button and total; they differ only in
//! which event triggers `on_increment`. Neither keeps state: wrap them with
//! [`with_counter`] (or use [`click_counter`] / [`hover_counter`]) to get a
//! mountable counter.

use fkit_core::component::Component;
use fkit_core::event::Event;
use fkit_core::frame::Frame;
use fkit_runtime::counter::{CounterProps, Step, WithCounter, with_counter};

/// Step used by the stock click counter.
pub const CLICK_STEP: Step = Step::new(10);

/// Step used by the stock hover counter.
pub const HOVER_STEP: Step = Step::new(5);

/// Props forwarded to a counter display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonProps {
    /// Button caption.
    pub label: String,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            label: "Click".to_string(),
        }
    }
}

fn render_counter(props: &CounterProps<ButtonProps>, frame: &mut Frame) {
    frame.line(format!("[ {} ]", props.props.label));
    frame.line(format!("Count is {}", props.count));
}

/// Counter display advanced by clicks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickCounter;

impl Component for ClickCounter {
    type Props = CounterProps<ButtonProps>;

    fn render(&self, props: &Self::Props, frame: &mut Frame) {
        render_counter(props, frame);
    }

    fn handle_event(&self, props: &Self::Props, event: &Event) -> bool {
        match event {
            Event::Click => {
                props.on_increment.trigger();
                true
            }
            _ => false,
        }
    }
}

/// Counter display advanced by hovering.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoverCounter;

impl Component for HoverCounter {
    type Props = CounterProps<ButtonProps>;

    fn render(&self, props: &Self::Props, frame: &mut Frame) {
        render_counter(props, frame);
    }

    fn handle_event(&self, props: &Self::Props, event: &Event) -> bool {
        match event {
            Event::Hover => {
                props.on_increment.trigger();
                true
            }
            _ => false,
        }
    }
}

/// [`ClickCounter`] wrapped with counter state.
pub fn click_counter(step: Step) -> WithCounter<ClickCounter> {
    with_counter(ClickCounter, step)
}

/// [`HoverCounter`] wrapped with counter state.
pub fn hover_counter(step: Step) -> WithCounter<HoverCounter> {
    with_counter(HoverCounter, step)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<C: Component<Props = ButtonProps>>(component: &C) -> Vec<String> {
        let mut frame = Frame::new();
        component.render(&ButtonProps::default(), &mut frame);
        frame.lines().to_vec()
    }

    #[test]
    fn click_counter_counts_clicks_only() {
        let counter = click_counter(CLICK_STEP).mount();
        let props = ButtonProps::default();
        assert!(counter.handle_event(&props, &Event::Click));
        assert!(!counter.handle_event(&props, &Event::Hover));
        assert!(counter.handle_event(&props, &Event::Click));
        assert_eq!(render(&counter), ["[ Click ]", "Count is 20"]);
    }

    #[test]
    fn hover_counter_counts_hovers_only() {
        let counter = hover_counter(HOVER_STEP).mount();
        let props = ButtonProps::default();
        assert!(!counter.handle_event(&props, &Event::Click));
        assert!(counter.handle_event(&props, &Event::Hover));
        assert_eq!(render(&counter), ["[ Click ]", "Count is 5"]);
    }

    #[test]
    fn forwarded_label_reaches_display() {
        let counter = click_counter(Step::default()).mount();
        let mut frame = Frame::new();
        counter.render(
            &ButtonProps {
                label: "Tap".to_string(),
            },
            &mut frame,
        );
        assert_eq!(frame.lines(), ["[ Tap ]", "Count is 0"]);
    }

    #[test]
    fn stock_counters_do_not_share_state() {
        let click = click_counter(CLICK_STEP).mount();
        let hover = hover_counter(HOVER_STEP).mount();
        click.increment();
        assert_eq!(click.count(), 10);
        assert_eq!(hover.count(), 0);
    }
}
