#![forbid(unsafe_code)]

//! Read-only view of the observed window size.

use fkit_core::component::Component;
use fkit_core::frame::Frame;
use fkit_core::geometry::Size;

/// Heading shown above the size line.
pub const TITLE: &str = "Hello FrankenKit";

/// Shows the title and, once a size has been observed, its dimensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowSizeView;

impl Component for WindowSizeView {
    type Props = Option<Size>;

    fn render(&self, props: &Option<Size>, frame: &mut Frame) {
        frame.line(TITLE);
        if let Some(size) = props {
            frame.line(format!(
                "window height, width = {}, {}",
                size.height, size.width
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_size_renders_title_only() {
        let mut frame = Frame::new();
        WindowSizeView.render(&None, &mut frame);
        assert_eq!(frame.lines(), [TITLE]);
    }

    #[test]
    fn size_line_lists_height_first() {
        let mut frame = Frame::new();
        WindowSizeView.render(&Some(Size::new(1280, 720)), &mut frame);
        assert_eq!(frame.lines(), [TITLE, "window height, width = 720, 1280"]);
    }
}
