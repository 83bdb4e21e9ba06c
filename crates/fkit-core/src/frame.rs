#![forbid(unsafe_code)]

//! Frame = the render target for a single pass.
//!
//! A `Frame` is an append-only list of text lines. Components write lines in
//! render order; hosts read them back with [`Frame::lines`] or print the
//! frame via `Display`. Nesting is expressed by indentation through
//! [`Frame::indented`].
//!
//! # Usage
//!
//! ```
//! use fkit_core::frame::Frame;
//!
//! let mut frame = Frame::new();
//! frame.line("Count is 0");
//! frame.indented(|inner| inner.line("child"));
//! assert_eq!(frame.lines(), ["Count is 0", "  child"]);
//! ```

/// Indentation applied per nesting level.
const INDENT: &str = "  ";

/// Line-oriented render target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
    depth: usize,
}

impl Frame {
    /// Create an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the current nesting depth.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let mut out = INDENT.repeat(self.depth);
        out.push_str(text.as_ref());
        self.lines.push(out);
    }

    /// Render `f` one nesting level deeper.
    pub fn indented(&mut self, f: impl FnOnce(&mut Frame)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    /// Lines written so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if nothing was rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Discard all lines, keeping the allocation for the next pass.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.depth = 0;
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_appended_in_order() {
        let mut frame = Frame::new();
        frame.line("a");
        frame.line(String::from("b"));
        assert_eq!(frame.lines(), ["a", "b"]);
        assert_eq!(frame.len(), 2);
    }

    #[test]
    fn indentation_nests_and_restores() {
        let mut frame = Frame::new();
        frame.indented(|f| {
            f.line("one");
            f.indented(|g| g.line("two"));
        });
        frame.line("three");
        assert_eq!(frame.lines(), ["  one", "    two", "three"]);
    }

    #[test]
    fn clear_resets_depth_and_lines() {
        let mut frame = Frame::new();
        frame.line("x");
        frame.clear();
        assert!(frame.is_empty());
        frame.line("y");
        assert_eq!(frame.lines(), ["y"]);
    }

    #[test]
    fn display_joins_with_newlines() {
        let mut frame = Frame::new();
        frame.line("a");
        frame.line("b");
        assert_eq!(frame.to_string(), "a\nb\n");
    }
}
