//! Conversion options.

/// Spaces per nesting level used by default when printing.
pub const DEFAULT_INDENT: usize = 2;

/// Settings threaded through assembly and printing.
///
/// ```
/// use map2svg::Options;
///
/// let options = Options::new().with_visible_outlines(true).with_indent(4);
/// assert!(options.always_show_outlines);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Omit the stroke shape entirely.
    pub suppress_outlines: bool,
    /// Render strokes without requiring hover. Ignored when outlines are suppressed.
    pub always_show_outlines: bool,
    /// Spaces per nesting level in the printed output.
    pub indent: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            suppress_outlines: false,
            always_show_outlines: false,
            indent: DEFAULT_INDENT,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suppressed_outlines(mut self, suppress: bool) -> Self {
        self.suppress_outlines = suppress;
        self
    }

    pub fn with_visible_outlines(mut self, visible: bool) -> Self {
        self.always_show_outlines = visible;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
