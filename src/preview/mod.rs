//! Preview rendering of committed markup.
//!
//! The preview view reads the shared content store at render time and
//! projects the markup into styled lines. Parsing is infallible: whatever
//! the compose area emitted is rendered as-is, with no validation.

mod parser;

pub use parser::render_markup;

/// How a preview line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Heading with its level (1-6)
    Heading(u8),
    Paragraph,
    /// Bulleted or numbered list item
    ListItem,
    /// Block quote body
    Quote,
    /// Verbatim code block line
    CodeBlock,
    /// Thematic break
    Rule,
    /// Spacing between blocks
    Blank,
}

/// Inline styling flags for a span of preview text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineMarks {
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
}

/// A styled fragment of a preview line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSpan {
    pub text: String,
    pub marks: InlineMarks,
}

impl PreviewSpan {
    pub fn new(text: impl Into<String>, marks: InlineMarks) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, InlineMarks::default())
    }
}

/// One logical line of the rendered preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    pub kind: LineKind,
    pub spans: Vec<PreviewSpan>,
}

impl PreviewLine {
    pub fn new(kind: LineKind, spans: Vec<PreviewSpan>) -> Self {
        Self { kind, spans }
    }

    pub fn blank() -> Self {
        Self::new(LineKind::Blank, Vec::new())
    }

    /// Concatenated text of the line, for tests and plain projection.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}
