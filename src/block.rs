/// Inline text runs with formatting. A run carries at most one style and
/// never nests; delimiters are already stripped from the content.
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
}

impl Span {
    /// The run's text content.
    pub fn content(&self) -> &str {
        match self {
            Span::Text(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
        }
    }
}

/// Block-level elements parsed from Markdown. An oversized source line
/// becomes a run of sibling blocks of the same variant, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, content: Vec<Span> },
    Paragraph { content: Vec<Span> },
    CodeBlock { language: String, content: String },
    BulletItem { content: Vec<Span> },
    NumberedItem { content: Vec<Span> },
}
