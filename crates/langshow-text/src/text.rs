#![forbid(unsafe_code)]

//! Span, Line and Text.

use langshow_style::Style;
use std::borrow::Cow;

/// A styled span of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span<'a> {
    /// The text content.
    pub content: Cow<'a, str>,
    /// Optional style for this span.
    pub style: Option<Style>,
}

impl<'a> Span<'a> {
    /// Create an unstyled span.
    #[inline]
    #[must_use]
    pub fn raw(content: impl Into<Cow<'a, str>>) -> Self {
        Self {
            content: content.into(),
            style: None,
        }
    }

    /// Create a styled span.
    #[inline]
    #[must_use]
    pub fn styled(content: impl Into<Cow<'a, str>>, style: Style) -> Self {
        Self {
            content: content.into(),
            style: Some(style),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Display width in cells.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        crate::display_width(&self.content)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Detach from the borrowed source.
    #[must_use]
    pub fn into_owned(self) -> Span<'static> {
        Span {
            content: Cow::Owned(self.content.into_owned()),
            style: self.style,
        }
    }
}

impl<'a> From<&'a str> for Span<'a> {
    fn from(s: &'a str) -> Self {
        Self::raw(s)
    }
}

impl From<String> for Span<'static> {
    fn from(s: String) -> Self {
        Self::raw(s)
    }
}

impl Default for Span<'_> {
    fn default() -> Self {
        Self::raw("")
    }
}

/// A single line of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    spans: Vec<Span<'static>>,
}

impl Line {
    /// Create an empty line.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Create a line from spans.
    #[must_use]
    pub fn from_spans<'a>(spans: impl IntoIterator<Item = Span<'a>>) -> Self {
        Self {
            spans: spans.into_iter().map(Span::into_owned).collect(),
        }
    }

    /// Create a line from a single raw string.
    #[inline]
    #[must_use]
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::raw(content.into())],
        }
    }

    /// True when there are no spans or every span is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(Span::is_empty)
    }

    /// Number of spans.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Display width in cells.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    #[inline]
    #[must_use]
    pub fn spans(&self) -> &[Span<'static>] {
        &self.spans
    }

    /// Apply a base style to all spans.
    ///
    /// A span's own style wins over the base for conflicting properties.
    pub fn apply_base_style(&mut self, base: Style) {
        for span in &mut self.spans {
            span.style = Some(match span.style {
                Some(existing) => base.patch(existing),
                None => base,
            });
        }
    }

    /// Merge neighbouring spans that carry the same style and drop empty
    /// spans. The plain text is unchanged.
    pub fn coalesce(&mut self) {
        let mut merged: Vec<Span<'static>> = Vec::with_capacity(self.spans.len());
        for span in self.spans.drain(..) {
            if span.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.style == span.style => {
                    last.content.to_mut().push_str(&span.content);
                }
                _ => merged.push(span),
            }
        }
        self.spans = merged;
    }

    /// The plain text content.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        self.spans.iter().map(Span::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Span<'static>> {
        self.spans.iter()
    }
}

impl<'a> From<Span<'a>> for Line {
    fn from(span: Span<'a>) -> Self {
        Self {
            spans: vec![span.into_owned()],
        }
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self::raw(s)
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a Span<'static>;
    type IntoIter = std::slice::Iter<'a, Span<'static>>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

/// Multi-line styled text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    lines: Vec<Line>,
}

impl Text {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = Line>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Width of the widest line.
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines.iter().map(Line::width).max().unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Plain text with lines joined by `'\n'`.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&line.to_plain_text());
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }
}

impl From<Line> for Text {
    fn from(line: Line) -> Self {
        Self { lines: vec![line] }
    }
}

impl FromIterator<Line> for Text {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}

impl<'a> IntoIterator for &'a Text {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
