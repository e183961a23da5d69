#![forbid(unsafe_code)]

//! Styled text primitives for langshow.
//!
//! - [`Span`] - a run of text with an optional style
//! - [`Line`] - a line of spans
//! - [`Text`] - multi-line styled text
//!
//! # Example
//! ```
//! use langshow_style::Style;
//! use langshow_text::{Line, Span, Text};
//!
//! let line = Line::from_spans([
//!     Span::styled("fun", Style::new().bold()),
//!     Span::raw(" main() {"),
//! ]);
//! let text = Text::from_lines([line, Line::raw("}")]);
//! assert_eq!(text.height(), 2);
//! assert_eq!(text.to_plain_text(), "fun main() {\n}");
//! ```

pub mod text;

pub use text::{Line, Span, Text};

use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
#[inline]
#[must_use]
pub fn display_width(s: &str) -> usize {
    if s.is_ascii() {
        return s.len();
    }
    s.width()
}
