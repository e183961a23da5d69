#![forbid(unsafe_code)]

//! Token model.

use std::ops::Range;

/// Token categories produced by the tokenizers.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A line comment, from the marker to end of line.
    Comment,
    /// A double-quoted string literal, quotes included.
    String,
    /// A reserved word.
    Keyword,
    /// A built-in type name.
    Type,
    /// Anything else. Unstyled.
    Plain,
}

/// A classified byte range of a source line.
///
/// Ranges are byte offsets into the line (or into the whole buffer for
/// [`Tokenizer::tokenize`](crate::tokenizer::Tokenizer::tokenize)) and always
/// fall on `char` boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: Range<usize>,
}

impl Token {
    /// Create a token. Panics in debug builds if the range is inverted.
    pub fn new(kind: TokenKind, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end, "token range must be ordered");
        Self { kind, range }
    }

    /// Token length in bytes.
    pub fn len(&self) -> usize {
        self.range.end.saturating_sub(self.range.start)
    }

    pub fn is_empty(&self) -> bool {
        self.range.start >= self.range.end
    }

    /// The token's text within `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range.clone()]
    }
}

/// Validate that all token ranges are ordered, in-bounds and non-overlapping.
pub fn validate_tokens(source: &str, tokens: &[Token]) -> bool {
    let len = source.len();
    let mut prev_end = 0;
    for token in tokens {
        if token.range.start > token.range.end
            || token.range.end > len
            || token.range.start < prev_end
        {
            return false;
        }
        prev_end = token.range.end;
    }
    true
}

/// Whether `tokens` partition `source` exactly: valid, gap-free, and
/// covering every byte.
pub fn is_lossless(source: &str, tokens: &[Token]) -> bool {
    let mut pos = 0;
    for token in tokens {
        if token.range.start != pos || token.is_empty() {
            return false;
        }
        if token.range.end > source.len() || !source.is_char_boundary(token.range.end) {
            return false;
        }
        pos = token.range.end;
    }
    pos == source.len()
}

/// Concatenate the text of every token.
pub fn reconstruct(source: &str, tokens: &[Token]) -> String {
    let mut out = String::with_capacity(source.len());
    for token in tokens {
        if let Some(text) = source.get(token.range.clone()) {
            out.push_str(text);
        }
    }
    out
}
