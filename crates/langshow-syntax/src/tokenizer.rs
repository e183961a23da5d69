#![forbid(unsafe_code)]

//! Tokenizers and the tokenizer registry.
//!
//! [`KeywordTokenizer`] implements the showcase scanner: at each position it
//! tries, in order, a line comment, a double-quoted string, a keyword, a type
//! name, and finally falls back to a single plain character. The first rule
//! that matches wins. Keywords and types are tried in declared order, so a
//! shorter word declared earlier shadows a longer one sharing its prefix.

use std::collections::HashMap;
use std::sync::Arc;

use crate::token::{Token, TokenKind};

// ---------------------------------------------------------------------------
// Tokenizer trait
// ---------------------------------------------------------------------------

/// Core tokenizer abstraction.
///
/// Lines are independent: no state is carried from one line to the next, so
/// callers may tokenize lines in any order.
pub trait Tokenizer: Send + Sync {
    /// Human-readable name (e.g. "Gink").
    fn name(&self) -> &'static str;

    /// File extensions this tokenizer handles (without dots).
    fn extensions(&self) -> &'static [&'static str];

    /// Tokenize a single line. Token ranges are byte offsets within `line`.
    ///
    /// Implementations must return a lossless partition of `line`.
    fn tokenize_line(&self, line: &str) -> Vec<Token>;

    /// Tokenize a full text buffer.
    ///
    /// Splits on LF, CRLF and bare CR, tokenizes each line, and shifts token
    /// ranges to offsets into `text`. Line terminators are not covered by any
    /// token.
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for (offset, line) in split_lines(text) {
            tokens.extend(self.tokenize_line(line).into_iter().map(|mut token| {
                token.range.start += offset;
                token.range.end += offset;
                token
            }));
        }
        tokens
    }
}

/// Lines of `text` with their byte offsets.
///
/// LF, CRLF and bare CR all end a line and belong to no line. `""` is one
/// empty line and a trailing terminator yields a trailing empty line.
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines {
        text,
        next: Some(0),
    }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    text: &'a str,
    next: Option<usize>,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next?;
        let bytes = self.text.as_bytes();
        let end = bytes[start..]
            .iter()
            .position(|&b| b == b'\n' || b == b'\r')
            .map_or(bytes.len(), |i| start + i);
        self.next = match bytes.get(end) {
            None => None,
            Some(b'\r') if bytes.get(end + 1) == Some(&b'\n') => Some(end + 2),
            Some(_) => Some(end + 1),
        };
        Some((start, &self.text[start..end]))
    }
}

// ---------------------------------------------------------------------------
// KeywordTokenizer
// ---------------------------------------------------------------------------

/// Configuration for a [`KeywordTokenizer`].
#[derive(Debug, Clone, Copy)]
pub struct KeywordTokenizerConfig {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    /// Line comment marker. Empty disables comments.
    pub line_comment: &'static str,
    /// Reserved words, in match priority order.
    ///
    /// A word matches only where a word boundary follows it. For a word
    /// ending in punctuation (`a.`) that means the next character must be
    /// an identifier character.
    pub keywords: &'static [&'static str],
    /// Built-in type names, in match priority order. Tried after keywords.
    pub types: &'static [&'static str],
}

/// A total, stateless, first-match-wins line scanner.
#[derive(Debug, Clone)]
pub struct KeywordTokenizer {
    config: KeywordTokenizerConfig,
}

impl KeywordTokenizer {
    pub const fn new(config: KeywordTokenizerConfig) -> Self {
        Self { config }
    }

    /// Length of a closed `"..."` literal at the start of `rest`.
    fn scan_string(rest: &str) -> Option<usize> {
        let body = rest.strip_prefix('"')?;
        body.find('"').map(|close| close + 2)
    }

    /// Length of the first word in `words` that `rest` starts with and that
    /// ends on a word boundary.
    fn scan_word(rest: &str, words: &[&str]) -> Option<usize> {
        words
            .iter()
            .find(|word| {
                !word.is_empty() && rest.starts_with(**word) && ends_on_boundary(rest, word.len())
            })
            .map(|word| word.len())
    }
}

/// Identifier characters for boundary checks (ASCII letters, digits, `_`).
#[inline]
pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whether position `at` in `text` is a word boundary, as regex `\b`
/// defines it: exactly one side is an identifier character. Line ends count
/// as non-identifier.
fn ends_on_boundary(text: &str, at: usize) -> bool {
    let bytes = text.as_bytes();
    let before = at.checked_sub(1).and_then(|i| bytes.get(i)).copied();
    let after = bytes.get(at).copied();
    before.is_some_and(is_ident_byte) != after.is_some_and(is_ident_byte)
}

impl Tokenizer for KeywordTokenizer {
    fn name(&self) -> &'static str {
        self.config.name
    }

    fn extensions(&self) -> &'static [&'static str] {
        self.config.extensions
    }

    fn tokenize_line(&self, line: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < line.len() {
            let rest = &line[pos..];

            if !self.config.line_comment.is_empty() && rest.starts_with(self.config.line_comment) {
                tokens.push(Token::new(TokenKind::Comment, pos..line.len()));
                break;
            }

            let matched = Self::scan_string(rest)
                .map(|len| (TokenKind::String, len))
                .or_else(|| {
                    Self::scan_word(rest, self.config.keywords).map(|len| (TokenKind::Keyword, len))
                })
                .or_else(|| Self::scan_word(rest, self.config.types).map(|len| (TokenKind::Type, len)));

            let (kind, len) = matched.unwrap_or_else(|| {
                let char_len = rest.chars().next().map_or(1, char::len_utf8);
                (TokenKind::Plain, char_len)
            });
            tokens.push(Token::new(kind, pos..pos + len));
            pos += len;
        }

        tokens
    }
}

// ---------------------------------------------------------------------------
// PlainTokenizer
// ---------------------------------------------------------------------------

/// Tokenizer that treats each non-empty line as a single `Plain` token.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTokenizer;

impl Tokenizer for PlainTokenizer {
    fn name(&self) -> &'static str {
        "Plain"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["txt"]
    }

    fn tokenize_line(&self, line: &str) -> Vec<Token> {
        if line.is_empty() {
            return Vec::new();
        }
        vec![Token::new(TokenKind::Plain, 0..line.len())]
    }
}

// ---------------------------------------------------------------------------
// Built-in language
// ---------------------------------------------------------------------------

/// Reserved words of the showcase language, in match order.
pub const GINK_KEYWORDS: &[&str] = &[
    "fun", "import", "return", "if", "for", "while", "const", "inline", "pub", "use", "check",
    "defer", "ensure", "unsafe", "struct", "package", "type",
];

/// Built-in type names of the showcase language, in match order.
pub const GINK_TYPES: &[&str] = &[
    "i32", "i64", "f32", "f64", "bool", "char", "string", "void", "u32", "u64", "u8", "i8", "f16",
    "f128",
];

/// Create the tokenizer for the showcase language.
pub const fn gink_tokenizer() -> KeywordTokenizer {
    KeywordTokenizer::new(KeywordTokenizerConfig {
        name: "Gink",
        extensions: &["gink", "gk"],
        line_comment: "//",
        keywords: GINK_KEYWORDS,
        types: GINK_TYPES,
    })
}

// ---------------------------------------------------------------------------
// TokenizerRegistry
// ---------------------------------------------------------------------------

/// Registry for looking up tokenizers by file extension or name.
#[derive(Default)]
pub struct TokenizerRegistry {
    tokenizers: Vec<Arc<dyn Tokenizer>>,
    by_extension: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl TokenizerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the showcase language and the plain fallback.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(gink_tokenizer()));
        registry.register(Box::new(PlainTokenizer));
        registry
    }

    /// Register a tokenizer. Later registrations for the same extension or
    /// name override earlier ones.
    pub fn register(&mut self, tokenizer: Box<dyn Tokenizer>) {
        let tokenizer: Arc<dyn Tokenizer> = Arc::from(tokenizer);
        let index = self.tokenizers.len();
        self.by_name
            .insert(tokenizer.name().to_ascii_lowercase(), index);
        for ext in tokenizer.extensions() {
            let key = ext.trim_start_matches('.').to_ascii_lowercase();
            if !key.is_empty() {
                self.by_extension.insert(key, index);
            }
        }
        tracing::debug!(name = tokenizer.name(), index, "registered tokenizer");
        self.tokenizers.push(tokenizer);
    }

    /// Look up by file extension (case-insensitive, dot optional).
    pub fn for_extension(&self, ext: &str) -> Option<&dyn Tokenizer> {
        let key = ext.trim_start_matches('.').to_ascii_lowercase();
        let index = self.by_extension.get(&key)?;
        self.tokenizers.get(*index).map(AsRef::as_ref)
    }

    /// Look up by name (case-insensitive).
    pub fn by_name(&self, name: &str) -> Option<&dyn Tokenizer> {
        let index = self.by_name.get(&name.to_ascii_lowercase())?;
        self.tokenizers.get(*index).map(AsRef::as_ref)
    }

    /// Look up by extension first, then by name.
    pub fn resolve(&self, lang: &str) -> Option<&dyn Tokenizer> {
        self.for_extension(lang).or_else(|| self.by_name(lang))
    }

    pub fn len(&self) -> usize {
        self.tokenizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokenizers.is_empty()
    }

    /// Names of all registered tokenizers, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tokenizers.iter().map(|t| t.name()).collect()
    }
}
