#![forbid(unsafe_code)]

//! Highlighting: tokenized lines with numbers, and styled [`Text`].

use langshow_text::{Line, Span, Text};

use crate::theme::HighlightTheme;
use crate::token::{Token, TokenKind, reconstruct};
use crate::tokenizer::{PlainTokenizer, Tokenizer, TokenizerRegistry, split_lines};

/// One source line with its 1-based number and tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedLine<'a> {
    pub number: usize,
    pub source: &'a str,
    pub tokens: Vec<Token>,
}

impl<'a> HighlightedLine<'a> {
    /// Tokenize `source` as line `number`.
    pub fn new(tokenizer: &dyn Tokenizer, number: usize, source: &'a str) -> Self {
        Self {
            number,
            source,
            tokens: tokenizer.tokenize_line(source),
        }
    }

    /// `(kind, text)` pairs in order.
    pub fn pieces(&self) -> impl Iterator<Item = (TokenKind, &'a str)> + '_ {
        let source = self.source;
        self.tokens.iter().map(move |t| (t.kind, t.text(source)))
    }

    /// Concatenated token text. Equal to `source`.
    pub fn text(&self) -> String {
        reconstruct(self.source, &self.tokens)
    }

    /// Styled spans for this line. Plain tokens get the theme's plain style
    /// only when it sets something, otherwise they stay unstyled.
    pub fn spans(&self, theme: &HighlightTheme) -> Vec<Span<'a>> {
        self.pieces()
            .map(|(kind, text)| {
                let style = theme.style_for(kind);
                if style.is_empty() {
                    Span::raw(text)
                } else {
                    Span::styled(text, style)
                }
            })
            .collect()
    }
}

/// Split `code` into lines numbered from `start_line + 1` and tokenize each.
///
/// Lines end at LF, CRLF or bare CR, as in [`Tokenizer::tokenize`]: `""` is
/// one empty line and a trailing terminator yields a trailing empty line.
/// Numbers saturate at `usize::MAX`.
pub fn highlight_lines<'a>(
    tokenizer: &dyn Tokenizer,
    code: &'a str,
    start_line: usize,
) -> Vec<HighlightedLine<'a>> {
    split_lines(code)
        .enumerate()
        .map(|(i, (_, line))| {
            let number = start_line.saturating_add(i).saturating_add(1);
            HighlightedLine::new(tokenizer, number, line)
        })
        .collect()
}

/// Digits needed for the largest line number.
pub fn gutter_width(last_line: usize) -> usize {
    last_line.max(1).ilog10() as usize + 1
}

/// Right-aligned line number followed by a separator space.
pub fn gutter_label(number: usize, width: usize) -> String {
    format!("{number:>width$} ")
}

/// Tokenizer registry plus theme.
///
/// # Example
/// ```
/// use langshow_syntax::SyntaxHighlighter;
///
/// let hl = SyntaxHighlighter::new();
/// let text = hl.highlight_numbered("import std;\nfun main() {}", "gink", 0);
/// assert_eq!(text.to_plain_text(), "1 import std;\n2 fun main() {}");
/// ```
pub struct SyntaxHighlighter {
    registry: TokenizerRegistry,
    theme: HighlightTheme,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    /// Built-in tokenizers and the dark theme.
    #[must_use]
    pub fn new() -> Self {
        Self::with_theme(HighlightTheme::dark())
    }

    #[must_use]
    pub fn with_theme(theme: HighlightTheme) -> Self {
        Self {
            registry: TokenizerRegistry::with_builtins(),
            theme,
        }
    }

    pub fn set_theme(&mut self, theme: HighlightTheme) {
        self.theme = theme;
    }

    #[must_use]
    pub fn theme(&self) -> &HighlightTheme {
        &self.theme
    }

    pub fn register_tokenizer(&mut self, tokenizer: Box<dyn Tokenizer>) {
        self.registry.register(tokenizer);
    }

    /// Names of the supported languages.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        self.registry.names()
    }

    /// Resolve a language by extension or name. Unknown languages fall back
    /// to plain text.
    pub fn tokenizer_for(&self, lang: &str) -> &dyn Tokenizer {
        match self.registry.resolve(lang) {
            Some(tokenizer) => tokenizer,
            None => {
                tracing::debug!(lang, "unknown language, using plain text");
                &PlainTokenizer
            }
        }
    }

    /// Tokenize `code` into numbered lines, the first numbered
    /// `start_line + 1`.
    #[must_use]
    pub fn highlight_lines<'a>(
        &self,
        code: &'a str,
        lang: &str,
        start_line: usize,
    ) -> Vec<HighlightedLine<'a>> {
        let tokenizer = self.tokenizer_for(lang);
        let lines = highlight_lines(tokenizer, code, start_line);
        tracing::trace!(
            lang = tokenizer.name(),
            lines = lines.len(),
            bytes = code.len(),
            "highlighted"
        );
        lines
    }

    /// Highlight code without line numbers.
    #[must_use]
    pub fn highlight(&self, code: &str, lang: &str) -> Text {
        self.highlight_lines(code, lang, 0)
            .iter()
            .map(|line| Line::from_spans(line.spans(&self.theme)))
            .collect()
    }

    /// Highlight code with right-aligned line numbers prepended.
    #[must_use]
    pub fn highlight_numbered(&self, code: &str, lang: &str, start_line: usize) -> Text {
        let lines = self.highlight_lines(code, lang, start_line);
        let last = lines.last().map_or(start_line.saturating_add(1), |l| l.number);
        let width = gutter_width(last);
        lines
            .iter()
            .map(|line| {
                let mut spans = vec![Span::styled(
                    gutter_label(line.number, width),
                    self.theme.gutter,
                )];
                spans.extend(line.spans(&self.theme));
                Line::from_spans(spans)
            })
            .collect()
    }
}
