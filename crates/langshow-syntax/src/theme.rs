#![forbid(unsafe_code)]

//! Highlight themes.

use langshow_style::{Color, Style};

use crate::token::TokenKind;

/// Maps token kinds to styles, plus the surrounding panel colors.
///
/// `base` applies to every span (including plain text); token styles are
/// layered on top of it.
///
/// # Example
/// ```
/// use langshow_syntax::theme::HighlightTheme;
/// use langshow_syntax::token::TokenKind;
///
/// let theme = HighlightTheme::dark();
/// let keyword = theme.style_for(TokenKind::Keyword);
/// assert!(keyword.fg.is_some());
/// assert!(theme.style_for(TokenKind::Plain).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightTheme {
    /// Default foreground for the code panel.
    pub base: Style,
    /// Panel background, if any.
    pub background: Option<Color>,
    /// Line-number gutter.
    pub gutter: Style,
    pub comment: Style,
    pub string: Style,
    pub keyword: Style,
    pub type_name: Style,
    pub plain: Style,
}

const COMMENT: Color = Color::rgb(0x63, 0x6e, 0x7b);
const STRING: Color = Color::rgb(0xa5, 0xd6, 0xff);
const KEYWORD: Color = Color::rgb(0xff, 0x7b, 0x72);
const TYPE: Color = Color::rgb(0x79, 0xc0, 0xff);

impl HighlightTheme {
    /// A theme with every style empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Style for a token kind, without the base style.
    #[must_use]
    pub fn style_for(&self, kind: TokenKind) -> Style {
        match kind {
            TokenKind::Comment => self.comment,
            TokenKind::String => self.string,
            TokenKind::Keyword => self.keyword,
            TokenKind::Type => self.type_name,
            TokenKind::Plain => self.plain,
        }
    }

    /// Dark panel palette.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            base: Style::new().fg(Color::rgb(0xc9, 0xd1, 0xd9)),
            background: Some(Color::rgb(0x0d, 0x0d, 0x0b)),
            ..Self::token_palette()
        }
    }

    /// Light panel palette. Token colors match the dark palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            base: Style::new().fg(Color::rgb(0x24, 0x29, 0x2f)),
            background: Some(Color::WHITE),
            ..Self::token_palette()
        }
    }

    /// Pick [`dark`](Self::dark) or [`light`](Self::light).
    #[must_use]
    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    fn token_palette() -> Self {
        Self {
            base: Style::new(),
            background: None,
            gutter: Style::new().dim(),
            comment: Style::new().fg(COMMENT).italic(),
            string: Style::new().fg(STRING),
            keyword: Style::new().fg(KEYWORD).bold(),
            type_name: Style::new().fg(TYPE),
            plain: Style::new(),
        }
    }

    pub fn builder() -> HighlightThemeBuilder {
        HighlightThemeBuilder::new()
    }
}

/// Builder for custom highlight themes.
#[derive(Debug, Clone, Default)]
pub struct HighlightThemeBuilder {
    theme: HighlightTheme,
}

impl HighlightThemeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing theme.
    pub fn from_theme(theme: HighlightTheme) -> Self {
        Self { theme }
    }

    pub fn base(mut self, style: Style) -> Self {
        self.theme.base = style;
        self
    }

    pub fn background(mut self, color: Option<Color>) -> Self {
        self.theme.background = color;
        self
    }

    pub fn gutter(mut self, style: Style) -> Self {
        self.theme.gutter = style;
        self
    }

    pub fn comment(mut self, style: Style) -> Self {
        self.theme.comment = style;
        self
    }

    pub fn string(mut self, style: Style) -> Self {
        self.theme.string = style;
        self
    }

    pub fn keyword(mut self, style: Style) -> Self {
        self.theme.keyword = style;
        self
    }

    pub fn type_name(mut self, style: Style) -> Self {
        self.theme.type_name = style;
        self
    }

    pub fn plain(mut self, style: Style) -> Self {
        self.theme.plain = style;
        self
    }

    pub fn build(self) -> HighlightTheme {
        self.theme
    }
}
