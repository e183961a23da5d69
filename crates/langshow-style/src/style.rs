#![forbid(unsafe_code)]

//! Text style: optional colors plus attribute flags.

use crate::color::Color;

bitflags::bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold / increased weight.
        const BOLD      = 0b0000_0001;
        /// Dim / reduced opacity.
        const DIM       = 0b0000_0010;
        /// Italic text.
        const ITALIC    = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE = 0b0000_1000;
    }
}

/// A text style.
///
/// Unset colors inherit from whatever the style is layered on top of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub flags: StyleFlags,
}

impl Style {
    /// An empty style (inherits everything).
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            flags: StyleFlags::empty(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    #[inline]
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    #[inline]
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.flags = self.flags.union(StyleFlags::BOLD);
        self
    }

    #[inline]
    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.flags = self.flags.union(StyleFlags::DIM);
        self
    }

    #[inline]
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.flags = self.flags.union(StyleFlags::ITALIC);
        self
    }

    #[inline]
    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.flags = self.flags.union(StyleFlags::UNDERLINE);
        self
    }

    /// Whether the style sets nothing.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.flags.is_empty()
    }

    /// Whether a flag is set.
    #[inline]
    pub const fn has(&self, flag: StyleFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Layer `other` on top of `self`: colors set in `other` win, flags are
    /// combined.
    #[must_use]
    pub fn patch(self, other: Style) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            flags: self.flags | other.flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let red = Color::rgb(255, 0, 0);
        let s = Style::new().fg(red).bold().italic();
        assert_eq!(s.fg, Some(red));
        assert_eq!(s.bg, None);
        assert!(s.has(StyleFlags::BOLD));
        assert!(s.has(StyleFlags::ITALIC));
        assert!(!s.has(StyleFlags::DIM));
    }

    #[test]
    fn empty_style() {
        assert!(Style::new().is_empty());
        assert!(!Style::new().dim().is_empty());
        assert_eq!(Style::default(), Style::new());
    }

    #[test]
    fn patch_overrides_colors_and_unions_flags() {
        let base = Style::new().fg(Color::WHITE).bg(Color::rgb(0, 0, 0)).dim();
        let top = Style::new().fg(Color::rgb(1, 2, 3)).bold();
        let merged = base.patch(top);
        assert_eq!(merged.fg, Some(Color::rgb(1, 2, 3)));
        assert_eq!(merged.bg, Some(Color::rgb(0, 0, 0)));
        assert_eq!(merged.flags, StyleFlags::DIM | StyleFlags::BOLD);
    }

    #[test]
    fn patch_with_empty_is_identity() {
        let s = Style::new().fg(Color::WHITE).underline();
        assert_eq!(s.patch(Style::new()), s);
        assert_eq!(Style::new().patch(s), s);
    }
}
