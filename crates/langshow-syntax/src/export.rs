#![forbid(unsafe_code)]

//! Exporters for highlighted [`Text`].
//!
//! - [`HtmlExporter`]: a `<pre>` block with one `<div>` per line and inline
//!   CSS on `<span>` elements.
//! - [`TextExporter`]: plain text, optionally with ANSI SGR sequences
//!   (24-bit color).
//!
//! # Usage
//!
//! ```
//! use langshow_syntax::SyntaxHighlighter;
//! use langshow_syntax::export::{HtmlExporter, TextExporter};
//!
//! let hl = SyntaxHighlighter::new();
//! let text = hl.highlight_numbered("fun main() {}", "gink", 0);
//!
//! let html = HtmlExporter::default().export(&text, hl.theme());
//! assert!(html.starts_with("<pre"));
//! let plain = TextExporter::plain().export(&text, hl.theme());
//! assert_eq!(plain, "1 fun main() {}\n");
//! ```

use langshow_style::{Color, Style, StyleFlags};
use langshow_text::{Line, Text};

use crate::theme::HighlightTheme;

// ---------------------------------------------------------------------------
// HTML Exporter
// ---------------------------------------------------------------------------

/// Configuration for HTML export.
#[derive(Debug, Clone)]
pub struct HtmlExporter {
    /// CSS class on the `<pre>` wrapper; lines get `{class}-line`.
    pub class_prefix: String,
    pub font_family: String,
    /// Font size (CSS value).
    pub font_size: String,
    /// Line height (CSS value).
    pub line_height: String,
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self {
            class_prefix: "langshow".into(),
            font_family: "'JetBrains Mono', monospace".into(),
            font_size: "13px".into(),
            line_height: "1.6".into(),
        }
    }
}

impl HtmlExporter {
    /// Export `text` using the panel colors of `theme`.
    ///
    /// Neighbouring spans with the same style are merged. Span styles are
    /// emitted as given; the theme base goes on the wrapper.
    pub fn export(&self, text: &Text, theme: &HighlightTheme) -> String {
        let mut out = String::with_capacity(text.width() * text.height() * 8 + 128);

        out.push_str("<pre class=\"");
        html_escape_into(&mut out, &self.class_prefix);
        out.push_str("\" style=\"margin:0;padding:20px;font-family:");
        html_escape_into(&mut out, &self.font_family);
        out.push_str(";font-size:");
        html_escape_into(&mut out, &self.font_size);
        out.push_str(";line-height:");
        html_escape_into(&mut out, &self.line_height);
        out.push(';');
        if let Some(bg) = theme.background {
            out.push_str(&format!("background:{};", css_color(bg)));
        }
        write_inline_style(&mut out, theme.base);
        out.push_str("\">");

        for line in text {
            out.push_str("<div class=\"");
            html_escape_into(&mut out, &self.class_prefix);
            out.push_str("-line\">");
            write_line(&mut out, line);
            out.push_str("</div>");
        }

        out.push_str("</pre>");
        out
    }
}

fn write_line(out: &mut String, line: &Line) {
    let mut line = line.clone();
    line.coalesce();
    for span in &line {
        match span.style.filter(|s| !s.is_empty()) {
            Some(style) => {
                out.push_str("<span style=\"");
                write_inline_style(out, style);
                out.push_str("\">");
                html_escape_into(out, span.as_str());
                out.push_str("</span>");
            }
            None => html_escape_into(out, span.as_str()),
        }
    }
}

fn css_color(color: Color) -> String {
    if color.is_opaque() {
        color.to_hex()
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            color.r(),
            color.g(),
            color.b(),
            f32::from(color.a()) / 255.0
        )
    }
}

fn write_inline_style(out: &mut String, style: Style) {
    if let Some(fg) = style.fg {
        out.push_str(&format!("color:{};", css_color(fg)));
    }
    if let Some(bg) = style.bg {
        out.push_str(&format!("background:{};", css_color(bg)));
    }
    if style.has(StyleFlags::BOLD) {
        out.push_str("font-weight:600;");
    }
    if style.has(StyleFlags::DIM) {
        out.push_str("opacity:0.2;");
    }
    if style.has(StyleFlags::ITALIC) {
        out.push_str("font-style:italic;");
    }
    if style.has(StyleFlags::UNDERLINE) {
        out.push_str("text-decoration:underline;");
    }
}

/// HTML-escape a string into the output buffer.
fn html_escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

// ---------------------------------------------------------------------------
// Text Exporter
// ---------------------------------------------------------------------------

/// SGR reset: `CSI 0 m`.
pub const SGR_RESET: &str = "\x1b[0m";

/// Plain-text or ANSI-colored export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExporter {
    /// Emit SGR sequences for styled spans.
    pub ansi: bool,
}

impl TextExporter {
    pub const fn plain() -> Self {
        Self { ansi: false }
    }

    pub const fn ansi() -> Self {
        Self { ansi: true }
    }

    /// Export `text`, one output line per line, each terminated by `'\n'`.
    ///
    /// In ANSI mode every span is layered over the theme base, adjacent
    /// same-style spans are merged, and each styled run is closed with a
    /// reset.
    pub fn export(&self, text: &Text, theme: &HighlightTheme) -> String {
        let mut out = String::new();
        for line in text {
            if !self.ansi {
                out.push_str(&line.to_plain_text());
                out.push('\n');
                continue;
            }
            let mut line = line.clone();
            line.apply_base_style(theme.base);
            line.coalesce();
            for span in &line {
                match span.style.filter(|s| !s.is_empty()) {
                    Some(style) => {
                        push_sgr(&mut out, style);
                        out.push_str(span.as_str());
                        out.push_str(SGR_RESET);
                    }
                    None => out.push_str(span.as_str()),
                }
            }
            out.push('\n');
        }
        out
    }
}

const FLAG_CODES: [(StyleFlags, u8); 4] = [
    (StyleFlags::BOLD, 1),
    (StyleFlags::DIM, 2),
    (StyleFlags::ITALIC, 3),
    (StyleFlags::UNDERLINE, 4),
];

/// Append one combined SGR sequence for `style`.
fn push_sgr(out: &mut String, style: Style) {
    let mut params: Vec<String> = Vec::with_capacity(4);
    for (flag, code) in FLAG_CODES {
        if style.has(flag) {
            params.push(code.to_string());
        }
    }
    if let Some(fg) = style.fg {
        params.push(format!("38;2;{};{};{}", fg.r(), fg.g(), fg.b()));
    }
    if let Some(bg) = style.bg {
        params.push(format!("48;2;{};{};{}", bg.r(), bg.g(), bg.b()));
    }
    if params.is_empty() {
        return;
    }
    out.push_str("\x1b[");
    out.push_str(&params.join(";"));
    out.push('m');
}
