#![forbid(unsafe_code)]

//! Syntax highlighting for the langshow code showcase.
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`token`] | Token kinds, tokens, partition checks |
//! | [`tokenizer`] | `Tokenizer` trait, keyword scanner, registry |
//! | [`theme`] | Token-kind to style mapping |
//! | [`highlighter`] | Numbered lines and styled `Text` |
//! | [`export`] | HTML, ANSI and plain-text output |
//! | [`samples`] | Bundled code samples and explorer state |
//!
//! # Example
//! ```
//! use langshow_syntax::token::TokenKind;
//! use langshow_syntax::tokenizer::{Tokenizer, gink_tokenizer};
//!
//! let line = r#"i32: x = "if";"#;
//! let tokens = gink_tokenizer().tokenize_line(line);
//! assert_eq!(tokens[0].kind, TokenKind::Type);
//! assert!(tokens.iter().any(|t| t.kind == TokenKind::String && t.text(line) == "\"if\""));
//! ```

pub mod export;
pub mod highlighter;
pub mod samples;
pub mod theme;
pub mod token;
pub mod tokenizer;

pub use highlighter::{HighlightedLine, SyntaxHighlighter};
pub use theme::HighlightTheme;
pub use token::{Token, TokenKind};
pub use tokenizer::{Tokenizer, gink_tokenizer};
