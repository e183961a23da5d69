//! Property-based invariant tests for the keyword tokenizer.
//!
//! 1. Every line is partitioned losslessly.
//! 2. Re-tokenizing the reconstructed text yields identical tokens.
//! 3. A line starting with `//` is exactly one comment token.
//! 4. Keyword and type tokens always end on a word boundary.
//! 5. Plain tokens are exactly one character.
//! 6. Whole-buffer tokenization agrees with per-line tokenization.
//! 7. Highlighting preserves the input text.

use langshow_syntax::SyntaxHighlighter;
use langshow_syntax::token::{TokenKind, is_lossless, reconstruct};
use langshow_syntax::tokenizer::{GINK_KEYWORDS, GINK_TYPES, Tokenizer, gink_tokenizer};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Lines built from language fragments so keywords, types, strings and
/// comments actually occur.
fn code_line() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        proptest::sample::select(GINK_KEYWORDS).prop_map(str::to_string),
        proptest::sample::select(GINK_TYPES).prop_map(str::to_string),
        Just("\"".to_string()),
        Just("//".to_string()),
        Just(" ".to_string()),
        "[a-z_0-9]{1,4}",
        "[(){};:,.=+<>-]",
        "[\"a-z ]{0,6}",
        "\\PC{1,3}",
    ];
    proptest::collection::vec(fragment, 0..12).prop_map(|parts| parts.concat())
}

fn no_newline_line() -> impl Strategy<Value = String> {
    prop_oneof![code_line(), "[^\n\r]{0,40}"]
}

fn is_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Losslessness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn tokenization_is_lossless(line in no_newline_line()) {
        let tokens = gink_tokenizer().tokenize_line(&line);
        prop_assert!(is_lossless(&line, &tokens), "not lossless: {:?} -> {:?}", line, tokens);
        prop_assert_eq!(reconstruct(&line, &tokens), line);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn retokenizing_is_idempotent(line in no_newline_line()) {
        let t = gink_tokenizer();
        let first = t.tokenize_line(&line);
        let rebuilt = reconstruct(&line, &first);
        prop_assert_eq!(t.tokenize_line(&rebuilt), first);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Comment precedence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn comment_lines_are_one_token(rest in "[^\n\r]{0,40}") {
        let line = format!("//{rest}");
        let tokens = gink_tokenizer().tokenize_line(&line);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Comment);
        prop_assert_eq!(tokens[0].range.clone(), 0..line.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. Token shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn words_end_on_boundaries(line in code_line()) {
        let tokens = gink_tokenizer().tokenize_line(&line);
        for token in tokens.iter().filter(|t| matches!(t.kind, TokenKind::Keyword | TokenKind::Type)) {
            let text = token.text(&line);
            let words = if token.kind == TokenKind::Keyword { GINK_KEYWORDS } else { GINK_TYPES };
            prop_assert!(words.contains(&text), "unexpected word {:?}", text);
            let next = line[token.range.end..].chars().next();
            prop_assert!(!next.is_some_and(is_ident), "{:?} followed by {:?}", text, next);
        }
    }

    #[test]
    fn plain_tokens_are_single_chars(line in no_newline_line()) {
        let tokens = gink_tokenizer().tokenize_line(&line);
        for token in tokens.iter().filter(|t| t.kind == TokenKind::Plain) {
            prop_assert_eq!(token.text(&line).chars().count(), 1);
        }
    }

    #[test]
    fn strings_are_closed_and_quote_free_inside(line in code_line()) {
        let tokens = gink_tokenizer().tokenize_line(&line);
        for token in tokens.iter().filter(|t| t.kind == TokenKind::String) {
            let text = token.text(&line);
            prop_assert!(text.len() >= 2 && text.starts_with('"') && text.ends_with('"'));
            prop_assert!(!text[1..text.len() - 1].contains('"'));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6-7. Buffers
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn buffer_tokenization_matches_lines(lines in proptest::collection::vec(code_line(), 1..6)) {
        let buffer = lines.join("\n");
        let t = gink_tokenizer();
        let whole = t.tokenize(&buffer);

        let mut expected = Vec::new();
        let mut offset = 0;
        for line in &lines {
            for mut token in t.tokenize_line(line) {
                token.range.start += offset;
                token.range.end += offset;
                expected.push(token);
            }
            offset += line.len() + 1;
        }
        prop_assert_eq!(whole, expected);
    }

    #[test]
    fn highlighting_preserves_text(lines in proptest::collection::vec(code_line(), 1..6)) {
        let code = lines.join("\n");
        let hl = SyntaxHighlighter::new();
        prop_assert_eq!(hl.highlight(&code, "gink").to_plain_text(), code.clone());
        prop_assert_eq!(hl.highlight(&code, "gink").height(), lines.len());
    }
}
