//! A small C-style scanner for tests and examples.
//!
//! Produces the meaningful tokens of `text` the way an external scanner
//! would: identifiers, keywords, numbers, single-character punctuators, and
//! `//` / `/* */` comments, each with its span. Whitespace is skipped.

use crate::{Span, Token, TokenKind};

const KEYWORDS: &[&str] = &[
    "const", "let", "var", "function", "return", "if", "else", "for", "while",
];

/// Scan `text` into spanned tokens.
pub fn scan(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(c) = text[pos..].chars().next() {
        let rest = &text[pos..];
        if c.is_whitespace() {
            pos += c.len_utf8();
            continue;
        }

        let (kind, len) = if rest.starts_with("//") {
            (
                TokenKind::LineComment,
                rest.find(['\r', '\n']).unwrap_or(rest.len()),
            )
        } else if rest.starts_with("/*") {
            (
                TokenKind::BlockComment,
                rest[2..].find("*/").map_or(rest.len(), |i| i + 4),
            )
        } else if c.is_alphanumeric() || c == '_' {
            let len = rest
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            let kind = if c.is_ascii_digit() {
                TokenKind::Numeric
            } else if KEYWORDS.contains(&&rest[..len]) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            (kind, len)
        } else {
            (TokenKind::Punctuator, c.len_utf8())
        };

        tokens.push(Token::new(
            kind,
            &rest[..len],
            Span::from_range(pos..pos + len),
        ));
        pos += len;
    }

    tokens
}
