//! Construction of a [`TokenList`] from scanner tokens and source text.
//!
//! A single left-to-right scan walks the text and the scanner tokens in
//! lockstep. Scanner tokens are appended unchanged when the cursor reaches
//! their start; the gaps between them are covered by synthesized
//! `Whitespace` and `LineBreak` tokens.

use std::iter::Peekable;

use crate::{Span, Token, TokenKind, TokenList, TokenListOptions};

/// Error when a [`TokenList`] cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Offsets are stored as `u32`.
    #[error("source text of {len} bytes does not fit in 32-bit offsets")]
    SourceTooLarge { len: usize },
}

impl TokenList {
    /// Build a complete token list.
    ///
    /// `tokens` are the scanner's tokens, comments included, sorted by span.
    /// Overlapping or out-of-order tokens are not validated; when the scan
    /// meets text that no scanner token covers, it stops and logs a warning.
    pub fn build(
        tokens: impl IntoIterator<Item = Token>,
        text: &str,
        options: &TokenListOptions,
    ) -> Result<Self, BuildError> {
        if u32::try_from(text.len()).is_err() {
            return Err(BuildError::SourceTooLarge { len: text.len() });
        }

        let tokens = tokens.into_iter();
        let mut builder = Builder {
            list: TokenList::with_capacity(tokens.size_hint().0.saturating_mul(2)),
            text,
            options,
            cursor: 0,
        };
        let scanned = builder.run(tokens.peekable());

        tracing::debug!(
            scanned,
            synthesized = builder.list.len() - scanned,
            "built token list"
        );
        Ok(builder.list)
    }
}

struct Builder<'a> {
    list: TokenList,
    text: &'a str,
    options: &'a TokenListOptions,
    /// Byte offset into `text`.
    cursor: usize,
}

impl Builder<'_> {
    /// Scan to the end of the text. Returns how many scanner tokens were kept.
    fn run(&mut self, mut pending: Peekable<impl Iterator<Item = Token>>) -> usize {
        let mut scanned = 0;

        loop {
            if let Some(token) = pending.next_if(|token| token.span.is_none()) {
                tracing::warn!(
                    kind = %token.kind,
                    value = %token.value,
                    "scanner token has no span; skipped"
                );
                continue;
            }

            let cursor = self.cursor;
            if let Some(token) = pending.next_if(|token| {
                token.span.is_some_and(|span| span.start as usize == cursor)
            }) {
                if let Some(span) = token.span {
                    self.cursor = self.cursor.max(span.end as usize);
                }
                self.list.push(token);
                scanned += 1;
                continue;
            }

            let Some(rest) = self.text.get(self.cursor..) else {
                tracing::warn!(
                    offset = self.cursor,
                    "scanner token ends inside a character or past the text"
                );
                break;
            };
            let Some(c) = rest.chars().next() else {
                break;
            };

            if self.options.is_new_line(c) {
                self.line_break(c);
            } else if c.is_whitespace() {
                self.whitespace();
            } else {
                tracing::warn!(
                    offset = self.cursor,
                    found = %c,
                    "text not covered by any scanner token; stopping scan"
                );
                break;
            }
        }

        let dropped = pending.count();
        if dropped > 0 {
            tracing::warn!(dropped, offset = self.cursor, "scanner tokens left unplaced");
        }
        scanned
    }

    /// Consume one newline unit starting with `c`.
    fn line_break(&mut self, c: char) {
        let start = self.cursor;
        let mut end = start + c.len_utf8();
        if c == '\r' && self.text[end..].starts_with('\n') {
            end += 1;
        }

        self.list.push(Token::new(
            TokenKind::LineBreak,
            self.options.line_endings.as_str(),
            Span::from_range(start..end),
        ));
        self.cursor = end;
    }

    /// Consume a maximal run of non-newline whitespace.
    fn whitespace(&mut self) {
        let start = self.cursor;
        let rest = &self.text[start..];
        let len = rest
            .char_indices()
            .find(|&(_, c)| !c.is_whitespace() || self.options.is_new_line(c))
            .map_or(rest.len(), |(i, _)| i);
        let end = start + len;

        let is_indent = self
            .list
            .last()
            .is_none_or(|last| self.list.is_line_break(last));
        let value = if self.options.collapse_whitespace && !is_indent {
            " "
        } else {
            &self.text[start..end]
        };

        self.list.push(Token::new(
            TokenKind::Whitespace,
            value,
            Span::from_range(start..end),
        ));
        self.cursor = end;
    }
}
