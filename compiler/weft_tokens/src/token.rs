//! Token, token kind, and source span types.

use std::fmt;
use std::str::FromStr;

/// Half-open byte range `[start, end)` in the source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create from a byte range.
    ///
    /// # Panics
    /// Panics if the range exceeds `u32::MAX` bytes.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        let start = u32::try_from(range.start)
            .unwrap_or_else(|_| panic!("span start {} exceeds u32::MAX", range.start));
        let end = u32::try_from(range.end)
            .unwrap_or_else(|_| panic!("span end {} exceeds u32::MAX", range.end));
        Span { start, end }
    }
}

/// Error when parsing a scanner type name that is not a known [`TokenKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token kind `{0}`")]
pub struct UnknownTokenKind(pub String);

/// The kind of a token.
///
/// Everything except `Whitespace` and `LineBreak` comes from the scanner;
/// those two are synthesized while building a
/// [`TokenList`](crate::TokenList).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    Keyword,
    Identifier,
    Punctuator,
    Numeric,
    String,
    Boolean,
    Null,
    Template,
    RegularExpression,
    /// `// text`
    LineComment,
    /// `/* text */`
    BlockComment,
    /// A run of non-newline whitespace.
    Whitespace,
    /// One newline sequence, normalized to the configured line ending.
    LineBreak,
}

impl TokenKind {
    /// The scanner-facing name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Punctuator => "Punctuator",
            TokenKind::Numeric => "Numeric",
            TokenKind::String => "String",
            TokenKind::Boolean => "Boolean",
            TokenKind::Null => "Null",
            TokenKind::Template => "Template",
            TokenKind::RegularExpression => "RegularExpression",
            TokenKind::LineComment => "LineComment",
            TokenKind::BlockComment => "BlockComment",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::LineBreak => "LineBreak",
        }
    }

    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    #[inline]
    pub const fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    #[inline]
    pub const fn is_line_break(self) -> bool {
        matches!(self, TokenKind::LineBreak)
    }

    #[inline]
    pub const fn is_whitespace_or_line_break(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::LineBreak)
    }

    /// Whether this kind is only ever produced by list construction.
    #[inline]
    pub const fn is_synthesized(self) -> bool {
        self.is_whitespace_or_line_break()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    /// Parse a scanner type name. Comment kinds also accept the short
    /// `Line` / `Block` spellings some scanners emit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Keyword" => TokenKind::Keyword,
            "Identifier" => TokenKind::Identifier,
            "Punctuator" => TokenKind::Punctuator,
            "Numeric" => TokenKind::Numeric,
            "String" => TokenKind::String,
            "Boolean" => TokenKind::Boolean,
            "Null" => TokenKind::Null,
            "Template" => TokenKind::Template,
            "RegularExpression" => TokenKind::RegularExpression,
            "LineComment" | "Line" => TokenKind::LineComment,
            "BlockComment" | "Block" => TokenKind::BlockComment,
            "Whitespace" => TokenKind::Whitespace,
            "LineBreak" => TokenKind::LineBreak,
            _ => return Err(UnknownTokenKind(s.to_owned())),
        })
    }
}

/// A single token: its kind, literal text, and where it came from.
///
/// Tokens built from source text always carry a span. Tokens a formatter
/// creates afterwards may have none; those are invisible to
/// [`TokenList::get_by_range_start`](crate::TokenList::get_by_range_start).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Option<Span>,
}

impl Token {
    /// Create a token that occupies `span` in the source.
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            value: value.into(),
            span: Some(span),
        }
    }

    /// Create a token with no source position.
    pub fn synthetic(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
            span: None,
        }
    }

    /// Start offset, the key used by the range-start index.
    #[inline]
    pub fn range_start(&self) -> Option<u32> {
        self.span.map(|span| span.start)
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        self.kind.is_comment()
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }

    #[inline]
    pub fn is_line_break(&self) -> bool {
        self.kind.is_line_break()
    }

    #[inline]
    pub fn is_whitespace_or_line_break(&self) -> bool {
        self.kind.is_whitespace_or_line_break()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
