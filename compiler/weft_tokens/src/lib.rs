//! Whitespace-complete token lists for source formatters.
//!
//! A scanner reports the meaningful tokens of a program (keywords,
//! identifiers, punctuation, comments) but not the whitespace between them.
//! [`TokenList::build`] fills those gaps with synthesized `Whitespace` and
//! `LineBreak` tokens so the list covers the whole text, then hands out a
//! mutable, navigable sequence a formatter can rewrite.
//!
//! # Modules
//!
//! - [`token`]: `Token`, `TokenKind`, and `Span`
//! - [`options`]: line-ending, whitespace-collapsing, and newline-pattern options
//! - [`token_list`]: construction, predicates, and line/indent search

pub mod options;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod token;
pub mod token_list;

pub use options::{TokenListOptions, LINE_ENDING_CR, LINE_ENDING_CRLF, LINE_ENDING_LF};
pub use token::{Span, Token, TokenKind, UnknownTokenKind};
pub use token_list::{BuildError, TokenId, TokenList};
pub use weft_list::ListError;
