//! C-style token list: indent direction and original comment indentation.

use std::ops::{Deref, DerefMut};

use rustc_hash::FxHashMap;
use weft_tokens::{BuildError, Token, TokenId, TokenKind, TokenList, TokenListOptions};

/// Brackets that open an indented block when they end a line.
const INDENT_OPENERS: [&str; 3] = ["{", "[", "("];

/// Brackets that close an indented block when they start a line.
const INDENT_CLOSERS: [&str; 3] = ["}", "]", ")"];

/// A comment as it was authored, before any formatting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OriginalComment {
    /// The comment text, delimiters included.
    pub text: String,
    /// The whitespace that indented the comment's line.
    pub indent: String,
}

/// How a token affects the indentation of the lines around it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndentDirection {
    /// Lines after this token's line go one level deeper.
    Increase,
    /// This token's line goes one level shallower than its block.
    Decrease,
    Neutral,
}

/// A [`TokenList`] for brace-delimited languages with C-style comments.
///
/// Dereferences to the underlying list, so every generic query and mutation
/// is available. Mutations never touch the original-comment snapshot.
#[derive(Clone, Debug)]
pub struct CStyleTokenList {
    list: TokenList,
    /// Comments whose predecessor was an indent when the list was built.
    original_comments: FxHashMap<TokenId, OriginalComment>,
}

impl CStyleTokenList {
    /// Build the token list and capture each indented comment as authored.
    pub fn build(
        tokens: impl IntoIterator<Item = Token>,
        text: &str,
        options: &TokenListOptions,
    ) -> Result<Self, BuildError> {
        let list = TokenList::build(tokens, text, options)?;
        let original_comments = snapshot_comments(&list);
        tracing::debug!(
            comments = original_comments.len(),
            "captured original comment indentation"
        );
        Ok(CStyleTokenList {
            list,
            original_comments,
        })
    }

    /// The comment as authored, if it started an indented line at build time.
    pub fn original_comment(&self, id: TokenId) -> Option<&OriginalComment> {
        self.original_comments.get(&id)
    }

    /// The indent that preceded the comment at build time.
    pub fn original_comment_indent(&self, id: TokenId) -> Option<&str> {
        self.original_comment(id)
            .map(|comment| comment.indent.as_str())
    }

    pub fn is_line_comment(&self, id: TokenId) -> bool {
        self.member(id)
            .is_some_and(|token| token.kind == TokenKind::LineComment)
    }

    pub fn is_block_comment(&self, id: TokenId) -> bool {
        self.member(id)
            .is_some_and(|token| token.kind == TokenKind::BlockComment)
    }

    /// An opening bracket directly followed by a line break.
    pub fn is_indent_increaser(&self, id: TokenId) -> bool {
        self.member(id)
            .is_some_and(|token| INDENT_OPENERS.contains(&token.value.as_str()))
            && self
                .list
                .next(id)
                .is_some_and(|next| self.list.is_line_break(next))
    }

    /// A closing bracket that is the first token on its line.
    ///
    /// Only whitespace may sit between the previous line break and the
    /// bracket; a comment in between disqualifies it. With no line break
    /// before it at all, the bracket is on the first line and qualifies.
    pub fn is_indent_decreaser(&self, id: TokenId) -> bool {
        if !self
            .member(id)
            .is_some_and(|token| INDENT_CLOSERS.contains(&token.value.as_str()))
        {
            return false;
        }
        match self.list.find_previous_line_break(id) {
            None => true,
            Some(line_break) => {
                self.list.find_next(line_break, |token| !token.is_whitespace()) == Some(id)
            }
        }
    }

    pub fn indent_direction(&self, id: TokenId) -> IndentDirection {
        if self.is_indent_increaser(id) {
            IndentDirection::Increase
        } else if self.is_indent_decreaser(id) {
            IndentDirection::Decrease
        } else {
            IndentDirection::Neutral
        }
    }

    /// Discard the snapshot and return the plain list.
    pub fn into_inner(self) -> TokenList {
        self.list
    }

    fn member(&self, id: TokenId) -> Option<&Token> {
        if self.list.contains(id) {
            self.list.get(id)
        } else {
            None
        }
    }
}

impl Deref for CStyleTokenList {
    type Target = TokenList;

    fn deref(&self) -> &TokenList {
        &self.list
    }
}

impl DerefMut for CStyleTokenList {
    fn deref_mut(&mut self) -> &mut TokenList {
        &mut self.list
    }
}

fn snapshot_comments(list: &TokenList) -> FxHashMap<TokenId, OriginalComment> {
    let mut comments = FxHashMap::default();
    for (id, token) in list {
        if !token.is_comment() {
            continue;
        }
        let Some(indent) = list.previous(id).filter(|&previous| list.is_indent(previous)) else {
            continue;
        };
        if let Some(indent) = list.get(indent) {
            comments.insert(
                id,
                OriginalComment {
                    text: token.value.clone(),
                    indent: indent.value.clone(),
                },
            );
        }
    }
    comments
}
