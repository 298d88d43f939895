//! The whitespace-complete token list.
//!
//! A [`TokenList`] holds every token of a source file in document order,
//! including the whitespace and line breaks the scanner left out. Tokens are
//! addressed by [`TokenId`], which stays valid across deletion and
//! re-insertion.
//!
//! Besides the ordered collection, the list keeps a secondary index from a
//! token's range start to its id. The index tracks membership: inserting a
//! ranged token registers it, deleting it removes the entry.

use std::fmt;

use rustc_hash::FxHashMap;
use weft_list::{Iter, ListError, NodeId, OrderedList};

use crate::Token;

mod build;

pub use build::BuildError;

/// Identity of a token in a [`TokenList`].
pub type TokenId = NodeId;

/// An ordered, mutable sequence of tokens with O(1) neighbour access.
#[derive(Clone, Default, Debug)]
pub struct TokenList {
    tokens: OrderedList<Token>,
    by_range_start: FxHashMap<u32, TokenId>,
}

impl TokenList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: OrderedList::with_capacity(capacity),
            by_range_start: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    // ─── Mutation ───────────────────────────────────────────────────────

    /// Allocate a detached token. It becomes visible once added or inserted.
    pub fn create(&mut self, token: Token) -> TokenId {
        self.tokens.alloc(token)
    }

    /// Create a token and append it.
    pub fn push(&mut self, token: Token) -> TokenId {
        let id = self.tokens.push(token);
        self.register(id);
        id
    }

    /// Append a detached token.
    pub fn add(&mut self, id: TokenId) -> Result<(), ListError> {
        self.tokens.add(id)?;
        self.register(id);
        Ok(())
    }

    /// Insert a detached token immediately before `existing`.
    pub fn insert_before(&mut self, id: TokenId, existing: TokenId) -> Result<(), ListError> {
        self.tokens.insert_before(id, existing)?;
        self.register(id);
        Ok(())
    }

    /// Insert a detached token immediately after `existing`.
    pub fn insert_after(&mut self, id: TokenId, existing: TokenId) -> Result<(), ListError> {
        self.tokens.insert_after(id, existing)?;
        self.register(id);
        Ok(())
    }

    /// Remove a token from the list. Its id stays valid for re-insertion.
    pub fn delete(&mut self, id: TokenId) -> Result<(), ListError> {
        self.tokens.delete(id)?;
        self.unregister(id);
        Ok(())
    }

    /// Replace the text of a member token, e.g. to re-indent a line.
    ///
    /// Kind and span are left alone, so the range-start index is unaffected.
    pub fn set_value(&mut self, id: TokenId, value: impl Into<String>) -> Result<(), ListError> {
        if !self.tokens.contains(id) {
            return Err(match self.tokens.get(id) {
                Some(_) => ListError::NotLinked(id),
                None => ListError::UnknownNode(id),
            });
        }
        if let Some(token) = self.tokens.get_mut(id) {
            token.value = value.into();
        }
        Ok(())
    }

    fn register(&mut self, id: TokenId) {
        if let Some(start) = self.tokens.get(id).and_then(Token::range_start) {
            self.by_range_start.insert(start, id);
        }
    }

    fn unregister(&mut self, id: TokenId) {
        if let Some(start) = self.tokens.get(id).and_then(Token::range_start) {
            // Another live token may have claimed the same start since.
            if self.by_range_start.get(&start) == Some(&id) {
                self.by_range_start.remove(&start);
            }
        }
    }

    // ─── Access ─────────────────────────────────────────────────────────

    /// The token behind `id`, whether or not it is currently a member.
    #[inline]
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id)
    }

    /// The token behind `id` if it is currently a member.
    #[inline]
    fn member(&self, id: TokenId) -> Option<&Token> {
        if self.tokens.contains(id) {
            self.tokens.get(id)
        } else {
            None
        }
    }

    /// The live token whose range starts at `offset`.
    #[inline]
    pub fn get_by_range_start(&self, offset: u32) -> Option<TokenId> {
        self.by_range_start.get(&offset).copied()
    }

    #[inline]
    pub fn contains(&self, id: TokenId) -> bool {
        self.tokens.contains(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<TokenId> {
        self.tokens.first()
    }

    #[inline]
    pub fn last(&self) -> Option<TokenId> {
        self.tokens.last()
    }

    #[inline]
    pub fn next(&self, id: TokenId) -> Option<TokenId> {
        self.tokens.next(id)
    }

    #[inline]
    pub fn previous(&self, id: TokenId) -> Option<TokenId> {
        self.tokens.previous(id)
    }

    /// First token after `from` matching `predicate`.
    pub fn find_next(&self, from: TokenId, predicate: impl FnMut(&Token) -> bool) -> Option<TokenId> {
        self.tokens.find_next(from, predicate)
    }

    /// Nearest token before `from` matching `predicate`.
    pub fn find_previous(
        &self,
        from: TokenId,
        predicate: impl FnMut(&Token) -> bool,
    ) -> Option<TokenId> {
        self.tokens.find_previous(from, predicate)
    }

    /// Iterate `(id, token)` pairs in document order.
    pub fn iter(&self) -> Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Concatenate the values of all tokens in order.
    pub fn to_source(&self) -> String {
        self.to_string()
    }

    // ─── Predicates ─────────────────────────────────────────────────────
    //
    // All return `false` for ids that are not members.

    pub fn is_whitespace(&self, id: TokenId) -> bool {
        self.member(id).is_some_and(Token::is_whitespace)
    }

    pub fn is_line_break(&self, id: TokenId) -> bool {
        self.member(id).is_some_and(Token::is_line_break)
    }

    pub fn is_whitespace_or_line_break(&self, id: TokenId) -> bool {
        self.member(id).is_some_and(Token::is_whitespace_or_line_break)
    }

    pub fn is_comment(&self, id: TokenId) -> bool {
        self.member(id).is_some_and(Token::is_comment)
    }

    /// Whitespace at the start of the list or directly after a line break.
    pub fn is_indent(&self, id: TokenId) -> bool {
        self.is_whitespace(id)
            && self
                .previous(id)
                .is_none_or(|previous| self.is_line_break(previous))
    }

    // ─── Line and indent search ─────────────────────────────────────────

    /// Nearest line break before `id`.
    pub fn find_previous_line_break(&self, id: TokenId) -> Option<TokenId> {
        self.find_previous(id, Token::is_line_break)
    }

    /// Nearest line break after `id`.
    pub fn find_next_line_break(&self, id: TokenId) -> Option<TokenId> {
        self.find_next(id, Token::is_line_break)
    }

    /// Indent of the line `id` is on.
    ///
    /// Stops at the first line break: a line without leading whitespace has
    /// no indent even if an earlier line does.
    pub fn find_previous_indent(&self, id: TokenId) -> Option<TokenId> {
        let mut cursor = self.previous(id);
        while let Some(current) = cursor {
            if self.is_indent(current) {
                return Some(current);
            }
            if self.is_line_break(current) {
                return None;
            }
            cursor = self.previous(current);
        }
        None
    }

    /// First non-whitespace token on the line `id` is on.
    ///
    /// With no line break before `id`, this is the list head, even when the
    /// head is an indent. On a whitespace-only line it is the line break that
    /// ends the line, or `None` if that line is the last and unterminated.
    pub fn find_first_token_or_comment_on_line(&self, id: TokenId) -> Option<TokenId> {
        if !self.contains(id) {
            return None;
        }
        match self.find_previous_line_break(id) {
            Some(line_break) => self.find_next(line_break, |token| !token.is_whitespace()),
            None => self.first(),
        }
    }

    /// Nearest following token that is not whitespace, a line break, or a comment.
    pub fn next_token(&self, id: TokenId) -> Option<TokenId> {
        self.find_next(id, is_code)
    }

    /// Nearest preceding token that is not whitespace, a line break, or a comment.
    pub fn previous_token(&self, id: TokenId) -> Option<TokenId> {
        self.find_previous(id, is_code)
    }

    /// Nearest following token that is not whitespace or a line break.
    pub fn next_token_or_comment(&self, id: TokenId) -> Option<TokenId> {
        self.find_next(id, |token| !token.is_whitespace_or_line_break())
    }

    /// Nearest preceding token that is not whitespace or a line break.
    pub fn previous_token_or_comment(&self, id: TokenId) -> Option<TokenId> {
        self.find_previous(id, |token| !token.is_whitespace_or_line_break())
    }
}

fn is_code(token: &Token) -> bool {
    !token.is_whitespace_or_line_break() && !token.is_comment()
}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, token) in self.iter() {
            f.write_str(&token.value)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = (TokenId, &'a Token);
    type IntoIter = Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
