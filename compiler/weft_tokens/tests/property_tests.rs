//! Property-based tests for token list construction.
//!
//! Random sources are assembled from words, comments, and whitespace, with
//! the scanner tokens recorded alongside. The built list must cover the text
//! exactly, keep every scanner token, and answer the navigation queries
//! consistently.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use weft_tokens::{Span, Token, TokenKind, TokenList, TokenListOptions};

#[derive(Debug, Clone)]
enum Piece {
    Word(String),
    Comment(String),
    Blank(String),
    Newline(&'static str),
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    prop_oneof![
        4 => "[a-z]{1,6}".prop_map(Piece::Word),
        1 => "[a-z ]{0,6}".prop_map(|body| Piece::Comment(format!("/*{body}*/"))),
        3 => "[ \t]{1,4}".prop_map(Piece::Blank),
        2 => prop_oneof![Just("\n"), Just("\r\n"), Just("\r")].prop_map(Piece::Newline),
    ]
}

/// Assemble source text and the scanner tokens a scanner would report for it.
fn assemble(pieces: &[Piece]) -> (String, Vec<Token>) {
    let mut text = String::new();
    let mut tokens = Vec::new();
    for piece in pieces {
        let start = text.len();
        let (kind, value) = match piece {
            Piece::Word(word) => (Some(TokenKind::Identifier), word.as_str()),
            Piece::Comment(comment) => (Some(TokenKind::BlockComment), comment.as_str()),
            Piece::Blank(blank) => (None, blank.as_str()),
            Piece::Newline(newline) => (None, *newline),
        };
        // "\r" followed by "\n" from the next piece would fuse into CRLF;
        // that is still one line break, so no special casing is needed.
        text.push_str(value);
        if let Some(kind) = kind {
            tokens.push(Token::new(kind, value, Span::from_range(start..text.len())));
        }
    }
    (text, tokens)
}

fn pieces() -> impl Strategy<Value = Vec<Piece>> {
    proptest::collection::vec(piece_strategy(), 0..40)
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

proptest! {
    #[test]
    fn scanner_tokens_survive_in_order(pieces in pieces()) {
        let (text, tokens) = assemble(&pieces);
        let list = TokenList::build(tokens.clone(), &text, &TokenListOptions::default()).unwrap();

        let kept: Vec<Token> = list
            .iter()
            .map(|(_, token)| token.clone())
            .filter(|token| !token.kind.is_synthesized())
            .collect();
        prop_assert_eq!(kept, tokens);
    }

    #[test]
    fn non_whitespace_content_round_trips(pieces in pieces()) {
        let (text, tokens) = assemble(&pieces);
        let list = TokenList::build(tokens, &text, &TokenListOptions::default()).unwrap();
        prop_assert_eq!(strip_whitespace(&list.to_source()), strip_whitespace(&text));
    }

    #[test]
    fn uncollapsed_source_round_trips_modulo_line_endings(pieces in pieces()) {
        let (text, tokens) = assemble(&pieces);
        let options = TokenListOptions::default().with_collapse_whitespace(false);
        let list = TokenList::build(tokens, &text, &options).unwrap();
        let expected = text.replace("\r\n", "\n").replace('\r', "\n");
        prop_assert_eq!(list.to_source(), expected);
    }

    #[test]
    fn spans_tile_the_text(pieces in pieces()) {
        let (text, tokens) = assemble(&pieces);
        let list = TokenList::build(tokens, &text, &TokenListOptions::default()).unwrap();

        let mut end = 0;
        for (_, token) in &list {
            let span = token.span.unwrap();
            prop_assert_eq!(span.start, end, "gap or overlap before {:?}", token);
            end = span.end;
        }
        prop_assert_eq!(end as usize, text.len());
    }

    #[test]
    fn is_indent_depends_only_on_predecessor(pieces in pieces()) {
        let (text, tokens) = assemble(&pieces);
        let list = TokenList::build(tokens, &text, &TokenListOptions::default()).unwrap();

        for (id, token) in &list {
            let expected = token.is_whitespace()
                && list.previous(id).is_none_or(|previous| list.is_line_break(previous));
            prop_assert_eq!(list.is_indent(id), expected);
        }
    }

    #[test]
    fn collapsed_whitespace_is_single_space_unless_indent(pieces in pieces()) {
        let (text, tokens) = assemble(&pieces);
        let list = TokenList::build(tokens, &text, &TokenListOptions::default()).unwrap();

        for (id, token) in &list {
            if token.is_whitespace() && !list.is_indent(id) {
                prop_assert_eq!(token.value.as_str(), " ");
            }
        }
    }

    #[test]
    fn next_token_filters(pieces in pieces()) {
        let (text, tokens) = assemble(&pieces);
        let list = TokenList::build(tokens, &text, &TokenListOptions::default()).unwrap();

        for (id, _) in &list {
            if let Some(next) = list.next_token(id) {
                let token = list.get(next).unwrap();
                prop_assert!(!token.is_whitespace_or_line_break() && !token.is_comment());
            }
            if let Some(next) = list.next_token_or_comment(id) {
                prop_assert!(!list.get(next).unwrap().is_whitespace_or_line_break());
            }
            if let Some(previous) = list.previous_token(id) {
                let token = list.get(previous).unwrap();
                prop_assert!(!token.is_whitespace_or_line_break() && !token.is_comment());
            }
        }
    }

    #[test]
    fn range_index_tracks_membership(pieces in pieces(), seed in any::<usize>()) {
        let (text, tokens) = assemble(&pieces);
        let mut list = TokenList::build(tokens, &text, &TokenListOptions::default()).unwrap();
        let ids: Vec<_> = list.iter().map(|(id, _)| id).collect();
        prop_assume!(!ids.is_empty());

        let victim = ids[seed % ids.len()];
        let start = list.get(victim).unwrap().range_start().unwrap();
        prop_assert_eq!(list.get_by_range_start(start), Some(victim));

        list.delete(victim).unwrap();
        prop_assert_eq!(list.get_by_range_start(start), None);

        list.add(victim).unwrap();
        prop_assert_eq!(list.get_by_range_start(start), Some(victim));
    }
}
