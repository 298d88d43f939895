use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_span_from_range() {
    assert_eq!(Span::from_range(3..7), Span::new(3, 7));
}

#[test]
#[should_panic(expected = "span end 4294967296 exceeds u32::MAX")]
fn test_span_from_range_overflow() {
    let _ = Span::from_range(0..u32::MAX as usize + 1);
}

#[test]
fn test_kind_round_trips_through_name() {
    let kinds = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Punctuator,
        TokenKind::Numeric,
        TokenKind::String,
        TokenKind::Boolean,
        TokenKind::Null,
        TokenKind::Template,
        TokenKind::RegularExpression,
        TokenKind::LineComment,
        TokenKind::BlockComment,
        TokenKind::Whitespace,
        TokenKind::LineBreak,
    ];
    for kind in kinds {
        assert_eq!(kind.to_string().parse::<TokenKind>(), Ok(kind));
    }
}

#[test]
fn test_kind_short_comment_names() {
    assert_eq!("Line".parse::<TokenKind>(), Ok(TokenKind::LineComment));
    assert_eq!("Block".parse::<TokenKind>(), Ok(TokenKind::BlockComment));
}

#[test]
fn test_kind_unknown_name() {
    let err = "Shebang".parse::<TokenKind>().unwrap_err();
    assert_eq!(err, UnknownTokenKind("Shebang".to_owned()));
    assert_eq!(err.to_string(), "unknown token kind `Shebang`");
}

#[test]
fn test_kind_predicates() {
    assert!(TokenKind::LineComment.is_comment());
    assert!(TokenKind::BlockComment.is_comment());
    assert!(!TokenKind::Punctuator.is_comment());

    assert!(TokenKind::Whitespace.is_whitespace());
    assert!(!TokenKind::LineBreak.is_whitespace());
    assert!(TokenKind::LineBreak.is_line_break());
    assert!(TokenKind::Whitespace.is_whitespace_or_line_break());
    assert!(TokenKind::LineBreak.is_whitespace_or_line_break());
    assert!(!TokenKind::Identifier.is_whitespace_or_line_break());

    assert!(TokenKind::LineBreak.is_synthesized());
    assert!(!TokenKind::BlockComment.is_synthesized());
}

#[test]
fn test_token_constructors() {
    let token = Token::new(TokenKind::Identifier, "foo", Span::new(4, 7));
    assert_eq!(token.range_start(), Some(4));
    assert_eq!(token.value, "foo");

    let synthetic = Token::synthetic(TokenKind::Whitespace, " ");
    assert_eq!(synthetic.span, None);
    assert_eq!(synthetic.range_start(), None);
    assert!(synthetic.is_whitespace());
}

#[cfg(feature = "serde")]
#[test]
fn test_token_serde_round_trip() {
    let tokens = vec![
        Token::new(TokenKind::LineComment, "// hi", Span::new(3, 8)),
        Token::synthetic(TokenKind::LineBreak, "\r\n"),
    ];
    let json = serde_json::to_string(&tokens).unwrap();
    let back: Vec<Token> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tokens);
}
