use super::*;
use pretty_assertions::assert_eq;

fn list(kinds: &[TokenKind]) -> TokenList {
    let mut tokens = TokenList::new();
    let mut offset = 0;
    for kind in kinds {
        tokens.push(Token::new(*kind, Span::new(offset, offset + 1)));
        offset += 2;
    }
    tokens
}

#[test]
fn test_slice_and_span_of_range() {
    let tokens = list(&[
        TokenKind::Int,
        TokenKind::Amp,
        TokenKind::Semicolon,
        TokenKind::Eof,
    ]);
    let range = TokenRange::new(0, 2);

    let kinds: Vec<TokenKind> = tokens.slice(range).iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Int, TokenKind::Amp]);
    assert_eq!(tokens.span_of(range), Span::new(0, 3));
}

#[test]
fn test_out_of_bounds_slice_is_empty() {
    let tokens = list(&[TokenKind::Eof]);
    assert!(tokens.slice(TokenRange::new(3, 5)).is_empty());
    assert_eq!(tokens.span_of(TokenRange::new(3, 5)), Span::DUMMY);
}

#[test]
fn test_delimiter_matching() {
    assert!(TokenKind::LParen.is_open_delimiter());
    assert!(!TokenKind::Lt.is_open_delimiter());
    assert_eq!(TokenKind::RBracket.matching_open(), Some(TokenKind::LBracket));
    assert_eq!(TokenKind::Gt.matching_open(), None);
}

#[test]
fn test_display_name() {
    assert_eq!(TokenKind::LtEqGt.to_string(), "<=>");
    assert_eq!(TokenKind::Codef.to_string(), "codef");
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
}
