#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tern_diagnostic::ErrorCode;
use tern_ir::ast::NameKey;
use tern_ir::{DeclId, Specifiers, StringInterner, TermArena, TokenKind, TokenList};

use crate::{Input, ParseError, ParseOptions, ParseResult, Parser, ScopeKind, Scopes, TemplateContext};

struct Fixture {
    interner: StringInterner,
    tokens: TokenList,
    terms: TermArena,
    scopes: Scopes,
}

impl Fixture {
    fn new(source: &str) -> Self {
        let interner = StringInterner::new();
        let tokens = tern_lexer::lex(source, &interner);
        Fixture {
            interner,
            tokens,
            terms: TermArena::new(),
            scopes: Scopes::new(),
        }
    }

    fn parser(&mut self) -> Parser<'_, '_> {
        Parser::new(
            Input::new(&self.tokens, &self.interner),
            &mut self.terms,
            &mut self.scopes,
            ParseOptions::eager(),
        )
    }
}

fn bound(p: &Parser<'_, '_>, name: &str) -> bool {
    let key = NameKey::Simple(p.input.interner.intern(name));
    p.scopes.lookup(p.scopes.current(), key).is_some()
}

#[test]
fn test_attempt_keeps_effects_on_success() {
    let mut fx = Fixture::new("var a : int;");
    let mut p = fx.parser();
    assert!(p.attempt(Parser::declaration).is_ok());
    assert!(bound(&p, "a"));
    assert!(p.is_at_end());
    assert_eq!(p.terms.decl_count(), 1);
}

#[test]
fn test_attempt_rewinds_on_failure() {
    let mut fx = Fixture::new("var a : int; var b : int = ;");
    let mut p = fx.parser();
    let err = p
        .attempt(|p| {
            p.declaration()?;
            p.declaration()
        })
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(p.position(), 0);
    assert_eq!(p.terms.decl_count(), 0);
    assert!(!bound(&p, "a"));
    assert!(!bound(&p, "b"));
}

#[test]
fn test_rewind_restores_delimiter_depth_and_specifiers() {
    let mut fx = Fixture::new("static { ( x");
    let mut p = fx.parser();
    let result: Result<(), ParseError> = p.attempt(|p| {
        p.advance();
        p.state.specs |= Specifiers::STATIC;
        p.advance();
        p.advance();
        assert_eq!(p.state.depth(), 2);
        p.expect(TokenKind::Semicolon).map(|_| ())
    });
    assert!(result.is_err());
    assert_eq!(p.state.depth(), 0);
    assert!(p.state.specs.is_empty());
    assert_eq!(p.current_kind(), TokenKind::Static);
}

#[test]
fn test_rewind_restores_scopes() {
    let mut fx = Fixture::new("x");
    let mut p = fx.parser();
    let before = p.scopes.len();
    let result: Result<(), ParseError> = p.attempt(|p| {
        let outer = p.scopes.push(ScopeKind::Block, Scopes::root());
        let inner = p.scopes.push(ScopeKind::Block, outer);
        p.scopes.set_current(inner);
        Err(ParseError::expected_expression(p.current_kind(), p.current_span()))
    });
    assert!(result.is_err());
    assert_eq!(p.scopes.len(), before);
    assert_eq!(p.scopes.current(), Scopes::root());
}

#[test]
fn test_inner_success_is_undone_by_outer_failure() {
    let mut fx = Fixture::new("var a : int; var b : int; 1");
    let mut p = fx.parser();
    let result = p.attempt(|p| {
        p.declaration()?;
        assert!(p.trial(Parser::declaration).is_some());
        p.declaration()
    });
    assert!(result.is_err());
    assert!(!bound(&p, "a"));
    assert!(!bound(&p, "b"));
    assert_eq!(p.position(), 0);
}

#[test]
fn test_inner_failure_is_undone_within_outer_success() {
    let mut fx = Fixture::new("var a : int; var b : int; 1");
    let mut p = fx.parser();
    let result = p.attempt(|p| {
        let a = p.declaration()?;
        let inner = p.trial(|p| {
            p.declaration()?;
            p.expect(TokenKind::Comma)
        });
        assert!(inner.is_none());
        Ok(a)
    });
    assert!(result.is_ok());
    assert!(bound(&p, "a"));
    assert!(!bound(&p, "b"));
    assert_eq!(p.current_kind(), TokenKind::Var);
    assert_eq!(p.terms.decl_count(), 1);
}

#[test]
fn test_snapshot_and_restore() {
    let mut fx = Fixture::new("var a : int;");
    let mut p = fx.parser();
    let snapshot = p.snapshot();
    p.declaration().unwrap();
    assert!(bound(&p, "a"));
    p.restore(snapshot);
    assert!(!bound(&p, "a"));
    assert_eq!(p.position(), 0);
}

#[test]
fn test_with_template_reinstates_previous_context() {
    let mut fx = Fixture::new("");
    let mut p = fx.parser();
    let outer = TemplateContext {
        parms: vec![DeclId::new(7)],
        constraint: None,
    };
    p.state.template = Some(outer.clone());

    let (result, inner) = p.with_template(TemplateContext::default(), |p| {
        if let Some(template) = p.state.template.as_mut() {
            template.parms.push(DeclId::new(1));
        }
        Err::<(), _>(ParseError::expected_type(p.current_kind(), p.current_span()))
    });
    assert!(result.is_err());
    assert_eq!(inner.parms, vec![DeclId::new(1)]);
    assert_eq!(p.state.template, Some(outer));
}

#[test]
fn test_with_template_without_previous_context() {
    let mut fx = Fixture::new("");
    let mut p = fx.parser();
    let (result, context) = p.with_template(TemplateContext::default(), |_| Ok(3));
    assert_eq!(result, Ok(3));
    assert!(context.parms.is_empty());
    assert_eq!(p.state.template, None);
}

proptest! {
    /// However many declarations a failed alternative parsed, none survive.
    #[test]
    fn failed_alternative_leaves_no_trace(count in 0usize..8) {
        let mut source = String::new();
        for i in 0..count {
            source.push_str(&format!("var v{i} : int; class C{i} {{ def m() = 1; }}\n"));
        }
        source.push_str("var broken : int = ;");
        let mut fx = Fixture::new(&source);
        let mut p = fx.parser();
        let scopes_before = p.scopes.len();

        let result = p.attempt(|p| -> ParseResult<()> {
            loop {
                p.declaration()?;
            }
        });
        let _: ParseError = result.unwrap_err();
        prop_assert_eq!(p.position(), 0);
        prop_assert_eq!(p.terms.decl_count(), 0);
        prop_assert_eq!(p.scopes.len(), scopes_before);
        for i in 0..count {
            let var = format!("v{i}");
            let class = format!("C{i}");
            prop_assert!(!bound(&p, &var));
            prop_assert!(!bound(&p, &class));
        }
    }
}
