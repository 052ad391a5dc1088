use super::*;
use crate::ast::Phase;
use crate::{ScopeId, Specifiers, StringInterner, TokenRange};
use pretty_assertions::assert_eq;

fn variable(arena: &mut TermArena, interner: &StringInterner, name: &str) -> DeclId {
    let name = arena.alloc_name(NameKind::Simple(interner.intern(name)), Span::DUMMY);
    let ty = arena.alloc_type(TypeKind::Unparsed(TokenRange::new(2, 3)), Span::new(4, 7));
    let def = arena.alloc_def(DefKind::Empty, Span::DUMMY);
    arena.alloc_decl(Decl {
        name,
        specs: Specifiers::empty(),
        kind: crate::ast::DeclKind::Variable { ty, def },
        span: Span::new(0, 8),
        scope: ScopeId::new(0),
        phase: Phase::Unelaborated,
    })
}

#[test]
fn test_replace_type_preserves_identity() {
    let interner = StringInterner::new();
    let mut arena = TermArena::new();
    let x = variable(&mut arena, &interner, "x");
    let crate::ast::DeclKind::Variable { ty, .. } = arena.decl(x).kind else {
        panic!("expected variable");
    };

    let parsed = arena.alloc_type(TypeKind::Int, Span::new(4, 7));
    arena.replace_type(ty, parsed);

    assert_eq!(arena.ty(ty).kind, TypeKind::Int);
    assert_eq!(arena.ty(ty).span, Span::new(4, 7));
    assert_eq!(arena.ty(parsed).kind, TypeKind::Void);
}

#[test]
fn test_replace_with_self_is_noop() {
    let mut arena = TermArena::new();
    let e = arena.alloc_expr(ExprKind::Int(4), Span::DUMMY);
    arena.replace_expr(e, e);
    assert_eq!(arena.expr(e).kind, ExprKind::Int(4));
}

#[test]
fn test_key_of_template_id_uses_template_name() {
    let interner = StringInterner::new();
    let mut arena = TermArena::new();
    let c = variable(&mut arena, &interner, "C");
    let id = arena.alloc_name(
        NameKind::TemplateId {
            template: c,
            args: Vec::new(),
        },
        Span::DUMMY,
    );
    assert_eq!(arena.key_of(id), NameKey::Simple(interner.intern("C")));
}

#[test]
fn test_rollback_discards_later_terms() {
    let interner = StringInterner::new();
    let mut arena = TermArena::new();
    variable(&mut arena, &interner, "a");
    let cp = arena.checkpoint();

    variable(&mut arena, &interner, "b");
    let p = arena.alloc_placeholder(Span::DUMMY);
    assert_eq!(arena.key_of(p), NameKey::Placeholder(0));
    assert_eq!(arena.decl_count(), 2);

    arena.rollback(cp);
    assert_eq!(arena.decl_count(), 1);
    assert_eq!(arena.checkpoint(), cp);

    // The placeholder counter rewinds with the arena.
    let again = arena.alloc_placeholder(Span::DUMMY);
    assert_eq!(arena.key_of(again), NameKey::Placeholder(0));
}

#[test]
fn test_span_of_each_family() {
    let interner = StringInterner::new();
    let mut arena = TermArena::new();
    let x = variable(&mut arena, &interner, "x");
    assert_eq!(arena.span_of(Term::Decl(x)), Span::new(0, 8));
    assert_eq!(Term::Decl(x).family(), crate::ast::Family::Declaration);
}
