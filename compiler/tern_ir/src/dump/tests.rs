use super::*;
use crate::ast::{BinaryOp, Decl, Phase};
use crate::{ScopeId, Span, Specifiers};
use pretty_assertions::assert_eq;

#[test]
fn test_dump_variable_with_initializer() {
    let interner = StringInterner::new();
    let mut arena = TermArena::new();
    let name = arena.alloc_name(NameKind::Simple(interner.intern("x")), Span::DUMMY);
    let int = arena.alloc_type(TypeKind::Int, Span::DUMMY);
    let cref = arena.alloc_type(TypeKind::Reference(int), Span::DUMMY);
    let one = arena.alloc_expr(ExprKind::Int(1), Span::DUMMY);
    let two = arena.alloc_expr(ExprKind::Int(2), Span::DUMMY);
    let sum = arena.alloc_expr(
        ExprKind::Binary {
            op: BinaryOp::Add,
            left: one,
            right: two,
        },
        Span::DUMMY,
    );
    let def = arena.alloc_def(DefKind::Expression(sum), Span::DUMMY);
    let x = arena.alloc_decl(Decl {
        name,
        specs: Specifiers::empty(),
        kind: DeclKind::Variable { ty: cref, def },
        span: Span::DUMMY,
        scope: ScopeId::new(0),
        phase: Phase::Unelaborated,
    });

    assert_eq!(decl(&arena, &interner, x), "(var x (& int) (= (+ 1 2)))");
}

#[test]
fn test_dump_reference_prints_name_not_id() {
    let interner = StringInterner::new();
    let mut arena = TermArena::new();
    let name = arena.alloc_name(NameKind::Simple(interner.intern("g")), Span::DUMMY);
    let ret = arena.alloc_type(TypeKind::Auto, Span::DUMMY);
    let def = arena.alloc_def(DefKind::Empty, Span::DUMMY);
    let g = arena.alloc_decl(Decl {
        name,
        specs: Specifiers::empty(),
        kind: DeclKind::Function {
            params: Vec::new(),
            ret,
            def,
            member: false,
        },
        span: Span::DUMMY,
        scope: ScopeId::new(0),
        phase: Phase::Unelaborated,
    });
    let callee = arena.alloc_expr(ExprKind::Ref { decl: g, name }, Span::DUMMY);
    let call = arena.alloc_expr(
        ExprKind::Call {
            callee,
            args: Vec::new(),
        },
        Span::DUMMY,
    );
    let ret_stmt = arena.alloc_stmt(StmtKind::Return(call), Span::DUMMY);

    assert_eq!(stmt(&arena, &interner, ret_stmt), "(return (call g))");
    assert_eq!(decl(&arena, &interner, g), "(def g () auto ;)");
}
