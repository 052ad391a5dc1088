use super::*;
use crate::ast::{Decl, Phase};
use crate::{ScopeId, Span, Specifiers, TokenRange};

fn block(arena: &mut TermArena, stmts: Vec<StmtId>) -> StmtId {
    arena.alloc_stmt(
        StmtKind::Compound {
            stmts,
            scope: ScopeId::new(0),
        },
        Span::DUMMY,
    )
}

fn declaration(arena: &mut TermArena, ty: TypeKind) -> (StmtId, TyId) {
    let name = arena.alloc_placeholder(Span::DUMMY);
    let ty = arena.alloc_type(ty, Span::DUMMY);
    let def = arena.alloc_def(DefKind::Empty, Span::DUMMY);
    let decl = arena.alloc_decl(Decl {
        name,
        specs: Specifiers::empty(),
        kind: DeclKind::Variable { ty, def },
        span: Span::DUMMY,
        scope: ScopeId::new(0),
        phase: Phase::Unelaborated,
    });
    (arena.alloc_stmt(StmtKind::Declaration(decl), Span::DUMMY), ty)
}

#[test]
fn test_find_unparsed_in_nested_declaration() {
    let mut arena = TermArena::new();
    let (parsed, _) = declaration(&mut arena, TypeKind::Int);
    let (deferred, soup) = declaration(&mut arena, TypeKind::Unparsed(TokenRange::new(0, 1)));
    let inner = block(&mut arena, vec![deferred]);
    let root = block(&mut arena, vec![parsed, inner]);

    assert_eq!(find_unparsed(&arena, root), Some(Term::Type(soup)));

    let int = arena.alloc_type(TypeKind::Int, Span::DUMMY);
    arena.replace_type(soup, int);
    assert_eq!(find_unparsed(&arena, root), None);
}

#[test]
fn test_find_unparsed_statement() {
    let mut arena = TermArena::new();
    let body = arena.alloc_stmt(StmtKind::Unparsed(TokenRange::new(0, 2)), Span::DUMMY);
    let cond = arena.alloc_expr(ExprKind::Bool(true), Span::DUMMY);
    let w = arena.alloc_stmt(StmtKind::While { cond, body }, Span::DUMMY);
    let root = block(&mut arena, vec![w]);
    assert_eq!(find_unparsed(&arena, root), Some(Term::Stmt(body)));
}

struct CountExprs(usize);

impl<'ast> Visitor<'ast> for CountExprs {
    fn visit_expr(&mut self, id: ExprId, arena: &'ast TermArena) {
        self.0 += 1;
        walk_expr(self, id, arena);
    }
}

#[test]
fn test_walk_reaches_every_operand() {
    let mut arena = TermArena::new();
    let one = arena.alloc_expr(ExprKind::Int(1), Span::DUMMY);
    let two = arena.alloc_expr(ExprKind::Int(2), Span::DUMMY);
    let sum = arena.alloc_expr(
        ExprKind::Binary {
            op: crate::ast::BinaryOp::Add,
            left: one,
            right: two,
        },
        Span::DUMMY,
    );
    let ret = arena.alloc_stmt(StmtKind::Return(sum), Span::DUMMY);
    let root = block(&mut arena, vec![ret]);

    let mut counter = CountExprs(0);
    counter.visit_stmt(root, &arena);
    assert_eq!(counter.0, 3);
}
