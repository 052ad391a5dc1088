//! Read-only term traversal.
//!
//! Default `visit_*` methods call the matching `walk_*` function, which
//! descends into every child of the term. Override a `visit_*` method to
//! observe a term and call the `walk_*` function to keep descending.
//!
//! References to other declarations (`Declared` types, `Ref` and `Overload`
//! expressions, template-ids) are not followed, so a walk from a statement
//! visits each owned term once.

use crate::ast::{DeclKind, DefKind, ExprKind, NameKind, ReqKind, StmtKind, TemplateArg, Term, TypeKind};
use crate::{DeclId, DefId, ExprId, NameId, ReqId, StmtId, TermArena, TyId};

/// Term visitor.
pub trait Visitor<'ast> {
    fn visit_name(&mut self, id: NameId, arena: &'ast TermArena) {
        walk_name(self, id, arena);
    }

    fn visit_type(&mut self, id: TyId, arena: &'ast TermArena) {
        walk_type(self, id, arena);
    }

    fn visit_expr(&mut self, id: ExprId, arena: &'ast TermArena) {
        walk_expr(self, id, arena);
    }

    fn visit_stmt(&mut self, id: StmtId, arena: &'ast TermArena) {
        walk_stmt(self, id, arena);
    }

    fn visit_decl(&mut self, id: DeclId, arena: &'ast TermArena) {
        walk_decl(self, id, arena);
    }

    fn visit_def(&mut self, id: DefId, arena: &'ast TermArena) {
        walk_def(self, id, arena);
    }

    fn visit_req(&mut self, id: ReqId, arena: &'ast TermArena) {
        walk_req(self, id, arena);
    }
}

pub fn walk_name<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: NameId,
    arena: &'ast TermArena,
) {
    if let NameKind::TemplateId { args, .. } = &arena.name(id).kind {
        for arg in args {
            match *arg {
                TemplateArg::Type(ty) => visitor.visit_type(ty, arena),
                TemplateArg::Expr(expr) => visitor.visit_expr(expr, arena),
            }
        }
    }
}

pub fn walk_type<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: TyId,
    arena: &'ast TermArena,
) {
    match &arena.ty(id).kind {
        TypeKind::Void
        | TypeKind::Bool
        | TypeKind::Int
        | TypeKind::Byte
        | TypeKind::Auto
        | TypeKind::TypeType
        | TypeKind::Unparsed(_) => {}
        TypeKind::Declared { name, .. } => visitor.visit_name(*name, arena),
        TypeKind::Function { params, ret } => {
            for param in params {
                visitor.visit_type(*param, arena);
            }
            visitor.visit_type(*ret, arena);
        }
        TypeKind::Reference(ty)
        | TypeKind::Pointer(ty)
        | TypeKind::Qualified { ty, .. }
        | TypeKind::Slice(ty)
        | TypeKind::Pack(ty) => visitor.visit_type(*ty, arena),
        TypeKind::Array { ty, len } => {
            visitor.visit_type(*ty, arena);
            visitor.visit_expr(*len, arena);
        }
        TypeKind::Tuple(elems) => {
            for elem in elems {
                visitor.visit_type(*elem, arena);
            }
        }
        TypeKind::Decltype(expr) => visitor.visit_expr(*expr, arena),
    }
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: ExprId,
    arena: &'ast TermArena,
) {
    match &arena.expr(id).kind {
        ExprKind::Bool(_) | ExprKind::Int(_) | ExprKind::Unparsed(_) => {}
        ExprKind::Ref { name, .. } | ExprKind::Overload { name, .. } => {
            visitor.visit_name(*name, arena);
        }
        ExprKind::Unary { operand, .. } => visitor.visit_expr(*operand, arena),
        ExprKind::Binary { left, right, .. } => {
            visitor.visit_expr(*left, arena);
            visitor.visit_expr(*right, arena);
        }
        ExprKind::Call { callee, args } => {
            visitor.visit_expr(*callee, arena);
            for arg in args {
                visitor.visit_expr(*arg, arena);
            }
        }
        ExprKind::Dot { object, member } => {
            visitor.visit_expr(*object, arena);
            visitor.visit_name(*member, arena);
        }
        ExprKind::Subscript { object, index } => {
            visitor.visit_expr(*object, arena);
            visitor.visit_expr(*index, arena);
        }
        ExprKind::Tuple(elems) => {
            for elem in elems {
                visitor.visit_expr(*elem, arena);
            }
        }
        ExprKind::Requires { parms, reqs, .. } => {
            for parm in parms {
                visitor.visit_decl(*parm, arena);
            }
            for req in reqs {
                visitor.visit_req(*req, arena);
            }
        }
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: StmtId,
    arena: &'ast TermArena,
) {
    match &arena.stmt(id).kind {
        StmtKind::Translation { stmts, .. }
        | StmtKind::Member { stmts, .. }
        | StmtKind::Compound { stmts, .. } => {
            for stmt in stmts {
                visitor.visit_stmt(*stmt, arena);
            }
        }
        StmtKind::Empty | StmtKind::Break | StmtKind::Continue | StmtKind::Unparsed(_) => {}
        StmtKind::Expression(expr) | StmtKind::Return(expr) | StmtKind::Yield(expr) => {
            visitor.visit_expr(*expr, arena);
        }
        StmtKind::Declaration(decl) => visitor.visit_decl(*decl, arena),
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            visitor.visit_expr(*cond, arena);
            visitor.visit_stmt(*then_branch, arena);
            if let Some(else_branch) = else_branch {
                visitor.visit_stmt(*else_branch, arena);
            }
        }
        StmtKind::While { cond, body } => {
            visitor.visit_expr(*cond, arena);
            visitor.visit_stmt(*body, arena);
        }
    }
}

pub fn walk_decl<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: DeclId,
    arena: &'ast TermArena,
) {
    let decl = arena.decl(id);
    visitor.visit_name(decl.name, arena);
    match &decl.kind {
        DeclKind::Variable { ty, def }
        | DeclKind::Field { ty, def }
        | DeclKind::Super { ty, def } => {
            visitor.visit_type(*ty, arena);
            visitor.visit_def(*def, arena);
        }
        DeclKind::Parameter { ty } => visitor.visit_type(*ty, arena),
        DeclKind::Function {
            params, ret, def, ..
        }
        | DeclKind::Coroutine { params, ret, def } => {
            for param in params {
                visitor.visit_decl(*param, arena);
            }
            visitor.visit_type(*ret, arena);
            visitor.visit_def(*def, arena);
        }
        DeclKind::Class { kind, def } => {
            visitor.visit_type(*kind, arena);
            visitor.visit_def(*def, arena);
        }
        DeclKind::TypeParameter { default, .. } => {
            if let Some(default) = default {
                visitor.visit_type(*default, arena);
            }
        }
        DeclKind::Concept { parms, def } => {
            for parm in parms {
                visitor.visit_decl(*parm, arena);
            }
            visitor.visit_def(*def, arena);
        }
        DeclKind::Namespace { body } => visitor.visit_stmt(*body, arena),
        DeclKind::Template {
            parms,
            constraint,
            decl,
        } => {
            for parm in parms {
                visitor.visit_decl(*parm, arena);
            }
            if let Some(constraint) = constraint {
                visitor.visit_expr(*constraint, arena);
            }
            visitor.visit_decl(*decl, arena);
        }
    }
}

pub fn walk_def<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: DefId,
    arena: &'ast TermArena,
) {
    match &arena.def(id).kind {
        DefKind::Empty | DefKind::Deleted | DefKind::Defaulted => {}
        DefKind::Expression(expr) => visitor.visit_expr(*expr, arena),
        DefKind::Function(stmt) | DefKind::Class(stmt) => visitor.visit_stmt(*stmt, arena),
        DefKind::Concept(reqs) => {
            for req in reqs {
                visitor.visit_req(*req, arena);
            }
        }
    }
}

pub fn walk_req<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: ReqId,
    arena: &'ast TermArena,
) {
    match &arena.req(id).kind {
        ReqKind::Type(ty) => visitor.visit_type(*ty, arena),
        ReqKind::Syntactic(expr) | ReqKind::Expression(expr) | ReqKind::Basic(expr) => {
            visitor.visit_expr(*expr, arena);
        }
        ReqKind::Conversion { expr, ty } | ReqKind::Deduction { expr, ty } => {
            visitor.visit_expr(*expr, arena);
            visitor.visit_type(*ty, arena);
        }
    }
}

/// Finds the first Unparsed-term reachable from a statement.
struct UnparsedFinder {
    found: Option<Term>,
}

impl<'ast> Visitor<'ast> for UnparsedFinder {
    fn visit_type(&mut self, id: TyId, arena: &'ast TermArena) {
        if self.found.is_some() {
            return;
        }
        if arena.ty(id).kind.is_unparsed() {
            self.found = Some(Term::Type(id));
            return;
        }
        walk_type(self, id, arena);
    }

    fn visit_expr(&mut self, id: ExprId, arena: &'ast TermArena) {
        if self.found.is_some() {
            return;
        }
        if arena.expr(id).kind.is_unparsed() {
            self.found = Some(Term::Expr(id));
            return;
        }
        walk_expr(self, id, arena);
    }

    fn visit_stmt(&mut self, id: StmtId, arena: &'ast TermArena) {
        if self.found.is_some() {
            return;
        }
        if arena.stmt(id).kind.is_unparsed() {
            self.found = Some(Term::Stmt(id));
            return;
        }
        walk_stmt(self, id, arena);
    }
}

/// The first Unparsed-term reachable from `root`, if any.
pub fn find_unparsed(arena: &TermArena, root: StmtId) -> Option<Term> {
    let mut finder = UnparsedFinder { found: None };
    finder.visit_stmt(root, arena);
    finder.found
}

#[cfg(test)]
mod tests;
