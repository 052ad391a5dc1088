//! S-expression rendering of terms.
//!
//! The output never mentions ids: declarations print by name and references
//! print the referenced name. Two trees of the same shape render to the same
//! string even when their terms were allocated in a different order.

use crate::ast::{
    DeclKind, DefKind, ExprKind, NameKind, ReqKind, StmtKind, TemplateArg, TypeKind,
};
use crate::{DeclId, DefId, ExprId, NameId, ReqId, StmtId, StringInterner, TermArena, TyId};

/// Render a statement and everything it owns.
pub fn stmt(arena: &TermArena, interner: &StringInterner, id: StmtId) -> String {
    let mut printer = Printer::new(arena, interner);
    printer.stmt(id);
    printer.out
}

/// Render a declaration and everything it owns.
pub fn decl(arena: &TermArena, interner: &StringInterner, id: DeclId) -> String {
    let mut printer = Printer::new(arena, interner);
    printer.decl(id);
    printer.out
}

/// Render a type.
pub fn ty(arena: &TermArena, interner: &StringInterner, id: TyId) -> String {
    let mut printer = Printer::new(arena, interner);
    printer.ty(id);
    printer.out
}

/// Render an expression.
pub fn expr(arena: &TermArena, interner: &StringInterner, id: ExprId) -> String {
    let mut printer = Printer::new(arena, interner);
    printer.expr(id);
    printer.out
}

struct Printer<'a> {
    arena: &'a TermArena,
    interner: &'a StringInterner,
    out: String,
}

impl<'a> Printer<'a> {
    fn new(arena: &'a TermArena, interner: &'a StringInterner) -> Self {
        Printer {
            arena,
            interner,
            out: String::new(),
        }
    }

    fn open(&mut self, head: &str) {
        self.out.push('(');
        self.out.push_str(head);
    }

    fn close(&mut self) {
        self.out.push(')');
    }

    fn space(&mut self) {
        self.out.push(' ');
    }

    fn name(&mut self, id: NameId) {
        let arena = self.arena;
        match &arena.name(id).kind {
            NameKind::Simple(name) => self.out.push_str(self.interner.lookup(*name)),
            NameKind::Placeholder(_) => self.out.push('_'),
            NameKind::TemplateId { template, args } => {
                self.name(arena.decl(*template).name);
                self.out.push('<');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.space();
                    }
                    match *arg {
                        TemplateArg::Type(ty) => self.ty(ty),
                        TemplateArg::Expr(expr) => self.expr(expr),
                    }
                }
                self.out.push('>');
            }
        }
    }

    fn list<T: Copy>(&mut self, items: &[T], mut each: impl FnMut(&mut Self, T)) {
        self.out.push('(');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.space();
            }
            each(self, *item);
        }
        self.out.push(')');
    }

    fn ty(&mut self, id: TyId) {
        let arena = self.arena;
        match &arena.ty(id).kind {
            TypeKind::Void => self.out.push_str("void"),
            TypeKind::Bool => self.out.push_str("bool"),
            TypeKind::Int => self.out.push_str("int"),
            TypeKind::Byte => self.out.push_str("byte"),
            TypeKind::Auto => self.out.push_str("auto"),
            TypeKind::TypeType => self.out.push_str("typename"),
            TypeKind::Declared { name, .. } => self.name(*name),
            TypeKind::Function { params, ret } => {
                self.open("fn ");
                self.list(params, Self::ty);
                self.space();
                self.ty(*ret);
                self.close();
            }
            TypeKind::Reference(inner) => self.unary_type("&", *inner),
            TypeKind::Pointer(inner) => self.unary_type("*", *inner),
            TypeKind::Qualified { ty, quals } => {
                let head = match (
                    quals.contains(crate::Qualifiers::CONST),
                    quals.contains(crate::Qualifiers::VOLATILE),
                ) {
                    (true, true) => "const volatile",
                    (false, true) => "volatile",
                    _ => "const",
                };
                self.unary_type(head, *ty);
            }
            TypeKind::Array { ty, len } => {
                self.open("array ");
                self.ty(*ty);
                self.space();
                self.expr(*len);
                self.close();
            }
            TypeKind::Slice(inner) => self.unary_type("slice", *inner),
            TypeKind::Tuple(elems) => {
                self.open("tuple ");
                self.list(elems, Self::ty);
                self.close();
            }
            TypeKind::Pack(inner) => self.unary_type("pack", *inner),
            TypeKind::Decltype(expr) => {
                self.open("decltype ");
                self.expr(*expr);
                self.close();
            }
            TypeKind::Unparsed(range) => {
                self.out.push_str(&format!("(unparsed {})", range.len()));
            }
        }
    }

    fn unary_type(&mut self, head: &str, inner: TyId) {
        self.open(head);
        self.space();
        self.ty(inner);
        self.close();
    }

    fn expr(&mut self, id: ExprId) {
        let arena = self.arena;
        match &arena.expr(id).kind {
            ExprKind::Bool(value) => self.out.push_str(if *value { "true" } else { "false" }),
            ExprKind::Int(value) => self.out.push_str(&value.to_string()),
            ExprKind::Ref { name, .. } => self.name(*name),
            ExprKind::Overload { name, decls } => {
                self.open("overload ");
                self.name(*name);
                self.out.push_str(&format!(" {})", decls.len()));
            }
            ExprKind::Unary { op, operand } => {
                self.open(op.as_symbol());
                self.space();
                self.expr(*operand);
                self.close();
            }
            ExprKind::Binary { op, left, right } => {
                self.open(op.as_symbol());
                self.space();
                self.expr(*left);
                self.space();
                self.expr(*right);
                self.close();
            }
            ExprKind::Call { callee, args } => {
                self.open("call ");
                self.expr(*callee);
                for arg in args {
                    self.space();
                    self.expr(*arg);
                }
                self.close();
            }
            ExprKind::Dot { object, member } => {
                self.open(". ");
                self.expr(*object);
                self.space();
                self.name(*member);
                self.close();
            }
            ExprKind::Subscript { object, index } => {
                self.open("[] ");
                self.expr(*object);
                self.space();
                self.expr(*index);
                self.close();
            }
            ExprKind::Tuple(elems) => {
                self.open("tuple ");
                self.list(elems, Self::expr);
                self.close();
            }
            ExprKind::Requires { parms, reqs, .. } => {
                self.open("requires ");
                self.list(parms, Self::decl);
                for req in reqs {
                    self.space();
                    self.req(*req);
                }
                self.close();
            }
            ExprKind::Unparsed(range) => {
                self.out.push_str(&format!("(unparsed {})", range.len()));
            }
        }
    }

    fn stmt(&mut self, id: StmtId) {
        let arena = self.arena;
        match &arena.stmt(id).kind {
            StmtKind::Translation { stmts, .. } => self.block("translation", stmts),
            StmtKind::Member { stmts, .. } => self.block("members", stmts),
            StmtKind::Compound { stmts, .. } => self.block("block", stmts),
            StmtKind::Empty => self.out.push_str("(;)"),
            StmtKind::Expression(expr) => self.stmt_expr("expr", *expr),
            StmtKind::Declaration(decl) => self.decl(*decl),
            StmtKind::Return(expr) => self.stmt_expr("return", *expr),
            StmtKind::Yield(expr) => self.stmt_expr("yield", *expr),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.open("if ");
                self.expr(*cond);
                self.space();
                self.stmt(*then_branch);
                if let Some(else_branch) = else_branch {
                    self.space();
                    self.stmt(*else_branch);
                }
                self.close();
            }
            StmtKind::While { cond, body } => {
                self.open("while ");
                self.expr(*cond);
                self.space();
                self.stmt(*body);
                self.close();
            }
            StmtKind::Break => self.out.push_str("(break)"),
            StmtKind::Continue => self.out.push_str("(continue)"),
            StmtKind::Unparsed(range) => {
                self.out.push_str(&format!("(unparsed {})", range.len()));
            }
        }
    }

    fn block(&mut self, head: &str, stmts: &[StmtId]) {
        self.open(head);
        for stmt in stmts {
            self.space();
            self.stmt(*stmt);
        }
        self.close();
    }

    fn stmt_expr(&mut self, head: &str, expr: ExprId) {
        self.open(head);
        self.space();
        self.expr(expr);
        self.close();
    }

    fn decl(&mut self, id: DeclId) {
        let arena = self.arena;
        let decl = arena.decl(id);
        match &decl.kind {
            DeclKind::Variable { ty, def } => self.typed_decl("var", decl.name, *ty, *def),
            DeclKind::Field { ty, def } => self.typed_decl("field", decl.name, *ty, *def),
            DeclKind::Super { ty, def } => self.typed_decl("super", decl.name, *ty, *def),
            DeclKind::Parameter { ty } => {
                self.open("parm ");
                self.name(decl.name);
                self.space();
                self.ty(*ty);
                self.close();
            }
            DeclKind::Function {
                params,
                ret,
                def,
                member,
            } => {
                let head = if *member { "method" } else { "def" };
                self.callable(head, decl.name, params, *ret, *def);
            }
            DeclKind::Coroutine { params, ret, def } => {
                self.callable("codef", decl.name, params, *ret, *def);
            }
            DeclKind::Class { kind, def } => {
                self.open("class ");
                self.name(decl.name);
                self.space();
                self.ty(*kind);
                self.space();
                self.def(*def);
                self.close();
            }
            DeclKind::TypeParameter { default, .. } => {
                self.open("typename ");
                self.name(decl.name);
                if let Some(default) = default {
                    self.space();
                    self.ty(*default);
                }
                self.close();
            }
            DeclKind::Concept { parms, def } => {
                self.open("concept ");
                self.name(decl.name);
                self.space();
                self.list(parms, Self::decl);
                self.space();
                self.def(*def);
                self.close();
            }
            DeclKind::Namespace { body } => {
                self.open("namespace ");
                self.name(decl.name);
                self.space();
                self.stmt(*body);
                self.close();
            }
            DeclKind::Template {
                parms,
                constraint,
                decl: inner,
            } => {
                self.open("template ");
                self.list(parms, Self::decl);
                if let Some(constraint) = constraint {
                    self.out.push_str(" (requires ");
                    self.expr(*constraint);
                    self.close();
                }
                self.space();
                self.decl(*inner);
                self.close();
            }
        }
    }

    fn typed_decl(&mut self, head: &str, name: NameId, ty: TyId, def: DefId) {
        self.open(head);
        self.space();
        self.name(name);
        self.space();
        self.ty(ty);
        self.space();
        self.def(def);
        self.close();
    }

    fn callable(&mut self, head: &str, name: NameId, params: &[DeclId], ret: TyId, def: DefId) {
        self.open(head);
        self.space();
        self.name(name);
        self.space();
        self.list(params, Self::decl);
        self.space();
        self.ty(ret);
        self.space();
        self.def(def);
        self.close();
    }

    fn def(&mut self, id: DefId) {
        let arena = self.arena;
        match &arena.def(id).kind {
            DefKind::Empty => self.out.push(';'),
            DefKind::Expression(expr) => {
                self.out.push_str("(= ");
                self.expr(*expr);
                self.close();
            }
            DefKind::Function(stmt) | DefKind::Class(stmt) => self.stmt(*stmt),
            DefKind::Concept(reqs) => {
                self.open("reqs");
                for req in reqs {
                    self.space();
                    self.req(*req);
                }
                self.close();
            }
            DefKind::Deleted => self.out.push_str("(= delete)"),
            DefKind::Defaulted => self.out.push_str("(= default)"),
        }
    }

    fn req(&mut self, id: ReqId) {
        let arena = self.arena;
        match &arena.req(id).kind {
            ReqKind::Type(ty) => {
                self.open("typename ");
                self.ty(*ty);
                self.close();
            }
            ReqKind::Syntactic(expr) => self.stmt_expr("requires", *expr),
            ReqKind::Expression(expr) => self.stmt_expr("req", *expr),
            ReqKind::Basic(expr) => self.stmt_expr("basic", *expr),
            ReqKind::Conversion { expr, ty } => self.typed_req(":", *expr, *ty),
            ReqKind::Deduction { expr, ty } => self.typed_req("->", *expr, *ty),
        }
    }

    fn typed_req(&mut self, head: &str, expr: ExprId, ty: TyId) {
        self.open(head);
        self.space();
        self.expr(expr);
        self.space();
        self.ty(ty);
        self.close();
    }
}

#[cfg(test)]
mod tests;
