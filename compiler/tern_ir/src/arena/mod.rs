//! Term arena.
//!
//! Terms are allocated once and never move; every reference between terms is
//! an id. Deferred fragments are resolved by writing a freshly parsed kind into
//! the existing slot, so ids captured earlier (in overload sets, in enclosing
//! terms) keep pointing at the resolved term.

use crate::ast::{
    Decl, Def, DefKind, Expr, ExprKind, NameKey, NameKind, NameTerm, Req, ReqKind, Stmt,
    StmtKind, Term, Type, TypeKind,
};
use crate::{DeclId, DefId, ExprId, NameId, ReqId, Span, StmtId, TyId};

/// Per-family lengths captured for speculative parsing.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ArenaCheckpoint {
    names: usize,
    types: usize,
    exprs: usize,
    stmts: usize,
    decls: usize,
    defs: usize,
    reqs: usize,
    placeholders: u32,
}

/// Storage for every term of one compilation.
#[derive(Clone, Debug, Default)]
pub struct TermArena {
    names: Vec<NameTerm>,
    types: Vec<Type>,
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    decls: Vec<Decl>,
    defs: Vec<Def>,
    reqs: Vec<Req>,
    placeholders: u32,
}

impl TermArena {
    pub fn new() -> Self {
        Self::default()
    }

    // Names

    pub fn alloc_name(&mut self, kind: NameKind, span: Span) -> NameId {
        let id = NameId::from_usize(self.names.len());
        self.names.push(NameTerm { kind, span });
        id
    }

    /// Allocate a name with a fresh placeholder spelling.
    pub fn alloc_placeholder(&mut self, span: Span) -> NameId {
        let n = self.placeholders;
        self.placeholders += 1;
        self.alloc_name(NameKind::Placeholder(n), span)
    }

    #[inline]
    pub fn name(&self, id: NameId) -> &NameTerm {
        &self.names[id.index()]
    }

    /// The scope key a name is bound under.
    ///
    /// A template-id is keyed by the template it names.
    pub fn key_of(&self, id: NameId) -> NameKey {
        match &self.name(id).kind {
            NameKind::Simple(name) => NameKey::Simple(*name),
            NameKind::Placeholder(n) => NameKey::Placeholder(*n),
            NameKind::TemplateId { template, .. } => self.decl_key(*template),
        }
    }

    #[inline]
    pub fn decl_key(&self, id: DeclId) -> NameKey {
        self.key_of(self.decl(id).name)
    }

    // Types

    pub fn alloc_type(&mut self, kind: TypeKind, span: Span) -> TyId {
        let id = TyId::from_usize(self.types.len());
        self.types.push(Type { kind, span });
        id
    }

    #[inline]
    pub fn ty(&self, id: TyId) -> &Type {
        &self.types[id.index()]
    }

    /// Move the kind of `from` into the slot of `target`.
    ///
    /// `from` is left as `void` and is unreachable afterwards.
    pub fn replace_type(&mut self, target: TyId, from: TyId) {
        if target == from {
            return;
        }
        let source = std::mem::replace(
            &mut self.types[from.index()],
            Type {
                kind: TypeKind::Void,
                span: Span::DUMMY,
            },
        );
        self.types[target.index()] = source;
    }

    // Expressions

    pub fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = ExprId::from_usize(self.exprs.len());
        self.exprs.push(Expr { kind, span });
        id
    }

    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Move the kind of `from` into the slot of `target`.
    pub fn replace_expr(&mut self, target: ExprId, from: ExprId) {
        if target == from {
            return;
        }
        let source = std::mem::replace(
            &mut self.exprs[from.index()],
            Expr {
                kind: ExprKind::Bool(false),
                span: Span::DUMMY,
            },
        );
        self.exprs[target.index()] = source;
    }

    // Statements

    pub fn alloc_stmt(&mut self, kind: StmtKind, span: Span) -> StmtId {
        let id = StmtId::from_usize(self.stmts.len());
        self.stmts.push(Stmt { kind, span });
        id
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    #[inline]
    pub fn stmt_mut(&mut self, id: StmtId) -> &mut Stmt {
        &mut self.stmts[id.index()]
    }

    /// Move the kind of `from` into the slot of `target`.
    pub fn replace_stmt(&mut self, target: StmtId, from: StmtId) {
        if target == from {
            return;
        }
        let source = std::mem::replace(
            &mut self.stmts[from.index()],
            Stmt {
                kind: StmtKind::Empty,
                span: Span::DUMMY,
            },
        );
        self.stmts[target.index()] = source;
    }

    // Declarations

    pub fn alloc_decl(&mut self, decl: Decl) -> DeclId {
        let id = DeclId::from_usize(self.decls.len());
        self.decls.push(decl);
        id
    }

    #[inline]
    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    #[inline]
    pub fn decl_mut(&mut self, id: DeclId) -> &mut Decl {
        &mut self.decls[id.index()]
    }

    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }

    // Definitions

    pub fn alloc_def(&mut self, kind: DefKind, span: Span) -> DefId {
        let id = DefId::from_usize(self.defs.len());
        self.defs.push(Def { kind, span });
        id
    }

    #[inline]
    pub fn def(&self, id: DefId) -> &Def {
        &self.defs[id.index()]
    }

    // Requirements

    pub fn alloc_req(&mut self, kind: ReqKind, span: Span) -> ReqId {
        let id = ReqId::from_usize(self.reqs.len());
        self.reqs.push(Req { kind, span });
        id
    }

    #[inline]
    pub fn req(&self, id: ReqId) -> &Req {
        &self.reqs[id.index()]
    }

    // Any term

    pub fn span_of(&self, term: Term) -> Span {
        match term {
            Term::Name(id) => self.name(id).span,
            Term::Type(id) => self.ty(id).span,
            Term::Expr(id) => self.expr(id).span,
            Term::Stmt(id) => self.stmt(id).span,
            Term::Decl(id) => self.decl(id).span,
            Term::Def(id) => self.def(id).span,
            Term::Req(id) => self.req(id).span,
        }
    }

    // Speculation

    pub fn checkpoint(&self) -> ArenaCheckpoint {
        ArenaCheckpoint {
            names: self.names.len(),
            types: self.types.len(),
            exprs: self.exprs.len(),
            stmts: self.stmts.len(),
            decls: self.decls.len(),
            defs: self.defs.len(),
            reqs: self.reqs.len(),
            placeholders: self.placeholders,
        }
    }

    /// Drop every term allocated since `cp`.
    pub fn rollback(&mut self, cp: ArenaCheckpoint) {
        self.names.truncate(cp.names);
        self.types.truncate(cp.types);
        self.exprs.truncate(cp.exprs);
        self.stmts.truncate(cp.stmts);
        self.decls.truncate(cp.decls);
        self.defs.truncate(cp.defs);
        self.reqs.truncate(cp.reqs);
        self.placeholders = cp.placeholders;
    }
}

#[cfg(test)]
mod tests;
