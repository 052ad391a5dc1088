//! The four elaboration passes over one statement list.
//!
//! Each pass visits every declaration of the list before the next pass
//! starts, even when a declaration has nothing to do in that pass. Nested
//! lists (class bodies, blocks inside function bodies) are reached from
//! pass 4 of their enclosing declaration and get a full run of their own.

mod definitions;
mod overloads;
mod partials;
mod types;

use tern_ir::ast::{ExprKind, Phase, StmtKind};
use tern_ir::visitor::{walk_expr, Visitor};
use tern_ir::{DeclId, ExprId, ScopeId, StmtId, TermArena};

use crate::{ElabError, Elaborator};

impl Elaborator<'_, '_> {
    /// Run passes 1 through 4 over `stmts`, whose declarations live in
    /// `scope`.
    pub(crate) fn elaborate_list(&mut self, stmts: &[StmtId], scope: ScopeId) -> Result<(), ElabError> {
        tracing::debug!(?scope, statements = stmts.len(), "pass 1: declaration types");
        for &stmt in stmts {
            if let Some(decl) = self.declaration_of(stmt) {
                self.elaborate_type(Some(stmt), decl, None)?;
                self.settle_requires(decl, Phase::TypeElaborated);
            }
        }

        tracing::debug!(?scope, "pass 2: overload sets");
        for &stmt in stmts {
            if let Some(decl) = self.declaration_of(stmt) {
                self.collect_overload(decl);
            }
        }

        tracing::debug!(?scope, "pass 3: partial definitions");
        let decls: Vec<DeclId> = stmts.iter().filter_map(|s| self.declaration_of(*s)).collect();
        self.merge_partials(&decls);

        tracing::debug!(?scope, "pass 4: definitions");
        for &stmt in stmts {
            match self.declaration_of(stmt) {
                Some(decl) => {
                    self.elaborate_definition(decl)?;
                    self.settle_requires(decl, Phase::DefinitionElaborated);
                }
                None => self.elaborate_statement(stmt, scope)?,
            }
        }
        Ok(())
    }

    /// Descend into the lists nested in a statement of a function body.
    fn elaborate_statement(&mut self, stmt: StmtId, scope: ScopeId) -> Result<(), ElabError> {
        match &self.terms.stmt(stmt).kind {
            StmtKind::Translation { stmts, scope }
            | StmtKind::Member { stmts, scope }
            | StmtKind::Compound { stmts, scope } => {
                let (stmts, scope) = (stmts.clone(), *scope);
                self.elaborate_list(&stmts, scope)
            }
            StmtKind::If {
                then_branch,
                else_branch,
                ..
            } => {
                let (then_branch, else_branch) = (*then_branch, *else_branch);
                self.elaborate_statement(then_branch, scope)?;
                match else_branch {
                    Some(branch) => self.elaborate_statement(branch, scope),
                    None => Ok(()),
                }
            }
            StmtKind::While { body, .. } => {
                let body = *body;
                self.elaborate_statement(body, scope)
            }
            // A declaration standing alone as a branch is a list of one.
            StmtKind::Declaration(_) => self.elaborate_list(&[stmt], scope),
            StmtKind::Empty
            | StmtKind::Expression(_)
            | StmtKind::Return(_)
            | StmtKind::Yield(_)
            | StmtKind::Break
            | StmtKind::Continue
            | StmtKind::Unparsed(_) => Ok(()),
        }
    }

    /// Requires-expression parameters are not listed in any statement, so
    /// they follow the declaration whose terms own them.
    fn settle_requires(&mut self, decl: DeclId, to: Phase) {
        let mut parms = RequiresParms::default();
        parms.visit_decl(decl, self.terms);
        for parm in parms.0 {
            self.settle(parm, to);
        }
    }

    fn declaration_of(&self, stmt: StmtId) -> Option<DeclId> {
        match self.terms.stmt(stmt).kind {
            StmtKind::Declaration(decl) => Some(decl),
            _ => None,
        }
    }

    /// Step `decl` forward one phase at a time until it reaches `to`.
    fn settle(&mut self, decl: DeclId, to: Phase) {
        let d = self.terms.decl_mut(decl);
        while d.phase < to {
            let Some(next) = d.phase.next() else {
                break;
            };
            d.advance(next);
        }
    }
}

/// Collects the parameters of every requires-expression under a term.
#[derive(Default)]
struct RequiresParms(Vec<DeclId>);

impl<'ast> Visitor<'ast> for RequiresParms {
    fn visit_expr(&mut self, id: ExprId, arena: &'ast TermArena) {
        if let ExprKind::Requires { parms, .. } = &arena.expr(id).kind {
            self.0.extend_from_slice(parms);
        }
        walk_expr(self, id, arena);
    }
}

pub(crate) fn stmt_kind_name(kind: &StmtKind) -> &'static str {
    match kind {
        StmtKind::Translation { .. } => "translation",
        StmtKind::Member { .. } => "member list",
        StmtKind::Compound { .. } => "compound",
        StmtKind::Empty => "empty",
        StmtKind::Expression(_) => "expression",
        StmtKind::Declaration(_) => "declaration",
        StmtKind::Return(_) => "return",
        StmtKind::Yield(_) => "yield",
        StmtKind::If { .. } => "if",
        StmtKind::While { .. } => "while",
        StmtKind::Break => "break",
        StmtKind::Continue => "continue",
        StmtKind::Unparsed(_) => "unparsed",
    }
}
