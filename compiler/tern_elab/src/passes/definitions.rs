//! Pass 4: definitions.

use tern_ir::ast::{DeclKind, DefKind, ExprKind, Phase, StmtKind};
use tern_ir::{DeclId, DefId, ScopeId};
use tern_parse::ScopeKind;

use crate::{ElabError, Elaborator};

impl Elaborator<'_, '_> {
    pub(super) fn elaborate_definition(&mut self, decl: DeclId) -> Result<(), ElabError> {
        let d = self.terms.decl(decl);
        if d.phase == Phase::DefinitionElaborated {
            return Ok(());
        }
        tracing::trace!(?decl, kind = d.kind.kind_name(), "elaborating definition");
        let scope = d.scope;
        match d.kind.clone() {
            DeclKind::Variable { def, .. }
            | DeclKind::Field { def, .. }
            | DeclKind::Super { def, .. } => self.resolve_initializer(def, scope)?,
            DeclKind::Function { params, def, .. } | DeclKind::Coroutine { params, def, .. } => {
                let scope = self.scopes.scope_for(decl, scope, ScopeKind::Function);
                for param in params {
                    let key = self.terms.decl_key(param);
                    if !self.scopes.contains(scope, key, param) {
                        self.scopes.declare(scope, key, param);
                    }
                    self.settle(param, Phase::DefinitionElaborated);
                }
                self.resolve_body(def, scope)?;
            }
            DeclKind::Class { def, .. } => {
                let scope = self.scopes.scope_for(decl, scope, ScopeKind::Class);
                self.resolve_members(def, scope)?;
            }
            DeclKind::Template { parms, decl: inner, .. } => {
                for parm in parms {
                    self.settle(parm, Phase::DefinitionElaborated);
                }
                self.elaborate_definition(inner)?;
            }
            DeclKind::Concept { parms, .. } => {
                for parm in parms {
                    self.settle(parm, Phase::DefinitionElaborated);
                }
            }
            DeclKind::Parameter { .. } | DeclKind::TypeParameter { .. } => {}
            DeclKind::Namespace { .. } => {
                return Err(ElabError::NotImplemented {
                    what: "namespace declarations",
                    span: self.terms.decl(decl).span,
                });
            }
        }
        self.settle(decl, Phase::DefinitionElaborated);
        Ok(())
    }

    /// Parse an initializer if it is still unparsed.
    fn resolve_initializer(&mut self, def: DefId, scope: ScopeId) -> Result<(), ElabError> {
        let DefKind::Expression(expr) = self.terms.def(def).kind else {
            return Ok(());
        };
        let ExprKind::Unparsed(range) = self.terms.expr(expr).kind else {
            return Ok(());
        };
        let parsed = self.parse_fragment(scope, range, |p| p.expr_fragment())?;
        self.terms.replace_expr(expr, parsed);
        Ok(())
    }

    /// Parse a function body in the function's scope, then elaborate what
    /// it declares.
    fn resolve_body(&mut self, def: DefId, scope: ScopeId) -> Result<(), ElabError> {
        let body = match self.terms.def(def).kind {
            DefKind::Function(body) => body,
            DefKind::Expression(_) => return self.resolve_initializer(def, scope),
            _ => return Ok(()),
        };
        if let StmtKind::Unparsed(range) = self.terms.stmt(body).kind {
            let parsed = self.parse_fragment(scope, range, |p| p.body_fragment())?;
            self.terms.replace_stmt(body, parsed);
        }
        self.elaborate_statement(body, scope)
    }

    /// Parse a class body as a member list, then run every pass over it.
    fn resolve_members(&mut self, def: DefId, scope: ScopeId) -> Result<(), ElabError> {
        let DefKind::Class(body) = self.terms.def(def).kind else {
            return Ok(());
        };
        if let StmtKind::Unparsed(range) = self.terms.stmt(body).kind {
            let parsed = self.parse_fragment(scope, range, |p| p.member_fragment())?;
            self.terms.replace_stmt(body, parsed);
        }
        self.elaborate_statement(body, scope)
    }
}
