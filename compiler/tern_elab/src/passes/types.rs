//! Pass 1: declaration types.

use tern_ir::ast::{Decl, DeclKind, NameKind, Phase, StmtKind, TypeKind};
use tern_ir::{DeclId, ScopeId, Specifiers, StmtId, TyId};
use tern_parse::ScopeKind;

use crate::{ElabError, Elaborator, FaultKind, StructuralFault};

impl Elaborator<'_, '_> {
    /// Elaborate the types of `decl`.
    ///
    /// `stmt` is the declaration statement holding `decl`, if any; `wrapper`
    /// is the explicit template `decl` is the inner declaration of, if any.
    pub(super) fn elaborate_type(
        &mut self,
        stmt: Option<StmtId>,
        decl: DeclId,
        wrapper: Option<DeclId>,
    ) -> Result<(), ElabError> {
        let d = self.terms.decl(decl);
        if d.phase != Phase::Unelaborated {
            return Ok(());
        }
        tracing::trace!(?decl, kind = d.kind.kind_name(), "elaborating type");
        let scope = d.scope;
        match d.kind.clone() {
            DeclKind::Variable { ty, .. } | DeclKind::Field { ty, .. } => {
                self.resolve_type(ty, scope)?;
            }
            DeclKind::Super { ty, .. } => {
                self.resolve_type(ty, scope)?;
                if !self.denotes_class(ty) {
                    let span = self.terms.decl(decl).span;
                    self.record(StructuralFault {
                        decl,
                        kind: FaultKind::SuperNotClass,
                        span,
                    });
                }
            }
            DeclKind::Parameter { ty } => self.resolve_type(ty, scope)?,
            DeclKind::Function { params, ret, .. } | DeclKind::Coroutine { params, ret, .. } => {
                return self.elaborate_signature(stmt, decl, &params, ret, wrapper);
            }
            DeclKind::Class { kind, .. } => self.resolve_type(kind, scope)?,
            DeclKind::Template { parms, decl: inner, .. } => {
                for parm in parms {
                    self.settle(parm, Phase::TypeElaborated);
                }
                self.settle(decl, Phase::TypeElaborated);
                return self.elaborate_type(None, inner, Some(decl));
            }
            DeclKind::Concept { parms, .. } => {
                for parm in parms {
                    self.settle(parm, Phase::TypeElaborated);
                }
            }
            DeclKind::TypeParameter { .. } => {}
            DeclKind::Namespace { .. } => {
                return Err(ElabError::NotImplemented {
                    what: "namespace declarations",
                    span: self.terms.decl(decl).span,
                });
            }
        }
        self.settle(decl, Phase::TypeElaborated);
        Ok(())
    }

    /// Parameters left to right, then the return type; then open-method
    /// registration and templatization.
    fn elaborate_signature(
        &mut self,
        stmt: Option<StmtId>,
        decl: DeclId,
        params: &[DeclId],
        ret: TyId,
        wrapper: Option<DeclId>,
    ) -> Result<(), ElabError> {
        let d = self.terms.decl(decl);
        let scope = self
            .scopes
            .scope_for(decl, d.scope, ScopeKind::Function);

        let mut next_index = match wrapper.map(|w| &self.terms.decl(w).kind) {
            Some(DeclKind::Template { parms, .. }) => u32::try_from(parms.len()).unwrap_or(u32::MAX),
            _ => 0,
        };
        let mut implicit = Vec::new();
        let mut open = false;
        for &param in params {
            let DeclKind::Parameter { ty } = self.terms.decl(param).kind else {
                continue;
            };
            self.resolve_type(ty, scope)?;
            self.implicit_parameters(ty, scope, &mut next_index, &mut implicit);
            open |= self.terms.decl(param).specs.contains(Specifiers::VIRTUAL);
            self.settle(param, Phase::TypeElaborated);
        }
        self.resolve_type(ret, scope)?;
        self.settle(decl, Phase::TypeElaborated);

        if open && self.options.open_methods {
            let name = self.terms.decl(decl).name;
            if let NameKind::Simple(name) = self.terms.name(name).kind {
                self.output.open_methods.register(name, decl);
            }
        }

        if !implicit.is_empty() {
            tracing::trace!(?decl, count = implicit.len(), "templatizing");
            match wrapper {
                Some(wrapper) => self.extend_template(wrapper, implicit),
                None => self.templatize(stmt, decl, implicit),
            }
        }
        Ok(())
    }

    /// Replace every placeholder reachable through references and
    /// qualifiers with a fresh type parameter bound in `scope`.
    fn implicit_parameters(
        &mut self,
        ty: TyId,
        scope: ScopeId,
        next_index: &mut u32,
        minted: &mut Vec<DeclId>,
    ) {
        match self.terms.ty(ty).kind {
            TypeKind::Auto => {}
            TypeKind::Reference(inner) | TypeKind::Qualified { ty: inner, .. } => {
                return self.implicit_parameters(inner, scope, next_index, minted);
            }
            _ => return,
        }

        let span = self.terms.ty(ty).span;
        let name = self.terms.alloc_placeholder(span);
        let parm = self.terms.alloc_decl(Decl {
            name,
            specs: Specifiers::empty(),
            kind: DeclKind::TypeParameter {
                index: *next_index,
                default: None,
            },
            span,
            scope,
            phase: Phase::Unelaborated,
        });
        self.settle(parm, Phase::TypeElaborated);
        *next_index += 1;
        let key = self.terms.key_of(name);
        self.scopes.declare(scope, key, parm);
        minted.push(parm);

        let replacement = self
            .terms
            .alloc_type(TypeKind::Declared { decl: parm, name }, span);
        self.terms.replace_type(ty, replacement);
    }

    /// Wrap `decl` in a new template owning `parms`. The wrapper takes the
    /// declaration's place in its statement and in its overload set.
    fn templatize(&mut self, stmt: Option<StmtId>, decl: DeclId, parms: Vec<DeclId>) {
        let d = self.terms.decl(decl);
        let (name, scope, span) = (d.name, d.scope, d.span);
        let wrapper = self.terms.alloc_decl(Decl {
            name,
            specs: Specifiers::empty(),
            kind: DeclKind::Template {
                parms,
                constraint: None,
                decl,
            },
            span,
            scope,
            phase: Phase::Unelaborated,
        });
        self.settle(wrapper, Phase::TypeElaborated);

        if let Some(stmt) = stmt {
            self.terms.stmt_mut(stmt).kind = StmtKind::Declaration(wrapper);
        }
        let key = self.terms.key_of(name);
        if !self.scopes.replace_member(scope, key, decl, wrapper) {
            self.scopes.declare(scope, key, wrapper);
        }
    }

    fn extend_template(&mut self, wrapper: DeclId, implicit: Vec<DeclId>) {
        if let DeclKind::Template { parms, .. } = &mut self.terms.decl_mut(wrapper).kind {
            parms.extend(implicit);
        }
    }

    /// Parse `ty` in `scope` if it is still unparsed.
    pub(super) fn resolve_type(&mut self, ty: TyId, scope: ScopeId) -> Result<(), ElabError> {
        let TypeKind::Unparsed(range) = self.terms.ty(ty).kind else {
            return Ok(());
        };
        let parsed = self.parse_fragment(scope, range, |p| p.type_fragment())?;
        self.terms.replace_type(ty, parsed);
        Ok(())
    }

    /// A base type must name a class, a type parameter, or a class template.
    fn denotes_class(&self, ty: TyId) -> bool {
        let mut ty = ty;
        loop {
            match self.terms.ty(ty).kind {
                TypeKind::Qualified { ty: inner, .. } => ty = inner,
                TypeKind::Declared { decl, .. } => return self.is_class_like(decl),
                _ => return false,
            }
        }
    }

    fn is_class_like(&self, decl: DeclId) -> bool {
        match &self.terms.decl(decl).kind {
            DeclKind::Class { .. } | DeclKind::TypeParameter { .. } => true,
            DeclKind::Template { decl: inner, .. } => self.is_class_like(*inner),
            _ => false,
        }
    }
}
