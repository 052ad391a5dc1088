//! Pass 3: partial-definition merging.
//!
//! Declarations of one name in one scope are compared pairwise, in order:
//!
//! - same signature, one forward declaration and one definition: the
//!   forward declaration leaves the overload set and is recorded as merged
//!   into the definition
//! - same signature, two forward declarations: the later merges into the
//!   earlier
//! - same signature, two definitions: `Redefinition`, both stay
//! - different signatures: overloads, nothing to do
//! - either one not a function, class, or template: `ConflictingDeclaration`
//!
//! Signatures compare through the type-identity service. A template compares
//! by its parameter count and the signature of what it wraps.

use tern_ir::ast::{DeclKind, NameKey};
use tern_ir::{DeclId, ScopeId, TyId};

use crate::{Elaborator, FaultKind, StructuralFault, TypeHandle};

#[derive(Clone, Eq, PartialEq, Debug)]
enum Signature {
    Function {
        coroutine: bool,
        params: Vec<TypeHandle>,
        ret: TypeHandle,
    },
    Class {
        kind: TypeHandle,
    },
    Template {
        parms: usize,
        inner: Box<Signature>,
    },
}

impl Elaborator<'_, '_> {
    pub(super) fn merge_partials(&mut self, decls: &[DeclId]) {
        // Live declarations seen so far, with their binding.
        let mut seen: Vec<(ScopeId, NameKey, DeclId)> = Vec::new();
        for &decl in decls {
            let scope = self.terms.decl(decl).scope;
            let key = self.terms.decl_key(decl);
            let earlier: Vec<DeclId> = seen
                .iter()
                .filter(|(s, k, _)| *s == scope && *k == key)
                .map(|(_, _, d)| *d)
                .collect();

            let mut live = true;
            for previous in earlier {
                match self.merge(previous, decl) {
                    Merge::Distinct => {}
                    Merge::Fault(kind) => {
                        let span = self.terms.decl(decl).span;
                        self.record(StructuralFault { decl, kind, span });
                    }
                    Merge::Into { from, into } => {
                        tracing::trace!(?from, ?into, "merged partial declaration");
                        self.scopes.remove_member(scope, key, from);
                        self.output.partials.insert(from, into);
                        seen.retain(|(_, _, d)| *d != from);
                        if from == decl {
                            live = false;
                            break;
                        }
                    }
                }
            }
            if live {
                seen.push((scope, key, decl));
            }
        }
    }

    fn merge(&mut self, previous: DeclId, decl: DeclId) -> Merge {
        let (Some(earlier), Some(later)) = (self.signature(previous), self.signature(decl)) else {
            return Merge::Fault(FaultKind::ConflictingDeclaration { previous });
        };
        if earlier != later {
            return Merge::Distinct;
        }
        match (self.is_definition(previous), self.is_definition(decl)) {
            (true, true) => Merge::Fault(FaultKind::Redefinition { previous }),
            (false, true) => Merge::Into {
                from: previous,
                into: decl,
            },
            (_, false) => Merge::Into {
                from: decl,
                into: previous,
            },
        }
    }

    /// The signature of an entity that may be declared more than once.
    fn signature(&mut self, decl: DeclId) -> Option<Signature> {
        match self.terms.decl(decl).kind.clone() {
            DeclKind::Function { params, ret, .. } => Some(self.function_signature(false, &params, ret)),
            DeclKind::Coroutine { params, ret, .. } => Some(self.function_signature(true, &params, ret)),
            DeclKind::Class { kind, .. } => Some(Signature::Class {
                kind: self.identity.identify(self.terms, kind),
            }),
            DeclKind::Template { parms, decl: inner, .. } => Some(Signature::Template {
                parms: parms.len(),
                inner: Box::new(self.signature(inner)?),
            }),
            DeclKind::Variable { .. }
            | DeclKind::Field { .. }
            | DeclKind::Parameter { .. }
            | DeclKind::Super { .. }
            | DeclKind::TypeParameter { .. }
            | DeclKind::Concept { .. }
            | DeclKind::Namespace { .. } => None,
        }
    }

    fn function_signature(&mut self, coroutine: bool, params: &[DeclId], ret: TyId) -> Signature {
        let params = params
            .iter()
            .filter_map(|p| match self.terms.decl(*p).kind {
                DeclKind::Parameter { ty } => Some(self.identity.identify(self.terms, ty)),
                _ => None,
            })
            .collect();
        Signature::Function {
            coroutine,
            params,
            ret: self.identity.identify(self.terms, ret),
        }
    }

    fn is_definition(&self, decl: DeclId) -> bool {
        let kind = &self.terms.decl(decl).kind;
        match kind {
            DeclKind::Template { decl: inner, .. } => self.is_definition(*inner),
            _ => kind.def().is_some_and(|def| self.terms.def(def).kind.is_defining()),
        }
    }
}

enum Merge {
    Distinct,
    Fault(FaultKind),
    Into { from: DeclId, into: DeclId },
}
