//! Elaboration of parsed Tern translation units.
//!
//! The parser leaves declaration types, initializers, and bodies as
//! Unparsed-terms when it cannot know the names they mention. Elaboration
//! resolves them in four ordered passes over each statement list:
//!
//! 1. **Types**: declaration types are parsed, placeholder parameter types
//!    become implicit template parameters, open methods are registered
//! 2. **Overloads**: every declaration is confirmed in its overload set and
//!    reported to the collaborator
//! 3. **Partials**: forward declarations merge with their definitions
//! 4. **Definitions**: initializers and bodies are parsed with every sibling
//!    visible; class bodies and nested blocks get a full run of their own
//!
//! Parsed fragments are written back into the slot of the Unparsed-term they
//! replace, so ids held elsewhere stay valid.

mod collaborator;
mod error;
mod identity;
mod open_methods;
mod passes;

pub use collaborator::{Collaborator, MembershipEvent, Recorder};
pub use error::{ElabError, FaultKind, StructuralFault};
pub use identity::{StructuralTypes, TypeHandle, TypeIdentity};
pub use open_methods::OpenMethods;

use rustc_hash::FxHashMap;
use tern_ir::ast::{Family, StmtKind};
use tern_ir::visitor::find_unparsed;
use tern_ir::{DeclId, ScopeId, StmtId, TermArena, TokenRange};
use tern_parse::{Input, ParseOptions, ParseResult, Parser, Scopes};

/// Elaboration configuration.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ElabOptions {
    /// Options for parsing deferred fragments.
    pub parse: ParseOptions,
    /// Register functions with `virtual` parameters as open methods.
    pub open_methods: bool,
}

impl Default for ElabOptions {
    fn default() -> Self {
        ElabOptions {
            parse: ParseOptions::default(),
            open_methods: true,
        }
    }
}

/// What one elaboration run found besides the rewritten terms.
#[derive(Clone, Debug, Default)]
pub struct ElabOutput {
    pub open_methods: OpenMethods,
    pub faults: Vec<StructuralFault>,
    /// Merged-away forward declaration to the declaration it merged into.
    pub partials: FxHashMap<DeclId, DeclId>,
}

/// Elaboration context for one translation unit.
pub struct Elaborator<'a, 'e> {
    input: Input<'a>,
    terms: &'e mut TermArena,
    scopes: &'e mut Scopes,
    identity: &'e mut dyn TypeIdentity,
    collaborator: &'e mut dyn Collaborator,
    options: ElabOptions,
    output: ElabOutput,
}

impl<'a, 'e> Elaborator<'a, 'e> {
    pub fn new(
        input: Input<'a>,
        terms: &'e mut TermArena,
        scopes: &'e mut Scopes,
        identity: &'e mut dyn TypeIdentity,
        collaborator: &'e mut dyn Collaborator,
    ) -> Self {
        Elaborator {
            input,
            terms,
            scopes,
            identity,
            collaborator,
            options: ElabOptions::default(),
            output: ElabOutput::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ElabOptions) -> Self {
        self.options = options;
        self
    }

    /// Run all four passes over a translation unit.
    ///
    /// Succeeds only if no Unparsed-term is reachable afterwards.
    pub fn elaborate_translation(&mut self, unit: StmtId) -> Result<(), ElabError> {
        let stmt = self.terms.stmt(unit);
        let StmtKind::Translation { stmts, scope } = &stmt.kind else {
            return Err(ElabError::Unhandled {
                family: Family::Statement,
                kind: passes::stmt_kind_name(&stmt.kind),
                span: stmt.span,
            });
        };
        let (stmts, scope) = (stmts.clone(), *scope);
        tracing::debug!(statements = stmts.len(), "elaborating translation");

        self.elaborate_list(&stmts, scope)?;

        if let Some(term) = find_unparsed(self.terms, unit) {
            return Err(ElabError::Residual {
                family: term.family(),
                span: self.terms.span_of(term),
            });
        }
        Ok(())
    }

    pub fn output(&self) -> &ElabOutput {
        &self.output
    }

    pub fn finish(self) -> ElabOutput {
        self.output
    }

    /// Parse a captured range with `scope` current, restoring the current
    /// scope afterwards.
    fn parse_fragment<T>(
        &mut self,
        scope: ScopeId,
        range: TokenRange,
        parse: impl FnOnce(&mut Parser<'_, '_>) -> ParseResult<T>,
    ) -> Result<T, ElabError> {
        let outer = self.scopes.current();
        self.scopes.set_current(scope);
        let result = {
            let mut parser = Parser::over(
                self.input,
                range,
                &mut *self.terms,
                &mut *self.scopes,
                self.options.parse,
            );
            parse(&mut parser)
        };
        self.scopes.set_current(outer);
        Ok(result?)
    }

    fn record(&mut self, fault: StructuralFault) {
        tracing::warn!(
            decl = ?fault.decl,
            code = %fault.code(),
            "{}",
            fault.message()
        );
        self.collaborator.fault(&fault);
        self.output.faults.push(fault);
    }
}
