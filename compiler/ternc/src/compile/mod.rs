use tern_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorCode};
use tern_elab::{
    ElabError, ElabOptions, ElabOutput, Elaborator, MembershipEvent, Recorder, StructuralTypes,
};
use tern_ir::ast::NameKey;
use tern_ir::{dump, DeclId, Name, StmtId, StringInterner, TermArena, TokenList};
use tern_parse::{parse_translation, Input, OverloadSet, ParseError, Scopes};
use tracing::debug;

#[cfg(test)]
mod tests;

/// Why a translation unit could not be compiled.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Elab(#[from] ElabError),
}

impl CompileError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CompileError::Parse(err) => err.code,
            CompileError::Elab(err) => err.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CompileError::Parse(err) => err.to_diagnostic(),
            CompileError::Elab(err) => err.to_diagnostic(),
        }
    }
}

/// Everything one successful run produced.
pub struct Compilation {
    pub interner: StringInterner,
    pub tokens: TokenList,
    pub terms: TermArena,
    pub scopes: Scopes,
    /// The translation statement.
    pub unit: StmtId,
    pub output: ElabOutput,
    /// Overload-set confirmations, in the order elaboration made them.
    pub memberships: Vec<MembershipEvent>,
}

impl Compilation {
    /// S-expression rendering of the elaborated translation unit.
    pub fn dump(&self) -> String {
        dump::stmt(&self.terms, &self.interner, self.unit)
    }

    /// The overload set bound to `name` at translation scope.
    pub fn lookup(&self, name: &str) -> &[DeclId] {
        let key = NameKey::Simple(self.interner.intern(name));
        self.scopes
            .lookup(Scopes::root(), key)
            .map(OverloadSet::as_slice)
            .unwrap_or_default()
    }

    pub fn name(&self, name: &str) -> Name {
        self.interner.intern(name)
    }

    /// Structural faults as diagnostics, in the order they were found.
    pub fn diagnostics(&self) -> DiagnosticQueue {
        self.diagnostics_with(DiagnosticConfig::default())
    }

    pub fn diagnostics_with(&self, config: DiagnosticConfig) -> DiagnosticQueue {
        let mut queue = DiagnosticQueue::with_config(config);
        for fault in &self.output.faults {
            if queue.limit_reached() {
                break;
            }
            queue.add(fault.to_diagnostic(|decl| self.terms.decl(decl).span));
        }
        queue
    }

    /// Diagnostics under the default limit, ordered by source position.
    pub fn report(&self) -> Vec<Diagnostic> {
        self.diagnostics().flush()
    }
}

/// Lex, parse, and elaborate one translation unit.
pub fn compile(source: &str, options: ElabOptions) -> Result<Compilation, CompileError> {
    let interner = StringInterner::new();
    let tokens = tern_lexer::lex(source, &interner);
    debug!(tokens = tokens.len(), mode = ?options.parse.mode, "lexed");

    let mut terms = TermArena::new();
    let mut scopes = Scopes::new();
    let input = Input::new(&tokens, &interner);
    let unit = parse_translation(input, &mut terms, &mut scopes, options.parse)?;

    let mut types = StructuralTypes::new();
    let mut recorder = Recorder::new();
    let output = {
        let mut elab =
            Elaborator::new(input, &mut terms, &mut scopes, &mut types, &mut recorder)
                .with_options(options);
        elab.elaborate_translation(unit)?;
        elab.finish()
    };
    debug!(
        decls = terms.decl_count(),
        faults = output.faults.len(),
        types = types.len(),
        "elaborated"
    );

    Ok(Compilation {
        interner,
        tokens,
        terms,
        scopes,
        unit,
        output,
        memberships: recorder.memberships,
    })
}
