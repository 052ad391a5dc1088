//! Elaboration errors.
//!
//! Two tiers. An `ElabError` aborts the run: the outermost parse failure of
//! a deferred fragment, a term kind with no case, a construct whose
//! elaboration does not exist yet, or an Unparsed-term that survived. A
//! `StructuralFault` is recorded against one declaration and elaboration
//! carries on with the rest.

use tern_diagnostic::{Diagnostic, ErrorCode};
use tern_ir::ast::Family;
use tern_ir::{DeclId, Span};
use tern_parse::ParseError;

/// Fatal elaboration error.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ElabError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no case for {family} kind `{kind}`")]
    Unhandled {
        family: Family,
        kind: &'static str,
        span: Span,
    },

    #[error("elaboration of {what} is not implemented")]
    NotImplemented { what: &'static str, span: Span },

    #[error("unparsed {family} survived elaboration")]
    Residual { family: Family, span: Span },
}

impl ElabError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ElabError::Parse(err) => err.code,
            ElabError::Unhandled { .. } => ErrorCode::E9001,
            ElabError::NotImplemented { .. } => ErrorCode::E9002,
            ElabError::Residual { .. } => ErrorCode::E9003,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ElabError::Parse(err) => err.span,
            ElabError::Unhandled { span, .. }
            | ElabError::NotImplemented { span, .. }
            | ElabError::Residual { span, .. } => *span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ElabError::Parse(err) => err.to_diagnostic(),
            _ => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(self.span(), "here"),
        }
    }
}

/// What went wrong with a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FaultKind {
    /// A base-type specifier whose type does not denote a class.
    SuperNotClass,
    /// A second definition with the same signature as `previous`.
    Redefinition { previous: DeclId },
    /// A name in one scope declared by two entities that cannot overload.
    ConflictingDeclaration { previous: DeclId },
}

/// A non-fatal fault recorded against one declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructuralFault {
    pub decl: DeclId,
    pub kind: FaultKind,
    pub span: Span,
}

impl StructuralFault {
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            FaultKind::SuperNotClass => ErrorCode::E2001,
            FaultKind::Redefinition { .. } => ErrorCode::E2002,
            FaultKind::ConflictingDeclaration { .. } => ErrorCode::E2003,
        }
    }

    pub fn message(&self) -> &'static str {
        match self.kind {
            FaultKind::SuperNotClass => "base type is not a class",
            FaultKind::Redefinition { .. } => "redefinition",
            FaultKind::ConflictingDeclaration { .. } => "conflicting declaration",
        }
    }

    /// Convert to a diagnostic, pointing at the earlier declaration when
    /// there is one. `span_of` maps a declaration to its span.
    pub fn to_diagnostic(&self, span_of: impl Fn(DeclId) -> Span) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.message())
            .with_label(self.span, "declared here");
        match self.kind {
            FaultKind::SuperNotClass => diag,
            FaultKind::Redefinition { previous } => {
                diag.with_secondary_label(span_of(previous), "previous definition")
            }
            FaultKind::ConflictingDeclaration { previous } => {
                diag.with_secondary_label(span_of(previous), "previous declaration")
            }
        }
    }
}
