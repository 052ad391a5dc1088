//! Parse errors.
//!
//! A `ParseError` is the recoverable failure of one grammar alternative. The
//! trial parser rewinds on it; only the outermost occurrence reaches a user.

use std::fmt;

use tern_diagnostic::{Diagnostic, ErrorCode};
use tern_ir::{Span, TokenKind};

/// Result type for parser productions.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse error.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// Label text at the error location.
    pub context: Option<String>,
    /// Optional help messages.
    pub help: Vec<String>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
            help: Vec::new(),
        }
    }

    /// The current token does not start or continue `expected`.
    ///
    /// Scanner error tokens are reported as invalid input instead.
    #[cold]
    pub fn unexpected_token(expected: &str, found: TokenKind, span: Span) -> Self {
        if found == TokenKind::Error {
            return ParseError::new(ErrorCode::E0001, "invalid token", span);
        }
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found `{found}`"),
            span,
        )
        .with_context(format!("expected {expected}"))
    }

    #[cold]
    pub fn expected_expression(found: TokenKind, span: Span) -> Self {
        if found == TokenKind::Error {
            return ParseError::new(ErrorCode::E0001, "invalid token", span);
        }
        ParseError::new(
            ErrorCode::E1002,
            format!("expected expression, found `{found}`"),
            span,
        )
    }

    #[cold]
    pub fn unclosed_delimiter(open: TokenKind, span: Span) -> Self {
        ParseError::new(ErrorCode::E1003, format!("unclosed `{open}`"), span)
            .with_context("unclosed delimiter")
    }

    #[cold]
    pub fn expected_identifier(found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1004,
            format!("expected identifier, found `{found}`"),
            span,
        )
    }

    #[cold]
    pub fn expected_type(found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1005,
            format!("expected type, found `{found}`"),
            span,
        )
    }

    #[cold]
    pub fn unknown_type(name: &str, span: Span) -> Self {
        ParseError::new(ErrorCode::E1005, format!("unknown type `{name}`"), span)
            .with_context("not found in this scope")
    }

    /// A name resolved, but not to something that denotes a type.
    #[cold]
    pub fn not_a_type(name: &str, kind: &str, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1005,
            format!("`{name}` names a {kind}, not a type"),
            span,
        )
    }

    #[cold]
    pub fn invalid_declaration(message: impl Into<String>, span: Span) -> Self {
        ParseError::new(ErrorCode::E1006, message, span)
    }

    #[cold]
    pub fn unknown_name(name: &str, span: Span) -> Self {
        ParseError::new(ErrorCode::E1007, format!("unknown name `{name}`"), span)
            .with_context("not found in this scope")
    }

    #[cold]
    pub fn unsupported(what: &str, span: Span) -> Self {
        ParseError::new(ErrorCode::E1008, format!("{what} are not supported"), span)
    }

    /// A deferred fragment parsed, but tokens remained in its range.
    #[cold]
    pub fn trailing_tokens(found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1009,
            format!("unexpected `{found}` after the end of the fragment"),
            span,
        )
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.context.as_deref().unwrap_or("here"));
        for help in &self.help {
            diag = diag.with_note(help);
        }
        diag
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} at {:?}", self.code, self.message, self.span)
    }
}

impl std::error::Error for ParseError {}
