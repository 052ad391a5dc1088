//! Grammar productions.
//!
//! One method per production, grouped by what they produce. This module
//! holds the pieces shared between groups: specifier sequences, token
//! capture for deferred fragments, and the entry points elaboration uses to
//! parse a captured fragment.

mod decl;
mod expr;
mod stmt;
mod template;
mod ty;

use tern_ir::ast::{ExprKind, StmtKind, TypeKind};
use tern_ir::{ExprId, NameId, Specifiers, StmtId, TokenKind, TokenRange, TyId};

use crate::{ParseError, ParseResult, Parser};

impl Parser<'_, '_> {
    // Fragments

    /// Parse a captured type range completely.
    pub fn type_fragment(&mut self) -> ParseResult<TyId> {
        let ty = self.ty()?;
        self.finish_fragment()?;
        Ok(ty)
    }

    /// Parse a captured initializer or expression body completely.
    pub fn expr_fragment(&mut self) -> ParseResult<ExprId> {
        let expr = self.expression()?;
        self.finish_fragment()?;
        Ok(expr)
    }

    /// Parse a captured `{ ... }` function body as a compound statement
    /// in the current scope.
    pub fn body_fragment(&mut self) -> ParseResult<StmtId> {
        let body = self.compound_in(self.scopes.current())?;
        self.finish_fragment()?;
        Ok(body)
    }

    /// Parse a captured `{ ... }` class body as a member list in the current
    /// scope.
    pub fn member_fragment(&mut self) -> ParseResult<StmtId> {
        let body = self.member_body()?;
        self.finish_fragment()?;
        Ok(body)
    }

    fn finish_fragment(&self) -> ParseResult<()> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(ParseError::trailing_tokens(
                self.current_kind(),
                self.current_span(),
            ))
        }
    }

    // Specifiers

    /// `specifier-seq`, accumulated into the pending specifiers.
    fn specifier_seq(&mut self) {
        loop {
            let spec = match self.current_kind() {
                TokenKind::Static => Specifiers::STATIC,
                TokenKind::Dynamic => Specifiers::DYNAMIC,
                TokenKind::Inline => Specifiers::INLINE,
                TokenKind::Explicit => Specifiers::EXPLICIT,
                TokenKind::Implicit => Specifiers::IMPLICIT,
                TokenKind::Public => Specifiers::PUBLIC,
                TokenKind::Private => Specifiers::PRIVATE,
                TokenKind::Protected => Specifiers::PROTECTED,
                TokenKind::Virtual => Specifiers::VIRTUAL,
                TokenKind::Abstract => Specifiers::ABSTRACT,
                _ => break,
            };
            self.advance();
            self.state.specs |= spec;
        }
    }

    /// `parameter-specifier-seq`.
    fn parameter_specifier_seq(&mut self) -> Specifiers {
        let mut specs = Specifiers::empty();
        loop {
            let spec = match self.current_kind() {
                TokenKind::In => Specifiers::IN,
                TokenKind::Out => Specifiers::OUT,
                TokenKind::Mutable => Specifiers::MUTABLE,
                TokenKind::Consume => Specifiers::CONSUME,
                TokenKind::Forward => Specifiers::FORWARD,
                TokenKind::Virtual => Specifiers::VIRTUAL,
                TokenKind::Const => Specifiers::CONST,
                _ => return specs,
            };
            self.advance();
            specs |= spec;
        }
    }

    // Deferred capture

    /// Skip to the first of `terminators` found at the nesting level where
    /// capture began, returning the skipped tokens.
    ///
    /// The terminator itself is not consumed.
    fn capture_until(&mut self, terminators: &[TokenKind]) -> ParseResult<TokenRange> {
        let start = self.cursor.position();
        let depth = self.state.depth();
        loop {
            let kind = self.current_kind();
            let level = self.state.depth();
            if level == depth && terminators.contains(&kind) {
                break;
            }
            if kind == TokenKind::Eof {
                return Err(match self.state.braces.last() {
                    Some(open) if level > depth => {
                        ParseError::unclosed_delimiter(*open, self.current_span())
                    }
                    _ => ParseError::unexpected_token(
                        &describe(terminators),
                        kind,
                        self.current_span(),
                    ),
                });
            }
            if level == depth && kind.matching_open().is_some() {
                return Err(ParseError::unexpected_token(
                    &describe(terminators),
                    kind,
                    self.current_span(),
                ));
            }
            self.advance();
        }
        Ok(self.cursor.range_from(start))
    }

    /// Capture a balanced `{ ... }`, braces included.
    fn capture_braced(&mut self) -> ParseResult<TokenRange> {
        let start = self.cursor.position();
        let open = self.current_span();
        let depth = self.state.depth();
        self.expect(TokenKind::LBrace)?;
        while self.state.depth() > depth {
            if self.is_at_end() {
                return Err(ParseError::unclosed_delimiter(TokenKind::LBrace, open));
            }
            self.advance();
        }
        Ok(self.cursor.range_from(start))
    }

    /// A declaration's type: captured in deferred mode, parsed otherwise.
    fn declared_type(&mut self, terminators: &[TokenKind]) -> ParseResult<TyId> {
        if !self.options.defers() {
            return self.ty();
        }
        let range = self.capture_until(terminators)?;
        if range.is_empty() {
            return Err(ParseError::expected_type(
                self.current_kind(),
                self.current_span(),
            ));
        }
        let span = self.input.tokens.span_of(range);
        Ok(self.terms.alloc_type(TypeKind::Unparsed(range), span))
    }

    /// An initializer or expression body: captured in deferred mode, parsed
    /// otherwise.
    fn initializer(&mut self, terminators: &[TokenKind]) -> ParseResult<ExprId> {
        if !self.options.defers() {
            return self.expression();
        }
        let range = self.capture_until(terminators)?;
        if range.is_empty() {
            return Err(ParseError::expected_expression(
                self.current_kind(),
                self.current_span(),
            ));
        }
        let span = self.input.tokens.span_of(range);
        Ok(self.terms.alloc_expr(ExprKind::Unparsed(range), span))
    }

    /// A braced body to be parsed by `parse`: captured in deferred mode.
    fn braced_body(&mut self, parse: fn(&mut Self) -> ParseResult<StmtId>) -> ParseResult<StmtId> {
        if !self.options.defers() {
            return parse(self);
        }
        let range = self.capture_braced()?;
        let span = self.input.tokens.span_of(range);
        Ok(self.terms.alloc_stmt(StmtKind::Unparsed(range), span))
    }

    fn identifier(&mut self) -> ParseResult<NameId> {
        let (name, span) = self.expect_ident()?;
        Ok(self.simple_name(name, span))
    }
}

fn describe(terminators: &[TokenKind]) -> String {
    let quoted: Vec<String> = terminators.iter().map(|t| format!("`{t}`")).collect();
    quoted.join(" or ")
}
