//! Statement productions.

use tern_ir::ast::StmtKind;
use tern_ir::{ScopeId, StmtId, TokenKind};
use tern_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseResult, Parser, ScopeKind};

impl Parser<'_, '_> {
    /// `translation := statement* Eof`, in the current scope.
    pub fn translation(&mut self) -> ParseResult<StmtId> {
        let start = self.current_span();
        let scope = self.scopes.current();
        let mut stmts = Vec::new();
        while !self.is_at_end() {
            stmts.push(self.statement()?);
        }
        tracing::debug!(statements = stmts.len(), "parsed translation");
        let span = start.merge(self.current_span());
        Ok(self.terms.alloc_stmt(StmtKind::Translation { stmts, scope }, span))
    }

    pub(crate) fn statement(&mut self) -> ParseResult<StmtId> {
        ensure_sufficient_stack(|| self.statement_inner())
    }

    /// Every declaration keyword is routed before the fallback trial, so
    /// today the trial always fails back to an expression statement. It
    /// keeps statement parsing total as declaration forms grow; the
    /// ambiguity trials settle in practice is type versus expression in
    /// template arguments.
    fn statement_inner(&mut self) -> ParseResult<StmtId> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Var
            | TokenKind::Def
            | TokenKind::Codef
            | TokenKind::Class
            | TokenKind::Super
            | TokenKind::Concept
            | TokenKind::Template
            | TokenKind::Namespace
            | TokenKind::Static
            | TokenKind::Dynamic
            | TokenKind::Inline
            | TokenKind::Explicit
            | TokenKind::Implicit
            | TokenKind::Public
            | TokenKind::Private
            | TokenKind::Protected
            | TokenKind::Virtual
            | TokenKind::Abstract => return self.declaration_statement(),
            TokenKind::Return => {
                self.advance();
                let expr = self.expression()?;
                self.expect(TokenKind::Semicolon)?;
                StmtKind::Return(expr)
            }
            TokenKind::Yield => {
                self.advance();
                let expr = self.expression()?;
                self.expect(TokenKind::Semicolon)?;
                StmtKind::Yield(expr)
            }
            TokenKind::If => self.if_statement()?,
            TokenKind::While => {
                self.advance();
                let cond = self.condition()?;
                let body = self.statement()?;
                StmtKind::While { cond, body }
            }
            TokenKind::Break => {
                self.advance();
                self.expect(TokenKind::Semicolon)?;
                StmtKind::Break
            }
            TokenKind::Continue => {
                self.advance();
                self.expect(TokenKind::Semicolon)?;
                StmtKind::Continue
            }
            TokenKind::LBrace => {
                let scope = self
                    .scopes
                    .push(ScopeKind::Block, self.scopes.current());
                return self.compound_in(scope);
            }
            TokenKind::Semicolon => {
                self.advance();
                StmtKind::Empty
            }
            _ => {
                return match self.attempt(Self::declaration_statement) {
                    Ok(stmt) => Ok(stmt),
                    Err(_) => self.expression_statement(),
                };
            }
        };
        let span = self.span_from(start);
        Ok(self.terms.alloc_stmt(kind, span))
    }

    fn declaration_statement(&mut self) -> ParseResult<StmtId> {
        let start = self.current_span();
        let decl = self.declaration()?;
        let span = self.span_from(start);
        Ok(self.terms.alloc_stmt(StmtKind::Declaration(decl), span))
    }

    fn expression_statement(&mut self) -> ParseResult<StmtId> {
        let start = self.current_span();
        let expr = self.expression()?;
        self.expect(TokenKind::Semicolon)?;
        let span = self.span_from(start);
        Ok(self.terms.alloc_stmt(StmtKind::Expression(expr), span))
    }

    /// `'if' '(' expr ')' stmt [ 'else' stmt ]`
    fn if_statement(&mut self) -> ParseResult<StmtKind> {
        self.expect(TokenKind::If)?;
        let cond = self.condition()?;
        let then_branch = self.statement()?;
        let else_branch = if self.eat(TokenKind::Else) {
            Some(self.statement()?)
        } else {
            None
        };
        Ok(StmtKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    fn condition(&mut self) -> ParseResult<tern_ir::ExprId> {
        self.expect(TokenKind::LParen)?;
        let cond = self.expression()?;
        self.expect(TokenKind::RParen)?;
        Ok(cond)
    }

    /// `'{' stmt* '}'` with `scope` current.
    pub(crate) fn compound_in(&mut self, scope: ScopeId) -> ParseResult<StmtId> {
        let start = self.current_span();
        self.expect(TokenKind::LBrace)?;
        let stmts = self.within(scope, Self::statement_list)?;
        let span = self.span_from(start);
        Ok(self.terms.alloc_stmt(StmtKind::Compound { stmts, scope }, span))
    }

    /// `'{' stmt* '}'` as a member list of the current scope.
    pub(crate) fn member_body(&mut self) -> ParseResult<StmtId> {
        let start = self.current_span();
        let scope = self.scopes.current();
        self.expect(TokenKind::LBrace)?;
        let stmts = self.statement_list()?;
        let span = self.span_from(start);
        Ok(self.terms.alloc_stmt(StmtKind::Member { stmts, scope }, span))
    }

    /// Statements up to and including the closing `}`.
    fn statement_list(&mut self) -> ParseResult<Vec<StmtId>> {
        let mut stmts = Vec::new();
        while !self.check(TokenKind::RBrace) {
            if self.is_at_end() {
                return Err(ParseError::unclosed_delimiter(
                    TokenKind::LBrace,
                    self.current_span(),
                ));
            }
            stmts.push(self.statement()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(stmts)
    }
}
