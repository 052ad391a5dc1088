//! Declaration productions.

use tern_ir::ast::{DeclKind, DefKind, TypeKind};
use tern_ir::{DeclId, DefId, ExprId, Specifiers, StmtId, TokenKind, TyId};

use crate::{ParseError, ParseResult, Parser, ScopeKind};

impl Parser<'_, '_> {
    /// `declaration := specifier-seq ( variable | function | coroutine | class
    /// | super | concept | template | namespace )`
    pub(crate) fn declaration(&mut self) -> ParseResult<DeclId> {
        self.specifier_seq();
        tracing::trace!(token = %self.current_kind(), "declaration");
        match self.current_kind() {
            TokenKind::Var => self.variable_declaration(),
            TokenKind::Def => self.function_declaration(),
            TokenKind::Codef => self.coroutine_declaration(),
            TokenKind::Class => self.class_declaration(),
            TokenKind::Super => self.super_declaration(),
            TokenKind::Concept => self.concept_declaration(),
            TokenKind::Template => self.template_declaration(),
            TokenKind::Namespace => self.namespace_declaration(),
            found => Err(ParseError::unexpected_token(
                "a declaration",
                found,
                self.current_span(),
            )),
        }
    }

    /// `'var' id ':' ( '=' init ';' | type [ '=' init ] ';' )`
    fn variable_declaration(&mut self) -> ParseResult<DeclId> {
        let start = self.current_span();
        let specs = self.state.take_specs();
        self.expect(TokenKind::Var)?;
        let name = self.identifier()?;
        self.expect(TokenKind::Colon)?;

        let (ty, init) = if self.check(TokenKind::Eq) {
            let ty = self.terms.alloc_type(TypeKind::Auto, self.current_span());
            self.advance();
            (ty, Some(self.initializer(&[TokenKind::Semicolon])?))
        } else {
            let ty = self.declared_type(&[TokenKind::Semicolon, TokenKind::Eq])?;
            let init = if self.eat(TokenKind::Eq) {
                Some(self.initializer(&[TokenKind::Semicolon])?)
            } else {
                None
            };
            (ty, init)
        };
        self.expect(TokenKind::Semicolon)?;

        let def = self.initializer_definition(init);
        let kind = if self.declaring_member(specs) {
            DeclKind::Field { ty, def }
        } else {
            DeclKind::Variable { ty, def }
        };
        let span = self.span_from(start);
        let decl = self.alloc_decl(name, specs, kind, span);
        self.bind(decl);
        Ok(decl)
    }

    /// `'super' [ id ] ':' type [ '=' init ] ';'`
    fn super_declaration(&mut self) -> ParseResult<DeclId> {
        let start = self.current_span();
        let specs = self.state.take_specs();
        self.expect(TokenKind::Super)?;
        let name = if self.check_ident() {
            self.identifier()?
        } else {
            self.terms.alloc_placeholder(start)
        };
        self.expect(TokenKind::Colon)?;
        let ty = self.declared_type(&[TokenKind::Semicolon, TokenKind::Eq])?;
        let init = if self.eat(TokenKind::Eq) {
            Some(self.initializer(&[TokenKind::Semicolon])?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon)?;

        let def = self.initializer_definition(init);
        let span = self.span_from(start);
        let decl = self.alloc_decl(name, specs, DeclKind::Super { ty, def }, span);
        self.bind(decl);
        Ok(decl)
    }

    fn initializer_definition(&mut self, init: Option<ExprId>) -> DefId {
        match init {
            Some(expr) => {
                let span = self.terms.expr(expr).span;
                self.terms.alloc_def(DefKind::Expression(expr), span)
            }
            None => {
                let at = self.after_previous();
                self.terms.alloc_def(DefKind::Empty, at)
            }
        }
    }

    /// `'def' id [':'] '(' params ')' [ '->' type ] function-definition`
    fn function_declaration(&mut self) -> ParseResult<DeclId> {
        let start = self.current_span();
        let specs = self.state.take_specs();
        self.expect(TokenKind::Def)?;
        let name = self.identifier()?;
        self.eat(TokenKind::Colon);

        let member = self.declaring_member(specs);
        let decl = self.alloc_decl(
            name,
            specs,
            DeclKind::Function {
                params: Vec::new(),
                ret: TyId::INVALID,
                def: DefId::INVALID,
                member,
            },
            start,
        );
        self.bind(decl);

        let scope = self
            .scopes
            .scope_for(decl, self.scopes.current(), ScopeKind::Function);
        let (params, ret, def) = self.within(scope, |p| {
            let (params, ret) = p.signature()?;
            let def = p.function_definition()?;
            Ok((params, ret, def))
        })?;

        let span = self.span_from(start);
        let d = self.terms.decl_mut(decl);
        d.kind = DeclKind::Function {
            params,
            ret,
            def,
            member,
        };
        d.span = span;
        Ok(decl)
    }

    /// `'codef' id [':'] '(' params ')' [ '->' type ] '{' body '}'`
    fn coroutine_declaration(&mut self) -> ParseResult<DeclId> {
        let start = self.current_span();
        let specs = self.state.take_specs();
        self.expect(TokenKind::Codef)?;
        let name = self.identifier()?;
        self.eat(TokenKind::Colon);

        let decl = self.alloc_decl(
            name,
            specs,
            DeclKind::Coroutine {
                params: Vec::new(),
                ret: TyId::INVALID,
                def: DefId::INVALID,
            },
            start,
        );
        self.bind(decl);

        let scope = self
            .scopes
            .scope_for(decl, self.scopes.current(), ScopeKind::Function);
        let (params, ret, def) = self.within(scope, |p| {
            let (params, ret) = p.signature()?;
            if !p.check(TokenKind::LBrace) {
                return Err(ParseError::unexpected_token(
                    "`{`",
                    p.current_kind(),
                    p.current_span(),
                )
                .with_help("coroutines must have a body"));
            }
            let def = p.function_definition()?;
            Ok((params, ret, def))
        })?;

        let span = self.span_from(start);
        let d = self.terms.decl_mut(decl);
        d.kind = DeclKind::Coroutine { params, ret, def };
        d.span = span;
        Ok(decl)
    }

    /// `'(' params ')' [ '->' type ]`, in the function's scope.
    fn signature(&mut self) -> ParseResult<(Vec<DeclId>, TyId)> {
        let params = self.parameter_clause()?;
        let ret = if self.eat(TokenKind::Arrow) {
            self.declared_type(&[TokenKind::LBrace, TokenKind::Eq, TokenKind::Semicolon])?
        } else {
            let at = self.after_previous();
            self.terms.alloc_type(TypeKind::Auto, at)
        };
        Ok((params, ret))
    }

    fn parameter_clause(&mut self) -> ParseResult<Vec<DeclId>> {
        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                let eager = !self.options.defers();
                params.push(self.parameter(eager)?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(params)
    }

    /// `param := parameter-specifier-seq id [ ':' type ]`
    ///
    /// An `eager` parameter has its type parsed and is bound immediately.
    /// Otherwise binding waits for definition elaboration.
    pub(crate) fn parameter(&mut self, eager: bool) -> ParseResult<DeclId> {
        let start = self.current_span();
        let specs = self.parameter_specifier_seq();
        let name = self.identifier()?;
        let ty = if self.eat(TokenKind::Colon) {
            if eager {
                self.ty()?
            } else {
                self.declared_type(&[TokenKind::Comma, TokenKind::RParen, TokenKind::Eq])?
            }
        } else {
            let at = self.after_previous();
            self.terms.alloc_type(TypeKind::Auto, at)
        };
        if self.check(TokenKind::Eq) {
            return Err(ParseError::unsupported(
                "default arguments",
                self.current_span(),
            ));
        }
        let span = self.span_from(start);
        let decl = self.alloc_decl(name, specs, DeclKind::Parameter { ty }, span);
        if eager {
            self.bind(decl);
        }
        Ok(decl)
    }

    /// `'{' body '}' | '=' 'delete' ';' | '=' 'default' ';' | ';' | ['='] expr ';'`
    fn function_definition(&mut self) -> ParseResult<DefId> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::LBrace => DefKind::Function(self.braced_body(Self::current_compound)?),
            TokenKind::Semicolon => {
                self.advance();
                DefKind::Empty
            }
            TokenKind::Eq if self.peek_kind(1) == TokenKind::Delete => {
                self.advance();
                self.advance();
                self.expect(TokenKind::Semicolon)?;
                DefKind::Deleted
            }
            TokenKind::Eq if self.peek_kind(1) == TokenKind::Default => {
                self.advance();
                self.advance();
                self.expect(TokenKind::Semicolon)?;
                DefKind::Defaulted
            }
            _ => {
                self.eat(TokenKind::Eq);
                let expr = self.initializer(&[TokenKind::Semicolon])?;
                self.expect(TokenKind::Semicolon)?;
                DefKind::Expression(expr)
            }
        };
        let span = self.span_from(start);
        Ok(self.terms.alloc_def(kind, span))
    }

    fn current_compound(&mut self) -> ParseResult<StmtId> {
        self.compound_in(self.scopes.current())
    }

    /// `'class' id [':'] class-specifier-seq [ kind ] ( '{' body '}' | ';' )`
    fn class_declaration(&mut self) -> ParseResult<DeclId> {
        let start = self.current_span();
        let mut specs = self.state.take_specs();
        self.expect(TokenKind::Class)?;
        let name = self.identifier()?;
        self.eat(TokenKind::Colon);
        while self.eat(TokenKind::Virtual) {
            specs |= Specifiers::VIRTUAL;
        }

        let decl = self.alloc_decl(
            name,
            specs,
            DeclKind::Class {
                kind: TyId::INVALID,
                def: DefId::INVALID,
            },
            start,
        );
        self.bind(decl);

        let kind = if self.check(TokenKind::LBrace) || self.check(TokenKind::Semicolon) {
            let at = self.after_previous();
            self.terms.alloc_type(TypeKind::TypeType, at)
        } else {
            self.declared_type(&[TokenKind::LBrace, TokenKind::Semicolon])?
        };

        let def_start = self.current_span();
        let def_kind = if self.eat(TokenKind::Semicolon) {
            DefKind::Empty
        } else {
            let scope = self
                .scopes
                .scope_for(decl, self.scopes.current(), ScopeKind::Class);
            let body = self.within(scope, |p| p.braced_body(Self::member_body))?;
            DefKind::Class(body)
        };
        let def_span = self.span_from(def_start);
        let def = self.terms.alloc_def(def_kind, def_span);

        let span = self.span_from(start);
        let d = self.terms.decl_mut(decl);
        d.kind = DeclKind::Class { kind, def };
        d.span = span;
        Ok(decl)
    }

    /// `'namespace' id '{' body '}'`
    fn namespace_declaration(&mut self) -> ParseResult<DeclId> {
        let start = self.current_span();
        let specs = self.state.take_specs();
        self.expect(TokenKind::Namespace)?;
        let name = self.identifier()?;
        let decl = self.alloc_decl(
            name,
            specs,
            DeclKind::Namespace {
                body: StmtId::INVALID,
            },
            start,
        );
        self.bind(decl);

        let scope = self
            .scopes
            .scope_for(decl, self.scopes.current(), ScopeKind::Namespace);
        let body = self.within(scope, Self::member_body)?;

        let span = self.span_from(start);
        let d = self.terms.decl_mut(decl);
        d.kind = DeclKind::Namespace { body };
        d.span = span;
        Ok(decl)
    }
}
