//! Templates, concepts, and requirements.
//!
//! These are parsed eagerly in every mode: their parameters must be bound
//! before anything that mentions them can be parsed.

use tern_ir::ast::{DeclKind, DefKind, ReqKind};
use tern_ir::{DeclId, DefId, NameId, ReqId, Specifiers, TokenKind};

use crate::{ParseError, ParseResult, Parser, ScopeKind, TemplateContext};

impl Parser<'_, '_> {
    /// `'template' '<' tparms '>' [ 'requires' logical-or-expr ] declaration`
    ///
    /// The wrapper opens a template scope holding the parameters and the
    /// inner declaration, and is itself bound in the enclosing scope under
    /// the inner declaration's name. Pending specifiers pass through to the
    /// inner declaration.
    pub(crate) fn template_declaration(&mut self) -> ParseResult<DeclId> {
        let start = self.current_span();
        self.expect(TokenKind::Template)?;
        let decl = self.alloc_decl(
            NameId::INVALID,
            Specifiers::empty(),
            DeclKind::Template {
                parms: Vec::new(),
                constraint: None,
                decl: DeclId::INVALID,
            },
            start,
        );
        let scope = self
            .scopes
            .scope_for(decl, self.scopes.current(), ScopeKind::Template);

        let (inner, context) = self.within(scope, |p| {
            let (inner, context) = p.with_template(TemplateContext::default(), |p| {
                p.expect(TokenKind::Lt)?;
                p.template_parameters()?;
                p.expect(TokenKind::Gt)?;
                if p.eat(TokenKind::Requires) {
                    let constraint = p.logical_or()?;
                    if let Some(template) = p.state.template.as_mut() {
                        template.constraint = Some(constraint);
                    }
                }
                p.declaration()
            });
            inner.map(|inner| (inner, context))
        })?;

        let name = self.terms.decl(inner).name;
        let span = self.span_from(start);
        let d = self.terms.decl_mut(decl);
        d.name = name;
        d.span = span;
        d.kind = DeclKind::Template {
            parms: context.parms,
            constraint: context.constraint,
            decl: inner,
        };
        self.bind(decl);
        Ok(decl)
    }

    /// `[ tparm { ',' tparm } ]`, accumulated into the template context.
    fn template_parameters(&mut self) -> ParseResult<()> {
        if self.check(TokenKind::Gt) {
            return Ok(());
        }
        loop {
            self.template_parameter()?;
            if !self.eat(TokenKind::Comma) {
                return Ok(());
            }
        }
    }

    /// `tparm := 'typename' [ id ] [ '=' type ]`
    fn template_parameter(&mut self) -> ParseResult<DeclId> {
        let start = self.current_span();
        self.expect(TokenKind::Typename)?;
        let name = if self.check_ident() {
            self.identifier()?
        } else {
            self.terms.alloc_placeholder(start)
        };
        let default = if self.eat(TokenKind::Eq) {
            Some(self.ty()?)
        } else {
            None
        };

        let Some(index) = self.state.template.as_ref().map(|t| t.parms.len()) else {
            return Err(ParseError::invalid_declaration(
                "template parameter outside a template parameter list",
                start,
            ));
        };
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        let span = self.span_from(start);
        let decl = self.alloc_decl(
            name,
            Specifiers::empty(),
            DeclKind::TypeParameter { index, default },
            span,
        );
        self.bind(decl);
        if let Some(template) = self.state.template.as_mut() {
            template.parms.push(decl);
        }
        Ok(decl)
    }

    /// `'concept' id '<' tparms '>' ( '=' expr ';' | '{' concept-member* '}' )`
    pub(crate) fn concept_declaration(&mut self) -> ParseResult<DeclId> {
        let start = self.current_span();
        let specs = self.state.take_specs();
        self.expect(TokenKind::Concept)?;
        let name = self.identifier()?;
        let decl = self.alloc_decl(
            name,
            specs,
            DeclKind::Concept {
                parms: Vec::new(),
                def: DefId::INVALID,
            },
            start,
        );
        self.bind(decl);

        let scope = self
            .scopes
            .scope_for(decl, self.scopes.current(), ScopeKind::Template);
        let (parms, def) = self.within(scope, |p| {
            let (result, context) = p.with_template(TemplateContext::default(), |p| {
                p.expect(TokenKind::Lt)?;
                p.template_parameters()?;
                p.expect(TokenKind::Gt)
            });
            result?;
            let def = p.concept_definition()?;
            Ok((context.parms, def))
        })?;

        let span = self.span_from(start);
        let d = self.terms.decl_mut(decl);
        d.kind = DeclKind::Concept { parms, def };
        d.span = span;
        Ok(decl)
    }

    fn concept_definition(&mut self) -> ParseResult<DefId> {
        let start = self.current_span();
        let kind = if self.eat(TokenKind::Eq) {
            let expr = self.expression()?;
            self.expect(TokenKind::Semicolon)?;
            DefKind::Expression(expr)
        } else {
            self.expect(TokenKind::LBrace)?;
            let mut reqs = Vec::new();
            while !self.eat(TokenKind::RBrace) {
                if self.is_at_end() {
                    return Err(ParseError::unclosed_delimiter(
                        TokenKind::LBrace,
                        self.current_span(),
                    ));
                }
                reqs.push(self.concept_member()?);
            }
            DefKind::Concept(reqs)
        };
        let span = self.span_from(start);
        Ok(self.terms.alloc_def(kind, span))
    }

    /// `'typename' type ';' | 'requires' expr ';' | expr ';'`
    ///
    /// `requires` starting a requires-expression is an expression member;
    /// the trial decides.
    fn concept_member(&mut self) -> ParseResult<ReqId> {
        let start = self.current_span();
        if self.check(TokenKind::Requires) {
            let syntactic = self.trial(|p| {
                p.advance();
                let expr = p.expression()?;
                p.expect(TokenKind::Semicolon)?;
                Ok(expr)
            });
            if let Some(expr) = syntactic {
                let span = self.span_from(start);
                return Ok(self.terms.alloc_req(ReqKind::Syntactic(expr), span));
            }
        }
        let kind = if self.eat(TokenKind::Typename) {
            ReqKind::Type(self.ty()?)
        } else {
            ReqKind::Expression(self.expression()?)
        };
        self.expect(TokenKind::Semicolon)?;
        let span = self.span_from(start);
        Ok(self.terms.alloc_req(kind, span))
    }

    /// `'typename' type ';' | expr ';' | expr ':' type ';' | expr '->' type ';'`
    pub(crate) fn requirement(&mut self) -> ParseResult<ReqId> {
        let start = self.current_span();
        let kind = if self.eat(TokenKind::Typename) {
            ReqKind::Type(self.ty()?)
        } else {
            let expr = self.expression()?;
            if self.eat(TokenKind::Colon) {
                ReqKind::Conversion {
                    expr,
                    ty: self.ty()?,
                }
            } else if self.eat(TokenKind::Arrow) {
                ReqKind::Deduction {
                    expr,
                    ty: self.ty()?,
                }
            } else {
                ReqKind::Basic(expr)
            }
        };
        self.expect(TokenKind::Semicolon)?;
        let span = self.span_from(start);
        Ok(self.terms.alloc_req(kind, span))
    }
}
