//! Type productions.

use tern_ir::ast::{DeclKind, NameKind, TemplateArg, TypeKind};
use tern_ir::{DeclId, Qualifiers, Span, TokenKind, TyId};
use tern_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseResult, Parser};

impl Parser<'_, '_> {
    /// `type := unary-type [ '...' ]`
    pub(crate) fn ty(&mut self) -> ParseResult<TyId> {
        ensure_sufficient_stack(|| {
            let start = self.current_span();
            let ty = self.unary_type()?;
            if self.eat(TokenKind::Ellipsis) {
                let span = self.span_from(start);
                return Ok(self.terms.alloc_type(TypeKind::Pack(ty), span));
            }
            Ok(ty)
        })
    }

    /// `unary-type := ( 'const' | 'volatile' ) unary-type | postfix-type`
    fn unary_type(&mut self) -> ParseResult<TyId> {
        let start = self.current_span();
        let quals = match self.current_kind() {
            TokenKind::Const => Qualifiers::CONST,
            TokenKind::Volatile => Qualifiers::VOLATILE,
            _ => return self.postfix_type(),
        };
        self.advance();
        let ty = ensure_sufficient_stack(|| self.unary_type())?;
        let span = self.span_from(start);
        Ok(self.terms.alloc_type(TypeKind::Qualified { ty, quals }, span))
    }

    /// `postfix-type := primary-type { '&' | '*' | '[' [ expr ] ']' | 'const' | 'volatile' }`
    fn postfix_type(&mut self) -> ParseResult<TyId> {
        let start = self.current_span();
        let mut ty = self.primary_type()?;
        loop {
            let kind = match self.current_kind() {
                TokenKind::Amp => {
                    self.advance();
                    TypeKind::Reference(ty)
                }
                TokenKind::Star => {
                    self.advance();
                    TypeKind::Pointer(ty)
                }
                TokenKind::LBracket => {
                    self.advance();
                    if self.eat(TokenKind::RBracket) {
                        TypeKind::Slice(ty)
                    } else {
                        let len = self.expression()?;
                        self.expect(TokenKind::RBracket)?;
                        TypeKind::Array { ty, len }
                    }
                }
                TokenKind::Const => {
                    self.advance();
                    TypeKind::Qualified {
                        ty,
                        quals: Qualifiers::CONST,
                    }
                }
                TokenKind::Volatile => {
                    self.advance();
                    TypeKind::Qualified {
                        ty,
                        quals: Qualifiers::VOLATILE,
                    }
                }
                _ => return Ok(ty),
            };
            let span = self.span_from(start);
            ty = self.terms.alloc_type(kind, span);
        }
    }

    fn primary_type(&mut self) -> ParseResult<TyId> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Void => TypeKind::Void,
            TokenKind::Bool => TypeKind::Bool,
            TokenKind::Int => TypeKind::Int,
            TokenKind::Byte => TypeKind::Byte,
            TokenKind::Auto => TypeKind::Auto,
            TokenKind::Typename => TypeKind::TypeType,
            TokenKind::Ident(_) => return self.id_type(),
            TokenKind::Decltype => {
                self.advance();
                self.expect(TokenKind::LParen)?;
                let expr = self.expression()?;
                self.expect(TokenKind::RParen)?;
                let span = self.span_from(start);
                return Ok(self.terms.alloc_type(TypeKind::Decltype(expr), span));
            }
            TokenKind::LParen => return self.paren_type(),
            found => return Err(ParseError::expected_type(found, start)),
        };
        self.advance();
        Ok(self.terms.alloc_type(kind, start))
    }

    /// `'(' [ type { ',' type } ] ')' [ '->' type ]`
    ///
    /// One type without a trailing comma or arrow is just grouping.
    fn paren_type(&mut self) -> ParseResult<TyId> {
        let start = self.current_span();
        self.expect(TokenKind::LParen)?;
        let mut types = Vec::new();
        let mut trailing_comma = false;
        while !self.check(TokenKind::RParen) {
            types.push(self.ty()?);
            trailing_comma = self.eat(TokenKind::Comma);
            if !trailing_comma {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;

        if self.eat(TokenKind::Arrow) {
            let ret = self.ty()?;
            let span = self.span_from(start);
            return Ok(self
                .terms
                .alloc_type(TypeKind::Function { params: types, ret }, span));
        }
        match types.as_slice() {
            [only] if !trailing_comma => Ok(*only),
            _ => {
                let span = self.span_from(start);
                Ok(self.terms.alloc_type(TypeKind::Tuple(types), span))
            }
        }
    }

    /// `id-type := id [ '<' template-args '>' ]`
    ///
    /// The name must denote a class, a type parameter, or a template. When a
    /// class is both forward declared and defined, the definition is chosen.
    fn id_type(&mut self) -> ParseResult<TyId> {
        let (name, span) = self.expect_ident()?;
        let Some(decls) = self.lookup(name) else {
            return Err(ParseError::unknown_type(self.text(name), span));
        };
        let Some(decl) = self.type_declaration(&decls) else {
            let kind = decls
                .first()
                .map_or("declaration", |d| self.terms.decl(*d).kind.kind_name());
            return Err(ParseError::not_a_type(self.text(name), kind, span));
        };

        let name_id = if self.check(TokenKind::Lt)
            && matches!(self.terms.decl(decl).kind, DeclKind::Template { .. })
        {
            let args = self.template_arguments()?;
            let full = self.span_from(span);
            self.terms.alloc_name(
                NameKind::TemplateId {
                    template: decl,
                    args,
                },
                full,
            )
        } else {
            self.simple_name(name, span)
        };
        let full = self.span_from(span);
        Ok(self.terms.alloc_type(
            TypeKind::Declared {
                decl,
                name: name_id,
            },
            full,
        ))
    }

    fn type_declaration(&self, decls: &[DeclId]) -> Option<DeclId> {
        let mut first = None;
        for &decl in decls {
            match &self.terms.decl(decl).kind {
                DeclKind::Class { def, .. } => {
                    if def.is_valid() && self.terms.def(*def).kind.is_defining() {
                        return Some(decl);
                    }
                    first.get_or_insert(decl);
                }
                DeclKind::TypeParameter { .. } | DeclKind::Template { .. } => {
                    first.get_or_insert(decl);
                }
                _ => {}
            }
        }
        first
    }

    /// `'<' [ template-arg { ',' template-arg } ] '>'`
    pub(crate) fn template_arguments(&mut self) -> ParseResult<Vec<TemplateArg>> {
        self.expect(TokenKind::Lt)?;
        let mut args = Vec::new();
        if !self.check(TokenKind::Gt) {
            loop {
                args.push(self.template_argument()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::Gt)?;
        Ok(args)
    }

    /// A type if one parses up to the next `,` or `>`; otherwise a
    /// shift-level expression, so an unparenthesized `>` ends the list.
    fn template_argument(&mut self) -> ParseResult<TemplateArg> {
        let as_type = self.attempt(|p| {
            let ty = p.ty()?;
            if p.check(TokenKind::Comma) || p.check(TokenKind::Gt) {
                Ok(ty)
            } else {
                Err(ParseError::unexpected_token(
                    "`,` or `>`",
                    p.current_kind(),
                    p.current_span(),
                ))
            }
        });
        match as_type {
            Ok(ty) => Ok(TemplateArg::Type(ty)),
            Err(_) => Ok(TemplateArg::Expr(self.shift_expression()?)),
        }
    }

    /// Point span just after the last consumed token.
    pub(crate) fn after_previous(&self) -> Span {
        Span::point(self.previous_span().end)
    }
}
