//! Expression productions.
//!
//! One routine per precedence tier, loosest first. Each binary tier loops
//! over its own operators left-associatively and recurses only into the next
//! tighter tier for operands.

use tern_ir::ast::{BinaryOp, DeclKind, ExprKind, NameKind, UnaryOp};
use tern_ir::{ExprId, TokenKind};
use tern_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseResult, Parser, ScopeKind};

type Tier<P> = fn(&mut P) -> ParseResult<ExprId>;

impl Parser<'_, '_> {
    pub(crate) fn expression(&mut self) -> ParseResult<ExprId> {
        ensure_sufficient_stack(|| self.logical_or())
    }

    fn binary_tier(
        &mut self,
        operator: fn(TokenKind) -> Option<BinaryOp>,
        next: Tier<Self>,
    ) -> ParseResult<ExprId> {
        let mut left = next(self)?;
        while let Some(op) = operator(self.current_kind()) {
            self.advance();
            let right = next(self)?;
            let span = self.terms.expr(left).span.merge(self.terms.expr(right).span);
            left = self
                .terms
                .alloc_expr(ExprKind::Binary { op, left, right }, span);
        }
        Ok(left)
    }

    /// `||`
    pub(crate) fn logical_or(&mut self) -> ParseResult<ExprId> {
        self.binary_tier(
            |k| (k == TokenKind::BarBar).then_some(BinaryOp::Or),
            Self::logical_and,
        )
    }

    /// `&&`
    fn logical_and(&mut self) -> ParseResult<ExprId> {
        self.binary_tier(
            |k| (k == TokenKind::AmpAmp).then_some(BinaryOp::And),
            Self::inclusive_or,
        )
    }

    /// `|`
    fn inclusive_or(&mut self) -> ParseResult<ExprId> {
        self.binary_tier(
            |k| (k == TokenKind::Bar).then_some(BinaryOp::BitOr),
            Self::exclusive_or,
        )
    }

    /// `^`
    fn exclusive_or(&mut self) -> ParseResult<ExprId> {
        self.binary_tier(
            |k| (k == TokenKind::Caret).then_some(BinaryOp::BitXor),
            Self::and_expression,
        )
    }

    /// `&`
    fn and_expression(&mut self) -> ParseResult<ExprId> {
        self.binary_tier(
            |k| (k == TokenKind::Amp).then_some(BinaryOp::BitAnd),
            Self::equality,
        )
    }

    fn equality(&mut self) -> ParseResult<ExprId> {
        self.binary_tier(
            |k| match k {
                TokenKind::EqEq => Some(BinaryOp::Eq),
                TokenKind::BangEq => Some(BinaryOp::Ne),
                _ => None,
            },
            Self::relational,
        )
    }

    fn relational(&mut self) -> ParseResult<ExprId> {
        self.binary_tier(
            |k| match k {
                TokenKind::Lt => Some(BinaryOp::Lt),
                TokenKind::Gt => Some(BinaryOp::Gt),
                TokenKind::LtEq => Some(BinaryOp::Le),
                TokenKind::GtEq => Some(BinaryOp::Ge),
                TokenKind::LtEqGt => Some(BinaryOp::Cmp),
                _ => None,
            },
            Self::shift_expression,
        )
    }

    /// `<<` `>>`; also the tier template arguments are parsed at.
    pub(crate) fn shift_expression(&mut self) -> ParseResult<ExprId> {
        self.binary_tier(
            |k| match k {
                TokenKind::LtLt => Some(BinaryOp::Shl),
                TokenKind::GtGt => Some(BinaryOp::Shr),
                _ => None,
            },
            Self::additive,
        )
    }

    fn additive(&mut self) -> ParseResult<ExprId> {
        self.binary_tier(
            |k| match k {
                TokenKind::Plus => Some(BinaryOp::Add),
                TokenKind::Minus => Some(BinaryOp::Sub),
                _ => None,
            },
            Self::multiplicative,
        )
    }

    fn multiplicative(&mut self) -> ParseResult<ExprId> {
        self.binary_tier(
            |k| match k {
                TokenKind::Star => Some(BinaryOp::Mul),
                TokenKind::Slash => Some(BinaryOp::Div),
                TokenKind::Percent => Some(BinaryOp::Rem),
                _ => None,
            },
            Self::unary,
        )
    }

    /// Prefix `!` `~` `-` `+`.
    fn unary(&mut self) -> ParseResult<ExprId> {
        let start = self.current_span();
        let op = match self.current_kind() {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Tilde => UnaryOp::Compl,
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Pos,
            _ => return self.postfix(),
        };
        self.advance();
        let operand = ensure_sufficient_stack(|| self.unary())?;
        let span = self.span_from(start);
        Ok(self.terms.alloc_expr(ExprKind::Unary { op, operand }, span))
    }

    /// Calls, member access, and subscripts.
    fn postfix(&mut self) -> ParseResult<ExprId> {
        let start = self.current_span();
        let mut expr = self.primary()?;
        loop {
            let kind = match self.current_kind() {
                TokenKind::LParen => {
                    self.advance();
                    let args = self.expression_list(TokenKind::RParen)?;
                    ExprKind::Call { callee: expr, args }
                }
                TokenKind::Dot => {
                    self.advance();
                    let member = self.identifier()?;
                    ExprKind::Dot {
                        object: expr,
                        member,
                    }
                }
                TokenKind::LBracket => {
                    self.advance();
                    let index = self.expression()?;
                    self.expect(TokenKind::RBracket)?;
                    ExprKind::Subscript {
                        object: expr,
                        index,
                    }
                }
                _ => return Ok(expr),
            };
            let span = self.span_from(start);
            expr = self.terms.alloc_expr(kind, span);
        }
    }

    /// Comma-separated expressions up to and including `close`.
    fn expression_list(&mut self, close: TokenKind) -> ParseResult<Vec<ExprId>> {
        let mut exprs = Vec::new();
        if !self.check(close) {
            loop {
                exprs.push(self.expression()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(close)?;
        Ok(exprs)
    }

    fn primary(&mut self) -> ParseResult<ExprId> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Integer(n) => ExprKind::Int(n),
            TokenKind::Ident(_) => return self.id_expression(),
            TokenKind::LParen => return self.paren_expression(),
            TokenKind::Requires => return self.requires_expression(),
            found => return Err(ParseError::expected_expression(found, start)),
        };
        self.advance();
        Ok(self.terms.alloc_expr(kind, start))
    }

    /// `'(' ')'`, `'(' expr ')'`, or `'(' expr ',' ... ')'`.
    fn paren_expression(&mut self) -> ParseResult<ExprId> {
        let start = self.current_span();
        self.expect(TokenKind::LParen)?;
        if self.eat(TokenKind::RParen) {
            let span = self.span_from(start);
            return Ok(self.terms.alloc_expr(ExprKind::Tuple(Vec::new()), span));
        }
        let first = self.expression()?;
        if self.eat(TokenKind::RParen) {
            return Ok(first);
        }
        self.expect(TokenKind::Comma)?;
        let mut elems = vec![first];
        elems.extend(self.expression_list(TokenKind::RParen)?);
        let span = self.span_from(start);
        Ok(self.terms.alloc_expr(ExprKind::Tuple(elems), span))
    }

    /// An unqualified name, resolved by lookup.
    ///
    /// One declaration gives a reference; several give an overload set in
    /// set order. A template or concept followed by `<` takes arguments.
    fn id_expression(&mut self) -> ParseResult<ExprId> {
        let (name, span) = self.expect_ident()?;
        let Some(decls) = self.lookup(name) else {
            return Err(ParseError::unknown_name(self.text(name), span));
        };
        tracing::trace!(name = self.text(name), candidates = decls.len(), "id-expression");

        let kind = if let [decl] = decls[..] {
            let templated = matches!(
                self.terms.decl(decl).kind,
                DeclKind::Template { .. } | DeclKind::Concept { .. }
            );
            let name = if templated && self.check(TokenKind::Lt) {
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
            ExprKind::Ref { decl, name }
        } else {
            ExprKind::Overload {
                name: self.simple_name(name, span),
                decls,
            }
        };
        let full = self.span_from(span);
        Ok(self.terms.alloc_expr(kind, full))
    }

    /// `'requires' [ '(' param-decls ')' ] '{' requirement* '}'`
    ///
    /// Parameters are typed eagerly and bound in a fresh requires scope.
    fn requires_expression(&mut self) -> ParseResult<ExprId> {
        let start = self.current_span();
        self.expect(TokenKind::Requires)?;
        let scope = self
            .scopes
            .push(ScopeKind::Requires, self.scopes.current());
        let (parms, reqs) = self.within(scope, |p| {
            let mut parms = Vec::new();
            if p.eat(TokenKind::LParen) {
                if !p.check(TokenKind::RParen) {
                    loop {
                        parms.push(p.parameter(true)?);
                        if !p.eat(TokenKind::Comma) {
                            break;
                        }
                    }
                }
                p.expect(TokenKind::RParen)?;
            }
            p.expect(TokenKind::LBrace)?;
            let mut reqs = Vec::new();
            while !p.eat(TokenKind::RBrace) {
                if p.is_at_end() {
                    return Err(ParseError::unclosed_delimiter(
                        TokenKind::LBrace,
                        p.current_span(),
                    ));
                }
                reqs.push(p.requirement()?);
            }
            Ok((parms, reqs))
        })?;
        let span = self.span_from(start);
        Ok(self
            .terms
            .alloc_expr(ExprKind::Requires { parms, reqs, scope }, span))
    }
}
