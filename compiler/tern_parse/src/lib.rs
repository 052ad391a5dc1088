//! Recursive descent parser for Tern.
//!
//! Produces terms in a caller-owned `TermArena` and binds declarations into a
//! caller-owned `Scopes`. In `Deferred` mode, declaration types, initializers,
//! and bodies are captured as unparsed token ranges; elaboration later parses
//! them with a cursor restricted to the captured range (see [`Parser::over`]).
//!
//! Locally ambiguous productions are decided by the trial parser
//! ([`Parser::attempt`]), which rewinds cursor, state, scopes, and arena when
//! an alternative fails.

mod cursor;
mod error;
mod grammar;
mod options;
pub mod scope;
mod state;
mod trial;

pub use cursor::Cursor;
pub use error::{ParseError, ParseResult};
pub use options::{ParseMode, ParseOptions};
pub use scope::{Declared, OverloadSet, ScopeKind, Scopes, ScopesCheckpoint};
pub use state::{ParserState, TemplateContext};
pub use trial::TrialSnapshot;

use tern_ir::ast::{Decl, DeclKind, NameKey, NameKind, Phase};
use tern_ir::{
    DeclId, Name, NameId, ScopeId, Span, Specifiers, StmtId, StringInterner, TermArena, Token,
    TokenKind, TokenList, TokenRange,
};

/// The scanner output a parser reads from.
#[derive(Copy, Clone)]
pub struct Input<'a> {
    pub tokens: &'a TokenList,
    pub interner: &'a StringInterner,
}

impl<'a> Input<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Input { tokens, interner }
    }
}

/// Parser state.
pub struct Parser<'a, 'p> {
    cursor: Cursor<'a>,
    input: Input<'a>,
    terms: &'p mut TermArena,
    scopes: &'p mut Scopes,
    state: ParserState,
    options: ParseOptions,
}

/// Parse a whole translation unit in the current scope of `scopes`.
pub fn parse_translation(
    input: Input<'_>,
    terms: &mut TermArena,
    scopes: &mut Scopes,
    options: ParseOptions,
) -> ParseResult<StmtId> {
    let mut parser = Parser::new(input, terms, scopes, options);
    parser.translation()
}

impl<'a, 'p> Parser<'a, 'p> {
    /// Create a parser over the whole token stream.
    pub fn new(
        input: Input<'a>,
        terms: &'p mut TermArena,
        scopes: &'p mut Scopes,
        options: ParseOptions,
    ) -> Self {
        Parser {
            cursor: Cursor::new(input.tokens),
            input,
            terms,
            scopes,
            state: ParserState::default(),
            options,
        }
    }

    /// Create a parser restricted to a captured range.
    pub fn over(
        input: Input<'a>,
        range: TokenRange,
        terms: &'p mut TermArena,
        scopes: &'p mut Scopes,
        options: ParseOptions,
    ) -> Self {
        Parser {
            cursor: Cursor::over(input.tokens, range),
            ..Self::new(input, terms, scopes, options)
        }
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    // Cursor delegation

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn peek_kind(&self, n: usize) -> TokenKind {
        self.cursor.peek_kind(n)
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn check_ident(&self) -> bool {
        self.cursor.check_ident()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Consume the current token, keeping the brace stack in step.
    fn advance(&mut self) -> Token {
        let token = self.cursor.advance();
        self.state.track(token.kind);
        token
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Span> {
        if self.check(kind) {
            return Ok(self.advance().span);
        }
        let found = self.current_kind();
        match (found, kind.matching_open()) {
            (TokenKind::Eof, Some(open)) => {
                Err(ParseError::unclosed_delimiter(open, self.current_span()))
            }
            _ => Err(ParseError::unexpected_token(
                &format!("`{kind}`"),
                found,
                self.current_span(),
            )),
        }
    }

    fn expect_ident(&mut self) -> ParseResult<(Name, Span)> {
        match self.current_kind() {
            TokenKind::Ident(name) => Ok((name, self.advance().span)),
            found => Err(ParseError::expected_identifier(found, self.current_span())),
        }
    }

    /// Span from `start` through the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous_span())
    }

    fn text(&self, name: Name) -> &'static str {
        self.input.interner.lookup(name)
    }

    // Scope access

    /// Run `f` with `scope` current, restoring the previous scope afterwards.
    fn within<T>(
        &mut self,
        scope: ScopeId,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let outer = self.scopes.current();
        self.scopes.set_current(scope);
        let result = f(self);
        self.scopes.set_current(outer);
        result
    }

    /// Declarations visible under `name` from the current scope.
    fn lookup(&self, name: Name) -> Option<Vec<DeclId>> {
        self.scopes
            .lookup(self.scopes.current(), NameKey::Simple(name))
            .map(|set| set.as_slice().to_vec())
    }

    /// Bind `decl` into the current scope under its own name.
    fn bind(&mut self, decl: DeclId) -> Declared {
        let key = self.terms.decl_key(decl);
        self.scopes.declare(self.scopes.current(), key, decl)
    }

    /// A declaration parsed here is a non-static class member.
    ///
    /// Template scopes are transparent: a template member is still a member.
    fn declaring_member(&self, specs: Specifiers) -> bool {
        if specs.contains(Specifiers::STATIC) {
            return false;
        }
        let mut scope = Some(self.scopes.current());
        while let Some(id) = scope {
            match self.scopes.kind(id) {
                ScopeKind::Template => scope = self.scopes.parent(id),
                kind => return kind == ScopeKind::Class,
            }
        }
        false
    }

    fn alloc_decl(&mut self, name: NameId, specs: Specifiers, kind: DeclKind, span: Span) -> DeclId {
        self.terms.alloc_decl(Decl {
            name,
            specs,
            kind,
            span,
            scope: self.scopes.current(),
            phase: Phase::Unelaborated,
        })
    }

    fn simple_name(&mut self, name: Name, span: Span) -> NameId {
        self.terms.alloc_name(NameKind::Simple(name), span)
    }
}

#[cfg(test)]
mod tests;
