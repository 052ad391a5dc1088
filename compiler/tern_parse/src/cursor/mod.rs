//! Token cursor for navigating the token stream.
//!
//! A cursor covers either the whole `TokenList` or a `TokenRange` captured
//! earlier for deferred parsing. Positions are always absolute indices into
//! the list, so a saved position stays meaningful for the lifetime of the
//! list and restoring one is a plain integer write.

use tern_ir::{Span, Token, TokenKind, TokenList, TokenRange};

/// Cursor for navigating tokens.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
    /// One past the last readable position.
    end: usize,
    /// Reported at and past `end`.
    eof: Token,
}

impl<'a> Cursor<'a> {
    /// Cursor over the whole stream, stopping at its `Eof` token.
    pub fn new(tokens: &'a TokenList) -> Self {
        let len = tokens.len();
        let (end, eof) = match tokens.iter().last() {
            Some(last) if last.kind == TokenKind::Eof => (len - 1, *last),
            Some(last) => (len, Token::new(TokenKind::Eof, Span::point(last.span.end))),
            None => (0, Token::new(TokenKind::Eof, Span::DUMMY)),
        };
        Cursor {
            tokens,
            pos: 0,
            end,
            eof,
        }
    }

    /// Cursor restricted to `range`.
    ///
    /// Past the range the cursor reports a synthetic `Eof` positioned at the
    /// end of the range's last token.
    pub fn over(tokens: &'a TokenList, range: TokenRange) -> Self {
        let start = range.start as usize;
        let end = (range.end as usize).min(tokens.len()).max(start);
        let at = match tokens.slice(range).last() {
            Some(last) => last.span.end,
            None => tokens.get(start).map_or(0, |t| t.span.start),
        };
        Cursor {
            tokens,
            pos: start,
            end,
            eof: Token::new(TokenKind::Eof, Span::point(at)),
        }
    }

    /// Get the current position in the token stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the cursor position directly.
    ///
    /// Used by the trial parser to rewind after a failed attempt.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos <= self.end, "cursor position {pos} out of range");
        self.pos = pos;
    }

    #[inline]
    pub fn current(&self) -> &Token {
        if self.pos < self.end {
            &self.tokens[self.pos]
        } else {
            &self.eof
        }
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span.
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|p| self.tokens.get(p)) {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    /// Kind of the token `n` positions ahead (0 is the current token).
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        let at = self.pos + n;
        if at < self.end {
            self.tokens[at].kind
        } else {
            TokenKind::Eof
        }
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_ident(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Ident(_))
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// Consume the current token and return it.
    ///
    /// At the end of the range this returns `Eof` without moving.
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        if self.pos < self.end {
            tracing::trace!(pos = self.pos, kind = %token.kind, "advance");
            self.pos += 1;
        }
        token
    }

    /// Tokens consumed since `start`.
    pub fn range_from(&self, start: usize) -> TokenRange {
        TokenRange::new(to_u32(start), to_u32(self.pos))
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
