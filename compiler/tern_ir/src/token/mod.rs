//! Tokens consumed by the parser.
//!
//! The scanner produces a `TokenList`; the parser only ever reads it through a
//! cursor. Deferred fragments refer back into the same list by `TokenRange`.

use std::fmt;
use std::ops::Index;

use crate::{Name, Span};

/// Token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Punctuators
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Colon,
    ColonColon,
    Semicolon,
    Dot,
    Ellipsis,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Bar,
    Caret,
    Tilde,
    Eq,
    EqEq,
    BangEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    LtEqGt,
    LtLt,
    GtGt,
    AmpAmp,
    BarBar,
    Bang,
    Arrow,
    Question,
    Dollar,

    // Keywords
    Abstract,
    Auto,
    Bool,
    Break,
    Byte,
    Class,
    Codef,
    Concept,
    Const,
    Consume,
    Continue,
    Decltype,
    Def,
    Default,
    Delete,
    Dynamic,
    Else,
    Explicit,
    False,
    Forward,
    If,
    Implicit,
    In,
    Inline,
    Int,
    Mutable,
    Namespace,
    Out,
    Private,
    Protected,
    Public,
    Requires,
    Return,
    Static,
    Super,
    Template,
    True,
    Typename,
    Var,
    Virtual,
    Void,
    Volatile,
    While,
    Yield,

    // Character classes
    Ident(Name),
    Integer(u64),

    /// Input the scanner could not classify.
    Error,
    /// End of the token stream (or of a restricted range).
    Eof,
}

impl TokenKind {
    /// Human-readable form used in diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::ColonColon => "::",
            TokenKind::Semicolon => ";",
            TokenKind::Dot => ".",
            TokenKind::Ellipsis => "...",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Amp => "&",
            TokenKind::Bar => "|",
            TokenKind::Caret => "^",
            TokenKind::Tilde => "~",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::BangEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::LtEqGt => "<=>",
            TokenKind::LtLt => "<<",
            TokenKind::GtGt => ">>",
            TokenKind::AmpAmp => "&&",
            TokenKind::BarBar => "||",
            TokenKind::Bang => "!",
            TokenKind::Arrow => "->",
            TokenKind::Question => "?",
            TokenKind::Dollar => "$",
            TokenKind::Abstract => "abstract",
            TokenKind::Auto => "auto",
            TokenKind::Bool => "bool",
            TokenKind::Break => "break",
            TokenKind::Byte => "byte",
            TokenKind::Class => "class",
            TokenKind::Codef => "codef",
            TokenKind::Concept => "concept",
            TokenKind::Const => "const",
            TokenKind::Consume => "consume",
            TokenKind::Continue => "continue",
            TokenKind::Decltype => "decltype",
            TokenKind::Def => "def",
            TokenKind::Default => "default",
            TokenKind::Delete => "delete",
            TokenKind::Dynamic => "dynamic",
            TokenKind::Else => "else",
            TokenKind::Explicit => "explicit",
            TokenKind::False => "false",
            TokenKind::Forward => "forward",
            TokenKind::If => "if",
            TokenKind::Implicit => "implicit",
            TokenKind::In => "in",
            TokenKind::Inline => "inline",
            TokenKind::Int => "int",
            TokenKind::Mutable => "mutable",
            TokenKind::Namespace => "namespace",
            TokenKind::Out => "out",
            TokenKind::Private => "private",
            TokenKind::Protected => "protected",
            TokenKind::Public => "public",
            TokenKind::Requires => "requires",
            TokenKind::Return => "return",
            TokenKind::Static => "static",
            TokenKind::Super => "super",
            TokenKind::Template => "template",
            TokenKind::True => "true",
            TokenKind::Typename => "typename",
            TokenKind::Var => "var",
            TokenKind::Virtual => "virtual",
            TokenKind::Void => "void",
            TokenKind::Volatile => "volatile",
            TokenKind::While => "while",
            TokenKind::Yield => "yield",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Integer(_) => "integer literal",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of input",
        }
    }

    /// Opening delimiters tracked by the parser's brace stack.
    #[inline]
    pub fn is_open_delimiter(&self) -> bool {
        matches!(
            self,
            TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket
        )
    }

    /// The opener a closing delimiter matches, if this is one.
    #[inline]
    pub fn matching_open(&self) -> Option<TokenKind> {
        match self {
            TokenKind::RBrace => Some(TokenKind::LBrace),
            TokenKind::RParen => Some(TokenKind::LParen),
            TokenKind::RBracket => Some(TokenKind::LBracket),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its source location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Half-open range of token positions inside one `TokenList`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenRange {
    pub start: u32,
    pub end: u32,
}

impl TokenRange {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        TokenRange { start, end }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The scanner's output: an ordered, finite, EOF-terminated token sequence.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Tokens covered by `range`, or an empty slice if it is out of bounds.
    pub fn slice(&self, range: TokenRange) -> &[Token] {
        self.tokens
            .get(range.start as usize..range.end as usize)
            .unwrap_or(&[])
    }

    /// Source span covered by `range`.
    pub fn span_of(&self, range: TokenRange) -> Span {
        match self.slice(range) {
            [] => Span::DUMMY,
            [only] => only.span,
            [first, .., last] => first.span.merge(last.span),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

#[cfg(test)]
mod tests;
