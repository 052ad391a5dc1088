//! Scanner for Tern source text.
//!
//! Produces the EOF-terminated `TokenList` the parser reads through its cursor.
//! Identifiers are interned while lexing; whitespace and `//` comments are
//! dropped. Anything logos cannot classify becomes `TokenKind::Error` and is
//! left for the parser to reject.

use logos::Logos;
use tern_ir::{Span, StringInterner, Token, TokenKind, TokenList};

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
enum RawToken {
    // === Punctuators ===
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("::")]
    ColonColon,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,

    // === Operators ===
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Bar,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<=>")]
    LtEqGt,
    #[token("<<")]
    LtLt,
    #[token(">>")]
    GtGt,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    BarBar,
    #[token("!")]
    Bang,
    #[token("->")]
    Arrow,
    #[token("?")]
    Question,
    #[token("$")]
    Dollar,

    // === Keywords ===
    #[token("abstract")]
    Abstract,
    #[token("auto")]
    Auto,
    #[token("bool")]
    Bool,
    #[token("break")]
    Break,
    #[token("byte")]
    Byte,
    #[token("class")]
    Class,
    #[token("codef")]
    Codef,
    #[token("concept")]
    Concept,
    #[token("const")]
    Const,
    #[token("consume")]
    Consume,
    #[token("continue")]
    Continue,
    #[token("decltype")]
    Decltype,
    #[token("def")]
    Def,
    #[token("default")]
    Default,
    #[token("delete")]
    Delete,
    #[token("dynamic")]
    Dynamic,
    #[token("else")]
    Else,
    #[token("explicit")]
    Explicit,
    #[token("false")]
    False,
    #[token("forward")]
    Forward,
    #[token("if")]
    If,
    #[token("implicit")]
    Implicit,
    #[token("in")]
    In,
    #[token("inline")]
    Inline,
    #[token("int")]
    Int,
    #[token("mutable")]
    Mutable,
    #[token("namespace")]
    Namespace,
    #[token("out")]
    Out,
    #[token("private")]
    Private,
    #[token("protected")]
    Protected,
    #[token("public")]
    Public,
    #[token("requires")]
    Requires,
    #[token("return")]
    Return,
    #[token("static")]
    Static,
    #[token("super")]
    Super,
    #[token("template")]
    Template,
    #[token("true")]
    True,
    #[token("typename")]
    Typename,
    #[token("var")]
    Var,
    #[token("virtual")]
    Virtual,
    #[token("void")]
    Void,
    #[token("volatile")]
    Volatile,
    #[token("while")]
    While,
    #[token("yield")]
    Yield,

    // === Character classes ===
    #[regex("[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    // Literals that overflow u64 fail the callback and lex as errors.
    #[regex("[0-9]+", |lex| lex.slice().parse::<u64>().ok())]
    Integer(u64),
}

/// Lex `source`, interning identifiers into `interner`.
///
/// The returned list always ends with exactly one `Eof` token.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut tokens = TokenList::with_capacity(source.len() / 3 + 1);
    let mut logos = RawToken::lexer(source);
    let mut errors = 0usize;

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let kind = match result {
            Ok(raw) => convert_token(raw, logos.slice(), interner),
            Err(()) => {
                errors += 1;
                TokenKind::Error
            }
        };
        tokens.push(Token::new(kind, span));
    }

    let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token::new(TokenKind::Eof, Span::point(end)));

    tracing::trace!(tokens = tokens.len(), errors, "lexed source");
    tokens
}

fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::ColonColon => TokenKind::ColonColon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Ellipsis => TokenKind::Ellipsis,

        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Bar => TokenKind::Bar,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::BangEq => TokenKind::BangEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::LtEqGt => TokenKind::LtEqGt,
        RawToken::LtLt => TokenKind::LtLt,
        RawToken::GtGt => TokenKind::GtGt,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::BarBar => TokenKind::BarBar,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Question => TokenKind::Question,
        RawToken::Dollar => TokenKind::Dollar,

        RawToken::Abstract => TokenKind::Abstract,
        RawToken::Auto => TokenKind::Auto,
        RawToken::Bool => TokenKind::Bool,
        RawToken::Break => TokenKind::Break,
        RawToken::Byte => TokenKind::Byte,
        RawToken::Class => TokenKind::Class,
        RawToken::Codef => TokenKind::Codef,
        RawToken::Concept => TokenKind::Concept,
        RawToken::Const => TokenKind::Const,
        RawToken::Consume => TokenKind::Consume,
        RawToken::Continue => TokenKind::Continue,
        RawToken::Decltype => TokenKind::Decltype,
        RawToken::Def => TokenKind::Def,
        RawToken::Default => TokenKind::Default,
        RawToken::Delete => TokenKind::Delete,
        RawToken::Dynamic => TokenKind::Dynamic,
        RawToken::Else => TokenKind::Else,
        RawToken::Explicit => TokenKind::Explicit,
        RawToken::False => TokenKind::False,
        RawToken::Forward => TokenKind::Forward,
        RawToken::If => TokenKind::If,
        RawToken::Implicit => TokenKind::Implicit,
        RawToken::In => TokenKind::In,
        RawToken::Inline => TokenKind::Inline,
        RawToken::Int => TokenKind::Int,
        RawToken::Mutable => TokenKind::Mutable,
        RawToken::Namespace => TokenKind::Namespace,
        RawToken::Out => TokenKind::Out,
        RawToken::Private => TokenKind::Private,
        RawToken::Protected => TokenKind::Protected,
        RawToken::Public => TokenKind::Public,
        RawToken::Requires => TokenKind::Requires,
        RawToken::Return => TokenKind::Return,
        RawToken::Static => TokenKind::Static,
        RawToken::Super => TokenKind::Super,
        RawToken::Template => TokenKind::Template,
        RawToken::True => TokenKind::True,
        RawToken::Typename => TokenKind::Typename,
        RawToken::Var => TokenKind::Var,
        RawToken::Virtual => TokenKind::Virtual,
        RawToken::Void => TokenKind::Void,
        RawToken::Volatile => TokenKind::Volatile,
        RawToken::While => TokenKind::While,
        RawToken::Yield => TokenKind::Yield,

        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),
        RawToken::Integer(n) => TokenKind::Integer(n),
    }
}
