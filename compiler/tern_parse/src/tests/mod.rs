//! Parser tests.
//!
//! - `parser`: declarations, statements, types, and expressions in both modes
//! - `properties`: generated inputs for overload order and trial atomicity

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod parser;

use tern_ir::{dump, StmtId, StringInterner, TermArena, TokenList};

use crate::{parse_translation, Input, ParseOptions, ParseResult, Scopes};

/// Everything one parse produced.
pub(crate) struct Parsed {
    pub interner: StringInterner,
    pub tokens: TokenList,
    pub terms: TermArena,
    pub scopes: Scopes,
    pub result: ParseResult<StmtId>,
}

impl Parsed {
    pub fn unit(&self) -> StmtId {
        self.result.clone().expect("parse failed")
    }

    pub fn dump(&self) -> String {
        dump::stmt(&self.terms, &self.interner, self.unit())
    }
}

pub(crate) fn parse_with(source: &str, options: ParseOptions) -> Parsed {
    let interner = StringInterner::new();
    let tokens = tern_lexer::lex(source, &interner);
    let mut terms = TermArena::new();
    let mut scopes = Scopes::new();
    let result = parse_translation(
        Input::new(&tokens, &interner),
        &mut terms,
        &mut scopes,
        options,
    );
    Parsed {
        interner,
        tokens,
        terms,
        scopes,
        result,
    }
}

pub(crate) fn parse_eager(source: &str) -> Parsed {
    parse_with(source, ParseOptions::eager())
}

pub(crate) fn parse_deferred(source: &str) -> Parsed {
    parse_with(source, ParseOptions::default())
}
