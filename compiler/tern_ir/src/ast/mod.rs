//! Term families.
//!
//! Every AST node belongs to exactly one family. Each family is a closed sum
//! type, so an operation over a family is an exhaustive `match` and a missing
//! case is a build error rather than a runtime fault.

mod decl;
mod expr;
mod name;
mod stmt;
mod ty;

pub use decl::{Decl, DeclKind, Def, DefKind, Phase, Req, ReqKind};
pub use expr::{BinaryOp, Expr, ExprKind, UnaryOp};
pub use name::{NameKey, NameKind, NameTerm, TemplateArg};
pub use stmt::{Stmt, StmtKind};
pub use ty::{Type, TypeKind};

use std::fmt;

use crate::{DeclId, DefId, ExprId, NameId, ReqId, StmtId, TyId};

/// The families a term can belong to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Family {
    Name,
    Type,
    Expression,
    Statement,
    Declaration,
    Definition,
    Requirement,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Family::Name => "name",
            Family::Type => "type",
            Family::Expression => "expression",
            Family::Statement => "statement",
            Family::Declaration => "declaration",
            Family::Definition => "definition",
            Family::Requirement => "requirement",
        };
        f.write_str(s)
    }
}

/// A handle to any term.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Term {
    Name(NameId),
    Type(TyId),
    Expr(ExprId),
    Stmt(StmtId),
    Decl(DeclId),
    Def(DefId),
    Req(ReqId),
}

impl Term {
    pub fn family(self) -> Family {
        match self {
            Term::Name(_) => Family::Name,
            Term::Type(_) => Family::Type,
            Term::Expr(_) => Family::Expression,
            Term::Stmt(_) => Family::Statement,
            Term::Decl(_) => Family::Declaration,
            Term::Def(_) => Family::Definition,
            Term::Req(_) => Family::Requirement,
        }
    }
}
