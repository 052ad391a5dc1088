use std::fmt;

use crate::{DeclId, ExprId, NameId, ReqId, ScopeId, Span, TokenRange};

/// An expression term.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ExprKind {
    Bool(bool),
    Int(u64),
    /// A name that resolved to exactly one declaration.
    Ref {
        decl: DeclId,
        name: NameId,
    },
    /// A name that resolved to an overload set, in set order.
    Overload {
        name: NameId,
        decls: Vec<DeclId>,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Call {
        callee: ExprId,
        args: Vec<ExprId>,
    },
    Dot {
        object: ExprId,
        member: NameId,
    },
    Subscript {
        object: ExprId,
        index: ExprId,
    },
    Tuple(Vec<ExprId>),
    Requires {
        parms: Vec<DeclId>,
        reqs: Vec<ReqId>,
        scope: ScopeId,
    },
    /// Tokens captured for deferred parsing.
    Unparsed(TokenRange),
}

impl ExprKind {
    #[inline]
    pub fn is_unparsed(&self) -> bool {
        matches!(self, ExprKind::Unparsed(_))
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Not,
    Compl,
    Neg,
    Pos,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Compl => "~",
            UnaryOp::Neg => "-",
            UnaryOp::Pos => "+",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Cmp,
    Shl,
    Shr,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::BitAnd => "&",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Cmp => "<=>",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
