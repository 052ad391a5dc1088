use crate::{DeclId, ExprId, ScopeId, Span, StmtId, TokenRange};

/// A statement term.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum StmtKind {
    /// The top-level statement list of a translation unit.
    Translation {
        stmts: Vec<StmtId>,
        scope: ScopeId,
    },
    /// A class body.
    Member {
        stmts: Vec<StmtId>,
        scope: ScopeId,
    },
    /// A braced block.
    Compound {
        stmts: Vec<StmtId>,
        scope: ScopeId,
    },
    Empty,
    Expression(ExprId),
    Declaration(DeclId),
    Return(ExprId),
    Yield(ExprId),
    If {
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    While {
        cond: ExprId,
        body: StmtId,
    },
    Break,
    Continue,
    /// Tokens captured for deferred parsing, braces included.
    Unparsed(TokenRange),
}

impl StmtKind {
    /// The statement list and scope of a list-shaped statement.
    pub fn statement_list(&self) -> Option<(&[StmtId], ScopeId)> {
        match self {
            StmtKind::Translation { stmts, scope }
            | StmtKind::Member { stmts, scope }
            | StmtKind::Compound { stmts, scope } => Some((stmts, *scope)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_unparsed(&self) -> bool {
        matches!(self, StmtKind::Unparsed(_))
    }
}
