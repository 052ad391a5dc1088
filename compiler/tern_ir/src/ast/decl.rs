use crate::{DeclId, DefId, ExprId, NameId, ReqId, ScopeId, Span, Specifiers, StmtId, TyId};

/// Elaboration progress of one declaration.
///
/// `Unelaborated -> TypeElaborated -> DefinitionElaborated`, never skipping.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub enum Phase {
    #[default]
    Unelaborated,
    TypeElaborated,
    DefinitionElaborated,
}

impl Phase {
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Unelaborated => Some(Phase::TypeElaborated),
            Phase::TypeElaborated => Some(Phase::DefinitionElaborated),
            Phase::DefinitionElaborated => None,
        }
    }
}

/// A declaration term.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Decl {
    pub name: NameId,
    pub specs: Specifiers,
    pub kind: DeclKind,
    pub span: Span,
    /// The scope the declaration was declared in.
    pub scope: ScopeId,
    pub phase: Phase,
}

impl Decl {
    /// Move to `to` if it is the immediate successor of the current phase.
    ///
    /// Returns `false` (and leaves the phase alone) otherwise.
    pub fn advance(&mut self, to: Phase) -> bool {
        if self.phase.next() == Some(to) {
            self.phase = to;
            true
        } else {
            false
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum DeclKind {
    Variable {
        ty: TyId,
        def: DefId,
    },
    /// A non-static data member.
    Field {
        ty: TyId,
        def: DefId,
    },
    Parameter {
        ty: TyId,
    },
    Function {
        params: Vec<DeclId>,
        ret: TyId,
        def: DefId,
        /// Declared directly inside a class body without `static`.
        member: bool,
    },
    Coroutine {
        params: Vec<DeclId>,
        ret: TyId,
        def: DefId,
    },
    Class {
        kind: TyId,
        def: DefId,
    },
    /// A base-type specifier.
    Super {
        ty: TyId,
        def: DefId,
    },
    TypeParameter {
        index: u32,
        default: Option<TyId>,
    },
    Concept {
        parms: Vec<DeclId>,
        def: DefId,
    },
    Namespace {
        body: StmtId,
    },
    /// Wraps a parameterized declaration.
    Template {
        parms: Vec<DeclId>,
        constraint: Option<ExprId>,
        decl: DeclId,
    },
}

impl DeclKind {
    /// Kind name for faults and traces.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DeclKind::Variable { .. } => "variable",
            DeclKind::Field { .. } => "field",
            DeclKind::Parameter { .. } => "parameter",
            DeclKind::Function { .. } => "function",
            DeclKind::Coroutine { .. } => "coroutine",
            DeclKind::Class { .. } => "class",
            DeclKind::Super { .. } => "super",
            DeclKind::TypeParameter { .. } => "type parameter",
            DeclKind::Concept { .. } => "concept",
            DeclKind::Namespace { .. } => "namespace",
            DeclKind::Template { .. } => "template",
        }
    }

    /// The owned definition, for kinds that have one.
    pub fn def(&self) -> Option<DefId> {
        match self {
            DeclKind::Variable { def, .. }
            | DeclKind::Field { def, .. }
            | DeclKind::Function { def, .. }
            | DeclKind::Coroutine { def, .. }
            | DeclKind::Class { def, .. }
            | DeclKind::Super { def, .. }
            | DeclKind::Concept { def, .. } => Some(*def),
            DeclKind::Parameter { .. }
            | DeclKind::TypeParameter { .. }
            | DeclKind::Namespace { .. }
            | DeclKind::Template { .. } => None,
        }
    }

    /// Function and coroutine parameters.
    pub fn params(&self) -> &[DeclId] {
        match self {
            DeclKind::Function { params, .. } | DeclKind::Coroutine { params, .. } => params,
            _ => &[],
        }
    }
}

/// A definition term.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Def {
    pub kind: DefKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum DefKind {
    /// No initializer or body was given.
    Empty,
    /// An initializer, expression body, or concept expression.
    Expression(ExprId),
    /// A compound function body.
    Function(StmtId),
    /// A member-statement class body.
    Class(StmtId),
    Concept(Vec<ReqId>),
    Deleted,
    Defaulted,
}

impl DefKind {
    /// True for every definition except `Empty`.
    #[inline]
    pub fn is_defining(&self) -> bool {
        !matches!(self, DefKind::Empty)
    }
}

/// A requirement term.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Req {
    pub kind: ReqKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ReqKind {
    /// `typename T;`
    Type(TyId),
    /// `requires e;`
    Syntactic(ExprId),
    /// `e;` in a concept body.
    Expression(ExprId),
    /// `e;` in a requires-expression.
    Basic(ExprId),
    /// `e : T;`
    Conversion { expr: ExprId, ty: TyId },
    /// `e -> T;`
    Deduction { expr: ExprId, ty: TyId },
}
