use crate::{DeclId, ExprId, Name, Span, TyId};

/// A name term.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct NameTerm {
    pub kind: NameKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum NameKind {
    /// An identifier.
    Simple(Name),
    /// A compiler-minted name with no spelling (unnamed parameters, implicit
    /// template parameters, anonymous supers).
    Placeholder(u32),
    /// A template or concept applied to arguments: `C<T, 3>`.
    TemplateId {
        template: DeclId,
        args: Vec<TemplateArg>,
    },
}

/// A template argument after disambiguation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TemplateArg {
    Type(TyId),
    Expr(ExprId),
}

/// The key a declaration is bound under in a scope.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NameKey {
    Simple(Name),
    Placeholder(u32),
}
