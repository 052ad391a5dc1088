use crate::{DeclId, ExprId, NameId, Qualifiers, Span, TokenRange, TyId};

/// A type term.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Type {
    pub kind: TypeKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypeKind {
    Void,
    Bool,
    Int,
    Byte,
    /// The `auto` placeholder.
    Auto,
    /// The kind of types: `typename`.
    TypeType,
    /// A class, type parameter, or template named by lookup.
    Declared {
        decl: DeclId,
        name: NameId,
    },
    Function {
        params: Vec<TyId>,
        ret: TyId,
    },
    Reference(TyId),
    Pointer(TyId),
    Qualified {
        ty: TyId,
        quals: Qualifiers,
    },
    Array {
        ty: TyId,
        len: ExprId,
    },
    Slice(TyId),
    Tuple(Vec<TyId>),
    Pack(TyId),
    Decltype(ExprId),
    /// Tokens captured for deferred parsing.
    Unparsed(TokenRange),
}

impl TypeKind {
    /// Kind name for faults and traces.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeKind::Void => "void",
            TypeKind::Bool => "bool",
            TypeKind::Int => "int",
            TypeKind::Byte => "byte",
            TypeKind::Auto => "auto",
            TypeKind::TypeType => "typename",
            TypeKind::Declared { .. } => "declared",
            TypeKind::Function { .. } => "function",
            TypeKind::Reference(_) => "reference",
            TypeKind::Pointer(_) => "pointer",
            TypeKind::Qualified { .. } => "qualified",
            TypeKind::Array { .. } => "array",
            TypeKind::Slice(_) => "slice",
            TypeKind::Tuple(_) => "tuple",
            TypeKind::Pack(_) => "pack",
            TypeKind::Decltype(_) => "decltype",
            TypeKind::Unparsed(_) => "unparsed",
        }
    }

    #[inline]
    pub fn is_unparsed(&self) -> bool {
        matches!(self, TypeKind::Unparsed(_))
    }
}
