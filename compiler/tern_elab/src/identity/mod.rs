//! Type identity.
//!
//! Elaboration never builds a type algebra. It only asks whether two parsed
//! types are the same type, through canonical handles handed out by a
//! `TypeIdentity` service.

use rustc_hash::FxHashMap;
use tern_ir::ast::{DeclKind, ExprKind, NameKind, TemplateArg, TypeKind};
use tern_ir::{DeclId, ExprId, Qualifiers, TermArena, TyId};

/// Canonical handle for a type; equal handles mean identical types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeHandle(u32);

impl TypeHandle {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Maps parsed types to canonical handles.
pub trait TypeIdentity {
    /// The handle of `ty`. Never called on an unparsed type.
    fn identify(&mut self, terms: &TermArena, ty: TyId) -> TypeHandle;
}

/// Structural identity: two types are identical when they have the same
/// shape.
///
/// Declared types compare by declaration, type parameters by index, and
/// template arguments by their own identity. Expressions inside types
/// (array bounds, `decltype`) compare by literal value when they are integer
/// literals and by term otherwise.
#[derive(Clone, Debug, Default)]
pub struct StructuralTypes {
    shapes: FxHashMap<Shape, TypeHandle>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
enum Shape {
    Void,
    Bool,
    Int,
    Byte,
    Auto,
    TypeType,
    Declared(DeclId),
    Parameter(u32),
    Applied(DeclId, Vec<Arg>),
    Function(Vec<TypeHandle>, TypeHandle),
    Reference(TypeHandle),
    Pointer(TypeHandle),
    Qualified(TypeHandle, Qualifiers),
    Array(TypeHandle, Value),
    Slice(TypeHandle),
    Tuple(Vec<TypeHandle>),
    Pack(TypeHandle),
    Decltype(Value),
    Opaque(TyId),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
enum Arg {
    Type(TypeHandle),
    Expr(Value),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
enum Value {
    Int(u64),
    Bool(bool),
    Term(ExprId),
}

impl StructuralTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct types seen so far.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    fn intern(&mut self, shape: Shape) -> TypeHandle {
        let next = TypeHandle(u32::try_from(self.shapes.len()).unwrap_or(u32::MAX));
        *self.shapes.entry(shape).or_insert(next)
    }

    fn shape(&mut self, terms: &TermArena, ty: TyId) -> Shape {
        match &terms.ty(ty).kind {
            TypeKind::Void => Shape::Void,
            TypeKind::Bool => Shape::Bool,
            TypeKind::Int => Shape::Int,
            TypeKind::Byte => Shape::Byte,
            TypeKind::Auto => Shape::Auto,
            TypeKind::TypeType => Shape::TypeType,
            TypeKind::Declared { decl, name } => {
                if let DeclKind::TypeParameter { index, .. } = terms.decl(*decl).kind {
                    return Shape::Parameter(index);
                }
                match &terms.name(*name).kind {
                    NameKind::TemplateId { template, args } => {
                        let args = args.iter().map(|arg| self.arg(terms, *arg)).collect();
                        Shape::Applied(*template, args)
                    }
                    NameKind::Simple(_) | NameKind::Placeholder(_) => Shape::Declared(*decl),
                }
            }
            TypeKind::Function { params, ret } => {
                let params = params.iter().map(|p| self.identify(terms, *p)).collect();
                Shape::Function(params, self.identify(terms, *ret))
            }
            TypeKind::Reference(inner) => Shape::Reference(self.identify(terms, *inner)),
            TypeKind::Pointer(inner) => Shape::Pointer(self.identify(terms, *inner)),
            TypeKind::Qualified { ty, quals } => Shape::Qualified(self.identify(terms, *ty), *quals),
            TypeKind::Array { ty, len } => {
                Shape::Array(self.identify(terms, *ty), value(terms, *len))
            }
            TypeKind::Slice(inner) => Shape::Slice(self.identify(terms, *inner)),
            TypeKind::Tuple(elems) => {
                Shape::Tuple(elems.iter().map(|e| self.identify(terms, *e)).collect())
            }
            TypeKind::Pack(inner) => Shape::Pack(self.identify(terms, *inner)),
            TypeKind::Decltype(expr) => Shape::Decltype(value(terms, *expr)),
            TypeKind::Unparsed(_) => Shape::Opaque(ty),
        }
    }

    fn arg(&mut self, terms: &TermArena, arg: TemplateArg) -> Arg {
        match arg {
            TemplateArg::Type(ty) => Arg::Type(self.identify(terms, ty)),
            TemplateArg::Expr(expr) => Arg::Expr(value(terms, expr)),
        }
    }
}

impl TypeIdentity for StructuralTypes {
    fn identify(&mut self, terms: &TermArena, ty: TyId) -> TypeHandle {
        let shape = self.shape(terms, ty);
        self.intern(shape)
    }
}

fn value(terms: &TermArena, expr: ExprId) -> Value {
    match terms.expr(expr).kind {
        ExprKind::Int(n) => Value::Int(n),
        ExprKind::Bool(b) => Value::Bool(b),
        _ => Value::Term(expr),
    }
}
