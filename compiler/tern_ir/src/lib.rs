//! Term model for the Tern compiler front end.
//!
//! - Spans, interned names, and the scanner's token types
//! - Typed ids and the `TermArena` that owns every term
//! - The seven term families (`ast`), each a closed sum type
//! - Read-only traversal (`visitor`) and id-free rendering (`dump`)
//!
//! Terms never move once allocated. Deferred ("unparsed") fragments are
//! resolved by writing into the existing slot, see [`TermArena::replace_type`].

mod arena;
pub mod ast;
pub mod dump;
mod flags;
mod ids;
mod interner;
mod span;
mod token;
pub mod visitor;

pub use arena::{ArenaCheckpoint, TermArena};
pub use flags::{Qualifiers, Specifiers};
pub use ids::{DeclId, DefId, ExprId, NameId, ReqId, ScopeId, StmtId, TyId};
pub use interner::{Name, StringInterner};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList, TokenRange};
