//! Mutable parser state that the trial parser snapshots.

use smallvec::SmallVec;
use tern_ir::{DeclId, ExprId, Specifiers, TokenKind};

/// Template parameters being accumulated for the declaration in progress.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TemplateContext {
    pub parms: Vec<DeclId>,
    pub constraint: Option<ExprId>,
}

/// Value-semantic parser state.
///
/// Cloning it is the whole snapshot; there is nothing shared behind it.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct ParserState {
    /// Opening delimiters not yet closed.
    pub braces: SmallVec<[TokenKind; 8]>,
    /// Specifiers waiting for the next declaration.
    pub specs: Specifiers,
    pub template: Option<TemplateContext>,
}

impl ParserState {
    /// Hand the pending specifiers to a declaration, clearing them.
    pub fn take_specs(&mut self) -> Specifiers {
        std::mem::take(&mut self.specs)
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.braces.len()
    }

    /// Track a consumed token's effect on delimiter nesting.
    pub(crate) fn track(&mut self, kind: TokenKind) {
        if kind.is_open_delimiter() {
            self.braces.push(kind);
        } else if let Some(open) = kind.matching_open() {
            if self.braces.last() == Some(&open) {
                self.braces.pop();
            }
        }
    }
}
