//! Speculative parsing.
//!
//! A trial snapshots everything a production can touch: cursor position,
//! parser state, the current scope, the scope log, and the term arena. If the
//! attempted production fails, all five are restored before the error is
//! returned, so a failed alternative leaves no trace. Nested trials compose:
//! an outer rewind covers whatever an inner trial kept.

use tern_ir::{ArenaCheckpoint, ScopeId};

use crate::{ParseResult, Parser, ParserState, ScopesCheckpoint, TemplateContext};

/// Everything needed to rewind a parser.
#[derive(Clone, Debug)]
pub struct TrialSnapshot {
    pos: usize,
    state: ParserState,
    scope: ScopeId,
    scopes: ScopesCheckpoint,
    terms: ArenaCheckpoint,
}

impl Parser<'_, '_> {
    /// Take a snapshot. It must end in exactly one [`restore`](Self::restore)
    /// or [`release`](Self::release).
    pub fn snapshot(&mut self) -> TrialSnapshot {
        TrialSnapshot {
            pos: self.cursor.position(),
            state: self.state.clone(),
            scope: self.scopes.current(),
            scopes: self.scopes.checkpoint(),
            terms: self.terms.checkpoint(),
        }
    }

    pub fn restore(&mut self, snapshot: TrialSnapshot) {
        self.cursor.set_position(snapshot.pos);
        self.state = snapshot.state;
        self.scopes.rollback(snapshot.scopes);
        self.scopes.set_current(snapshot.scope);
        self.terms.rollback(snapshot.terms);
    }

    /// Keep everything done since `snapshot` was taken.
    pub fn release(&mut self, snapshot: TrialSnapshot) {
        self.scopes.release(snapshot.scopes);
    }

    /// Run `f` speculatively.
    ///
    /// On `Ok` every effect is kept. On `Err` the parser is rewound to where
    /// it was before `f` ran, and the error is returned.
    pub fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        let snapshot = self.snapshot();
        match f(self) {
            Ok(value) => {
                self.release(snapshot);
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(
                    pos = snapshot.pos,
                    failed_at = ?err.span,
                    code = %err.code,
                    "trial failed, rewinding"
                );
                self.restore(snapshot);
                Err(err)
            }
        }
    }

    /// Like [`attempt`](Self::attempt), discarding the error.
    pub fn trial<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> Option<T> {
        self.attempt(f).ok()
    }

    /// Run `f` with `context` as the template context being accumulated.
    ///
    /// The previous context is reinstated on every exit path, and the
    /// context as `f` left it is returned alongside its result.
    pub fn with_template<T>(
        &mut self,
        context: TemplateContext,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> (ParseResult<T>, TemplateContext) {
        let previous = self.state.template.replace(context);
        let result = f(self);
        let context = std::mem::replace(&mut self.state.template, previous).unwrap_or_default();
        (result, context)
    }
}

#[cfg(test)]
mod tests;
