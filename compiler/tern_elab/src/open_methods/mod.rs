//! Open-method registry.
//!
//! A function with a `virtual` parameter takes part in open multi-method
//! dispatch under its name. The first one registered under a name is that
//! name's base; every registration, the base included, is an overrider in
//! declaration order. Choosing among them is left to the collaborator.

use rustc_hash::FxHashMap;
use tern_ir::{DeclId, Name};

#[derive(Clone, Debug, Default)]
pub struct OpenMethods {
    base: FxHashMap<Name, DeclId>,
    overriders: FxHashMap<Name, Vec<DeclId>>,
}

impl OpenMethods {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: Name, decl: DeclId) {
        tracing::trace!(?name, ?decl, "open method");
        self.base.entry(name).or_insert(decl);
        self.overriders.entry(name).or_default().push(decl);
    }

    pub fn base(&self, name: Name) -> Option<DeclId> {
        self.base.get(&name).copied()
    }

    pub fn overriders(&self, name: Name) -> &[DeclId] {
        self.overriders.get(&name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of names with at least one open method.
    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

#[cfg(test)]
mod tests;
