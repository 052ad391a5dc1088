//! Scopes and overload sets.
//!
//! Scopes form a tree mirroring lexical nesting. They are stored in a flat
//! vector and navigated through parent ids; nothing is ever torn down during
//! a run, because later elaboration passes re-enter the same scopes.
//!
//! While a checkpoint is outstanding every mutation is appended to a log,
//! so that a failed trial can undo exactly what it did (see
//! [`Scopes::checkpoint`]). Outside any trial nothing is logged.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tern_ir::ast::NameKey;
use tern_ir::{DeclId, ScopeId};

/// What introduced a scope.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScopeKind {
    Translation,
    Namespace,
    Class,
    Function,
    Block,
    Template,
    Requires,
}

/// Declarations sharing one name within one scope, in insertion order.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct OverloadSet {
    decls: SmallVec<[DeclId; 2]>,
}

impl OverloadSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[DeclId] {
        &self.decls
    }

    pub fn iter(&self) -> impl Iterator<Item = DeclId> + '_ {
        self.decls.iter().copied()
    }

    pub fn first(&self) -> Option<DeclId> {
        self.decls.first().copied()
    }

    pub fn position(&self, decl: DeclId) -> Option<usize> {
        self.decls.iter().position(|d| *d == decl)
    }

    pub fn contains(&self, decl: DeclId) -> bool {
        self.decls.contains(&decl)
    }
}

/// Outcome of [`Scopes::declare`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Declared {
    /// The name was new to the scope.
    Fresh,
    /// The name already had an overload set; `position` is the new member's
    /// index in it. Whether the merge is a legal overload is for the
    /// resolution collaborator to decide.
    Merged { position: usize },
}

#[derive(Clone, Debug)]
struct ScopeData {
    parent: Option<ScopeId>,
    kind: ScopeKind,
    bindings: FxHashMap<NameKey, OverloadSet>,
}

#[derive(Clone, Debug)]
enum LogEntry {
    Scope,
    Saved(DeclId),
    Bind { scope: ScopeId, key: NameKey },
    Replace {
        scope: ScopeId,
        key: NameKey,
        index: usize,
        old: DeclId,
    },
    Remove {
        scope: ScopeId,
        key: NameKey,
        index: usize,
        decl: DeclId,
    },
}

/// Length of the mutation log at some point in time.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ScopesCheckpoint {
    log: usize,
}

/// Manager for all scopes of one translation unit.
#[derive(Clone, Debug)]
pub struct Scopes {
    scopes: Vec<ScopeData>,
    current: ScopeId,
    log: Vec<LogEntry>,
    /// Checkpoints neither rolled back nor released.
    open: usize,
    /// Scope opened by each declaration.
    saved: FxHashMap<DeclId, ScopeId>,
}

impl Default for Scopes {
    fn default() -> Self {
        Self::new()
    }
}

impl Scopes {
    /// Create a scope manager holding only the translation scope.
    pub fn new() -> Self {
        Scopes {
            scopes: vec![ScopeData {
                parent: None,
                kind: ScopeKind::Translation,
                bindings: FxHashMap::default(),
            }],
            current: Self::root(),
            log: Vec::new(),
            open: 0,
            saved: FxHashMap::default(),
        }
    }

    #[inline]
    pub const fn root() -> ScopeId {
        ScopeId::new(0)
    }

    #[inline]
    pub fn current(&self) -> ScopeId {
        self.current
    }

    #[inline]
    pub fn set_current(&mut self, scope: ScopeId) {
        self.current = scope;
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn kind(&self, scope: ScopeId) -> ScopeKind {
        self.scopes[scope.index()].kind
    }

    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope.index()].parent
    }

    /// Create a child of `parent` without entering it.
    pub fn push(&mut self, kind: ScopeKind, parent: ScopeId) -> ScopeId {
        let id = ScopeId::from_usize(self.scopes.len());
        self.scopes.push(ScopeData {
            parent: Some(parent),
            kind,
            bindings: FxHashMap::default(),
        });
        self.record(LogEntry::Scope);
        id
    }

    /// The scope opened by `decl`, created under `parent` on first use.
    pub fn scope_for(&mut self, decl: DeclId, parent: ScopeId, kind: ScopeKind) -> ScopeId {
        if let Some(scope) = self.saved_scope(decl) {
            return scope;
        }
        let scope = self.push(kind, parent);
        self.saved.insert(decl, scope);
        self.record(LogEntry::Saved(decl));
        scope
    }

    pub fn saved_scope(&self, decl: DeclId) -> Option<ScopeId> {
        self.saved.get(&decl).copied()
    }

    /// Add `decl` to the overload set for `key` in `scope`.
    pub fn declare(&mut self, scope: ScopeId, key: NameKey, decl: DeclId) -> Declared {
        let set = self.scopes[scope.index()].bindings.entry(key).or_default();
        set.decls.push(decl);
        let position = set.decls.len() - 1;
        self.record(LogEntry::Bind { scope, key });
        if position == 0 {
            Declared::Fresh
        } else {
            Declared::Merged { position }
        }
    }

    /// Walk from `scope` outward; the innermost set found shadows the rest.
    pub fn lookup(&self, scope: ScopeId, key: NameKey) -> Option<&OverloadSet> {
        let mut at = Some(scope);
        while let Some(id) = at {
            let data = &self.scopes[id.index()];
            if let Some(set) = data.bindings.get(&key) {
                return Some(set);
            }
            at = data.parent;
        }
        None
    }

    pub fn lookup_local(&self, scope: ScopeId, key: NameKey) -> Option<&OverloadSet> {
        self.scopes[scope.index()].bindings.get(&key)
    }

    pub fn contains(&self, scope: ScopeId, key: NameKey, decl: DeclId) -> bool {
        self.lookup_local(scope, key).is_some_and(|set| set.contains(decl))
    }

    /// Substitute `new` for `old` in place, keeping its position in the set.
    pub fn replace_member(&mut self, scope: ScopeId, key: NameKey, old: DeclId, new: DeclId) -> bool {
        let Some(set) = self.scopes[scope.index()].bindings.get_mut(&key) else {
            return false;
        };
        let Some(index) = set.position(old) else {
            return false;
        };
        set.decls[index] = new;
        self.record(LogEntry::Replace {
            scope,
            key,
            index,
            old,
        });
        true
    }

    /// Drop `decl` from its set, keeping the order of the others.
    pub fn remove_member(&mut self, scope: ScopeId, key: NameKey, decl: DeclId) -> bool {
        let bindings = &mut self.scopes[scope.index()].bindings;
        let Some(set) = bindings.get_mut(&key) else {
            return false;
        };
        let Some(index) = set.position(decl) else {
            return false;
        };
        set.decls.remove(index);
        if set.decls.is_empty() {
            bindings.remove(&key);
        }
        self.record(LogEntry::Remove {
            scope,
            key,
            index,
            decl,
        });
        true
    }

    fn record(&mut self, entry: LogEntry) {
        if self.open > 0 {
            self.log.push(entry);
        }
    }

    /// Start logging mutations. Every checkpoint must end in exactly one
    /// [`rollback`](Self::rollback) or [`release`](Self::release).
    pub fn checkpoint(&mut self) -> ScopesCheckpoint {
        self.open += 1;
        ScopesCheckpoint {
            log: self.log.len(),
        }
    }

    /// Keep everything done since `cp`. Once no checkpoint is outstanding
    /// the log is dropped.
    pub fn release(&mut self, cp: ScopesCheckpoint) {
        debug_assert!(cp.log <= self.log.len());
        self.open = self.open.saturating_sub(1);
        if self.open == 0 {
            self.log.clear();
        }
    }

    /// Undo every scope, binding, and saved-scope entry made since `cp`.
    ///
    /// The current scope is not part of the checkpoint.
    pub fn rollback(&mut self, cp: ScopesCheckpoint) {
        while self.log.len() > cp.log {
            let Some(entry) = self.log.pop() else { break };
            match entry {
                LogEntry::Scope => {
                    self.scopes.pop();
                }
                LogEntry::Saved(decl) => {
                    self.saved.remove(&decl);
                }
                LogEntry::Bind { scope, key } => {
                    let bindings = &mut self.scopes[scope.index()].bindings;
                    if let Some(set) = bindings.get_mut(&key) {
                        set.decls.pop();
                        if set.decls.is_empty() {
                            bindings.remove(&key);
                        }
                    }
                }
                LogEntry::Replace {
                    scope,
                    key,
                    index,
                    old,
                } => {
                    if let Some(set) = self.scopes[scope.index()].bindings.get_mut(&key) {
                        set.decls[index] = old;
                    }
                }
                LogEntry::Remove {
                    scope,
                    key,
                    index,
                    decl,
                } => {
                    let set = self.scopes[scope.index()].bindings.entry(key).or_default();
                    set.decls.insert(index, decl);
                }
            }
        }
        self.release(cp);
    }
}

#[cfg(test)]
mod tests;
