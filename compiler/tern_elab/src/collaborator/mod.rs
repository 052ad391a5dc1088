//! The resolution and diagnostics collaborator.
//!
//! Elaboration only guarantees overload-set membership and reports what it
//! finds. Ranking, ambiguity detection, and presentation belong to whoever
//! implements [`Collaborator`].

use tern_ir::{DeclId, ScopeId};

use crate::StructuralFault;

/// A declaration confirmed as a member of its overload set.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MembershipEvent {
    pub scope: ScopeId,
    pub decl: DeclId,
    /// Index of `decl` in its set.
    pub position: usize,
    /// Size of the set when the event was reported.
    pub set_len: usize,
}

/// Receives membership events and structural faults, in order.
pub trait Collaborator {
    fn membership(&mut self, event: &MembershipEvent);

    fn fault(&mut self, fault: &StructuralFault);
}

/// A collaborator that keeps everything it is told.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub memberships: Vec<MembershipEvent>,
    pub faults: Vec<StructuralFault>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Collaborator for Recorder {
    fn membership(&mut self, event: &MembershipEvent) {
        self.memberships.push(*event);
    }

    fn fault(&mut self, fault: &StructuralFault) {
        self.faults.push(*fault);
    }
}
