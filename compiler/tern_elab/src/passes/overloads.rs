//! Pass 2: overload-set membership.
//!
//! The parser binds most declarations as it goes; this pass makes sure the
//! rest (for instance templates minted in pass 1) are members too, and
//! tells the collaborator where each one landed.

use tern_ir::DeclId;

use crate::{Elaborator, MembershipEvent};

impl Elaborator<'_, '_> {
    pub(super) fn collect_overload(&mut self, decl: DeclId) {
        let scope = self.terms.decl(decl).scope;
        let key = self.terms.decl_key(decl);
        if !self.scopes.contains(scope, key, decl) {
            self.scopes.declare(scope, key, decl);
        }
        let Some(set) = self.scopes.lookup_local(scope, key) else {
            return;
        };
        let Some(position) = set.position(decl) else {
            return;
        };
        let event = MembershipEvent {
            scope,
            decl,
            position,
            set_len: set.len(),
        };
        tracing::trace!(?decl, position, set_len = event.set_len, "overload member");
        self.collaborator.membership(&event);
    }
}
