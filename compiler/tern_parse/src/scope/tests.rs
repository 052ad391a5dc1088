use super::*;
use pretty_assertions::assert_eq;
use tern_ir::Name;

fn key(n: u32) -> NameKey {
    NameKey::Placeholder(n)
}

fn decl(n: u32) -> DeclId {
    DeclId::new(n)
}

#[test]
fn test_declare_accumulates_in_order() {
    let mut scopes = Scopes::new();
    let root = Scopes::root();
    assert_eq!(scopes.declare(root, key(0), decl(1)), Declared::Fresh);
    assert_eq!(
        scopes.declare(root, key(0), decl(2)),
        Declared::Merged { position: 1 }
    );
    assert_eq!(
        scopes.declare(root, key(0), decl(3)),
        Declared::Merged { position: 2 }
    );
    let set = scopes.lookup(root, key(0)).unwrap();
    assert_eq!(set.as_slice(), &[decl(1), decl(2), decl(3)]);
}

#[test]
fn test_inner_scope_shadows() {
    let mut scopes = Scopes::new();
    let root = Scopes::root();
    scopes.declare(root, key(0), decl(1));
    let inner = scopes.push(ScopeKind::Block, root);
    scopes.set_current(inner);
    assert_eq!(scopes.lookup(inner, key(0)).unwrap().as_slice(), &[decl(1)]);

    scopes.declare(inner, key(0), decl(2));
    assert_eq!(scopes.lookup(inner, key(0)).unwrap().as_slice(), &[decl(2)]);
    assert_eq!(scopes.lookup(root, key(0)).unwrap().as_slice(), &[decl(1)]);
    assert!(scopes.lookup_local(root, NameKey::Simple(Name::EMPTY)).is_none());

    assert_eq!(scopes.parent(scopes.current()), Some(root));
}

#[test]
fn test_scope_for_is_stable() {
    let mut scopes = Scopes::new();
    let first = scopes.scope_for(decl(7), Scopes::root(), ScopeKind::Function);
    let again = scopes.scope_for(decl(7), Scopes::root(), ScopeKind::Function);
    assert_eq!(first, again);
    assert_eq!(scopes.saved_scope(decl(7)), Some(first));
    assert_eq!(scopes.parent(first), Some(Scopes::root()));
    assert_eq!(scopes.kind(first), ScopeKind::Function);
}

#[test]
fn test_replace_and_remove_member() {
    let mut scopes = Scopes::new();
    let root = Scopes::root();
    scopes.declare(root, key(0), decl(1));
    scopes.declare(root, key(0), decl(2));
    assert!(scopes.replace_member(root, key(0), decl(1), decl(9)));
    assert_eq!(scopes.lookup(root, key(0)).unwrap().as_slice(), &[decl(9), decl(2)]);
    assert!(scopes.remove_member(root, key(0), decl(9)));
    assert!(!scopes.contains(root, key(0), decl(9)));
    assert!(scopes.contains(root, key(0), decl(2)));
    assert!(!scopes.remove_member(root, key(1), decl(2)));
}

#[test]
fn test_rollback_undoes_everything() {
    let mut scopes = Scopes::new();
    let root = Scopes::root();
    scopes.declare(root, key(0), decl(1));
    let cp = scopes.checkpoint();
    let before = scopes.len();

    scopes.declare(root, key(0), decl(2));
    scopes.declare(root, key(1), decl(3));
    let fscope = scopes.scope_for(decl(2), root, ScopeKind::Function);
    scopes.declare(fscope, key(0), decl(4));
    scopes.replace_member(root, key(0), decl(1), decl(5));
    scopes.remove_member(root, key(1), decl(3));

    scopes.rollback(cp);
    assert_eq!(scopes.len(), before);
    assert_eq!(scopes.lookup(root, key(0)).unwrap().as_slice(), &[decl(1)]);
    assert!(scopes.lookup(root, key(1)).is_none());
    assert_eq!(scopes.saved_scope(decl(2)), None);
}

#[test]
fn test_nothing_is_logged_outside_a_checkpoint() {
    let mut scopes = Scopes::new();
    let root = Scopes::root();
    for n in 0..16 {
        scopes.declare(root, key(n), decl(n));
    }
    scopes.scope_for(decl(0), root, ScopeKind::Function);
    assert!(scopes.log.is_empty());

    let cp = scopes.checkpoint();
    scopes.declare(root, key(0), decl(20));
    assert_eq!(scopes.log.len(), 1);
    scopes.release(cp);
    assert!(scopes.log.is_empty());
    assert!(scopes.contains(root, key(0), decl(20)));
}

#[test]
fn test_release_inside_outer_checkpoint_keeps_log() {
    let mut scopes = Scopes::new();
    let root = Scopes::root();
    let outer = scopes.checkpoint();
    let inner = scopes.checkpoint();
    scopes.declare(root, key(0), decl(1));
    scopes.release(inner);
    assert_eq!(scopes.log.len(), 1);

    scopes.rollback(outer);
    assert!(scopes.lookup(root, key(0)).is_none());
    assert!(scopes.log.is_empty());
}
