use pretty_assertions::assert_eq;
use tern_ir::{DeclId, StringInterner};

use super::*;

#[test]
fn test_first_registration_is_base() {
    let interner = StringInterner::new();
    let draw = interner.intern("draw");
    let mut methods = OpenMethods::new();
    methods.register(draw, DeclId::new(3));
    methods.register(draw, DeclId::new(5));
    methods.register(draw, DeclId::new(9));

    assert_eq!(methods.base(draw), Some(DeclId::new(3)));
    assert_eq!(
        methods.overriders(draw),
        &[DeclId::new(3), DeclId::new(5), DeclId::new(9)]
    );
    assert_eq!(methods.len(), 1);
}

#[test]
fn test_names_are_independent() {
    let interner = StringInterner::new();
    let draw = interner.intern("draw");
    let hit = interner.intern("hit");
    let mut methods = OpenMethods::new();
    methods.register(hit, DeclId::new(1));
    methods.register(draw, DeclId::new(2));

    assert_eq!(methods.base(hit), Some(DeclId::new(1)));
    assert_eq!(methods.base(draw), Some(DeclId::new(2)));
    assert_eq!(methods.overriders(hit), &[DeclId::new(1)]);
    assert_eq!(methods.len(), 2);
}

#[test]
fn test_unregistered_name() {
    let interner = StringInterner::new();
    let methods = OpenMethods::new();
    assert!(methods.is_empty());
    assert_eq!(methods.base(interner.intern("nothing")), None);
    assert!(methods.overriders(interner.intern("nothing")).is_empty());
}
