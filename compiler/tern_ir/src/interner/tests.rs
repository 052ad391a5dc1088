use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_is_stable() {
    let interner = StringInterner::new();
    let a = interner.intern("alpha");
    let b = interner.intern("beta");
    let a2 = interner.intern("alpha");

    assert_eq!(a, a2);
    assert_ne!(a, b);
    assert_eq!(interner.lookup(a), "alpha");
    assert_eq!(interner.lookup(b), "beta");
}

#[test]
fn test_empty_is_preinterned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.len(), 1);
}

#[test]
fn test_foreign_name_resolves_empty() {
    let big = StringInterner::new();
    for i in 0..10 {
        big.intern(&format!("n{i}"));
    }
    let foreign = big.intern("n9");
    let small = StringInterner::new();
    assert_eq!(small.lookup(foreign), "");
}
