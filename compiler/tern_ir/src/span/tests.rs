use super::*;

#[test]
fn test_span_merge_covers_both() {
    let a = Span::new(4, 9);
    let b = Span::new(2, 6);
    assert_eq!(a.merge(b), Span::new(2, 9));
    assert_eq!(b.merge(a), Span::new(2, 9));
}

#[test]
fn test_span_point_is_empty() {
    let p = Span::point(12);
    assert!(p.is_empty());
    assert_eq!(p.len(), 0);
    assert!(!p.contains(12));
}

#[test]
fn test_span_from_range() {
    let s = Span::from_range(3..8);
    assert_eq!(s, Span::new(3, 8));
    assert_eq!(s.len(), 5);
    assert!(s.contains(3));
    assert!(!s.contains(8));
}

#[test]
fn test_span_debug() {
    assert_eq!(format!("{:?}", Span::new(1, 4)), "1..4");
}
