use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builder_and_primary_span() {
    let diag = Diagnostic::error(ErrorCode::E2002)
        .with_message("redefinition of `f`")
        .with_secondary_label(Span::new(0, 3), "previous definition here")
        .with_label(Span::new(10, 13), "redefined here")
        .with_note("forward declarations may be repeated");

    assert!(diag.is_error());
    assert_eq!(diag.primary_span(), Some(Span::new(10, 13)));
    assert_eq!(diag.labels.len(), 2);
}

#[test]
fn test_display() {
    let diag = Diagnostic::error(ErrorCode::E2003)
        .with_message("conflicting declaration")
        .with_label(Span::new(4, 5), "here");
    assert_eq!(
        diag.to_string(),
        "error [E2003]: conflicting declaration\n  --> 4..5: here"
    );
}
