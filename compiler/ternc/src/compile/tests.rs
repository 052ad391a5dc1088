#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use tern_diagnostic::{DiagnosticConfig, ErrorCode};
use tern_elab::ElabOptions;

use super::{compile, CompileError};

#[test]
fn test_parse_failure_surfaces_as_parse_error() {
    let err = compile("var = 1;", ElabOptions::default())
        .err()
        .expect("should fail");
    assert!(matches!(err, CompileError::Parse(_)));
    assert_eq!(err.code(), ErrorCode::E1004);
}

#[test]
fn test_fragment_failure_surfaces_as_elab_error() {
    let err = compile("def f() { return missing; }", ElabOptions::default())
        .err()
        .expect("should fail");
    assert!(matches!(err, CompileError::Elab(_)));
    assert_eq!(err.code(), ErrorCode::E1007);
    assert_eq!(err.to_diagnostic().code, ErrorCode::E1007);
}

#[test]
fn test_diagnostics_follow_fault_order() {
    let c = compile(
        "def f() = 1; def f() = 2; class D { super : bool; }",
        ElabOptions::default(),
    )
    .unwrap();
    let report = c.report();
    let codes: Vec<ErrorCode> = report.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E2002, ErrorCode::E2001]);
    assert_eq!(report[0].labels.len(), 2);
}

#[test]
fn test_diagnostics_respect_error_limit() {
    let c = compile(
        "var x : int; var x : int; var x : int;",
        ElabOptions::default(),
    )
    .unwrap();
    assert_eq!(c.output.faults.len(), 3);
    let queue = c.diagnostics_with(DiagnosticConfig {
        error_limit: 2,
        ..DiagnosticConfig::default()
    });
    assert_eq!(queue.error_count(), 2);
    assert!(queue.limit_reached());
}
