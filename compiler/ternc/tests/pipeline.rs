//! End-to-end runs through lexing, parsing, and elaboration.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use tern_diagnostic::ErrorCode;
use tern_ir::ast::{DeclKind, Phase};
use tern_ir::dump;
use ternc::{compile, Compilation, ElabOptions, ParseMode, ParseOptions};

fn deferred(source: &str) -> Compilation {
    compile(source, ElabOptions::default()).expect("compilation failed")
}

fn eager(source: &str) -> Compilation {
    let options = ElabOptions {
        parse: ParseOptions {
            mode: ParseMode::Eager,
        },
        ..ElabOptions::default()
    };
    compile(source, options).expect("compilation failed")
}

const PROGRAM: &str = "\
class Shape;
def area(virtual s: Shape&) -> int;

class Shape {
    var sides : int = 0;
    def count() -> int { return sides; }
}

class Square {
    super : Shape;
    var side : int = 1;
}

def area(virtual s: Shape&) -> int { return 0; }
def area(virtual q: Square&) -> int { return q.side * q.side; }

def twice(x) = x + x;
";

#[test]
fn test_program_elaborates() {
    let c = deferred(PROGRAM);
    assert!(c.output.faults.is_empty(), "{:?}", c.output.faults);
    assert_eq!(c.lookup("Shape").len(), 1);
    assert_eq!(c.lookup("area").len(), 2);
    assert_eq!(c.output.partials.len(), 2);

    let twice = c.lookup("twice")[0];
    assert_eq!(
        dump::decl(&c.terms, &c.interner, twice),
        "(template ((typename _)) (def twice ((parm x _)) auto (= (+ x x))))"
    );
    for index in 0..c.terms.decl_count() {
        let decl = tern_ir::DeclId::from_usize(index);
        assert_eq!(c.terms.decl(decl).phase, Phase::DefinitionElaborated);
    }
}

#[test]
fn test_requires_parameters_are_elaborated() {
    let sources = [
        "concept Copyable<typename T> = requires (x: T) { x; x : T; };",
        "var b : bool = requires (y: int) { y; };",
        "template<typename T> requires requires (z: T) { z; } def g(a: T) = a;",
        "def f() -> bool { var c : bool = requires (w: int) { w + 1; }; return c; }",
    ];
    for source in sources {
        let c = deferred(source);
        for index in 0..c.terms.decl_count() {
            let decl = tern_ir::DeclId::from_usize(index);
            assert_eq!(
                c.terms.decl(decl).phase,
                Phase::DefinitionElaborated,
                "{source}: {}",
                dump::decl(&c.terms, &c.interner, decl)
            );
        }
    }
}

#[test]
fn test_open_methods_across_partials() {
    let c = deferred(PROGRAM);
    let area = c.name("area");
    let methods = &c.output.open_methods;
    // Every registration is kept, including the forward declaration.
    assert_eq!(methods.overriders(area).len(), 3);
    let base = methods.base(area).unwrap();
    assert!(matches!(
        c.terms.decl(base).kind,
        DeclKind::Function { .. }
    ));
    assert_eq!(c.output.partials.get(&base), Some(&c.lookup("area")[0]));
}

#[test]
fn test_memberships_are_reported() {
    let c = deferred("def f(a: int) = a; def f(a: bool) = a; var v : int;");
    let sets: Vec<(usize, usize)> = c
        .memberships
        .iter()
        .map(|m| (m.position, m.set_len))
        .collect();
    assert_eq!(sets, vec![(0, 2), (1, 2), (0, 1)]);
}

#[test]
fn test_eager_matches_deferred_without_forward_references() {
    let source = "\
class Point { var x : int; var y : int; }
def dot(a: const Point&, b: const Point&) -> int { return a.x * b.x + a.y * b.y; }
template<typename T> class Box { var item : T; }
var boxed : Box<Point>;
concept Summable<typename T> = requires (t: T) { t + t; };
";
    assert_eq!(eager(source).dump(), deferred(source).dump());
}

#[test]
fn test_faults_become_diagnostics() {
    let c = deferred("var x : int; def x() = 1; class C { super : int; }");
    let codes: Vec<ErrorCode> = c.report().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E2003, ErrorCode::E2001]);
}

#[test]
fn test_namespace_stops_compilation() {
    let err = compile("namespace n { }", ElabOptions::default())
        .err()
        .expect("should fail");
    assert_eq!(err.code(), ErrorCode::E9002);
}

#[test]
fn test_init_tracing_is_idempotent() {
    ternc::init_tracing();
    ternc::init_tracing();
}
