//! Core parser tests.

use pretty_assertions::assert_eq;
use tern_diagnostic::ErrorCode;
use tern_ir::ast::{DeclKind, NameKey, StmtKind, TypeKind};
use tern_ir::Specifiers;

use super::{parse_deferred, parse_eager, Parsed};
use crate::Scopes;

fn error_code(parsed: &Parsed) -> ErrorCode {
    parsed.result.clone().expect_err("parse should fail").code
}

#[test]
fn test_variable_eager_and_deferred() {
    let source = "var x : int = 1 + 2;";
    assert_eq!(
        parse_eager(source).dump(),
        "(translation (var x int (= (+ 1 2))))"
    );
    assert_eq!(
        parse_deferred(source).dump(),
        "(translation (var x (unparsed 1) (= (unparsed 3))))"
    );
}

#[test]
fn test_auto_variable() {
    assert_eq!(
        parse_eager("var x : = 4;").dump(),
        "(translation (var x auto (= 4)))"
    );
}

#[test]
fn test_function_eager_binds_parameters() {
    let parsed = parse_eager("def f(a: int, b) -> int { return a; }");
    assert_eq!(
        parsed.dump(),
        "(translation (def f ((parm a int) (parm b auto)) int (block (return a))))"
    );
}

#[test]
fn test_function_deferred_captures_fragments() {
    let parsed = parse_deferred("def f(a: int, b) -> int { return a; }");
    assert_eq!(
        parsed.dump(),
        "(translation (def f ((parm a (unparsed 1)) (parm b auto)) (unparsed 1) (unparsed 5)))"
    );
}

#[test]
fn test_function_definition_forms() {
    let parsed = parse_eager(
        "def a(); def b() = delete; def c() = default; def d() = 1; def e() 2;",
    );
    assert_eq!(
        parsed.dump(),
        "(translation (def a () auto ;) (def b () auto (= delete)) \
         (def c () auto (= default)) (def d () auto (= 1)) (def e () auto (= 2)))"
    );
}

#[test]
fn test_forward_reference_needs_deferral() {
    let source = "def f() { return g(); } def g() = 1;";
    assert_eq!(error_code(&parse_eager(source)), ErrorCode::E1007);
    assert!(parse_deferred(source).result.is_ok());
}

#[test]
fn test_precedence_tiers() {
    let parsed = parse_eager("var y : int = 1 + 2 * 3 < 4 || !0 && 5 << 1;");
    assert_eq!(
        parsed.dump(),
        "(translation (var y int (= (|| (< (+ 1 (* 2 3)) 4) (&& (! 0) (<< 5 1))))))"
    );
}

#[test]
fn test_left_associative() {
    let parsed = parse_eager("var z : int = 1 - 2 - 3;");
    assert_eq!(parsed.dump(), "(translation (var z int (= (- (- 1 2) 3))))");
}

#[test]
fn test_postfix_and_tuples() {
    let parsed = parse_eager("var t : = (1, 2); var u : = t[0].first; var v : = ();");
    assert_eq!(
        parsed.dump(),
        "(translation (var t auto (= (tuple (1 2)))) \
         (var u auto (= (. ([] t 0) first))) (var v auto (= (tuple ()))))"
    );
}

#[test]
fn test_class_members() {
    let parsed = parse_eager(
        "class C { var a : int; def m() = a; static def s() = 2; }",
    );
    assert_eq!(
        parsed.dump(),
        "(translation (class C typename (members (field a int ;) \
         (method m () auto (= a)) (def s () auto (= 2)))))"
    );
}

#[test]
fn test_class_forms() {
    let parsed = parse_deferred("class A; class B : virtual typename { var x : int; }");
    assert_eq!(
        parsed.dump(),
        "(translation (class A typename ;) (class B (unparsed 1) (unparsed 7)))"
    );
    let b = parsed
        .scopes
        .lookup(Scopes::root(), NameKey::Simple(parsed.interner.intern("B")))
        .unwrap()
        .first()
        .unwrap();
    assert!(parsed.terms.decl(b).specs.contains(Specifiers::VIRTUAL));
}

#[test]
fn test_super_gets_placeholder_name() {
    let parsed = parse_eager("class B {} class D { super : B; }");
    assert_eq!(
        parsed.dump(),
        "(translation (class B typename (members)) \
         (class D typename (members (super _ B ;))))"
    );
}

#[test]
fn test_statements() {
    let parsed = parse_eager(
        "def f(x: bool) { if (x) { return 1; } else return 2; while (x) break; ; }",
    );
    assert_eq!(
        parsed.dump(),
        "(translation (def f ((parm x bool)) auto (block \
         (if x (block (return 1)) (return 2)) (while x (break)) (;))))"
    );
}

#[test]
fn test_expression_statement_after_failed_declaration_trial() {
    let parsed = parse_eager("var x : int = 0; x + 1;");
    assert_eq!(
        parsed.dump(),
        "(translation (var x int (= 0)) (expr (+ x 1)))"
    );
}

#[test]
fn test_types() {
    let parsed = parse_eager(
        "var a : const int&; var b : int*[3]; var c : (int, bool); \
         var d : (int) -> bool; var e : byte[]; var f : decltype(1)...;",
    );
    assert_eq!(
        parsed.dump(),
        "(translation (var a (const (& int)) ;) (var b (array (* int) 3) ;) \
         (var c (tuple (int bool)) ;) (var d (fn (int) bool) ;) \
         (var e (slice byte) ;) (var f (pack (decltype 1)) ;))"
    );
}

#[test]
fn test_template_declaration_and_template_id() {
    let parsed = parse_eager(
        "template<typename T, typename = int> requires true class Box { var v : T; } \
         var b : Box<int, bool>;",
    );
    assert_eq!(
        parsed.dump(),
        "(translation (template ((typename T) (typename _ int)) (requires true) \
         (class Box typename (members (field v T ;)))) (var b Box<int bool> ;))"
    );
}

#[test]
fn test_template_argument_disambiguation() {
    let parsed = parse_eager(
        "template<typename T> def f() = 0; var n : int = 3; \
         var p : = f<int>(); var q : = f<n + 1>();",
    );
    assert_eq!(
        parsed.dump(),
        "(translation (template ((typename T)) (def f () auto (= 0))) (var n int (= 3)) \
         (var p auto (= (call f<int>))) (var q auto (= (call f<(+ n 1)>))))"
    );
}

#[test]
fn test_concept_with_requires_expression() {
    let parsed = parse_eager(
        "concept Eq<typename T> = requires (a: T) { a == a; a : bool; a -> T; typename T; };",
    );
    assert_eq!(
        parsed.dump(),
        "(translation (concept Eq ((typename T)) (= (requires ((parm a T)) \
         (basic (== a a)) (: a bool) (-> a T) (typename T)))))"
    );
}

#[test]
fn test_concept_members() {
    let parsed = parse_eager(
        "concept C<typename T> { typename T*; requires true; requires { 1; }; 1 < 2; }",
    );
    assert_eq!(
        parsed.dump(),
        "(translation (concept C ((typename T)) (reqs (typename (* T)) \
         (requires true) (req (requires () (basic 1))) (req (< 1 2)))))"
    );
}

#[test]
fn test_namespace_body_is_member_list() {
    let parsed = parse_deferred("namespace n { var x : int; }");
    assert_eq!(
        parsed.dump(),
        "(translation (namespace n (members (var x (unparsed 1) ;))))"
    );
}

#[test]
fn test_overload_reference() {
    let parsed = parse_eager("def f(a: int) = a; def f(a: bool) = a; var g : = f;");
    assert_eq!(
        parsed.dump(),
        "(translation (def f ((parm a int)) auto (= a)) \
         (def f ((parm a bool)) auto (= a)) (var g auto (= (overload f 2))))"
    );
}

#[test]
fn test_specifiers_attach_to_next_declaration() {
    let parsed = parse_eager("static inline def f() = 1; def g() = 2;");
    let unit = parsed.terms.stmt(parsed.unit());
    let StmtKind::Translation { stmts, .. } = &unit.kind else {
        panic!("expected translation");
    };
    let specs: Vec<Specifiers> = stmts
        .iter()
        .map(|s| match parsed.terms.stmt(*s).kind {
            StmtKind::Declaration(d) => parsed.terms.decl(d).specs,
            _ => panic!("expected declaration"),
        })
        .collect();
    assert_eq!(
        specs,
        vec![Specifiers::STATIC | Specifiers::INLINE, Specifiers::empty()]
    );
}

#[test]
fn test_parameter_specifiers() {
    let parsed = parse_eager("def f(virtual in a: int) = a;");
    let f = parsed
        .scopes
        .lookup(Scopes::root(), NameKey::Simple(parsed.interner.intern("f")))
        .unwrap()
        .first()
        .unwrap();
    let param = parsed.terms.decl(f).kind.params()[0];
    assert_eq!(
        parsed.terms.decl(param).specs,
        Specifiers::VIRTUAL | Specifiers::IN
    );
}

#[test]
fn test_id_type_must_name_a_type() {
    assert_eq!(
        error_code(&parse_eager("var x : int; var y : x;")),
        ErrorCode::E1005
    );
    assert_eq!(error_code(&parse_eager("var y : nope;")), ErrorCode::E1005);
}

#[test]
fn test_forward_declared_class_type_prefers_definition() {
    let parsed = parse_eager("class C; class C {} var x : C;");
    let set = parsed
        .scopes
        .lookup(Scopes::root(), NameKey::Simple(parsed.interner.intern("C")))
        .unwrap();
    assert_eq!(set.len(), 2);
    let defined = set.as_slice()[1];
    let var = parsed
        .scopes
        .lookup(Scopes::root(), NameKey::Simple(parsed.interner.intern("x")))
        .unwrap()
        .first()
        .unwrap();
    let DeclKind::Variable { ty, .. } = parsed.terms.decl(var).kind else {
        panic!("expected variable");
    };
    assert!(matches!(
        parsed.terms.ty(ty).kind,
        TypeKind::Declared { decl, .. } if decl == defined
    ));
}

#[test]
fn test_errors() {
    assert_eq!(error_code(&parse_eager("def f(a = 1);")), ErrorCode::E1008);
    assert_eq!(error_code(&parse_deferred("def f() { return 1;")), ErrorCode::E1003);
    assert_eq!(error_code(&parse_eager("var x : int = @;")), ErrorCode::E0001);
    assert_eq!(error_code(&parse_eager("var 1 : int;")), ErrorCode::E1004);
    assert_eq!(error_code(&parse_eager("var x : int = ;")), ErrorCode::E1002);
    assert_eq!(error_code(&parse_deferred("var x : = ;")), ErrorCode::E1002);
    assert_eq!(error_code(&parse_deferred("var x : ;")), ErrorCode::E1005);
    assert_eq!(error_code(&parse_eager("codef c();")), ErrorCode::E1001);
}

#[test]
fn test_deferred_spans_cover_captured_tokens() {
    let parsed = parse_deferred("var x : int = 1 + 2;");
    let x = parsed
        .scopes
        .lookup(Scopes::root(), NameKey::Simple(parsed.interner.intern("x")))
        .unwrap()
        .first()
        .unwrap();
    let DeclKind::Variable { ty, def } = parsed.terms.decl(x).kind else {
        panic!("expected variable");
    };
    let TypeKind::Unparsed(range) = parsed.terms.ty(ty).kind else {
        panic!("expected unparsed type");
    };
    assert_eq!(parsed.tokens.slice(range).len(), 1);
    assert_eq!(parsed.terms.ty(ty).span, tern_ir::Span::new(8, 11));
    assert_eq!(parsed.terms.def(def).span, tern_ir::Span::new(14, 19));
}
