//! Property tests over generated programs.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use tern_ir::ast::{DeclKind, TypeKind};
use ternc::{compile, ElabOptions};

const TYPES: [&str; 3] = ["int", "bool", "byte"];

fn type_name(kind: &TypeKind) -> &'static str {
    match kind {
        TypeKind::Int => "int",
        TypeKind::Bool => "bool",
        TypeKind::Byte => "byte",
        _ => "other",
    }
}

proptest! {
    #[test]
    fn overloads_elaborate_in_declaration_order(picks in prop::collection::vec(0usize..3, 1..8)) {
        // Distinct arities keep every declaration a separate overload.
        let source: String = picks
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let params: Vec<String> = (0..=i).map(|n| format!("p{n}: {}", TYPES[*t])).collect();
                format!("def f({}) = 0;\n", params.join(", "))
            })
            .collect();
        let c = compile(&source, ElabOptions::default()).unwrap();
        let set = c.lookup("f");
        prop_assert_eq!(set.len(), picks.len());
        for (i, (decl, t)) in set.iter().zip(&picks).enumerate() {
            let params = c.terms.decl(*decl).kind.params().to_vec();
            prop_assert_eq!(params.len(), i + 1);
            let DeclKind::Parameter { ty } = c.terms.decl(params[0]).kind else {
                panic!("expected parameter");
            };
            prop_assert_eq!(type_name(&c.terms.ty(ty).kind), TYPES[*t]);
        }
        let positions: Vec<usize> = c.memberships.iter().map(|m| m.position).collect();
        prop_assert_eq!(positions, (0..picks.len()).collect::<Vec<_>>());
    }

    #[test]
    fn statements_in_bodies_leave_no_trial_residue(values in prop::collection::vec(0u64..100, 1..6)) {
        // Every line is tried as a declaration before it parses as an
        // expression statement.
        let body: String = values.iter().map(|v| format!("x + {v};\n")).collect();
        let source = format!("var x : int; def f() {{\n{body}return x; }}");
        let c = compile(&source, ElabOptions::default()).unwrap();
        prop_assert_eq!(c.lookup("x").len(), 1);
        prop_assert_eq!(c.dump().matches("(expr (+ x").count(), values.len());
    }
}
