mod common;

use common::*;
use minijava_ast::ast::query::AstQuery;
use minijava_ast::*;

#[test]
fn test_find_class_by_name() {
    let program = counter_program();

    let base = AstQuery::find_class(&program.node, "Base").expect("Base is declared");
    assert_eq!(base.node.fields().len(), 2);
    assert!(base.node.parent().is_none());

    let counter = AstQuery::find_class(&program.node, "Counter").expect("Counter is declared");
    assert_eq!(counter.node.parent().map(|p| p.node.name.as_str()), Some("Base"));

    // The main class is not one of the program's class declarations
    assert!(AstQuery::find_class(&program.node, "Main").is_none());
}

#[test]
fn test_find_method_in_class() {
    let program = factorial_program();
    let fac = AstQuery::find_class(&program.node, "Fac").expect("Fac is declared");

    let method = AstQuery::find_method(&fac.node, "ComputeFac").expect("ComputeFac is declared");
    assert_eq!(method.node.formals.len(), 1);
    assert_eq!(method.span.start_line(), 10);

    assert!(AstQuery::find_method(&fac.node, "Missing").is_none());
}

#[test]
fn test_calls_in_method_return_and_body() {
    let program = factorial_program();
    let fac = AstQuery::find_class(&program.node, "Fac").expect("Fac is declared");
    let method = AstQuery::find_method(&fac.node, "ComputeFac").expect("ComputeFac is declared");

    assert!(!AstQuery::contains_calls(&method.node.return_expr.node));

    let mut calls = 0;
    for stmt in &method.node.body {
        stmt.walk_expressions(&mut |expr| {
            if matches!(expr.node, Expr::Call(_)) {
                calls += 1;
            }
            Ok::<(), ()>(())
        })
        .unwrap();
    }
    assert_eq!(calls, 1);
}
