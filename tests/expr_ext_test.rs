mod common;

use common::*;
use minijava_ast::ast::query::AstQuery;
use minijava_ast::*;

/// `a + b * f.g(c)` built left to right
fn sample() -> LocatedExpr {
    binary(
        Expr::Plus,
        var("a", 1),
        binary(Expr::Times, var("b", 1), call(var("f", 1), "g", vec![var("c", 1)], 1)),
    )
}

fn label(expr: &LocatedExpr) -> String {
    match &expr.node {
        Expr::IdentifierExp(name) => name.clone(),
        other => other.binary_operator().unwrap_or("call").to_string(),
    }
}

#[test]
fn test_walk_is_pre_order() {
    let mut seen = Vec::new();
    sample()
        .walk(&mut |expr| {
            seen.push(label(expr));
            Ok::<(), ()>(())
        })
        .unwrap();
    assert_eq!(seen, vec!["+", "a", "*", "b", "call", "f", "c"]);
}

#[test]
fn test_walk_post_visits_children_first() {
    let mut seen = Vec::new();
    sample()
        .walk_post(&mut |expr| {
            seen.push(label(expr));
            Ok::<(), ()>(())
        })
        .unwrap();
    assert_eq!(seen, vec!["a", "b", "f", "c", "call", "*", "+"]);
}

#[test]
fn test_walk_stops_at_first_error() {
    let mut visited = 0;
    let result = sample().walk(&mut |expr| {
        visited += 1;
        match &expr.node {
            Expr::Times(_) => Err("found multiplication"),
            _ => Ok(()),
        }
    });
    assert_eq!(result, Err("found multiplication"));
    assert_eq!(visited, 3);
}

#[test]
fn test_find_and_predicates() {
    let expr = sample();
    let identifiers = expr.find_subexpressions(|e| matches!(e.node, Expr::IdentifierExp(_)));
    assert_eq!(identifiers.len(), 4);

    assert!(expr.any_subexpr(|e| matches!(e.node, Expr::Call(_))));
    assert!(!expr.any_subexpr(|e| matches!(e.node, Expr::This)));
    assert!(expr.all_subexprs(|e| !matches!(e.node, Expr::IntegerLiteral(_))));
    assert!(!expr.all_subexprs(|e| matches!(e.node, Expr::IdentifierExp(_))));
}

#[test]
fn test_queries_agree_with_walkers() {
    let expr = sample();
    assert!(AstQuery::contains_calls(&expr.node));
    assert_eq!(AstQuery::count_calls(&expr.node), 1);

    let ids = AstQuery::collect_identifiers(&expr.node);
    assert_eq!(ids.len(), 4);
    assert!(["a", "b", "f", "c"].iter().all(|name| ids.contains(*name)));
}
