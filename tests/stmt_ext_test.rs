mod common;

use common::*;
use minijava_ast::*;

fn run_body() -> Vec<LocatedStmt> {
    let program = counter_program();
    let class = program.node.classes[1].clone();
    class.node.methods()[0].node.body.clone()
}

#[test]
fn test_walk_reaches_nested_statements() {
    let body = block(run_body(), 14);
    let mut kinds = Vec::new();
    body.walk(&mut |stmt| {
        kinds.push(match &stmt.node {
            Stmt::Block(_) => "block",
            Stmt::If(_) => "if",
            Stmt::While(_) => "while",
            Stmt::Print(_) => "print",
            Stmt::Assign(_) => "assign",
            Stmt::ArrayAssign(_) => "array_assign",
            Stmt::VarDecl(_) => "var_decl",
        });
        Ok::<(), ()>(())
    })
    .unwrap();

    assert_eq!(
        kinds,
        vec![
            "block",
            "var_decl",
            "assign",
            "assign",
            "assign",
            "while",
            "block",
            "array_assign",
            "assign",
            "assign",
            "if",
            "block",
            "assign",
            "block",
            "assign",
        ]
    );
}

#[test]
fn test_walk_post_ends_with_root() {
    let body = block(run_body(), 14);
    let mut last = None;
    body.walk_post(&mut |stmt| {
        last = Some(stmt.span.clone());
        Ok::<(), ()>(())
    })
    .unwrap();
    assert_eq!(last, Some(at(14, 1)));
}

#[test]
fn test_find_declarations_in_nested_blocks() {
    let body = block(
        vec![
            decl_stmt(Type::Integer, &["a"], 2),
            block(vec![decl_stmt(Type::Boolean, &["b", "c"], 4)], 3),
            print(var("a", 5), 5),
        ],
        1,
    );

    let decls = body.find_statements(|stmt| matches!(stmt.node, Stmt::VarDecl(_)));
    let lines: Vec<usize> = decls.iter().map(|stmt| stmt.span.start_line()).collect();
    assert_eq!(lines, vec![2, 4]);
}

#[test]
fn test_walk_expressions_skips_declarations() {
    let body = block(run_body(), 14);
    let mut identifiers = Vec::new();
    body.walk_expressions(&mut |expr| {
        if let Expr::IdentifierExp(name) = &expr.node {
            identifiers.push(name.clone());
        }
        Ok::<(), ()>(())
    })
    .unwrap();

    assert_eq!(identifiers.first().map(String::as_str), Some("n"));
    assert!(identifiers.iter().any(|name| name == "total"));
    assert!(!identifiers.is_empty());
}
