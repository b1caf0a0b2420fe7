//! Multi-name variable declarations: construction, ordering, printing and
//! the non-empty guarantee across serialization.

mod common;

use common::*;
use minijava_ast::ast::query::AstQuery;
use minijava_ast::error::{ErrorKind, SourceLocation, Span};
use minijava_ast::*;
use serde_json::json;

#[test]
fn test_names_keep_source_order() {
    let decl = var_decl(Type::Integer, &["c", "a", "b"], 1);
    assert_eq!(decl.names().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    assert_eq!(decl.identifiers.len(), 3);
    assert_eq!(decl.identifiers.first().node.name, "c");
    assert_eq!(AstQuery::declared_names(&decl), vec!["c", "a", "b"]);
}

#[test]
fn test_single_name_declaration() {
    let decl = VarDecl::single(ty(Type::Boolean, 4), ident("done", 4));
    assert_eq!(decl.names().collect::<Vec<_>>(), vec!["done"]);
    assert_eq!(pretty_print(&Located::new(decl, at(4, 1))), "boolean done;\n");
}

#[test]
fn test_empty_declaration_is_rejected() {
    init_tracing();
    let span = Span::single(SourceLocation::new(3, 7));
    let err = VarDecl::new(Located::new(Type::IntArray, span.clone()), vec![]).unwrap_err();

    assert_eq!(err.kind, ErrorKind::EmptyDeclaration);
    assert_eq!(err.span(), Some(&span));
    assert!(err.message.contains("int[]"));
    assert!(err.to_string().starts_with("3:7: empty declaration:"));
}

#[test]
fn test_statement_constructor_rejects_empty_list() {
    let result = Stmt::var_decl(ty(Type::Integer, 1), vec![], at(1, 1));
    assert!(result.is_err());

    let stmt = Stmt::var_decl(ty(Type::Integer, 1), vec![ident("x", 1)], at(1, 1)).unwrap();
    assert!(matches!(stmt.node, Stmt::VarDecl(_)));
}

#[test]
fn test_printer_round_trip_three_names() {
    let stmt = decl_stmt(Type::Integer, &["a", "b", "c"], 1);
    assert_eq!(pretty_print(&stmt), "int a, b, c;\n");

    let field = field(Type::Identifier("Fac".to_string()), &["left", "right"], 2);
    assert_eq!(pretty_print(&field), "Fac left, right;\n");
}

#[test]
fn test_declaration_round_trips_through_json() {
    let decl = field(Type::Boolean, &["ready", "done"], 11);
    let json = serde_json::to_string(&decl).unwrap();
    let back: Located<VarDecl> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, decl);
    assert_eq!(back.node.names().collect::<Vec<_>>(), vec!["ready", "done"]);
}

#[test]
fn test_deserializing_empty_identifier_list_fails() {
    let decl = field(Type::Integer, &["a", "b"], 1);
    let mut value = serde_json::to_value(&decl).unwrap();
    assert!(value["node"]["identifiers"].is_array());

    value["node"]["identifiers"] = json!([]);
    let result = serde_json::from_value::<Located<VarDecl>>(value);
    assert!(result.is_err());
}

#[test]
fn test_var_decls_query_covers_fields_and_locals() {
    let program = counter_program();
    let names: Vec<Vec<&str>> = AstQuery::var_decls(&program.node)
        .into_iter()
        .map(|decl| decl.names().collect())
        .collect();
    assert_eq!(
        names,
        vec![vec!["data"], vec!["ready", "done"], vec!["i", "total"]]
    );
}
