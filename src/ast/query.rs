// Use types re-exported in the parent module (ast/mod.rs)
use super::traversal::{expr_children, stmt_children};
use super::{ClassDecl, Expr, Located, LocatedExpr, LocatedStmt, MethodDecl, Program, Stmt, VarDecl};
use std::collections::HashSet;

/// Query API for common AST traversal patterns
pub struct AstQuery;

impl AstQuery {
    /// Check if an expression contains any method calls
    pub fn contains_calls(expr: &Expr) -> bool {
        match expr {
            Expr::Call(_) => true,
            _ => expr_children(expr)
                .into_iter()
                .any(|child| Self::contains_calls(&child.node)),
        }
    }

    /// Get all variable names referenced in an expression
    pub fn collect_identifiers(expr: &Expr) -> HashSet<String> {
        let mut ids = HashSet::new();
        Self::collect_identifiers_impl(expr, &mut ids);
        ids
    }

    fn collect_identifiers_impl(expr: &Expr, acc: &mut HashSet<String>) {
        if let Expr::IdentifierExp(name) = expr {
            acc.insert(name.clone());
        }
        for child in expr_children(expr) {
            Self::collect_identifiers_impl(&child.node, acc);
        }
    }

    /// Count the number of method calls in an expression
    pub fn count_calls(expr: &Expr) -> usize {
        let own = usize::from(matches!(expr, Expr::Call(_)));
        own + expr_children(expr)
            .into_iter()
            .map(|child| Self::count_calls(&child.node))
            .sum::<usize>()
    }

    /// Names introduced by a declaration, in declaration order
    pub fn declared_names(decl: &VarDecl) -> Vec<String> {
        decl.names().map(str::to_string).collect()
    }

    /// Every variable declaration in the program: fields first, per class,
    /// then method locals in source order.
    pub fn var_decls(program: &Program) -> Vec<&VarDecl> {
        let mut decls = Vec::new();
        Self::collect_stmt_decls(&program.main_class.node.body, &mut decls);
        for class in &program.classes {
            decls.extend(class.node.fields().iter().map(|field| &field.node));
            for method in class.node.methods() {
                for stmt in &method.node.body {
                    Self::collect_stmt_decls(stmt, &mut decls);
                }
            }
        }
        decls
    }

    fn collect_stmt_decls<'a>(stmt: &'a LocatedStmt, acc: &mut Vec<&'a VarDecl>) {
        if let Stmt::VarDecl(decl) = &stmt.node {
            acc.push(decl);
        }
        for child in stmt_children(&stmt.node) {
            Self::collect_stmt_decls(child, acc);
        }
    }

    /// Find a class by name
    pub fn find_class<'a>(program: &'a Program, name: &str) -> Option<&'a Located<ClassDecl>> {
        program
            .classes
            .iter()
            .find(|class| class.node.name().node.name == name)
    }

    /// Find a method by name within a class
    pub fn find_method<'a>(class: &'a ClassDecl, name: &str) -> Option<&'a Located<MethodDecl>> {
        class
            .methods()
            .iter()
            .find(|method| method.node.name.node.name == name)
    }

    /// Structural equality that ignores spans
    pub fn same_shape(a: &LocatedExpr, b: &LocatedExpr) -> bool {
        let children_a = expr_children(&a.node);
        let children_b = expr_children(&b.node);
        Self::same_payload(&a.node, &b.node)
            && children_a.len() == children_b.len()
            && children_a
                .iter()
                .zip(children_b.iter())
                .all(|(x, y)| Self::same_shape(x, y))
    }

    /// Compare the variant and leaf payload, not the children
    fn same_payload(a: &Expr, b: &Expr) -> bool {
        match (a, b) {
            (Expr::IntegerLiteral(x), Expr::IntegerLiteral(y)) => x == y,
            (Expr::IdentifierExp(x), Expr::IdentifierExp(y)) => x == y,
            (Expr::NewObject(x), Expr::NewObject(y)) => x.class_name.node == y.class_name.node,
            (Expr::Call(x), Expr::Call(y)) => x.method.node == y.method.node,
            _ => std::mem::discriminant(a) == std::mem::discriminant(b),
        }
    }
}
