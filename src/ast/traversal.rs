//! Closure-based traversal traits for walking statement and expression trees.
//!
//! These complement the [`Visitor`](crate::visitor::Visitor) protocol for
//! shallow analyses that only care about one node category and would
//! otherwise have to spell out every handler.

use super::*;

pub trait ExprExt {
    /// Walk the expression tree in pre-order
    ///
    /// Calls visitor on current node before its children. Return Err to stop early.
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>;

    /// Walk the expression tree in post-order
    ///
    /// Calls visitor on children before current node. Useful for bottom-up analysis.
    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>;

    /// Find all sub-expressions matching a predicate
    fn find_subexpressions<F>(&self, predicate: F) -> Vec<&LocatedExpr>
    where
        F: Fn(&LocatedExpr) -> bool;

    /// Check if any sub-expression matches a predicate
    ///
    /// Short-circuits on first match.
    fn any_subexpr<F>(&self, predicate: F) -> bool
    where
        F: Fn(&LocatedExpr) -> bool;

    /// Check if all sub-expressions match a predicate
    ///
    /// Short-circuits on first non-match.
    fn all_subexprs<F>(&self, predicate: F) -> bool
    where
        F: Fn(&LocatedExpr) -> bool;
}

/// Direct children of an expression, left to right
pub(crate) fn expr_children(expr: &Expr) -> Vec<&LocatedExpr> {
    match expr {
        Expr::And(b) | Expr::LessThan(b) | Expr::Plus(b) | Expr::Minus(b) | Expr::Times(b) => {
            vec![&*b.left, &*b.right]
        }
        Expr::ArrayLookup(lookup) => vec![&*lookup.array, &*lookup.index],
        Expr::ArrayLength(length) => vec![&*length.array],
        Expr::Call(call) => {
            let mut children = vec![&*call.receiver];
            children.extend(call.args.iter());
            children
        }
        Expr::NewArray(new_array) => vec![&*new_array.size],
        Expr::Not(not) => vec![&*not.operand],
        Expr::IntegerLiteral(_)
        | Expr::True
        | Expr::False
        | Expr::IdentifierExp(_)
        | Expr::This
        | Expr::NewObject(_) => vec![],
    }
}

impl ExprExt for LocatedExpr {
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>,
    {
        visitor(self)?;
        for child in expr_children(&self.node) {
            child.walk(visitor)?;
        }
        Ok(())
    }

    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>,
    {
        for child in expr_children(&self.node) {
            child.walk_post(visitor)?;
        }
        visitor(self)
    }

    fn find_subexpressions<F>(&self, predicate: F) -> Vec<&LocatedExpr>
    where
        F: Fn(&LocatedExpr) -> bool,
    {
        fn collect<'a, F>(expr: &'a LocatedExpr, predicate: &F, results: &mut Vec<&'a LocatedExpr>)
        where
            F: Fn(&LocatedExpr) -> bool,
        {
            if predicate(expr) {
                results.push(expr);
            }
            for child in expr_children(&expr.node) {
                collect(child, predicate, results);
            }
        }

        let mut results = Vec::new();
        collect(self, &predicate, &mut results);
        results
    }

    fn any_subexpr<F>(&self, predicate: F) -> bool
    where
        F: Fn(&LocatedExpr) -> bool,
    {
        let mut found = false;
        let _ = self.walk(&mut |expr| {
            if predicate(expr) {
                found = true;
                Err(()) // Early exit
            } else {
                Ok(())
            }
        });
        found
    }

    fn all_subexprs<F>(&self, predicate: F) -> bool
    where
        F: Fn(&LocatedExpr) -> bool,
    {
        let mut all_match = true;
        let _ = self.walk(&mut |expr| {
            if !predicate(expr) {
                all_match = false;
                Err(()) // Early exit
            } else {
                Ok(())
            }
        });
        all_match
    }
}

/// Extension trait for statement traversal
///
/// Provides traversal methods for analyzing declarations and nested structures.
pub trait StmtExt {
    /// Walk the statement tree in pre-order
    ///
    /// Calls visitor on each statement before its children. Return Err to stop early.
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedStmt) -> Result<(), E>;

    /// Walk the statement tree in post-order
    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedStmt) -> Result<(), E>;

    /// Find all sub-statements matching a predicate
    fn find_statements<F>(&self, predicate: F) -> Vec<&LocatedStmt>
    where
        F: Fn(&LocatedStmt) -> bool;

    /// Walk all expressions within this statement
    ///
    /// Visits all expressions in the statement tree for expression-level analysis.
    fn walk_expressions<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>;
}

/// Direct child statements, in source order
pub(crate) fn stmt_children(stmt: &Stmt) -> Vec<&LocatedStmt> {
    match stmt {
        Stmt::Block(block) => block.statements.iter().collect(),
        Stmt::If(if_stmt) => {
            let mut children = vec![&*if_stmt.then_branch];
            if let Some(else_branch) = &if_stmt.else_branch {
                children.push(else_branch);
            }
            children
        }
        Stmt::While(while_stmt) => vec![&*while_stmt.body],
        // Leaf statements
        Stmt::Print(_) | Stmt::Assign(_) | Stmt::ArrayAssign(_) | Stmt::VarDecl(_) => vec![],
    }
}

impl StmtExt for LocatedStmt {
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedStmt) -> Result<(), E>,
    {
        visitor(self)?;
        for child in stmt_children(&self.node) {
            child.walk(visitor)?;
        }
        Ok(())
    }

    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedStmt) -> Result<(), E>,
    {
        for child in stmt_children(&self.node) {
            child.walk_post(visitor)?;
        }
        visitor(self)
    }

    fn find_statements<F>(&self, predicate: F) -> Vec<&LocatedStmt>
    where
        F: Fn(&LocatedStmt) -> bool,
    {
        fn collect<'a, F>(stmt: &'a LocatedStmt, predicate: &F, results: &mut Vec<&'a LocatedStmt>)
        where
            F: Fn(&LocatedStmt) -> bool,
        {
            if predicate(stmt) {
                results.push(stmt);
            }
            for child in stmt_children(&stmt.node) {
                collect(child, predicate, results);
            }
        }

        let mut results = Vec::new();
        collect(self, &predicate, &mut results);
        results
    }

    fn walk_expressions<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>,
    {
        match &self.node {
            Stmt::Block(block) => {
                for stmt in &block.statements {
                    stmt.walk_expressions(visitor)?;
                }
            }
            Stmt::If(if_stmt) => {
                if_stmt.condition.walk(visitor)?;
                if_stmt.then_branch.walk_expressions(visitor)?;
                if let Some(else_branch) = &if_stmt.else_branch {
                    else_branch.walk_expressions(visitor)?;
                }
            }
            Stmt::While(while_stmt) => {
                while_stmt.condition.walk(visitor)?;
                while_stmt.body.walk_expressions(visitor)?;
            }
            Stmt::Print(print) => print.value.walk(visitor)?,
            Stmt::Assign(assign) => assign.value.walk(visitor)?,
            Stmt::ArrayAssign(assign) => {
                assign.index.walk(visitor)?;
                assign.value.walk(visitor)?;
            }
            Stmt::VarDecl(_) => {}
        }
        Ok(())
    }
}
