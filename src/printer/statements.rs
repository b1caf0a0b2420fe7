//! Statement layout for compound statements

use super::PrettyPrinter;
use crate::ast::*;
use crate::visitor::Node;

impl PrettyPrinter {
    pub(super) fn print_block(&mut self, block: &BlockStmt) {
        self.indent();
        self.output.push_str("{\n");
        self.indent_level += 1;
        for stmt in &block.statements {
            stmt.accept(self);
        }
        self.indent_level -= 1;
        self.indent();
        self.output.push_str("}\n");
    }

    pub(super) fn print_if(&mut self, if_stmt: &IfStmt) {
        self.indent();
        self.output.push_str("if (");
        if_stmt.condition.accept(self);
        self.output.push(')');
        // An unbraced then-branch ending in an else-less `if` would capture our `else`
        let braced = if if_stmt.else_branch.is_some() && ends_in_open_if(&if_stmt.then_branch) {
            self.print_braced(&if_stmt.then_branch);
            true
        } else {
            self.print_body(&if_stmt.then_branch)
        };

        match &if_stmt.else_branch {
            Some(else_branch) => {
                if braced {
                    self.output.push_str(" else");
                } else {
                    self.indent();
                    self.output.push_str("else");
                }
                if self.print_body(else_branch) {
                    self.output.push('\n');
                }
            }
            None => {
                if braced {
                    self.output.push('\n');
                }
            }
        }
    }

    pub(super) fn print_while(&mut self, while_stmt: &WhileStmt) {
        self.indent();
        self.output.push_str("while (");
        while_stmt.condition.accept(self);
        self.output.push(')');
        if self.print_body(&while_stmt.body) {
            self.output.push('\n');
        }
    }

    /// Print a non-block body wrapped in braces, leaving the cursor after `}`.
    fn print_braced(&mut self, body: &LocatedStmt) {
        self.output.push_str(" {\n");
        self.indent_level += 1;
        body.accept(self);
        self.indent_level -= 1;
        self.indent();
        self.output.push('}');
    }

    /// Print the body of `if`/`while`.
    ///
    /// Blocks open on the header line and leave the cursor after `}`;
    /// returns true in that case. Other statements go on their own
    /// indented line, ending with a newline.
    fn print_body(&mut self, body: &LocatedStmt) -> bool {
        match &body.node {
            Stmt::Block(block) => {
                self.output.push_str(" {\n");
                self.indent_level += 1;
                for stmt in &block.statements {
                    stmt.accept(self);
                }
                self.indent_level -= 1;
                self.indent();
                self.output.push('}');
                true
            }
            _ => {
                self.output.push('\n');
                self.indent_level += 1;
                body.accept(self);
                self.indent_level -= 1;
                false
            }
        }
    }
}

/// Whether `stmt`, printed without braces, ends in an `if` that has no `else`.
fn ends_in_open_if(stmt: &LocatedStmt) -> bool {
    match &stmt.node {
        Stmt::If(if_stmt) => match &if_stmt.else_branch {
            Some(else_branch) => ends_in_open_if(else_branch),
            None => true,
        },
        Stmt::While(while_stmt) => ends_in_open_if(&while_stmt.body),
        Stmt::Block(_)
        | Stmt::Print(_)
        | Stmt::Assign(_)
        | Stmt::ArrayAssign(_)
        | Stmt::VarDecl(_) => false,
    }
}
