//! Counts variable declaration statements.
//!
//! Declarations only appear as class fields or as statements, so the
//! handlers descend through classes, methods and compound statements and
//! stop there. Expressions, types and identifiers are never entered.

use crate::ast::*;
use crate::error::Span;
use crate::visitor::{Node, Visitor};

#[derive(Debug, Default)]
pub struct DeclarationCounter {
    declarations: usize,
    names: usize,
}

impl DeclarationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count declarations under `node`
    pub fn count<N: Node>(node: &N) -> usize {
        let mut counter = Self::new();
        node.accept(&mut counter);
        counter.declarations
    }

    /// Number of `VarDecl` nodes seen
    pub fn declarations(&self) -> usize {
        self.declarations
    }

    /// Number of names those declarations introduce
    pub fn names(&self) -> usize {
        self.names
    }
}

impl Visitor for DeclarationCounter {
    type Output = ();

    fn visit_program(&mut self, program: &Program, _span: &Span) {
        program.main_class.accept(self);
        for class in &program.classes {
            class.accept(self);
        }
    }

    fn visit_main_class(&mut self, main_class: &MainClass, _span: &Span) {
        main_class.body.accept(self);
    }

    fn visit_simple_class_decl(&mut self, class: &SimpleClassDecl, _span: &Span) {
        class.fields.iter().for_each(|field| field.accept(self));
        class.methods.iter().for_each(|method| method.accept(self));
    }

    fn visit_extends_class_decl(&mut self, class: &ExtendsClassDecl, _span: &Span) {
        class.fields.iter().for_each(|field| field.accept(self));
        class.methods.iter().for_each(|method| method.accept(self));
    }

    fn visit_var_decl(&mut self, decl: &VarDecl, _span: &Span) {
        self.declarations += 1;
        self.names += decl.identifiers.len();
    }

    fn visit_method_decl(&mut self, method: &MethodDecl, _span: &Span) {
        method.body.iter().for_each(|stmt| stmt.accept(self));
    }

    fn visit_formal(&mut self, _formal: &Formal, _span: &Span) {}

    fn visit_int_array_type(&mut self, _span: &Span) {}

    fn visit_boolean_type(&mut self, _span: &Span) {}

    fn visit_integer_type(&mut self, _span: &Span) {}

    fn visit_identifier_type(&mut self, _name: &str, _span: &Span) {}

    fn visit_block(&mut self, block: &BlockStmt, _span: &Span) {
        block.statements.iter().for_each(|stmt| stmt.accept(self));
    }

    fn visit_if(&mut self, if_stmt: &IfStmt, _span: &Span) {
        if_stmt.then_branch.accept(self);
        if let Some(else_branch) = &if_stmt.else_branch {
            else_branch.accept(self);
        }
    }

    fn visit_while(&mut self, while_stmt: &WhileStmt, _span: &Span) {
        while_stmt.body.accept(self);
    }

    fn visit_print(&mut self, _print: &PrintStmt, _span: &Span) {}

    fn visit_assign(&mut self, _assign: &AssignStmt, _span: &Span) {}

    fn visit_array_assign(&mut self, _assign: &ArrayAssignStmt, _span: &Span) {}

    fn visit_and(&mut self, _expr: &BinaryExpr, _span: &Span) {}

    fn visit_less_than(&mut self, _expr: &BinaryExpr, _span: &Span) {}

    fn visit_plus(&mut self, _expr: &BinaryExpr, _span: &Span) {}

    fn visit_minus(&mut self, _expr: &BinaryExpr, _span: &Span) {}

    fn visit_times(&mut self, _expr: &BinaryExpr, _span: &Span) {}

    fn visit_array_lookup(&mut self, _expr: &ArrayLookupExpr, _span: &Span) {}

    fn visit_array_length(&mut self, _expr: &ArrayLengthExpr, _span: &Span) {}

    fn visit_call(&mut self, _call: &CallExpr, _span: &Span) {}

    fn visit_integer_literal(&mut self, _value: i64, _span: &Span) {}

    fn visit_true(&mut self, _span: &Span) {}

    fn visit_false(&mut self, _span: &Span) {}

    fn visit_identifier_exp(&mut self, _name: &str, _span: &Span) {}

    fn visit_this(&mut self, _span: &Span) {}

    fn visit_new_array(&mut self, _expr: &NewArrayExpr, _span: &Span) {}

    fn visit_new_object(&mut self, _expr: &NewObjectExpr, _span: &Span) {}

    fn visit_not(&mut self, _expr: &NotExpr, _span: &Span) {}

    fn visit_identifier(&mut self, _identifier: &Identifier, _span: &Span) {}
}
