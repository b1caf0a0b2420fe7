//! MiniJava source printer.
//!
//! Renders a tree back to source text through the [`Visitor`] protocol.
//! Every handler recurses into its own children, in source order.

mod declarations;
mod expressions;
mod statements;

use crate::ast::*;
use crate::config::Config;
use crate::error::Span;
use crate::visitor::{Node, Visitor};

pub struct PrettyPrinter {
    output: String,
    indent_level: usize,
    config: Config,
}

impl PrettyPrinter {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
        }
    }

    /// Text printed so far
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn indent(&mut self) {
        let width = self.indent_level * self.config.indent_width;
        self.output.extend(std::iter::repeat(' ').take(width));
    }

    /// Print nodes separated by `", "`
    fn comma_separated<'a, N, I>(&mut self, nodes: I)
    where
        N: Node + 'a,
        I: IntoIterator<Item = &'a N>,
    {
        for (i, node) in nodes.into_iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            node.accept(self);
        }
    }
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Print any node with the default configuration
pub fn pretty_print<N: Node>(node: &N) -> String {
    let mut printer = PrettyPrinter::new();
    node.accept(&mut printer);
    printer.finish()
}

impl Visitor for PrettyPrinter {
    type Output = ();

    fn visit_program(&mut self, program: &Program, _span: &Span) {
        tracing::debug!(classes = program.classes.len(), "pretty-printing program");
        program.main_class.accept(self);
        for class in &program.classes {
            self.output.push('\n');
            class.accept(self);
        }
    }

    fn visit_main_class(&mut self, main_class: &MainClass, _span: &Span) {
        self.print_main_class(main_class);
    }

    fn visit_simple_class_decl(&mut self, class: &SimpleClassDecl, _span: &Span) {
        self.print_class(&class.name, None, &class.fields, &class.methods);
    }

    fn visit_extends_class_decl(&mut self, class: &ExtendsClassDecl, _span: &Span) {
        self.print_class(&class.name, Some(&class.parent), &class.fields, &class.methods);
    }

    fn visit_var_decl(&mut self, decl: &VarDecl, _span: &Span) {
        self.indent();
        decl.ty.accept(self);
        self.output.push(' ');
        self.comma_separated(decl.identifiers.iter());
        self.output.push_str(";\n");
    }

    fn visit_method_decl(&mut self, method: &MethodDecl, _span: &Span) {
        self.print_method(method);
    }

    fn visit_formal(&mut self, formal: &Formal, _span: &Span) {
        formal.ty.accept(self);
        self.output.push(' ');
        formal.name.accept(self);
    }

    fn visit_int_array_type(&mut self, _span: &Span) {
        self.output.push_str("int[]");
    }

    fn visit_boolean_type(&mut self, _span: &Span) {
        self.output.push_str("boolean");
    }

    fn visit_integer_type(&mut self, _span: &Span) {
        self.output.push_str("int");
    }

    fn visit_identifier_type(&mut self, name: &str, _span: &Span) {
        self.output.push_str(name);
    }

    fn visit_block(&mut self, block: &BlockStmt, _span: &Span) {
        self.print_block(block);
    }

    fn visit_if(&mut self, if_stmt: &IfStmt, _span: &Span) {
        self.print_if(if_stmt);
    }

    fn visit_while(&mut self, while_stmt: &WhileStmt, _span: &Span) {
        self.print_while(while_stmt);
    }

    fn visit_print(&mut self, print: &PrintStmt, _span: &Span) {
        self.indent();
        self.output.push_str("System.out.println(");
        print.value.accept(self);
        self.output.push_str(");\n");
    }

    fn visit_assign(&mut self, assign: &AssignStmt, _span: &Span) {
        self.indent();
        assign.target.accept(self);
        self.output.push_str(" = ");
        assign.value.accept(self);
        self.output.push_str(";\n");
    }

    fn visit_array_assign(&mut self, assign: &ArrayAssignStmt, _span: &Span) {
        self.indent();
        assign.target.accept(self);
        self.output.push('[');
        assign.index.accept(self);
        self.output.push_str("] = ");
        assign.value.accept(self);
        self.output.push_str(";\n");
    }

    fn visit_and(&mut self, expr: &BinaryExpr, _span: &Span) {
        self.print_binary(expr, BinaryOp::And);
    }

    fn visit_less_than(&mut self, expr: &BinaryExpr, _span: &Span) {
        self.print_binary(expr, BinaryOp::LessThan);
    }

    fn visit_plus(&mut self, expr: &BinaryExpr, _span: &Span) {
        self.print_binary(expr, BinaryOp::Plus);
    }

    fn visit_minus(&mut self, expr: &BinaryExpr, _span: &Span) {
        self.print_binary(expr, BinaryOp::Minus);
    }

    fn visit_times(&mut self, expr: &BinaryExpr, _span: &Span) {
        self.print_binary(expr, BinaryOp::Times);
    }

    fn visit_array_lookup(&mut self, expr: &ArrayLookupExpr, _span: &Span) {
        self.print_operand(&expr.array, Expr::POSTFIX_PRECEDENCE);
        self.output.push('[');
        expr.index.accept(self);
        self.output.push(']');
    }

    fn visit_array_length(&mut self, expr: &ArrayLengthExpr, _span: &Span) {
        self.print_operand(&expr.array, Expr::POSTFIX_PRECEDENCE);
        self.output.push_str(".length");
    }

    fn visit_call(&mut self, call: &CallExpr, _span: &Span) {
        self.print_call(call);
    }

    fn visit_integer_literal(&mut self, value: i64, _span: &Span) {
        self.output.push_str(&value.to_string());
    }

    fn visit_true(&mut self, _span: &Span) {
        self.output.push_str("true");
    }

    fn visit_false(&mut self, _span: &Span) {
        self.output.push_str("false");
    }

    fn visit_identifier_exp(&mut self, name: &str, _span: &Span) {
        self.output.push_str(name);
    }

    fn visit_this(&mut self, _span: &Span) {
        self.output.push_str("this");
    }

    fn visit_new_array(&mut self, expr: &NewArrayExpr, _span: &Span) {
        self.output.push_str("new int[");
        expr.size.accept(self);
        self.output.push(']');
    }

    fn visit_new_object(&mut self, expr: &NewObjectExpr, _span: &Span) {
        self.output.push_str("new ");
        expr.class_name.accept(self);
        self.output.push_str("()");
    }

    fn visit_not(&mut self, expr: &NotExpr, _span: &Span) {
        self.output.push('!');
        self.print_operand(&expr.operand, Expr::UNARY_PRECEDENCE);
    }

    fn visit_identifier(&mut self, identifier: &Identifier, _span: &Span) {
        self.output.push_str(&identifier.name);
    }
}
