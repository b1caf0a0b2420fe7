//! Indented structural dump of a tree, one node per line.
//!
//! Useful when debugging a parser: every node shows its variant name, leaf
//! payloads are printed inline, and with [`Config::show_locations`] each
//! line ends with the node's start location.

use crate::ast::*;
use crate::config::Config;
use crate::error::Span;
use crate::visitor::{Node, Visitor};

pub struct TreeDumper {
    output: String,
    depth: usize,
    config: Config,
}

impl TreeDumper {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            output: String::new(),
            depth: 0,
            config,
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn line(&mut self, label: &str, span: &Span) {
        let width = self.depth * self.config.indent_width;
        self.output.extend(std::iter::repeat(' ').take(width));
        self.output.push_str(label);
        if self.config.show_locations {
            self.output.push_str(&format!(" @{}", span.start));
        }
        self.output.push('\n');
    }

    /// Emit `label`, then dump `children` one level deeper.
    fn branch(&mut self, label: &str, span: &Span, children: impl FnOnce(&mut Self)) {
        self.line(label, span);
        self.depth += 1;
        children(self);
        self.depth -= 1;
    }

    fn dump_binary(&mut self, label: &str, expr: &BinaryExpr, span: &Span) {
        self.branch(label, span, |d| {
            expr.left.accept(d);
            expr.right.accept(d);
        });
    }

    fn dump_class(
        &mut self,
        label: &str,
        span: &Span,
        name: &Located<Identifier>,
        parent: Option<&Located<Identifier>>,
        fields: &[Located<VarDecl>],
        methods: &[Located<MethodDecl>],
    ) {
        self.branch(label, span, |d| {
            name.accept(d);
            if let Some(parent) = parent {
                parent.accept(d);
            }
            for field in fields {
                field.accept(d);
            }
            for method in methods {
                method.accept(d);
            }
        });
    }
}

impl Default for TreeDumper {
    fn default() -> Self {
        Self::new()
    }
}

/// Dump any node with the given configuration
pub fn dump_tree<N: Node>(node: &N, config: Config) -> String {
    let mut dumper = TreeDumper::with_config(config);
    node.accept(&mut dumper);
    dumper.finish()
}

impl Visitor for TreeDumper {
    type Output = ();

    fn visit_program(&mut self, program: &Program, span: &Span) {
        self.branch("Program", span, |d| {
            program.main_class.accept(d);
            for class in &program.classes {
                class.accept(d);
            }
        });
    }

    fn visit_main_class(&mut self, main_class: &MainClass, span: &Span) {
        self.branch("MainClass", span, |d| {
            main_class.name.accept(d);
            main_class.args.accept(d);
            main_class.body.accept(d);
        });
    }

    fn visit_simple_class_decl(&mut self, class: &SimpleClassDecl, span: &Span) {
        self.dump_class(
            "ClassDeclSimple",
            span,
            &class.name,
            None,
            &class.fields,
            &class.methods,
        );
    }

    fn visit_extends_class_decl(&mut self, class: &ExtendsClassDecl, span: &Span) {
        self.dump_class(
            "ClassDeclExtends",
            span,
            &class.name,
            Some(&class.parent),
            &class.fields,
            &class.methods,
        );
    }

    fn visit_var_decl(&mut self, decl: &VarDecl, span: &Span) {
        self.branch("VarDecl", span, |d| {
            decl.ty.accept(d);
            for id in decl.identifiers.iter() {
                id.accept(d);
            }
        });
    }

    fn visit_method_decl(&mut self, method: &MethodDecl, span: &Span) {
        self.branch("MethodDecl", span, |d| {
            method.return_type.accept(d);
            method.name.accept(d);
            for formal in &method.formals {
                formal.accept(d);
            }
            for stmt in &method.body {
                stmt.accept(d);
            }
            method.return_expr.accept(d);
        });
    }

    fn visit_formal(&mut self, formal: &Formal, span: &Span) {
        self.branch("Formal", span, |d| {
            formal.ty.accept(d);
            formal.name.accept(d);
        });
    }

    fn visit_int_array_type(&mut self, span: &Span) {
        self.line("IntArrayType", span);
    }

    fn visit_boolean_type(&mut self, span: &Span) {
        self.line("BooleanType", span);
    }

    fn visit_integer_type(&mut self, span: &Span) {
        self.line("IntegerType", span);
    }

    fn visit_identifier_type(&mut self, name: &str, span: &Span) {
        self.line(&format!("IdentifierType {}", name), span);
    }

    fn visit_block(&mut self, block: &BlockStmt, span: &Span) {
        self.branch("Block", span, |d| {
            for stmt in &block.statements {
                stmt.accept(d);
            }
        });
    }

    fn visit_if(&mut self, if_stmt: &IfStmt, span: &Span) {
        self.branch("If", span, |d| {
            if_stmt.condition.accept(d);
            if_stmt.then_branch.accept(d);
            if let Some(else_branch) = &if_stmt.else_branch {
                else_branch.accept(d);
            }
        });
    }

    fn visit_while(&mut self, while_stmt: &WhileStmt, span: &Span) {
        self.branch("While", span, |d| {
            while_stmt.condition.accept(d);
            while_stmt.body.accept(d);
        });
    }

    fn visit_print(&mut self, print: &PrintStmt, span: &Span) {
        self.branch("Print", span, |d| print.value.accept(d));
    }

    fn visit_assign(&mut self, assign: &AssignStmt, span: &Span) {
        self.branch("Assign", span, |d| {
            assign.target.accept(d);
            assign.value.accept(d);
        });
    }

    fn visit_array_assign(&mut self, assign: &ArrayAssignStmt, span: &Span) {
        self.branch("ArrayAssign", span, |d| {
            assign.target.accept(d);
            assign.index.accept(d);
            assign.value.accept(d);
        });
    }

    fn visit_and(&mut self, expr: &BinaryExpr, span: &Span) {
        self.dump_binary("And", expr, span);
    }

    fn visit_less_than(&mut self, expr: &BinaryExpr, span: &Span) {
        self.dump_binary("LessThan", expr, span);
    }

    fn visit_plus(&mut self, expr: &BinaryExpr, span: &Span) {
        self.dump_binary("Plus", expr, span);
    }

    fn visit_minus(&mut self, expr: &BinaryExpr, span: &Span) {
        self.dump_binary("Minus", expr, span);
    }

    fn visit_times(&mut self, expr: &BinaryExpr, span: &Span) {
        self.dump_binary("Times", expr, span);
    }

    fn visit_array_lookup(&mut self, expr: &ArrayLookupExpr, span: &Span) {
        self.branch("ArrayLookup", span, |d| {
            expr.array.accept(d);
            expr.index.accept(d);
        });
    }

    fn visit_array_length(&mut self, expr: &ArrayLengthExpr, span: &Span) {
        self.branch("ArrayLength", span, |d| expr.array.accept(d));
    }

    fn visit_call(&mut self, call: &CallExpr, span: &Span) {
        self.branch("Call", span, |d| {
            call.receiver.accept(d);
            call.method.accept(d);
            for arg in &call.args {
                arg.accept(d);
            }
        });
    }

    fn visit_integer_literal(&mut self, value: i64, span: &Span) {
        self.line(&format!("IntegerLiteral {}", value), span);
    }

    fn visit_true(&mut self, span: &Span) {
        self.line("True", span);
    }

    fn visit_false(&mut self, span: &Span) {
        self.line("False", span);
    }

    fn visit_identifier_exp(&mut self, name: &str, span: &Span) {
        self.line(&format!("IdentifierExp {}", name), span);
    }

    fn visit_this(&mut self, span: &Span) {
        self.line("This", span);
    }

    fn visit_new_array(&mut self, expr: &NewArrayExpr, span: &Span) {
        self.branch("NewArray", span, |d| expr.size.accept(d));
    }

    fn visit_new_object(&mut self, expr: &NewObjectExpr, span: &Span) {
        self.branch("NewObject", span, |d| expr.class_name.accept(d));
    }

    fn visit_not(&mut self, expr: &NotExpr, span: &Span) {
        self.branch("Not", span, |d| expr.operand.accept(d));
    }

    fn visit_identifier(&mut self, identifier: &Identifier, span: &Span) {
        self.line(&format!("Identifier {}", identifier.name), span);
    }
}
