//! Class and method layout

use super::PrettyPrinter;
use crate::ast::*;
use crate::visitor::Node;

impl PrettyPrinter {
    pub(super) fn print_main_class(&mut self, main_class: &MainClass) {
        self.indent();
        self.output.push_str("class ");
        main_class.name.accept(self);
        self.output.push_str(" {\n");
        self.indent_level += 1;

        self.indent();
        self.output.push_str("public static void main(String[] ");
        main_class.args.accept(self);
        self.output.push_str(") {\n");
        self.indent_level += 1;
        main_class.body.accept(self);
        self.indent_level -= 1;
        self.indent();
        self.output.push_str("}\n");

        self.indent_level -= 1;
        self.indent();
        self.output.push_str("}\n");
    }

    pub(super) fn print_class(
        &mut self,
        name: &Located<Identifier>,
        parent: Option<&Located<Identifier>>,
        fields: &[Located<VarDecl>],
        methods: &[Located<MethodDecl>],
    ) {
        self.indent();
        self.output.push_str("class ");
        name.accept(self);
        if let Some(parent) = parent {
            self.output.push_str(" extends ");
            parent.accept(self);
        }
        self.output.push_str(" {\n");
        self.indent_level += 1;

        for field in fields {
            field.accept(self);
        }

        // Blank line between the field block and each method
        for (i, method) in methods.iter().enumerate() {
            if i > 0 || !fields.is_empty() {
                self.output.push('\n');
            }
            method.accept(self);
        }

        self.indent_level -= 1;
        self.indent();
        self.output.push_str("}\n");
    }

    pub(super) fn print_method(&mut self, method: &MethodDecl) {
        self.indent();
        self.output.push_str("public ");
        method.return_type.accept(self);
        self.output.push(' ');
        method.name.accept(self);
        self.output.push('(');
        self.comma_separated(method.formals.iter());
        self.output.push_str(") {\n");
        self.indent_level += 1;

        for stmt in &method.body {
            stmt.accept(self);
        }

        self.indent();
        self.output.push_str("return ");
        method.return_expr.accept(self);
        self.output.push_str(";\n");

        self.indent_level -= 1;
        self.indent();
        self.output.push_str("}\n");
    }
}
