//! Expression printing with minimal parentheses

use super::PrettyPrinter;
use crate::ast::*;
use crate::visitor::Node;

impl PrettyPrinter {
    /// Print `expr`, parenthesized when it binds looser than `min_precedence`.
    pub(super) fn print_operand(&mut self, expr: &LocatedExpr, min_precedence: u8) {
        if expr.node.precedence() < min_precedence {
            self.output.push('(');
            expr.accept(self);
            self.output.push(')');
        } else {
            expr.accept(self);
        }
    }

    /// Binary operators are left-associative, so a right operand of equal
    /// precedence keeps its parentheses.
    pub(super) fn print_binary(&mut self, expr: &BinaryExpr, op: BinaryOp) {
        self.print_operand(&expr.left, op.precedence());
        self.output.push(' ');
        self.output.push_str(op.symbol());
        self.output.push(' ');
        self.print_operand(&expr.right, op.precedence() + 1);
    }

    pub(super) fn print_call(&mut self, call: &CallExpr) {
        self.print_operand(&call.receiver, Expr::POSTFIX_PRECEDENCE);
        self.output.push('.');
        call.method.accept(self);
        self.output.push('(');
        self.comma_separated(call.args.iter());
        self.output.push(')');
    }
}
