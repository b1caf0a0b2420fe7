//! Double-dispatch visitor protocol over the AST
//!
//! A pass implements [`Visitor`], which has one required handler per
//! concrete node variant. Located nodes implement [`Node`], whose
//! [`accept`](Node::accept) resolves the variant with an exhaustive `match`
//! and invokes exactly that handler once.
//!
//! There are no default handlers: a visitor that leaves out a variant does
//! not compile, and a new variant without a handler breaks the `match` in
//! `accept`. Handlers own recursion. `accept` never visits children, so a
//! pass decides its own traversal order, pruning and early exit.
//!
//! A pass reports failures through its `Output` type, typically
//! `Result<_, E>`. Dispatch passes the value through untouched.
//!
//! ```
//! use minijava_ast::ast::*;
//! use minijava_ast::error::{SourceLocation, Span};
//! use minijava_ast::visitor::Node;
//! use minijava_ast::printer::PrettyPrinter;
//!
//! let span = Span::single(SourceLocation::new(1, 1));
//! let decl = VarDecl::new(
//!     Located::new(Type::Integer, span.clone()),
//!     vec![
//!         Identifier::located("a", span.clone()),
//!         Identifier::located("b", span.clone()),
//!     ],
//! )
//! .unwrap();
//!
//! let mut printer = PrettyPrinter::new();
//! Located::new(decl, span).accept(&mut printer);
//! assert_eq!(printer.finish(), "int a, b;\n");
//! ```

use crate::ast::*;
use crate::error::Span;

/// One handler per concrete node variant.
///
/// Every handler receives the variant's payload together with the span of
/// the located node that holds it.
pub trait Visitor {
    type Output;

    // Declarations
    fn visit_program(&mut self, program: &Program, span: &Span) -> Self::Output;
    fn visit_main_class(&mut self, main_class: &MainClass, span: &Span) -> Self::Output;
    fn visit_simple_class_decl(&mut self, class: &SimpleClassDecl, span: &Span) -> Self::Output;
    fn visit_extends_class_decl(&mut self, class: &ExtendsClassDecl, span: &Span)
        -> Self::Output;
    fn visit_var_decl(&mut self, decl: &VarDecl, span: &Span) -> Self::Output;
    fn visit_method_decl(&mut self, method: &MethodDecl, span: &Span) -> Self::Output;
    fn visit_formal(&mut self, formal: &Formal, span: &Span) -> Self::Output;

    // Types
    fn visit_int_array_type(&mut self, span: &Span) -> Self::Output;
    fn visit_boolean_type(&mut self, span: &Span) -> Self::Output;
    fn visit_integer_type(&mut self, span: &Span) -> Self::Output;
    fn visit_identifier_type(&mut self, name: &str, span: &Span) -> Self::Output;

    // Statements
    fn visit_block(&mut self, block: &BlockStmt, span: &Span) -> Self::Output;
    fn visit_if(&mut self, if_stmt: &IfStmt, span: &Span) -> Self::Output;
    fn visit_while(&mut self, while_stmt: &WhileStmt, span: &Span) -> Self::Output;
    fn visit_print(&mut self, print: &PrintStmt, span: &Span) -> Self::Output;
    fn visit_assign(&mut self, assign: &AssignStmt, span: &Span) -> Self::Output;
    fn visit_array_assign(&mut self, assign: &ArrayAssignStmt, span: &Span) -> Self::Output;

    // Expressions
    fn visit_and(&mut self, expr: &BinaryExpr, span: &Span) -> Self::Output;
    fn visit_less_than(&mut self, expr: &BinaryExpr, span: &Span) -> Self::Output;
    fn visit_plus(&mut self, expr: &BinaryExpr, span: &Span) -> Self::Output;
    fn visit_minus(&mut self, expr: &BinaryExpr, span: &Span) -> Self::Output;
    fn visit_times(&mut self, expr: &BinaryExpr, span: &Span) -> Self::Output;
    fn visit_array_lookup(&mut self, expr: &ArrayLookupExpr, span: &Span) -> Self::Output;
    fn visit_array_length(&mut self, expr: &ArrayLengthExpr, span: &Span) -> Self::Output;
    fn visit_call(&mut self, call: &CallExpr, span: &Span) -> Self::Output;
    fn visit_integer_literal(&mut self, value: i64, span: &Span) -> Self::Output;
    fn visit_true(&mut self, span: &Span) -> Self::Output;
    fn visit_false(&mut self, span: &Span) -> Self::Output;
    fn visit_identifier_exp(&mut self, name: &str, span: &Span) -> Self::Output;
    fn visit_this(&mut self, span: &Span) -> Self::Output;
    fn visit_new_array(&mut self, expr: &NewArrayExpr, span: &Span) -> Self::Output;
    fn visit_new_object(&mut self, expr: &NewObjectExpr, span: &Span) -> Self::Output;
    fn visit_not(&mut self, expr: &NotExpr, span: &Span) -> Self::Output;

    fn visit_identifier(&mut self, identifier: &Identifier, span: &Span) -> Self::Output;
}

/// Common contract of every located AST node
pub trait Node {
    fn span(&self) -> &Span;

    /// Invoke the handler of `visitor` that matches this node's variant.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output;
}

impl Node for Located<Program> {
    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_program(&self.node, &self.span)
    }
}

impl Node for Located<MainClass> {
    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_main_class(&self.node, &self.span)
    }
}

impl Node for Located<ClassDecl> {
    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match &self.node {
            ClassDecl::Simple(class) => visitor.visit_simple_class_decl(class, &self.span),
            ClassDecl::Extends(class) => visitor.visit_extends_class_decl(class, &self.span),
        }
    }
}

impl Node for Located<VarDecl> {
    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_var_decl(&self.node, &self.span)
    }
}

impl Node for Located<MethodDecl> {
    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_method_decl(&self.node, &self.span)
    }
}

impl Node for Located<Formal> {
    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_formal(&self.node, &self.span)
    }
}

impl Node for LocatedType {
    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match &self.node {
            Type::IntArray => visitor.visit_int_array_type(&self.span),
            Type::Boolean => visitor.visit_boolean_type(&self.span),
            Type::Integer => visitor.visit_integer_type(&self.span),
            Type::Identifier(name) => visitor.visit_identifier_type(name, &self.span),
        }
    }
}

impl Node for LocatedStmt {
    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match &self.node {
            Stmt::Block(block) => visitor.visit_block(block, &self.span),
            Stmt::If(if_stmt) => visitor.visit_if(if_stmt, &self.span),
            Stmt::While(while_stmt) => visitor.visit_while(while_stmt, &self.span),
            Stmt::Print(print) => visitor.visit_print(print, &self.span),
            Stmt::Assign(assign) => visitor.visit_assign(assign, &self.span),
            Stmt::ArrayAssign(assign) => visitor.visit_array_assign(assign, &self.span),
            Stmt::VarDecl(decl) => visitor.visit_var_decl(decl, &self.span),
        }
    }
}

impl Node for LocatedExpr {
    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        let span = &self.span;
        match &self.node {
            Expr::And(expr) => visitor.visit_and(expr, span),
            Expr::LessThan(expr) => visitor.visit_less_than(expr, span),
            Expr::Plus(expr) => visitor.visit_plus(expr, span),
            Expr::Minus(expr) => visitor.visit_minus(expr, span),
            Expr::Times(expr) => visitor.visit_times(expr, span),
            Expr::ArrayLookup(expr) => visitor.visit_array_lookup(expr, span),
            Expr::ArrayLength(expr) => visitor.visit_array_length(expr, span),
            Expr::Call(call) => visitor.visit_call(call, span),
            Expr::IntegerLiteral(value) => visitor.visit_integer_literal(*value, span),
            Expr::True => visitor.visit_true(span),
            Expr::False => visitor.visit_false(span),
            Expr::IdentifierExp(name) => visitor.visit_identifier_exp(name, span),
            Expr::This => visitor.visit_this(span),
            Expr::NewArray(expr) => visitor.visit_new_array(expr, span),
            Expr::NewObject(expr) => visitor.visit_new_object(expr, span),
            Expr::Not(expr) => visitor.visit_not(expr, span),
        }
    }
}

impl Node for Located<Identifier> {
    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_identifier(&self.node, &self.span)
    }
}
