//! Duplicate declaration checking
//!
//! Reports names declared twice where they must be unique: class names in
//! a program, method names in a class, and variables within one scope.
//! Classes, methods and blocks each open a scope. A method's formals and
//! the locals at the top of its body share the method scope. Shadowing a
//! name from an enclosing scope is allowed.

pub mod error;

use crate::ast::*;
use crate::error::{ErrorCollection, Span};
use crate::visitor::{Node, Visitor};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

pub use error::DeclarationError;

type CheckResult = Result<(), DeclarationError>;

pub struct DuplicateChecker {
    scopes: Vec<HashMap<String, Span>>,
    current_class: Option<String>,
}

impl DuplicateChecker {
    pub fn new() -> Self {
        Self {
            scopes: Vec::new(),
            current_class: None,
        }
    }

    /// Check a whole program, collecting one error per class at most.
    ///
    /// Visiting through [`Node::accept`] instead stops at the first error.
    pub fn check_program(&mut self, program: &Located<Program>) -> Result<(), Vec<DeclarationError>> {
        tracing::debug!(
            classes = program.node.classes.len(),
            "checking declarations"
        );
        self.reset();
        let mut errors = duplicate_class_names(&program.node);

        if let Err(error) = program.node.main_class.accept(self) {
            errors.push(error);
        }
        for class in &program.node.classes {
            if let Err(error) = class.accept(self) {
                errors.push(error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(errors = errors.len(), "duplicate declarations found");
            Err(errors)
        }
    }

    /// Check a program and report every duplicate as an [`AstError`].
    ///
    /// Never stops early; an empty collection means the program passed.
    pub fn check_with_recovery(&mut self, program: &Located<Program>) -> ErrorCollection {
        let mut errors = ErrorCollection::new();
        if let Err(found) = self.check_program(program) {
            for error in found {
                errors.add_error(error.into());
            }
        }
        errors
    }

    fn reset(&mut self) {
        self.scopes.clear();
        self.current_class = None;
    }

    fn with_scope<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.scopes.push(HashMap::new());
        let result = f(self);
        self.scopes.pop();
        result
    }

    /// Declare `ids` in the innermost scope.
    ///
    /// A declaration visited outside any class, method or block gets a
    /// scope of its own that ends with this call.
    fn declare<'a, I>(&mut self, ids: I) -> CheckResult
    where
        I: IntoIterator<Item = &'a Located<Identifier>>,
    {
        match self.scopes.last_mut() {
            Some(scope) => ids.into_iter().try_for_each(|id| declare_in(scope, id)),
            None => self.with_scope(|checker| checker.declare(ids)),
        }
    }

    fn check_class(
        &mut self,
        name: &Located<Identifier>,
        fields: &[Located<VarDecl>],
        methods: &[Located<MethodDecl>],
    ) -> CheckResult {
        self.current_class = Some(name.node.name.clone());
        let result = self.with_scope(|checker| -> CheckResult {
            for field in fields {
                field.accept(checker)?;
            }

            let mut seen: HashMap<&str, &Span> = HashMap::new();
            for method in methods {
                let method_name = &method.node.name;
                if let Some(first) = seen.insert(&method_name.node.name, &method_name.span) {
                    return Err(DeclarationError::DuplicateMethod {
                        class: name.node.name.clone(),
                        name: method_name.node.name.clone(),
                        first: first.clone(),
                        duplicate: method_name.span.clone(),
                    });
                }
                method.accept(checker)?;
            }
            Ok(())
        });
        self.current_class = None;
        result
    }
}

impl Default for DuplicateChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn declare_in(scope: &mut HashMap<String, Span>, id: &Located<Identifier>) -> CheckResult {
    match scope.entry(id.node.name.clone()) {
        Entry::Occupied(first) => Err(DeclarationError::DuplicateVariable {
            name: id.node.name.clone(),
            first: first.get().clone(),
            duplicate: id.span.clone(),
        }),
        Entry::Vacant(slot) => {
            tracing::trace!(name = %id.node, "declared");
            slot.insert(id.span.clone());
            Ok(())
        }
    }
}

/// Classes, including the main class, must have distinct names.
fn duplicate_class_names(program: &Program) -> Vec<DeclarationError> {
    let mut errors = Vec::new();
    let mut seen: HashMap<&str, &Span> = HashMap::new();
    let names = std::iter::once(&program.main_class.node.name)
        .chain(program.classes.iter().map(|class| class.node.name()));

    for name in names {
        match seen.get(name.node.name.as_str()) {
            Some(first) => errors.push(DeclarationError::DuplicateClass {
                name: name.node.name.clone(),
                first: (*first).clone(),
                duplicate: name.span.clone(),
            }),
            None => {
                seen.insert(&name.node.name, &name.span);
            }
        }
    }
    errors
}

impl Visitor for DuplicateChecker {
    type Output = CheckResult;

    fn visit_program(&mut self, program: &Program, _span: &Span) -> CheckResult {
        if let Some(error) = duplicate_class_names(program).into_iter().next() {
            return Err(error);
        }
        program.main_class.accept(self)?;
        for class in &program.classes {
            class.accept(self)?;
        }
        Ok(())
    }

    fn visit_main_class(&mut self, main_class: &MainClass, _span: &Span) -> CheckResult {
        self.with_scope(|checker| -> CheckResult {
            checker.declare([&main_class.args])?;
            main_class.body.accept(checker)
        })
    }

    fn visit_simple_class_decl(&mut self, class: &SimpleClassDecl, _span: &Span) -> CheckResult {
        self.check_class(&class.name, &class.fields, &class.methods)
    }

    fn visit_extends_class_decl(&mut self, class: &ExtendsClassDecl, _span: &Span) -> CheckResult {
        self.check_class(&class.name, &class.fields, &class.methods)
    }

    fn visit_var_decl(&mut self, decl: &VarDecl, _span: &Span) -> CheckResult {
        self.declare(decl.identifiers.iter())
    }

    fn visit_method_decl(&mut self, method: &MethodDecl, _span: &Span) -> CheckResult {
        tracing::trace!(
            class = ?self.current_class,
            method = %method.name.node,
            "checking method"
        );
        self.with_scope(|checker| -> CheckResult {
            for formal in &method.formals {
                formal.accept(checker)?;
            }
            for stmt in &method.body {
                stmt.accept(checker)?;
            }
            Ok(())
        })
    }

    fn visit_formal(&mut self, formal: &Formal, _span: &Span) -> CheckResult {
        self.declare([&formal.name])
    }

    fn visit_int_array_type(&mut self, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_boolean_type(&mut self, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_integer_type(&mut self, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_identifier_type(&mut self, _name: &str, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_block(&mut self, block: &BlockStmt, _span: &Span) -> CheckResult {
        self.with_scope(|checker| -> CheckResult {
            for stmt in &block.statements {
                stmt.accept(checker)?;
            }
            Ok(())
        })
    }

    fn visit_if(&mut self, if_stmt: &IfStmt, _span: &Span) -> CheckResult {
        if_stmt.then_branch.accept(self)?;
        match &if_stmt.else_branch {
            Some(else_branch) => else_branch.accept(self),
            None => Ok(()),
        }
    }

    fn visit_while(&mut self, while_stmt: &WhileStmt, _span: &Span) -> CheckResult {
        while_stmt.body.accept(self)
    }

    fn visit_print(&mut self, _print: &PrintStmt, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_assign(&mut self, _assign: &AssignStmt, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_array_assign(&mut self, _assign: &ArrayAssignStmt, _span: &Span) -> CheckResult {
        Ok(())
    }

    // Expressions declare nothing

    fn visit_and(&mut self, _expr: &BinaryExpr, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_less_than(&mut self, _expr: &BinaryExpr, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_plus(&mut self, _expr: &BinaryExpr, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_minus(&mut self, _expr: &BinaryExpr, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_times(&mut self, _expr: &BinaryExpr, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_array_lookup(&mut self, _expr: &ArrayLookupExpr, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_array_length(&mut self, _expr: &ArrayLengthExpr, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_call(&mut self, _call: &CallExpr, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_integer_literal(&mut self, _value: i64, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_true(&mut self, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_false(&mut self, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_identifier_exp(&mut self, _name: &str, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_this(&mut self, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_new_array(&mut self, _expr: &NewArrayExpr, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_new_object(&mut self, _expr: &NewObjectExpr, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_not(&mut self, _expr: &NotExpr, _span: &Span) -> CheckResult {
        Ok(())
    }

    fn visit_identifier(&mut self, _identifier: &Identifier, _span: &Span) -> CheckResult {
        Ok(())
    }
}
