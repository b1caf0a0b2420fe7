//! Program structure definitions
//!
//! The top-level `Program`, its classes, methods and formal parameters.

use super::{Identifier, Located, LocatedExpr, LocatedStmt, LocatedType, VarDecl};
use serde::{Deserialize, Serialize};

/// A complete MiniJava compilation unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub main_class: Located<MainClass>,
    pub classes: Vec<Located<ClassDecl>>,
}

/// The class holding `public static void main(String[] args)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainClass {
    pub name: Located<Identifier>,
    pub args: Located<Identifier>,
    pub body: LocatedStmt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassDecl {
    Simple(SimpleClassDecl),
    Extends(ExtendsClassDecl),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleClassDecl {
    pub name: Located<Identifier>,
    pub fields: Vec<Located<VarDecl>>,
    pub methods: Vec<Located<MethodDecl>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendsClassDecl {
    pub name: Located<Identifier>,
    pub parent: Located<Identifier>,
    pub fields: Vec<Located<VarDecl>>,
    pub methods: Vec<Located<MethodDecl>>,
}

impl ClassDecl {
    pub fn name(&self) -> &Located<Identifier> {
        match self {
            ClassDecl::Simple(class) => &class.name,
            ClassDecl::Extends(class) => &class.name,
        }
    }

    pub fn parent(&self) -> Option<&Located<Identifier>> {
        match self {
            ClassDecl::Simple(_) => None,
            ClassDecl::Extends(class) => Some(&class.parent),
        }
    }

    pub fn fields(&self) -> &[Located<VarDecl>] {
        match self {
            ClassDecl::Simple(class) => &class.fields,
            ClassDecl::Extends(class) => &class.fields,
        }
    }

    pub fn methods(&self) -> &[Located<MethodDecl>] {
        match self {
            ClassDecl::Simple(class) => &class.methods,
            ClassDecl::Extends(class) => &class.methods,
        }
    }
}

/// `public <return_type> name(formals) { body return return_expr; }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub return_type: LocatedType,
    pub name: Located<Identifier>,
    pub formals: Vec<Located<Formal>>,
    pub body: Vec<LocatedStmt>,
    pub return_expr: LocatedExpr,
}

/// A formal parameter of a method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formal {
    pub ty: LocatedType,
    pub name: Located<Identifier>,
}
