//! Statement AST node definitions
//!
//! This module contains all statement-related AST types including
//! control flow, assignments and variable declarations.

use super::{Identifier, Located, LocatedExpr, LocatedType};
use crate::error::{AstError, ErrorKind, Result, Span};
use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};

/// Type alias for located statements
pub type LocatedStmt = Located<Stmt>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
    Block(BlockStmt),
    If(IfStmt),
    While(WhileStmt),
    Print(PrintStmt),
    Assign(AssignStmt),
    ArrayAssign(ArrayAssignStmt),
    VarDecl(VarDecl),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStmt {
    pub statements: Vec<LocatedStmt>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfStmt {
    pub condition: LocatedExpr,
    pub then_branch: Box<LocatedStmt>,
    pub else_branch: Option<Box<LocatedStmt>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhileStmt {
    pub condition: LocatedExpr,
    pub body: Box<LocatedStmt>,
}

/// `System.out.println(value);`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintStmt {
    pub value: LocatedExpr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignStmt {
    pub target: Located<Identifier>,
    pub value: LocatedExpr,
}

/// `target[index] = value;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayAssignStmt {
    pub target: Located<Identifier>,
    pub index: LocatedExpr,
    pub value: LocatedExpr,
}

/// Variable declaration: `int a, b, c;`
///
/// One or more names declared together under a shared type. The names keep
/// their source order, and the `NonEmpty` container makes a declaration
/// without names unrepresentable, including through deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarDecl {
    pub ty: LocatedType,
    pub identifiers: NonEmpty<Located<Identifier>>,
}

impl VarDecl {
    /// Build a declaration from the names the parser collected.
    ///
    /// Fails with [`ErrorKind::EmptyDeclaration`] when `identifiers` is empty.
    pub fn new(ty: LocatedType, identifiers: Vec<Located<Identifier>>) -> Result<Self> {
        match NonEmpty::from_vec(identifiers) {
            Some(identifiers) => Ok(Self { ty, identifiers }),
            None => {
                tracing::debug!(span = %ty.span, "rejecting variable declaration without names");
                Err(AstError::new(
                    ErrorKind::EmptyDeclaration,
                    format!("declaration of type '{}' names no variables", ty.node),
                )
                .with_span(ty.span)
                .with_help("a declaration must introduce at least one identifier"))
            }
        }
    }

    /// Declaration of exactly one name
    pub fn single(ty: LocatedType, identifier: Located<Identifier>) -> Self {
        Self {
            ty,
            identifiers: NonEmpty::new(identifier),
        }
    }

    /// Declared names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.identifiers.iter().map(|id| id.node.name.as_str())
    }
}

impl Stmt {
    /// Construct a located declaration statement, see [`VarDecl::new`].
    pub fn var_decl(
        ty: LocatedType,
        identifiers: Vec<Located<Identifier>>,
        span: Span,
    ) -> Result<LocatedStmt> {
        VarDecl::new(ty, identifiers).map(|decl| Located::new(Stmt::VarDecl(decl), span))
    }
}
