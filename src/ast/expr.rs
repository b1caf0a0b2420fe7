//! Expression AST node definitions
//!
//! This module contains all expression-related AST types including
//! literals, operators, array access and method calls.

use super::{Identifier, Located};
use serde::{Deserialize, Serialize};

/// Type alias for located expressions
pub type LocatedExpr = Located<Expr>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    And(BinaryExpr),
    LessThan(BinaryExpr),
    Plus(BinaryExpr),
    Minus(BinaryExpr),
    Times(BinaryExpr),
    ArrayLookup(ArrayLookupExpr),
    ArrayLength(ArrayLengthExpr),
    Call(CallExpr),
    IntegerLiteral(i64),
    True,
    False,
    IdentifierExp(String),
    This,
    NewArray(NewArrayExpr),
    NewObject(NewObjectExpr),
    Not(NotExpr),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub left: Box<LocatedExpr>,
    pub right: Box<LocatedExpr>,
}

impl BinaryExpr {
    pub fn new(left: LocatedExpr, right: LocatedExpr) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayLookupExpr {
    pub array: Box<LocatedExpr>,
    pub index: Box<LocatedExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayLengthExpr {
    pub array: Box<LocatedExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpr {
    pub receiver: Box<LocatedExpr>,
    pub method: Located<Identifier>,
    pub args: Vec<LocatedExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArrayExpr {
    pub size: Box<LocatedExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewObjectExpr {
    pub class_name: Located<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotExpr {
    pub operand: Box<LocatedExpr>,
}

/// Operator of a binary expression variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    And,
    LessThan,
    Plus,
    Minus,
    Times,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "&&",
            BinaryOp::LessThan => "<",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Times => "*",
        }
    }

    /// Binding strength; all binary operators are left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::And => 1,
            BinaryOp::LessThan => 2,
            BinaryOp::Plus | BinaryOp::Minus => 3,
            BinaryOp::Times => 4,
        }
    }
}

impl Expr {
    /// Precedence of `!e` and `new int[e]`
    pub const UNARY_PRECEDENCE: u8 = 5;
    /// Precedence of indexing, `.length` and method calls
    pub const POSTFIX_PRECEDENCE: u8 = 6;
    const ATOM_PRECEDENCE: u8 = 7;

    /// Binding strength used when printing; higher binds tighter.
    pub fn precedence(&self) -> u8 {
        if let Some(op) = self.binary_op() {
            return op.precedence();
        }
        match self {
            Expr::Not(_) | Expr::NewArray(_) => Self::UNARY_PRECEDENCE,
            Expr::ArrayLookup(_) | Expr::ArrayLength(_) | Expr::Call(_) => Self::POSTFIX_PRECEDENCE,
            _ => Self::ATOM_PRECEDENCE,
        }
    }

    pub fn binary_op(&self) -> Option<BinaryOp> {
        match self {
            Expr::And(_) => Some(BinaryOp::And),
            Expr::LessThan(_) => Some(BinaryOp::LessThan),
            Expr::Plus(_) => Some(BinaryOp::Plus),
            Expr::Minus(_) => Some(BinaryOp::Minus),
            Expr::Times(_) => Some(BinaryOp::Times),
            Expr::ArrayLookup(_)
            | Expr::ArrayLength(_)
            | Expr::Call(_)
            | Expr::IntegerLiteral(_)
            | Expr::True
            | Expr::False
            | Expr::IdentifierExp(_)
            | Expr::This
            | Expr::NewArray(_)
            | Expr::NewObject(_)
            | Expr::Not(_) => None,
        }
    }

    /// Operator token for the binary variants
    pub fn binary_operator(&self) -> Option<&'static str> {
        self.binary_op().map(BinaryOp::symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SourceLocation, Span};

    fn leaf(expr: Expr) -> LocatedExpr {
        Located::new(expr, Span::single(SourceLocation::new(1, 1)))
    }

    #[test]
    fn test_binary_variants_use_operator_table() {
        let sum = Expr::Plus(BinaryExpr::new(leaf(Expr::This), leaf(Expr::This)));
        assert_eq!(sum.binary_op(), Some(BinaryOp::Plus));
        assert_eq!(sum.binary_operator(), Some("+"));
        assert_eq!(sum.precedence(), BinaryOp::Plus.precedence());

        assert!(BinaryOp::Times.precedence() > BinaryOp::Minus.precedence());
        assert!(BinaryOp::And.precedence() < BinaryOp::LessThan.precedence());
        assert!(BinaryOp::Times.precedence() < Expr::UNARY_PRECEDENCE);
    }

    #[test]
    fn test_non_binary_precedence() {
        let not = Expr::Not(NotExpr {
            operand: Box::new(leaf(Expr::True)),
        });
        assert_eq!(not.binary_op(), None);
        assert_eq!(not.precedence(), Expr::UNARY_PRECEDENCE);

        let length = Expr::ArrayLength(ArrayLengthExpr {
            array: Box::new(leaf(Expr::IdentifierExp("xs".to_string()))),
        });
        assert_eq!(length.precedence(), Expr::POSTFIX_PRECEDENCE);
        assert!(Expr::This.precedence() > Expr::POSTFIX_PRECEDENCE);
    }
}
