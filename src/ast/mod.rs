//! Abstract Syntax Tree (AST) type definitions for MiniJava
//!
//! Every syntactic construct is a distinct variant of a closed enum or a
//! dedicated struct, wrapped in [`Located`] so that each node carries the
//! source span the parser assigned to it. Ownership is strictly
//! hierarchical: children are held by `Box`, `Vec` or `NonEmpty`, never
//! shared, and nothing points back to its parent.

mod expr;
mod program;
pub mod query;
mod stmt;
mod traversal;
mod types;

pub use expr::*;
pub use program::*;
pub use stmt::*;
pub use traversal::{ExprExt, StmtExt};
pub use types::*;

use crate::error::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A wrapper for AST nodes that includes source location information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Located<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Located<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }

    /// Replace the payload while keeping the span.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Located<U> {
        Located {
            node: f(self.node),
            span: self.span,
        }
    }
}

/// A name appearing in a declaration or reference position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Build an identifier already wrapped with its span
    pub fn located(name: impl Into<String>, span: Span) -> Located<Identifier> {
        Located::new(Self::new(name), span)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
