//! Type AST node definitions

use super::Located;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type alias for located type annotations
pub type LocatedType = Located<Type>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    IntArray,
    Boolean,
    Integer,
    Identifier(String), // Class type, by name
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::IntArray => f.write_str("int[]"),
            Type::Boolean => f.write_str("boolean"),
            Type::Integer => f.write_str("int"),
            Type::Identifier(name) => f.write_str(name),
        }
    }
}
