//! Declaration checking errors

use crate::error::Span;
use std::fmt;

/// A name declared twice where it must be unique
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationError {
    DuplicateClass {
        name: String,
        first: Span,
        duplicate: Span,
    },
    DuplicateMethod {
        class: String,
        name: String,
        first: Span,
        duplicate: Span,
    },
    /// Field, formal parameter or local variable
    DuplicateVariable {
        name: String,
        first: Span,
        duplicate: Span,
    },
}

impl DeclarationError {
    pub fn name(&self) -> &str {
        match self {
            DeclarationError::DuplicateClass { name, .. }
            | DeclarationError::DuplicateMethod { name, .. }
            | DeclarationError::DuplicateVariable { name, .. } => name,
        }
    }

    /// Location of the earlier declaration
    pub fn first(&self) -> &Span {
        match self {
            DeclarationError::DuplicateClass { first, .. }
            | DeclarationError::DuplicateMethod { first, .. }
            | DeclarationError::DuplicateVariable { first, .. } => first,
        }
    }

    /// Location of the offending declaration
    pub fn duplicate(&self) -> &Span {
        match self {
            DeclarationError::DuplicateClass { duplicate, .. }
            | DeclarationError::DuplicateMethod { duplicate, .. }
            | DeclarationError::DuplicateVariable { duplicate, .. } => duplicate,
        }
    }
}

impl fmt::Display for DeclarationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationError::DuplicateClass { name, .. } => {
                write!(f, "class '{}' is already defined", name)
            }
            DeclarationError::DuplicateMethod { class, name, .. } => {
                write!(f, "method '{}' is already defined in class '{}'", name, class)
            }
            DeclarationError::DuplicateVariable { name, .. } => {
                write!(f, "variable '{}' is already defined in this scope", name)
            }
        }
    }
}

impl std::error::Error for DeclarationError {}
