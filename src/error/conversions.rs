//! Conversions from pass-specific errors into AstError

use super::{AstError, ErrorKind};
use crate::declarations::DeclarationError;

impl From<DeclarationError> for AstError {
    fn from(err: DeclarationError) -> Self {
        AstError::new(ErrorKind::DuplicateDeclaration, err.to_string())
            .with_span(err.duplicate().clone())
            .with_note(format!("'{}' was first declared at {}", err.name(), err.first()))
    }
}
