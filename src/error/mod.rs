//! Error type hierarchy for the MiniJava AST core
//!
//! This module provides the source location types carried by every node,
//! the construction error raised when a node's structural invariant is
//! violated, and a collection type passes use to accumulate diagnostics.

mod conversions;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source location information attached to nodes and errors
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: Option<String>,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            file: None,
            line,
            column,
        }
    }

    pub fn with_file(mut self, file: String) -> Self {
        self.file = Some(file);
        self
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file, self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

/// Range of source text a node was parsed from.
///
/// The parser assigns one to every node. Passes read it for diagnostics
/// only; it never takes part in the meaning of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl Span {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    pub fn single(location: SourceLocation) -> Self {
        Self {
            start: location.clone(),
            end: location,
        }
    }

    /// Get the start line number
    pub fn start_line(&self) -> usize {
        self.start.line
    }

    /// Get the start column number
    pub fn start_column(&self) -> usize {
        self.start.column
    }

    /// Get the end line number
    pub fn end_line(&self) -> usize {
        self.end.line
    }

    /// Get the end column number
    pub fn end_column(&self) -> usize {
        self.end.column
    }

    /// Smallest span covering both `self` and `other`
    pub fn merge(&self, other: &Span) -> Span {
        let start = if (other.start.line, other.start.column) < (self.start.line, self.start.column)
        {
            other.start.clone()
        } else {
            self.start.clone()
        };
        let end = if (other.end.line, other.end.column) > (self.end.line, self.end.column) {
            other.end.clone()
        } else {
            self.end.clone()
        };
        Span { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Error context providing additional information
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub span: Option<Span>,
    pub note: Option<String>,
    pub help: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Main error type for the AST core
#[derive(Debug, Clone)]
pub struct AstError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl AstError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.context.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }

    pub fn span(&self) -> Option<&Span> {
        self.context.span.as_ref()
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Construction errors
    EmptyDeclaration,

    // Pass errors
    DuplicateDeclaration,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyDeclaration => "empty declaration",
            ErrorKind::DuplicateDeclaration => "duplicate declaration",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context.span {
            Some(span) => write!(f, "{}: {}: {}", span, self.kind, self.message)?,
            None => write!(f, "{}: {}", self.kind, self.message)?,
        }

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for AstError {}

/// Result type for AST operations
pub type Result<T> = std::result::Result<T, AstError>;

/// Collection of errors for reporting multiple issues
#[derive(Debug, Default)]
pub struct ErrorCollection {
    errors: Vec<AstError>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: AstError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[AstError] {
        &self.errors
    }
}

impl fmt::Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "error: {}", error)?;
        }

        if !self.is_empty() {
            write!(f, "\n{} error(s)", self.error_count())?;
        }

        Ok(())
    }
}
