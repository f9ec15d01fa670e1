//! Error types for boxing and retrieval.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::tag::TypeTag;

/// The main error type for propbox operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: TypeTag, actual: TypeTag) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an out-of-range error for a value that does not fit `target`.
    #[must_use]
    pub fn out_of_range(target: TypeTag, value: i128) -> Self {
        Self::new(ErrorKind::OutOfRange { target, value })
    }

    /// Creates an unknown type code error.
    #[must_use]
    pub fn unknown_type_code(code: u32) -> Self {
        Self::new(ErrorKind::UnknownTypeCode(code))
    }

    /// Returns true if this is a type mismatch.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeMismatch { .. })
    }

    /// Returns true if this is an out-of-range error.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self.kind, ErrorKind::OutOfRange { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A value was retrieved as a shape other than the one it was boxed as.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The tag the retrieval asked for.
        expected: TypeTag,
        /// The tag the value was boxed with.
        actual: TypeTag,
    },

    /// An integer did not fit the width or signedness of the target shape.
    #[error("value {value} out of range for {target}")]
    OutOfRange {
        /// The shape being created.
        target: TypeTag,
        /// The rejected input.
        value: i128,
    },

    /// An integer code does not name any type tag.
    #[error("unknown type code: {0}")]
    UnknownTypeCode(u32),

    /// The runtime context was entered twice on the same thread.
    #[error("apartment already initialized on this thread")]
    ApartmentAlreadyInitialized,
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation that failed (e.g. `GetUInt8`).
    pub operation: Option<String>,
    /// Enclosing calls, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  from {frame}")?;
            }
        }
        Ok(())
    }
}
