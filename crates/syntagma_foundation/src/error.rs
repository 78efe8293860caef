//! Error types for the Syntagma system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::element::ElementId;
use crate::intern::TagId;

/// The main error type for Syntagma operations.
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

    /// Creates a pattern arity error.
    #[must_use]
    pub fn pattern_arity(min: usize, max: usize, actual: usize) -> Self {
        Self::new(ErrorKind::PatternArity { min, max, actual })
    }

    /// Creates a capability mismatch error.
    #[must_use]
    pub fn capability_mismatch(element: ElementId, required: TagId) -> Self {
        Self::new(ErrorKind::CapabilityMismatch { element, required })
    }

    /// Creates an element not found error.
    #[must_use]
    pub fn element_not_found(id: ElementId) -> Self {
        Self::new(ErrorKind::ElementNotFound(id))
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Pattern declared with an unsupported number of capability tags.
    #[error("pattern arity out of range: got {actual}, supported {min}..={max}")]
    PatternArity {
        /// Minimum supported arity.
        min: usize,
        /// Maximum supported arity.
        max: usize,
        /// Number of tags actually declared.
        actual: usize,
    },

    /// An element claimed a capability the check could not confirm.
    #[error("capability mismatch: element {element:?} does not satisfy {required:?}")]
    CapabilityMismatch {
        /// The element that failed the downcast.
        element: ElementId,
        /// The capability tag the pattern position required.
        required: TagId,
    },

    /// Element was not found in the sentence.
    #[error("element not found: {0:?}")]
    ElementNotFound(ElementId),

    /// Index out of bounds.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The actual length of the collection.
        length: usize,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Index of the case in its match expression, if applicable.
    pub case: Option<usize>,
    /// Free-form detail about the failing operation.
    pub detail: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the case index.
    #[must_use]
    pub fn with_case(mut self, case: usize) -> Self {
        self.case = Some(case);
        self
    }

    /// Sets the detail message.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(case) = self.case {
            write!(f, "in case {case}")?;
        }
        if let Some(detail) = &self.detail {
            if self.case.is_some() {
                write!(f, ": ")?;
            }
            write!(f, "{detail}")?;
        }
        Ok(())
    }
}
