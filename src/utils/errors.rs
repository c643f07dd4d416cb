//! Error types for the polyhedral bridge.
//!
//! Errors are grouped by the concern that produces them: matrix handling,
//! dimension bookkeeping and transformations. All of them are caller-contract
//! violations; none are transient.

use thiserror::Error;
use std::fmt;

/// Top-level error type for the bridge.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Malformed matrix or row access
    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    /// Inconsistent space dimensions
    #[error("Dimension error: {0}")]
    Dimension(#[from] DimensionError),

    /// Invalid transformation request
    #[error("Transformation error: {0}")]
    Transform(#[from] TransformError),
}

/// Error while building, reading or writing an iteration-domain matrix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct MatrixError {
    /// The error message
    pub message: String,
    /// The kind of matrix error
    pub kind: MatrixErrorKind,
    /// Line of the textual input, when parsing
    pub line: Option<usize>,
}

impl MatrixError {
    pub(crate) fn new(kind: MatrixErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            line: None,
        }
    }

    pub(crate) fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} at line {}", self.message, line),
            None => write!(f, "{}", self.message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixErrorKind {
    /// Fewer than two columns (no room for the kind flag and constant)
    TooFewColumns,
    /// A row does not have the matrix's column count
    RaggedRow,
    /// Row index past the last row
    RowOutOfRange,
    /// Target row cannot hold the constraint's coefficients
    RowTooNarrow,
    /// Malformed textual matrix
    Syntax,
}

/// Error raised when space dimensions do not line up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct DimensionError {
    /// The error message
    pub message: String,
    /// The kind of dimension error
    pub kind: DimensionErrorKind,
}

impl DimensionError {
    pub(crate) fn new(kind: DimensionErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionErrorKind {
    /// Constraint lives in a larger space than the polyhedron
    ConstraintTooWide,
    /// Dimension map is not a permutation of the space
    InvalidPermutation,
    /// Point has the wrong number of coordinates
    PointMismatch,
    /// Polyhedron does not live in the space an operation expects
    SpaceMismatch,
}

/// Error during a polyhedral transformation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct TransformError {
    /// The error message
    pub message: String,
    /// The kind of transformation error
    pub kind: TransformErrorKind,
    /// The transformation that failed
    pub transform: String,
}

impl TransformError {
    pub(crate) fn new(
        kind: TransformErrorKind,
        transform: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            transform: transform.into(),
        }
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.message, self.transform)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformErrorKind {
    /// Strip size must be strictly positive
    InvalidStride,
    /// Loop dimension outside the polyhedron's space
    InvalidLoop,
    /// Insertion point past the end of the space
    InvalidPosition,
}

/// Result type using BridgeError.
pub type BridgeResult<T> = Result<T, BridgeError>;
