//! # Errors for vector and matrix operations
//!
//! Every fallible operation in `linear_algebra` reports one of these. A failing operation never
//! modifies the value it was called on.
use thiserror::Error;

/// Something went wrong while creating, indexing or combining vectors and matrices.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum LinearAlgebraError {
    /// A container was requested with a size of zero, or with a size above its maximum.
    #[error("invalid size {size}: must be at least 1 and at most {maximum}")]
    InvalidArgument {
        /// Requested size.
        size: usize,
        /// Largest size allowed for this kind of container.
        maximum: usize,
    },
    /// Row data passed to a matrix constructor doesn't have a triangular shape.
    ///
    /// Row `row` should have held `expected` values.
    #[error("invalid shape: row {row} has {found} values, expected {expected}")]
    InvalidShape {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },
    /// An index outside of `start_index..start_index + len` was used.
    #[error("index {index} out of range for vector of length {len} starting at {start_index}")]
    OutOfRange {
        /// Index as given by the caller.
        index: usize,
        /// Smallest valid index.
        start_index: usize,
        /// Number of elements.
        len: usize,
    },
    /// Operands of a binary operation differ in size.
    #[error("incompatible sizes {left} and {right}")]
    IncompatibleSize {
        /// Size of the left-hand operand.
        left: usize,
        /// Size of the right-hand operand.
        right: usize,
    },
}

impl LinearAlgebraError {
    /// Whether this error was caused by invalid construction arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::InvalidShape { .. })
    }

    /// Whether this error was caused by an index outside of the valid range.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Whether this error was caused by operands of different sizes.
    pub fn is_incompatible_size(&self) -> bool {
        matches!(self, Self::IncompatibleSize { .. })
    }
}

/// Result of a fallible vector or matrix operation.
pub type Result<T> = std::result::Result<T, LinearAlgebraError>;
