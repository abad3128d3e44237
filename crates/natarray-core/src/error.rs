//! Error types for natarray containers.
//!
//! Every fallible container operation reports one of these variants
//! synchronously. A failed operation never leaves a container half-built:
//! validation happens before any buffer is released.

use std::error::Error;
use std::fmt;

/// Errors returned by `Array1D`, `Array2D` and the raw allocation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A size, alignment or length argument was rejected before any
    /// allocation took place.
    InvalidArgument {
        /// Human-readable description of the rejected argument.
        reason: String,
    },
    /// The container was never created, or has already been disposed.
    InvalidState,
    /// An index fell outside `[0, len)`.
    IndexOutOfRange {
        /// The index the caller supplied.
        index: isize,
        /// The length the index was checked against.
        len: usize,
    },
    /// A write was attempted while the cooperative write-lock is engaged.
    LockedViolation,
    /// The operation exists on the surface but is intentionally not
    /// implemented.
    Unsupported {
        /// Name of the unsupported operation.
        operation: &'static str,
    },
    /// The global allocator returned null, or the requested layout does
    /// not fit in `isize`.
    AllocationFailed {
        /// Number of bytes requested.
        bytes: usize,
        /// Alignment requested.
        align: usize,
    },
}

impl ArrayError {
    /// Shorthand for [`ArrayError::InvalidArgument`].
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::InvalidState => write!(f, "array is not created; create it first"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::LockedViolation => write!(f, "array is write-locked; unlock it first"),
            Self::Unsupported { operation } => {
                write!(f, "operation '{operation}' is not supported")
            }
            Self::AllocationFailed { bytes, align } => {
                write!(f, "allocation of {bytes} bytes (align {align}) failed")
            }
        }
    }
}

impl Error for ArrayError {}
