//! Errors surfaced by [`DynamicArray`](crate::DynamicArray) operations.

use std::error::Error;
use std::fmt;

use slotvec_core::MemoryError;

/// Errors from array operations.
///
/// Every error reaches the direct caller unchanged; the array never retries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The index (or, for `pop`, the implicit last index) is outside
    /// `[0, len)`.
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Array length at the time of the call.
        len: usize,
    },
    /// The store could not satisfy a growth allocation. The array is
    /// unchanged.
    OutOfMemory {
        /// Slots requested.
        requested: usize,
        /// Contiguous slots the store reported as available.
        available: usize,
    },
    /// The store rejected an access the array believed valid.
    Store(MemoryError),
    /// The configuration was rejected.
    Config(ArrayConfigError),
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::OutOfMemory {
                requested,
                available,
            } => {
                write!(
                    f,
                    "out of memory: requested {requested} slots, {available} available"
                )
            }
            Self::Store(e) => write!(f, "memory store error: {e}"),
            Self::Config(e) => write!(f, "invalid array config: {e}"),
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MemoryError> for ArrayError {
    fn from(e: MemoryError) -> Self {
        match e {
            MemoryError::OutOfMemory {
                requested,
                available,
            } => Self::OutOfMemory {
                requested,
                available,
            },
            other => Self::Store(other),
        }
    }
}

impl From<ArrayConfigError> for ArrayError {
    fn from(e: ArrayConfigError) -> Self {
        Self::Config(e)
    }
}

/// Rejected [`ArrayConfig`](crate::ArrayConfig) values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayConfigError {
    /// A growth ratio below 2 cannot make room for the inserted element.
    SizeRatioTooSmall {
        /// The configured ratio.
        configured: usize,
    },
}

impl fmt::Display for ArrayConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeRatioTooSmall { configured } => {
                write!(f, "size_ratio must be at least 2, got {configured}")
            }
        }
    }
}

impl Error for ArrayConfigError {}
