//! Error type for memory store operations.

use std::error::Error;
use std::fmt;

use crate::id::Address;

/// Errors a [`MemoryStore`](crate::MemoryStore) may report.
///
/// Only [`OutOfMemory`](MemoryError::OutOfMemory) is expected in correct
/// programs. The remaining variants signal a broken caller: touching an
/// address outside every live allocation, reading a slot that was never
/// written, or releasing something that is not a live allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemoryError {
    /// The store cannot reserve the requested number of slots.
    OutOfMemory {
        /// Number of slots requested.
        requested: usize,
        /// Number of contiguous slots the store could still hand out.
        available: usize,
    },
    /// The address is not inside any live allocation.
    Unallocated {
        /// The offending address.
        address: Address,
    },
    /// The address is allocated but has never been written.
    Uninitialized {
        /// The offending address.
        address: Address,
    },
    /// The handle passed to `free` does not name a live allocation.
    InvalidFree {
        /// Base address of the rejected handle.
        address: Address,
    },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                requested,
                available,
            } => {
                write!(
                    f,
                    "out of memory: requested {requested} slots, {available} available"
                )
            }
            Self::Unallocated { address } => {
                write!(f, "address {address} is not allocated")
            }
            Self::Uninitialized { address } => {
                write!(f, "address {address} was never written")
            }
            Self::InvalidFree { address } => {
                write!(f, "free of {address} does not match a live allocation")
            }
        }
    }
}

impl Error for MemoryError {}
