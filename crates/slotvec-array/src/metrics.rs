//! Per-array operation counters.

/// Cumulative store traffic generated by one array.
///
/// Updated as operations complete; read with
/// [`DynamicArray::metrics`](crate::DynamicArray::metrics).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArrayMetrics {
    /// Completed reallocations (excluding the initial allocation).
    pub resizes: u64,
    /// Elements copied into a new range during reallocations.
    pub slots_copied: u64,
    /// Elements moved by `insert`/`remove` shifts.
    pub slots_shifted: u64,
    /// Successful `allocate` calls, including the initial one.
    pub allocations: u64,
    /// Successful `free` calls.
    pub frees: u64,
    /// `allocate` calls that failed.
    pub failed_allocations: u64,
}
