//! Arena accounting snapshot.

/// Occupancy and lifetime counters for a [`SlotArena`](crate::SlotArena).
///
/// Returned by value from `stats()`; does not track later changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Allocations currently live, excluding zero-length ones.
    pub live_allocations: usize,
    /// Slots owned by live allocations.
    pub live_slots: usize,
    /// Disjoint freed ranges waiting for reuse.
    pub freed_ranges: usize,
    /// Slots in freed ranges waiting for reuse.
    pub freed_slots: usize,
    /// Current bump head: every address below it has been handed out at
    /// least once.
    pub head: usize,
    /// Highest bump head ever reached.
    pub high_water: usize,
    /// Successful `allocate` calls, including zero-length ones.
    pub total_allocations: u64,
    /// Successful `free` calls, including zero-length ones.
    pub total_frees: u64,
    /// `allocate` calls rejected with `OutOfMemory`.
    pub failed_allocations: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let s = ArenaStats::default();
        assert_eq!(s.live_allocations, 0);
        assert_eq!(s.live_slots, 0);
        assert_eq!(s.freed_ranges, 0);
        assert_eq!(s.freed_slots, 0);
        assert_eq!(s.head, 0);
        assert_eq!(s.high_water, 0);
        assert_eq!(s.total_allocations, 0);
        assert_eq!(s.total_frees, 0);
        assert_eq!(s.failed_allocations, 0);
    }
}
