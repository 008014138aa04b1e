//! The slot arena: a simulated flat address space.

use indexmap::IndexMap;
use smallvec::SmallVec;

use slotvec_core::{Address, Handle, MemoryError, MemoryStore};

use crate::config::ArenaConfig;
use crate::error::ArenaConfigError;
use crate::freelist::FreeList;
use crate::slot::Slot;
use crate::stats::ArenaStats;

/// Slots staged inline by `copy` before spilling to the heap.
const COPY_STAGE_INLINE: usize = 16;

/// A simulated memory of single-value slots.
///
/// Addresses below the bump head are backed by a `Vec<Slot<V>>`; every
/// address at or above it is free. Live allocations are recorded by base
/// address so `free` can reject handles it never issued.
///
/// ```
/// use slotvec_arena::SlotArena;
/// use slotvec_core::MemoryStore;
///
/// let mut arena: SlotArena<i64> = SlotArena::new();
/// let h = arena.allocate(2).unwrap();
/// arena.set(h.addr(0), 7).unwrap();
/// arena.set(h.addr(1), 9).unwrap();
/// arena.copy(h.addr(0), h.addr(1), 1).unwrap();
/// assert_eq!(arena.get(h.addr(0)), Ok(9));
/// arena.free(h).unwrap();
/// assert_eq!(arena.stats().live_allocations, 0);
/// ```
#[derive(Clone, Debug)]
pub struct SlotArena<V> {
    config: ArenaConfig,
    /// Backing storage; `slots.len()` is the bump head.
    slots: Vec<Slot<V>>,
    /// Base address → length of every live non-empty allocation.
    live: IndexMap<Address, usize>,
    free: FreeList,
    high_water: usize,
    total_allocations: u64,
    total_frees: u64,
    failed_allocations: u64,
}

impl<V: Clone> SlotArena<V> {
    /// Create an unbounded arena with the default configuration.
    pub fn new() -> Self {
        Self::build(ArenaConfig::new())
    }

    /// Create an arena from a validated configuration.
    pub fn with_config(config: ArenaConfig) -> Result<Self, ArenaConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ArenaConfig) -> Self {
        Self {
            slots: Vec::with_capacity(config.initial_reserve),
            config,
            live: IndexMap::new(),
            free: FreeList::new(),
            high_water: 0,
            total_allocations: 0,
            total_frees: 0,
            failed_allocations: 0,
        }
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Snapshot of occupancy and lifetime counters.
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            live_allocations: self.live.len(),
            live_slots: self.live.values().sum(),
            freed_ranges: self.free.range_count(),
            freed_slots: self.free.total_slots(),
            head: self.slots.len(),
            high_water: self.high_water,
            total_allocations: self.total_allocations,
            total_frees: self.total_frees,
            failed_allocations: self.failed_allocations,
        }
    }

    /// Whether `handle` names a live allocation of exactly its length.
    ///
    /// Zero-length handles own nothing and are never live.
    pub fn is_live(&self, handle: Handle) -> bool {
        self.live.get(&handle.base()) == Some(&handle.len())
    }

    /// Whether `addr` lies inside some live allocation.
    pub fn is_allocated(&self, addr: Address) -> bool {
        self.slots
            .get(addr.get())
            .is_some_and(|slot| slot.is_allocated())
    }

    /// Drop every allocation and value, returning to an empty address space.
    ///
    /// Handles issued before the reset must not be used again. Lifetime
    /// counters are kept.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.live.clear();
        self.free.clear();
    }

    /// Contiguous slots still available above the bump head.
    fn headroom(&self) -> usize {
        let head = self.slots.len();
        match self.config.max_slots {
            Some(max) => max.saturating_sub(head),
            None => usize::MAX - head,
        }
    }

    /// Reserve `size` fresh addresses at the head.
    fn bump(&mut self, size: usize) -> Result<usize, MemoryError> {
        let headroom = self.headroom();
        if size > headroom {
            self.failed_allocations += 1;
            let available = if self.config.reuse_freed {
                headroom.max(self.free.largest())
            } else {
                headroom
            };
            return Err(MemoryError::OutOfMemory {
                requested: size,
                available,
            });
        }
        let start = self.slots.len();
        self.slots.resize_with(start + size, || Slot::Free);
        self.high_water = self.high_water.max(self.slots.len());
        Ok(start)
    }

    /// Shrink the head past any freed range that touches it.
    fn retract_head(&mut self) {
        while let Some(start) = self.free.pop_tail(self.slots.len()) {
            self.slots.truncate(start);
        }
    }

    /// Fail with `Unallocated` on the first address of the range that is
    /// outside every live allocation.
    fn check_range(&self, start: Address, count: usize) -> Result<(), MemoryError> {
        for i in 0..count {
            let address = start.offset(i);
            if !self.is_allocated(address) {
                return Err(MemoryError::Unallocated { address });
            }
        }
        Ok(())
    }
}

impl<V: Clone> Default for SlotArena<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> MemoryStore for SlotArena<V> {
    type Value = V;

    fn allocate(&mut self, size: usize) -> Result<Handle, MemoryError> {
        if size == 0 {
            self.total_allocations += 1;
            return Ok(Handle::new(Address(self.slots.len()), 0));
        }

        let reused = if self.config.reuse_freed {
            self.free.take(size)
        } else {
            None
        };
        let start = match reused {
            Some(start) => start,
            None => self.bump(size)?,
        };

        for slot in &mut self.slots[start..start + size] {
            *slot = Slot::Reserved;
        }
        let base = Address(start);
        self.live.insert(base, size);
        self.total_allocations += 1;
        Ok(Handle::new(base, size))
    }

    fn free(&mut self, handle: Handle) -> Result<(), MemoryError> {
        if handle.is_empty() {
            self.total_frees += 1;
            return Ok(());
        }
        if !self.is_live(handle) {
            return Err(MemoryError::InvalidFree {
                address: handle.base(),
            });
        }
        self.live.swap_remove(&handle.base());

        let start = handle.base().get();
        for slot in &mut self.slots[start..start + handle.len()] {
            *slot = Slot::Free;
        }
        if self.config.reuse_freed {
            self.free.release(start, handle.len());
            self.retract_head();
        }
        self.total_frees += 1;
        Ok(())
    }

    fn get(&self, addr: Address) -> Result<V, MemoryError> {
        match self.slots.get(addr.get()) {
            Some(Slot::Occupied(value)) => Ok(value.clone()),
            Some(Slot::Reserved) => Err(MemoryError::Uninitialized { address: addr }),
            _ => Err(MemoryError::Unallocated { address: addr }),
        }
    }

    fn set(&mut self, addr: Address, value: V) -> Result<(), MemoryError> {
        match self.slots.get_mut(addr.get()) {
            Some(slot) if slot.is_allocated() => {
                *slot = Slot::Occupied(value);
                Ok(())
            }
            _ => Err(MemoryError::Unallocated { address: addr }),
        }
    }

    fn copy(&mut self, dest: Address, src: Address, count: usize) -> Result<(), MemoryError> {
        if count == 0 || dest == src {
            return Ok(());
        }
        self.check_range(src, count)?;
        self.check_range(dest, count)?;

        // Stage the whole source first so overlapping shifts in either
        // direction never read a slot this copy already overwrote.
        let s = src.get();
        let staged: SmallVec<[Slot<V>; COPY_STAGE_INLINE]> =
            self.slots[s..s + count].iter().cloned().collect();

        let d = dest.get();
        for (slot, value) in self.slots[d..d + count].iter_mut().zip(staged) {
            *slot = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> SlotArena<i64> {
        SlotArena::new()
    }

    fn fill(arena: &mut SlotArena<i64>, h: Handle, values: &[i64]) {
        for (i, &v) in values.iter().enumerate() {
            arena.set(h.addr(i), v).unwrap();
        }
    }

    fn read(arena: &SlotArena<i64>, h: Handle, n: usize) -> Vec<i64> {
        (0..n).map(|i| arena.get(h.addr(i)).unwrap()).collect()
    }

    #[test]
    fn sequential_allocations_are_disjoint() {
        let mut a = arena();
        let h1 = a.allocate(3).unwrap();
        let h2 = a.allocate(2).unwrap();
        assert_eq!(h1.base(), Address(0));
        assert_eq!(h2.base(), Address(3));
        assert_eq!(a.stats().live_slots, 5);
    }

    #[test]
    fn zero_length_allocation_reserves_nothing() {
        let mut a = arena();
        let h = a.allocate(0).unwrap();
        assert!(h.is_empty());
        assert_eq!(a.stats().head, 0);
        assert_eq!(a.stats().live_allocations, 0);
        assert_eq!(a.stats().total_allocations, 1);
        a.free(h).unwrap();
        assert_eq!(a.stats().total_frees, 1);
    }

    #[test]
    fn read_before_write_is_uninitialized() {
        let mut a = arena();
        let h = a.allocate(1).unwrap();
        assert_eq!(
            a.get(h.addr(0)),
            Err(MemoryError::Uninitialized { address: h.addr(0) })
        );
    }

    #[test]
    fn access_outside_allocations_is_unallocated() {
        let mut a = arena();
        let h = a.allocate(1).unwrap();
        assert_eq!(
            a.set(h.addr(1), 5),
            Err(MemoryError::Unallocated { address: Address(1) })
        );
        assert_eq!(
            a.get(Address(100)),
            Err(MemoryError::Unallocated {
                address: Address(100)
            })
        );
    }

    #[test]
    fn set_then_get() {
        let mut a = arena();
        let h = a.allocate(2).unwrap();
        a.set(h.addr(1), -4).unwrap();
        assert_eq!(a.get(h.addr(1)), Ok(-4));
        a.set(h.addr(1), 8).unwrap();
        assert_eq!(a.get(h.addr(1)), Ok(8));
    }

    #[test]
    fn freed_slots_become_unallocated() {
        let mut a = arena();
        let keep = a.allocate(1).unwrap();
        let h = a.allocate(2).unwrap();
        let _tail = a.allocate(1).unwrap();
        a.set(h.addr(0), 1).unwrap();
        a.free(h).unwrap();
        assert!(!a.is_allocated(h.addr(0)));
        assert_eq!(
            a.get(h.addr(0)),
            Err(MemoryError::Unallocated { address: h.addr(0) })
        );
        assert!(a.is_live(keep));
    }

    #[test]
    fn double_free_rejected() {
        let mut a = arena();
        let h = a.allocate(2).unwrap();
        a.free(h).unwrap();
        assert_eq!(
            a.free(h),
            Err(MemoryError::InvalidFree { address: h.base() })
        );
    }

    #[test]
    fn free_with_wrong_length_rejected() {
        let mut a = arena();
        let h = a.allocate(4).unwrap();
        let forged = Handle::new(h.base(), 2);
        assert_eq!(
            a.free(forged),
            Err(MemoryError::InvalidFree { address: h.base() })
        );
        assert!(a.is_live(h));
    }

    #[test]
    fn freed_range_is_reused_first_fit() {
        let mut a = arena();
        let h1 = a.allocate(4).unwrap();
        let _h2 = a.allocate(1).unwrap();
        a.free(h1).unwrap();
        let h3 = a.allocate(3).unwrap();
        assert_eq!(h3.base(), h1.base());
        assert_eq!(a.stats().freed_slots, 1);
    }

    #[test]
    fn reuse_disabled_never_repeats_addresses() {
        let config = ArenaConfig {
            reuse_freed: false,
            ..ArenaConfig::new()
        };
        let mut a: SlotArena<i64> = SlotArena::with_config(config).unwrap();
        let h1 = a.allocate(4).unwrap();
        a.free(h1).unwrap();
        let h2 = a.allocate(4).unwrap();
        assert_eq!(h2.base(), Address(4));
        assert_eq!(a.stats().freed_ranges, 0);
        assert_eq!(a.stats().head, 8);
    }

    #[test]
    fn freeing_tail_retracts_head() {
        let mut a = arena();
        let h1 = a.allocate(2).unwrap();
        let h2 = a.allocate(3).unwrap();
        a.free(h1).unwrap();
        assert_eq!(a.stats().head, 5);
        a.free(h2).unwrap();
        assert_eq!(a.stats().head, 0);
        assert_eq!(a.stats().freed_ranges, 0);
        assert_eq!(a.stats().high_water, 5);
    }

    #[test]
    fn bounded_arena_reports_out_of_memory() {
        let mut a: SlotArena<i64> = SlotArena::with_config(ArenaConfig::bounded(4)).unwrap();
        let _h = a.allocate(3).unwrap();
        let before = a.stats();
        assert_eq!(
            a.allocate(2),
            Err(MemoryError::OutOfMemory {
                requested: 2,
                available: 1,
            })
        );
        let after = a.stats();
        assert_eq!(after.failed_allocations, before.failed_allocations + 1);
        assert_eq!(
            ArenaStats {
                failed_allocations: before.failed_allocations,
                ..after
            },
            before
        );
    }

    #[test]
    fn out_of_memory_reports_largest_free_range() {
        let mut a: SlotArena<i64> = SlotArena::with_config(ArenaConfig::bounded(6)).unwrap();
        let h1 = a.allocate(3).unwrap();
        let _h2 = a.allocate(3).unwrap();
        a.free(h1).unwrap();
        assert_eq!(
            a.allocate(4),
            Err(MemoryError::OutOfMemory {
                requested: 4,
                available: 3,
            })
        );
    }

    #[test]
    fn copy_between_allocations() {
        let mut a = arena();
        let src = a.allocate(3).unwrap();
        let dest = a.allocate(3).unwrap();
        fill(&mut a, src, &[1, 2, 3]);
        a.copy(dest.base(), src.base(), 3).unwrap();
        assert_eq!(read(&a, dest, 3), vec![1, 2, 3]);
    }

    #[test]
    fn copy_shift_right_overlapping() {
        let mut a = arena();
        let h = a.allocate(5).unwrap();
        fill(&mut a, h, &[1, 2, 3, 4]);
        a.copy(h.addr(1), h.addr(0), 4).unwrap();
        assert_eq!(read(&a, h, 5), vec![1, 1, 2, 3, 4]);
    }

    #[test]
    fn copy_shift_left_overlapping() {
        let mut a = arena();
        let h = a.allocate(4).unwrap();
        fill(&mut a, h, &[1, 2, 3, 4]);
        a.copy(h.addr(0), h.addr(1), 3).unwrap();
        assert_eq!(read(&a, h, 4), vec![2, 3, 4, 4]);
    }

    #[test]
    fn copy_carries_reserved_state() {
        let mut a = arena();
        let h = a.allocate(2).unwrap();
        a.set(h.addr(0), 5).unwrap();
        a.copy(h.addr(0), h.addr(1), 1).unwrap();
        assert_eq!(
            a.get(h.addr(0)),
            Err(MemoryError::Uninitialized { address: h.addr(0) })
        );
    }

    #[test]
    fn copy_past_allocation_rejected() {
        let mut a = arena();
        let h = a.allocate(2).unwrap();
        fill(&mut a, h, &[1, 2]);
        assert_eq!(
            a.copy(h.addr(1), h.addr(0), 2),
            Err(MemoryError::Unallocated { address: Address(2) })
        );
        assert_eq!(read(&a, h, 2), vec![1, 2]);
    }

    #[test]
    fn zero_count_copy_is_noop() {
        let mut a = arena();
        assert_eq!(a.copy(Address(10), Address(20), 0), Ok(()));
    }

    #[test]
    fn reset_clears_everything_but_counters() {
        let mut a = arena();
        let h = a.allocate(3).unwrap();
        a.reset();
        assert!(!a.is_live(h));
        let s = a.stats();
        assert_eq!(s.head, 0);
        assert_eq!(s.live_allocations, 0);
        assert_eq!(s.total_allocations, 1);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn live_allocations_never_overlap(
                ops in proptest::collection::vec((any::<bool>(), 0usize..12), 1..60),
            ) {
                let mut a = arena();
                let mut live: Vec<Handle> = Vec::new();
                for (do_free, size) in ops {
                    if do_free && !live.is_empty() {
                        let h = live.swap_remove(size % live.len());
                        prop_assert!(a.free(h).is_ok());
                    } else {
                        let h = a.allocate(size).unwrap();
                        if !h.is_empty() {
                            live.push(h);
                        }
                    }
                    for (i, x) in live.iter().enumerate() {
                        for y in &live[i + 1..] {
                            prop_assert!(x.end() <= y.base() || y.end() <= x.base());
                        }
                    }
                    prop_assert_eq!(a.stats().live_allocations, live.len());
                }
            }

            #[test]
            fn copy_matches_snapshot_semantics(
                values in proptest::collection::vec(any::<i64>(), 1..32),
                src_seed in any::<usize>(),
                dest_seed in any::<usize>(),
                count_seed in any::<usize>(),
            ) {
                let n = values.len();
                let src = src_seed % n;
                let dest = dest_seed % n;
                let count = count_seed % (n - src.max(dest) + 1);

                let mut a = arena();
                let h = a.allocate(n).unwrap();
                fill(&mut a, h, &values);
                a.copy(h.addr(dest), h.addr(src), count).unwrap();

                let mut model = values.clone();
                let snapshot = model[src..src + count].to_vec();
                model[dest..dest + count].clone_from_slice(&snapshot);
                prop_assert_eq!(read(&a, h, n), model);
            }

            #[test]
            fn freed_space_is_reusable(sizes in proptest::collection::vec(1usize..8, 1..20)) {
                let total: usize = sizes.iter().sum();
                let mut a: SlotArena<i64> =
                    SlotArena::with_config(ArenaConfig::bounded(total)).unwrap();
                let handles: Vec<Handle> =
                    sizes.iter().map(|&s| a.allocate(s).unwrap()).collect();
                for h in handles {
                    a.free(h).unwrap();
                }
                prop_assert_eq!(a.stats().head, 0);
                prop_assert!(a.allocate(total).is_ok());
            }
        }
    }
}
