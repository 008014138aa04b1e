//! Fault injection for memory stores.
//!
//! [`FaultyStore`] wraps any [`MemoryStore`] and fails deterministically:
//! allocations after a budget is spent, the next few frees, and optionally
//! every non-empty copy.

use slotvec_core::{Address, Handle, MemoryError, MemoryStore};

/// Wraps a store and injects failures.
pub struct FaultyStore<S> {
    inner: S,
    allocations_left: Option<usize>,
    frees_to_fail: usize,
    fail_copies: bool,
}

impl<S: MemoryStore> FaultyStore<S> {
    /// A transparent wrapper: no faults until configured.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            allocations_left: None,
            frees_to_fail: 0,
            fail_copies: false,
        }
    }

    /// Let `n` more allocations through, then fail every one with
    /// `OutOfMemory`.
    pub fn fail_allocations_after(mut self, n: usize) -> Self {
        self.allocations_left = Some(n);
        self
    }

    /// Fail every copy of at least one slot with `Unallocated`.
    pub fn fail_copies(mut self) -> Self {
        self.fail_copies = true;
        self
    }

    /// Change the allocation budget in place. `None` removes the limit.
    pub fn set_allocations_left(&mut self, n: Option<usize>) {
        self.allocations_left = n;
    }

    /// Fail the next `n` frees with `InvalidFree`, leaving the inner store
    /// untouched.
    pub fn fail_next_frees(&mut self, n: usize) {
        self.frees_to_fail = n;
    }

    /// Toggle copy failures in place.
    pub fn set_fail_copies(&mut self, fail: bool) {
        self.fail_copies = fail;
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: MemoryStore> MemoryStore for FaultyStore<S> {
    type Value = S::Value;

    fn allocate(&mut self, size: usize) -> Result<Handle, MemoryError> {
        if let Some(left) = self.allocations_left.as_mut() {
            if *left == 0 {
                return Err(MemoryError::OutOfMemory {
                    requested: size,
                    available: 0,
                });
            }
            *left -= 1;
        }
        self.inner.allocate(size)
    }

    fn free(&mut self, handle: Handle) -> Result<(), MemoryError> {
        if self.frees_to_fail > 0 {
            self.frees_to_fail -= 1;
            return Err(MemoryError::InvalidFree {
                address: handle.base(),
            });
        }
        self.inner.free(handle)
    }

    fn get(&self, addr: Address) -> Result<S::Value, MemoryError> {
        self.inner.get(addr)
    }

    fn set(&mut self, addr: Address, value: S::Value) -> Result<(), MemoryError> {
        self.inner.set(addr, value)
    }

    fn copy(&mut self, dest: Address, src: Address, count: usize) -> Result<(), MemoryError> {
        if self.fail_copies && count > 0 {
            return Err(MemoryError::Unallocated { address: src });
        }
        self.inner.copy(dest, src, count)
    }
}
