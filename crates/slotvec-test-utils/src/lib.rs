//! Test utilities and mock types for slotvec development.
//!
//! Provides [`MockMemoryStore`], a `HashMap`-backed [`MemoryStore`] that
//! records every call it receives, and the fault-injecting wrapper in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::RefCell;
use std::collections::HashMap;

use slotvec_core::{Address, Handle, MemoryError, MemoryStore};

pub use fixtures::FaultyStore;

/// One call observed by [`MockMemoryStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreCall {
    Allocate { size: usize },
    Free { handle: Handle },
    Get { addr: Address },
    Set { addr: Address },
    Copy { dest: Address, src: Address, count: usize },
}

/// Mock implementation of [`MemoryStore`].
///
/// Addresses are bump-allocated and never reused, so a stale handle can
/// never alias a fresh one. Inspect the call log with
/// [`calls`](MockMemoryStore::calls) to assert on ordering.
pub struct MockMemoryStore<V> {
    cells: HashMap<Address, V>,
    live: HashMap<Address, usize>,
    next: usize,
    calls: RefCell<Vec<StoreCall>>,
}

impl<V: Clone> MockMemoryStore<V> {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
            live: HashMap::new(),
            next: 0,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.borrow().clone()
    }

    /// Forget the call log.
    pub fn clear_calls(&mut self) {
        self.calls.get_mut().clear();
    }

    /// Number of live non-empty allocations.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Raw cell contents, bypassing the call log.
    pub fn peek(&self, addr: Address) -> Option<&V> {
        self.cells.get(&addr)
    }

    fn record(&self, call: StoreCall) {
        self.calls.borrow_mut().push(call);
    }

    fn is_allocated(&self, addr: Address) -> bool {
        self.live
            .iter()
            .any(|(&base, &len)| Handle::new(base, len).contains(addr))
    }

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

impl<V: Clone> Default for MockMemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> MemoryStore for MockMemoryStore<V> {
    type Value = V;

    fn allocate(&mut self, size: usize) -> Result<Handle, MemoryError> {
        self.record(StoreCall::Allocate { size });
        let base = Address(self.next);
        self.next += size;
        if size > 0 {
            self.live.insert(base, size);
        }
        Ok(Handle::new(base, size))
    }

    fn free(&mut self, handle: Handle) -> Result<(), MemoryError> {
        self.record(StoreCall::Free { handle });
        if handle.is_empty() {
            return Ok(());
        }
        if self.live.get(&handle.base()) != Some(&handle.len()) {
            return Err(MemoryError::InvalidFree {
                address: handle.base(),
            });
        }
        self.live.remove(&handle.base());
        for i in 0..handle.len() {
            self.cells.remove(&handle.addr(i));
        }
        Ok(())
    }

    fn get(&self, addr: Address) -> Result<V, MemoryError> {
        self.record(StoreCall::Get { addr });
        match self.cells.get(&addr) {
            Some(v) => Ok(v.clone()),
            None if self.is_allocated(addr) => Err(MemoryError::Uninitialized { address: addr }),
            None => Err(MemoryError::Unallocated { address: addr }),
        }
    }

    fn set(&mut self, addr: Address, value: V) -> Result<(), MemoryError> {
        self.record(StoreCall::Set { addr });
        if !self.is_allocated(addr) {
            return Err(MemoryError::Unallocated { address: addr });
        }
        self.cells.insert(addr, value);
        Ok(())
    }

    fn copy(&mut self, dest: Address, src: Address, count: usize) -> Result<(), MemoryError> {
        self.record(StoreCall::Copy { dest, src, count });
        self.check_range(src, count)?;
        self.check_range(dest, count)?;
        let staged: Vec<Option<V>> = (0..count)
            .map(|i| self.cells.get(&src.offset(i)).cloned())
            .collect();
        for (i, value) in staged.into_iter().enumerate() {
            let addr = dest.offset(i);
            match value {
                Some(v) => {
                    self.cells.insert(addr, v);
                }
                None => {
                    self.cells.remove(&addr);
                }
            }
        }
        Ok(())
    }
}
