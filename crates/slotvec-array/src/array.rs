//! The dynamic array.

use std::fmt;

use slotvec_core::{Handle, MemoryStore, SharedStore};

use crate::config::{ArrayConfig, PushGrowth};
use crate::error::ArrayError;
use crate::metrics::ArrayMetrics;

/// A growable array whose elements live in a [`MemoryStore`].
///
/// The array tracks `len` (live elements) and `capacity` (slots reserved
/// under its handle) itself; the store only sees allocations and slot
/// traffic. `capacity >= len` holds between operations.
///
/// ```
/// use slotvec_arena::SlotArena;
/// use slotvec_array::DynamicArray;
/// use slotvec_core::shared;
///
/// let store = shared(SlotArena::<i64>::new());
/// let mut arr = DynamicArray::new(store.clone()).unwrap();
/// arr.push(10).unwrap();
/// arr.push(30).unwrap();
/// arr.insert(1, 20).unwrap();
/// assert_eq!(arr.to_vec().unwrap(), vec![10, 20, 30]);
/// arr.destroy().unwrap();
/// assert_eq!(store.borrow().stats().live_allocations, 0);
/// ```
pub struct DynamicArray<S: MemoryStore> {
    store: SharedStore<S>,
    handle: Handle,
    len: usize,
    capacity: usize,
    config: ArrayConfig,
    metrics: ArrayMetrics,
    /// Set once `handle` has been handed back to the store.
    released: bool,
}

impl<S: MemoryStore> DynamicArray<S> {
    /// Create an empty array with the reference configuration.
    ///
    /// Requests a zero-slot allocation so the array always holds a handle.
    pub fn new(store: SharedStore<S>) -> Result<Self, ArrayError> {
        Self::with_config(store, ArrayConfig::new())
    }

    /// Create an empty array with a custom growth configuration.
    pub fn with_config(store: SharedStore<S>, config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        let handle = store.borrow_mut().allocate(0)?;
        Ok(Self {
            store,
            handle,
            len: 0,
            capacity: 0,
            config,
            metrics: ArrayMetrics {
                allocations: 1,
                ..ArrayMetrics::default()
            },
            released: false,
        })
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots reserved under the current handle.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The store range currently backing the array.
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// The growth configuration.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Cumulative store traffic.
    pub fn metrics(&self) -> ArrayMetrics {
        self.metrics
    }

    /// The store this array allocates from.
    pub fn store(&self) -> &SharedStore<S> {
        &self.store
    }

    /// Append `value` at index `len`.
    ///
    /// With [`PushGrowth::Exact`] every call reallocates to `len + 1` and
    /// copies the whole array. On `OutOfMemory` the array is unchanged.
    pub fn push(&mut self, value: S::Value) -> Result<(), ArrayError> {
        match self.config.push_growth {
            PushGrowth::Exact => self.resize(self.len + 1)?,
            PushGrowth::Geometric => {
                if self.len >= self.capacity {
                    self.resize(self.config.geometric_target(self.len))?;
                }
            }
        }
        self.store
            .borrow_mut()
            .set(self.handle.addr(self.len), value)?;
        self.len += 1;
        Ok(())
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<S::Value, ArrayError> {
        self.check_index(index)?;
        Ok(self.store.borrow().get(self.handle.addr(index))?)
    }

    /// Remove and return the last element.
    ///
    /// Capacity is kept for later growth.
    pub fn pop(&mut self) -> Result<S::Value, ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::IndexOutOfBounds { index: 0, len: 0 });
        }
        let value = self.store.borrow().get(self.handle.addr(self.len - 1))?;
        self.len -= 1;
        Ok(value)
    }

    /// Insert `value` before the element at `index`, shifting the tail right.
    ///
    /// `index` must be in `[0, len)`: appending goes through [`push`], so
    /// `insert(len, _)` is an [`ArrayError::IndexOutOfBounds`]. When the
    /// array is full it first grows to `(len + 1) * size_ratio`.
    ///
    /// [`push`]: DynamicArray::push
    pub fn insert(&mut self, index: usize, value: S::Value) -> Result<(), ArrayError> {
        self.check_index(index)?;
        if self.len >= self.capacity {
            self.resize(self.config.geometric_target(self.len))?;
        }
        let shifted = self.len - index;
        {
            let mut store = self.store.borrow_mut();
            store.copy(
                self.handle.addr(index + 1),
                self.handle.addr(index),
                shifted,
            )?;
            store.set(self.handle.addr(index), value)?;
        }
        self.len += 1;
        self.metrics.slots_shifted += shifted as u64;
        Ok(())
    }

    /// Remove the element at `index`, shifting the tail left.
    ///
    /// Capacity is kept.
    pub fn remove(&mut self, index: usize) -> Result<(), ArrayError> {
        self.check_index(index)?;
        let shifted = self.len - index - 1;
        self.store.borrow_mut().copy(
            self.handle.addr(index),
            self.handle.addr(index + 1),
            shifted,
        )?;
        self.len -= 1;
        self.metrics.slots_shifted += shifted as u64;
        Ok(())
    }

    /// Read every live element in order.
    pub fn to_vec(&self) -> Result<Vec<S::Value>, ArrayError> {
        let store = self.store.borrow();
        let mut values = Vec::with_capacity(self.len);
        for i in 0..self.len {
            values.push(store.get(self.handle.addr(i))?);
        }
        Ok(values)
    }

    /// Iterate over the elements, reading each from the store lazily.
    pub fn iter(&self) -> impl Iterator<Item = Result<S::Value, ArrayError>> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }

    /// Release the backing range now and consume the array.
    ///
    /// Dropping the array releases it too, but can only report a failure
    /// on stderr; `destroy` returns it. A drop while the store is borrowed
    /// elsewhere cannot free at all and leaves the range allocated, so
    /// release arrays with `destroy` when guards may be alive.
    pub fn destroy(mut self) -> Result<(), ArrayError> {
        self.released = true;
        self.store.borrow_mut().free(self.handle)?;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Move the live prefix into a fresh range of `target` slots.
    ///
    /// Allocation happens before any state changes, so a failed allocation
    /// leaves the array untouched. The old range is freed only after the
    /// copy succeeded, and the array switches ranges only after that free
    /// succeeded; any failure hands the fresh range back and keeps the old.
    fn resize(&mut self, target: usize) -> Result<(), ArrayError> {
        debug_assert!(target >= self.len);
        let mut store = self.store.borrow_mut();

        let fresh = match store.allocate(target) {
            Ok(handle) => handle,
            Err(e) => {
                self.metrics.failed_allocations += 1;
                return Err(e.into());
            }
        };
        self.metrics.allocations += 1;

        let moved = store
            .copy(fresh.base(), self.handle.base(), self.len)
            .and_then(|()| store.free(self.handle));
        if let Err(e) = moved {
            if store.free(fresh).is_ok() {
                self.metrics.frees += 1;
            }
            return Err(e.into());
        }
        self.metrics.frees += 1;

        self.handle = fresh;
        self.capacity = target;
        self.metrics.resizes += 1;
        self.metrics.slots_copied += self.len as u64;
        Ok(())
    }
}

impl<S: MemoryStore> fmt::Debug for DynamicArray<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("handle", &self.handle)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<S: MemoryStore> Drop for DynamicArray<S> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        // Any outstanding borrow of the store (a `stats()` guard, a panic
        // midway through an operation) blocks the free and leaks the range.
        let Ok(mut store) = self.store.try_borrow_mut() else {
            if cfg!(debug_assertions) {
                eprintln!(
                    "slotvec: dropped array leaked {}: store is borrowed",
                    self.handle
                );
            }
            return;
        };
        if let Err(e) = store.free(self.handle) {
            if cfg!(debug_assertions) {
                eprintln!(
                    "slotvec: dropped array could not release {}: {e}",
                    self.handle
                );
            }
        }
    }
}
