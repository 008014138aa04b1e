//! The memory store contract consumed by the dynamic array.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::MemoryError;
use crate::id::{Address, Handle};

/// A simulated address space: allocate, release, read, write and copy
/// single-value slots.
///
/// The dynamic array never touches raw storage; every access goes through
/// these five operations. Implementations decide how addresses are laid out.
pub trait MemoryStore {
    /// The value held by one slot.
    type Value: Clone;

    /// Reserve `size` contiguous slots.
    ///
    /// The returned range is disjoint from every other live allocation.
    /// `size == 0` is allowed and yields a handle that owns no slots.
    fn allocate(&mut self, size: usize) -> Result<Handle, MemoryError>;

    /// Release a handle previously returned by [`allocate`](Self::allocate).
    ///
    /// The slots must not be used afterwards.
    fn free(&mut self, handle: Handle) -> Result<(), MemoryError>;

    /// Read the value at a single absolute address.
    fn get(&self, addr: Address) -> Result<Self::Value, MemoryError>;

    /// Write a value to a single absolute address inside a live allocation.
    fn set(&mut self, addr: Address, value: Self::Value) -> Result<(), MemoryError>;

    /// Copy `count` consecutive slots from `src` to `dest`.
    ///
    /// The ranges may overlap. The result must equal copying from a
    /// snapshot of the source range taken before any write.
    fn copy(&mut self, dest: Address, src: Address, count: usize) -> Result<(), MemoryError>;
}

/// A memory store shared by every array allocated from it.
///
/// Arrays hold the store as an explicit dependency instead of reaching for
/// a process-wide singleton. `Rc` keeps the model single-threaded.
pub type SharedStore<S> = Rc<RefCell<S>>;

/// Wrap a store so it can be handed to several arrays.
pub fn shared<S: MemoryStore>(store: S) -> SharedStore<S> {
    Rc::new(RefCell::new(store))
}
