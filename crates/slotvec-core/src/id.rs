//! Slot addresses and allocation handles.

use std::fmt;

/// Absolute address of a single slot in a memory store.
///
/// Addresses are plain integers into the store's flat address space. They
/// carry no ownership; the store decides whether an address is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub usize);

impl Address {
    /// The address `n` slots past this one.
    ///
    /// # Panics
    ///
    /// Panics if the result overflows `usize`.
    pub fn offset(self, n: usize) -> Self {
        match self.0.checked_add(n) {
            Some(addr) => Self(addr),
            None => panic!("address overflow: {} + {n}", self.0),
        }
    }

    /// Raw slot index.
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl From<usize> for Address {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// A contiguous range of slots returned by
/// [`MemoryStore::allocate`](crate::MemoryStore::allocate).
///
/// The handle encodes enough to address every slot in O(1) and to release
/// the range again. A zero-length handle is valid and owns no slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Handle {
    base: Address,
    len: usize,
}

impl Handle {
    /// Create a handle over `len` slots starting at `base`.
    pub fn new(base: Address, len: usize) -> Self {
        Self { base, len }
    }

    /// First slot of the range.
    pub fn base(&self) -> Address {
        self.base
    }

    /// Number of slots in the range.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this handle owns no slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Absolute address of the slot at `offset` within the range.
    ///
    /// Does not check `offset < len`; callers bounds-check against their
    /// own logical length.
    pub fn addr(&self, offset: usize) -> Address {
        self.base.offset(offset)
    }

    /// One past the last slot of the range.
    pub fn end(&self) -> Address {
        self.base.offset(self.len)
    }

    /// Whether `addr` falls inside this range.
    pub fn contains(&self, addr: Address) -> bool {
        addr >= self.base && addr < self.end()
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle(base={}, len={})", self.base, self.len)
    }
}
