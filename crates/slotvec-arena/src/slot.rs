//! Per-address slot state.

/// State of one address in the arena.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Slot<V> {
    /// Not part of any live allocation.
    Free,
    /// Allocated, never written.
    Reserved,
    /// Allocated and holding a value.
    Occupied(V),
}

impl<V> Slot<V> {
    pub(crate) fn is_allocated(&self) -> bool {
        !matches!(self, Slot::Free)
    }
}
