//! Arena configuration parameters.

use crate::error::ArenaConfigError;

/// Configuration for [`SlotArena`](crate::SlotArena).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Upper bound on the address space, in slots.
    ///
    /// `None` (the default) models an unbounded store. Allocations that
    /// would push the bump head past the limit fail with `OutOfMemory`.
    pub max_slots: Option<usize>,

    /// Whether freed ranges are handed out again.
    ///
    /// When `false`, `free` only invalidates the slots and every address
    /// is handed out at most once.
    pub reuse_freed: bool,

    /// Slots of backing storage to reserve up front.
    ///
    /// Only affects the host allocation behind the arena, never which
    /// addresses are live.
    pub initial_reserve: usize,
}

impl ArenaConfig {
    /// Address space size used by [`ArenaConfig::bounded_default`].
    pub const DEFAULT_BOUNDED_SLOTS: usize = 1024;

    /// Default up-front reservation.
    pub const DEFAULT_INITIAL_RESERVE: usize = 0;

    /// An unbounded arena that reuses freed ranges.
    pub fn new() -> Self {
        Self {
            max_slots: None,
            reuse_freed: true,
            initial_reserve: Self::DEFAULT_INITIAL_RESERVE,
        }
    }

    /// An arena limited to `max_slots` addresses.
    pub fn bounded(max_slots: usize) -> Self {
        Self {
            max_slots: Some(max_slots),
            ..Self::new()
        }
    }

    /// An arena with [`DEFAULT_BOUNDED_SLOTS`](Self::DEFAULT_BOUNDED_SLOTS)
    /// addresses, reserved up front.
    pub fn bounded_default() -> Self {
        Self {
            initial_reserve: Self::DEFAULT_BOUNDED_SLOTS,
            ..Self::bounded(Self::DEFAULT_BOUNDED_SLOTS)
        }
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ArenaConfigError> {
        if let Some(max_slots) = self.max_slots {
            if self.initial_reserve > max_slots {
                return Err(ArenaConfigError::ReserveExceedsLimit {
                    reserve: self.initial_reserve,
                    max_slots,
                });
            }
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
