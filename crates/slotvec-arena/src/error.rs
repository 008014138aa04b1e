//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Rejected [`ArenaConfig`](crate::ArenaConfig) values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaConfigError {
    /// `initial_reserve` is larger than the address space limit.
    ReserveExceedsLimit {
        /// Requested up-front reservation, in slots.
        reserve: usize,
        /// Configured `max_slots`.
        max_slots: usize,
    },
}

impl fmt::Display for ArenaConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReserveExceedsLimit { reserve, max_slots } => {
                write!(
                    f,
                    "initial reserve of {reserve} slots exceeds max_slots {max_slots}"
                )
            }
        }
    }
}

impl Error for ArenaConfigError {}
