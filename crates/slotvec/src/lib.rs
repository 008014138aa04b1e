//! slotvec: a dynamic array built on an explicit, simulated memory store.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the slotvec sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use slotvec::prelude::*;
//!
//! let store = shared(SlotArena::<i64>::new());
//! let mut arr = DynamicArray::new(store.clone()).unwrap();
//! arr.push(10).unwrap();
//! arr.push(20).unwrap();
//! arr.push(30).unwrap();
//! arr.insert(1, 99).unwrap();
//! arr.remove(0).unwrap();
//! assert_eq!(arr.pop(), Ok(30));
//! assert_eq!(arr.to_vec().unwrap(), vec![99, 20]);
//!
//! assert!(matches!(arr.get(5), Err(ArrayError::IndexOutOfBounds { .. })));
//!
//! drop(arr);
//! assert_eq!(store.borrow().stats().live_allocations, 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `slotvec-core` | `Address`, `Handle`, `MemoryStore`, `MemoryError` |
//! | [`arena`] | `slotvec-arena` | `SlotArena`, `ArenaConfig`, `ArenaStats` |
//! | [`array`] | `slotvec-array` | `DynamicArray`, `ArrayConfig`, `ArrayMetrics`, `ArrayError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Addresses, handles and the memory store contract (`slotvec-core`).
pub use slotvec_core as types;

/// The slot arena memory store (`slotvec-arena`).
pub use slotvec_arena as arena;

/// The dynamic array (`slotvec-array`).
///
/// [`array::DynamicArray`] works over any [`types::MemoryStore`], not only
/// [`arena::SlotArena`].
pub use slotvec_array as array;

/// Common imports for typical slotvec usage.
///
/// ```rust
/// use slotvec::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use slotvec_core::{shared, Address, Handle, MemoryStore, SharedStore};

    // Store
    pub use slotvec_arena::{ArenaConfig, ArenaStats, SlotArena};

    // Array
    pub use slotvec_array::{ArrayConfig, ArrayMetrics, DynamicArray, PushGrowth, SIZE_RATIO};

    // Errors
    pub use slotvec_array::ArrayError;
    pub use slotvec_core::MemoryError;
}
