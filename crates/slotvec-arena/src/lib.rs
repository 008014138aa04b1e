//! Slot arena backing store for slotvec.
//!
//! [`SlotArena`] simulates a flat address space of single-value slots and
//! implements the [`MemoryStore`](slotvec_core::MemoryStore) contract that
//! the dynamic array is built on.
//!
//! # Architecture
//!
//! ```text
//! SlotArena<V>
//! ├── Vec<Slot<V>>          (address space; its length is the bump head)
//! ├── IndexMap<Address, len> (live allocations, for free validation)
//! └── FreeList              (sorted, coalesced ranges available for reuse)
//! ```
//!
//! Allocation is first-fit over freed ranges, falling back to bumping the
//! head. Freed ranges that touch the head shrink the address space again.
//! With [`ArenaConfig::reuse_freed`] off the arena is a pure bump allocator
//! and `free` only invalidates slots.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
mod freelist;
mod slot;
pub mod stats;

pub use arena::SlotArena;
pub use config::ArenaConfig;
pub use error::ArenaConfigError;
pub use stats::ArenaStats;
