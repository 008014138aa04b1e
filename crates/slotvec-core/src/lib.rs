//! Core types and traits for slotvec.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the arena and the dynamic array: slot addresses,
//! allocation handles, the [`MemoryStore`] contract and its error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::MemoryError;
pub use id::{Address, Handle};
pub use traits::{shared, MemoryStore, SharedStore};
