//! A dynamic array that lives in a simulated memory store.
//!
//! [`DynamicArray`] keeps only a length, a capacity and one [`Handle`]
//! into a [`MemoryStore`]. Every read, write, shift and reallocation is a
//! store call, which makes the mechanics of a growable vector visible:
//!
//! - **push**: reallocate (see [`PushGrowth`]), write at `len`, bump `len`.
//! - **insert**: grow by [`SIZE_RATIO`] when full, shift the tail right with
//!   one range copy, write the value.
//! - **remove**: shift the tail left with one range copy.
//! - **resize**: allocate, copy the live prefix, then free the old range.
//!
//! The array owns its handle and releases it on [`DynamicArray::destroy`]
//! or when dropped.
//!
//! [`Handle`]: slotvec_core::Handle
//! [`MemoryStore`]: slotvec_core::MemoryStore

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod metrics;

pub use array::DynamicArray;
pub use config::{ArrayConfig, PushGrowth, SIZE_RATIO};
pub use error::{ArrayConfigError, ArrayError};
pub use metrics::ArrayMetrics;
