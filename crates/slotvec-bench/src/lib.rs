//! Benchmark fixtures for slotvec.
//!
//! - [`filled_array`]: an array of `0..n` over a fresh unbounded arena
//! - [`fresh_arena`]: an empty shared arena

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use slotvec_arena::SlotArena;
use slotvec_array::{ArrayConfig, ArrayError, DynamicArray};
use slotvec_core::{shared, SharedStore};

/// An empty, unbounded shared arena.
pub fn fresh_arena() -> SharedStore<SlotArena<i64>> {
    shared(SlotArena::new())
}

/// An array holding `0..n`, built with `config`.
pub fn filled_array(
    n: usize,
    config: ArrayConfig,
) -> Result<DynamicArray<SlotArena<i64>>, ArrayError> {
    let mut arr = DynamicArray::with_config(fresh_arena(), config)?;
    for i in 0..n as i64 {
        arr.push(i)?;
    }
    Ok(arr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_array_holds_range() {
        let arr = filled_array(5, ArrayConfig::geometric()).unwrap();
        assert_eq!(arr.to_vec().unwrap(), vec![0, 1, 2, 3, 4]);
    }
}
