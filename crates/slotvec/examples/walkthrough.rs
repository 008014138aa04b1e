//! slotvec walkthrough: watch a dynamic array drive its memory store.
//!
//! Demonstrates:
//!   1. Building a bounded arena and sharing it
//!   2. Exact push growth (one reallocation per push)
//!   3. Geometric growth on insert, shifting on insert/remove
//!   4. Bounds errors and out-of-memory with the array left intact
//!   5. Releasing the backing range on destroy
//!
//! Run with:
//!   cargo run --example walkthrough

use slotvec::prelude::*;

// ─── Arena parameters ───────────────────────────────────────────

const ARENA_SLOTS: usize = 64;

fn print_state(label: &str, arr: &DynamicArray<SlotArena<i64>>) -> Result<(), ArrayError> {
    println!(
        "{label:<24} len={:<3} cap={:<3} {} {:?}",
        arr.len(),
        arr.capacity(),
        arr.handle(),
        arr.to_vec()?
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = shared(SlotArena::with_config(ArenaConfig::bounded(ARENA_SLOTS))?);
    let mut arr = DynamicArray::new(store.clone())?;
    print_state("new", &arr)?;

    for v in [10, 20, 30] {
        arr.push(v)?;
        print_state(&format!("push({v})"), &arr)?;
    }

    arr.insert(1, 99)?;
    print_state("insert(1, 99)", &arr)?;

    arr.remove(0)?;
    print_state("remove(0)", &arr)?;

    let popped = arr.pop()?;
    print_state(&format!("pop() -> {popped}"), &arr)?;

    match arr.insert(arr.len(), 7) {
        Err(e) => println!("insert at len rejected: {e}"),
        Ok(()) => println!("insert at len unexpectedly accepted"),
    }

    let mut pushes = 0;
    let err = loop {
        match arr.push(pushes) {
            Ok(()) => pushes += 1,
            Err(e) => break e,
        }
    };
    println!("after {pushes} more pushes: {err}");
    print_state("still intact", &arr)?;

    let m = arr.metrics();
    println!(
        "metrics: resizes={} copied={} shifted={} allocs={} frees={} failed={}",
        m.resizes, m.slots_copied, m.slots_shifted, m.allocations, m.frees, m.failed_allocations
    );

    arr.destroy()?;
    let stats = store.borrow().stats();
    println!(
        "arena after destroy: live={} head={} high_water={}",
        stats.live_allocations, stats.head, stats.high_water
    );
    Ok(())
}
