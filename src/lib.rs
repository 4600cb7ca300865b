//! bucket-map: a map over a power-of-two array of single-slot buckets.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, predictable map whose behavior is fully determined
//!   by bucket addressing. Nothing probes, chains, or rehashes.
//! - Layers:
//!   - `hasher`: intrinsic hash code from a `BuildHasher`, truncated to
//!     32 bits and spread (`h ^ (h >> 16)`) so high bits reach the mask.
//!   - `Slot<K, V>`: the one key-value pair a bucket may hold.
//!   - `BucketArray<K, V>`: `Vec<Option<Slot>>` of power-of-two length
//!     with read/write/clear by index and append-only doubling.
//!   - `MapContainer<K, V, S>`: public `put`/`get`/`delete` over the
//!     array plus the entry count that drives growth.
//!   - `Values`: forward cursor over occupied buckets.
//!
//! Addressing
//! - Every operation recomputes `hash(key) & (capacity - 1)` against the
//!   capacity current at that moment.
//! - A bucket holds zero or one entry. A `put` whose key differs from the
//!   occupant's replaces it outright; the evicted entry is dropped.
//! - `get` returns the occupant's value without comparing keys.
//!   `get_verified` is the key-checked variant.
//!
//! Growth
//! - After each new-entry `put`, if `len >= load_factor * capacity` the
//!   array doubles once. Growth appends empty buckets and never moves an
//!   existing entry, so an entry placed under an older mask may sit at
//!   an index its key no longer addresses.
//! - Capacity starts at 16 with load factor 0.75 unless a `MapConfig`
//!   says otherwise; it never shrinks.
//!
//! Counting
//! - `len()` counts successful new-entry puts minus successful deletes.
//!   Evictions are not subtracted, so `len()` may exceed
//!   `occupied_buckets()`.
//!
//! Iteration
//! - `Values` borrows the bucket storage and yields values in ascending
//!   index order. The borrow rules out any mutation, growth included,
//!   while a cursor is alive.
//!
//! Threading
//! - No internal synchronization. Mutation takes `&mut self`; sharing
//!   across threads needs an external lock.
//!
//! Also included
//! - `downtime`: turns a `<status> <timestamp>` log into unavailability
//!   ranges, file to file.

mod bucket_array;
pub mod downtime;
mod error;
pub mod hasher;
mod iter;
mod map_container;
mod map_container_proptest;
mod slot;

// Public surface
pub use error::{Error, Result};
pub use hasher::{PolyHasher, PolyState};
pub use iter::Values;
pub use map_container::{MapConfig, MapContainer, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR};
