#![cfg(test)]

// Property tests for MapContainer kept inside the crate so the model can
// use the deterministic hasher and compare against bucket-level state.

use crate::hasher::PolyState;
use crate::map_container::MapContainer;
use hashbrown::HashMap;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Put(u32, i32),
    Get(u32),
    GetVerified(u32),
    Delete(u32),
    Iterate,
}

// Keys stay well below 2^16 so PolyState hashes each to itself and the
// model can compute bucket indices directly. A small key range keeps
// collisions frequent.
fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let key = 0u32..200;
    let op = prop_oneof![
        3 => (key.clone(), any::<i32>()).prop_map(|(k, v)| Op::Put(k, v)),
        1 => key.clone().prop_map(Op::Get),
        1 => key.clone().prop_map(Op::GetVerified),
        2 => key.prop_map(Op::Delete),
        1 => Just(Op::Iterate),
    ];
    proptest::collection::vec(op, 1..120)
}

/// Reference model: bucket index -> occupant, plus capacity and count.
struct Model {
    buckets: HashMap<usize, (u32, i32)>,
    capacity: usize,
    count: usize,
}

impl Model {
    fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            capacity: 16,
            count: 0,
        }
    }

    fn index(&self, k: u32) -> usize {
        k as usize & (self.capacity - 1)
    }

    fn put(&mut self, k: u32, v: i32) -> bool {
        let i = self.index(k);
        let same_key = matches!(self.buckets.get(&i), Some(&(kk, _)) if kk == k);
        self.buckets.insert(i, (k, v));
        if same_key {
            return false;
        }
        self.count += 1;
        if self.count as f64 >= 0.75 * self.capacity as f64 {
            self.capacity *= 2;
        }
        true
    }

    fn get(&self, k: u32) -> Option<i32> {
        self.buckets.get(&self.index(k)).map(|&(_, v)| v)
    }

    fn get_verified(&self, k: u32) -> Option<i32> {
        self.buckets
            .get(&self.index(k))
            .filter(|&&(kk, _)| kk == k)
            .map(|&(_, v)| v)
    }

    fn delete(&mut self, k: u32) -> bool {
        let i = self.index(k);
        match self.buckets.get(&i) {
            Some(&(kk, _)) if kk == k => {
                self.buckets.remove(&i);
                self.count -= 1;
                true
            }
            _ => false,
        }
    }

    fn values_in_order(&self) -> Vec<i32> {
        let mut occ: Vec<_> = self.buckets.iter().map(|(&i, &(_, v))| (i, v)).collect();
        occ.sort_unstable_by_key(|&(i, _)| i);
        occ.into_iter().map(|(_, v)| v).collect()
    }
}

// Property: state-machine equivalence against the bucket-level model.
// Invariants exercised across random operation sequences:
// - `put` returns true iff the addressed bucket did not hold an equal key.
// - `get` reads the addressed bucket without key verification;
//   `get_verified` additionally requires equality.
// - `delete` only succeeds on a key-matching occupant; len moves by one.
// - Capacity doubles once per threshold crossing and never shrinks;
//   entries are never relocated by growth.
// - Iteration yields occupied buckets in ascending index order.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(ops in arb_ops()) {
        let mut sut: MapContainer<u32, i32, PolyState> = MapContainer::with_hasher(PolyState);
        let mut model = Model::new();

        for op in ops {
            let cap_before = sut.capacity();
            match op {
                Op::Put(k, v) => {
                    prop_assert_eq!(sut.put(k, v), model.put(k, v));
                }
                Op::Get(k) => {
                    prop_assert_eq!(sut.get(&k).copied(), model.get(k));
                }
                Op::GetVerified(k) => {
                    prop_assert_eq!(sut.get_verified(&k).copied(), model.get_verified(k));
                }
                Op::Delete(k) => {
                    let before = sut.len();
                    let removed = sut.delete(&k);
                    prop_assert_eq!(removed, model.delete(k));
                    prop_assert_eq!(sut.len(), if removed { before - 1 } else { before });
                }
                Op::Iterate => {
                    let seen: Vec<i32> = sut.values().copied().collect();
                    prop_assert_eq!(seen, model.values_in_order());
                }
            }

            // Post-conditions after each op
            prop_assert!(sut.capacity().is_power_of_two());
            prop_assert!(sut.capacity() == cap_before || sut.capacity() == cap_before * 2);
            prop_assert_eq!(sut.capacity(), model.capacity);
            prop_assert_eq!(sut.len(), model.count);
            prop_assert_eq!(sut.occupied_buckets(), model.buckets.len());
            prop_assert!(sut.occupied_buckets() <= sut.len());
        }
    }
}

// Property: with no collisions (distinct buckets, fewer keys than the
// initial threshold), the map behaves like an ordinary map.
proptest! {
    #[test]
    fn prop_distinct_buckets_roundtrip(keys in proptest::collection::btree_set(0u32..16, 0..12)) {
        let mut sut: MapContainer<u32, u32, PolyState> = MapContainer::with_hasher(PolyState);
        for &k in &keys {
            prop_assert!(sut.put(k, k * 10));
        }
        prop_assert_eq!(sut.capacity(), 16);
        for &k in &keys {
            prop_assert_eq!(sut.get(&k), Some(&(k * 10)));
        }
        let seen: Vec<u32> = sut.values().copied().collect();
        let expected: Vec<u32> = keys.iter().map(|k| k * 10).collect();
        prop_assert_eq!(seen, expected);
    }
}
