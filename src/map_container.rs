//! MapContainer: single-slot bucket map with append-only growth.

use crate::bucket_array::BucketArray;
use crate::error::{Error, Result};
use crate::hasher::hash_key;
use crate::iter::Values;
use crate::slot::Slot;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_map::DefaultHashBuilder;

/// Initial bucket count.
pub const DEFAULT_CAPACITY: usize = 1 << 4;

/// Fill ratio at which the bucket array doubles.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Sizing parameters for a [`MapContainer`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MapConfig {
    /// Starting bucket count; a non-zero power of two.
    pub initial_capacity: usize,
    /// Growth threshold as `entries / capacity`; in `(0, 1]`.
    pub load_factor: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl MapConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.initial_capacity.is_power_of_two() {
            return Err(Error::InvalidCapacity {
                capacity: self.initial_capacity,
            });
        }
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(Error::InvalidLoadFactor {
                load_factor: self.load_factor,
            });
        }
        Ok(())
    }
}

/// Map over a power-of-two array of single-slot buckets.
///
/// A key addresses bucket `hash(key) & (capacity - 1)` under the capacity
/// current at the time of the call. Each bucket holds at most one entry:
///
/// - `put` of a key that differs from the occupant replaces it; the old
///   entry is dropped and `len` is not adjusted for it.
/// - `get` returns whatever occupies the addressed bucket without
///   comparing keys. Use [`get_verified`](Self::get_verified) to require
///   a key match.
/// - Growth doubles the bucket count without rehashing. Entries stay at
///   the index they were placed at, which may no longer be the index
///   their key addresses.
///
/// All mutation takes `&mut self`; sharing across threads needs external
/// synchronization such as a `Mutex`.
pub struct MapContainer<K, V, S = DefaultHashBuilder> {
    hasher: S,
    buckets: BucketArray<K, V>,
    entry_count: usize,
    load_factor: f64,
}

impl<K, V> MapContainer<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<K, V> Default for MapContainer<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> MapContainer<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::from_parts(MapConfig::default(), hasher)
    }

    /// Build with explicit sizing. Fails if `config` does not validate.
    pub fn with_config(config: MapConfig, hasher: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, hasher))
    }

    fn from_parts(config: MapConfig, hasher: S) -> Self {
        Self {
            hasher,
            buckets: BucketArray::new(config.initial_capacity),
            entry_count: 0,
            load_factor: config.load_factor,
        }
    }

    #[inline]
    fn index_of<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        hash_key(&self.hasher, Some(key)) as usize & self.buckets.mask()
    }

    /// Entries counted by successful new-entry `put`s minus successful
    /// `delete`s. Evictions by colliding puts are not subtracted, so this
    /// can exceed [`occupied_buckets`](Self::occupied_buckets).
    pub fn len(&self) -> usize {
        self.entry_count
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Current bucket count. Always a power of two; never shrinks.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of buckets that currently hold an entry. O(capacity).
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.occupied()
    }

    /// Insert or update.
    ///
    /// Returns `false` when the addressed bucket already holds `key`; its
    /// value is overwritten in place. Otherwise the entry takes the
    /// bucket, evicting any different-key occupant, the count grows by
    /// one, the growth check runs, and `true` is returned.
    pub fn put(&mut self, key: K, value: V) -> bool {
        let index = self.index_of(&key);
        if let Some(slot) = self.buckets.read_mut(index) {
            if *slot.key() == key {
                slot.replace_value(value);
                return false;
            }
        }
        if self.buckets.write(index, Slot::new(key, value)).is_some() {
            tracing::trace!(index, "put evicted a different-key occupant");
        }
        self.entry_count += 1;
        self.grow_if_needed();
        true
    }

    fn grow_if_needed(&mut self) {
        let capacity = self.buckets.len();
        if self.entry_count as f64 >= self.load_factor * capacity as f64 {
            self.buckets.grow();
            tracing::debug!(
                from = capacity,
                to = self.buckets.len(),
                entries = self.entry_count,
                "bucket array grown"
            );
        }
    }

    /// Value in the bucket `key` addresses, whichever key occupies it.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.buckets.read(self.index_of(key)).map(Slot::value)
    }

    /// Like [`get`](Self::get), but `None` unless the occupant's key equals `key`.
    pub fn get_verified<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.buckets
            .read(self.index_of(key))
            .filter(|slot| slot.key().borrow() == key)
            .map(Slot::value)
    }

    /// Remove the entry for `key` if it occupies the bucket `key`
    /// addresses. A different-key occupant is left in place.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let index = self.index_of(key);
        match self.buckets.read(index) {
            Some(slot) if slot.key().borrow() == key => {
                self.buckets.clear(index);
                self.entry_count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Values in ascending bucket order.
    ///
    /// The iterator borrows the map, so no `put` (and therefore no growth)
    /// or `delete` can happen while it is alive:
    ///
    /// ```compile_fail
    /// use bucket_map::MapContainer;
    ///
    /// let mut m: MapContainer<u32, u32> = MapContainer::new();
    /// m.put(1, 10);
    /// let mut it = m.values();
    /// m.put(2, 20);
    /// it.next();
    /// ```
    ///
    /// Once the iterator is dropped the map is free to change again:
    ///
    /// ```
    /// use bucket_map::MapContainer;
    ///
    /// let mut m: MapContainer<u32, u32> = MapContainer::new();
    /// m.put(1, 10);
    /// assert_eq!(m.values().count(), 1);
    /// assert!(m.delete(&1));
    /// assert_eq!(m.values().next(), None);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.buckets.as_slice())
    }

    /// Alias for [`values`](Self::values).
    pub fn iter(&self) -> Values<'_, K, V> {
        self.values()
    }
}

impl<'a, K, V, S> IntoIterator for &'a MapContainer<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = &'a V;
    type IntoIter = Values<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}

impl<K, V, S> fmt::Debug for MapContainer<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .buckets
            .as_slice()
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.as_ref().map(|s| (i, (s.key(), s.value()))));
        f.debug_struct("MapContainer")
            .field("len", &self.entry_count)
            .field("capacity", &self.buckets.len())
            .field("buckets", &DebugBuckets(entries))
            .finish()
    }
}

struct DebugBuckets<I>(I);

impl<I, T> fmt::Debug for DebugBuckets<I>
where
    I: Iterator<Item = T> + Clone,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
