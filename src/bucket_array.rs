//! BucketArray: power-of-two sequence of single-slot buckets.
//!
//! Growth is append-only: `grow` doubles the length by adding empty
//! buckets at the end. Occupied buckets keep their index, so entries
//! placed under the old mask are not redistributed.

use crate::slot::Slot;

pub(crate) struct BucketArray<K, V> {
    buckets: Vec<Option<Slot<K, V>>>,
}

impl<K, V> BucketArray<K, V> {
    /// `capacity` must be a non-zero power of two.
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!(capacity.is_power_of_two());
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        Self { buckets }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Index mask for the current length.
    #[inline]
    pub(crate) fn mask(&self) -> usize {
        self.buckets.len() - 1
    }

    #[inline]
    pub(crate) fn read(&self, index: usize) -> Option<&Slot<K, V>> {
        self.buckets[index].as_ref()
    }

    #[inline]
    pub(crate) fn read_mut(&mut self, index: usize) -> Option<&mut Slot<K, V>> {
        self.buckets[index].as_mut()
    }

    /// Place `slot` at `index`, returning the evicted occupant if any.
    #[inline]
    pub(crate) fn write(&mut self, index: usize, slot: Slot<K, V>) -> Option<Slot<K, V>> {
        self.buckets[index].replace(slot)
    }

    #[inline]
    pub(crate) fn clear(&mut self, index: usize) -> Option<Slot<K, V>> {
        self.buckets[index].take()
    }

    /// Double the length. Existing buckets stay where they are.
    pub(crate) fn grow(&mut self) {
        let new_len = self.buckets.len() * 2;
        self.buckets.resize_with(new_len, || None);
    }

    pub(crate) fn occupied(&self) -> usize {
        self.buckets.iter().filter(|b| b.is_some()).count()
    }

    pub(crate) fn as_slice(&self) -> &[Option<Slot<K, V>>] {
        &self.buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: a new array has the requested length and no occupants.
    #[test]
    fn new_is_empty() {
        let b: BucketArray<u32, u32> = BucketArray::new(16);
        assert_eq!(b.len(), 16);
        assert_eq!(b.mask(), 15);
        assert_eq!(b.occupied(), 0);
        assert!((0..16).all(|i| b.read(i).is_none()));
    }

    /// Invariant: write returns the previous occupant; clear empties the bucket.
    #[test]
    fn write_and_clear_report_previous_occupant() {
        let mut b = BucketArray::new(4);
        assert!(b.write(2, Slot::new("a", 1)).is_none());
        let prev = b.write(2, Slot::new("b", 2)).expect("evicted");
        assert_eq!(prev, Slot::new("a", 1));
        assert_eq!(b.read(2).map(|s| *s.value()), Some(2));
        assert_eq!(b.occupied(), 1);

        b.read_mut(2).expect("occupied").replace_value(7);
        assert_eq!(b.clear(2), Some(Slot::new("b", 7)));
        assert!(b.clear(2).is_none());
        assert_eq!(b.occupied(), 0);
    }

    /// Invariant: grow doubles the length and keeps every occupant at its index.
    #[test]
    fn grow_doubles_without_moving_entries() {
        let mut b = BucketArray::new(4);
        b.write(1, Slot::new(1u32, "one"));
        b.write(3, Slot::new(3u32, "three"));
        b.grow();
        assert_eq!(b.len(), 8);
        assert_eq!(b.mask(), 7);
        assert_eq!(b.read(1).map(|s| *s.key()), Some(1));
        assert_eq!(b.read(3).map(|s| *s.key()), Some(3));
        assert!((4..8).all(|i| b.read(i).is_none()));
        assert_eq!(b.occupied(), 2);
    }
}
