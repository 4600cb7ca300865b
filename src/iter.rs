//! Forward-only cursor over occupied buckets.

use crate::error::{Error, Result};
use crate::slot::Slot;
use core::iter::FusedIterator;

/// Iterator over the values of a `MapContainer`, in ascending bucket order.
///
/// Borrows the live bucket storage, so the map cannot grow or change
/// while a `Values` exists.
pub struct Values<'a, K, V> {
    buckets: &'a [Option<Slot<K, V>>],
    pos: usize,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(buckets: &'a [Option<Slot<K, V>>]) -> Self {
        Self { buckets, pos: 0 }
    }

    /// Whether another value remains. Moves the cursor over empty buckets
    /// but never past an occupied one, so repeated calls agree.
    pub fn has_next(&mut self) -> bool {
        while let Some(b) = self.buckets.get(self.pos) {
            if b.is_some() {
                return true;
            }
            self.pos += 1;
        }
        false
    }

    /// Next value, or [`Error::Exhausted`] past the last occupied bucket.
    pub fn try_next(&mut self) -> Result<&'a V> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }
        let buckets = self.buckets;
        let slot = buckets[self.pos].as_ref().ok_or(Error::Exhausted)?;
        self.pos += 1;
        Ok(slot.value())
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.buckets.len().saturating_sub(self.pos)))
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets,
            pos: self.pos,
        }
    }
}
