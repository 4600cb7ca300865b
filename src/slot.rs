//! Slot: the key-value record held by one bucket.

/// One key-value pair. A bucket holds at most one `Slot`; there is no
/// chaining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Slot<K, V> {
    key: K,
    value: V,
}

impl<K, V> Slot<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    /// Overwrite the value in place, returning the previous one.
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        core::mem::replace(&mut self.value, value)
    }
}
