//! Bucket hashing: intrinsic hash code plus a high-to-low bit spread.

use core::hash::{BuildHasher, Hash, Hasher};

/// Mix the high 16 bits of `h` into the low 16.
///
/// Bucket indices only look at the low bits (`hash & (capacity - 1)`), so
/// without this step keys differing only above the mask would always
/// collide.
#[inline]
pub const fn spread(h: u32) -> u32 {
    h ^ (h >> 16)
}

/// Bucket hash of `key` under `build`. An absent key hashes to 0.
///
/// The intrinsic hash code is the builder's 64-bit hash truncated to
/// 32 bits.
pub fn hash_key<Q, S>(build: &S, key: Option<&Q>) -> u32
where
    Q: ?Sized + Hash,
    S: BuildHasher,
{
    match key {
        None => 0,
        Some(k) => spread(build.hash_one(k) as u32),
    }
}

/// Deterministic polynomial hasher.
///
/// Every write folds into the state as `h = 31 * h + n`; integers fold
/// as a single term and byte slices fold byte by byte. A lone integer key
/// below 2^16 therefore hashes to itself after [`spread`], which makes
/// bucket placement predictable.
#[derive(Clone, Copy, Debug, Default)]
pub struct PolyHasher(u64);

impl PolyHasher {
    #[inline]
    fn fold(&mut self, n: u64) {
        self.0 = self.0.wrapping_mul(31).wrapping_add(n);
    }
}

impl Hasher for PolyHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.fold(b as u64);
        }
    }

    fn write_u8(&mut self, n: u8) {
        self.fold(n as u64);
    }
    fn write_u16(&mut self, n: u16) {
        self.fold(n as u64);
    }
    fn write_u32(&mut self, n: u32) {
        self.fold(n as u64);
    }
    fn write_u64(&mut self, n: u64) {
        self.fold(n);
    }
    fn write_usize(&mut self, n: usize) {
        self.fold(n as u64);
    }
    fn write_i8(&mut self, n: i8) {
        self.fold(n as u64);
    }
    fn write_i16(&mut self, n: i16) {
        self.fold(n as u64);
    }
    fn write_i32(&mut self, n: i32) {
        self.fold(n as u64);
    }
    fn write_i64(&mut self, n: i64) {
        self.fold(n as u64);
    }
    fn write_isize(&mut self, n: isize) {
        self.fold(n as u64);
    }
}

/// `BuildHasher` for [`PolyHasher`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PolyState;

impl BuildHasher for PolyState {
    type Hasher = PolyHasher;
    fn build_hasher(&self) -> Self::Hasher {
        PolyHasher::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: absent keys hash to zero regardless of the builder.
    #[test]
    fn absent_key_hashes_to_zero() {
        assert_eq!(hash_key::<u32, _>(&PolyState, None), 0);
        let rs = std::collections::hash_map::RandomState::new();
        assert_eq!(hash_key::<str, _>(&rs, None), 0);
    }

    /// Invariant: spread XORs the upper half into the lower half and leaves
    /// the upper half unchanged.
    #[test]
    fn spread_mixes_high_bits_down() {
        assert_eq!(spread(0), 0);
        assert_eq!(spread(0x0000_00ff), 0x0000_00ff);
        assert_eq!(spread(0x0001_0000), 0x0001_0001);
        assert_eq!(spread(0xabcd_0000), 0xabcd_abcd);
        assert_eq!(spread(0xffff_ffff) >> 16, 0xffff);
    }

    /// Invariant: small integers hash to themselves under PolyState.
    #[test]
    fn poly_small_integers_are_identity() {
        for k in [0u32, 1, 15, 16, 17, 4095, 65_535] {
            assert_eq!(hash_key(&PolyState, Some(&k)), k);
        }
        assert_eq!(hash_key(&PolyState, Some(&7i32)), 7);
        assert_eq!(hash_key(&PolyState, Some(&7usize)), 7);
    }

    /// Invariant: equal keys hash equally; the hash is a pure function.
    #[test]
    fn equal_keys_hash_equally() {
        let a = String::from("status");
        let b = "status".to_string();
        assert_eq!(hash_key(&PolyState, Some(&a)), hash_key(&PolyState, Some(&b)));
        assert_eq!(
            hash_key(&PolyState, Some(a.as_str())),
            hash_key(&PolyState, Some(&a))
        );

        let rs = std::collections::hash_map::RandomState::new();
        assert_eq!(hash_key(&rs, Some(&a)), hash_key(&rs, Some(&b)));
    }

    /// Invariant: string hashing folds bytes then the `str` terminator.
    #[test]
    fn poly_string_hash_is_polynomial() {
        // "a" = 97, then str's 0xff terminator: 97 * 31 + 255
        assert_eq!(hash_key(&PolyState, Some("a")), 3262);
        assert_eq!(hash_key(&PolyState, Some("b")), 3293);
    }
}
