//! Seeded permutation tables.

use std::mem;

use thiserror::Error;

use crate::random::Random;
use crate::random::lcg::Lcg;

/// A caller-supplied table was not a permutation of `0..=255`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("permutation table repeats value {value} at index {index}")]
pub struct InvalidPermutation {
    /// The value that appears more than once.
    pub value: u8,
    /// Index of its second occurrence.
    pub index: usize,
}

/// A bijection of `0..=255`, used to decorrelate lattice coordinates.
///
/// Each noise generator owns its own table. It is never mutated after
/// construction, so shared references can be read from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    p: [u8; 256],
}

impl PermutationTable {
    /// Number of entries in the table.
    pub const SIZE: usize = 256;

    /// Build the table for `seed` by shuffling with an [`Lcg`].
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut rng = Lcg::from_seed(seed);
        Self::from_random(&mut rng)
    }

    /// Build a table by Fisher-Yates shuffling the identity permutation.
    ///
    /// Walks from index 255 down to 1, drawing one value per step and
    /// reducing it modulo `i + 1` to pick the swap partner.
    #[must_use]
    pub fn from_random<R: Random>(random: &mut R) -> Self {
        let mut p = [0u8; 256];
        for (i, val) in p.iter_mut().enumerate() {
            *val = i as u8;
        }

        for i in (1..Self::SIZE).rev() {
            let j = random.next_bounded(i as u32 + 1) as usize;
            p.swap(i, j);
        }

        Self { p }
    }

    /// Wrap an existing table after checking that it is a permutation.
    ///
    /// This is the only place a table is validated; lookups assume the
    /// invariant holds.
    pub fn from_array(p: [u8; 256]) -> Result<Self, InvalidPermutation> {
        let mut seen = [false; 256];
        for (index, &value) in p.iter().enumerate() {
            if mem::replace(&mut seen[usize::from(value)], true) {
                return Err(InvalidPermutation { value, index });
            }
        }
        Ok(Self { p })
    }

    /// The raw table entries.
    #[must_use]
    pub const fn as_array(&self) -> &[u8; 256] {
        &self.p
    }

    /// Look up the entry at `index & 0xFF`.
    #[inline]
    #[must_use]
    pub const fn get(&self, index: i32) -> i32 {
        self.p[(index & 0xFF) as usize] as i32
    }

    /// Chain three lookups to hash a lattice corner: `p[i + p[j + p[k]]]`.
    ///
    /// Sums wrap and only their low 8 bits select an entry.
    #[inline]
    #[must_use]
    pub const fn hash3(&self, i: i32, j: i32, k: i32) -> i32 {
        self.get(i.wrapping_add(self.get(j.wrapping_add(self.get(k)))))
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Build the permutation table for `seed`.
#[must_use]
pub fn build_permutation(seed: u32) -> PermutationTable {
    PermutationTable::new(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_permutation(table: &PermutationTable) {
        let mut counts = [0u32; 256];
        for &value in table.as_array() {
            counts[usize::from(value)] += 1;
        }
        assert!(counts.iter().all(|&c| c == 1), "not a permutation: {counts:?}");
    }

    #[test]
    fn test_permutation_is_bijection() {
        for seed in [0, 1, 2, 42, 12345, 0xDEAD_BEEF, u32::MAX] {
            assert_is_permutation(&build_permutation(seed));
        }
        for seed in (0..u32::MAX).step_by(16_777_259) {
            assert_is_permutation(&build_permutation(seed));
        }
    }

    #[test]
    fn test_permutation_deterministic() {
        assert_eq!(build_permutation(42), build_permutation(42));
        assert_eq!(PermutationTable::default(), build_permutation(0));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(build_permutation(0), build_permutation(1));
        assert_ne!(build_permutation(1), build_permutation(2));
    }

    #[test]
    fn test_first_swap_uses_first_lcg_output() {
        // Index 255 swaps with `step(seed) % 256` before anything else moves,
        // and later steps only touch indices below 255.
        let table = build_permutation(0);
        let j = (Lcg::step(0) % 256) as u8;
        assert_eq!(table.as_array()[255], j);
    }

    #[test]
    fn test_from_array_accepts_permutation() {
        let built = build_permutation(9);
        let wrapped = PermutationTable::from_array(*built.as_array());
        assert_eq!(wrapped, Ok(built));
    }

    #[test]
    fn test_from_array_rejects_duplicates() {
        let mut p = [0u8; 256];
        for (i, val) in p.iter_mut().enumerate() {
            *val = i as u8;
        }
        p[200] = 17;
        assert_eq!(
            PermutationTable::from_array(p),
            Err(InvalidPermutation {
                value: 17,
                index: 200
            })
        );

        assert!(PermutationTable::from_array([0u8; 256]).is_err());
    }

    #[test]
    fn test_get_masks_index() {
        let table = build_permutation(3);
        assert_eq!(table.get(256), table.get(0));
        assert_eq!(table.get(-1), table.get(255));
        assert_eq!(table.get(i32::MIN), table.get(0));
        assert_eq!(table.get(i32::MAX), table.get(255));
    }

    #[test]
    fn test_hash3_wraps() {
        let table = build_permutation(5);
        assert_eq!(table.hash3(0, 0, 0), table.hash3(256, -256, 512));
        // Wrapping addition must not panic near the i32 boundary.
        let _ = table.hash3(i32::MAX, i32::MAX, i32::MAX);
        let _ = table.hash3(i32::MIN, i32::MIN, i32::MIN);
    }
}
