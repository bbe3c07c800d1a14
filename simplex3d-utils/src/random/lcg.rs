//! 32-bit linear congruential generator.
//!
//! Uses the Numerical Recipes constants `a = 1664525`, `c = 1013904223` with
//! modulus `2^32` (implicit through `u32` wraparound).
//!
//! The low-order bits of an LCG with a power-of-two modulus have short periods
//! (bit `n` repeats every `2^(n+1)` steps). This is acceptable for seeding
//! audio-rate noise and is kept as is so that permutation tables stay
//! bit-identical for a given seed.

use crate::random::Random;

/// Linear congruential generator over `u32` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// LCG multiplier.
    pub const MULTIPLIER: u32 = 1_664_525;
    /// LCG increment.
    pub const INCREMENT: u32 = 1_013_904_223;

    /// Create a generator whose first output is `step(seed)`.
    #[must_use]
    pub const fn from_seed(seed: u32) -> Self {
        Self { state: seed }
    }

    /// The current state, which is also the last emitted value.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Compute the successor of `state`: `(a * state + c) mod 2^32`.
    ///
    /// The returned value is both the emitted output and the new state.
    #[inline]
    #[must_use]
    pub const fn step(state: u32) -> u32 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }
}

impl Random for Lcg {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.state = Self::step(self.state);
        self.state
    }
}
