//! Pseudo-random sources used to seed noise generators.

pub mod lcg;

/// A source of pseudo-random 32-bit values.
pub trait Random {
    /// Advance the generator and return the next 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Draw a value in `[0, bound)` by plain modulo reduction.
    ///
    /// The reduction is slightly biased toward small values whenever `bound`
    /// does not divide `2^32`. Shuffles built on top of this rely on that
    /// exact reduction for reproducible output.
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    fn next_bounded(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}
