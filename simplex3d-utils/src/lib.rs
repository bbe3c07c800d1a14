//! Leaf primitives for simplex noise generation.
//!
//! - [`math`] - Numeric helpers shared by the noise code
//! - [`random`] - The [`random::Random`] trait and the linear congruential generator
//! - [`noise`] - Permutation tables and the 3D simplex noise evaluator

pub mod math;
pub mod noise;
pub mod random;
