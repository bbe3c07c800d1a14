//! Noise generation primitives.
//!
//! - [`PermutationTable`] - Seeded 256-entry permutation used to hash lattice coordinates
//! - [`SimplexNoise`] - 3D simplex noise over a permutation table

mod permutation;
mod simplex_noise;

pub use permutation::{InvalidPermutation, PermutationTable, build_permutation};
pub use simplex_noise::{SimplexNoise, evaluate};
