//! Errors raised at the instance boundary.

use simplex3d_utils::noise::InvalidPermutation;
use thiserror::Error;

/// An error that can occur while building or driving a noise instance.
#[derive(Error, Debug)]
pub enum NoiseError {
    /// A supplied permutation table was rejected.
    #[error("Invalid permutation table: {0}")]
    InvalidPermutation(#[from] InvalidPermutation),
    /// The coordinate and output buffers of a block differ in length.
    #[error("Block length mismatch: x={x} y={y} z={z} out={out}")]
    BlockLengthMismatch {
        /// Length of the x coordinate stream.
        x: usize,
        /// Length of the y coordinate stream.
        y: usize,
        /// Length of the z coordinate stream.
        z: usize,
        /// Length of the output buffer.
        out: usize,
    },
    /// Configuration text could not be parsed.
    #[error("Failed to parse noise config: {0}")]
    Config(#[from] serde_json5::Error),
}
