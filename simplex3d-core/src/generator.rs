//! The noise instance handed to hosts.

use simplex3d_utils::noise::{PermutationTable, SimplexNoise};

use crate::config::NoiseConfig;
use crate::error::NoiseError;

/// One noise generator: a private permutation table plus the evaluator.
///
/// The table is fixed at construction. Evaluation only reads it, so a shared
/// `&Simplex3d` can be sampled from several threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simplex3d {
    noise: SimplexNoise,
    /// `None` when the table was supplied directly instead of shuffled.
    seed: Option<u32>,
}

impl Simplex3d {
    /// Create an instance whose table is shuffled from `seed`.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        log::debug!("Building simplex noise instance with seed {seed}");
        Self {
            noise: SimplexNoise::new(seed),
            seed: Some(seed),
        }
    }

    /// Create an instance from a parsed [`NoiseConfig`].
    #[must_use]
    pub fn from_config(config: &NoiseConfig) -> Self {
        Self::new(config.seed)
    }

    /// Create an instance over a caller-supplied table.
    ///
    /// The table is checked once here; evaluation trusts it afterwards.
    pub fn from_permutation(table: [u8; 256]) -> Result<Self, NoiseError> {
        let p = PermutationTable::from_array(table)?;
        log::debug!("Building simplex noise instance from a supplied table");
        Ok(Self {
            noise: SimplexNoise::from_permutation(p),
            seed: None,
        })
    }

    /// The seed this instance was shuffled from, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u32> {
        self.seed
    }

    /// The underlying noise generator.
    #[must_use]
    pub const fn noise(&self) -> &SimplexNoise {
        &self.noise
    }

    /// Compute the noise value for one frame.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise.get_value_3d(x, y, z)
    }

    /// Fill `out` with one noise value per frame of the three coordinate streams.
    ///
    /// All four slices must have the same length. On mismatch nothing is
    /// written. Samples are widened to `f64` for evaluation and narrowed back
    /// on output.
    #[tracing::instrument(level = "trace", skip_all, fields(frames = out.len()))]
    pub fn process_block(
        &self,
        xs: &[f32],
        ys: &[f32],
        zs: &[f32],
        out: &mut [f32],
    ) -> Result<(), NoiseError> {
        let frames = out.len();
        if xs.len() != frames || ys.len() != frames || zs.len() != frames {
            return Err(NoiseError::BlockLengthMismatch {
                x: xs.len(),
                y: ys.len(),
                z: zs.len(),
                out: frames,
            });
        }

        for (((sample, &x), &y), &z) in out.iter_mut().zip(xs).zip(ys).zip(zs) {
            *sample = self.evaluate(f64::from(x), f64::from(y), f64::from(z)) as f32;
        }
        Ok(())
    }
}

impl Default for Simplex3d {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Create a noise instance for `seed`. Hosts without a seed of their own pass `0`.
#[must_use]
pub fn create_instance(seed: u32) -> Simplex3d {
    Simplex3d::new(seed)
}
