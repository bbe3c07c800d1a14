//! Instance configuration.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::NoiseError;

/// Settings used to build a [`Simplex3d`](crate::Simplex3d).
///
/// Every field has a default, so an empty object `{}` is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    /// Seed for the permutation table shuffle.
    #[serde(deserialize_with = "deserialize_seed")]
    pub seed: u32,
}

/// Read a seed as a number and accept only whole values in the `u32` range.
///
/// `serde_json5` would otherwise saturate or truncate out-of-range and
/// fractional numbers into a different seed.
fn deserialize_seed<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(de::Error::invalid_value(
            Unexpected::Float(value),
            &"a whole number in 0..=4294967295",
        ))
    }
}

impl NoiseConfig {
    /// Parse a config from JSON5 text.
    pub fn from_json5(text: &str) -> Result<Self, NoiseError> {
        Ok(serde_json5::from_str(text)?)
    }
}
