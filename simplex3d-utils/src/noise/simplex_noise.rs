//! 3D simplex noise.
//!
//! Samples are built from the four corners of the tetrahedron that encloses the
//! point on the skewed simplex lattice. Each corner contributes a radially
//! attenuated dot product with a pseudo-random gradient picked by hashing the
//! corner's lattice coordinates through the permutation table.

use glam::DVec3;

use crate::math::floor;
use crate::noise::PermutationTable;

/// Skewing factor for 3D simplex: `1/3`
const F3: f64 = 1.0 / 3.0;
/// Unskewing factor for 3D simplex: `1/6`
const G3: f64 = 1.0 / 6.0;
/// Squared radius beyond which a corner contributes nothing.
const FALLOFF_RADIUS_SQ: f64 = 0.6;
/// Keeps the summed contributions roughly inside `[-1, 1]`.
const OUTPUT_SCALE: f64 = 32.0;

/// Simplex noise generator owning its own permutation table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimplexNoise {
    p: PermutationTable,
}

impl SimplexNoise {
    /// Create a noise generator whose table is shuffled from `seed`.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            p: PermutationTable::new(seed),
        }
    }

    /// Create a noise generator over an existing table.
    #[must_use]
    pub const fn from_permutation(p: PermutationTable) -> Self {
        Self { p }
    }

    /// The permutation table backing this generator.
    #[must_use]
    pub const fn permutation(&self) -> &PermutationTable {
        &self.p
    }

    /// Sample 3D simplex noise at the given coordinates.
    ///
    /// Returns a value typically in the range `[-1, 1]` (scaled by 32).
    #[inline]
    #[must_use]
    pub fn get_value_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        evaluate(&self.p, x, y, z)
    }

    /// Sample 3D simplex noise at `pos`.
    #[inline]
    #[must_use]
    pub fn sample(&self, pos: DVec3) -> f64 {
        evaluate(&self.p, pos.x, pos.y, pos.z)
    }
}

/// Select one of the 12 edge gradients from the low 4 bits of `hash` and dot it
/// with `(x, y, z)`.
///
/// Hashes 12..=15 repeat four of the directions so no table is needed.
#[inline]
fn grad(hash: i32, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// Contribution of one simplex corner at offset `(x, y, z)` from the sample.
#[inline]
fn corner_noise(hash: i32, x: f64, y: f64, z: f64) -> f64 {
    let t = FALLOFF_RADIUS_SQ - x * x - y * y - z * z;
    if t < 0.0 {
        0.0
    } else {
        let t = t * t;
        t * t * grad(hash, x, y, z)
    }
}

/// Evaluate 3D simplex noise for `table` at `(xin, yin, zin)`.
///
/// Pure and allocation free. Non-finite coordinates propagate through the
/// arithmetic rather than being rejected.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn evaluate(table: &PermutationTable, xin: f64, yin: f64, zin: f64) -> f64 {
    // Skew the input space to find the enclosing cell
    let s = (xin + yin + zin) * F3;
    let i = floor(xin + s);
    let j = floor(yin + s);
    let k = floor(zin + s);
    let t = (f64::from(i) + f64::from(j) + f64::from(k)) * G3;
    let x0 = xin - (f64::from(i) - t);
    let y0 = yin - (f64::from(j) - t);
    let z0 = zin - (f64::from(k) - t);

    // Determine which simplex tetrahedron we're in
    let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
        if y0 >= z0 {
            (1, 0, 0, 1, 1, 0)
        } else if x0 >= z0 {
            (1, 0, 0, 1, 0, 1)
        } else {
            (0, 0, 1, 1, 0, 1)
        }
    } else if y0 < z0 {
        (0, 0, 1, 0, 1, 1)
    } else if x0 < z0 {
        (0, 1, 0, 0, 1, 1)
    } else {
        (0, 1, 0, 1, 1, 0)
    };

    let x1 = x0 - f64::from(i1) + G3;
    let y1 = y0 - f64::from(j1) + G3;
    let z1 = z0 - f64::from(k1) + G3;
    let x2 = x0 - f64::from(i2) + 2.0 * G3;
    let y2 = y0 - f64::from(j2) + 2.0 * G3;
    let z2 = z0 - f64::from(k2) + 2.0 * G3;
    let x3 = x0 - 1.0 + 3.0 * G3;
    let y3 = y0 - 1.0 + 3.0 * G3;
    let z3 = z0 - 1.0 + 3.0 * G3;

    let gi0 = table.hash3(i, j, k);
    let gi1 = table.hash3(i.wrapping_add(i1), j.wrapping_add(j1), k.wrapping_add(k1));
    let gi2 = table.hash3(i.wrapping_add(i2), j.wrapping_add(j2), k.wrapping_add(k2));
    let gi3 = table.hash3(i.wrapping_add(1), j.wrapping_add(1), k.wrapping_add(1));

    let n0 = corner_noise(gi0, x0, y0, z0);
    let n1 = corner_noise(gi1, x1, y1, z1);
    let n2 = corner_noise(gi2, x2, y2, z2);
    let n3 = corner_noise(gi3, x3, y3, z3);

    OUTPUT_SCALE * (n0 + n1 + n2 + n3)
}
