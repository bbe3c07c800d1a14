//! Numeric helpers.

/// Floor a float to an `i32`, rounding toward negative infinity.
///
/// Unlike a plain `as` cast, which truncates toward zero, `-0.5` maps to `-1`.
/// Values outside the `i32` range saturate. `NaN` maps to `0`.
#[inline]
#[must_use]
pub const fn floor(value: f64) -> i32 {
    let truncated = value as i32;
    if value < truncated as f64 {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_rounds_toward_negative_infinity() {
        assert_eq!(floor(0.0), 0);
        assert_eq!(floor(-0.0), 0);
        assert_eq!(floor(0.999), 0);
        assert_eq!(floor(1.0), 1);
        assert_eq!(floor(-0.5), -1);
        assert_eq!(floor(-1.0), -1);
        assert_eq!(floor(-1.000_001), -2);
    }

    #[test]
    fn floor_saturates() {
        assert_eq!(floor(1e300), i32::MAX);
        assert_eq!(floor(-1e300), i32::MIN);
        assert_eq!(floor(f64::NAN), 0);
    }
}
