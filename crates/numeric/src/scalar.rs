//! Safe base-2 logarithm/exponential pair.
//!
//! The cloth solver stores sub-unity stiffness fractions in logarithmic
//! form so the per-iteration update can apply them as a multiplicative
//! decay (`exp2` of a pre-scaled exponent) without underflowing across
//! many iterations. A fraction clamped all the way to zero must map to a
//! finite sentinel exponent rather than `log2(0)`.

/// Exponent sentinel standing in for `log2(0)`.
///
/// This is the negated maximum binary exponent of `f32`, so `exp2` of any
/// value at or below it would round to zero anyway.
pub const LOG2_SENTINEL: f32 = -(f32::MAX_EXP as f32);

/// `log2(x)` for positive `x`, [`LOG2_SENTINEL`] otherwise.
#[must_use]
pub fn safe_log2(x: f32) -> f32 {
    if x > 0.0 {
        x.log2()
    } else {
        LOG2_SENTINEL
    }
}

/// Inverse of [`safe_log2`]: exponents at or below the sentinel map to zero.
#[must_use]
pub fn safe_exp2(x: f32) -> f32 {
    if x <= LOG2_SENTINEL {
        0.0
    } else {
        x.exp2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn round_trips_positive_inputs() {
        for x in [1.0e-6_f32, 0.25, 0.5, 0.99, 1.0, 7.5] {
            assert_relative_eq!(safe_exp2(safe_log2(x)), x, max_relative = 1e-6);
        }
    }

    #[test]
    fn zero_maps_to_sentinel_and_back() {
        assert_eq!(safe_log2(0.0), LOG2_SENTINEL);
        assert_eq!(safe_exp2(LOG2_SENTINEL), 0.0);
        assert!(safe_log2(0.0).is_finite());
    }

    #[test]
    fn negative_inputs_hit_the_sentinel_not_nan() {
        assert_eq!(safe_log2(-0.5), LOG2_SENTINEL);
    }
}
