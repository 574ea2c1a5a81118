//! Cloth phase configuration.
//!
//! A phase is a group of cloth constraints (one fiber direction) sharing
//! stiffness parameters. Users configure phases in plain fractional
//! form; the iterative solver wants stiffness as a base-2 exponent so
//! each iteration can apply it as a multiplicative decay (`2^x`) without
//! underflowing across many iterations, and wants edge-length limits as
//! `1 - 1/limit` so violation checks become a multiply. [`transform`]
//! converts between the two representations; user configs are never
//! mutated in place.

use crate::error::DynamicsError;
use numeric::{safe_exp2, safe_log2};

/// Per-phase constraint-group parameters.
///
/// The same record type carries both representations: as authored
/// (stiffness a fraction in `[0, 1)`, limits ratios of rest length) and
/// as consumed by the solver after [`transform`].
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PhaseConfig {
    /// Which constraint group this configures.
    pub phase_index: u16,
    pub padding: u16,
    pub stiffness: f32,
    pub stiffness_multiplier: f32,
    pub compression_limit: f32,
    pub stretch_limit: f32,
}

impl PhaseConfig {
    /// Unit stiffness and limits for the given phase.
    #[must_use]
    pub const fn new(phase_index: u16) -> Self {
        Self {
            phase_index,
            padding: 0,
            stiffness: 1.0,
            stiffness_multiplier: 1.0,
            compression_limit: 1.0,
            stretch_limit: 1.0,
        }
    }

    /// Validating constructor for user-supplied values.
    ///
    /// # Errors
    ///
    /// Rejects stiffness outside `[0, 1)`, multipliers outside `[0, 1]`
    /// and non-positive limits, which would otherwise be silently
    /// clamped (or, for a zero limit, saturated) by [`transform`].
    pub fn try_new(
        phase_index: u16,
        stiffness: f32,
        stiffness_multiplier: f32,
        compression_limit: f32,
        stretch_limit: f32,
    ) -> Result<Self, DynamicsError> {
        if !(0.0..1.0).contains(&stiffness) {
            return Err(DynamicsError::InvalidParameter(
                "phase stiffness must be in [0, 1)",
            ));
        }
        if !(0.0..=1.0).contains(&stiffness_multiplier) {
            return Err(DynamicsError::InvalidParameter(
                "phase stiffness multiplier must be in [0, 1]",
            ));
        }
        if compression_limit <= 0.0 || stretch_limit <= 0.0 {
            return Err(DynamicsError::InvalidParameter(
                "phase limits must be positive ratios",
            ));
        }
        Ok(Self {
            phase_index,
            padding: 0,
            stiffness,
            stiffness_multiplier,
            compression_limit,
            stretch_limit,
        })
    }
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self::new(u16::MAX)
    }
}

/// `1 - 1/limit`: negative signals compression, positive stretch.
///
/// A zero limit is a caller error (the reciprocal would be infinite);
/// debug builds assert, release builds saturate to the most negative
/// finite value instead of letting the infinity propagate.
fn limit_ratio(limit: f32) -> f32 {
    debug_assert!(limit > 0.0, "phase limits must be positive ratios");
    if limit > 0.0 {
        1.0 - 1.0 / limit
    } else {
        tracing::warn!(limit, "non-positive phase limit, saturating");
        f32::MIN
    }
}

/// Convert a user-facing phase config into solver form.
///
/// Stiffness values are clamped to `[0, 1]` and stored as
/// `log2(1 - stiffness)` (resp. `log2(multiplier)`); a value clamped to
/// zero maps to the finite [`numeric::LOG2_SENTINEL`] rather than
/// `log2(0)`. Limits become signed `1 - 1/limit` ratios.
#[must_use]
pub fn transform(config: &PhaseConfig) -> PhaseConfig {
    PhaseConfig {
        phase_index: config.phase_index,
        padding: config.padding,
        stiffness: safe_log2((1.0 - config.stiffness).clamp(0.0, 1.0)),
        stiffness_multiplier: safe_log2(config.stiffness_multiplier.clamp(0.0, 1.0)),
        compression_limit: limit_ratio(config.compression_limit),
        stretch_limit: limit_ratio(config.stretch_limit),
    }
}

/// Recover the user-facing values from a solver-form config.
///
/// Inverse of [`transform`] up to the clamps it applies.
#[must_use]
pub fn inverse_transform(solver: &PhaseConfig) -> PhaseConfig {
    PhaseConfig {
        phase_index: solver.phase_index,
        padding: solver.padding,
        stiffness: 1.0 - safe_exp2(solver.stiffness),
        stiffness_multiplier: safe_exp2(solver.stiffness_multiplier),
        compression_limit: 1.0 / (1.0 - solver.compression_limit),
        stretch_limit: 1.0 / (1.0 - solver.stretch_limit),
    }
}
