//! Solver-facing constraint records.
//!
//! These are `#[repr(C)]` POD so the external solver can batch them into
//! flat buffers without translation.

use glam::Vec3;
use std::ops::{BitOr, BitOrAssign};

/// Behavior flags on a [`ConstraintRow`].
#[repr(transparent)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct RowFlags(u32);

impl RowFlags {
    pub const NONE: Self = Self(0);
    /// The solver writes the applied impulse back for force reporting
    /// (joints are breakable, so forces are always requested).
    pub const OUTPUT_FORCE: Self = Self(1);
    /// Soft constraint: drive toward the target with the row's
    /// stiffness/damping instead of enforcing it rigidly.
    pub const SPRING: Self = Self(1 << 1);

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for RowFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RowFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// One scalar constraint between two bodies.
///
/// `linear0`/`angular0` are body A's Jacobian, `linear1`/`angular1`
/// body B's; body B's terms carry the opposite sign so each pair is the
/// body's actual Jacobian, not a shared direction with an implicit
/// flip. Rows are rebuilt from current transforms every step and never
/// persisted.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ConstraintRow {
    pub linear0: Vec3,
    /// Signed positional violation the solver drives to zero.
    pub geometric_error: f32,
    pub angular0: Vec3,
    pub velocity_target: f32,
    pub linear1: Vec3,
    pub min_impulse: f32,
    pub angular1: Vec3,
    pub max_impulse: f32,
    pub spring_stiffness: f32,
    pub spring_damping: f32,
    pub flags: RowFlags,
    pub padding: u32,
}

impl ConstraintRow {
    /// An unbounded hard row along `linear0 = linear1 = 0`.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            linear0: Vec3::ZERO,
            geometric_error: 0.0,
            angular0: Vec3::ZERO,
            velocity_target: 0.0,
            linear1: Vec3::ZERO,
            min_impulse: -f32::MAX,
            angular1: Vec3::ZERO,
            max_impulse: f32::MAX,
            spring_stiffness: 0.0,
            spring_damping: 0.0,
            flags: RowFlags::NONE,
            padding: 0,
        }
    }
}
