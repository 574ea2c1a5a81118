//! Distance joint solver prep.
//!
//! A distance joint keeps the separation of two anchor points inside a
//! `[min, max]` interval. Each step it emits either nothing (separation
//! inside the interval) or exactly one row along the anchor-to-anchor
//! direction.

use crate::pose::Pose;
use crate::types::{ConstraintRow, RowFlags};
use glam::Vec3;
use std::ops::{BitOr, BitOrAssign};

/// Below this separation the joint direction is degenerate.
const DISTANCE_EPSILON: f32 = 1.0e-4;

/// Which parts of the distance interval are enforced.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DistanceJointFlags(u8);

impl DistanceJointFlags {
    pub const NONE: Self = Self(0);
    pub const MAX_DISTANCE_ENABLED: Self = Self(1);
    pub const MIN_DISTANCE_ENABLED: Self = Self(1 << 1);
    pub const SPRING_ENABLED: Self = Self(1 << 2);

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for DistanceJointFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DistanceJointFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// User-facing distance joint state, read fresh each step.
#[derive(Copy, Clone, Debug)]
pub struct DistanceJointConfig {
    /// Anchor frame in body A's space.
    pub local_frame_a: Pose,
    /// Anchor frame in body B's space.
    pub local_frame_b: Pose,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Dead band subtracted from the violation so the constraint does
    /// not fight floating-point jitter right at the limit.
    pub tolerance: f32,
    pub stiffness: f32,
    pub damping: f32,
    pub flags: DistanceJointFlags,
}

impl Default for DistanceJointConfig {
    fn default() -> Self {
        Self {
            local_frame_a: Pose::IDENTITY,
            local_frame_b: Pose::IDENTITY,
            min_distance: 0.0,
            max_distance: 0.0,
            tolerance: 0.025,
            stiffness: 0.0,
            damping: 0.0,
            flags: DistanceJointFlags::MAX_DISTANCE_ENABLED,
        }
    }
}

/// Build the step's constraint row for a distance joint, if any.
///
/// Returns `None` while the separation sits inside the enforced
/// interval (the joint is slack), otherwise exactly one row:
///
/// - the row direction is the normalized anchor-to-anchor vector, with
///   a fixed +X fallback when the anchors coincide;
/// - with both limits enforced and equal (a rigid rod) the signed error
///   is used directly, reduced by `tolerance` toward zero, and nothing
///   is emitted while the violation sits inside the dead band;
/// - with only one side violated, the opposing impulse bound is capped
///   at zero so the row pushes in one direction only;
/// - with the spring flag set, the row carries stiffness/damping and
///   the solver treats it as soft.
///
/// A config whose flags enforce neither limit never emits a row, even
/// with the spring flag set. That silent fall-through matches the
/// long-standing behavior of the interval test; callers relying on a
/// pure spring get nothing.
#[must_use]
pub fn prepare_distance_constraint(
    joint: &DistanceJointConfig,
    body_a: &Pose,
    body_b: &Pose,
) -> Option<ConstraintRow> {
    let anchor_a = body_a.transform(&joint.local_frame_a).translation;
    let anchor_b = body_b.transform(&joint.local_frame_b).translation;

    let mut direction = anchor_a - anchor_b;
    let distance = direction.length();
    if distance < DISTANCE_EPSILON {
        tracing::debug!(distance, "coincident distance joint anchors, using +X");
        direction = Vec3::X;
    } else {
        direction /= distance;
    }

    let enforce_max = joint.flags.contains(DistanceJointFlags::MAX_DISTANCE_ENABLED);
    let enforce_min = joint.flags.contains(DistanceJointFlags::MIN_DISTANCE_ENABLED);

    if (!enforce_max || distance <= joint.max_distance)
        && (!enforce_min || distance >= joint.min_distance)
    {
        return None;
    }

    let mut row = ConstraintRow {
        linear0: direction,
        angular0: (anchor_a - body_a.translation).cross(direction),
        linear1: -direction,
        angular1: (anchor_b - body_b.translation).cross(-direction),
        flags: RowFlags::OUTPUT_FORCE,
        ..ConstraintRow::unbounded()
    };

    if joint.flags.contains(DistanceJointFlags::SPRING_ENABLED) {
        row.flags |= RowFlags::SPRING;
        row.spring_stiffness = joint.stiffness;
        row.spring_damping = joint.damping;
    }

    #[allow(clippy::float_cmp)]
    let rigid_rod = enforce_min && enforce_max && joint.min_distance == joint.max_distance;
    if rigid_rod {
        let error = distance - joint.max_distance;
        if error.abs() <= joint.tolerance {
            // Inside the dead band a rigid rod has nothing to correct.
            return None;
        }
        row.geometric_error = if error > 0.0 {
            error - joint.tolerance
        } else {
            error + joint.tolerance
        };
    } else if enforce_max && distance > joint.max_distance {
        row.geometric_error = distance - joint.max_distance - joint.tolerance;
        row.max_impulse = 0.0;
    } else if enforce_min && distance < joint.min_distance {
        row.geometric_error = distance - joint.min_distance + joint.tolerance;
        row.min_impulse = 0.0;
    }

    Some(row)
}
