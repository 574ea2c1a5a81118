//! Articulation joint core state.
//!
//! Persistent per-joint state for an articulation link pair: local
//! attachment frames, drive targets and the swing/twist limit model.
//! The limit solver parameterizes angular limits through quaternion
//! tangents, so alongside each raw angle the core caches
//! `tan(angle / 4)`. The quarter-angle form (not the half angle) is what
//! the quaternion-tangent parameterization needs: the swing/twist
//! decomposition already works on half-angle quaternion components, and
//! halving again linearizes the limit surface near the identity. Every
//! setter that touches an angular bound refreshes its cache in the same
//! call; a stale cache is a correctness bug, not a performance issue.

use crate::pose::Pose;
use glam::{Quat, Vec3};
use std::f32::consts::FRAC_PI_4;

/// How the joint drive interprets its target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DriveType {
    /// Drive toward the target orientation/velocity.
    #[default]
    Target,
    /// Drive on the orientation error directly.
    Error,
    /// Drive disabled.
    None,
}

const DEFAULT_CONTACT_DISTANCE: f32 = 0.05;

#[inline]
fn tan_quarter(angle: f32) -> f32 {
    (angle * 0.25).tan()
}

/// Mutable per-joint record owned by the simulation thread.
///
/// Created when an articulation link pair is joined; dropping it while
/// still attached to a live simulation binding is a lifetime bug and
/// asserts in debug builds.
#[derive(Clone, Debug)]
pub struct ArticulationJointCore {
    /// Joint frame in the parent link's space.
    pub parent_pose: Pose,
    /// Joint frame in the child link's space.
    pub child_pose: Pose,

    // drive model
    pub target_orientation: Quat,
    pub target_velocity: Vec3,
    pub drive_type: DriveType,
    pub spring: f32,
    pub damping: f32,
    pub internal_compliance: f32,
    pub external_compliance: f32,
    pub tangential_stiffness: f32,
    pub tangential_damping: f32,

    // limit model; angles are private so the tangent caches cannot go stale
    pub swing_limited: bool,
    pub twist_limited: bool,
    swing_y_limit: f32,
    swing_z_limit: f32,
    swing_limit_contact_distance: f32,
    twist_limit_low: f32,
    twist_limit_high: f32,
    twist_limit_contact_distance: f32,

    tan_q_swing_y: f32,
    tan_q_swing_z: f32,
    tan_q_swing_pad: f32,
    tan_q_twist_high: f32,
    tan_q_twist_low: f32,
    tan_q_twist_pad: f32,

    attached: bool,
}

impl ArticulationJointCore {
    /// A joint between the given local frames, with the default limit
    /// model: swing cone of pi/4 on both axes, twist in [-pi/4, pi/4],
    /// both disabled, contact distance 0.05.
    #[must_use]
    pub fn new(parent_pose: Pose, child_pose: Pose) -> Self {
        let swing = FRAC_PI_4;
        let twist = FRAC_PI_4;
        Self {
            parent_pose,
            child_pose,
            target_orientation: Quat::IDENTITY,
            target_velocity: Vec3::ZERO,
            drive_type: DriveType::Target,
            spring: 0.0,
            damping: 0.0,
            internal_compliance: 1.0,
            external_compliance: 1.0,
            tangential_stiffness: 0.0,
            tangential_damping: 0.0,
            swing_limited: false,
            twist_limited: false,
            swing_y_limit: swing,
            swing_z_limit: swing,
            swing_limit_contact_distance: DEFAULT_CONTACT_DISTANCE,
            twist_limit_low: -twist,
            twist_limit_high: twist,
            twist_limit_contact_distance: DEFAULT_CONTACT_DISTANCE,
            tan_q_swing_y: tan_quarter(swing),
            tan_q_swing_z: tan_quarter(swing),
            tan_q_swing_pad: tan_quarter(DEFAULT_CONTACT_DISTANCE),
            tan_q_twist_high: tan_quarter(twist),
            tan_q_twist_low: tan_quarter(-twist),
            tan_q_twist_pad: tan_quarter(DEFAULT_CONTACT_DISTANCE),
            attached: false,
        }
    }

    // limit accessors

    #[must_use]
    pub fn swing_y_limit(&self) -> f32 {
        self.swing_y_limit
    }

    pub fn set_swing_y_limit(&mut self, angle: f32) {
        self.swing_y_limit = angle;
        self.tan_q_swing_y = tan_quarter(angle);
    }

    #[must_use]
    pub fn swing_z_limit(&self) -> f32 {
        self.swing_z_limit
    }

    pub fn set_swing_z_limit(&mut self, angle: f32) {
        self.swing_z_limit = angle;
        self.tan_q_swing_z = tan_quarter(angle);
    }

    #[must_use]
    pub fn swing_limit_contact_distance(&self) -> f32 {
        self.swing_limit_contact_distance
    }

    pub fn set_swing_limit_contact_distance(&mut self, distance: f32) {
        self.swing_limit_contact_distance = distance;
        self.tan_q_swing_pad = tan_quarter(distance);
    }

    #[must_use]
    pub fn twist_limit_low(&self) -> f32 {
        self.twist_limit_low
    }

    pub fn set_twist_limit_low(&mut self, angle: f32) {
        self.twist_limit_low = angle;
        self.tan_q_twist_low = tan_quarter(angle);
    }

    #[must_use]
    pub fn twist_limit_high(&self) -> f32 {
        self.twist_limit_high
    }

    pub fn set_twist_limit_high(&mut self, angle: f32) {
        self.twist_limit_high = angle;
        self.tan_q_twist_high = tan_quarter(angle);
    }

    #[must_use]
    pub fn twist_limit_contact_distance(&self) -> f32 {
        self.twist_limit_contact_distance
    }

    pub fn set_twist_limit_contact_distance(&mut self, distance: f32) {
        self.twist_limit_contact_distance = distance;
        self.tan_q_twist_pad = tan_quarter(distance);
    }

    // cached tangents, read by the external limit solver

    #[must_use]
    pub fn tan_q_swing_y(&self) -> f32 {
        self.tan_q_swing_y
    }

    #[must_use]
    pub fn tan_q_swing_z(&self) -> f32 {
        self.tan_q_swing_z
    }

    #[must_use]
    pub fn tan_q_swing_pad(&self) -> f32 {
        self.tan_q_swing_pad
    }

    #[must_use]
    pub fn tan_q_twist_high(&self) -> f32 {
        self.tan_q_twist_high
    }

    #[must_use]
    pub fn tan_q_twist_low(&self) -> f32 {
        self.tan_q_twist_low
    }

    #[must_use]
    pub fn tan_q_twist_pad(&self) -> f32 {
        self.tan_q_twist_pad
    }

    // simulation binding lifecycle

    /// Bind the joint to a live simulation.
    ///
    /// # Panics
    ///
    /// Panics if the joint is already attached.
    pub fn attach(&mut self) {
        assert!(!self.attached, "joint already has a simulation binding");
        self.attached = true;
    }

    /// Clear the simulation binding. Legal in any order relative to
    /// limit/drive updates, but required before the core is dropped.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Default for ArticulationJointCore {
    fn default() -> Self {
        Self::new(Pose::IDENTITY, Pose::IDENTITY)
    }
}

impl Drop for ArticulationJointCore {
    fn drop(&mut self) {
        // Skip the check while unwinding so a panicking test or caller
        // does not turn into a double panic.
        if !std::thread::panicking() {
            debug_assert!(
                !self.attached,
                "articulation joint core dropped while attached"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn swing_setter_refreshes_quarter_angle_cache() {
        let mut core = ArticulationJointCore::default();
        core.set_swing_y_limit(FRAC_PI_2);
        // tan(pi/8), not tan(pi/4).
        assert_relative_eq!(core.tan_q_swing_y(), (PI / 8.0).tan(), epsilon = 1e-6);
        assert_relative_eq!(core.swing_y_limit(), FRAC_PI_2);
    }

    #[test]
    fn every_angular_setter_keeps_its_cache_in_sync() {
        let mut core = ArticulationJointCore::default();
        core.set_swing_z_limit(0.9);
        core.set_swing_limit_contact_distance(0.2);
        core.set_twist_limit_low(-1.1);
        core.set_twist_limit_high(0.7);
        core.set_twist_limit_contact_distance(0.1);

        assert_relative_eq!(core.tan_q_swing_z(), (0.9_f32 / 4.0).tan());
        assert_relative_eq!(core.tan_q_swing_pad(), (0.2_f32 / 4.0).tan());
        assert_relative_eq!(core.tan_q_twist_low(), (-1.1_f32 / 4.0).tan());
        assert_relative_eq!(core.tan_q_twist_high(), (0.7_f32 / 4.0).tan());
        assert_relative_eq!(core.tan_q_twist_pad(), (0.1_f32 / 4.0).tan());
    }

    #[test]
    fn defaults_have_consistent_caches() {
        let core = ArticulationJointCore::default();
        assert_relative_eq!(core.tan_q_swing_y(), (FRAC_PI_4 / 4.0).tan());
        assert_relative_eq!(core.tan_q_twist_low(), (-FRAC_PI_4 / 4.0).tan());
        assert_relative_eq!(core.tan_q_twist_pad(), (0.05_f32 / 4.0).tan());
        assert!(!core.swing_limited);
        assert!(!core.twist_limited);
    }

    #[test]
    fn attach_detach_round_trips() {
        let mut core = ArticulationJointCore::default();
        assert!(!core.is_attached());
        core.attach();
        assert!(core.is_attached());
        core.detach();
        assert!(!core.is_attached());
    }

    #[test]
    #[should_panic(expected = "already has a simulation binding")]
    fn double_attach_asserts() {
        let mut core = ArticulationJointCore::default();
        core.attach();
        core.attach();
    }
}
