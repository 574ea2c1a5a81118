//! Rigid body core state and kinematic targets.
//!
//! A kinematic body is driven by externally supplied poses rather than
//! by force integration. The target pose is staged here between steps;
//! the solver reads it once per step through [`BodyCore::kinematic_target`]
//! and the step consumes it.

use crate::pose::Pose;
use glam::Vec3;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Rigid body behavior flags.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BodyFlags(u8);

impl BodyFlags {
    pub const NONE: Self = Self(0);
    /// Pose-driven: the solver applies targets instead of integrating
    /// forces.
    pub const KINEMATIC: Self = Self(1);

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for BodyFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for BodyFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for BodyFlags {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Core dynamic state of one rigid body.
#[derive(Clone, Debug)]
pub struct BodyCore {
    pub body_to_world: Pose,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
    pub inverse_mass: f32,
    /// Diagonal of the inverse inertia tensor in body space.
    pub inverse_inertia: Vec3,
    flags: BodyFlags,
    wake_counter: f32,
    kinematic_target: Option<Pose>,
}

impl BodyCore {
    #[must_use]
    pub fn new(body_to_world: Pose) -> Self {
        Self {
            body_to_world,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            inverse_mass: 1.0,
            inverse_inertia: Vec3::ONE,
            flags: BodyFlags::NONE,
            wake_counter: 0.0,
            kinematic_target: None,
        }
    }

    #[must_use]
    pub fn flags(&self) -> BodyFlags {
        self.flags
    }

    /// Update behavior flags. Clearing the kinematic flag drops any
    /// staged target so a later re-flag cannot resurrect a stale pose.
    pub fn set_flags(&mut self, flags: BodyFlags) {
        if !flags.contains(BodyFlags::KINEMATIC) {
            self.kinematic_target = None;
        }
        self.flags = flags;
    }

    #[must_use]
    pub fn is_kinematic(&self) -> bool {
        self.flags.contains(BodyFlags::KINEMATIC)
    }

    /// Stage the pose the solver should move this body to next step and
    /// keep the body awake long enough to get there.
    ///
    /// # Panics
    ///
    /// Panics if the body is not flagged kinematic.
    pub fn set_kinematic_target(&mut self, target: Pose, wake_counter: f32) {
        assert!(
            self.is_kinematic(),
            "kinematic target set on a non-kinematic body"
        );
        self.kinematic_target = Some(target);
        self.wake_up(wake_counter);
    }

    /// The staged target, if the body is kinematic and a target is set
    /// and still valid this step. Anything else reads as "no target":
    /// the body's motion stays externally driven.
    #[must_use]
    pub fn kinematic_target(&self) -> Option<Pose> {
        if self.is_kinematic() {
            self.kinematic_target
        } else {
            None
        }
    }

    /// Flag-and-validity check only, for hot paths that gate on the
    /// target's existence before paying for the pose fetch.
    #[must_use]
    pub fn has_valid_kinematic_target(&self) -> bool {
        self.is_kinematic() && self.kinematic_target.is_some()
    }

    /// Consume the target after the step has applied it.
    pub fn invalidate_kinematic_target(&mut self) {
        self.kinematic_target = None;
    }

    #[must_use]
    pub fn wake_counter(&self) -> f32 {
        self.wake_counter
    }

    pub fn wake_up(&mut self, wake_counter: f32) {
        self.wake_counter = self.wake_counter.max(wake_counter);
    }

    /// Clear all motion state and the wake counter. Values are cleared
    /// before the counter because they decide sleep readiness.
    pub fn put_to_sleep(&mut self) {
        self.linear_velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
        self.wake_counter = 0.0;
    }

    #[must_use]
    pub fn is_sleeping(&self) -> bool {
        self.wake_counter == 0.0
    }
}

impl Default for BodyCore {
    fn default() -> Self {
        Self::new(Pose::IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinematic_body() -> BodyCore {
        let mut body = BodyCore::default();
        body.set_flags(BodyFlags::KINEMATIC);
        body
    }

    #[test]
    fn target_round_trips_on_a_kinematic_body() {
        let mut body = kinematic_body();
        let target = Pose::from_translation(Vec3::new(1.0, 2.0, 3.0));
        body.set_kinematic_target(target, 0.4);

        assert!(body.has_valid_kinematic_target());
        assert_eq!(body.kinematic_target(), Some(target));
        assert!(body.wake_counter() >= 0.4);
    }

    #[test]
    fn non_kinematic_body_never_yields_a_target() {
        let mut body = kinematic_body();
        body.set_kinematic_target(Pose::IDENTITY, 0.4);

        // Clearing the flag hides and drops the stored pose.
        body.set_flags(BodyFlags::NONE);
        assert_eq!(body.kinematic_target(), None);
        assert!(!body.has_valid_kinematic_target());

        // Re-flagging does not resurrect it.
        body.set_flags(BodyFlags::KINEMATIC);
        assert_eq!(body.kinematic_target(), None);
    }

    #[test]
    fn invalidation_consumes_the_target() {
        let mut body = kinematic_body();
        body.set_kinematic_target(Pose::IDENTITY, 0.4);
        body.invalidate_kinematic_target();

        assert!(!body.has_valid_kinematic_target());
        assert_eq!(body.kinematic_target(), None);
        assert!(body.is_kinematic());
    }

    #[test]
    #[should_panic(expected = "non-kinematic body")]
    fn setting_a_target_requires_the_flag() {
        let mut body = BodyCore::default();
        body.set_kinematic_target(Pose::IDENTITY, 0.4);
    }

    #[test]
    fn sleep_clears_motion_then_counter() {
        let mut body = BodyCore::default();
        body.linear_velocity = Vec3::new(1.0, 0.0, 0.0);
        body.angular_velocity = Vec3::new(0.0, 2.0, 0.0);
        body.wake_up(1.0);
        assert!(!body.is_sleeping());

        body.put_to_sleep();
        assert_eq!(body.linear_velocity, Vec3::ZERO);
        assert_eq!(body.angular_velocity, Vec3::ZERO);
        assert!(body.is_sleeping());
    }
}
