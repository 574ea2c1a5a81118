//! Rigid transforms (position + unit quaternion).
//!
//! The solver works with body and anchor frames as position/orientation
//! pairs rather than 4x4 matrices; composing and inverting them stays in
//! quaternion form.

use glam::{Quat, Vec3};

/// A rigid transform: rotation followed by translation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    #[must_use]
    pub const fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    #[must_use]
    pub const fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    /// Map a point from this frame into the parent frame.
    #[must_use]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.translation + self.rotation * p
    }

    /// Compose: the returned pose maps through `other`, then `self`.
    #[must_use]
    pub fn transform(&self, other: &Pose) -> Pose {
        Pose {
            translation: self.transform_point(other.translation),
            rotation: self.rotation * other.rotation,
        }
    }

    #[must_use]
    pub fn inverse(&self) -> Pose {
        let inv_rotation = self.rotation.conjugate();
        Pose {
            translation: inv_rotation * -self.translation,
            rotation: inv_rotation,
        }
    }

    /// Same pose with the rotation renormalized. Long chains of
    /// compositions drift away from unit length.
    #[must_use]
    pub fn normalized(&self) -> Pose {
        Pose {
            translation: self.translation,
            rotation: self.rotation.normalize(),
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.rotation.is_finite()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
