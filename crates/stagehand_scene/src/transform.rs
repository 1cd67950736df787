use glam::{Affine3A, Mat3, Quat, Vec3};

/// Transform component
///
/// Local position, rotation and scale (TRS) of an actor relative to its parent.
/// Timeline clips write these fields directly; matrices are derived on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn new() -> Self {
        Self::IDENTITY
    }

    #[must_use]
    pub fn from_trs(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Local matrix built from the current TRS fields.
    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Rotates so that -Z points at `target`.
    ///
    /// `target` and `up` are expressed in the parent's space. Degenerate
    /// configurations (target at the current position, or forward parallel to
    /// `up`) leave the rotation untouched.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let to_target = target - self.position;
        if to_target.length_squared() < 1e-8 {
            return;
        }
        let forward = to_target.normalize();

        if forward.cross(up).length_squared() < 1e-4 {
            return;
        }

        let right = forward.cross(up).normalize();
        let new_up = right.cross(forward).normalize();

        let rot_mat = Mat3::from_cols(right, new_up, -forward);
        self.rotation = Quat::from_mat3(&rot_mat);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_at_points_negative_z_to_target() {
        let mut t = Transform::new();
        t.look_at(Vec3::new(0.0, 0.0, -5.0), Vec3::Y);
        let forward = t.rotation * Vec3::NEG_Z;
        assert!(forward.abs_diff_eq(Vec3::NEG_Z, 1e-5));

        t.look_at(Vec3::new(5.0, 0.0, 0.0), Vec3::Y);
        let forward = t.rotation * Vec3::NEG_Z;
        assert!(forward.abs_diff_eq(Vec3::X, 1e-5));
    }

    #[test]
    fn look_at_self_is_ignored() {
        let mut t = Transform::new();
        t.rotation = Quat::from_rotation_y(1.0);
        let before = t.rotation;
        t.look_at(Vec3::ZERO, Vec3::Y);
        assert_eq!(t.rotation, before);
    }
}
