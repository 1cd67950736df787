//! Authoring-tool to runtime rotation reconciliation.
//!
//! Scenes are authored in a left-handed, Y-up tool and played back in a
//! right-handed runtime. Rotations arrive either as raw Euler angles (timeline
//! curves) or as already-exported quaternions (the object transforms), and
//! both pass through [`correct_authoring_rotation`].
//!
//! The set of light types that receive the extra axis inversion differs per
//! call site: the scene builder inverts Spot lights only, the animation clip
//! inverts Spot and Directional lights. Both sets are kept as data so the
//! difference stays visible at the call sites.

use glam::{Quat, Vec3};

/// Light categories that influence rotation correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightType {
    Directional,
    Spot,
}

/// Lights inverted when an animation clip writes a rotation.
pub const ANIMATION_INVERTED_LIGHTS: &[LightType] = &[LightType::Spot, LightType::Directional];

/// Lights inverted when the scene builder applies the authored transform.
// NOTE: narrower than ANIMATION_INVERTED_LIGHTS; open with the data owner.
pub const BUILD_INVERTED_LIGHTS: &[LightType] = &[LightType::Spot];

/// A rotation as it arrives from the authoring tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthoringRotation {
    /// Raw local Euler angles in degrees, as sampled from timeline curves.
    EulerDegrees(Vec3),
    /// A quaternion exported with the object transform.
    Quaternion(Quat),
}

impl AuthoringRotation {
    /// Converts to a runtime quaternion without any light-specific inversion.
    ///
    /// Euler angles are composed as `Ry(-y) * Rx(x) * Rz(-z)`.
    #[must_use]
    pub fn to_runtime(self) -> Quat {
        match self {
            Self::EulerDegrees(deg) => {
                Quat::from_rotation_y(-deg.y.to_radians())
                    * Quat::from_rotation_x(deg.x.to_radians())
                    * Quat::from_rotation_z(-deg.z.to_radians())
            }
            Self::Quaternion(q) => q,
        }
    }
}

/// Inverts the axis of a quaternion: `q * (1, 0, 0, 0)`, a half turn about X.
#[inline]
#[must_use]
pub fn invert_axis(q: Quat) -> Quat {
    q * Quat::from_xyzw(1.0, 0.0, 0.0, 0.0)
}

/// Converts an authored rotation into the runtime convention.
///
/// `light_type` is `None` for actors that are not lights. When it names a
/// type listed in `inverted_lights`, the result is additionally passed through
/// [`invert_axis`].
#[must_use]
pub fn correct_authoring_rotation(
    rotation: AuthoringRotation,
    light_type: Option<LightType>,
    inverted_lights: &[LightType],
) -> Quat {
    let q = rotation.to_runtime();
    match light_type {
        Some(kind) if inverted_lights.contains(&kind) => invert_axis(q),
        _ => q,
    }
}
