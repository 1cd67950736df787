//! Typed property ids.
//!
//! Binding names arrive as strings in the descriptor and are parsed once when
//! a clip is built, so the per-frame path only matches on enums.

use glam::{Vec3, Vec4};

/// Property names written by the authoring exporter.
pub mod names {
    pub const POSITION_X: &str = "m_LocalPosition.x";
    pub const POSITION_Y: &str = "m_LocalPosition.y";
    pub const POSITION_Z: &str = "m_LocalPosition.z";
    pub const ROTATION_X: &str = "localEulerAnglesRaw.x";
    pub const ROTATION_Y: &str = "localEulerAnglesRaw.y";
    pub const ROTATION_Z: &str = "localEulerAnglesRaw.z";
    pub const SCALE_X: &str = "m_LocalScale.x";
    pub const SCALE_Y: &str = "m_LocalScale.y";
    pub const SCALE_Z: &str = "m_LocalScale.z";
    pub const FIELD_OF_VIEW: &str = "field of view";
    pub const BASE_COLOR_R: &str = "material._BaseColor.r";
    pub const BASE_COLOR_G: &str = "material._BaseColor.g";
    pub const BASE_COLOR_B: &str = "material._BaseColor.b";
    pub const BASE_COLOR_A: &str = "material._BaseColor.a";

    pub const LIGHT_COLOR_R: &str = "m_Color.r";
    pub const LIGHT_COLOR_G: &str = "m_Color.g";
    pub const LIGHT_COLOR_B: &str = "m_Color.b";
    pub const LIGHT_COLOR_A: &str = "m_Color.a";
    pub const LIGHT_INTENSITY: &str = "m_Intensity";
    pub const SPOT_RANGE: &str = "m_Range";

    pub const MOVE_POSITION_X: &str = "localPosition.x";
    pub const MOVE_POSITION_Y: &str = "localPosition.y";
    pub const MOVE_POSITION_Z: &str = "localPosition.z";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn write(self, target: &mut Vec3, value: f32) {
        match self {
            Self::X => target.x = value,
            Self::Y => target.y = value,
            Self::Z => target.z = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    R,
    G,
    B,
    A,
}

impl ColorChannel {
    #[inline]
    pub fn write(self, target: &mut Vec4, value: f32) {
        match self {
            Self::R => target.x = value,
            Self::G => target.y = value,
            Self::B => target.z = value,
            Self::A => target.w = value,
        }
    }
}

/// Properties an animation clip can drive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnimationProperty {
    Position(Axis),
    /// Local Euler angle in degrees.
    Rotation(Axis),
    Scale(Axis),
    FieldOfView,
    /// Recognised but not applied to the material yet.
    BaseColor(ColorChannel),
    /// Anything else; forwarded to the actor's generic property binder.
    Custom(String),
}

impl AnimationProperty {
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            names::POSITION_X => Self::Position(Axis::X),
            names::POSITION_Y => Self::Position(Axis::Y),
            names::POSITION_Z => Self::Position(Axis::Z),
            names::ROTATION_X => Self::Rotation(Axis::X),
            names::ROTATION_Y => Self::Rotation(Axis::Y),
            names::ROTATION_Z => Self::Rotation(Axis::Z),
            names::SCALE_X => Self::Scale(Axis::X),
            names::SCALE_Y => Self::Scale(Axis::Y),
            names::SCALE_Z => Self::Scale(Axis::Z),
            names::FIELD_OF_VIEW => Self::FieldOfView,
            names::BASE_COLOR_R => Self::BaseColor(ColorChannel::R),
            names::BASE_COLOR_G => Self::BaseColor(ColorChannel::G),
            names::BASE_COLOR_B => Self::BaseColor(ColorChannel::B),
            names::BASE_COLOR_A => Self::BaseColor(ColorChannel::A),
            other => Self::Custom(other.to_owned()),
        }
    }
}

/// Properties a light control clip can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightProperty {
    Color(ColorChannel),
    Intensity,
    /// Only applied to spot lights.
    SpotRange,
}

impl LightProperty {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            names::LIGHT_COLOR_R => Self::Color(ColorChannel::R),
            names::LIGHT_COLOR_G => Self::Color(ColorChannel::G),
            names::LIGHT_COLOR_B => Self::Color(ColorChannel::B),
            names::LIGHT_COLOR_A => Self::Color(ColorChannel::A),
            names::LIGHT_INTENSITY => Self::Intensity,
            names::SPOT_RANGE => Self::SpotRange,
            _ => return None,
        })
    }
}

/// Properties a move-and-look-at clip can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAndLookAtProperty {
    Position(Axis),
}

impl MoveAndLookAtProperty {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            names::MOVE_POSITION_X => Self::Position(Axis::X),
            names::MOVE_POSITION_Y => Self::Position(Axis::Y),
            names::MOVE_POSITION_Z => Self::Position(Axis::Z),
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_names_parse_to_typed_ids() {
        assert_eq!(
            AnimationProperty::parse("m_LocalPosition.y"),
            AnimationProperty::Position(Axis::Y)
        );
        assert_eq!(
            AnimationProperty::parse("field of view"),
            AnimationProperty::FieldOfView
        );
        assert_eq!(
            AnimationProperty::parse("blend"),
            AnimationProperty::Custom("blend".to_owned())
        );
    }

    #[test]
    fn light_and_move_reject_unknown_names() {
        assert_eq!(LightProperty::parse("m_Range"), Some(LightProperty::SpotRange));
        assert_eq!(LightProperty::parse("m_LocalPosition.x"), None);
        assert_eq!(
            MoveAndLookAtProperty::parse("localPosition.z"),
            Some(MoveAndLookAtProperty::Position(Axis::Z))
        );
        assert_eq!(MoveAndLookAtProperty::parse("m_Intensity"), None);
    }
}
