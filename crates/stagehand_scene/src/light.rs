use glam::Vec4;
use stagehand_core::LightType;

#[derive(Debug, Clone, Default)]
pub struct DirectionalLight {}

#[derive(Debug, Clone)]
pub struct SpotLight {
    /// Falloff distance.
    pub range: f32,
    /// Outer cone angle in degrees.
    pub cone_angle: f32,
    /// Inner (penumbra start) cone angle in degrees.
    pub penumbra_angle: f32,
}

#[derive(Debug, Clone)]
pub enum LightKind {
    Directional(DirectionalLight),
    Spot(SpotLight),
}

#[derive(Debug, Clone)]
pub struct Light {
    /// Linear RGBA. Light control clips can drive every channel independently.
    pub color: Vec4,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    #[must_use]
    pub fn new_directional(color: Vec4, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Directional(DirectionalLight {}),
        }
    }

    #[must_use]
    pub fn new_spot(
        color: Vec4,
        intensity: f32,
        range: f32,
        cone_angle: f32,
        penumbra_angle: f32,
    ) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Spot(SpotLight {
                range,
                cone_angle,
                penumbra_angle,
            }),
        }
    }

    #[inline]
    #[must_use]
    pub fn light_type(&self) -> LightType {
        match self.kind {
            LightKind::Directional(_) => LightType::Directional,
            LightKind::Spot(_) => LightType::Spot,
        }
    }

    /// Spot range, `None` for lights without a falloff distance.
    #[must_use]
    pub fn range(&self) -> Option<f32> {
        match &self.kind {
            LightKind::Spot(spot) => Some(spot.range),
            LightKind::Directional(_) => None,
        }
    }
}
