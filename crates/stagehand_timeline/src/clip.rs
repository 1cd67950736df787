//! Clip runtimes.
//!
//! A clip occupies the half-open window `[start, start + duration)` on its
//! track and, while active, writes curve values into the target actor. Curves
//! are sampled at clip-local time `time - start`.

use glam::{Quat, Vec3};
use stagehand_core::{ANIMATION_INVERTED_LIGHTS, AuthoringRotation, correct_authoring_rotation};
use stagehand_scene::{ActorHandle, LightKind, Scene};

use crate::curve::{self, Keyframe};
use crate::descriptor::{BindingInfo, ClipInfo, ClipKind};
use crate::property::{AnimationProperty, LightProperty, MoveAndLookAtProperty};

/// Time range covered by a clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow {
    pub start: f32,
    pub duration: f32,
}

impl ClipWindow {
    #[inline]
    #[must_use]
    pub fn contains(&self, time: f32) -> bool {
        self.start <= time && time < self.start + self.duration
    }

    #[inline]
    #[must_use]
    pub fn local_time(&self, time: f32) -> f32 {
        time - self.start
    }
}

/// A typed property and the curve driving it.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<P> {
    pub property: P,
    pub keyframes: Vec<Keyframe>,
}

impl<P> Binding<P> {
    #[inline]
    #[must_use]
    pub fn sample(&self, local_time: f32) -> f32 {
        curve::evaluate(local_time, &self.keyframes)
    }
}

/// Everything a clip needs to apply itself to one actor.
pub struct ClipContext<'a> {
    pub actor: ActorHandle,
    pub time: f32,
    pub scene: &'a mut Scene,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub window: ClipWindow,
    pub bindings: Vec<Binding<AnimationProperty>>,
}

impl AnimationClip {
    /// Writes the sampled transform, camera and custom properties.
    ///
    /// Transform axes without a binding are reset on every call: position to
    /// zero, scale to one, rotation to identity.
    pub fn execute(&self, ctx: ClipContext<'_>) {
        let Some(actor) = ctx.scene.get_mut(ctx.actor) else {
            return;
        };
        let local_time = self.window.local_time(ctx.time);

        let mut position = Vec3::ZERO;
        let mut scale = Vec3::ONE;
        let mut euler = Vec3::ZERO;
        let mut has_rotation = false;

        for binding in &self.bindings {
            let value = binding.sample(local_time);
            match &binding.property {
                AnimationProperty::Position(axis) => axis.write(&mut position, value),
                AnimationProperty::Rotation(axis) => {
                    axis.write(&mut euler, value);
                    has_rotation = true;
                }
                AnimationProperty::Scale(axis) => axis.write(&mut scale, value),
                AnimationProperty::FieldOfView => {
                    if let Some(camera) = actor.camera_mut() {
                        camera.set_fov(value);
                    }
                }
                AnimationProperty::BaseColor(_) => {}
                AnimationProperty::Custom(name) => actor.bind_property(name, value),
            }
        }

        actor.transform.position = position;
        actor.transform.scale = scale;
        actor.transform.rotation = if has_rotation {
            correct_authoring_rotation(
                AuthoringRotation::EulerDegrees(euler),
                actor.light_type(),
                ANIMATION_INVERTED_LIGHTS,
            )
        } else {
            Quat::IDENTITY
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightControlClip {
    pub window: ClipWindow,
    pub bindings: Vec<Binding<LightProperty>>,
}

impl LightControlClip {
    /// Writes only the channels that have a binding. No-op on non-light actors.
    pub fn execute(&self, ctx: ClipContext<'_>) {
        let Some(light) = ctx.scene.get_mut(ctx.actor).and_then(|a| a.light_mut()) else {
            return;
        };
        let local_time = self.window.local_time(ctx.time);

        for binding in &self.bindings {
            let value = binding.sample(local_time);
            match binding.property {
                LightProperty::Color(channel) => channel.write(&mut light.color, value),
                LightProperty::Intensity => light.intensity = value,
                LightProperty::SpotRange => {
                    if let LightKind::Spot(spot) = &mut light.kind {
                        spot.range = value;
                    }
                }
            }
        }
    }
}

/// Marks the span during which the track's actors are enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationControlClip {
    pub window: ClipWindow,
}

impl ActivationControlClip {
    /// Nothing to apply; the owning track toggles `enabled` from the window.
    pub fn execute(&self, _ctx: ClipContext<'_>) {}
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveAndLookAtClip {
    pub window: ClipWindow,
    pub bindings: Vec<Binding<MoveAndLookAtProperty>>,
}

impl MoveAndLookAtClip {
    /// Samples the local position and hands it to the actor's controller.
    pub fn execute(&self, ctx: ClipContext<'_>) {
        let local_time = self.window.local_time(ctx.time);
        let mut position = Vec3::ZERO;
        for binding in &self.bindings {
            let value = binding.sample(local_time);
            match binding.property {
                MoveAndLookAtProperty::Position(axis) => axis.write(&mut position, value),
            }
        }
        ctx.scene.move_and_look_at(ctx.actor, position);
    }
}

/// A clip of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Clip {
    Animation(AnimationClip),
    LightControl(LightControlClip),
    ActivationControl(ActivationControlClip),
    MoveAndLookAt(MoveAndLookAtClip),
}

impl Clip {
    /// Builds the runtime clip for `info`.
    ///
    /// Returns `None` (and logs) for unknown clip kinds. Bindings a clip kind
    /// cannot apply are logged and dropped here, never at evaluation time.
    #[must_use]
    pub fn from_info(info: &ClipInfo) -> Option<Self> {
        let window = ClipWindow {
            start: info.start,
            duration: info.duration,
        };

        let clip = match info.kind {
            ClipKind::AnimationClip => Self::Animation(AnimationClip {
                window,
                bindings: info
                    .bindings
                    .iter()
                    .map(|b| make_binding(b, AnimationProperty::parse(&b.property)))
                    .collect(),
            }),
            ClipKind::LightControlClip => Self::LightControl(LightControlClip {
                window,
                bindings: parse_bindings(&info.bindings, "LightControlClip", LightProperty::parse),
            }),
            ClipKind::ActivationControlClip => {
                Self::ActivationControl(ActivationControlClip { window })
            }
            ClipKind::ObjectMoveAndLookAtClip => Self::MoveAndLookAt(MoveAndLookAtClip {
                window,
                bindings: parse_bindings(
                    &info.bindings,
                    "ObjectMoveAndLookAtClip",
                    MoveAndLookAtProperty::parse,
                ),
            }),
            ClipKind::Unknown => {
                log::error!(
                    "Unknown clip type at start {}; clip skipped",
                    info.start
                );
                return None;
            }
        };
        Some(clip)
    }

    #[must_use]
    pub fn window(&self) -> ClipWindow {
        match self {
            Self::Animation(clip) => clip.window,
            Self::LightControl(clip) => clip.window,
            Self::ActivationControl(clip) => clip.window,
            Self::MoveAndLookAt(clip) => clip.window,
        }
    }

    pub fn execute(&self, ctx: ClipContext<'_>) {
        match self {
            Self::Animation(clip) => clip.execute(ctx),
            Self::LightControl(clip) => clip.execute(ctx),
            Self::ActivationControl(clip) => clip.execute(ctx),
            Self::MoveAndLookAt(clip) => clip.execute(ctx),
        }
    }
}

fn make_binding<P>(info: &BindingInfo, property: P) -> Binding<P> {
    if info.keyframes.is_empty() {
        log::warn!(
            "Binding '{}' has no keyframes; it evaluates to 0",
            info.property
        );
    }
    Binding {
        property,
        keyframes: info.keyframes.clone(),
    }
}

fn parse_bindings<P>(
    infos: &[BindingInfo],
    clip_kind: &str,
    parse: impl Fn(&str) -> Option<P>,
) -> Vec<Binding<P>> {
    infos
        .iter()
        .filter_map(|info| match parse(&info.property) {
            Some(property) => Some(make_binding(info, property)),
            None => {
                log::warn!(
                    "{clip_kind}: unsupported property '{}' ignored",
                    info.property
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_half_open() {
        let window = ClipWindow {
            start: 1.0,
            duration: 2.0,
        };
        assert!(!window.contains(0.999));
        assert!(window.contains(1.0));
        assert!(window.contains(2.999));
        assert!(!window.contains(3.0));
    }

    #[test]
    fn unknown_light_property_is_dropped_at_build() {
        let info = ClipInfo {
            kind: ClipKind::LightControlClip,
            start: 0.0,
            duration: 1.0,
            bindings: vec![
                BindingInfo {
                    property: "m_Intensity".to_owned(),
                    keyframes: vec![Keyframe::new(0.0, 2.0)],
                },
                BindingInfo {
                    property: "m_LocalScale.x".to_owned(),
                    keyframes: vec![Keyframe::new(0.0, 3.0)],
                },
            ],
        };
        let Some(Clip::LightControl(clip)) = Clip::from_info(&info) else {
            panic!("expected a light control clip");
        };
        assert_eq!(clip.bindings.len(), 1);
        assert_eq!(clip.bindings[0].property, LightProperty::Intensity);
    }

    #[test]
    fn unknown_clip_kind_is_skipped() {
        let info = ClipInfo {
            kind: ClipKind::Unknown,
            start: 0.0,
            duration: 1.0,
            bindings: Vec::new(),
        };
        assert!(Clip::from_info(&info).is_none());
    }
}
