//! Serialized form of the director timeline.
//!
//! Field names follow the compact keys the authoring exporter writes:
//!
//! ```text
//! PlayableDirector = { d: totalDuration, ts: [TrackInfo] }
//! TrackInfo        = { t: kind, tn?: targetName, cs?: [ClipInfo], ses?: [{ n, t }] }
//! ClipInfo         = { t: kind, s: start, d: duration, b: [{ n: property, k: [Keyframe] }] }
//! ```
//!
//! Unknown kinds deserialize to an `Unknown` variant instead of failing, so a
//! single unsupported entry never rejects the whole scene.

use serde::{Deserialize, Serialize};

use crate::curve::Keyframe;

/// Payload of the `PlayableDirector` component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorInfo {
    /// Total duration in seconds; timeline time loops over it.
    #[serde(rename = "d")]
    pub duration: f32,
    #[serde(rename = "ts", default)]
    pub tracks: Vec<TrackInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackKind {
    MarkerTrack,
    AnimationTrack,
    ActivationControlTrack,
    LightControlTrack,
    ObjectMoveAndLookAtTrack,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackInfo {
    #[serde(rename = "t")]
    pub kind: TrackKind,
    #[serde(rename = "tn", default, skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    #[serde(rename = "cs", default, skip_serializing_if = "Vec::is_empty")]
    pub clips: Vec<ClipInfo>,
    #[serde(rename = "ses", default, skip_serializing_if = "Vec::is_empty")]
    pub signal_emitters: Vec<SignalEmitterInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalEmitterInfo {
    #[serde(rename = "n")]
    pub name: String,
    #[serde(rename = "t")]
    pub time: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClipKind {
    AnimationClip,
    LightControlClip,
    ActivationControlClip,
    ObjectMoveAndLookAtClip,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipInfo {
    #[serde(rename = "t")]
    pub kind: ClipKind,
    #[serde(rename = "s")]
    pub start: f32,
    #[serde(rename = "d")]
    pub duration: f32,
    #[serde(rename = "b", default)]
    pub bindings: Vec<BindingInfo>,
}

/// One property name and the curve that drives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingInfo {
    #[serde(rename = "n")]
    pub property: String,
    #[serde(rename = "k", default)]
    pub keyframes: Vec<Keyframe>,
}
