//! Director timeline runtime.
//!
//! - [`descriptor`]: serialized director, track and clip descriptors
//! - [`curve`]: scalar keyframe sampling
//! - [`property`]: typed property ids parsed from binding names
//! - [`clip`] / [`track`]: runtime clips and tracks
//! - [`TimelineRuntime`]: looped evaluation of all tracks against a [`stagehand_scene::Scene`]
//! - [`TimelineHandle`]: shared slot holding the live timeline

pub mod clip;
pub mod curve;
pub mod descriptor;
pub mod handle;
pub mod property;
pub mod timeline;
pub mod track;

pub use clip::{
    ActivationControlClip, AnimationClip, Binding, Clip, ClipContext, ClipWindow,
    LightControlClip, MoveAndLookAtClip,
};
pub use curve::{Keyframe, evaluate};
pub use descriptor::{
    BindingInfo, ClipInfo, ClipKind, DirectorInfo, SignalEmitterInfo, TrackInfo, TrackKind,
};
pub use handle::TimelineHandle;
pub use property::{AnimationProperty, Axis, ColorChannel, LightProperty, MoveAndLookAtProperty};
pub use timeline::TimelineRuntime;
pub use track::{DefaultTrack, MarkerTrack, SignalEmitter, Track};
