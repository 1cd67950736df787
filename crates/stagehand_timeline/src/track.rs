//! Track runtimes.

use smallvec::SmallVec;
use stagehand_scene::{ActorHandle, Scene};

use crate::clip::{Clip, ClipContext};
use crate::descriptor::{SignalEmitterInfo, TrackInfo, TrackKind};

/// A named point in time on a marker track.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalEmitter {
    pub name: String,
    pub time: f32,
    pub triggered: bool,
}

impl From<&SignalEmitterInfo> for SignalEmitter {
    fn from(info: &SignalEmitterInfo) -> Self {
        Self {
            name: info.name.clone(),
            time: info.time,
            triggered: false,
        }
    }
}

/// Holds signal emitters in descriptor order. Executing it does nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkerTrack {
    pub signal_emitters: Vec<SignalEmitter>,
}

impl MarkerTrack {
    // TODO: fire emitters whose time was crossed since the previous frame and
    // reset `triggered` when the timeline wraps; needs the previous frame time.
    pub fn execute(&self, _time: f32, _scene: &mut Scene) {}
}

/// A track bound to actors by name.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultTrack {
    pub kind: TrackKind,
    pub target_name: String,
    pub target_actors: SmallVec<[ActorHandle; 1]>,
    pub clips: Vec<Clip>,
}

impl DefaultTrack {
    /// First clip, in descriptor order, whose window contains `time`.
    #[must_use]
    pub fn active_clip(&self, time: f32) -> Option<&Clip> {
        self.clips.iter().find(|clip| clip.window().contains(time))
    }

    /// Runs the hooks and the active clip on every bound actor.
    ///
    /// Activation tracks set `enabled` to whether a clip is active; other
    /// tracks leave the actor untouched when no clip is active. Stale handles
    /// are skipped.
    pub fn execute(&self, time: f32, scene: &mut Scene) {
        let active = self.active_clip(time);

        for &handle in &self.target_actors {
            let Some(actor) = scene.get_mut(handle) else {
                continue;
            };
            actor.before_timeline(time);

            if self.kind == TrackKind::ActivationControlTrack {
                actor.enabled = active.is_some();
            } else if let Some(clip) = active {
                clip.execute(ClipContext {
                    actor: handle,
                    time,
                    scene,
                });
            }

            if let Some(actor) = scene.get_mut(handle) {
                actor.after_timeline(time);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Track {
    Marker(MarkerTrack),
    Default(DefaultTrack),
}

impl Track {
    /// Builds a track and resolves its target among `actors` and their
    /// descendants (depth-first, first match).
    ///
    /// A default track without a target name is logged and skipped. An
    /// unresolved target leaves the track inert until a later bind.
    #[must_use]
    pub fn from_info(info: &TrackInfo, actors: &[ActorHandle], scene: &Scene) -> Option<Self> {
        match info.kind {
            TrackKind::MarkerTrack => Some(Self::Marker(MarkerTrack {
                signal_emitters: info.signal_emitters.iter().map(SignalEmitter::from).collect(),
            })),
            TrackKind::AnimationTrack
            | TrackKind::ActivationControlTrack
            | TrackKind::LightControlTrack
            | TrackKind::ObjectMoveAndLookAtTrack
            | TrackKind::Unknown => {
                if matches!(info.kind, TrackKind::Unknown) {
                    log::warn!(
                        "Unknown track type targeting {:?}; treated as a default track",
                        info.target_name
                    );
                }
                let Some(target_name) = info.target_name.clone() else {
                    log::warn!("{:?} has no target name; track skipped", info.kind);
                    return None;
                };

                let mut target_actors = SmallVec::new();
                match scene.find_by_name(actors, &target_name) {
                    Some(handle) => target_actors.push(handle),
                    None => log::warn!(
                        "Track target '{target_name}' not found; track stays inert until bound"
                    ),
                }

                Some(Self::Default(DefaultTrack {
                    kind: info.kind,
                    target_name,
                    target_actors,
                    clips: info.clips.iter().filter_map(Clip::from_info).collect(),
                }))
            }
        }
    }

    pub fn execute(&self, time: f32, scene: &mut Scene) {
        match self {
            Self::Marker(track) => track.execute(time, scene),
            Self::Default(track) => track.execute(time, scene),
        }
    }

    #[must_use]
    pub fn as_default(&self) -> Option<&DefaultTrack> {
        match self {
            Self::Default(track) => Some(track),
            Self::Marker(_) => None,
        }
    }
}
