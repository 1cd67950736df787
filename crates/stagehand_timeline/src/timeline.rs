use stagehand_scene::{ActorHandle, Scene};

use crate::descriptor::DirectorInfo;
use crate::track::Track;

/// Runtime of one director timeline.
///
/// Built once per (re)load from a [`DirectorInfo`]; afterwards only the
/// target-actor lists of its tracks change, through [`Self::bind_actors`].
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineRuntime {
    duration: f32,
    tracks: Vec<Track>,
}

impl TimelineRuntime {
    /// Builds every track, resolving target names against `actors` and their
    /// descendants.
    #[must_use]
    pub fn build(info: &DirectorInfo, actors: &[ActorHandle], scene: &Scene) -> Self {
        if info.duration <= 0.0 {
            log::warn!(
                "Timeline duration {} is not positive; playback stays at time 0",
                info.duration
            );
        }

        let tracks: Vec<Track> = info
            .tracks
            .iter()
            .filter_map(|track| Track::from_info(track, actors, scene))
            .collect();

        log::debug!(
            "Timeline built: {} track(s), duration {}s",
            tracks.len(),
            info.duration
        );

        Self {
            duration: info.duration,
            tracks,
        }
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Maps absolute time into `[0, duration)`. Negative times wrap as well.
    #[inline]
    #[must_use]
    pub fn frame_time(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        // `rem_euclid` rounds up to `duration` for tiny negative inputs.
        let wrapped = time.rem_euclid(self.duration);
        if wrapped >= self.duration { 0.0 } else { wrapped }
    }

    /// Evaluates every track, in declaration order, at the looped time.
    pub fn execute(&self, time: f32, scene: &mut Scene) {
        let frame_time = self.frame_time(time);
        for track in &self.tracks {
            track.execute(frame_time, scene);
        }
    }

    /// Appends each of `actors` to every default track whose target name
    /// equals the actor's name.
    ///
    /// Only the given actors are checked, not their descendants. Binding the
    /// same actor twice adds it twice.
    pub fn bind_actors(&mut self, actors: &[ActorHandle], scene: &Scene) {
        for &handle in actors {
            let Some(name) = scene.name_of(handle) else {
                continue;
            };
            for track in &mut self.tracks {
                if let Track::Default(track) = track
                    && track.target_name == name
                {
                    track.target_actors.push(handle);
                }
            }
        }
    }
}
