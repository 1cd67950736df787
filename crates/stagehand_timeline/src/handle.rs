use std::sync::Arc;

use parking_lot::RwLock;
use stagehand_scene::{ActorHandle, Scene};

use crate::timeline::TimelineRuntime;

/// Shared, swappable reference to the live timeline.
///
/// Cloning the handle shares the slot. [`Self::replace`] swaps the whole
/// runtime at once, so a frame evaluates either the old or the new timeline.
/// The lock is only held to clone or swap the inner `Arc`, never while a
/// timeline executes.
#[derive(Debug, Clone, Default)]
pub struct TimelineHandle {
    inner: Arc<RwLock<Option<Arc<TimelineRuntime>>>>,
}

impl TimelineHandle {
    #[must_use]
    pub fn new(timeline: Option<TimelineRuntime>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(timeline.map(Arc::new))),
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<Arc<TimelineRuntime>> {
        self.inner.read().clone()
    }

    /// Installs `timeline` and returns the previous one.
    pub fn replace(&self, timeline: Option<TimelineRuntime>) -> Option<Arc<TimelineRuntime>> {
        std::mem::replace(&mut *self.inner.write(), timeline.map(Arc::new))
    }

    /// Executes the live timeline. Returns `false` when there is none.
    pub fn execute(&self, time: f32, scene: &mut Scene) -> bool {
        match self.current() {
            Some(timeline) => {
                timeline.execute(time, scene);
                true
            }
            None => false,
        }
    }

    /// Binds `actors` on the live timeline.
    ///
    /// Copies the runtime first if a caller still holds it from [`Self::current`].
    pub fn bind_actors(&self, actors: &[ActorHandle], scene: &Scene) {
        if let Some(timeline) = self.inner.write().as_mut() {
            Arc::make_mut(timeline).bind_actors(actors, scene);
        }
    }
}
