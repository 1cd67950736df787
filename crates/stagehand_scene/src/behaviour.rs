//! Actor behaviours: the hooks a timeline calls around each evaluation.

use glam::Vec3;

use crate::actor::Actor;

/// Host-provided logic attached to an actor.
///
/// Every method has an empty default so behaviours only implement what they
/// need. During a hook the actor's own behaviour list is temporarily detached,
/// so `actor.behaviours` is empty for the duration of the call.
pub trait ActorBehaviour: 'static {
    /// Called for every bound actor before a track applies its clip.
    fn before_timeline(&mut self, _actor: &mut Actor, _time: f32) {}

    /// Called for every bound actor after a track applied its clip.
    fn after_timeline(&mut self, _actor: &mut Actor, _time: f32) {}

    /// Receives a property the timeline does not know how to apply itself.
    fn bind_property(&mut self, _actor: &mut Actor, _name: &str, _value: f32) {}
}

/// Moves an actor to a timeline-driven local position and turns it toward a
/// named target.
///
/// Driven by the scene through [`crate::Scene::move_and_look_at`], which
/// resolves the target by name at call time.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveAndLookAtController {
    /// Last local position applied (initially the authored one).
    pub local_position: Vec3,
    /// Name of the actor to face. `None` only moves.
    pub look_at_target: Option<String>,
}

impl MoveAndLookAtController {
    #[must_use]
    pub fn new(local_position: Vec3, look_at_target: Option<String>) -> Self {
        Self {
            local_position,
            look_at_target,
        }
    }
}
