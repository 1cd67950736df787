use std::fmt;

use rustc_hash::FxHashMap;
use stagehand_core::LightType;

use crate::ActorHandle;
use crate::behaviour::{ActorBehaviour, MoveAndLookAtController};
use crate::camera::Camera;
use crate::light::Light;
use crate::mesh::Mesh;
use crate::transform::Transform;

/// What an actor is, decided once when it is built.
#[derive(Debug, Clone)]
pub enum ActorKind {
    Empty,
    Mesh(Mesh),
    Camera(Camera),
    Light(Light),
}

/// A node of the host scene graph as seen by the timeline.
///
/// # Hierarchy
///
/// Parent/child links are maintained by [`crate::Scene::attach`]; the fields
/// are read-only from outside the crate.
pub struct Actor {
    pub name: String,
    pub kind: ActorKind,
    pub transform: Transform,
    /// Toggled by activation tracks.
    pub enabled: bool,

    pub move_and_look_at: Option<MoveAndLookAtController>,
    pub behaviours: Vec<Box<dyn ActorBehaviour>>,
    /// Values received through the generic string-keyed property binder.
    pub properties: FxHashMap<String, f32>,

    pub(crate) parent: Option<ActorHandle>,
    pub(crate) children: Vec<ActorHandle>,
}

impl Actor {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ActorKind) -> Self {
        Self {
            name: name.into(),
            kind,
            transform: Transform::new(),
            enabled: true,
            move_and_look_at: None,
            behaviours: Vec::new(),
            properties: FxHashMap::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, ActorKind::Empty)
    }

    #[must_use]
    pub fn with_behaviour(mut self, behaviour: impl ActorBehaviour) -> Self {
        self.behaviours.push(Box::new(behaviour));
        self
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<ActorHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[ActorHandle] {
        &self.children
    }

    /// `None` unless the actor is a light.
    #[must_use]
    pub fn light_type(&self) -> Option<LightType> {
        match &self.kind {
            ActorKind::Light(light) => Some(light.light_type()),
            _ => None,
        }
    }

    #[must_use]
    pub fn camera_mut(&mut self) -> Option<&mut Camera> {
        match &mut self.kind {
            ActorKind::Camera(camera) => Some(camera),
            _ => None,
        }
    }

    #[must_use]
    pub fn light_mut(&mut self) -> Option<&mut Light> {
        match &mut self.kind {
            ActorKind::Light(light) => Some(light),
            _ => None,
        }
    }

    pub fn before_timeline(&mut self, time: f32) {
        self.each_behaviour(|behaviour, actor| behaviour.before_timeline(actor, time));
    }

    pub fn after_timeline(&mut self, time: f32) {
        self.each_behaviour(|behaviour, actor| behaviour.after_timeline(actor, time));
    }

    /// Records `value` under `name` and forwards it to every behaviour.
    pub fn bind_property(&mut self, name: &str, value: f32) {
        self.properties.insert(name.to_owned(), value);
        self.each_behaviour(|behaviour, actor| behaviour.bind_property(actor, name, value));
    }

    // Takes the behaviours out for the duration of the calls to avoid aliasing
    // `self`; behaviours pushed by a hook are kept after the existing ones.
    fn each_behaviour(&mut self, mut f: impl FnMut(&mut Box<dyn ActorBehaviour>, &mut Actor)) {
        if self.behaviours.is_empty() {
            return;
        }
        let mut behaviours = std::mem::take(&mut self.behaviours);
        for behaviour in &mut behaviours {
            f(behaviour, self);
        }
        behaviours.append(&mut self.behaviours);
        self.behaviours = behaviours;
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("transform", &self.transform)
            .field("enabled", &self.enabled)
            .field("move_and_look_at", &self.move_and_look_at)
            .field("behaviours", &self.behaviours.len())
            .field("properties", &self.properties)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .finish()
    }
}
