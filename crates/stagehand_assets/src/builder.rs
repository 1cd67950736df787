//! Builds actors and the director timeline from a [`SerializedScene`].

use stagehand_core::color::hex_color_or_white;
use stagehand_core::{AuthoringRotation, BUILD_INVERTED_LIGHTS, correct_authoring_rotation};
use stagehand_scene::{
    Actor, ActorHandle, ActorKind, Camera, Light, Mesh, MoveAndLookAtController, Scene, Transform,
};
use stagehand_timeline::TimelineRuntime;

use crate::factory::FactoryTables;
use crate::schema::{LightInfo, SceneObject, SerializedScene};

/// Spot light parameters used when the descriptor omits them.
pub const DEFAULT_SPOT_RANGE: f32 = 10.0;
pub const DEFAULT_SPOT_ANGLE: f32 = 45.0;
pub const DEFAULT_INNER_SPOT_ANGLE: f32 = 30.0;

/// Camera parameters the serialized scene does not carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDefaults {
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraDefaults {
    fn default() -> Self {
        Self {
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Result of a build: the top-level actors in descriptor order and the
/// timeline, if the scene has a director.
#[derive(Debug, Clone)]
pub struct SceneStructure {
    pub actors: Vec<ActorHandle>,
    pub timeline: Option<TimelineRuntime>,
}

/// Turns serialized scene objects into actors.
///
/// The actor kind follows component presence, in priority order: mesh
/// (mesh filter and mesh renderer), camera, light, empty. An object whose
/// components cannot produce an actor (non-perspective camera, unknown light
/// type) is logged and skipped together with its whole subtree.
#[derive(Default)]
pub struct SceneBuilder {
    pub factories: FactoryTables,
    pub camera: CameraDefaults,
}

impl SceneBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_factories(mut self, factories: FactoryTables) -> Self {
        self.factories = factories;
        self
    }

    #[must_use]
    pub fn with_camera_defaults(mut self, camera: CameraDefaults) -> Self {
        self.camera = camera;
        self
    }

    /// Inserts every object of `serialized` into `scene`, then builds the
    /// timeline against the new top-level actors.
    pub fn build(&self, serialized: &SerializedScene, scene: &mut Scene) -> SceneStructure {
        let mut actors = Vec::with_capacity(serialized.objects.len());
        for object in &serialized.objects {
            self.build_object(object, None, scene, &mut actors);
        }

        let timeline = build_timeline(serialized, &actors, scene);

        log::debug!(
            "Scene built: {} top-level actor(s), timeline: {}",
            actors.len(),
            timeline.is_some()
        );

        SceneStructure { actors, timeline }
    }

    fn build_object(
        &self,
        object: &SceneObject,
        parent: Option<ActorHandle>,
        scene: &mut Scene,
        roots: &mut Vec<ActorHandle>,
    ) {
        let Some(mut actor) = self.create_actor(object) else {
            log::error!("Could not build actor '{}'; subtree skipped", object.name);
            return;
        };

        if let Some((local_position, target)) = object.move_and_look_at() {
            actor.move_and_look_at = Some(MoveAndLookAtController::new(
                local_position,
                target.map(str::to_owned),
            ));
        }

        let t = &object.transform;
        actor.transform = Transform::from_trs(
            t.local_position.into(),
            correct_authoring_rotation(
                AuthoringRotation::Quaternion(t.local_rotation.into()),
                actor.light_type(),
                BUILD_INVERTED_LIGHTS,
            ),
            t.local_scale.into(),
        );

        let handle = match parent {
            Some(parent) => {
                let handle = scene.insert(actor);
                scene.attach(handle, parent);
                handle
            }
            None => {
                let handle = scene.add_actor(actor);
                roots.push(handle);
                handle
            }
        };

        for child in &object.children {
            self.build_object(child, Some(handle), scene, roots);
        }
    }

    fn create_actor(&self, object: &SceneObject) -> Option<Actor> {
        let name = object.name.as_str();

        if let (Some(mesh_name), Some((material_name, material))) =
            (object.mesh_filter(), object.mesh_renderer())
        {
            let mesh = Mesh {
                geometry: self.factories.geometry(mesh_name),
                material: self.factories.material(material_name, material),
            };
            return Some(Actor::new(name, ActorKind::Mesh(mesh)));
        }

        if let Some((camera_type, fov)) = object.camera() {
            if camera_type != "Perspective" {
                log::error!("Invalid camera type '{camera_type}' on '{name}'");
                return None;
            }
            let camera =
                Camera::new_perspective(fov, self.camera.aspect, self.camera.near, self.camera.far);
            return Some(Actor::new(name, ActorKind::Camera(camera)));
        }

        if let Some(info) = object.light() {
            let light = create_light(info)?;
            return Some(Actor::new(name, ActorKind::Light(light)));
        }

        Some(Actor::empty(name))
    }
}

fn create_light(info: &LightInfo) -> Option<Light> {
    let color = hex_color_or_white(&info.color);
    match info.light_type.as_str() {
        "Directional" => Some(Light::new_directional(color, info.intensity)),
        "Spot" => Some(Light::new_spot(
            color,
            info.intensity,
            info.range.unwrap_or(DEFAULT_SPOT_RANGE),
            info.spot_angle.unwrap_or(DEFAULT_SPOT_ANGLE),
            info.inner_spot_angle.unwrap_or(DEFAULT_INNER_SPOT_ANGLE),
        )),
        other => {
            log::error!("Invalid light type '{other}'");
            None
        }
    }
}

/// Builds the timeline of the scene's director against `actors`, which must
/// already live in `scene`. `None` when the scene has no director.
#[must_use]
pub fn build_timeline(
    serialized: &SerializedScene,
    actors: &[ActorHandle],
    scene: &Scene,
) -> Option<TimelineRuntime> {
    serialized
        .director()
        .map(|director| TimelineRuntime::build(director, actors, scene))
}
