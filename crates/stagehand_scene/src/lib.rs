//! Actor tree driven by Stagehand timelines.
//!
//! - [`Scene`]: actor arena and hierarchy
//! - [`Actor`]: one node, its kind (mesh, camera, light, empty) and hooks
//! - [`Transform`]: local TRS
//! - [`ActorBehaviour`]: host logic called around timeline evaluation

pub mod actor;
pub mod behaviour;
pub mod camera;
pub mod light;
pub mod mesh;
pub mod scene;
pub mod transform;

pub use actor::{Actor, ActorKind};
pub use behaviour::{ActorBehaviour, MoveAndLookAtController};
pub use camera::Camera;
pub use light::{DirectionalLight, Light, LightKind, SpotLight};
pub use mesh::{Geometry, Mesh, MeshMaterial};
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct ActorHandle;
}
