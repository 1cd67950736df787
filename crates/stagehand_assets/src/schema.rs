//! Serialized scene format.
//!
//! ```text
//! SerializedScene = { o: [SceneObject] }
//! SceneObject     = { n, co: [ComponentInfo], t: { lp, lr, ls }, ch: [SceneObject] }
//! ```
//!
//! Components are tagged by `t`. Unknown component types deserialize to
//! [`ComponentInfo::Unknown`] and are ignored by the builder.

use glam::{Quat, Vec3};
use serde::{Deserialize, Deserializer, Serialize};
use stagehand_core::Result;
use stagehand_timeline::DirectorInfo;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SerializedScene {
    #[serde(rename = "o", default)]
    pub objects: Vec<SceneObject>,
}

impl SerializedScene {
    /// The director of the scene: the last top-level object carrying one.
    #[must_use]
    pub fn director(&self) -> Option<&DirectorInfo> {
        self.objects
            .iter()
            .rev()
            .find_map(|object| {
                object.components.iter().find_map(|component| match component {
                    ComponentInfo::PlayableDirector(director) => Some(director),
                    _ => None,
                })
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    #[serde(rename = "n")]
    pub name: String,
    #[serde(rename = "co", default)]
    pub components: Vec<ComponentInfo>,
    #[serde(rename = "t", default)]
    pub transform: TransformInfo,
    #[serde(rename = "ch", default)]
    pub children: Vec<SceneObject>,
}

impl SceneObject {
    pub(crate) fn mesh_filter(&self) -> Option<&str> {
        self.components.iter().find_map(|c| match c {
            ComponentInfo::MeshFilter { mesh_name } => Some(mesh_name.as_str()),
            _ => None,
        })
    }

    pub(crate) fn mesh_renderer(&self) -> Option<(&str, &MaterialInfo)> {
        self.components.iter().find_map(|c| match c {
            ComponentInfo::MeshRenderer {
                material_name,
                material,
            } => Some((material_name.as_str(), material)),
            _ => None,
        })
    }

    pub(crate) fn camera(&self) -> Option<(&str, f32)> {
        self.components.iter().find_map(|c| match c {
            ComponentInfo::Camera { camera_type, fov } => Some((camera_type.as_str(), *fov)),
            _ => None,
        })
    }

    pub(crate) fn light(&self) -> Option<&LightInfo> {
        self.components.iter().find_map(|c| match c {
            ComponentInfo::Light(light) => Some(light),
            _ => None,
        })
    }

    pub(crate) fn move_and_look_at(&self) -> Option<(Vec3, Option<&str>)> {
        self.components.iter().find_map(|c| match c {
            ComponentInfo::ObjectMoveAndLookAtController {
                local_position,
                look_at_target,
            } => Some(((*local_position).into(), look_at_target.as_deref())),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3Info {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl From<Vec3Info> for Vec3 {
    fn from(v: Vec3Info) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuatInfo {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub z: f32,
    #[serde(default = "one")]
    pub w: f32,
}

impl Default for QuatInfo {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

impl From<QuatInfo> for Quat {
    fn from(q: QuatInfo) -> Self {
        Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

fn one() -> f32 {
    1.0
}

/// Local transform as exported. Missing fields default to identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformInfo {
    #[serde(rename = "lp", default)]
    pub local_position: Vec3Info,
    #[serde(rename = "lr", default)]
    pub local_rotation: QuatInfo,
    #[serde(rename = "ls", default = "unit_scale")]
    pub local_scale: Vec3Info,
}

impl Default for TransformInfo {
    fn default() -> Self {
        Self {
            local_position: Vec3Info::default(),
            local_rotation: QuatInfo::default(),
            local_scale: unit_scale(),
        }
    }
}

fn unit_scale() -> Vec3Info {
    Vec3Info {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    }
}

/// Parameters of the `Lit` material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInfo {
    /// Hex base color.
    #[serde(rename = "c", default)]
    pub color: String,
    #[serde(rename = "m", default)]
    pub metallic: f32,
    #[serde(rename = "r", default = "one")]
    pub roughness: f32,
    /// Exported as a bool or as 0/1.
    #[serde(rename = "rs", default, deserialize_with = "truthy")]
    pub receive_shadow: bool,
}

impl Default for MaterialInfo {
    fn default() -> Self {
        Self {
            color: String::new(),
            metallic: 0.0,
            roughness: 1.0,
            receive_shadow: false,
        }
    }
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Null => false,
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightInfo {
    /// `Directional` or `Spot`.
    #[serde(rename = "l")]
    pub light_type: String,
    #[serde(rename = "i", default)]
    pub intensity: f32,
    /// Hex color.
    #[serde(rename = "c", default)]
    pub color: String,
    #[serde(rename = "r", default, skip_serializing_if = "Option::is_none")]
    pub range: Option<f32>,
    /// Outer cone angle in degrees.
    #[serde(rename = "sa", default, skip_serializing_if = "Option::is_none")]
    pub spot_angle: Option<f32>,
    /// Inner cone angle in degrees.
    #[serde(rename = "isa", default, skip_serializing_if = "Option::is_none")]
    pub inner_spot_angle: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum ComponentInfo {
    MeshFilter {
        #[serde(rename = "mn")]
        mesh_name: String,
    },
    MeshRenderer {
        #[serde(rename = "mn")]
        material_name: String,
        #[serde(rename = "m", default)]
        material: MaterialInfo,
    },
    Camera {
        /// Only `Perspective` is supported.
        #[serde(rename = "ct")]
        camera_type: String,
        /// Vertical field of view in degrees.
        #[serde(rename = "f")]
        fov: f32,
    },
    Light(LightInfo),
    PlayableDirector(DirectorInfo),
    ObjectMoveAndLookAtController {
        #[serde(rename = "lp", default)]
        local_position: Vec3Info,
        #[serde(rename = "tn", default, skip_serializing_if = "Option::is_none")]
        look_at_target: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

/// Parses a serialized scene from JSON bytes.
pub fn parse_scene(bytes: &[u8]) -> Result<SerializedScene> {
    Ok(serde_json::from_slice(bytes)?)
}
