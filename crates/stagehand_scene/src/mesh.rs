//! Renderer-agnostic mesh descriptions.
//!
//! The engine does not own GPU resources. A mesh actor only records which
//! primitive and which material parameters the host renderer should use.

use glam::Vec4;

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Box { width: f32, height: f32, depth: f32 },
    Plane { width: f32, height: f32 },
}

impl Geometry {
    #[must_use]
    pub fn unit_box() -> Self {
        Self::Box {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        }
    }
}

/// Parameters of the lit (PBR) material.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshMaterial {
    pub base_color: Vec4,
    pub metallic: f32,
    pub roughness: f32,
    pub receive_shadow: bool,
}

impl Default for MeshMaterial {
    fn default() -> Self {
        Self {
            base_color: Vec4::ONE,
            metallic: 0.0,
            roughness: 1.0,
            receive_shadow: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: MeshMaterial,
}
