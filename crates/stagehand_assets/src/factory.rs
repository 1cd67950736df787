//! Descriptor-keyed geometry and material factories.
//!
//! The builder looks up the mesh filter's `mn` in the geometry table and the
//! mesh renderer's `mn` in the material table. Both tables come with the
//! built-in entries and accept host registrations.

use rustc_hash::FxHashMap;
use stagehand_core::color::hex_color_or_white;
use stagehand_scene::{Geometry, MeshMaterial};

use crate::schema::MaterialInfo;

pub type GeometryFactory = Box<dyn Fn() -> Geometry + Send + Sync>;
pub type MaterialFactory = Box<dyn Fn(&MaterialInfo) -> MeshMaterial + Send + Sync>;

pub struct FactoryTables {
    geometries: FxHashMap<String, GeometryFactory>,
    materials: FxHashMap<String, MaterialFactory>,
}

impl Default for FactoryTables {
    /// `Cube` (unit box) and `Quad` (1x1 plane) geometries, `Lit` material.
    fn default() -> Self {
        let mut tables = Self::empty();
        tables.register_geometry("Cube", Geometry::unit_box);
        tables.register_geometry("Quad", || Geometry::Plane {
            width: 1.0,
            height: 1.0,
        });
        tables.register_material("Lit", lit_material);
        tables
    }
}

impl FactoryTables {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            geometries: FxHashMap::default(),
            materials: FxHashMap::default(),
        }
    }

    pub fn register_geometry(
        &mut self,
        key: impl Into<String>,
        factory: impl Fn() -> Geometry + Send + Sync + 'static,
    ) {
        self.geometries.insert(key.into(), Box::new(factory));
    }

    pub fn register_material(
        &mut self,
        key: impl Into<String>,
        factory: impl Fn(&MaterialInfo) -> MeshMaterial + Send + Sync + 'static,
    ) {
        self.materials.insert(key.into(), Box::new(factory));
    }

    /// Unknown keys fall back to a unit box.
    #[must_use]
    pub fn geometry(&self, key: &str) -> Geometry {
        if let Some(factory) = self.geometries.get(key) {
            return factory();
        }
        log::warn!("Unknown geometry '{key}', using a unit box");
        Geometry::unit_box()
    }

    /// Unknown keys fall back to the default material.
    #[must_use]
    pub fn material(&self, key: &str, info: &MaterialInfo) -> MeshMaterial {
        if let Some(factory) = self.materials.get(key) {
            return factory(info);
        }
        log::debug!("Unknown material '{key}', using the default material");
        MeshMaterial::default()
    }
}

fn lit_material(info: &MaterialInfo) -> MeshMaterial {
    MeshMaterial {
        base_color: hex_color_or_white(&info.color),
        metallic: info.metallic,
        roughness: info.roughness,
        receive_shadow: info.receive_shadow,
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    #[test]
    fn builtin_entries() {
        let tables = FactoryTables::default();
        assert_eq!(tables.geometry("Cube"), Geometry::unit_box());
        assert_eq!(
            tables.geometry("Quad"),
            Geometry::Plane {
                width: 1.0,
                height: 1.0
            }
        );

        let info = MaterialInfo {
            color: "#ff0000".to_owned(),
            metallic: 0.25,
            roughness: 0.5,
            receive_shadow: true,
        };
        let material = tables.material("Lit", &info);
        assert_eq!(material.base_color, Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert!(material.receive_shadow);
    }

    #[test]
    fn unknown_keys_fall_back() {
        let tables = FactoryTables::default();
        assert_eq!(tables.geometry("Torus"), Geometry::unit_box());
        assert_eq!(
            tables.material("Unlit", &MaterialInfo::default()),
            MeshMaterial::default()
        );
    }

    #[test]
    fn registered_entries_override() {
        let mut tables = FactoryTables::default();
        tables.register_geometry("Cube", || Geometry::Box {
            width: 2.0,
            height: 2.0,
            depth: 2.0,
        });
        assert_eq!(
            tables.geometry("Cube"),
            Geometry::Box {
                width: 2.0,
                height: 2.0,
                depth: 2.0
            }
        );
    }
}
