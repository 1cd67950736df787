//! Serialized scene loading for Stagehand.
//!
//! - [`schema`]: the serialized scene format and [`parse_scene`]
//! - [`SceneBuilder`]: actors and timeline from a [`SerializedScene`]
//! - [`FactoryTables`]: descriptor-keyed geometry and material factories
//! - [`SceneSource`]: file, HTTP and host-provided scene readers
//! - [`HotReloadCoordinator`]: development-time timeline reload

pub mod builder;
pub mod config;
pub mod factory;
pub mod hot_reload;
pub mod schema;
pub mod source;

pub use builder::{CameraDefaults, SceneBuilder, SceneStructure, build_timeline};
pub use config::{DEV_ENV_VAR, HotReloadConfig};
pub use factory::{FactoryTables, GeometryFactory, MaterialFactory};
pub use hot_reload::{HotReloadCoordinator, LiveSceneStructure, init_hot_reload};
pub use schema::{
    ComponentInfo, LightInfo, MaterialInfo, SceneObject, SerializedScene, TransformInfo,
    parse_scene,
};
#[cfg(feature = "http")]
pub use source::HttpSceneReader;
pub use source::{FetchCallback, FileSceneReader, SceneReader, SceneSource, load_scene};
