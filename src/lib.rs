#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

//! Stagehand: plays authored director timelines against a scene graph.
//!
//! ```rust,ignore
//! use stagehand::prelude::*;
//!
//! let serialized = parse_scene(&bytes)?;
//! let mut scene = Scene::new();
//! let structure = SceneBuilder::new().build(&serialized, &mut scene);
//! let live = LiveSceneStructure::from(structure);
//!
//! // once per frame
//! live.timeline.execute(elapsed_seconds, &mut scene);
//! ```

pub use glam;
pub use stagehand_assets as assets;
pub use stagehand_scene as scene;
pub use stagehand_timeline as timeline;

pub use stagehand_core::{Error, Result, color, coords};

pub use stagehand_assets::{
    HotReloadConfig, HotReloadCoordinator, LiveSceneStructure, SceneBuilder, SceneSource,
    SceneStructure, SerializedScene, init_hot_reload, load_scene, parse_scene,
};
pub use stagehand_scene::{Actor, ActorBehaviour, ActorHandle, ActorKind, Scene, Transform};
pub use stagehand_timeline::{TimelineHandle, TimelineRuntime};

pub mod prelude {
    pub use stagehand_assets::{
        FactoryTables, HotReloadConfig, HotReloadCoordinator, LiveSceneStructure, SceneBuilder,
        SceneSource, SceneStructure, SerializedScene, init_hot_reload, load_scene, parse_scene,
    };
    pub use stagehand_core::{Error, Result};
    pub use stagehand_scene::{
        Actor, ActorBehaviour, ActorHandle, ActorKind, Camera, Light, LightKind, Mesh, Scene,
        Transform,
    };
    pub use stagehand_timeline::{TimelineHandle, TimelineRuntime};
}
