//! Stagehand core: error types and the coordinate helpers shared by the
//! scene builder and the timeline clips.

pub mod color;
pub mod coords;
pub mod errors;

pub use coords::{
    ANIMATION_INVERTED_LIGHTS, AuthoringRotation, BUILD_INVERTED_LIGHTS, LightType,
    correct_authoring_rotation,
};
pub use errors::{Error, Result};
