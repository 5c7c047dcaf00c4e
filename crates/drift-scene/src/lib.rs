//! Drift Scene - derived render state
//!
//! Camera pose, point material, and the post-process chain are pure functions
//! of the persisted parameter groups — nothing here is independently mutable.
//! The host renderer receives them through the [`SceneSurface`] seam and owns
//! all actual GPU work.

pub mod camera;
pub mod effects;
pub mod surface;

pub use camera::{CameraParams, CameraPose};
pub use effects::{effect_chain, DofParams, EffectStage, PointStyle};
pub use surface::SceneSurface;
