//! The injected render capability
//!
//! The core never talks to a GPU. A host renderer (a retained 3D scene with a
//! point-cloud primitive and a post-process compositor) implements this trait
//! and consumes whatever the simulation pushes at it.

use drift_field::PointInstance;

use crate::camera::CameraPose;
use crate::effects::{EffectStage, PointStyle};

/// What the simulation needs from a host renderer
pub trait SceneSurface {
    /// Replace the point-cloud vertex data. Called after ticks that moved
    /// particles and whenever the buffer is recreated.
    fn upload_points(&mut self, instances: &[PointInstance]);

    /// Reposition the render camera
    fn set_camera(&mut self, pose: &CameraPose);

    /// Rebuild the post-process chain. An empty chain means no compositor
    /// passes at all.
    fn set_effects(&mut self, chain: &[EffectStage]);

    /// Update the point material
    fn set_style(&mut self, style: &PointStyle);
}
