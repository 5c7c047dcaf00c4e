//! Camera pose derived from the persisted camera group

use drift_core::Vec3;
use drift_params::ResolvedGroup;

/// Distance from the scene origin along the viewing axis
pub const VIEW_DISTANCE: f32 = 80.0;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// The persisted camera tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParams {
    pub offset_h: f32,
    pub offset_v: f32,
    pub fov: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            offset_h: 0.0,
            offset_v: 0.0,
            fov: 60.0,
        }
    }
}

impl CameraParams {
    /// Build from the resolved `camera` parameter group
    pub fn from_group(camera: &ResolvedGroup) -> Self {
        Self {
            offset_h: camera.number("offset_h") as f32,
            offset_v: camera.number("offset_v") as f32,
            fov: camera.number("fov") as f32,
        }
    }

    /// Derive the full pose. The camera sits [`VIEW_DISTANCE`] out on the x
    /// axis, shifted by the offsets, and always re-orients toward the scene
    /// origin.
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: Vec3::new(VIEW_DISTANCE, self.offset_v, self.offset_h),
            target: Vec3::ZERO,
            fov: self.fov,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }
}

/// Everything the host renderer needs to place its camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    /// Field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraPose {
    /// Unit vector from camera toward the target
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalized()
    }
}
