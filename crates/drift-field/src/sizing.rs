//! Viewport-adaptive field height
//!
//! Portrait viewports need a taller particle volume to fill the frame edge to
//! edge; landscape viewports do not. The aspect ratio is captured once at
//! mount — reshaping the window afterward deliberately does not rescale the
//! field mid-session.

/// Field height used for any landscape (aspect >= 1) viewport
pub const LANDSCAPE_HEIGHT: f32 = 50.0;

/// Field height approached as the viewport becomes infinitely tall
pub const PORTRAIT_MAX_HEIGHT: f32 = 90.0;

/// Bounding-volume height for a viewport aspect ratio (width / height).
///
/// Constant at [`LANDSCAPE_HEIGHT`] for aspect >= 1, rising linearly toward
/// [`PORTRAIT_MAX_HEIGHT`] as the aspect ratio approaches zero. Continuous at
/// the aspect = 1 boundary.
pub fn field_height(aspect: f32) -> f32 {
    if aspect >= 1.0 {
        LANDSCAPE_HEIGHT
    } else {
        let a = aspect.max(0.0);
        PORTRAIT_MAX_HEIGHT - (PORTRAIT_MAX_HEIGHT - LANDSCAPE_HEIGHT) * a
    }
}
