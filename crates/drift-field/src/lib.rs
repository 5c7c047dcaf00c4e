//! Drift Field - the animated particle background simulation
//!
//! A fixed-size cloud of points inside a bounding volume, advanced once per
//! render frame by sampling a seeded 3D simplex noise field. Two motion modes:
//! - cumulative drift with toroidal boundary wrapping (the original behavior)
//! - anchored oscillation around each particle's spawn position (bounded by
//!   construction, no wrap needed)
//!
//! The renderer is downstream: it pulls packed point instances and a dirty
//! flag, nothing here touches a GPU.

pub mod field;
pub mod noise;
pub mod rand;
pub mod sizing;

pub use field::{FieldBounds, FieldSettings, MotionMode, ParticleField, PointInstance};
pub use noise::NoiseField;
pub use rand::FieldRng;
pub use sizing::field_height;
