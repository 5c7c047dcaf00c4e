//! Drift Core - Foundational types for the drift particle field
//!
//! This crate provides the types the other drift crates depend on:
//! - `Vec3`, `Color` - Spatial and material types
//! - Error types and Result alias

mod error;
mod types;

pub use error::{DriftError, Result};
pub use types::{Color, Vec3};
